//! reqwest-backed implementation of [`Backend`].

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use tracing::{debug, instrument};

use super::{Backend, BackendError, BackendResult};
use crate::core::config::BackendConfig;

/// HTTP JSON client rooted at the configured base URL.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    base_url: String,
    client: Client,
}

impl HttpBackend {
    /// Create a client for the given backend configuration.
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// The base URL every path is appended to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, path: &str, request: RequestBuilder) -> BackendResult<Value> {
        let response = request
            .send()
            .await
            .map_err(|e| BackendError::request(self.url(path), error_chain(&e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::status(status.as_u16(), path, body));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| BackendError::decode(path, error_chain(&e)))
    }
}

#[async_trait]
impl Backend for HttpBackend {
    #[instrument(skip(self, body))]
    async fn post_json(&self, path: &str, body: Value) -> BackendResult<Value> {
        debug!("POST {}", self.url(path));
        let request = self.client.post(self.url(path)).json(&body);
        self.send(path, request).await
    }

    #[instrument(skip(self))]
    async fn get_json(&self, path: &str) -> BackendResult<Value> {
        debug!("GET {}", self.url(path));
        let request = self.client.get(self.url(path));
        self.send(path, request).await
    }
}

/// Flatten an error and its sources into one line.
///
/// reqwest keeps the interesting part (e.g. "Connection refused") in the
/// source chain rather than the top-level message.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
