//! In-process stand-in for the test generator service.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::core::backend::{Backend, BackendError, BackendResult};

/// One request seen by [`StubBackend`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

enum Reply {
    Json(Value),
    Unreachable(String),
    Status(u16, String),
}

/// Backend that answers every request with one canned reply and records
/// what it was asked.
pub struct StubBackend {
    reply: Reply,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubBackend {
    /// Answer every request with `body`.
    pub fn json(body: Value) -> Self {
        Self::with_reply(Reply::Json(body))
    }

    /// Fail every request as if the service could not be reached.
    pub fn unreachable(message: impl Into<String>) -> Self {
        Self::with_reply(Reply::Unreachable(message.into()))
    }

    /// Answer every request with a non-success status.
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::with_reply(Reply::Status(status, body.into()))
    }

    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> Option<RecordedCall> {
        self.calls.lock().unwrap().last().cloned()
    }

    fn answer(&self, method: &'static str, path: &str, body: Option<Value>) -> BackendResult<Value> {
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            path: path.to_string(),
            body,
        });

        match &self.reply {
            Reply::Json(value) => Ok(value.clone()),
            Reply::Unreachable(message) => Err(BackendError::request(
                format!("http://stub{}", path),
                message.clone(),
            )),
            Reply::Status(status, body) => Err(BackendError::status(*status, path, body.clone())),
        }
    }
}

#[async_trait]
impl Backend for StubBackend {
    async fn post_json(&self, path: &str, body: Value) -> BackendResult<Value> {
        self.answer("POST", path, Some(body))
    }

    async fn get_json(&self, path: &str) -> BackendResult<Value> {
        self.answer("GET", path, None)
    }
}
