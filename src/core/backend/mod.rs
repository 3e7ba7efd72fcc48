//! Client for the remote test generator REST service.
//!
//! Tools talk to the backend through the [`Backend`] trait so the dispatcher
//! can be driven by an in-process stub in tests. [`HttpBackend`] is the real
//! implementation, built once at startup from [`BackendConfig`].
//!
//! Every call is exactly one HTTP round trip. There are no retries and no
//! timeout beyond the HTTP client default.
//!
//! [`BackendConfig`]: crate::core::config::BackendConfig

mod error;
mod http;

use async_trait::async_trait;
use serde_json::Value;

pub use error::{BackendError, BackendResult};
pub use http::HttpBackend;

/// JSON request/response primitives against a single base URL.
#[async_trait]
pub trait Backend: Send + Sync {
    /// POST `body` as JSON to `path` and parse the JSON response.
    async fn post_json(&self, path: &str, body: Value) -> BackendResult<Value>;

    /// GET `path` and parse the JSON response.
    async fn get_json(&self, path: &str) -> BackendResult<Value>;
}
