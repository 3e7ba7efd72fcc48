//! Transport layer for the MCP server.
//!
//! The server speaks MCP over standard input/output. Stdout belongs to the
//! protocol framing; diagnostics go to stderr through `tracing`.

mod config;
mod error;
mod service;

pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;
