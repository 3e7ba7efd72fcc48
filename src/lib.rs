//! Test Generator MCP Server Library
//!
//! Exposes a remote JUnit test generator service as Model Context Protocol
//! tools. Each tool call is forwarded as one JSON request to the service and
//! the answer is rendered as Markdown text.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the backend HTTP client, the
//!   MCP server handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: tool registry, dispatcher and per-tool definitions
//!   - **resources**: static documents readable by clients
//!
//! # Example
//!
//! ```rust,no_run
//! use testgen_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let transport = TransportService::new(config.transport.clone());
//!     transport.run(McpServer::new(config)).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
