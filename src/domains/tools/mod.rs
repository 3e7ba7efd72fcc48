//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Each tool forwards one request to the test generator service and renders
//! the JSON answer as Markdown text.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `registry.rs` - Static table of tool descriptors
//! - `dispatcher.rs` - Routing, argument validation and error-to-text conversion
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with params, response, execute() and render()
//! 2. Export in `definitions/mod.rs`
//! 3. Register in `registry.rs`
//! 4. Add the route in `dispatcher.rs`

pub mod definitions;
mod dispatcher;
mod error;
mod registry;

#[cfg(test)]
pub(crate) mod testing;

pub use dispatcher::{ToolDispatcher, into_call_result};
pub use error::ToolError;
pub use registry::ToolRegistry;
