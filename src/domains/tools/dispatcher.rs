//! Tool Dispatcher - routes tool calls and normalizes their results.
//!
//! [`ToolDispatcher::call_tool`] never fails: unknown names, invalid
//! arguments, backend outages and malformed backend responses all come back
//! as a [`CallToolResult`] whose single text item reads `Error: <message>`.
//!
//! The dispatcher holds no per-call state, so overlapping calls from the
//! transport complete independently in any order.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, JsonObject, Tool};
use tracing::{info, instrument, warn};

use super::ToolError;
use super::definitions::{
    AnalyzeJavaCodeTool, GenerateAndExportTestsTool, GenerateJunitTestsTool, GetHealthStatusTool,
    common::{parse_arguments, validate_required},
};
use super::registry::ToolRegistry;
use crate::core::backend::Backend;

/// Routes tool calls to their handlers against a shared backend.
#[derive(Clone)]
pub struct ToolDispatcher {
    backend: Arc<dyn Backend>,
}

impl ToolDispatcher {
    /// Create a dispatcher that sends every backend request through `backend`.
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self { backend }
    }

    /// The registry contents, verbatim.
    pub fn list_tools(&self) -> Vec<Tool> {
        ToolRegistry::get_all_tools()
    }

    /// Call a tool by name. Always returns a well-formed result.
    #[instrument(skip(self, arguments))]
    pub async fn call_tool(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        info!("Calling tool: {}", name);
        let result = self.dispatch(name, arguments.unwrap_or_default()).await;
        into_call_result(name, result)
    }

    async fn dispatch(&self, name: &str, arguments: JsonObject) -> Result<String, ToolError> {
        let tool = ToolRegistry::find(name).ok_or_else(|| ToolError::not_found(name))?;
        validate_required(&tool.input_schema, &arguments)?;

        let backend = self.backend.as_ref();
        match name {
            AnalyzeJavaCodeTool::NAME => {
                AnalyzeJavaCodeTool::execute(parse_arguments(arguments)?, backend).await
            }
            GenerateJunitTestsTool::NAME => {
                GenerateJunitTestsTool::execute(parse_arguments(arguments)?, backend).await
            }
            GenerateAndExportTestsTool::NAME => {
                GenerateAndExportTestsTool::execute(parse_arguments(arguments)?, backend).await
            }
            GetHealthStatusTool::NAME => {
                GetHealthStatusTool::execute(parse_arguments(arguments)?, backend).await
            }
            _ => Err(ToolError::not_found(name)),
        }
    }
}

/// Convert a handler outcome into the protocol result envelope.
///
/// Success and failure both carry exactly one text item; failures are
/// flagged with `is_error` and prefixed with `Error: `.
pub fn into_call_result(name: &str, result: Result<String, ToolError>) -> CallToolResult {
    match result {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(e) => {
            warn!("Tool {} failed: {}", name, e);
            CallToolResult::error(vec![Content::text(format!("Error: {}", e))])
        }
    }
}
