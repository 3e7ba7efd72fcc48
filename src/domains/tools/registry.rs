//! Tool Registry - the static table of tool descriptors.
//!
//! The registry is the single source of truth for tool names and input
//! schemas. The dispatcher validates arguments against these schemas and
//! routes only names listed here.

use rmcp::model::Tool;

use super::definitions::{
    AnalyzeJavaCodeTool, GenerateAndExportTestsTool, GenerateJunitTestsTool, GetHealthStatusTool,
};

/// Tool registry - manages all available tools.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names, in listing order.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            AnalyzeJavaCodeTool::NAME,
            GenerateJunitTestsTool::NAME,
            GenerateAndExportTestsTool::NAME,
            GetHealthStatusTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// Deterministic and side-effect free: every call returns the same
    /// descriptors in the same order.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            AnalyzeJavaCodeTool::to_tool(),
            GenerateJunitTestsTool::to_tool(),
            GenerateAndExportTestsTool::to_tool(),
            GetHealthStatusTool::to_tool(),
        ]
    }

    /// Look up a tool descriptor by exact name.
    pub fn find(name: &str) -> Option<Tool> {
        Self::get_all_tools()
            .into_iter()
            .find(|tool| tool.name == name)
    }
}
