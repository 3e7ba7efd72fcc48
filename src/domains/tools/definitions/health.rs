//! Backend health check tool.

use rmcp::{handler::server::tool::cached_schema_for_type, model::Tool};
use schemars::JsonSchema;
use serde::Deserialize;

use super::common::decode_response;
use crate::core::backend::Backend;
use crate::domains::tools::ToolError;

/// The health check takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetHealthStatusParams {}

/// Response contract of `GET /health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Health check tool implementation.
#[derive(Debug, Clone)]
pub struct GetHealthStatusTool;

impl GetHealthStatusTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_health_status";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Check the health status of the AI Test Generator service";

    /// Backend endpoint, relative to the base URL.
    pub const ENDPOINT: &'static str = "/health";

    pub async fn execute(
        _params: GetHealthStatusParams,
        backend: &dyn Backend,
    ) -> Result<String, ToolError> {
        let response = backend.get_json(Self::ENDPOINT).await?;
        let health: HealthResponse = decode_response(Self::ENDPOINT, response)?;

        Ok(Self::render(&health))
    }

    pub fn render(health: &HealthResponse) -> String {
        format!(
            "## Service Health Status\n\n\
             **Status:** {}\n\
             **Service:** {}\n\
             **Version:** {}\n\n\
             The AI Test Generator service is running and ready to generate tests!",
            health.status, health.service, health.version
        )
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetHealthStatusParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
