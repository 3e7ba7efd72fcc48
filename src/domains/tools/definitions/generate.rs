//! JUnit test generation tool.
//!
//! Forwards the class to `/generate` and returns the generated test class
//! inside a fenced Java block.

use rmcp::{handler::server::tool::cached_schema_for_type, model::Tool};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::common::{
    CoverageLevel, TestType, bullet_list, comma_list, decode_response, request_body,
};
use crate::core::backend::Backend;
use crate::domains::tools::ToolError;

/// Parameters for test generation. Serialized as-is into the request body.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateJunitTestsParams {
    #[schemars(description = "Java source code to generate tests for")]
    pub source_code: String,

    #[schemars(description = "Name of the class")]
    pub class_name: String,

    #[schemars(description = "Package name for the class")]
    pub package_name: String,

    #[serde(default)]
    #[schemars(description = "Type of tests to generate")]
    pub test_type: TestType,

    #[serde(default)]
    #[schemars(description = "Level of test coverage")]
    pub coverage_level: CoverageLevel,
}

/// Response contract of `POST /generate`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResponse {
    pub generated_test_code: String,
    pub test_methods: Vec<String>,
    pub test_class_name: String,
    pub estimated_coverage: f64,
    pub suggestions: Vec<String>,
}

/// JUnit test generation tool implementation.
#[derive(Debug, Clone)]
pub struct GenerateJunitTestsTool;

impl GenerateJunitTestsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "generate_junit_tests";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Generate JUnit tests for Java code with AI";

    /// Backend endpoint, relative to the base URL.
    pub const ENDPOINT: &'static str = "/generate";

    /// Call the backend and render the generated test class.
    pub async fn execute(
        params: GenerateJunitTestsParams,
        backend: &dyn Backend,
    ) -> Result<String, ToolError> {
        info!(
            "Generating {} tests ({}) for {}.{}",
            params.test_type.as_str(),
            params.coverage_level.as_str(),
            params.package_name,
            params.class_name
        );

        let response = backend
            .post_json(Self::ENDPOINT, request_body(&params)?)
            .await?;
        let generated: GenerationResponse = decode_response(Self::ENDPOINT, response)?;

        Ok(Self::render(&generated))
    }

    /// Render a generation result as Markdown.
    pub fn render(result: &GenerationResponse) -> String {
        format!(
            "## Generated JUnit Tests\n\n\
             **Test Class:** {}\n\
             **Estimated Coverage:** {}%\n\
             **Test Methods:** {}\n\n\
             ### Generated Test Code:\n\
             ```java\n{}\n```\n\n\
             ### Suggestions:\n{}",
            result.test_class_name,
            result.estimated_coverage,
            comma_list(&result.test_methods),
            result.generated_test_code,
            bullet_list(&result.suggestions),
        )
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GenerateJunitTestsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
