//! Java code analysis tool.
//!
//! Sends source code to the backend's `/analyze` endpoint and renders the
//! class structure it reports (methods, fields, complexity) as Markdown.

use std::fmt;

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::Tool,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::common::{bullet_list, decode_response, request_body};
use crate::core::backend::Backend;
use crate::domains::tools::ToolError;

/// Parameters for code analysis.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeJavaCodeParams {
    /// Java source code to analyze.
    #[schemars(description = "Java source code to analyze")]
    pub source_code: String,
}

/// Response contract of `POST /analyze`.
///
/// Every field must be present. `packageName` may be `null` for classes in
/// the default package and renders as `null`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub class_name: String,
    #[serde(deserialize_with = "Option::deserialize")]
    pub package_name: Option<String>,
    pub methods: Vec<MethodInfo>,
    pub fields: Vec<FieldInfo>,
    pub complexity_score: f64,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodInfo {
    pub name: String,
    pub return_type: String,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

/// A method parameter, either a bare string or a `{name, type}` object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Parameter {
    Plain(String),
    Typed {
        name: String,
        #[serde(rename = "type")]
        param_type: String,
    },
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(text) => f.write_str(text),
            Self::Typed { name, param_type } => write!(f, "{} {}", param_type, name),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldInfo {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
}

/// Java code analysis tool implementation.
#[derive(Debug, Clone)]
pub struct AnalyzeJavaCodeTool;

impl AnalyzeJavaCodeTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "analyze_java_code";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Analyze Java source code structure and complexity";

    /// Backend endpoint, relative to the base URL.
    pub const ENDPOINT: &'static str = "/analyze";

    /// Call the backend and render its analysis.
    pub async fn execute(
        params: AnalyzeJavaCodeParams,
        backend: &dyn Backend,
    ) -> Result<String, ToolError> {
        info!("Analyzing {} bytes of Java source", params.source_code.len());

        let response = backend
            .post_json(Self::ENDPOINT, request_body(&params)?)
            .await?;
        let analysis: AnalysisResponse = decode_response(Self::ENDPOINT, response)?;

        Ok(Self::render(&analysis))
    }

    /// Render an analysis as Markdown.
    pub fn render(analysis: &AnalysisResponse) -> String {
        let methods = bullet_list(analysis.methods.iter().map(|m| {
            let params = m
                .parameters
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}({}) -> {}", m.name, params, m.return_type)
        }));

        let fields = bullet_list(
            analysis
                .fields
                .iter()
                .map(|f| format!("{} {}", f.field_type, f.name)),
        );

        format!(
            "## Code Analysis Results\n\n\
             **Class:** {}\n\
             **Package:** {}\n\
             **Methods:** {}\n\
             **Fields:** {}\n\
             **Complexity:** {}\n\n\
             ### Methods:\n{}\n\n\
             ### Fields:\n{}\n\n\
             ### Suggestions:\n{}",
            analysis.class_name,
            analysis.package_name.as_deref().unwrap_or("null"),
            analysis.methods.len(),
            analysis.fields.len(),
            analysis.complexity_score,
            methods,
            fields,
            bullet_list(&analysis.suggestions),
        )
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<AnalyzeJavaCodeParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_analysis() -> AnalysisResponse {
        serde_json::from_value(json!({
            "className": "Calculator",
            "packageName": "com.example",
            "methods": [
                {
                    "name": "add",
                    "returnType": "int",
                    "parameters": [
                        { "name": "a", "type": "int" },
                        { "name": "b", "type": "int" }
                    ],
                    "isPublic": true,
                    "isStatic": false
                },
                { "name": "reset", "returnType": "void", "parameters": [] }
            ],
            "fields": [{ "name": "memory", "type": "int", "isPrivate": true }],
            "complexityScore": 2.5,
            "suggestions": ["Add null checks"]
        }))
        .unwrap()
    }

    #[test]
    fn test_render_analysis() {
        let text = AnalyzeJavaCodeTool::render(&sample_analysis());
        assert!(text.starts_with("## Code Analysis Results"));
        assert!(text.contains("**Class:** Calculator"));
        assert!(text.contains("**Package:** com.example"));
        assert!(text.contains("**Methods:** 2"));
        assert!(text.contains("**Fields:** 1"));
        assert!(text.contains("**Complexity:** 2.5"));
        assert!(text.contains("- add(int a, int b) -> int"));
        assert!(text.contains("- reset() -> void"));
        assert!(text.contains("- int memory"));
        assert!(text.contains("### Suggestions:\n- Add null checks"));
    }

    #[test]
    fn test_plain_string_parameters() {
        let analysis: AnalysisResponse = serde_json::from_value(json!({
            "className": "A",
            "packageName": "p",
            "methods": [{ "name": "f", "returnType": "String", "parameters": ["int x", "long y"] }],
            "fields": [],
            "complexityScore": 1,
            "suggestions": []
        }))
        .unwrap();

        let text = AnalyzeJavaCodeTool::render(&analysis);
        assert!(text.contains("- f(int x, long y) -> String"));
        assert!(text.contains("**Complexity:** 1"));
    }

    #[test]
    fn test_null_package_renders_visibly() {
        let analysis: AnalysisResponse = serde_json::from_value(json!({
            "className": "A",
            "packageName": null,
            "methods": [],
            "fields": [],
            "complexityScore": 0,
            "suggestions": []
        }))
        .unwrap();

        assert!(AnalyzeJavaCodeTool::render(&analysis).contains("**Package:** null"));
    }

    #[test]
    fn test_absent_package_is_shape_error() {
        let err = decode_response::<AnalysisResponse>(
            AnalyzeJavaCodeTool::ENDPOINT,
            json!({
                "className": "A",
                "methods": [],
                "fields": [],
                "complexityScore": 0,
                "suggestions": []
            }),
        )
        .unwrap_err();
        assert!(err.to_string().contains("packageName"));
    }

    #[test]
    fn test_missing_suggestions_is_shape_error() {
        let err = decode_response::<AnalysisResponse>(
            AnalyzeJavaCodeTool::ENDPOINT,
            json!({
                "className": "A",
                "packageName": "p",
                "methods": [],
                "fields": [],
                "complexityScore": 3
            }),
        )
        .unwrap_err();
        assert!(err.to_string().contains("missing field `suggestions`"));
    }

    #[test]
    fn test_missing_methods_is_shape_error() {
        let err = decode_response::<AnalysisResponse>(
            AnalyzeJavaCodeTool::ENDPOINT,
            json!({ "className": "A", "fields": [] }),
        )
        .unwrap_err();
        assert!(err.to_string().contains("methods"));
    }

    #[test]
    fn test_params_require_source_code() {
        let schema = AnalyzeJavaCodeTool::to_tool().input_schema;
        assert_eq!(schema["required"], json!(["sourceCode"]));
    }
}
