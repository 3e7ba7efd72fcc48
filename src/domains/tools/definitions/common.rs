//! Shared pieces used by the test generator tools.
//!
//! This module holds the enumerated generation parameters, argument and
//! response decoding helpers, and the small Markdown formatting helpers
//! every tool renders with.

use std::fmt::Display;

use rmcp::model::JsonObject;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::domains::tools::ToolError;

/// Style of tests the backend should generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TestType {
    #[default]
    UnitTest,
    IntegrationTest,
    MockTest,
}

impl TestType {
    pub const ALL: [TestType; 3] = [Self::UnitTest, Self::IntegrationTest, Self::MockTest];

    /// Wire name, e.g. `UNIT_TEST`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnitTest => "UNIT_TEST",
            Self::IntegrationTest => "INTEGRATION_TEST",
            Self::MockTest => "MOCK_TEST",
        }
    }
}

/// How deep the generated tests should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CoverageLevel {
    Basic,
    #[default]
    Comprehensive,
    EdgeCases,
}

impl CoverageLevel {
    pub const ALL: [CoverageLevel; 3] = [Self::Basic, Self::Comprehensive, Self::EdgeCases];

    /// Wire name, e.g. `COMPREHENSIVE`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "BASIC",
            Self::Comprehensive => "COMPREHENSIVE",
            Self::EdgeCases => "EDGE_CASES",
        }
    }
}

/// Check `arguments` against the `required` list of a tool's input schema.
///
/// A field that is present but `null` counts as missing.
pub fn validate_required(schema: &JsonObject, arguments: &JsonObject) -> Result<(), ToolError> {
    let Some(required) = schema.get("required").and_then(Value::as_array) else {
        return Ok(());
    };

    for field in required.iter().filter_map(Value::as_str) {
        match arguments.get(field) {
            None | Some(Value::Null) => {
                return Err(ToolError::invalid_arguments(format!(
                    "missing required field '{}'",
                    field
                )));
            }
            Some(_) => {}
        }
    }

    Ok(())
}

/// Deserialize tool arguments into a typed params struct.
pub fn parse_arguments<P: DeserializeOwned>(arguments: JsonObject) -> Result<P, ToolError> {
    serde_json::from_value(Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Build a JSON request body from a params struct.
pub fn request_body<P: Serialize>(params: &P) -> Result<Value, ToolError> {
    serde_json::to_value(params).map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Decode a backend response into its typed contract.
///
/// A missing field comes back as e.g. "missing field `className`".
pub fn decode_response<T: DeserializeOwned>(endpoint: &str, value: Value) -> Result<T, ToolError> {
    serde_json::from_value(value).map_err(|e| ToolError::unexpected_response(endpoint, e.to_string()))
}

/// Render items as a Markdown bullet list, one `- item` per line.
pub fn bullet_list<I, T>(items: I) -> String
where
    I: IntoIterator<Item = T>,
    T: Display,
{
    items
        .into_iter()
        .map(|item| format!("- {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Join items with `", "`.
pub fn comma_list<I, T>(items: I) -> String
where
    I: IntoIterator<Item = T>,
    T: Display,
{
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
