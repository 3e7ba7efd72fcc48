//! Generation templates resource.
//!
//! Lists the accepted test types and coverage levels together with sample
//! arguments for the generation tools, so clients can discover valid values
//! without calling the backend.

use rmcp::model::ResourceContents;
use serde_json::json;

use super::ResourceError;
use crate::domains::tools::definitions::{
    CoverageLevel, GenerateAndExportTestsTool, GenerateJunitTestsTool, TestType,
};

const SAMPLE_SOURCE: &str = "public class Calculator {\n    public int add(int a, int b) {\n        return a + b;\n    }\n}";

/// Static resource describing generation parameters.
pub struct TemplatesResource;

impl TemplatesResource {
    pub const URI: &'static str = "testgen://templates";
    pub const NAME: &'static str = "Test Generation Templates";
    pub const DESCRIPTION: &'static str =
        "Accepted test types, coverage levels and sample arguments for the generation tools";
    pub const MIME_TYPE: &'static str = "application/json";

    pub fn read() -> Result<ResourceContents, ResourceError> {
        let sample = json!({
            "sourceCode": SAMPLE_SOURCE,
            "className": "Calculator",
            "packageName": "com.example",
            "testType": TestType::default(),
            "coverageLevel": CoverageLevel::default(),
        });

        let mut export_sample = sample.clone();
        export_sample["projectPath"] = json!("/path/to/your/java/project");

        let mut samples = serde_json::Map::new();
        samples.insert(GenerateJunitTestsTool::NAME.to_string(), sample);
        samples.insert(GenerateAndExportTestsTool::NAME.to_string(), export_sample);

        let body = json!({
            "testTypes": TestType::ALL,
            "coverageLevels": CoverageLevel::ALL,
            "samples": samples,
        });

        let text = serde_json::to_string_pretty(&body)
            .map_err(|e| ResourceError::internal(e.to_string()))?;
        Ok(ResourceContents::text(text, Self::URI))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn read_json() -> Value {
        match TemplatesResource::read().unwrap() {
            ResourceContents::TextResourceContents { text, .. } => {
                serde_json::from_str(&text).unwrap()
            }
            other => panic!("expected text contents, got {other:?}"),
        }
    }

    #[test]
    fn test_lists_enum_values() {
        let body = read_json();
        assert_eq!(
            body["testTypes"],
            json!(["UNIT_TEST", "INTEGRATION_TEST", "MOCK_TEST"])
        );
        assert_eq!(
            body["coverageLevels"],
            json!(["BASIC", "COMPREHENSIVE", "EDGE_CASES"])
        );
    }

    #[test]
    fn test_samples_use_defaults() {
        let body = read_json();
        let sample = &body["samples"]["generate_junit_tests"];
        assert_eq!(sample["testType"], "UNIT_TEST");
        assert_eq!(sample["coverageLevel"], "COMPREHENSIVE");
        assert!(body["samples"]["generate_and_export_tests"]["projectPath"].is_string());
    }
}
