//! Tool definitions module.
//!
//! One file per tool. Each tool exposes its `NAME`, `DESCRIPTION` and backend
//! `ENDPOINT`, a typed params struct whose JSON schema is the tool's input
//! contract, a typed response struct, `execute()` and `render()`.

pub mod analyze;
pub mod common;
pub mod export;
pub mod generate;
pub mod health;

pub use analyze::{AnalysisResponse, AnalyzeJavaCodeParams, AnalyzeJavaCodeTool};
pub use common::{CoverageLevel, TestType};
pub use export::{ExportResponse, GenerateAndExportTestsParams, GenerateAndExportTestsTool};
pub use generate::{GenerateJunitTestsParams, GenerateJunitTestsTool, GenerationResponse};
pub use health::{GetHealthStatusParams, GetHealthStatusTool, HealthResponse};
