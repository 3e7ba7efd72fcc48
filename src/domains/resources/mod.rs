//! Resources domain module.
//!
//! Resources are read-only documents clients can fetch by URI. This server
//! publishes a single static one describing the generation parameters.

mod error;
mod templates;

use rmcp::model::{AnnotateAble, RawResource, ReadResourceResult, Resource};
use tracing::warn;

pub use error::ResourceError;
pub use templates::TemplatesResource;

/// All resources this server publishes.
pub fn list_resources() -> Vec<Resource> {
    let mut raw = RawResource::new(TemplatesResource::URI, TemplatesResource::NAME);
    raw.description = Some(TemplatesResource::DESCRIPTION.to_string());
    raw.mime_type = Some(TemplatesResource::MIME_TYPE.to_string());

    vec![raw.no_annotation()]
}

/// Read a resource by exact URI.
pub fn read_resource(uri: &str) -> Result<ReadResourceResult, ResourceError> {
    match uri {
        TemplatesResource::URI => Ok(ReadResourceResult {
            contents: vec![TemplatesResource::read()?],
        }),
        _ => {
            warn!("Unknown resource requested: {}", uri);
            Err(ResourceError::not_found(uri))
        }
    }
}
