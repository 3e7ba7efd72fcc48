//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the tool dispatcher and the resources domain.
//!
//! Tool calls never surface as protocol errors: the dispatcher already
//! folds every failure into an error result. Only resource lookups for
//! unknown URIs answer with `ErrorData`.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::backend::{Backend, HttpBackend};
use super::config::Config;
use crate::domains::{resources, tools::ToolDispatcher};

/// The main MCP server handler.
///
/// Cheap to clone; clones share the configuration and backend client.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Routes tool calls to the backend.
    dispatcher: ToolDispatcher,
}

impl McpServer {
    /// Create a new MCP server talking HTTP to the configured backend.
    pub fn new(config: Config) -> Self {
        let backend = Arc::new(HttpBackend::new(&config.backend));
        Self::with_backend(config, backend)
    }

    /// Create a server with an explicit backend implementation.
    pub fn with_backend(config: Config, backend: Arc<dyn Backend>) -> Self {
        Self {
            config: Arc::new(config),
            dispatcher: ToolDispatcher::new(backend),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the tool dispatcher.
    pub fn dispatcher(&self) -> &ToolDispatcher {
        &self.dispatcher
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Generates JUnit tests for Java code through the AI Test Generator service. \
                 Use analyze_java_code to inspect a class, generate_junit_tests to get test \
                 source back, generate_and_export_tests to write tests into a project, and \
                 get_health_status to check the service."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _request, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.dispatcher.list_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, request, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        Ok(self
            .dispatcher
            .call_tool(&request.name, request.arguments)
            .await)
    }

    #[instrument(skip(self, _request, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        Ok(ListResourcesResult {
            resources: resources::list_resources(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        resources::read_resource(&request.uri)
            .map_err(|e| McpError::resource_not_found(e.to_string(), None))
    }
}
