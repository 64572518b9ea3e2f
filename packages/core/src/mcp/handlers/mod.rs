//! MCP Request Handlers
//!
//! One module per tool domain (system, database, user, node, webhooks) plus
//! the protocol-level handlers (initialize, tools, resources). Shared
//! plumbing for parameter parsing, space-id resolution and transport calls
//! lives here.

pub mod database;
pub mod initialize;
pub mod node;
pub mod resources;
pub mod system;
pub mod tools;
pub mod user;
pub mod webhooks;

use crate::api::{ApiRequest, BikaTransport};
use crate::config::BikaConfig;
use crate::mcp::server::McpServices;
use crate::mcp::types::MCPError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parse tool arguments into a typed params struct.
pub(crate) fn parse_params<P: DeserializeOwned>(params: Value) -> Result<P, MCPError> {
    serde_json::from_value(params)
        .map_err(|e| MCPError::invalid_params(format!("Invalid parameters: {}", e)))
}

/// Resolve the effective space id (explicit argument or configured default).
pub(crate) fn resolve_space(
    config: &BikaConfig,
    explicit: Option<&str>,
) -> Result<String, MCPError> {
    config
        .resolve_space_id(explicit)
        .map_err(|e| MCPError::space_resolution(e.to_string()))
}

/// Perform one API call through the configured transport.
pub(crate) async fn send<T: BikaTransport>(
    services: &McpServices<T>,
    request: ApiRequest,
) -> Result<Value, MCPError> {
    services
        .transport
        .send(request)
        .await
        .map_err(|e| MCPError::api_error(e.to_string()))
}

// Shared test doubles
#[cfg(test)]
#[path = "test_support.rs"]
pub(crate) mod test_support;
