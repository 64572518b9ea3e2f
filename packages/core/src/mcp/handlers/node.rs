//! Node Tool Handlers
//!
//! Read-only access to the node tree of a space (databases, folders,
//! automations, dashboards and the other resource types).

use crate::api::{ApiRequest, BikaTransport};
use crate::mcp::handlers::{parse_params, resolve_space, send};
use crate::mcp::server::McpServices;
use crate::mcp::types::MCPError;
use serde::Deserialize;
use serde_json::Value;

/// Parameters for bika_get_node
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetNodeParams {
    #[serde(default)]
    pub space_id: Option<String>,
    pub node_id: String,
}

/// Parameters for bika_list_nodes
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListNodesParams {
    #[serde(default)]
    pub space_id: Option<String>,
}

/// `GET /v1/spaces/{spaceId}/nodes/{nodeId}`
fn get_node_request(space_id: &str, node_id: &str) -> ApiRequest {
    ApiRequest::get(format!("/v1/spaces/{space_id}/nodes/{node_id}"))
}

/// `GET /v1/spaces/{spaceId}/nodes`
fn list_nodes_request(space_id: &str) -> ApiRequest {
    ApiRequest::get(format!("/v1/spaces/{space_id}/nodes"))
}

/// Handle bika_get_node
pub async fn handle_get_node<T: BikaTransport>(
    services: &McpServices<T>,
    params: Value,
) -> Result<Value, MCPError> {
    let params: GetNodeParams = parse_params(params)?;
    let space_id = resolve_space(&services.config, params.space_id.as_deref())?;
    send(services, get_node_request(&space_id, &params.node_id)).await
}

/// Handle bika_list_nodes
pub async fn handle_list_nodes<T: BikaTransport>(
    services: &McpServices<T>,
    params: Value,
) -> Result<Value, MCPError> {
    let params: ListNodesParams = parse_params(params)?;
    let space_id = resolve_space(&services.config, params.space_id.as_deref())?;
    send(services, list_nodes_request(&space_id)).await
}
