//! Webhook Tool Handlers
//!
//! Registration of outgoing webhooks with the Bika platform. The server
//! only registers, lists and deletes endpoints — webhook deliveries are
//! never received or processed here.

use crate::api::{ApiRequest, BikaTransport};
use crate::mcp::handlers::{parse_params, resolve_space, send};
use crate::mcp::server::McpServices;
use crate::mcp::types::MCPError;
use serde::Deserialize;
use serde_json::{json, Map, Value};

/// Parameters for bika_list_outgoing_webhooks
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListOutgoingWebhooksParams {
    #[serde(default)]
    pub space_id: Option<String>,
}

/// Parameters for bika_create_outgoing_webhook
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOutgoingWebhookParams {
    #[serde(default)]
    pub space_id: Option<String>,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub secret: Option<String>,
    #[serde(default)]
    pub events: Option<Vec<String>>,
}

/// Parameters for bika_delete_outgoing_webhook
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteOutgoingWebhookParams {
    #[serde(default)]
    pub space_id: Option<String>,
    pub outgoing_webhook_id: String,
}

/// `GET /v1/spaces/{spaceId}/outgoing-webhooks`
fn list_outgoing_webhooks_request(space_id: &str) -> ApiRequest {
    ApiRequest::get(format!("/v1/spaces/{space_id}/outgoing-webhooks"))
}

/// `POST /v1/spaces/{spaceId}/outgoing-webhooks`
///
/// Absent optional fields are left out of the body entirely.
fn create_outgoing_webhook_request(
    space_id: &str,
    params: &CreateOutgoingWebhookParams,
) -> ApiRequest {
    let mut body = Map::new();
    body.insert("name".to_string(), json!(params.name));
    body.insert("url".to_string(), json!(params.url));
    if let Some(secret) = &params.secret {
        body.insert("secret".to_string(), json!(secret));
    }
    if let Some(events) = &params.events {
        body.insert("events".to_string(), json!(events));
    }

    ApiRequest::post(format!("/v1/spaces/{space_id}/outgoing-webhooks"))
        .with_body(Value::Object(body))
}

/// `DELETE /v1/spaces/{spaceId}/outgoing-webhooks/{outgoingWebhookId}`
fn delete_outgoing_webhook_request(space_id: &str, outgoing_webhook_id: &str) -> ApiRequest {
    ApiRequest::delete(format!(
        "/v1/spaces/{space_id}/outgoing-webhooks/{outgoing_webhook_id}"
    ))
}

/// Handle bika_list_outgoing_webhooks
pub async fn handle_list_outgoing_webhooks<T: BikaTransport>(
    services: &McpServices<T>,
    params: Value,
) -> Result<Value, MCPError> {
    let params: ListOutgoingWebhooksParams = parse_params(params)?;
    let space_id = resolve_space(&services.config, params.space_id.as_deref())?;
    send(services, list_outgoing_webhooks_request(&space_id)).await
}

/// Handle bika_create_outgoing_webhook
pub async fn handle_create_outgoing_webhook<T: BikaTransport>(
    services: &McpServices<T>,
    params: Value,
) -> Result<Value, MCPError> {
    let params: CreateOutgoingWebhookParams = parse_params(params)?;
    let space_id = resolve_space(&services.config, params.space_id.as_deref())?;
    send(services, create_outgoing_webhook_request(&space_id, &params)).await
}

/// Handle bika_delete_outgoing_webhook
pub async fn handle_delete_outgoing_webhook<T: BikaTransport>(
    services: &McpServices<T>,
    params: Value,
) -> Result<Value, MCPError> {
    let params: DeleteOutgoingWebhookParams = parse_params(params)?;
    let space_id = resolve_space(&services.config, params.space_id.as_deref())?;
    send(
        services,
        delete_outgoing_webhook_request(&space_id, &params.outgoing_webhook_id),
    )
    .await
}

// Include tests
#[cfg(test)]
#[path = "webhooks_test.rs"]
mod webhooks_test;
