//! Tests for MCP types module
//!
//! Verifies JSON-RPC 2.0 request/response parsing and error handling.

use super::*;
use serde_json::json;

#[test]
fn test_parse_valid_request() {
    let json_str = r#"{
        "jsonrpc": "2.0",
        "id": 123,
        "method": "tools/call",
        "params": {
            "name": "bika_list_spaces",
            "arguments": {}
        }
    }"#;

    let request: MCPRequest = serde_json::from_str(json_str).unwrap();

    assert_eq!(request.jsonrpc, "2.0");
    assert_eq!(request.id, 123);
    assert_eq!(request.method, "tools/call");
    assert!(request.params.is_object());
}

#[test]
fn test_parse_request_missing_jsonrpc() {
    let json_str = r#"{
        "id": 123,
        "method": "tools/list",
        "params": {}
    }"#;

    let result: Result<MCPRequest, _> = serde_json::from_str(json_str);
    assert!(result.is_err());
}

#[test]
fn test_parse_request_wrong_jsonrpc_version() {
    let json_str = r#"{
        "jsonrpc": "1.0",
        "id": 123,
        "method": "tools/list",
        "params": {}
    }"#;

    let result: Result<MCPRequest, _> = serde_json::from_str(json_str);
    assert!(result.is_err());
}

#[test]
fn test_parse_request_without_params() {
    let json_str = r#"{
        "jsonrpc": "2.0",
        "id": 7,
        "method": "tools/list"
    }"#;

    let request: MCPRequest = serde_json::from_str(json_str).unwrap();
    assert!(request.params.is_null());
}

#[test]
fn test_serialize_success_response() {
    let response = MCPResponse {
        jsonrpc: "2.0".to_string(),
        id: 42,
        result: Some(json!({"tools": []})),
        error: None,
    };

    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["jsonrpc"], "2.0");
    assert_eq!(json["id"], 42);
    assert!(json["result"]["tools"].is_array());
    assert!(json.get("error").is_none()); // Should be omitted
}

#[test]
fn test_serialize_error_response() {
    let response = MCPResponse {
        jsonrpc: "2.0".to_string(),
        id: 99,
        result: None,
        error: Some(MCPError {
            code: RESOURCE_NOT_FOUND,
            message: "Unknown resource: bika://nope".to_string(),
            data: None,
        }),
    };

    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["jsonrpc"], "2.0");
    assert_eq!(json["id"], 99);
    assert_eq!(json["error"]["code"], RESOURCE_NOT_FOUND);
    assert_eq!(json["error"]["message"], "Unknown resource: bika://nope");
    assert!(json.get("result").is_none()); // Should be omitted
}

#[test]
fn test_error_codes_constants() {
    // Standard JSON-RPC error codes
    assert_eq!(PARSE_ERROR, -32700);
    assert_eq!(INVALID_REQUEST, -32600);
    assert_eq!(METHOD_NOT_FOUND, -32601);
    assert_eq!(INVALID_PARAMS, -32602);
    assert_eq!(INTERNAL_ERROR, -32603);

    // Custom adapter error codes (start at -32000 per spec)
    assert_eq!(API_ERROR, -32000);
    assert_eq!(SPACE_RESOLUTION_ERROR, -32001);
    assert_eq!(RESOURCE_NOT_FOUND, -32002);
    assert_eq!(RESOURCE_READ_FAILED, -32003);
}

#[test]
fn test_mcp_error_helper_methods() {
    let parse_err = MCPError::parse_error("Invalid JSON".to_string());
    assert_eq!(parse_err.code, PARSE_ERROR);

    let not_found = MCPError::method_not_found("bogus/method");
    assert_eq!(not_found.code, METHOD_NOT_FOUND);
    assert!(not_found.message.contains("bogus/method"));

    let invalid_params = MCPError::invalid_params("Missing field".to_string());
    assert_eq!(invalid_params.code, INVALID_PARAMS);

    let api_err = MCPError::api_error("Bika API error: 500 - oops".to_string());
    assert_eq!(api_err.code, API_ERROR);

    let resource_err = MCPError::resource_not_found("bika://nope");
    assert_eq!(resource_err.code, RESOURCE_NOT_FOUND);
    assert_eq!(resource_err.message, "Unknown resource: bika://nope");

    let read_err = MCPError::resource_read_failed("bika://docs/api/examples");
    assert_eq!(read_err.code, RESOURCE_READ_FAILED);
    assert!(read_err.message.contains("bika://docs/api/examples"));
}

#[test]
fn test_mcp_response_helper_methods() {
    let success = MCPResponse::success(42, json!({"result": "ok"}));
    assert_eq!(success.id, 42);
    assert_eq!(success.jsonrpc, "2.0");
    assert!(success.error.is_none());
    assert!(success.result.is_some());

    let error_resp = MCPResponse::error(99, MCPError::resource_not_found("bika://xyz"));
    assert_eq!(error_resp.id, 99);
    assert_eq!(error_resp.jsonrpc, "2.0");
    assert!(error_resp.result.is_none());
    assert!(error_resp.error.is_some());
}

// Notification tests

#[test]
fn test_parse_valid_notification() {
    let json_str = r#"{
        "jsonrpc": "2.0",
        "method": "notifications/initialized",
        "params": {}
    }"#;

    let notification: MCPNotification = serde_json::from_str(json_str).unwrap();

    assert_eq!(notification.jsonrpc, "2.0");
    assert_eq!(notification.method, "notifications/initialized");
    assert!(notification.params.is_object());
}

#[test]
fn test_notification_missing_jsonrpc() {
    let json_str = r#"{
        "method": "notifications/initialized",
        "params": {}
    }"#;

    let result: Result<MCPNotification, _> = serde_json::from_str(json_str);
    assert!(result.is_err());
}

#[test]
fn test_notification_invalid_jsonrpc_version() {
    let json_str = r#"{
        "jsonrpc": "1.0",
        "method": "notifications/initialized",
        "params": {}
    }"#;

    let result: Result<MCPNotification, _> = serde_json::from_str(json_str);
    assert!(result.is_err());
}

#[test]
fn test_notification_with_id_should_be_request() {
    // If there's an id field, it should parse as request not notification
    let json_str = r#"{
        "jsonrpc": "2.0",
        "id": 123,
        "method": "initialize",
        "params": {}
    }"#;

    // Should parse as request
    let request: Result<MCPRequest, _> = serde_json::from_str(json_str);
    assert!(request.is_ok());

    // Should fail as notification (deny_unknown_fields rejects 'id')
    let notification: Result<MCPNotification, _> = serde_json::from_str(json_str);
    assert!(notification.is_err());
}

#[test]
fn test_request_without_id_should_fail() {
    // Requests must have an id field
    let json_str = r#"{
        "jsonrpc": "2.0",
        "method": "tools/list",
        "params": {}
    }"#;

    let result: Result<MCPRequest, _> = serde_json::from_str(json_str);
    assert!(result.is_err());
}
