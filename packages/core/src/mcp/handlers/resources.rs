//! Resource Handlers
//!
//! Implements resources/list and resources/read over two families:
//! in-memory reference tables (`bika://node-types` and friends) and
//! file-backed markdown documentation (`bika://docs/<topic>`). Both read
//! paths are local and every failure is reported to the caller — never
//! process-fatal.

use crate::config::BikaConfig;
use crate::mcp::handlers::parse_params;
use crate::mcp::types::MCPError;
use crate::reference;
use serde::Deserialize;
use serde_json::{json, Value};

/// Parameters for resources/read
#[derive(Debug, Deserialize)]
pub struct ReadResourceParams {
    pub uri: String,
}

/// Handle resources/list MCP request
///
/// Returns the union of the static reference tables and the documentation
/// topics, with synthesized names and descriptions for the doc entries.
pub fn handle_resources_list(_params: Value) -> Result<Value, MCPError> {
    let mut resources = vec![
        json!({
            "uri": "bika://node-types",
            "name": "Bika Node Types",
            "description": "Reference information about all Bika node resource types (Database, Automation, Form, etc.)",
            "mimeType": "application/json"
        }),
        json!({
            "uri": "bika://field-types",
            "name": "Bika Field Types",
            "description": "Reference information about all database field types (Text, Number, Date, etc.)",
            "mimeType": "application/json"
        }),
        json!({
            "uri": "bika://view-types",
            "name": "Bika View Types",
            "description": "Reference information about all database view types (Grid, Kanban, Gallery, etc.)",
            "mimeType": "application/json"
        }),
        json!({
            "uri": "bika://formula-functions",
            "name": "Bika Formula Functions",
            "description": "Reference information about all formula functions available in Bika",
            "mimeType": "application/json"
        }),
    ];

    for topic in reference::DOC_TOPICS {
        resources.push(json!({
            "uri": reference::doc_uri(topic),
            "name": format!("Bika Documentation: {topic}"),
            "description": format!("Documentation for {}", topic.replace('-', " ")),
            "mimeType": "text/markdown"
        }));
    }

    Ok(json!({ "resources": resources }))
}

/// Handle resources/read MCP request
///
/// Unknown URIs and unreadable documentation files both come back as error
/// results, not faults.
pub fn handle_resources_read(config: &BikaConfig, params: Value) -> Result<Value, MCPError> {
    let params: ReadResourceParams = parse_params(params)?;
    let uri = params.uri.as_str();

    // Documentation file?
    if let Some(topic) = uri.strip_prefix(reference::DOCS_URI_PREFIX) {
        if reference::DOC_TOPICS.contains(&topic) {
            let path = reference::doc_path(&config.docs_dir, topic);
            let text = std::fs::read_to_string(&path)
                .map_err(|_| MCPError::resource_read_failed(uri))?;
            return Ok(json!({
                "contents": [{ "uri": uri, "mimeType": "text/markdown", "text": text }]
            }));
        }
    }

    // In-memory reference tables
    match uri {
        "bika://node-types" => json_contents(uri, &reference::node_types()),
        "bika://field-types" => json_contents(uri, &reference::field_types()),
        "bika://view-types" => json_contents(uri, &reference::view_types()),
        "bika://formula-functions" => json_contents(uri, &reference::formula_functions()),
        _ => Err(MCPError::resource_not_found(uri)),
    }
}

fn json_contents(uri: &str, data: &Value) -> Result<Value, MCPError> {
    let text = serde_json::to_string_pretty(data)
        .map_err(|e| MCPError::internal_error(format!("JSON serialization failed: {}", e)))?;
    Ok(json!({
        "contents": [{ "uri": uri, "mimeType": "application/json", "text": text }]
    }))
}

// Include tests
#[cfg(test)]
#[path = "resources_test.rs"]
mod resources_test;
