//! MCP Tools Handler
//!
//! Implements MCP-compliant tools/list and tools/call methods.
//! This module centralizes tool discovery and execution according to the
//! MCP 2024-11-05 specification.
//!
//! Every tool call moves through the same stages: look up the tool by
//! name, validate arguments, translate to one Bika API request, send,
//! format. Any stage can short-circuit straight to the error formatting
//! step; the result is always a single text content block.

use crate::api::BikaTransport;
use crate::mcp::handlers::{database, node, system, user, webhooks};
use crate::mcp::server::McpServices;
use crate::mcp::types::MCPError;
use serde_json::{json, Value};

/// Handle tools/list MCP request
///
/// Returns the full static tool catalog. This is called after initialize
/// to discover what tools the server provides.
pub fn handle_tools_list(_params: Value) -> Result<Value, MCPError> {
    Ok(json!({
        "tools": get_tool_schemas()
    }))
}

/// Handle tools/call MCP request
///
/// Executes a tool by name with provided arguments.
///
/// # MCP Spec Compliance (2024-11-05)
///
/// Tool execution failures are returned as successful responses carrying
/// `isError: true` and an `Error: `-prefixed text block, not as JSON-RPC
/// errors — the calling agent always receives readable failure text.
///
/// Response format (success):
/// ```json
/// {
///   "content": [{
///     "type": "text",
///     "text": "..."
///   }],
///   "isError": false
/// }
/// ```
pub async fn handle_tools_call<T: BikaTransport>(
    services: &McpServices<T>,
    params: Value,
) -> Result<Value, MCPError> {
    let tool_name = params["name"]
        .as_str()
        .ok_or_else(|| MCPError::invalid_params("Missing 'name' parameter".to_string()))?;

    // Arguments default to an empty object if missing
    let arguments = params.get("arguments").cloned().unwrap_or(json!({}));

    let result = match tool_name {
        // System
        "bika_get_system_meta" => system::handle_get_system_meta(services, arguments).await,
        "bika_list_spaces" => system::handle_list_spaces(services, arguments).await,

        // Database metadata
        "bika_get_database" => database::handle_get_database(services, arguments).await,
        "bika_get_database_fields" => {
            database::handle_get_database_fields(services, arguments).await
        }
        "bika_get_database_views" => {
            database::handle_get_database_views(services, arguments).await
        }

        // Record CRUD (v1 and v2 endpoint generations)
        "bika_get_records_v1" => database::handle_get_records(services, arguments).await,
        "bika_list_records_v2" => database::handle_list_records(services, arguments).await,
        "bika_get_record_v2" => database::handle_get_record(services, arguments).await,
        "bika_create_record_v1" => database::handle_create_record(services, arguments).await,
        "bika_update_record_v1" => database::handle_update_record(services, arguments).await,
        "bika_update_record_v2" => database::handle_update_record_v2(services, arguments).await,
        "bika_delete_record_v1" => database::handle_delete_record(services, arguments).await,
        "bika_delete_record_v2" => database::handle_delete_record_v2(services, arguments).await,

        // Batch record operations (v2)
        "bika_create_records_v2" => database::handle_create_records(services, arguments).await,
        "bika_update_records_v2" => database::handle_update_records(services, arguments).await,
        "bika_delete_records_v2" => database::handle_delete_records(services, arguments).await,

        // User
        "bika_get_user_profile" => user::handle_get_user_profile(services, arguments).await,

        // Nodes
        "bika_get_node" => node::handle_get_node(services, arguments).await,
        "bika_list_nodes" => node::handle_list_nodes(services, arguments).await,

        // Webhooks
        "bika_list_outgoing_webhooks" => {
            webhooks::handle_list_outgoing_webhooks(services, arguments).await
        }
        "bika_create_outgoing_webhook" => {
            webhooks::handle_create_outgoing_webhook(services, arguments).await
        }
        "bika_delete_outgoing_webhook" => {
            webhooks::handle_delete_outgoing_webhook(services, arguments).await
        }

        _ => Err(MCPError::invalid_params(format!(
            "Unknown tool: {}",
            tool_name
        ))),
    };

    // Format response per MCP spec with content array and isError flag
    match result {
        Ok(data) => {
            let text = serde_json::to_string_pretty(&data).map_err(|e| {
                MCPError::internal_error(format!("JSON serialization failed: {}", e))
            })?;

            Ok(json!({
                "content": [{
                    "type": "text",
                    "text": text
                }],
                "isError": false
            }))
        }
        Err(e) => Ok(json!({
            "content": [{
                "type": "text",
                "text": format!("Error: {}", e.message)
            }],
            "isError": true
        })),
    }
}

/// Generate JSON schemas for all available MCP tools
///
/// This function defines the complete tool catalog exposed by the MCP
/// server. Schemas are manually maintained to provide high-quality
/// descriptions and precise control over the API surface: the camelCase
/// argument names, enum literals and batch bounds here are the contract
/// the validation layer enforces.
fn get_tool_schemas() -> Value {
    json!([
        // --- System tools ---
        {
            "name": "bika_get_system_meta",
            "description": "Get Bika system metadata including version and environment information",
            "inputSchema": {
                "type": "object",
                "properties": {}
            }
        },
        {
            "name": "bika_list_spaces",
            "description": "List all accessible Bika spaces",
            "inputSchema": {
                "type": "object",
                "properties": {}
            }
        },
        // --- Database tools ---
        {
            "name": "bika_get_database",
            "description": "Get database metadata including schema, fields, and configuration for a specific database",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "spaceId": {
                        "type": "string",
                        "description": "The ID of the space containing the database (optional if BIKA_SPACE_ID is set)"
                    },
                    "databaseId": {
                        "type": "string",
                        "description": "The ID of the database"
                    }
                },
                "required": ["databaseId"]
            }
        },
        {
            "name": "bika_get_database_fields",
            "description": "Get field definitions and schemas for a specific database",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "spaceId": {
                        "type": "string",
                        "description": "The ID of the space containing the database (optional if BIKA_SPACE_ID is set)"
                    },
                    "databaseId": {
                        "type": "string",
                        "description": "The ID of the database"
                    }
                },
                "required": ["databaseId"]
            }
        },
        {
            "name": "bika_get_database_views",
            "description": "Get views for a specific database",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "spaceId": {
                        "type": "string",
                        "description": "The ID of the space containing the database (optional if BIKA_SPACE_ID is set)"
                    },
                    "databaseId": {
                        "type": "string",
                        "description": "The ID of the database"
                    }
                },
                "required": ["databaseId"]
            }
        },
        {
            "name": "bika_get_records_v1",
            "description": "Get records from a Bika database with optional filtering using Filter Query Language (v1 API). For advanced queries with pagination, sorting, and field selection, use bika_list_records_v2 instead.",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "spaceId": {
                        "type": "string",
                        "description": "The ID of the space containing the database (optional if BIKA_SPACE_ID is set)"
                    },
                    "databaseId": {
                        "type": "string",
                        "description": "The ID of the database"
                    },
                    "filter": {
                        "type": "string",
                        "description": "Optional filter query using Bika Filter Query Language (e.g., status==\"Active\";age>18)"
                    }
                },
                "required": ["databaseId"]
            }
        },
        {
            "name": "bika_list_records_v2",
            "description": "List records from a Bika database with advanced filtering, sorting, pagination, and field selection (v2 API)",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "spaceId": {
                        "type": "string",
                        "description": "The ID of the space containing the database (optional if BIKA_SPACE_ID is set)"
                    },
                    "databaseId": {
                        "type": "string",
                        "description": "The ID of the database"
                    },
                    "filter": {
                        "type": "string",
                        "description": "Filter query using Bika Filter Query Language"
                    },
                    "offset": {
                        "type": "string",
                        "description": "Pagination offset token from previous response"
                    },
                    "pageSize": {
                        "type": "number",
                        "description": "Number of records per page (default: 100)"
                    },
                    "maxRecords": {
                        "type": "number",
                        "description": "Maximum total number of records to return across all pages"
                    },
                    "fields": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Array of field names to return"
                    },
                    "sort": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "field": { "type": "string" },
                                "order": { "type": "string", "enum": ["asc", "desc"] }
                            },
                            "required": ["field", "order"]
                        },
                        "description": "Array of sort objects specifying field and order"
                    },
                    "timeZone": {
                        "type": "string",
                        "description": "Time zone for date/time fields (e.g., \"Asia/Shanghai\")"
                    },
                    "userLocale": {
                        "type": "string",
                        "enum": ["en", "zh-CN", "zh-TW", "ja", "pt", "de"],
                        "description": "User locale for formatted values"
                    },
                    "cellFormat": {
                        "type": "string",
                        "enum": ["json", "string"],
                        "description": "Cell value format: \"json\" for structured data or \"string\" for display values"
                    },
                    "fieldKey": {
                        "type": "string",
                        "enum": ["name", "id"],
                        "description": "Use field names or IDs as keys in response"
                    }
                },
                "required": ["databaseId"]
            }
        },
        {
            "name": "bika_get_record_v2",
            "description": "Get a single record from a Bika database with optional formatting options (v2 API)",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "spaceId": {
                        "type": "string",
                        "description": "The ID of the space containing the database (optional if BIKA_SPACE_ID is set)"
                    },
                    "databaseId": {
                        "type": "string",
                        "description": "The ID of the database"
                    },
                    "recordId": {
                        "type": "string",
                        "description": "The ID of the record"
                    },
                    "timeZone": {
                        "type": "string",
                        "description": "Time zone for date/time fields"
                    },
                    "userLocale": {
                        "type": "string",
                        "enum": ["en", "zh-CN", "zh-TW", "ja", "pt", "de"],
                        "description": "User locale for formatted values"
                    },
                    "cellFormat": {
                        "type": "string",
                        "enum": ["json", "string"],
                        "description": "Cell value format: \"json\" for structured data or \"string\" for display values"
                    },
                    "fieldKey": {
                        "type": "string",
                        "enum": ["name", "id"],
                        "description": "Use field names or IDs as keys in response"
                    }
                },
                "required": ["databaseId", "recordId"]
            }
        },
        {
            "name": "bika_create_record_v1",
            "description": "Create a new record in a Bika database (v1 API)",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "spaceId": {
                        "type": "string",
                        "description": "The ID of the space containing the database (optional if BIKA_SPACE_ID is set)"
                    },
                    "databaseId": {
                        "type": "string",
                        "description": "The ID of the database"
                    },
                    "cells": {
                        "type": "object",
                        "description": "Field values for the new record as key-value pairs"
                    }
                },
                "required": ["databaseId", "cells"]
            }
        },
        {
            "name": "bika_update_record_v1",
            "description": "Update an existing record in a Bika database (v1 API)",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "spaceId": {
                        "type": "string",
                        "description": "The ID of the space containing the database (optional if BIKA_SPACE_ID is set)"
                    },
                    "databaseId": {
                        "type": "string",
                        "description": "The ID of the database"
                    },
                    "recordId": {
                        "type": "string",
                        "description": "The ID of the record"
                    },
                    "cells": {
                        "type": "object",
                        "description": "Field values to update"
                    }
                },
                "required": ["databaseId", "recordId", "cells"]
            }
        },
        {
            "name": "bika_update_record_v2",
            "description": "Update a single record in a Bika database using the v2 API with optional field key formatting",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "spaceId": {
                        "type": "string",
                        "description": "The ID of the space containing the database (optional if BIKA_SPACE_ID is set)"
                    },
                    "databaseId": {
                        "type": "string",
                        "description": "The ID of the database"
                    },
                    "recordId": {
                        "type": "string",
                        "description": "The ID of the record"
                    },
                    "fieldKey": {
                        "type": "string",
                        "enum": ["name", "id"],
                        "description": "Use field names or IDs as keys in response"
                    },
                    "fields": {
                        "type": "object",
                        "description": "Field values to update as key-value pairs"
                    }
                },
                "required": ["databaseId", "recordId", "fields"]
            }
        },
        {
            "name": "bika_delete_record_v2",
            "description": "Delete a single record from a Bika database using the v2 API",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "spaceId": {
                        "type": "string",
                        "description": "The ID of the space containing the database (optional if BIKA_SPACE_ID is set)"
                    },
                    "databaseId": {
                        "type": "string",
                        "description": "The ID of the database"
                    },
                    "recordId": {
                        "type": "string",
                        "description": "The ID of the record"
                    }
                },
                "required": ["databaseId", "recordId"]
            }
        },
        {
            "name": "bika_delete_record_v1",
            "description": "Delete a record from a Bika database (v1 API)",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "spaceId": {
                        "type": "string",
                        "description": "The ID of the space containing the database (optional if BIKA_SPACE_ID is set)"
                    },
                    "databaseId": {
                        "type": "string",
                        "description": "The ID of the database"
                    },
                    "recordId": {
                        "type": "string",
                        "description": "The ID of the record"
                    }
                },
                "required": ["databaseId", "recordId"]
            }
        },
        {
            "name": "bika_create_records_v2",
            "description": "Create multiple records (up to 10) in a Bika database in a single batch operation (v2 API)",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "spaceId": {
                        "type": "string",
                        "description": "The ID of the space containing the database (optional if BIKA_SPACE_ID is set)"
                    },
                    "databaseId": {
                        "type": "string",
                        "description": "The ID of the database"
                    },
                    "fieldKey": {
                        "type": "string",
                        "enum": ["name", "id"],
                        "description": "Use field names or IDs as keys in response"
                    },
                    "records": {
                        "type": "array",
                        "minItems": 1,
                        "maxItems": 10,
                        "items": {
                            "type": "object",
                            "properties": {
                                "fields": {
                                    "type": "object",
                                    "description": "Field values for the record as key-value pairs"
                                }
                            },
                            "required": ["fields"]
                        },
                        "description": "Array of records to create (minimum 1, maximum 10)"
                    }
                },
                "required": ["databaseId", "records"]
            }
        },
        {
            "name": "bika_update_records_v2",
            "description": "Update multiple records (up to 10) in a Bika database in a single batch operation (v2 API)",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "spaceId": {
                        "type": "string",
                        "description": "The ID of the space containing the database (optional if BIKA_SPACE_ID is set)"
                    },
                    "databaseId": {
                        "type": "string",
                        "description": "The ID of the database"
                    },
                    "fieldKey": {
                        "type": "string",
                        "enum": ["name", "id"],
                        "description": "Use field names or IDs as keys in response"
                    },
                    "records": {
                        "type": "array",
                        "minItems": 1,
                        "maxItems": 10,
                        "items": {
                            "type": "object",
                            "properties": {
                                "id": {
                                    "type": "string",
                                    "description": "The ID of the record to update"
                                },
                                "fields": {
                                    "type": "object",
                                    "description": "Field values to update as key-value pairs"
                                }
                            },
                            "required": ["id", "fields"]
                        },
                        "description": "Array of records to update (minimum 1, maximum 10)"
                    }
                },
                "required": ["databaseId", "records"]
            }
        },
        {
            "name": "bika_delete_records_v2",
            "description": "Delete multiple records (up to 10) from a Bika database in a single batch operation (v2 API)",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "spaceId": {
                        "type": "string",
                        "description": "The ID of the space containing the database (optional if BIKA_SPACE_ID is set)"
                    },
                    "databaseId": {
                        "type": "string",
                        "description": "The ID of the database"
                    },
                    "recordIds": {
                        "type": "array",
                        "minItems": 1,
                        "maxItems": 10,
                        "items": { "type": "string" },
                        "description": "Array of record IDs to delete (minimum 1, maximum 10)"
                    }
                },
                "required": ["databaseId", "recordIds"]
            }
        },
        // --- User tools ---
        {
            "name": "bika_get_user_profile",
            "description": "Get the authenticated user's profile information including name, email, settings, and preferences",
            "inputSchema": {
                "type": "object",
                "properties": {}
            }
        },
        // --- Node tools ---
        {
            "name": "bika_get_node",
            "description": "Get node resource information including metadata and structure for a specific node in a Bika space",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "spaceId": {
                        "type": "string",
                        "description": "The ID of the space containing the node (optional if BIKA_SPACE_ID is set)"
                    },
                    "nodeId": {
                        "type": "string",
                        "description": "The ID of the node"
                    }
                },
                "required": ["nodeId"]
            }
        },
        {
            "name": "bika_list_nodes",
            "description": "List all node resources in a Bika space including metadata and structure",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "spaceId": {
                        "type": "string",
                        "description": "The ID of the space (optional if BIKA_SPACE_ID is set)"
                    }
                }
            }
        },
        // --- Webhook tools ---
        {
            "name": "bika_list_outgoing_webhooks",
            "description": "List all outgoing webhooks in a Bika space",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "spaceId": {
                        "type": "string",
                        "description": "The ID of the space (optional if BIKA_SPACE_ID is set)"
                    }
                }
            }
        },
        {
            "name": "bika_create_outgoing_webhook",
            "description": "Create a new outgoing webhook in a Bika space",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "spaceId": {
                        "type": "string",
                        "description": "The ID of the space (optional if BIKA_SPACE_ID is set)"
                    },
                    "name": {
                        "type": "string",
                        "description": "Name of the webhook"
                    },
                    "url": {
                        "type": "string",
                        "description": "URL to send webhook requests to"
                    },
                    "secret": {
                        "type": "string",
                        "description": "Secret for webhook signature verification"
                    },
                    "events": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Array of event types to subscribe to"
                    }
                },
                "required": ["name", "url"]
            }
        },
        {
            "name": "bika_delete_outgoing_webhook",
            "description": "Delete an outgoing webhook from a Bika space",
            "inputSchema": {
                "type": "object",
                "properties": {
                    "spaceId": {
                        "type": "string",
                        "description": "The ID of the space (optional if BIKA_SPACE_ID is set)"
                    },
                    "outgoingWebhookId": {
                        "type": "string",
                        "description": "The ID of the webhook to delete"
                    }
                },
                "required": ["outgoingWebhookId"]
            }
        }
    ])
}

// Include tests
#[cfg(test)]
#[path = "tools_test.rs"]
mod tools_test;
