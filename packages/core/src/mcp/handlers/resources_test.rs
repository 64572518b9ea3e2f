//! Tests for Resource Handlers

use super::*;
use crate::mcp::handlers::test_support::test_config;
use crate::mcp::types::{RESOURCE_NOT_FOUND, RESOURCE_READ_FAILED};
use crate::reference;
use serde_json::json;
use std::fs;

#[test]
fn test_resources_list_is_union_of_both_families() {
    let result = handle_resources_list(json!({})).unwrap();
    let resources = result["resources"].as_array().unwrap();

    // 4 static tables + 23 documentation topics
    assert_eq!(resources.len(), 4 + reference::DOC_TOPICS.len());

    let uris: Vec<&str> = resources
        .iter()
        .map(|r| r["uri"].as_str().unwrap())
        .collect();
    assert!(uris.contains(&"bika://node-types"));
    assert!(uris.contains(&"bika://field-types"));
    assert!(uris.contains(&"bika://view-types"));
    assert!(uris.contains(&"bika://formula-functions"));
    assert!(uris.contains(&"bika://docs/filter-query-language/syntax"));

    for resource in resources {
        assert!(resource["name"].is_string());
        assert!(resource["description"].is_string());
        assert!(resource["mimeType"].is_string());
    }
}

#[test]
fn test_doc_entries_have_synthesized_names() {
    let result = handle_resources_list(json!({})).unwrap();
    let resources = result["resources"].as_array().unwrap();

    let doc = resources
        .iter()
        .find(|r| r["uri"] == "bika://docs/api/basic-concepts")
        .unwrap();
    assert_eq!(doc["name"], "Bika Documentation: api/basic-concepts");
    assert_eq!(doc["description"], "Documentation for api/basic concepts");
    assert_eq!(doc["mimeType"], "text/markdown");
}

#[test]
fn test_read_node_types_decodes_to_typed_records() {
    let config = test_config(None);
    let result = handle_resources_read(&config, json!({"uri": "bika://node-types"})).unwrap();

    let contents = result["contents"].as_array().unwrap();
    assert_eq!(contents.len(), 1);
    assert_eq!(contents[0]["uri"], "bika://node-types");
    assert_eq!(contents[0]["mimeType"], "application/json");

    // Text JSON-decodes back to an ordered list of {type, icon, description}
    let text = contents[0]["text"].as_str().unwrap();
    let decoded: serde_json::Value = serde_json::from_str(text).unwrap();
    let entries = decoded.as_array().unwrap();
    assert_eq!(entries.len(), 10);
    assert_eq!(entries[0]["type"], "Folder");
    for entry in entries {
        let obj = entry.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert!(obj.contains_key("type"));
        assert!(obj.contains_key("icon"));
        assert!(obj.contains_key("description"));
    }
}

#[test]
fn test_read_each_static_table() {
    let config = test_config(None);
    for uri in [
        "bika://node-types",
        "bika://field-types",
        "bika://view-types",
        "bika://formula-functions",
    ] {
        let result = handle_resources_read(&config, json!({"uri": uri})).unwrap();
        assert_eq!(result["contents"][0]["uri"], uri);
        assert_eq!(result["contents"][0]["mimeType"], "application/json");
    }
}

#[test]
fn test_read_unknown_uri_fails_without_fault() {
    let config = test_config(None);
    let err = handle_resources_read(&config, json!({"uri": "bika://nope"})).unwrap_err();

    assert_eq!(err.code, RESOURCE_NOT_FOUND);
    assert_eq!(err.message, "Unknown resource: bika://nope");
}

#[test]
fn test_read_unregistered_doc_topic_is_unknown_resource() {
    let config = test_config(None);
    let err =
        handle_resources_read(&config, json!({"uri": "bika://docs/no/such-topic"})).unwrap_err();

    assert_eq!(err.code, RESOURCE_NOT_FOUND);
}

#[test]
fn test_read_doc_file_verbatim() {
    let docs_dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(docs_dir.path().join("api")).unwrap();
    let body = "# Basic Concepts\n\nSpaces contain databases.\n";
    fs::write(docs_dir.path().join("api/basic-concepts.md"), body).unwrap();

    let mut config = test_config(None);
    config.docs_dir = docs_dir.path().to_path_buf();

    let result =
        handle_resources_read(&config, json!({"uri": "bika://docs/api/basic-concepts"})).unwrap();

    let contents = &result["contents"][0];
    assert_eq!(contents["mimeType"], "text/markdown");
    assert_eq!(contents["text"], body);
}

#[test]
fn test_read_missing_doc_file_is_read_failure() {
    let docs_dir = tempfile::tempdir().unwrap();
    let mut config = test_config(None);
    config.docs_dir = docs_dir.path().to_path_buf();

    let err =
        handle_resources_read(&config, json!({"uri": "bika://docs/api/basic-concepts"})).unwrap_err();

    assert_eq!(err.code, RESOURCE_READ_FAILED);
    assert!(err.message.contains("bika://docs/api/basic-concepts"));
}

#[test]
fn test_read_missing_uri_param_is_invalid() {
    let config = test_config(None);
    let err = handle_resources_read(&config, json!({})).unwrap_err();
    assert!(err.message.contains("Invalid parameters"));
}
