//! Database Tool Handlers
//!
//! Database metadata and record CRUD against the Bika Open API. Two
//! endpoint generations coexist: v1 (record values addressed as `cells`,
//! update identifier carried in the body) and v2 (values addressed as
//! `fields`, identifier in the path, plus pagination/sorting/batching).
//! Each tool's query and body shape is a fixed per-endpoint contract —
//! the encodings are intentionally not generalized across generations.

use crate::api::{ApiRequest, BikaTransport};
use crate::mcp::handlers::{parse_params, resolve_space, send};
use crate::mcp::server::McpServices;
use crate::mcp::types::MCPError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Inclusive bounds on batch record operations, enforced before any
/// request is built.
const BATCH_MIN: usize = 1;
const BATCH_MAX: usize = 10;

/// Locale for formatted cell values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum UserLocale {
    #[serde(rename = "en")]
    En,
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[serde(rename = "zh-TW")]
    ZhTw,
    #[serde(rename = "ja")]
    Ja,
    #[serde(rename = "pt")]
    Pt,
    #[serde(rename = "de")]
    De,
}

impl UserLocale {
    fn as_str(&self) -> &'static str {
        match self {
            UserLocale::En => "en",
            UserLocale::ZhCn => "zh-CN",
            UserLocale::ZhTw => "zh-TW",
            UserLocale::Ja => "ja",
            UserLocale::Pt => "pt",
            UserLocale::De => "de",
        }
    }
}

/// Cell value rendering: structured JSON or display strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellFormat {
    Json,
    String,
}

impl CellFormat {
    fn as_str(&self) -> &'static str {
        match self {
            CellFormat::Json => "json",
            CellFormat::String => "string",
        }
    }
}

/// Whether record values are keyed by field name or stable field id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKey {
    Name,
    Id,
}

impl FieldKey {
    fn as_str(&self) -> &'static str {
        match self {
            FieldKey::Name => "name",
            FieldKey::Id => "id",
        }
    }
}

/// Sort direction for v2 record listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// One field/direction pair of a v2 sort specification
#[derive(Debug, Clone, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub order: SortOrder,
}

/// A record to create in a v2 batch operation
#[derive(Debug, Deserialize, Serialize)]
pub struct NewRecord {
    /// Field values as key-value pairs; values pass through verbatim
    pub fields: Map<String, Value>,
}

/// A record update in a v2 batch operation
#[derive(Debug, Deserialize, Serialize)]
pub struct RecordPatch {
    pub id: String,
    pub fields: Map<String, Value>,
}

fn check_batch_len(what: &str, len: usize) -> Result<(), MCPError> {
    if !(BATCH_MIN..=BATCH_MAX).contains(&len) {
        return Err(MCPError::invalid_params(format!(
            "{what} must contain between {BATCH_MIN} and {BATCH_MAX} items, got {len}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

/// Parameters for bika_get_database
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetDatabaseParams {
    #[serde(default)]
    pub space_id: Option<String>,
    pub database_id: String,
}

/// Parameters for bika_get_database_fields
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetDatabaseFieldsParams {
    #[serde(default)]
    pub space_id: Option<String>,
    pub database_id: String,
}

/// Parameters for bika_get_database_views
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetDatabaseViewsParams {
    #[serde(default)]
    pub space_id: Option<String>,
    pub database_id: String,
}

/// Parameters for bika_get_records_v1
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRecordsParams {
    #[serde(default)]
    pub space_id: Option<String>,
    pub database_id: String,
    #[serde(default)]
    pub filter: Option<String>,
}

/// Parameters for bika_list_records_v2
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRecordsParams {
    #[serde(default)]
    pub space_id: Option<String>,
    pub database_id: String,
    #[serde(default)]
    pub filter: Option<String>,
    #[serde(default)]
    pub offset: Option<String>,
    #[serde(default)]
    pub page_size: Option<u32>,
    #[serde(default)]
    pub max_records: Option<u32>,
    #[serde(default)]
    pub fields: Option<Vec<String>>,
    #[serde(default)]
    pub sort: Option<Vec<SortSpec>>,
    #[serde(default)]
    pub time_zone: Option<String>,
    #[serde(default)]
    pub user_locale: Option<UserLocale>,
    #[serde(default)]
    pub cell_format: Option<CellFormat>,
    #[serde(default)]
    pub field_key: Option<FieldKey>,
}

/// Parameters for bika_get_record_v2
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRecordParams {
    #[serde(default)]
    pub space_id: Option<String>,
    pub database_id: String,
    pub record_id: String,
    #[serde(default)]
    pub time_zone: Option<String>,
    #[serde(default)]
    pub user_locale: Option<UserLocale>,
    #[serde(default)]
    pub cell_format: Option<CellFormat>,
    #[serde(default)]
    pub field_key: Option<FieldKey>,
}

/// Parameters for bika_create_record_v1
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecordParams {
    #[serde(default)]
    pub space_id: Option<String>,
    pub database_id: String,
    pub cells: Map<String, Value>,
}

/// Parameters for bika_update_record_v1
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecordParams {
    #[serde(default)]
    pub space_id: Option<String>,
    pub database_id: String,
    pub record_id: String,
    pub cells: Map<String, Value>,
}

/// Parameters for bika_update_record_v2
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecordV2Params {
    #[serde(default)]
    pub space_id: Option<String>,
    pub database_id: String,
    pub record_id: String,
    #[serde(default)]
    pub field_key: Option<FieldKey>,
    pub fields: Map<String, Value>,
}

/// Parameters for bika_delete_record_v1
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRecordParams {
    #[serde(default)]
    pub space_id: Option<String>,
    pub database_id: String,
    pub record_id: String,
}

/// Parameters for bika_delete_record_v2
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRecordV2Params {
    #[serde(default)]
    pub space_id: Option<String>,
    pub database_id: String,
    pub record_id: String,
}

/// Parameters for bika_create_records_v2
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecordsParams {
    #[serde(default)]
    pub space_id: Option<String>,
    pub database_id: String,
    #[serde(default)]
    pub field_key: Option<FieldKey>,
    pub records: Vec<NewRecord>,
}

/// Parameters for bika_update_records_v2
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRecordsParams {
    #[serde(default)]
    pub space_id: Option<String>,
    pub database_id: String,
    #[serde(default)]
    pub field_key: Option<FieldKey>,
    pub records: Vec<RecordPatch>,
}

/// Parameters for bika_delete_records_v2
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRecordsParams {
    #[serde(default)]
    pub space_id: Option<String>,
    pub database_id: String,
    pub record_ids: Vec<String>,
}

// ---------------------------------------------------------------------------
// Request translators — one pure function per tool
// ---------------------------------------------------------------------------

/// `GET /v1/spaces/{spaceId}/resources/databases/{databaseId}`
fn get_database_request(space_id: &str, database_id: &str) -> ApiRequest {
    ApiRequest::get(format!(
        "/v1/spaces/{space_id}/resources/databases/{database_id}"
    ))
}

/// `GET /v1/spaces/{spaceId}/resources/databases/{databaseId}/fields`
fn get_database_fields_request(space_id: &str, database_id: &str) -> ApiRequest {
    ApiRequest::get(format!(
        "/v1/spaces/{space_id}/resources/databases/{database_id}/fields"
    ))
}

/// `GET /v1/spaces/{spaceId}/resources/databases/{databaseId}/views`
fn get_database_views_request(space_id: &str, database_id: &str) -> ApiRequest {
    ApiRequest::get(format!(
        "/v1/spaces/{space_id}/resources/databases/{database_id}/views"
    ))
}

/// `GET /v1/spaces/{spaceId}/resources/databases/{databaseId}/records[?filter=...]`
fn get_records_request(space_id: &str, params: &GetRecordsParams) -> ApiRequest {
    let mut req = ApiRequest::get(format!(
        "/v1/spaces/{space_id}/resources/databases/{}/records",
        params.database_id
    ));
    if let Some(filter) = &params.filter {
        req.push_query("filter", filter);
    }
    req
}

/// `GET /v2/spaces/{spaceId}/resources/databases/{databaseId}/records`
///
/// Query encodings are per-endpoint contracts: `fields` repeats the key per
/// value, `sort` explodes each pair into indexed `sort[i][field]` /
/// `sort[i][order]` keys. Absent optional parameters emit no key at all.
fn list_records_request(space_id: &str, params: &ListRecordsParams) -> ApiRequest {
    let mut req = ApiRequest::get(format!(
        "/v2/spaces/{space_id}/resources/databases/{}/records",
        params.database_id
    ));

    if let Some(filter) = &params.filter {
        req.push_query("filter", filter);
    }
    if let Some(offset) = &params.offset {
        req.push_query("offset", offset);
    }
    if let Some(page_size) = params.page_size {
        req.push_query("pageSize", page_size.to_string());
    }
    if let Some(max_records) = params.max_records {
        req.push_query("maxRecords", max_records.to_string());
    }
    if let Some(fields) = &params.fields {
        for field in fields {
            req.push_query("fields", field);
        }
    }
    if let Some(sort) = &params.sort {
        for (index, spec) in sort.iter().enumerate() {
            req.push_query(format!("sort[{index}][field]"), &spec.field);
            req.push_query(format!("sort[{index}][order]"), spec.order.as_str());
        }
    }
    if let Some(time_zone) = &params.time_zone {
        req.push_query("timeZone", time_zone);
    }
    if let Some(user_locale) = params.user_locale {
        req.push_query("userLocale", user_locale.as_str());
    }
    if let Some(cell_format) = params.cell_format {
        req.push_query("cellFormat", cell_format.as_str());
    }
    if let Some(field_key) = params.field_key {
        req.push_query("fieldKey", field_key.as_str());
    }

    req
}

/// `GET /v2/spaces/{spaceId}/resources/databases/{databaseId}/records/{recordId}`
fn get_record_request(space_id: &str, params: &GetRecordParams) -> ApiRequest {
    let mut req = ApiRequest::get(format!(
        "/v2/spaces/{space_id}/resources/databases/{}/records/{}",
        params.database_id, params.record_id
    ));

    if let Some(time_zone) = &params.time_zone {
        req.push_query("timeZone", time_zone);
    }
    if let Some(user_locale) = params.user_locale {
        req.push_query("userLocale", user_locale.as_str());
    }
    if let Some(cell_format) = params.cell_format {
        req.push_query("cellFormat", cell_format.as_str());
    }
    if let Some(field_key) = params.field_key {
        req.push_query("fieldKey", field_key.as_str());
    }

    req
}

/// `POST /v1/spaces/{spaceId}/resources/databases/{databaseId}/records`
/// with body `{"cells": ...}`
fn create_record_request(space_id: &str, database_id: &str, cells: &Map<String, Value>) -> ApiRequest {
    ApiRequest::post(format!(
        "/v1/spaces/{space_id}/resources/databases/{database_id}/records"
    ))
    .with_body(json!({ "cells": cells }))
}

/// `PATCH /v1/spaces/{spaceId}/resources/databases/{databaseId}/records`
/// with body `{"id": ..., "cells": ...}` — the v1 generation carries the
/// record id in the body, not the path.
fn update_record_request(
    space_id: &str,
    database_id: &str,
    record_id: &str,
    cells: &Map<String, Value>,
) -> ApiRequest {
    ApiRequest::patch(format!(
        "/v1/spaces/{space_id}/resources/databases/{database_id}/records"
    ))
    .with_body(json!({ "id": record_id, "cells": cells }))
}

/// `PUT /v2/spaces/{spaceId}/resources/databases/{databaseId}/records/{recordId}`
/// with body `{"fields": ...}`
fn update_record_v2_request(space_id: &str, params: &UpdateRecordV2Params) -> ApiRequest {
    let mut req = ApiRequest::put(format!(
        "/v2/spaces/{space_id}/resources/databases/{}/records/{}",
        params.database_id, params.record_id
    ));
    if let Some(field_key) = params.field_key {
        req.push_query("fieldKey", field_key.as_str());
    }
    req.with_body(json!({ "fields": params.fields }))
}

/// `DELETE /v1/spaces/{spaceId}/resources/databases/{databaseId}/records/{recordId}`
fn delete_record_request(space_id: &str, database_id: &str, record_id: &str) -> ApiRequest {
    ApiRequest::delete(format!(
        "/v1/spaces/{space_id}/resources/databases/{database_id}/records/{record_id}"
    ))
}

/// `DELETE /v2/spaces/{spaceId}/resources/databases/{databaseId}/records/{recordId}`
fn delete_record_v2_request(space_id: &str, database_id: &str, record_id: &str) -> ApiRequest {
    ApiRequest::delete(format!(
        "/v2/spaces/{space_id}/resources/databases/{database_id}/records/{record_id}"
    ))
}

/// `POST /v2/spaces/{spaceId}/resources/databases/{databaseId}/records`
/// with body `{"records": [...]}`
fn create_records_request(space_id: &str, params: &CreateRecordsParams) -> ApiRequest {
    let mut req = ApiRequest::post(format!(
        "/v2/spaces/{space_id}/resources/databases/{}/records",
        params.database_id
    ));
    if let Some(field_key) = params.field_key {
        req.push_query("fieldKey", field_key.as_str());
    }
    req.with_body(json!({ "records": params.records }))
}

/// `PUT /v2/spaces/{spaceId}/resources/databases/{databaseId}/records`
/// with body `{"records": [...]}`
fn update_records_request(space_id: &str, params: &UpdateRecordsParams) -> ApiRequest {
    let mut req = ApiRequest::put(format!(
        "/v2/spaces/{space_id}/resources/databases/{}/records",
        params.database_id
    ));
    if let Some(field_key) = params.field_key {
        req.push_query("fieldKey", field_key.as_str());
    }
    req.with_body(json!({ "records": params.records }))
}

/// `DELETE /v2/spaces/{spaceId}/resources/databases/{databaseId}/records`
/// with body `{"recordIds": [...]}` — ids travel in the body, not the
/// query string.
fn delete_records_request(space_id: &str, database_id: &str, record_ids: &[String]) -> ApiRequest {
    ApiRequest::delete(format!(
        "/v2/spaces/{space_id}/resources/databases/{database_id}/records"
    ))
    .with_body(json!({ "recordIds": record_ids }))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// Handle bika_get_database
pub async fn handle_get_database<T: BikaTransport>(
    services: &McpServices<T>,
    params: Value,
) -> Result<Value, MCPError> {
    let params: GetDatabaseParams = parse_params(params)?;
    let space_id = resolve_space(&services.config, params.space_id.as_deref())?;
    send(services, get_database_request(&space_id, &params.database_id)).await
}

/// Handle bika_get_database_fields
pub async fn handle_get_database_fields<T: BikaTransport>(
    services: &McpServices<T>,
    params: Value,
) -> Result<Value, MCPError> {
    let params: GetDatabaseFieldsParams = parse_params(params)?;
    let space_id = resolve_space(&services.config, params.space_id.as_deref())?;
    send(
        services,
        get_database_fields_request(&space_id, &params.database_id),
    )
    .await
}

/// Handle bika_get_database_views
pub async fn handle_get_database_views<T: BikaTransport>(
    services: &McpServices<T>,
    params: Value,
) -> Result<Value, MCPError> {
    let params: GetDatabaseViewsParams = parse_params(params)?;
    let space_id = resolve_space(&services.config, params.space_id.as_deref())?;
    send(
        services,
        get_database_views_request(&space_id, &params.database_id),
    )
    .await
}

/// Handle bika_get_records_v1
pub async fn handle_get_records<T: BikaTransport>(
    services: &McpServices<T>,
    params: Value,
) -> Result<Value, MCPError> {
    let params: GetRecordsParams = parse_params(params)?;
    let space_id = resolve_space(&services.config, params.space_id.as_deref())?;
    send(services, get_records_request(&space_id, &params)).await
}

/// Handle bika_list_records_v2
pub async fn handle_list_records<T: BikaTransport>(
    services: &McpServices<T>,
    params: Value,
) -> Result<Value, MCPError> {
    let params: ListRecordsParams = parse_params(params)?;
    let space_id = resolve_space(&services.config, params.space_id.as_deref())?;
    send(services, list_records_request(&space_id, &params)).await
}

/// Handle bika_get_record_v2
pub async fn handle_get_record<T: BikaTransport>(
    services: &McpServices<T>,
    params: Value,
) -> Result<Value, MCPError> {
    let params: GetRecordParams = parse_params(params)?;
    let space_id = resolve_space(&services.config, params.space_id.as_deref())?;
    send(services, get_record_request(&space_id, &params)).await
}

/// Handle bika_create_record_v1
pub async fn handle_create_record<T: BikaTransport>(
    services: &McpServices<T>,
    params: Value,
) -> Result<Value, MCPError> {
    let params: CreateRecordParams = parse_params(params)?;
    let space_id = resolve_space(&services.config, params.space_id.as_deref())?;
    send(
        services,
        create_record_request(&space_id, &params.database_id, &params.cells),
    )
    .await
}

/// Handle bika_update_record_v1
pub async fn handle_update_record<T: BikaTransport>(
    services: &McpServices<T>,
    params: Value,
) -> Result<Value, MCPError> {
    let params: UpdateRecordParams = parse_params(params)?;
    let space_id = resolve_space(&services.config, params.space_id.as_deref())?;
    send(
        services,
        update_record_request(
            &space_id,
            &params.database_id,
            &params.record_id,
            &params.cells,
        ),
    )
    .await
}

/// Handle bika_update_record_v2
pub async fn handle_update_record_v2<T: BikaTransport>(
    services: &McpServices<T>,
    params: Value,
) -> Result<Value, MCPError> {
    let params: UpdateRecordV2Params = parse_params(params)?;
    let space_id = resolve_space(&services.config, params.space_id.as_deref())?;
    send(services, update_record_v2_request(&space_id, &params)).await
}

/// Handle bika_delete_record_v1
pub async fn handle_delete_record<T: BikaTransport>(
    services: &McpServices<T>,
    params: Value,
) -> Result<Value, MCPError> {
    let params: DeleteRecordParams = parse_params(params)?;
    let space_id = resolve_space(&services.config, params.space_id.as_deref())?;
    send(
        services,
        delete_record_request(&space_id, &params.database_id, &params.record_id),
    )
    .await
}

/// Handle bika_delete_record_v2
pub async fn handle_delete_record_v2<T: BikaTransport>(
    services: &McpServices<T>,
    params: Value,
) -> Result<Value, MCPError> {
    let params: DeleteRecordV2Params = parse_params(params)?;
    let space_id = resolve_space(&services.config, params.space_id.as_deref())?;
    send(
        services,
        delete_record_v2_request(&space_id, &params.database_id, &params.record_id),
    )
    .await
}

/// Handle bika_create_records_v2 (batch)
pub async fn handle_create_records<T: BikaTransport>(
    services: &McpServices<T>,
    params: Value,
) -> Result<Value, MCPError> {
    let params: CreateRecordsParams = parse_params(params)?;
    check_batch_len("records", params.records.len())?;
    let space_id = resolve_space(&services.config, params.space_id.as_deref())?;
    send(services, create_records_request(&space_id, &params)).await
}

/// Handle bika_update_records_v2 (batch)
pub async fn handle_update_records<T: BikaTransport>(
    services: &McpServices<T>,
    params: Value,
) -> Result<Value, MCPError> {
    let params: UpdateRecordsParams = parse_params(params)?;
    check_batch_len("records", params.records.len())?;
    let space_id = resolve_space(&services.config, params.space_id.as_deref())?;
    send(services, update_records_request(&space_id, &params)).await
}

/// Handle bika_delete_records_v2 (batch)
pub async fn handle_delete_records<T: BikaTransport>(
    services: &McpServices<T>,
    params: Value,
) -> Result<Value, MCPError> {
    let params: DeleteRecordsParams = parse_params(params)?;
    check_batch_len("recordIds", params.record_ids.len())?;
    let space_id = resolve_space(&services.config, params.space_id.as_deref())?;
    send(
        services,
        delete_records_request(&space_id, &params.database_id, &params.record_ids),
    )
    .await
}

// Include tests
#[cfg(test)]
#[path = "database_test.rs"]
mod database_test;
