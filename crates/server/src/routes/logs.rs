use axum::{extract::{rejection::JsonRejection, State}, http::StatusCode, Json};
use serde::Deserialize;
use tracing::info;

use common::types::Message;
use models::log_entry::{LogRow, NewLogEntry};
use service::log_entry_service;

use crate::{errors::JsonApiError, routes::ServerState};

/// Text column value; clients sometimes send `status` as a bare number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TextValue {
    Text(String),
    Number(serde_json::Number),
}

impl From<TextValue> for String {
    fn from(v: TextValue) -> Self {
        match v {
            TextValue::Text(s) => s,
            TextValue::Number(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateLogEntryInput {
    #[serde(default)]
    pub method: Option<TextValue>,
    #[serde(default)]
    pub status: Option<TextValue>,
    #[serde(default)]
    pub content_type: Option<String>,
}

impl TryFrom<CreateLogEntryInput> for NewLogEntry {
    type Error = models::errors::ModelError;

    fn try_from(input: CreateLogEntryInput) -> Result<Self, Self::Error> {
        NewLogEntry::new(
            input.method.map(String::from),
            input.status.map(String::from),
            input.content_type,
        )
    }
}

pub async fn create_log(
    State(state): State<ServerState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Message>), JsonApiError> {
    let Json(body) = payload?;
    // a derived struct would also take `[method, status, content_type]` positionally
    if !body.is_object() {
        return Err(JsonApiError::validation("request body must be a JSON object"));
    }
    let input: CreateLogEntryInput =
        serde_json::from_value(body).map_err(|e| JsonApiError::validation(e.to_string()))?;
    let entry = NewLogEntry::try_from(input)?;
    state
        .store
        .scoped(|conn| async move { log_entry_service::create_log_entry(&conn, entry).await })
        .await?;
    Ok((StatusCode::CREATED, Json(Message { message: "Log entry created" })))
}

pub async fn list_logs(State(state): State<ServerState>) -> Result<Json<Vec<LogRow>>, JsonApiError> {
    let rows = state
        .store
        .scoped(|conn| async move { log_entry_service::list_log_entries(&conn).await })
        .await?;
    info!(count = rows.len(), "list log entries");
    Ok(Json(rows.into_iter().map(|m| m.into_row()).collect()))
}
