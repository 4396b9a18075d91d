use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::Value;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::models::entry::{serialize_entry, Entry, NewEntry, ENTRY_FIELDS};
use crate::services::entries;
use crate::validate;
use crate::AppState;

async fn fetch_entry_or_404(db: &PgPool, id: i32) -> AppResult<Entry> {
    entries::get_by_id(db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Entry doesn't exist".into()))
}

pub async fn list_entries(State(state): State<AppState>) -> AppResult<Json<Vec<Value>>> {
    let entries = entries::list(&state.db).await?;

    Ok(Json(entries.iter().map(serialize_entry).collect()))
}

pub async fn create_entry(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<impl IntoResponse> {
    if let Some(field) = validate::first_missing_field(&body, ENTRY_FIELDS) {
        return Err(AppError::Validation(format!(
            "Missing '{field}' in request body"
        )));
    }

    let new_entry: NewEntry =
        serde_json::from_value(body).map_err(|e| AppError::Validation(e.to_string()))?;

    // No application-level check that `userid` exists; the foreign key in the
    // schema is the only referee, and a violation surfaces as a storage error.
    let entry = entries::insert(&state.db, &new_entry).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/entries/{}", entry.id))],
        Json(serialize_entry(&entry)),
    ))
}

pub async fn get_entry(
    State(state): State<AppState>,
    Path(entry_id): Path<i32>,
) -> AppResult<Json<Value>> {
    let entry = fetch_entry_or_404(&state.db, entry_id).await?;

    Ok(Json(serialize_entry(&entry)))
}

pub async fn delete_entry(
    State(state): State<AppState>,
    Path(entry_id): Path<i32>,
) -> AppResult<StatusCode> {
    let entry = fetch_entry_or_404(&state.db, entry_id).await?;

    entries::delete_by_id(&state.db, entry.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn update_entry(
    State(state): State<AppState>,
    Path(entry_id): Path<i32>,
    Json(body): Json<Value>,
) -> AppResult<StatusCode> {
    let entry = fetch_entry_or_404(&state.db, entry_id).await?;

    let changes = validate::patch_fields(&body, ENTRY_FIELDS);
    let supplied = changes
        .iter()
        .filter(|(_, value)| validate::is_truthy(value))
        .count();
    if supplied == 0 {
        return Err(AppError::Validation(
            "Request body must contain at least one updated field".into(),
        ));
    }

    entries::update(&state.db, entry.id, &changes).await?;

    Ok(StatusCode::NO_CONTENT)
}
