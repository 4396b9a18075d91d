use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::Value;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::models::user::{serialize_user, NewUser, User, USER_FIELDS};
use crate::services::users;
use crate::validate;
use crate::AppState;

/// Existence gate shared by the item endpoints. Runs before the
/// method-specific work and hands the found row to it.
async fn fetch_user_or_404(db: &PgPool, id: i32) -> AppResult<User> {
    users::get_by_id(db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("User doesn't exist".into()))
}

pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<Value>>> {
    let users = users::list(&state.db).await?;

    Ok(Json(users.iter().map(serialize_user).collect()))
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> AppResult<impl IntoResponse> {
    if let Some(field) = validate::first_missing_field(&body, USER_FIELDS) {
        return Err(AppError::Validation(format!(
            "Missing '{field}' in request body"
        )));
    }

    let new_user: NewUser =
        serde_json::from_value(body).map_err(|e| AppError::Validation(e.to_string()))?;

    let user = users::insert(&state.db, &new_user).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/users/{}", user.id))],
        Json(serialize_user(&user)),
    ))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> AppResult<Json<Value>> {
    let user = fetch_user_or_404(&state.db, user_id).await?;

    Ok(Json(serialize_user(&user)))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> AppResult<StatusCode> {
    let user = fetch_user_or_404(&state.db, user_id).await?;

    users::delete_by_id(&state.db, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(body): Json<Value>,
) -> AppResult<StatusCode> {
    let user = fetch_user_or_404(&state.db, user_id).await?;

    let changes = validate::patch_fields(&body, USER_FIELDS);
    let supplied = changes
        .iter()
        .filter(|(_, value)| validate::is_truthy(value))
        .count();
    if supplied == 0 {
        return Err(AppError::Validation(
            "Request body must contain at least one updated field".into(),
        ));
    }

    // All extracted fields go through, falsy values included; the truthy
    // count only decides whether the update happens at all.
    users::update(&state.db, user.id, &changes).await?;

    Ok(StatusCode::NO_CONTENT)
}
