//! User Handlers
//!
//! HTTP handlers for listing and registering users.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::infrastructure::driving_adapters::api_rest::dto::user::{CreateUserDto, UserResponseDto};
use crate::infrastructure::driving_adapters::api_rest::handlers::pages::not_found;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for user endpoints
///
/// Methods other than GET and POST on `/users` fall through to a 404.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/users",
        get(list_users).post(create_user).fallback(not_found),
    )
}

/// GET /users - List all users
///
/// # Responses
///
/// * 200 OK - Users in insertion order (empty array when none exist)
/// * 500 Internal Server Error - Response could not be serialized
#[axum::debug_handler]
async fn list_users(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    let users = state.list_users_use_case.execute().await?;

    let response: Vec<UserResponseDto> = users.iter().map(UserResponseDto::from).collect();
    Ok(Json(serde_json::to_value(response)?))
}

/// POST /users - Register a new user
///
/// # Responses
///
/// * 201 Created - User stored; body echoes it
/// * 400 Bad Request - Malformed body, missing name, or duplicate user
#[axum::debug_handler]
async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserDto>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponseDto>), ApiError> {
    let Json(dto) = payload?;

    let user = state.create_user_use_case.execute(dto.into()).await?;

    Ok((StatusCode::CREATED, Json(UserResponseDto::from(user))))
}
