//! Registration and login

use axum::{extract::State, response::Json};
use chrono::Utc;

use crate::AppState;
use crate::api::{
    ApiJson, AuthResponse, LoginRequest, RegisterRequest, register_to_new_user, user_to_response,
};
use crate::data::UserPatch;
use crate::error::AppError;
use crate::service::UserRepository;

/// POST /api/auth/register
///
/// A taken email or username is rejected by the store with 400.
pub async fn register(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<RegisterRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let new_user = register_to_new_user(request)?;
    let user = state.storage.create_user(new_user).await?;
    tracing::info!(user_id = %user.id, username = %user.username, "User registered");

    Ok(Json(AuthResponse {
        user: user_to_response(&user),
    }))
}

/// POST /api/auth/login
///
/// Marks the user online and refreshes `lastSeen`.
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    let user = state
        .storage
        .verify_credentials(request.email.trim(), &request.password)
        .await?
        .ok_or(AppError::Unauthorized)?;

    let patch = UserPatch {
        is_online: Some(true),
        last_seen: Some(Utc::now()),
        ..UserPatch::default()
    };
    let user = state
        .storage
        .update_user(&user.id, patch)
        .await?
        .ok_or(AppError::Unauthorized)?;

    tracing::info!(user_id = %user.id, "User logged in");
    Ok(Json(AuthResponse {
        user: user_to_response(&user),
    }))
}
