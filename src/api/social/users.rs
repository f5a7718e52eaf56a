//! User endpoints

use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::AppState;
use crate::api::{
    ApiJson, SuggestedFriendResponse, UpdateUserRequest, UserResponse, suggestion_to_response,
    update_to_patch, user_to_response, users_to_response,
};
use crate::error::AppError;
use crate::service::UserRepository;

/// GET /api/users/:id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state
        .storage
        .get_user(&id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(user_to_response(&user)))
}

/// PUT /api/users/:id
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let patch = update_to_patch(request)?;
    let user = state
        .storage
        .update_user(&id, patch)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(user_to_response(&user)))
}

/// GET /api/users/search/:query
pub async fn search_users(
    State(state): State<AppState>,
    Path(query): Path<String>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.storage.search_users(&query).await?;
    Ok(Json(users_to_response(&users)))
}

/// GET /api/users/:id/suggested-friends
pub async fn suggested_friends(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<SuggestedFriendResponse>>, AppError> {
    let suggestions = state.storage.get_suggested_friends(&id).await?;
    Ok(Json(
        suggestions.iter().map(suggestion_to_response).collect(),
    ))
}
