//! Group endpoints

use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::AppState;
use crate::api::{
    ApiJson, CreateGroupRequest, PostResponse, StatusMessage, UserIdRequest, acting_user_id,
    create_group_to_new_group, posts_to_response,
};
use crate::data::Group;
use crate::error::AppError;
use crate::service::{GroupRepository, PostRepository};

/// POST /api/groups
pub async fn create_group(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateGroupRequest>,
) -> Result<Json<Group>, AppError> {
    let new_group = create_group_to_new_group(request)?;
    let group = state.storage.create_group(new_group).await?;
    Ok(Json(group))
}

/// GET /api/groups/:id
pub async fn get_group(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Group>, AppError> {
    let group = state
        .storage
        .get_group(&id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(group))
}

/// GET /api/users/:id/groups
pub async fn user_groups(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Group>>, AppError> {
    Ok(Json(state.storage.get_user_groups(&user_id).await?))
}

/// POST /api/groups/:id/join
pub async fn join_group(
    State(state): State<AppState>,
    Path(group_id): Path<String>,
    ApiJson(request): ApiJson<UserIdRequest>,
) -> Result<Json<StatusMessage>, AppError> {
    let user_id = acting_user_id(request)?;
    if !state.storage.join_group(&user_id, &group_id).await? {
        return Err(AppError::Validation("Failed to join group".to_string()));
    }
    Ok(Json(StatusMessage::new("Joined group successfully")))
}

/// POST /api/groups/:id/leave
pub async fn leave_group(
    State(state): State<AppState>,
    Path(group_id): Path<String>,
    ApiJson(request): ApiJson<UserIdRequest>,
) -> Result<Json<StatusMessage>, AppError> {
    let user_id = acting_user_id(request)?;
    if !state.storage.leave_group(&user_id, &group_id).await? {
        return Err(AppError::Validation("Failed to leave group".to_string()));
    }
    Ok(Json(StatusMessage::new("Left group successfully")))
}

/// GET /api/groups/:id/posts
pub async fn group_posts(
    State(state): State<AppState>,
    Path(group_id): Path<String>,
) -> Result<Json<Vec<PostResponse>>, AppError> {
    let posts = state.storage.get_group_posts(&group_id).await?;
    Ok(Json(posts_to_response(&posts)))
}
