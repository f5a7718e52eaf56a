//! Comment endpoints

use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::AppState;
use crate::api::{
    ApiJson, CommentResponse, CreateCommentRequest, StatusMessage, comment_to_response,
    create_comment_to_new_comment,
};
use crate::data::Comment;
use crate::error::AppError;
use crate::service::CommentRepository;

/// POST /api/comments
pub async fn create_comment(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateCommentRequest>,
) -> Result<Json<Comment>, AppError> {
    let new_comment = create_comment_to_new_comment(request)?;
    let comment = state.storage.create_comment(new_comment).await?;
    Ok(Json(comment))
}

/// GET /api/posts/:id/comments
pub async fn post_comments(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<Json<Vec<CommentResponse>>, AppError> {
    let comments = state.storage.get_post_comments(&post_id).await?;
    Ok(Json(comments.iter().map(comment_to_response).collect()))
}

/// DELETE /api/comments/:id
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StatusMessage>, AppError> {
    if !state.storage.delete_comment(&id).await? {
        return Err(AppError::NotFound);
    }
    Ok(Json(StatusMessage::new("Comment deleted")))
}
