//! Post endpoints

use axum::{
    extract::{Path, Query, State},
    response::Json,
};

use crate::AppState;
use crate::api::{
    ApiJson, CreatePostRequest, FeedQuery, PostResponse, StatusMessage, create_post_to_new_post,
    parse_feed_limit, post_to_response, posts_to_response,
};
use crate::error::AppError;
use crate::service::{PostRepository, UserRepository};

/// POST /api/posts
///
/// The author must exist; responds with the stored post and its author.
pub async fn create_post(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreatePostRequest>,
) -> Result<Json<PostResponse>, AppError> {
    let new_post = create_post_to_new_post(request)?;
    if state.storage.get_user(&new_post.author_id).await?.is_none() {
        return Err(AppError::Validation("authorId does not exist".to_string()));
    }
    let post = state.storage.create_post(new_post).await?;

    let post = state
        .storage
        .get_post(&post.id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(post_to_response(&post)))
}

/// GET /api/posts/feed/:user_id?limit=
pub async fn feed(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<FeedQuery>,
) -> Result<Json<Vec<PostResponse>>, AppError> {
    let limit = parse_feed_limit(
        query.limit.as_deref(),
        state.config.feed.default_limit,
        state.config.feed.max_limit,
    )?;
    let posts = state.storage.get_feed_posts(&user_id, Some(limit)).await?;
    Ok(Json(posts_to_response(&posts)))
}

/// GET /api/posts/user/:user_id
pub async fn user_posts(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<PostResponse>>, AppError> {
    let posts = state.storage.get_user_posts(&user_id).await?;
    Ok(Json(posts_to_response(&posts)))
}

/// GET /api/posts/:id
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PostResponse>, AppError> {
    let post = state
        .storage
        .get_post(&id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(post_to_response(&post)))
}

/// DELETE /api/posts/:id
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StatusMessage>, AppError> {
    if !state.storage.delete_post(&id).await? {
        return Err(AppError::NotFound);
    }
    Ok(Json(StatusMessage::new("Post deleted")))
}
