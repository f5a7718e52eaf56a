//! Like endpoints

use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::AppState;
use crate::api::{ApiJson, IsLikedResponse, LikeToggleResponse, ToggleLikeRequest};
use crate::error::AppError;
use crate::service::LikeRepository;

/// POST /api/likes
pub async fn toggle_like(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<ToggleLikeRequest>,
) -> Result<Json<LikeToggleResponse>, AppError> {
    if request.user_id.trim().is_empty() || request.target_id.trim().is_empty() {
        return Err(AppError::Validation(
            "userId and targetId are required".to_string(),
        ));
    }

    let liked = state
        .storage
        .toggle_like(&request.user_id, &request.target_id, request.target_type)
        .await?;
    Ok(Json(LikeToggleResponse { liked }))
}

/// GET /api/likes/:user_id/:target_id
pub async fn is_liked(
    State(state): State<AppState>,
    Path((user_id, target_id)): Path<(String, String)>,
) -> Result<Json<IsLikedResponse>, AppError> {
    let is_liked = state.storage.is_liked(&user_id, &target_id).await?;
    Ok(Json(IsLikedResponse { is_liked }))
}
