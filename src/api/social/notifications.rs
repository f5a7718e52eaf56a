//! Notification endpoints

use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::AppState;
use crate::api::{CountResponse, StatusMessage};
use crate::data::Notification;
use crate::error::AppError;
use crate::service::NotificationRepository;

/// GET /api/notifications/:id
///
/// `id` is the recipient's user id.
pub async fn user_notifications(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Notification>>, AppError> {
    Ok(Json(state.storage.get_user_notifications(&user_id).await?))
}

/// POST /api/notifications/:id/read
pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StatusMessage>, AppError> {
    if !state.storage.mark_notification_as_read(&id).await? {
        return Err(AppError::NotFound);
    }
    Ok(Json(StatusMessage::new("Notification marked as read")))
}

/// GET /api/notifications/:id/unread-count
pub async fn unread_count(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<CountResponse>, AppError> {
    let count = state
        .storage
        .get_unread_notifications_count(&user_id)
        .await?;
    Ok(Json(CountResponse { count }))
}
