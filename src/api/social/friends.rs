//! Friendship endpoints

use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::AppState;
use crate::api::{
    ApiJson, FriendPairRequest, FriendRequestResponse, StatusMessage, UserResponse,
    friend_pair, friend_request_to_response, users_to_response,
};
use crate::data::Friendship;
use crate::error::AppError;
use crate::service::FriendshipRepository;

/// POST /api/friends/request
pub async fn send_request(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<FriendPairRequest>,
) -> Result<Json<Friendship>, AppError> {
    let (user_id, friend_id) = friend_pair(request)?;
    if user_id == friend_id {
        return Err(AppError::Validation(
            "cannot send a friend request to yourself".to_string(),
        ));
    }

    let friendship = state
        .storage
        .send_friend_request(&user_id, &friend_id)
        .await?;
    Ok(Json(friendship))
}

/// POST /api/friends/accept
///
/// `userId` is the recipient accepting, `friendId` the requester.
pub async fn accept_request(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<FriendPairRequest>,
) -> Result<Json<StatusMessage>, AppError> {
    let (user_id, friend_id) = friend_pair(request)?;
    if !state
        .storage
        .accept_friend_request(&user_id, &friend_id)
        .await?
    {
        return Err(AppError::NotFound);
    }
    Ok(Json(StatusMessage::new("Friend request accepted")))
}

/// DELETE /api/friends/:id/:friend_id
pub async fn remove_friend(
    State(state): State<AppState>,
    Path((user_id, friend_id)): Path<(String, String)>,
) -> Result<Json<StatusMessage>, AppError> {
    if !state.storage.remove_friend(&user_id, &friend_id).await? {
        return Err(AppError::NotFound);
    }
    Ok(Json(StatusMessage::new("Friend removed")))
}

/// GET /api/friends/:id
pub async fn friends(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let friends = state.storage.get_friends(&user_id).await?;
    Ok(Json(users_to_response(&friends)))
}

/// GET /api/friends/requests/:id
pub async fn friend_requests(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<FriendRequestResponse>>, AppError> {
    let requests = state.storage.get_friend_requests(&user_id).await?;
    Ok(Json(
        requests.iter().map(friend_request_to_response).collect(),
    ))
}
