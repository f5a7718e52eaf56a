//! Conversation and message endpoints

use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::AppState;
use crate::api::{
    ApiJson, ConversationResponse, CreateConversationRequest, MessageResponse,
    SendMessageRequest, StatusMessage, UserIdRequest, acting_user_id, conversation_to_response,
    message_to_response, participant_ids, send_message_to_new_message,
};
use crate::data::{Conversation, Message};
use crate::error::AppError;
use crate::service::MessageRepository;

/// POST /api/conversations
pub async fn create_conversation(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateConversationRequest>,
) -> Result<Json<Conversation>, AppError> {
    let participant_ids = participant_ids(request)?;
    let conversation = state.storage.create_conversation(participant_ids).await?;
    Ok(Json(conversation))
}

/// GET /api/conversations/:id
///
/// `id` is a user id: lists that user's conversations.
pub async fn user_conversations(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<ConversationResponse>>, AppError> {
    let conversations = state.storage.get_user_conversations(&user_id).await?;
    Ok(Json(
        conversations.iter().map(conversation_to_response).collect(),
    ))
}

/// GET /api/conversations/:id/messages
pub async fn conversation_messages(
    State(state): State<AppState>,
    Path(conversation_id): Path<String>,
) -> Result<Json<Vec<MessageResponse>>, AppError> {
    let messages = state
        .storage
        .get_conversation_messages(&conversation_id)
        .await?;
    Ok(Json(messages.iter().map(message_to_response).collect()))
}

/// POST /api/conversations/:id/read
pub async fn mark_read(
    State(state): State<AppState>,
    Path(conversation_id): Path<String>,
    ApiJson(request): ApiJson<UserIdRequest>,
) -> Result<Json<StatusMessage>, AppError> {
    let user_id = acting_user_id(request)?;
    if !state
        .storage
        .mark_messages_as_read(&conversation_id, &user_id)
        .await?
    {
        return Err(AppError::Validation("Failed to mark as read".to_string()));
    }
    Ok(Json(StatusMessage::new("Messages marked as read")))
}

/// POST /api/messages
pub async fn send_message(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<SendMessageRequest>,
) -> Result<Json<Message>, AppError> {
    let new_message = send_message_to_new_message(request)?;
    let message = state.storage.send_message(new_message).await?;
    Ok(Json(message))
}
