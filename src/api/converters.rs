//! Conversion functions between service models and API DTOs
//!
//! Request conversions validate the body and produce the facade's insert
//! payloads; response conversions strip credentials from users.

use crate::api::dto::*;
use crate::data::{
    CommentWithAuthor, ConversationWithParticipants, FriendRequest, MessageWithSender, NewComment,
    NewGroup, NewMessage, NewPost, NewUser, PostWithAuthor, User, UserPatch, UserWithStats,
};
use crate::error::AppError;

// =============================================================================
// Responses
// =============================================================================

/// Convert User to UserResponse, dropping the password digest
pub fn user_to_response(user: &User) -> UserResponse {
    UserResponse {
        id: user.id.clone(),
        username: user.username.clone(),
        email: user.email.clone(),
        display_name: user.display_name.clone(),
        bio: user.bio.clone(),
        avatar: user.avatar.clone(),
        cover_photo: user.cover_photo.clone(),
        location: user.location.clone(),
        website: user.website.clone(),
        is_online: user.is_online,
        last_seen: user.last_seen,
        created_at: user.created_at,
    }
}

pub fn users_to_response(users: &[User]) -> Vec<UserResponse> {
    users.iter().map(user_to_response).collect()
}

pub fn suggestion_to_response(suggestion: &UserWithStats) -> SuggestedFriendResponse {
    SuggestedFriendResponse {
        user: user_to_response(&suggestion.user),
        friends_count: suggestion.friends_count,
        posts_count: suggestion.posts_count,
        is_friend: suggestion.is_friend,
        friendship_status: suggestion.friendship_status.clone(),
    }
}

pub fn post_to_response(post: &PostWithAuthor) -> PostResponse {
    PostResponse {
        post: post.post.clone(),
        author: user_to_response(&post.author),
        is_liked: post.is_liked,
    }
}

pub fn posts_to_response(posts: &[PostWithAuthor]) -> Vec<PostResponse> {
    posts.iter().map(post_to_response).collect()
}

pub fn comment_to_response(comment: &CommentWithAuthor) -> CommentResponse {
    CommentResponse {
        comment: comment.comment.clone(),
        author: user_to_response(&comment.author),
    }
}

pub fn friend_request_to_response(request: &FriendRequest) -> FriendRequestResponse {
    FriendRequestResponse {
        friendship: request.friendship.clone(),
        user: user_to_response(&request.user),
    }
}

pub fn message_to_response(message: &MessageWithSender) -> MessageResponse {
    MessageResponse {
        message: message.message.clone(),
        sender: user_to_response(&message.sender),
    }
}

pub fn conversation_to_response(view: &ConversationWithParticipants) -> ConversationResponse {
    ConversationResponse {
        conversation: view.conversation.clone(),
        participants: users_to_response(&view.participants),
        last_message: view.last_message.as_ref().map(message_to_response),
        unread_count: view.unread_count,
    }
}

// =============================================================================
// Requests
// =============================================================================

/// Reject blank strings; returns the value trimmed
fn required(field: &str, value: String) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

pub fn register_to_new_user(request: RegisterRequest) -> Result<NewUser, AppError> {
    let email = required("email", request.email)?;
    if !email.contains('@') {
        return Err(AppError::Validation("email is invalid".to_string()));
    }
    if request.password.trim().is_empty() {
        return Err(AppError::Validation("password is required".to_string()));
    }

    Ok(NewUser {
        username: required("username", request.username)?,
        email,
        password: request.password,
        display_name: required("displayName", request.display_name)?,
        bio: request.bio,
        avatar: request.avatar,
        cover_photo: request.cover_photo,
        location: request.location,
        website: request.website,
    })
}

pub fn update_to_patch(request: UpdateUserRequest) -> Result<UserPatch, AppError> {
    let display_name = request
        .display_name
        .map(|name| required("displayName", name))
        .transpose()?;

    Ok(UserPatch {
        display_name,
        bio: request.bio,
        avatar: request.avatar,
        cover_photo: request.cover_photo,
        location: request.location,
        website: request.website,
        is_online: request.is_online,
        last_seen: request.last_seen,
    })
}

pub fn create_post_to_new_post(request: CreatePostRequest) -> Result<NewPost, AppError> {
    Ok(NewPost {
        author_id: required("authorId", request.author_id)?,
        content: required("content", request.content)?,
        images: request.images,
        post_type: request.post_type,
        group_id: request.group_id,
    })
}

/// Parse the feed `limit` query parameter
///
/// Missing means `default_limit`; anything else must be a positive integer
/// and is capped at `max_limit`.
pub fn parse_feed_limit(
    raw: Option<&str>,
    default_limit: usize,
    max_limit: usize,
) -> Result<usize, AppError> {
    let Some(raw) = raw else {
        return Ok(default_limit);
    };
    match raw.trim().parse::<usize>() {
        Ok(limit) if limit > 0 => Ok(limit.min(max_limit)),
        _ => Err(AppError::Validation(
            "limit must be a positive integer".to_string(),
        )),
    }
}

pub fn create_comment_to_new_comment(
    request: CreateCommentRequest,
) -> Result<NewComment, AppError> {
    Ok(NewComment {
        post_id: required("postId", request.post_id)?,
        author_id: required("authorId", request.author_id)?,
        content: required("content", request.content)?,
        parent_id: request.parent_id,
    })
}

/// Validate a friend request body; returns (requester, recipient)
pub fn friend_pair(request: FriendPairRequest) -> Result<(String, String), AppError> {
    let user_id = required("userId", request.user_id)?;
    let friend_id = required("friendId", request.friend_id)?;
    Ok((user_id, friend_id))
}

pub fn create_group_to_new_group(request: CreateGroupRequest) -> Result<NewGroup, AppError> {
    Ok(NewGroup {
        name: required("name", request.name)?,
        description: request.description,
        avatar: request.avatar,
        cover_photo: request.cover_photo,
        owner_id: required("ownerId", request.owner_id)?,
        is_private: request.is_private,
    })
}

pub fn participant_ids(request: CreateConversationRequest) -> Result<Vec<String>, AppError> {
    let ids = request
        .participant_ids
        .into_iter()
        .map(|id| required("participantIds", id))
        .collect::<Result<Vec<_>, _>>()?;
    if ids.is_empty() {
        return Err(AppError::Validation(
            "participantIds must not be empty".to_string(),
        ));
    }
    Ok(ids)
}

pub fn send_message_to_new_message(request: SendMessageRequest) -> Result<NewMessage, AppError> {
    Ok(NewMessage {
        conversation_id: required("conversationId", request.conversation_id)?,
        sender_id: required("senderId", request.sender_id)?,
        content: required("content", request.content)?,
        message_type: request.message_type,
    })
}

pub fn acting_user_id(request: UserIdRequest) -> Result<String, AppError> {
    required("userId", request.user_id)
}
