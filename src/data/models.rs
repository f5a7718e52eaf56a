//! Data models
//!
//! Rust structs representing stored entities, the insert payloads that
//! create them, and the joined views returned by the service layer.
//! All models use ULID for IDs and chrono for timestamps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// ID Types
// =============================================================================

/// Entity ID wrapper (ULID format, 26 characters)
///
/// Example: "01ARZ3NDEKTSV4RRFFQ69G5FAV"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub String);

impl EntityId {
    /// Generate a new ULID
    pub fn new() -> Self {
        Self(ulid::Ulid::new().to_string())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Users
// =============================================================================

/// A registered user
///
/// `password_hash` never leaves the process; API responses are built
/// through `UserResponse`, which has no credential field.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    /// Salted SHA-256 digest, see `data::credentials`
    pub password_hash: String,
    pub display_name: String,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub cover_photo: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub is_online: bool,
    pub last_seen: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Registration payload
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    /// Plain password as submitted; hashed before storage
    pub password: String,
    pub display_name: String,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub cover_photo: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
}

/// Partial profile update
///
/// `None` leaves a field untouched. Optional profile fields use a nested
/// option so a caller can clear them with `Some(None)`.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub display_name: Option<String>,
    pub bio: Option<Option<String>>,
    pub avatar: Option<Option<String>>,
    pub cover_photo: Option<Option<String>>,
    pub location: Option<Option<String>>,
    pub website: Option<Option<String>>,
    pub is_online: Option<bool>,
    pub last_seen: Option<DateTime<Utc>>,
}

/// User annotated with recommendation stats
#[derive(Debug, Clone)]
pub struct UserWithStats {
    pub user: User,
    pub friends_count: u32,
    pub posts_count: u32,
    pub is_friend: bool,
    pub friendship_status: String,
}

// =============================================================================
// Posts
// =============================================================================

/// Post kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostType {
    #[default]
    Post,
    Story,
    Reel,
}

/// A post, story or reel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub author_id: String,
    pub content: String,
    pub images: Vec<String>,
    #[serde(rename = "type")]
    pub post_type: PostType,
    pub group_id: Option<String>,
    pub likes_count: u32,
    pub comments_count: u32,
    pub shares_count: u32,
    pub created_at: DateTime<Utc>,
}

/// Post creation payload
#[derive(Debug, Clone)]
pub struct NewPost {
    pub author_id: String,
    pub content: String,
    pub images: Vec<String>,
    pub post_type: PostType,
    pub group_id: Option<String>,
}

/// Post joined with its author
///
/// `is_liked` is only populated by feed queries, relative to the viewer.
#[derive(Debug, Clone)]
pub struct PostWithAuthor {
    pub post: Post,
    pub author: User,
    pub is_liked: Option<bool>,
}

// =============================================================================
// Comments
// =============================================================================

/// A comment on a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub post_id: String,
    pub author_id: String,
    pub content: String,
    /// Reply target; stored but not used for threading
    pub parent_id: Option<String>,
    pub likes_count: u32,
    pub created_at: DateTime<Utc>,
}

/// Comment creation payload
#[derive(Debug, Clone)]
pub struct NewComment {
    pub post_id: String,
    pub author_id: String,
    pub content: String,
    pub parent_id: Option<String>,
}

/// Comment joined with its author
#[derive(Debug, Clone)]
pub struct CommentWithAuthor {
    pub comment: Comment,
    pub author: User,
}

// =============================================================================
// Likes
// =============================================================================

/// What a like points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LikeTarget {
    Post,
    Comment,
}

impl LikeTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::Comment => "comment",
        }
    }
}

/// Identity of a like: one per (user, target)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LikeKey {
    pub user_id: String,
    pub target_id: String,
}

impl LikeKey {
    pub fn new(user_id: &str, target_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            target_id: target_id.to_string(),
        }
    }
}

/// Like relationship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    pub id: String,
    pub user_id: String,
    pub target_id: String,
    pub target_type: LikeTarget,
    pub created_at: DateTime<Utc>,
}

impl Like {
    pub fn key(&self) -> LikeKey {
        LikeKey::new(&self.user_id, &self.target_id)
    }
}

// =============================================================================
// Friendships
// =============================================================================

/// Friendship status
///
/// `Blocked` exists in the data model but no operation transitions into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FriendshipStatus {
    Pending,
    Accepted,
    Blocked,
}

/// Directed friendship edge (requester -> recipient)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Friendship {
    pub id: String,
    /// Requester
    pub user_id: String,
    /// Recipient
    pub friend_id: String,
    pub status: FriendshipStatus,
    pub created_at: DateTime<Utc>,
}

impl Friendship {
    /// Whether this edge connects the two users in either direction
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.user_id == a && self.friend_id == b) || (self.user_id == b && self.friend_id == a)
    }

    /// The party on the other side of `user_id`, if `user_id` is on this edge
    pub fn other_party(&self, user_id: &str) -> Option<&str> {
        if self.user_id == user_id {
            Some(&self.friend_id)
        } else if self.friend_id == user_id {
            Some(&self.user_id)
        } else {
            None
        }
    }
}

/// Pending request joined with the requesting user
#[derive(Debug, Clone)]
pub struct FriendRequest {
    pub friendship: Friendship,
    pub user: User,
}

// =============================================================================
// Groups
// =============================================================================

/// A group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub avatar: Option<String>,
    pub cover_photo: Option<String>,
    pub owner_id: String,
    pub members_count: u32,
    pub is_private: bool,
    pub created_at: DateTime<Utc>,
}

/// Group creation payload
#[derive(Debug, Clone)]
pub struct NewGroup {
    pub name: String,
    pub description: Option<String>,
    pub avatar: Option<String>,
    pub cover_photo: Option<String>,
    pub owner_id: String,
    pub is_private: bool,
}

/// Member role inside a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupRole {
    Member,
    Moderator,
    Admin,
}

/// Group membership edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMembership {
    pub id: String,
    pub group_id: String,
    pub user_id: String,
    pub role: GroupRole,
    pub joined_at: DateTime<Utc>,
}

// =============================================================================
// Conversations & Messages
// =============================================================================

/// Direct message thread
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    /// Fixed at creation
    pub participant_ids: Vec<String>,
    pub last_message_id: Option<String>,
    pub updated_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Message kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    #[default]
    Text,
    Image,
    File,
}

/// A message inside a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub conversation_id: String,
    pub sender_id: String,
    pub content: String,
    #[serde(rename = "type")]
    pub message_type: MessageType,
    pub read_by: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Message creation payload
#[derive(Debug, Clone)]
pub struct NewMessage {
    pub conversation_id: String,
    pub sender_id: String,
    pub content: String,
    pub message_type: MessageType,
}

/// Message joined with its sender
#[derive(Debug, Clone)]
pub struct MessageWithSender {
    pub message: Message,
    pub sender: User,
}

/// Conversation joined with participants and last message
#[derive(Debug, Clone)]
pub struct ConversationWithParticipants {
    pub conversation: Conversation,
    pub participants: Vec<User>,
    pub last_message: Option<MessageWithSender>,
    /// Always zero: per-user unread tracking is not implemented
    pub unread_count: u32,
}

// =============================================================================
// Notifications
// =============================================================================

/// Notification types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    Like,
    Comment,
    FriendRequest,
    Message,
}

/// Notification for a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    /// Recipient
    pub user_id: String,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub title: String,
    pub content: Option<String>,
    pub target_id: Option<String>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// Notification creation payload
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub user_id: String,
    pub notification_type: NotificationType,
    pub title: String,
    pub content: Option<String>,
    pub target_id: Option<String>,
}
