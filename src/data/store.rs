//! Entity store
//!
//! One keyed collection per entity type. No validation and no constraints
//! beyond key uniqueness; joins and counter maintenance live in the
//! service layer.

use super::collection::Collection;
use super::models::*;

/// All in-memory collections
///
/// Constructed once per process and owned by `service::MemStorage`.
#[derive(Debug, Default)]
pub struct EntityStore {
    pub users: Collection<String, User>,
    pub posts: Collection<String, Post>,
    pub comments: Collection<String, Comment>,
    /// Keyed by (user, target): at most one like per pair
    pub likes: Collection<LikeKey, Like>,
    pub friendships: Collection<String, Friendship>,
    pub groups: Collection<String, Group>,
    pub group_memberships: Collection<String, GroupMembership>,
    pub conversations: Collection<String, Conversation>,
    pub messages: Collection<String, Message>,
    pub notifications: Collection<String, Notification>,
}

impl EntityStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    pub fn put_user(&mut self, user: User) {
        self.users.put(user.id.clone(), user);
    }

    pub fn post(&self, id: &str) -> Option<&Post> {
        self.posts.get(id)
    }

    pub fn put_post(&mut self, post: Post) {
        self.posts.put(post.id.clone(), post);
    }

    pub fn comment(&self, id: &str) -> Option<&Comment> {
        self.comments.get(id)
    }

    pub fn put_comment(&mut self, comment: Comment) {
        self.comments.put(comment.id.clone(), comment);
    }

    pub fn like(&self, user_id: &str, target_id: &str) -> Option<&Like> {
        self.likes.get(&LikeKey::new(user_id, target_id))
    }

    pub fn put_like(&mut self, like: Like) {
        self.likes.put(like.key(), like);
    }

    pub fn put_friendship(&mut self, friendship: Friendship) {
        self.friendships.put(friendship.id.clone(), friendship);
    }

    pub fn group(&self, id: &str) -> Option<&Group> {
        self.groups.get(id)
    }

    pub fn put_group(&mut self, group: Group) {
        self.groups.put(group.id.clone(), group);
    }

    pub fn put_membership(&mut self, membership: GroupMembership) {
        self.group_memberships
            .put(membership.id.clone(), membership);
    }

    pub fn conversation(&self, id: &str) -> Option<&Conversation> {
        self.conversations.get(id)
    }

    pub fn put_conversation(&mut self, conversation: Conversation) {
        self.conversations
            .put(conversation.id.clone(), conversation);
    }

    pub fn message(&self, id: &str) -> Option<&Message> {
        self.messages.get(id)
    }

    pub fn put_message(&mut self, message: Message) {
        self.messages.put(message.id.clone(), message);
    }

    pub fn put_notification(&mut self, notification: Notification) {
        self.notifications
            .put(notification.id.clone(), notification);
    }
}
