//! Mutation counters
//!
//! Mutations that touch a denormalized counter. Counters are adjusted
//! incrementally on the row being inserted or removed, never recomputed,
//! and decrements saturate at zero.

use chrono::{DateTime, Utc};

use crate::data::*;

/// Insert a comment and bump its post's `comments_count`
pub fn insert_comment(store: &mut EntityStore, comment: Comment) {
    if let Some(post) = store.posts.get_mut(&comment.post_id) {
        post.comments_count += 1;
    }
    store.put_comment(comment);
}

/// Remove a comment and decrement its post's `comments_count`
///
/// Returns whether a comment was removed.
pub fn remove_comment(store: &mut EntityStore, comment_id: &str) -> bool {
    let Some(comment) = store.comments.delete(comment_id) else {
        return false;
    };
    if let Some(post) = store.posts.get_mut(&comment.post_id) {
        post.comments_count = post.comments_count.saturating_sub(1);
    }
    true
}

fn likes_counter<'a>(
    store: &'a mut EntityStore,
    target_id: &str,
    target_type: LikeTarget,
) -> Option<&'a mut u32> {
    match target_type {
        LikeTarget::Post => store.posts.get_mut(target_id).map(|post| &mut post.likes_count),
        LikeTarget::Comment => store
            .comments
            .get_mut(target_id)
            .map(|comment| &mut comment.likes_count),
    }
}

/// Flip the like state of (user, target)
///
/// Returns the resulting state: `true` when the target is now liked.
pub fn toggle_like(
    store: &mut EntityStore,
    user_id: &str,
    target_id: &str,
    target_type: LikeTarget,
    now: DateTime<Utc>,
) -> bool {
    if store.likes.delete(&LikeKey::new(user_id, target_id)).is_some() {
        if let Some(count) = likes_counter(store, target_id, target_type) {
            *count = count.saturating_sub(1);
        }
        return false;
    }

    store.put_like(Like {
        id: EntityId::new().0,
        user_id: user_id.to_string(),
        target_id: target_id.to_string(),
        target_type,
        created_at: now,
    });
    if let Some(count) = likes_counter(store, target_id, target_type) {
        *count += 1;
    }
    true
}

/// Insert a group with its owner as the single admin member
pub fn insert_group(store: &mut EntityStore, mut group: Group, now: DateTime<Utc>) -> Group {
    group.members_count = 1;
    store.put_membership(GroupMembership {
        id: EntityId::new().0,
        group_id: group.id.clone(),
        user_id: group.owner_id.clone(),
        role: GroupRole::Admin,
        joined_at: now,
    });
    store.put_group(group.clone());
    group
}

/// Add a member row and bump `members_count` when the group exists
///
/// Membership rows are not de-duplicated.
pub fn join_group(store: &mut EntityStore, user_id: &str, group_id: &str, now: DateTime<Utc>) {
    store.put_membership(GroupMembership {
        id: EntityId::new().0,
        group_id: group_id.to_string(),
        user_id: user_id.to_string(),
        role: GroupRole::Member,
        joined_at: now,
    });
    if let Some(group) = store.groups.get_mut(group_id) {
        group.members_count += 1;
    }
}

/// Remove every membership row for (user, group)
///
/// The counter is decremented once if anything was removed. Returns
/// whether anything was removed.
pub fn leave_group(store: &mut EntityStore, user_id: &str, group_id: &str) -> bool {
    let removed = store.group_memberships.delete_where(|membership| {
        membership.user_id == user_id && membership.group_id == group_id
    });
    if removed == 0 {
        return false;
    }
    if let Some(group) = store.groups.get_mut(group_id) {
        group.members_count = group.members_count.saturating_sub(1);
    }
    true
}

/// Insert a message and point its conversation at it
pub fn insert_message(store: &mut EntityStore, message: Message) {
    if let Some(conversation) = store.conversations.get_mut(&message.conversation_id) {
        conversation.last_message_id = Some(message.id.clone());
        conversation.updated_at = message.created_at;
    }
    store.put_message(message);
}
