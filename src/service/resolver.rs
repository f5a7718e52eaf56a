//! Relationship resolver
//!
//! Read-only joins across the entity store. Every join resolves
//! references through the user collection and drops rows whose
//! reference does not resolve; nothing is substituted for a missing user.

use crate::data::*;

/// Number of posts returned by a feed query when no limit is given
pub const DEFAULT_FEED_LIMIT: usize = 10;

fn newest_first<T>(rows: &mut [&T], created_at: impl Fn(&T) -> chrono::DateTime<chrono::Utc>) {
    rows.sort_by(|a, b| created_at(*b).cmp(&created_at(*a)));
}

fn oldest_first<T>(rows: &mut [&T], created_at: impl Fn(&T) -> chrono::DateTime<chrono::Utc>) {
    rows.sort_by(|a, b| created_at(*a).cmp(&created_at(*b)));
}

/// Attach the author; `None` when the author no longer resolves
pub fn post_with_author(store: &EntityStore, post: &Post) -> Option<PostWithAuthor> {
    let author = store.user(&post.author_id)?;
    Some(PostWithAuthor {
        post: post.clone(),
        author: author.clone(),
        is_liked: None,
    })
}

/// Newest posts across all authors, with like state for `viewer_id`
///
/// Truncation happens before author resolution, so a post with a missing
/// author shortens the page rather than pulling in an older post.
pub fn feed(store: &EntityStore, viewer_id: &str, limit: usize) -> Vec<PostWithAuthor> {
    let mut posts: Vec<&Post> = store.posts.values().collect();
    newest_first(&mut posts, |post| post.created_at);
    posts.truncate(limit);

    posts
        .into_iter()
        .filter_map(|post| {
            let mut resolved = post_with_author(store, post)?;
            resolved.is_liked = Some(store.like(viewer_id, &post.id).is_some());
            Some(resolved)
        })
        .collect()
}

/// Posts by one author, newest first; empty when the author is unknown
pub fn user_posts(store: &EntityStore, author_id: &str) -> Vec<PostWithAuthor> {
    let Some(author) = store.user(author_id) else {
        return Vec::new();
    };

    let mut posts: Vec<&Post> = store
        .posts
        .values()
        .filter(|post| post.author_id == author_id)
        .collect();
    newest_first(&mut posts, |post| post.created_at);

    posts
        .into_iter()
        .map(|post| PostWithAuthor {
            post: post.clone(),
            author: author.clone(),
            is_liked: None,
        })
        .collect()
}

/// Posts in one group, newest first
pub fn group_posts(store: &EntityStore, group_id: &str) -> Vec<PostWithAuthor> {
    let mut posts: Vec<&Post> = store
        .posts
        .values()
        .filter(|post| post.group_id.as_deref() == Some(group_id))
        .collect();
    newest_first(&mut posts, |post| post.created_at);

    posts
        .into_iter()
        .filter_map(|post| post_with_author(store, post))
        .collect()
}

/// Comments on a post, oldest first
pub fn post_comments(store: &EntityStore, post_id: &str) -> Vec<CommentWithAuthor> {
    let mut comments: Vec<&Comment> = store
        .comments
        .values()
        .filter(|comment| comment.post_id == post_id)
        .collect();
    oldest_first(&mut comments, |comment| comment.created_at);

    comments
        .into_iter()
        .filter_map(|comment| {
            let author = store.user(&comment.author_id)?;
            Some(CommentWithAuthor {
                comment: comment.clone(),
                author: author.clone(),
            })
        })
        .collect()
}

/// Case-insensitive substring match on display name or username
pub fn search_users(store: &EntityStore, query: &str) -> Vec<User> {
    let needle = query.to_lowercase();
    store
        .users
        .values()
        .filter(|user| {
            user.display_name.to_lowercase().contains(&needle)
                || user.username.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Accepted friendships in either direction, resolved to the other party
pub fn friends(store: &EntityStore, user_id: &str) -> Vec<User> {
    store
        .friendships
        .values()
        .filter(|friendship| friendship.status == FriendshipStatus::Accepted)
        .filter_map(|friendship| friendship.other_party(user_id))
        .filter_map(|friend_id| store.user(friend_id).cloned())
        .collect()
}

/// Pending requests addressed to `user_id`, with the requester resolved
pub fn friend_requests(store: &EntityStore, user_id: &str) -> Vec<FriendRequest> {
    store
        .friendships
        .values()
        .filter(|friendship| {
            friendship.friend_id == user_id && friendship.status == FriendshipStatus::Pending
        })
        .filter_map(|friendship| {
            let requester = store.user(&friendship.user_id)?;
            Some(FriendRequest {
                friendship: friendship.clone(),
                user: requester.clone(),
            })
        })
        .collect()
}

/// Groups for each of the user's membership rows, in membership order
pub fn user_groups(store: &EntityStore, user_id: &str) -> Vec<Group> {
    store
        .group_memberships
        .values()
        .filter(|membership| membership.user_id == user_id)
        .filter_map(|membership| store.group(&membership.group_id).cloned())
        .collect()
}

fn message_with_sender(store: &EntityStore, message: &Message) -> Option<MessageWithSender> {
    let sender = store.user(&message.sender_id)?;
    Some(MessageWithSender {
        message: message.clone(),
        sender: sender.clone(),
    })
}

/// Participants and last message of a conversation
///
/// Unresolvable participants are dropped. The unread count is a fixed
/// zero: read state is tracked per message but not aggregated here.
pub fn conversation_view(
    store: &EntityStore,
    conversation: &Conversation,
) -> ConversationWithParticipants {
    let participants = conversation
        .participant_ids
        .iter()
        .filter_map(|id| store.user(id).cloned())
        .collect();

    let last_message = conversation
        .last_message_id
        .as_deref()
        .and_then(|id| store.message(id))
        .and_then(|message| message_with_sender(store, message));

    ConversationWithParticipants {
        conversation: conversation.clone(),
        participants,
        last_message,
        unread_count: 0,
    }
}

/// Conversations the user takes part in, most recently updated first
pub fn user_conversations(store: &EntityStore, user_id: &str) -> Vec<ConversationWithParticipants> {
    let mut conversations: Vec<&Conversation> = store
        .conversations
        .values()
        .filter(|conversation| conversation.participant_ids.iter().any(|id| id == user_id))
        .collect();
    newest_first(&mut conversations, |conversation| conversation.updated_at);

    conversations
        .into_iter()
        .map(|conversation| conversation_view(store, conversation))
        .collect()
}

/// Messages in a conversation, oldest first, with senders resolved
pub fn conversation_messages(store: &EntityStore, conversation_id: &str) -> Vec<MessageWithSender> {
    let mut messages: Vec<&Message> = store
        .messages
        .values()
        .filter(|message| message.conversation_id == conversation_id)
        .collect();
    oldest_first(&mut messages, |message| message.created_at);

    messages
        .into_iter()
        .filter_map(|message| message_with_sender(store, message))
        .collect()
}

/// Notifications for a user, newest first
pub fn user_notifications(store: &EntityStore, user_id: &str) -> Vec<Notification> {
    let mut notifications: Vec<&Notification> = store
        .notifications
        .values()
        .filter(|notification| notification.user_id == user_id)
        .collect();
    newest_first(&mut notifications, |notification| notification.created_at);

    notifications.into_iter().cloned().collect()
}
