//! Shared builders for service tests

use crate::data::*;

pub fn new_user(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password: "password123".to_string(),
        display_name: username.to_uppercase(),
        bio: None,
        avatar: None,
        cover_photo: None,
        location: None,
        website: None,
    }
}

pub fn new_post(author_id: &str, content: &str) -> NewPost {
    NewPost {
        author_id: author_id.to_string(),
        content: content.to_string(),
        images: vec![],
        post_type: PostType::Post,
        group_id: None,
    }
}

pub fn new_comment(post_id: &str, author_id: &str, content: &str) -> NewComment {
    NewComment {
        post_id: post_id.to_string(),
        author_id: author_id.to_string(),
        content: content.to_string(),
        parent_id: None,
    }
}

pub fn new_group(owner_id: &str, name: &str) -> NewGroup {
    NewGroup {
        name: name.to_string(),
        description: None,
        avatar: None,
        cover_photo: None,
        owner_id: owner_id.to_string(),
        is_private: false,
    }
}

pub fn new_message(conversation_id: &str, sender_id: &str, content: &str) -> NewMessage {
    NewMessage {
        conversation_id: conversation_id.to_string(),
        sender_id: sender_id.to_string(),
        content: content.to_string(),
        message_type: MessageType::Text,
    }
}
