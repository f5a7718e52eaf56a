//! SocialHub REST endpoints
//!
//! Each handler validates its input, calls one facade method and maps
//! absence to the matching status code.

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::AppState;

pub mod auth;
pub mod comments;
pub mod friends;
pub mod groups;
pub mod likes;
pub mod messages;
pub mod notifications;
pub mod posts;
pub mod users;

/// Create the `/api` router
pub fn social_api_router() -> Router<AppState> {
    Router::new()
        // Auth
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        // Users
        .route("/users/:id", get(users::get_user).put(users::update_user))
        .route("/users/search/:query", get(users::search_users))
        .route(
            "/users/:id/suggested-friends",
            get(users::suggested_friends),
        )
        .route("/users/:id/groups", get(groups::user_groups))
        // Posts
        .route("/posts", post(posts::create_post))
        .route("/posts/feed/:user_id", get(posts::feed))
        .route("/posts/user/:user_id", get(posts::user_posts))
        .route("/posts/:id", get(posts::get_post).delete(posts::delete_post))
        .route("/posts/:id/comments", get(comments::post_comments))
        // Comments
        .route("/comments", post(comments::create_comment))
        .route("/comments/:id", delete(comments::delete_comment))
        // Likes
        .route("/likes", post(likes::toggle_like))
        .route("/likes/:user_id/:target_id", get(likes::is_liked))
        // Friends
        .route("/friends/request", post(friends::send_request))
        .route("/friends/accept", post(friends::accept_request))
        .route("/friends/requests/:id", get(friends::friend_requests))
        .route("/friends/:id", get(friends::friends))
        .route("/friends/:id/:friend_id", delete(friends::remove_friend))
        // Groups
        .route("/groups", post(groups::create_group))
        .route("/groups/:id", get(groups::get_group))
        .route("/groups/:id/join", post(groups::join_group))
        .route("/groups/:id/leave", post(groups::leave_group))
        .route("/groups/:id/posts", get(groups::group_posts))
        // Conversations & messages
        .route("/conversations", post(messages::create_conversation))
        .route("/conversations/:id", get(messages::user_conversations))
        .route(
            "/conversations/:id/messages",
            get(messages::conversation_messages),
        )
        .route("/conversations/:id/read", post(messages::mark_read))
        .route("/messages", post(messages::send_message))
        // Notifications
        .route("/notifications/:id", get(notifications::user_notifications))
        .route("/notifications/:id/read", post(notifications::mark_read))
        .route(
            "/notifications/:id/unread-count",
            get(notifications::unread_count),
        )
}
