//! Service layer
//!
//! The facade the HTTP handlers call. Each entity has a narrow
//! repository trait; `Storage` bundles them so handlers hold a single
//! `Arc<dyn Storage>` that a database-backed implementation can replace.

mod comments;
mod counters;
mod friendships;
mod groups;
mod likes;
mod memory;
mod messages;
mod notifications;
mod posts;
mod resolver;
mod suggestions;
mod users;

#[cfg(test)]
mod fixtures;

pub use comments::CommentRepository;
pub use friendships::FriendshipRepository;
pub use groups::GroupRepository;
pub use likes::LikeRepository;
pub use memory::MemStorage;
pub use messages::MessageRepository;
pub use notifications::NotificationRepository;
pub use posts::PostRepository;
pub use resolver::DEFAULT_FEED_LIMIT;
pub use suggestions::{FriendSuggestionPolicy, RandomStatsPolicy};
pub use users::UserRepository;

use crate::data::{NewGroup, NewUser, UserPatch};
use crate::error::Result;

/// Every repository behind one object
pub trait Storage:
    UserRepository
    + PostRepository
    + CommentRepository
    + LikeRepository
    + FriendshipRepository
    + GroupRepository
    + MessageRepository
    + NotificationRepository
    + Send
    + Sync
{
}

impl<T> Storage for T where
    T: UserRepository
        + PostRepository
        + CommentRepository
        + LikeRepository
        + FriendshipRepository
        + GroupRepository
        + MessageRepository
        + NotificationRepository
        + Send
        + Sync
{
}

/// Populate an empty store with a demo user and a group they own
///
/// Goes through the facade so the group's member counter and the owner's
/// admin membership are set up like any other group.
pub async fn seed_demo_data(storage: &dyn Storage) -> Result<()> {
    let user = storage
        .create_user(NewUser {
            username: "alexjohnson".to_string(),
            email: "alex@example.com".to_string(),
            password: "password123".to_string(),
            display_name: "Alex Johnson".to_string(),
            bio: Some("Web Developer & Designer".to_string()),
            avatar: None,
            cover_photo: None,
            location: Some("San Francisco, CA".to_string()),
            website: Some("https://alexjohnson.dev".to_string()),
        })
        .await?;
    storage
        .update_user(
            &user.id,
            UserPatch {
                is_online: Some(true),
                ..UserPatch::default()
            },
        )
        .await?;

    let group = storage
        .create_group(NewGroup {
            name: "Web Developers Hub".to_string(),
            description: Some(
                "A community for web developers to share knowledge and network".to_string(),
            ),
            avatar: None,
            cover_photo: None,
            owner_id: user.id.clone(),
            is_private: false,
        })
        .await?;

    tracing::info!(user_id = %user.id, group_id = %group.id, "Seeded demo data");
    Ok(())
}
