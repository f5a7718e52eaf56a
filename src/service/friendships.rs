//! Friendship repository
//!
//! Requests are stored as directed edges. `pending -> accepted` happens
//! only through the recipient; removal works from either side in any
//! status.

use async_trait::async_trait;
use chrono::Utc;

use super::memory::MemStorage;
use super::resolver;
use crate::data::{EntityId, FriendRequest, Friendship, FriendshipStatus, User};
use crate::error::Result;

#[async_trait]
pub trait FriendshipRepository: Send + Sync {
    /// Record a pending request from `user_id` to `friend_id`
    async fn send_friend_request(&self, user_id: &str, friend_id: &str) -> Result<Friendship>;

    /// Accept the pending request `friend_id` sent to `user_id`
    ///
    /// Returns `false` when no such request exists, including when the
    /// caller is the requester.
    async fn accept_friend_request(&self, user_id: &str, friend_id: &str) -> Result<bool>;

    /// Remove every edge between the two users
    async fn remove_friend(&self, user_id: &str, friend_id: &str) -> Result<bool>;

    async fn get_friends(&self, user_id: &str) -> Result<Vec<User>>;

    async fn get_friend_requests(&self, user_id: &str) -> Result<Vec<FriendRequest>>;
}

#[async_trait]
impl FriendshipRepository for MemStorage {
    async fn send_friend_request(&self, user_id: &str, friend_id: &str) -> Result<Friendship> {
        let mut store = self.write("insert", "friendships").await;
        let friendship = Friendship {
            id: EntityId::new().0,
            user_id: user_id.to_string(),
            friend_id: friend_id.to_string(),
            status: FriendshipStatus::Pending,
            created_at: Utc::now(),
        };

        store.put_friendship(friendship.clone());

        tracing::debug!(from = %user_id, to = %friend_id, "Friend request sent");
        Ok(friendship)
    }

    async fn accept_friend_request(&self, user_id: &str, friend_id: &str) -> Result<bool> {
        let mut store = self.write("update", "friendships").await;
        let id = store
            .friendships
            .values()
            .find(|friendship| {
                friendship.user_id == friend_id
                    && friendship.friend_id == user_id
                    && friendship.status == FriendshipStatus::Pending
            })
            .map(|friendship| friendship.id.clone());

        let Some(friendship) = id.and_then(|id| store.friendships.get_mut(&id)) else {
            return Ok(false);
        };
        friendship.status = FriendshipStatus::Accepted;

        tracing::debug!(user_id = %user_id, friend_id = %friend_id, "Friend request accepted");
        Ok(true)
    }

    async fn remove_friend(&self, user_id: &str, friend_id: &str) -> Result<bool> {
        let mut store = self.write("delete", "friendships").await;
        let removed = store
            .friendships
            .delete_where(|friendship| friendship.connects(user_id, friend_id));
        Ok(removed > 0)
    }

    async fn get_friends(&self, user_id: &str) -> Result<Vec<User>> {
        let store = self.read("find", "friendships").await;
        Ok(resolver::friends(&store, user_id))
    }

    async fn get_friend_requests(&self, user_id: &str) -> Result<Vec<FriendRequest>> {
        let store = self.read("find", "friendships").await;
        Ok(resolver::friend_requests(&store, user_id))
    }
}
