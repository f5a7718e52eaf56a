//! Group repository

use async_trait::async_trait;
use chrono::Utc;

use super::counters;
use super::memory::MemStorage;
use super::resolver;
use crate::data::{EntityId, Group, NewGroup};
use crate::error::Result;
use crate::metrics::GROUPS_TOTAL;

#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// Create a group with the owner as its first admin
    async fn create_group(&self, new_group: NewGroup) -> Result<Group>;

    async fn get_group(&self, id: &str) -> Result<Option<Group>>;

    async fn get_user_groups(&self, user_id: &str) -> Result<Vec<Group>>;

    /// Add a member row; always succeeds
    async fn join_group(&self, user_id: &str, group_id: &str) -> Result<bool>;

    /// Whether any membership row was removed
    async fn leave_group(&self, user_id: &str, group_id: &str) -> Result<bool>;
}

#[async_trait]
impl GroupRepository for MemStorage {
    async fn create_group(&self, new_group: NewGroup) -> Result<Group> {
        let mut store = self.write("insert", "groups").await;
        let now = Utc::now();
        let group = Group {
            id: EntityId::new().0,
            name: new_group.name,
            description: new_group.description,
            avatar: new_group.avatar,
            cover_photo: new_group.cover_photo,
            owner_id: new_group.owner_id,
            members_count: 0,
            is_private: new_group.is_private,
            created_at: now,
        };

        let group = counters::insert_group(&mut store, group, now);
        GROUPS_TOTAL.set(store.groups.len() as i64);

        tracing::debug!(group_id = %group.id, owner_id = %group.owner_id, "Group created");
        Ok(group)
    }

    async fn get_group(&self, id: &str) -> Result<Option<Group>> {
        let store = self.read("get", "groups").await;
        Ok(store.group(id).cloned())
    }

    async fn get_user_groups(&self, user_id: &str) -> Result<Vec<Group>> {
        let store = self.read("find", "group_memberships").await;
        Ok(resolver::user_groups(&store, user_id))
    }

    async fn join_group(&self, user_id: &str, group_id: &str) -> Result<bool> {
        let mut store = self.write("insert", "group_memberships").await;
        counters::join_group(&mut store, user_id, group_id, Utc::now());

        tracing::debug!(user_id = %user_id, group_id = %group_id, "Joined group");
        Ok(true)
    }

    async fn leave_group(&self, user_id: &str, group_id: &str) -> Result<bool> {
        let mut store = self.write("delete", "group_memberships").await;
        Ok(counters::leave_group(&mut store, user_id, group_id))
    }
}
