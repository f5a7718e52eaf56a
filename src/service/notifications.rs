//! Notification repository

use async_trait::async_trait;
use chrono::Utc;

use super::memory::MemStorage;
use super::resolver;
use crate::data::{EntityId, NewNotification, Notification};
use crate::error::Result;

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn create_notification(&self, new_notification: NewNotification)
    -> Result<Notification>;

    /// Newest first
    async fn get_user_notifications(&self, user_id: &str) -> Result<Vec<Notification>>;

    /// Whether the notification exists
    async fn mark_notification_as_read(&self, id: &str) -> Result<bool>;

    async fn get_unread_notifications_count(&self, user_id: &str) -> Result<usize>;
}

#[async_trait]
impl NotificationRepository for MemStorage {
    async fn create_notification(
        &self,
        new_notification: NewNotification,
    ) -> Result<Notification> {
        let mut store = self.write("insert", "notifications").await;
        let notification = Notification {
            id: EntityId::new().0,
            user_id: new_notification.user_id,
            notification_type: new_notification.notification_type,
            title: new_notification.title,
            content: new_notification.content,
            target_id: new_notification.target_id,
            is_read: false,
            created_at: Utc::now(),
        };

        store.put_notification(notification.clone());
        Ok(notification)
    }

    async fn get_user_notifications(&self, user_id: &str) -> Result<Vec<Notification>> {
        let store = self.read("find", "notifications").await;
        Ok(resolver::user_notifications(&store, user_id))
    }

    async fn mark_notification_as_read(&self, id: &str) -> Result<bool> {
        let mut store = self.write("update", "notifications").await;
        let Some(notification) = store.notifications.get_mut(id) else {
            return Ok(false);
        };
        notification.is_read = true;
        Ok(true)
    }

    async fn get_unread_notifications_count(&self, user_id: &str) -> Result<usize> {
        let store = self.read("count", "notifications").await;
        Ok(store
            .notifications
            .values()
            .filter(|notification| notification.user_id == user_id && !notification.is_read)
            .count())
    }
}
