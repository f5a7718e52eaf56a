//! Like repository

use async_trait::async_trait;
use chrono::Utc;

use super::counters;
use super::memory::MemStorage;
use crate::data::LikeTarget;
use crate::error::Result;

#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Flip the like state; returns `true` when the target is now liked
    async fn toggle_like(&self, user_id: &str, target_id: &str, target_type: LikeTarget)
    -> Result<bool>;

    async fn is_liked(&self, user_id: &str, target_id: &str) -> Result<bool>;
}

#[async_trait]
impl LikeRepository for MemStorage {
    async fn toggle_like(
        &self,
        user_id: &str,
        target_id: &str,
        target_type: LikeTarget,
    ) -> Result<bool> {
        let mut store = self.write("toggle", "likes").await;
        let liked = counters::toggle_like(&mut store, user_id, target_id, target_type, Utc::now());

        tracing::debug!(
            user_id = %user_id,
            target_id = %target_id,
            target_type = target_type.as_str(),
            liked,
            "Like toggled"
        );
        Ok(liked)
    }

    async fn is_liked(&self, user_id: &str, target_id: &str) -> Result<bool> {
        let store = self.read("get", "likes").await;
        Ok(store.like(user_id, target_id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::fixtures::{new_comment, new_post, new_user};
    use crate::service::{CommentRepository, PostRepository, UserRepository};

    #[tokio::test]
    async fn double_toggle_restores_state_and_counter() {
        let storage = MemStorage::default();
        let alice = storage.create_user(new_user("alice")).await.unwrap();
        let post = storage.create_post(new_post(&alice.id, "post")).await.unwrap();

        assert!(!storage.is_liked(&alice.id, &post.id).await.unwrap());
        assert!(
            storage
                .toggle_like(&alice.id, &post.id, LikeTarget::Post)
                .await
                .unwrap()
        );
        assert!(storage.is_liked(&alice.id, &post.id).await.unwrap());
        assert!(
            !storage
                .toggle_like(&alice.id, &post.id, LikeTarget::Post)
                .await
                .unwrap()
        );

        assert!(!storage.is_liked(&alice.id, &post.id).await.unwrap());
        let fetched = storage.get_post(&post.id).await.unwrap().unwrap();
        assert_eq!(fetched.post.likes_count, 0);
    }

    #[tokio::test]
    async fn likes_from_different_users_accumulate() {
        let storage = MemStorage::default();
        let alice = storage.create_user(new_user("alice")).await.unwrap();
        let bob = storage.create_user(new_user("bob")).await.unwrap();
        let post = storage.create_post(new_post(&alice.id, "post")).await.unwrap();
        let comment = storage
            .create_comment(new_comment(&post.id, &bob.id, "nice"))
            .await
            .unwrap();

        storage
            .toggle_like(&alice.id, &post.id, LikeTarget::Post)
            .await
            .unwrap();
        storage
            .toggle_like(&bob.id, &post.id, LikeTarget::Post)
            .await
            .unwrap();
        storage
            .toggle_like(&alice.id, &comment.id, LikeTarget::Comment)
            .await
            .unwrap();

        let fetched = storage.get_post(&post.id).await.unwrap().unwrap();
        assert_eq!(fetched.post.likes_count, 2);
        let comments = storage.get_post_comments(&post.id).await.unwrap();
        assert_eq!(comments[0].comment.likes_count, 1);
    }

    #[test]
    fn toggle_is_usable_from_blocking_code() {
        let storage = MemStorage::default();
        let liked = tokio_test::block_on(storage.toggle_like("u", "missing", LikeTarget::Post));
        assert!(liked.unwrap());
        assert!(tokio_test::block_on(storage.is_liked("u", "missing")).unwrap());
    }
}
