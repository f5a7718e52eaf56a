//! Comment repository

use async_trait::async_trait;
use chrono::Utc;

use super::counters;
use super::memory::MemStorage;
use super::resolver;
use crate::data::{Comment, CommentWithAuthor, EntityId, NewComment};
use crate::error::Result;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Store a comment and bump the post's comment counter
    async fn create_comment(&self, new_comment: NewComment) -> Result<Comment>;

    /// Comments on a post, oldest first
    async fn get_post_comments(&self, post_id: &str) -> Result<Vec<CommentWithAuthor>>;

    /// Whether a comment was removed
    async fn delete_comment(&self, id: &str) -> Result<bool>;
}

#[async_trait]
impl CommentRepository for MemStorage {
    async fn create_comment(&self, new_comment: NewComment) -> Result<Comment> {
        let mut store = self.write("insert", "comments").await;
        let comment = Comment {
            id: EntityId::new().0,
            post_id: new_comment.post_id,
            author_id: new_comment.author_id,
            content: new_comment.content,
            parent_id: new_comment.parent_id,
            likes_count: 0,
            created_at: Utc::now(),
        };

        counters::insert_comment(&mut store, comment.clone());

        tracing::debug!(comment_id = %comment.id, post_id = %comment.post_id, "Comment created");
        Ok(comment)
    }

    async fn get_post_comments(&self, post_id: &str) -> Result<Vec<CommentWithAuthor>> {
        let store = self.read("find", "comments").await;
        Ok(resolver::post_comments(&store, post_id))
    }

    async fn delete_comment(&self, id: &str) -> Result<bool> {
        let mut store = self.write("delete", "comments").await;
        Ok(counters::remove_comment(&mut store, id))
    }
}
