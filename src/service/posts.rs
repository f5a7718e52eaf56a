//! Post repository
//!
//! Post creation and deletion plus the author-resolved read paths:
//! single post, feed, per-author and per-group listings.

use async_trait::async_trait;
use chrono::Utc;

use super::memory::MemStorage;
use super::resolver::{self, DEFAULT_FEED_LIMIT};
use crate::data::{EntityId, NewPost, Post, PostWithAuthor};
use crate::error::Result;
use crate::metrics::POSTS_TOTAL;

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create_post(&self, new_post: NewPost) -> Result<Post>;

    /// Post with author; `None` if the post or its author is missing
    async fn get_post(&self, id: &str) -> Result<Option<PostWithAuthor>>;

    /// Newest posts across all authors with like state for `user_id`
    ///
    /// `limit` defaults to 10.
    async fn get_feed_posts(&self, user_id: &str, limit: Option<usize>)
    -> Result<Vec<PostWithAuthor>>;

    async fn get_user_posts(&self, user_id: &str) -> Result<Vec<PostWithAuthor>>;

    async fn get_group_posts(&self, group_id: &str) -> Result<Vec<PostWithAuthor>>;

    /// Whether a post was removed
    async fn delete_post(&self, id: &str) -> Result<bool>;
}

#[async_trait]
impl PostRepository for MemStorage {
    async fn create_post(&self, new_post: NewPost) -> Result<Post> {
        let mut store = self.write("insert", "posts").await;
        let post = Post {
            id: EntityId::new().0,
            author_id: new_post.author_id,
            content: new_post.content,
            images: new_post.images,
            post_type: new_post.post_type,
            group_id: new_post.group_id,
            likes_count: 0,
            comments_count: 0,
            shares_count: 0,
            created_at: Utc::now(),
        };

        store.put_post(post.clone());
        POSTS_TOTAL.set(store.posts.len() as i64);

        tracing::debug!(post_id = %post.id, author_id = %post.author_id, "Post created");
        Ok(post)
    }

    async fn get_post(&self, id: &str) -> Result<Option<PostWithAuthor>> {
        let store = self.read("get", "posts").await;
        Ok(store
            .post(id)
            .and_then(|post| resolver::post_with_author(&store, post)))
    }

    async fn get_feed_posts(
        &self,
        user_id: &str,
        limit: Option<usize>,
    ) -> Result<Vec<PostWithAuthor>> {
        let store = self.read("feed", "posts").await;
        Ok(resolver::feed(
            &store,
            user_id,
            limit.unwrap_or(DEFAULT_FEED_LIMIT),
        ))
    }

    async fn get_user_posts(&self, user_id: &str) -> Result<Vec<PostWithAuthor>> {
        let store = self.read("find", "posts").await;
        Ok(resolver::user_posts(&store, user_id))
    }

    async fn get_group_posts(&self, group_id: &str) -> Result<Vec<PostWithAuthor>> {
        let store = self.read("find", "posts").await;
        Ok(resolver::group_posts(&store, group_id))
    }

    async fn delete_post(&self, id: &str) -> Result<bool> {
        let mut store = self.write("delete", "posts").await;
        let deleted = store.posts.delete(id).is_some();
        POSTS_TOTAL.set(store.posts.len() as i64);

        if deleted {
            tracing::debug!(post_id = %id, "Post deleted");
        }
        Ok(deleted)
    }
}
