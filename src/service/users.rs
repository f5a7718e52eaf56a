//! User repository
//!
//! Registration, lookups, profile updates, search and friend suggestions.

use async_trait::async_trait;
use chrono::Utc;

use super::memory::MemStorage;
use super::resolver;
use crate::data::credentials;
use crate::data::{EntityId, NewUser, User, UserPatch, UserWithStats};
use crate::error::{AppError, Result};
use crate::metrics::USERS_TOTAL;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_user(&self, id: &str) -> Result<Option<User>>;

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Create a user
    ///
    /// Fails with `AppError::Conflict` when the username or email is taken.
    /// The check and the insert happen under one write lock.
    async fn create_user(&self, new_user: NewUser) -> Result<User>;

    /// Apply a partial update; `None` when the user does not exist
    async fn update_user(&self, id: &str, patch: UserPatch) -> Result<Option<User>>;

    async fn search_users(&self, query: &str) -> Result<Vec<User>>;

    async fn get_suggested_friends(&self, user_id: &str) -> Result<Vec<UserWithStats>>;

    /// The user with this email if the password matches
    async fn verify_credentials(&self, email: &str, password: &str) -> Result<Option<User>>;
}

fn apply_patch(user: &mut User, patch: UserPatch) {
    if let Some(display_name) = patch.display_name {
        user.display_name = display_name;
    }
    if let Some(bio) = patch.bio {
        user.bio = bio;
    }
    if let Some(avatar) = patch.avatar {
        user.avatar = avatar;
    }
    if let Some(cover_photo) = patch.cover_photo {
        user.cover_photo = cover_photo;
    }
    if let Some(location) = patch.location {
        user.location = location;
    }
    if let Some(website) = patch.website {
        user.website = website;
    }
    if let Some(is_online) = patch.is_online {
        user.is_online = is_online;
    }
    if let Some(last_seen) = patch.last_seen {
        user.last_seen = last_seen;
    }
}

#[async_trait]
impl UserRepository for MemStorage {
    async fn get_user(&self, id: &str) -> Result<Option<User>> {
        let store = self.read("get", "users").await;
        Ok(store.user(id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let store = self.read("find", "users").await;
        Ok(store
            .users
            .values()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let store = self.read("find", "users").await;
        Ok(store.users.values().find(|user| user.email == email).cloned())
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User> {
        // Hash on the blocking pool, before taking the store lock
        let password = new_user.password;
        let password_hash =
            tokio::task::spawn_blocking(move || credentials::hash_password(&password))
                .await
                .map_err(|e| AppError::Internal(e.into()))??;

        let mut store = self.write("insert", "users").await;
        if store
            .users
            .values()
            .any(|user| user.email == new_user.email || user.username == new_user.username)
        {
            return Err(AppError::Conflict("User already exists".to_string()));
        }

        let now = Utc::now();
        let user = User {
            id: EntityId::new().0,
            username: new_user.username,
            email: new_user.email,
            password_hash,
            display_name: new_user.display_name,
            bio: new_user.bio,
            avatar: new_user.avatar,
            cover_photo: new_user.cover_photo,
            location: new_user.location,
            website: new_user.website,
            is_online: false,
            last_seen: now,
            created_at: now,
        };
        store.put_user(user.clone());
        USERS_TOTAL.set(store.users.len() as i64);

        tracing::debug!(user_id = %user.id, username = %user.username, "User created");
        Ok(user)
    }

    async fn update_user(&self, id: &str, patch: UserPatch) -> Result<Option<User>> {
        let mut store = self.write("update", "users").await;
        let Some(user) = store.users.get_mut(id) else {
            return Ok(None);
        };
        apply_patch(user, patch);

        tracing::debug!(user_id = %id, "User updated");
        Ok(Some(user.clone()))
    }

    async fn search_users(&self, query: &str) -> Result<Vec<User>> {
        let store = self.read("search", "users").await;
        Ok(resolver::search_users(&store, query))
    }

    async fn get_suggested_friends(&self, user_id: &str) -> Result<Vec<UserWithStats>> {
        let candidates: Vec<User> = {
            let store = self.read("find", "users").await;
            store
                .users
                .values()
                .filter(|user| user.id != user_id)
                .cloned()
                .collect()
        };
        Ok(self.suggestion_policy().suggest(candidates))
    }

    async fn verify_credentials(&self, email: &str, password: &str) -> Result<Option<User>> {
        let Some(user) = self.get_user_by_email(email).await? else {
            return Ok(None);
        };
        let password = password.to_string();
        let stored = user.password_hash.clone();
        let verified =
            tokio::task::spawn_blocking(move || credentials::verify_password(&password, &stored))
                .await
                .map_err(|e| AppError::Internal(e.into()))?;
        Ok(verified.then_some(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::fixtures::new_user;
    use crate::service::suggestions::MockFriendSuggestionPolicy;

    #[tokio::test]
    async fn create_then_fetch_round_trips() {
        let storage = MemStorage::default();
        let created = storage.create_user(new_user("alice")).await.unwrap();

        assert!(!created.is_online);
        assert!(created.password_hash.starts_with("$argon2id$"));

        let fetched = storage.get_user(&created.id).await.unwrap();
        assert_eq!(fetched, Some(created.clone()));
        let by_name = storage.get_user_by_username("alice").await.unwrap();
        assert_eq!(by_name.map(|u| u.id), Some(created.id.clone()));
        let by_email = storage.get_user_by_email("alice@example.com").await.unwrap();
        assert_eq!(by_email.map(|u| u.id), Some(created.id));
    }

    #[tokio::test]
    async fn duplicate_email_or_username_is_a_conflict() {
        let storage = MemStorage::default();
        storage.create_user(new_user("alice")).await.unwrap();

        let mut same_email = new_user("alice2");
        same_email.email = "alice@example.com".to_string();
        let err = storage.create_user(same_email).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        let mut same_username = new_user("alice");
        same_username.email = "other@example.com".to_string();
        let err = storage.create_user(same_username).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        assert_eq!(storage.search_users("alice").await.unwrap().len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_registrations_keep_email_unique() {
        let storage = std::sync::Arc::new(MemStorage::default());

        let attempts: Vec<_> = (0..8)
            .map(|i| {
                let storage = storage.clone();
                tokio::spawn(async move {
                    let mut user = new_user(&format!("racer{i}"));
                    user.email = "shared@example.com".to_string();
                    storage.create_user(user).await
                })
            })
            .collect();

        let mut created = 0;
        for attempt in attempts {
            match attempt.await.unwrap() {
                Ok(_) => created += 1,
                Err(err) => assert!(matches!(err, AppError::Conflict(_))),
            }
        }
        assert_eq!(created, 1);
        assert_eq!(storage.search_users("racer").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn lookups_for_missing_users_are_absent() {
        let storage = MemStorage::default();
        assert!(storage.get_user("nope").await.unwrap().is_none());
        assert!(
            storage
                .update_user("nope", UserPatch::default())
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn update_applies_only_given_fields() {
        let storage = MemStorage::default();
        let user = storage.create_user(new_user("bob")).await.unwrap();

        let patch = UserPatch {
            bio: Some(Some("Rust developer".to_string())),
            is_online: Some(true),
            ..UserPatch::default()
        };
        let updated = storage.update_user(&user.id, patch).await.unwrap().unwrap();

        assert_eq!(updated.bio.as_deref(), Some("Rust developer"));
        assert!(updated.is_online);
        assert_eq!(updated.display_name, user.display_name);
        assert_eq!(updated.password_hash, user.password_hash);
    }

    #[tokio::test]
    async fn credentials_verify_against_stored_digest() {
        let storage = MemStorage::default();
        let user = storage.create_user(new_user("carol")).await.unwrap();

        let ok = storage
            .verify_credentials("carol@example.com", "password123")
            .await
            .unwrap();
        assert_eq!(ok.map(|u| u.id), Some(user.id));

        let wrong = storage
            .verify_credentials("carol@example.com", "nope")
            .await
            .unwrap();
        assert!(wrong.is_none());
        let unknown = storage
            .verify_credentials("dave@example.com", "password123")
            .await
            .unwrap();
        assert!(unknown.is_none());
    }

    #[tokio::test]
    async fn suggestions_exclude_caller_and_go_through_policy() {
        let mut policy = MockFriendSuggestionPolicy::new();
        policy
            .expect_suggest()
            .withf(|candidates| candidates.iter().all(|u| u.username != "me"))
            .times(1)
            .returning(|candidates| {
                candidates
                    .into_iter()
                    .map(|user| UserWithStats {
                        user,
                        friends_count: 7,
                        posts_count: 3,
                        is_friend: false,
                        friendship_status: "none".to_string(),
                    })
                    .collect()
            });
        let storage = MemStorage::new(Box::new(policy));

        let me = storage.create_user(new_user("me")).await.unwrap();
        storage.create_user(new_user("other")).await.unwrap();

        let suggestions = storage.get_suggested_friends(&me.id).await.unwrap();
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].user.username, "other");
        assert_eq!(suggestions[0].friends_count, 7);
    }
}
