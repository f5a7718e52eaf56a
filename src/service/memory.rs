//! In-memory storage backend
//!
//! `MemStorage` implements every repository trait over a single
//! `EntityStore` guarded by one `RwLock`. Each facade call takes the lock
//! once, so a mutation and its counter updates are observed together.

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::suggestions::{FriendSuggestionPolicy, RandomStatsPolicy};
use crate::data::EntityStore;
use crate::metrics::STORE_OPERATIONS_TOTAL;

/// Volatile storage; all state is lost when the process exits
pub struct MemStorage {
    store: RwLock<EntityStore>,
    suggestions: Box<dyn FriendSuggestionPolicy>,
}

impl MemStorage {
    /// Create an empty storage with the given suggestion policy
    pub fn new(suggestions: Box<dyn FriendSuggestionPolicy>) -> Self {
        Self {
            store: RwLock::new(EntityStore::new()),
            suggestions,
        }
    }

    pub(super) async fn read(
        &self,
        operation: &'static str,
        collection: &'static str,
    ) -> RwLockReadGuard<'_, EntityStore> {
        STORE_OPERATIONS_TOTAL
            .with_label_values(&[operation, collection])
            .inc();
        self.store.read().await
    }

    pub(super) async fn write(
        &self,
        operation: &'static str,
        collection: &'static str,
    ) -> RwLockWriteGuard<'_, EntityStore> {
        STORE_OPERATIONS_TOTAL
            .with_label_values(&[operation, collection])
            .inc();
        self.store.write().await
    }

    pub(super) fn suggestion_policy(&self) -> &dyn FriendSuggestionPolicy {
        self.suggestions.as_ref()
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new(Box::new(RandomStatsPolicy::default()))
    }
}
