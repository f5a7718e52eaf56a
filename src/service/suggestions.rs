//! Friend suggestion policy
//!
//! The shipped policy is a placeholder: it takes the first users it is
//! given and attaches random friend/post counts. Swap in a ranking
//! implementation through `FriendSuggestionPolicy`.

use rand::Rng;

use crate::config::SuggestionConfig;
use crate::data::{User, UserWithStats};

/// Turns candidate users into suggestions
///
/// `candidates` excludes the requesting user and is in store order.
#[cfg_attr(test, mockall::automock)]
pub trait FriendSuggestionPolicy: Send + Sync {
    fn suggest(&self, candidates: Vec<User>) -> Vec<UserWithStats>;
}

/// First-N candidates with randomly generated stats
#[derive(Debug, Clone)]
pub struct RandomStatsPolicy {
    limit: usize,
    max_friends_count: u32,
    max_posts_count: u32,
}

impl RandomStatsPolicy {
    pub fn new(config: &SuggestionConfig) -> Self {
        Self {
            limit: config.limit,
            max_friends_count: config.max_friends_count,
            max_posts_count: config.max_posts_count,
        }
    }
}

impl Default for RandomStatsPolicy {
    fn default() -> Self {
        Self {
            limit: 5,
            max_friends_count: 100,
            max_posts_count: 50,
        }
    }
}

impl FriendSuggestionPolicy for RandomStatsPolicy {
    fn suggest(&self, candidates: Vec<User>) -> Vec<UserWithStats> {
        let mut rng = rand::thread_rng();
        candidates
            .into_iter()
            .take(self.limit)
            .map(|user| UserWithStats {
                user,
                friends_count: rng.gen_range(0..self.max_friends_count.max(1)),
                posts_count: rng.gen_range(0..self.max_posts_count.max(1)),
                is_friend: false,
                friendship_status: "none".to_string(),
            })
            .collect()
    }
}
