use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{AppError, AppResult};

use super::redis::RedisClient;

/// Fixed keys for the named JSON blobs each service persists.
pub mod keys {
    pub const PROFILE: &str = "zevo_profile";
    pub const PUBLIC_PROFILES: &str = "zevo_profiles_public";
    pub const ARENA_CHAT_ROOMS: &str = "zevo_arena_chat_rooms";
    pub const ARENA_CHAT_MESSAGES: &str = "zevo_arena_chat_messages";
    pub const HELP_REQUESTS: &str = "zevo_help_requests";
    pub const THEME: &str = "zevo_theme";
}

/// Capacity bounds applied on write.
pub mod caps {
    pub const PUBLIC_PROFILES: usize = 200;
    pub const ARENA_CHAT_ROOMS: usize = 300;
    pub const ARENA_CHAT_MESSAGES: usize = 1000;
}

/// Keep the first `cap` entries. Lists stored newest-first (rooms,
/// public profiles) are bounded from the head.
pub fn bounded_head<T>(mut items: Vec<T>, cap: usize) -> Vec<T> {
    items.truncate(cap);
    items
}

/// Keep the last `cap` entries. Lists stored oldest-first (messages)
/// are bounded from the tail so the most recent entries survive.
pub fn bounded_tail<T>(mut items: Vec<T>, cap: usize) -> Vec<T> {
    let len = items.len();
    if len > cap {
        items.drain(..len - cap);
    }
    items
}

/// Named JSON blob store over Redis. Missing or unparseable blobs read
/// back as the fallback value rather than an error; the stored copy is
/// a convenience snapshot, never the source of truth for chat data.
#[derive(Clone)]
pub struct LocalStore {
    redis: RedisClient,
}

impl LocalStore {
    pub fn new(redis: RedisClient) -> Self {
        Self { redis }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        let raw = self
            .redis
            .get(key)
            .await
            .map_err(|e| AppError::internal(format!("store read failed: {e}")))?;

        let Some(raw) = raw else { return Ok(None) };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "discarding unparseable blob");
                Ok(None)
            }
        }
    }

    pub async fn get_list<T: DeserializeOwned>(&self, key: &str) -> AppResult<Vec<T>> {
        Ok(self.get_json(key).await?.unwrap_or_default())
    }

    pub async fn set_json<T: Serialize>(&self, key: &str, value: &T) -> AppResult<()> {
        let raw = serde_json::to_string(value)
            .map_err(|e| AppError::internal(format!("store encode failed: {e}")))?;
        self.redis
            .set(key, &raw)
            .await
            .map_err(|e| AppError::internal(format!("store write failed: {e}")))?;
        Ok(())
    }

    /// Write a newest-first list bounded from the head.
    pub async fn set_list_head<T: Serialize>(
        &self,
        key: &str,
        items: Vec<T>,
        cap: usize,
    ) -> AppResult<()> {
        self.set_json(key, &bounded_head(items, cap)).await
    }

    /// Write an oldest-first list bounded from the tail.
    pub async fn set_list_tail<T: Serialize>(
        &self,
        key: &str,
        items: Vec<T>,
        cap: usize,
    ) -> AppResult<()> {
        self.set_json(key, &bounded_tail(items, cap)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_head_keeps_most_recent_prefix() {
        let items: Vec<u32> = (0..10).collect();
        assert_eq!(bounded_head(items, 3), vec![0, 1, 2]);
    }

    #[test]
    fn bounded_tail_keeps_most_recent_suffix() {
        let items: Vec<u32> = (0..10).collect();
        assert_eq!(bounded_tail(items, 3), vec![7, 8, 9]);
    }

    #[test]
    fn bounds_are_noops_under_cap() {
        let items: Vec<u32> = vec![1, 2];
        assert_eq!(bounded_head(items.clone(), 300), items);
        assert_eq!(bounded_tail(items.clone(), 1000), items);
    }
}
