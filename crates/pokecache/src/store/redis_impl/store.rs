//! Redis store implementation.
//!
//! The rendered-artifact tier uses plain string commands; the raw-payload
//! tier and the history array use RedisJSON commands with the legacy `.`
//! root path. All commands are single-key, so atomicity comes from Redis
//! itself; no multi-key transactions are used.

use async_trait::async_trait;
use redis::{AsyncCommands, JsonAsyncCommands};
use serde_json::Value;

use pokecache_core::store::{KeyValueStore, Result, StoreError};

use super::error::map_redis_error;

/// Redis store backend using connection manager for pooling.
pub struct RedisStore {
    conn: redis::aio::ConnectionManager,
}

impl RedisStore {
    /// Creates a new Redis store connection.
    ///
    /// # Arguments
    ///
    /// * `url` - Redis connection URL (e.g., "redis://localhost:6379")
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ConnectionFailed` if the connection cannot be
    /// established.
    pub async fn new(url: &str) -> Result<Self> {
        let client = redis::Client::open(url).map_err(map_redis_error)?;
        let conn = redis::aio::ConnectionManager::new(client)
            .await
            .map_err(map_redis_error)?;
        Ok(Self { conn })
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn exists(&self, key: &str) -> Result<bool> {
        let mut conn = self.conn.clone();
        let result: bool = conn.exists(key).await.map_err(map_redis_error)?;
        Ok(result)
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.conn.clone();
        let result: Option<String> = conn.get(key).await.map_err(map_redis_error)?;
        Ok(result)
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(key, value)
            .await
            .map_err(map_redis_error)?;
        Ok(())
    }

    async fn json_get(&self, key: &str, path: &str) -> Result<Option<Value>> {
        let mut conn = self.conn.clone();
        // JSON.GET replies with a JSON-encoded string (nil when absent)
        let raw: Option<String> = conn.json_get(key, path).await.map_err(map_redis_error)?;
        raw.map(|s| serde_json::from_str(&s).map_err(|e| StoreError::Serialization(e.to_string())))
            .transpose()
    }

    async fn json_set(&self, key: &str, path: &str, value: &Value) -> Result<()> {
        let mut conn = self.conn.clone();
        conn.json_set::<_, _, _, ()>(key, path, value)
            .await
            .map_err(map_redis_error)?;
        Ok(())
    }

    async fn json_array_append(&self, key: &str, path: &str, value: &Value) -> Result<u64> {
        let mut conn = self.conn.clone();
        // JSON.ARRAPPEND with the legacy root path replies with the new length
        let len: i64 = conn
            .json_arr_append(key, path, value)
            .await
            .map_err(map_redis_error)?;
        Ok(len as u64)
    }
}
