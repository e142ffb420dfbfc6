//! Bounded, recency-ordered access history.
//!
//! A single JSON array in the store records detail-level accesses to the
//! tracked resource type, newest at the end, capped at 25 entries. Mutations
//! rely only on the store's single-key atomicity; two concurrent accesses to
//! the same uncached resource can each append, which at worst leaves one
//! duplicate entry per race.

use std::sync::Arc;

use serde_json::Value;

use pokecache_core::resource::ResourceRecord;
use pokecache_core::store::{
    deserialize_records, history_key, record_to_value, KeyValueStore, Result, StoreError,
    ROOT_PATH,
};

/// Maximum number of history entries retained.
pub const HISTORY_CAP: usize = 25;

/// Append-only-with-trim access history over the key-value store.
pub struct RecencyHistory {
    store: Arc<dyn KeyValueStore>,
    key: &'static str,
    cap: usize,
}

impl RecencyHistory {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            key: history_key(),
            cap: HISTORY_CAP,
        }
    }

    /// Creates the history array if it does not exist yet. Idempotent.
    pub async fn ensure_initialized(&self) -> Result<()> {
        if !self.store.exists(self.key).await? {
            self.store
                .json_set(self.key, ROOT_PATH, &Value::Array(Vec::new()))
                .await?;
            tracing::debug!(key = self.key, "Initialized history as an empty array");
        }
        Ok(())
    }

    /// Records an access: appends to the end, then trims from the front
    /// until the list is back at capacity.
    ///
    /// The order matters. Appending first means the element dropped when the
    /// list is already full is the oldest one, not the one being recorded.
    pub async fn append(&self, record: &ResourceRecord) -> Result<()> {
        let value =
            record_to_value(record).map_err(|e| StoreError::Serialization(e.to_string()))?;

        let new_len = self
            .store
            .json_array_append(self.key, ROOT_PATH, &value)
            .await?;
        tracing::debug!(key = self.key, name = %record.name, len = new_len, "Appended to history");

        if new_len as usize > self.cap {
            let Some(current) = self.store.json_get(self.key, ROOT_PATH).await? else {
                return Ok(());
            };
            let Value::Array(items) = current else {
                return Err(StoreError::OperationFailed(format!(
                    "key {} does not hold a JSON array",
                    self.key
                )));
            };
            let trimmed: Vec<Value> = items[items.len() - self.cap..].to_vec();
            self.store
                .json_set(self.key, ROOT_PATH, &Value::Array(trimmed))
                .await?;
        }

        Ok(())
    }

    /// Returns the most recently accessed records, newest first, at most
    /// `limit` of them.
    ///
    /// The list is reversed before truncation; truncating first would keep
    /// the oldest entries of the window instead of the newest.
    pub async fn recent(&self, limit: usize) -> Result<Vec<ResourceRecord>> {
        let Some(value) = self.store.json_get(self.key, ROOT_PATH).await? else {
            // Lazily created, so absence just means nothing was accessed yet
            return Ok(Vec::new());
        };

        let mut records =
            deserialize_records(value).map_err(|e| StoreError::Serialization(e.to_string()))?;
        records.reverse();
        records.truncate(limit);
        Ok(records)
    }
}
