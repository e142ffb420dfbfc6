use async_trait::async_trait;
use serde_json::Value;

use super::Result;

/// Contract for the remote key-value store backing both cache tiers.
///
/// Plain string operations serve the rendered-artifact tier; the JSON
/// document operations serve the raw-payload tier and the history array.
/// Every operation is atomic at the single-key level; no multi-key
/// transactions are offered or required.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns whether a key exists in either tier.
    async fn exists(&self, key: &str) -> Result<bool>;

    /// Gets a string value. `None` when the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Sets a string value. Writes are full replacements.
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Gets a JSON document (or part of one) at `path`. `None` when the key
    /// is absent.
    async fn json_get(&self, key: &str, path: &str) -> Result<Option<Value>>;

    /// Sets a JSON document at `path`, creating the key if absent.
    async fn json_set(&self, key: &str, path: &str, value: &Value) -> Result<()>;

    /// Appends a value to the JSON array at `path`, returning the new array
    /// length. Fails when the key is absent or not an array.
    async fn json_array_append(&self, key: &str, path: &str, value: &Value) -> Result<u64>;
}
