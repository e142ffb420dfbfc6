//! In-memory store implementation.
//!
//! Thread-safe implementation of `KeyValueStore` backed by two maps behind a
//! single `tokio::sync::RwLock`: one for the plain string tier and one for
//! JSON documents. Entries persist for the life of the process; the cache
//! layer has no expiry policy, so there is none here either.
//!
//! Mirrors the Redis backend's observable behavior, including the error on
//! appending to a JSON array under a missing key.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use pokecache_core::store::{KeyValueStore, Result, StoreError};

#[derive(Debug, Default)]
struct Inner {
    strings: HashMap<String, String>,
    documents: HashMap<String, Value>,
}

/// In-memory `KeyValueStore` backend, used by default and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn exists(&self, key: &str) -> Result<bool> {
        let inner = self.inner.read().await;
        Ok(inner.strings.contains_key(key) || inner.documents.contains_key(key))
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let inner = self.inner.read().await;
        Ok(inner.strings.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut inner = self.inner.write().await;
        inner.strings.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn json_get(&self, key: &str, _path: &str) -> Result<Option<Value>> {
        let inner = self.inner.read().await;
        Ok(inner.documents.get(key).cloned())
    }

    async fn json_set(&self, key: &str, _path: &str, value: &Value) -> Result<()> {
        let mut inner = self.inner.write().await;
        inner.documents.insert(key.to_string(), value.clone());
        Ok(())
    }

    async fn json_array_append(&self, key: &str, _path: &str, value: &Value) -> Result<u64> {
        let mut inner = self.inner.write().await;
        match inner.documents.get_mut(key) {
            Some(Value::Array(items)) => {
                items.push(value.clone());
                Ok(items.len() as u64)
            }
            Some(_) => Err(StoreError::OperationFailed(format!(
                "key {key} does not hold a JSON array"
            ))),
            None => Err(StoreError::OperationFailed(format!(
                "no such key: {key}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get() {
        let store = MemoryStore::new();
        store.set("pokemonHomepage", "<html></html>").await.unwrap();

        assert!(store.exists("pokemonHomepage").await.unwrap());
        assert_eq!(
            store.get("pokemonHomepage").await.unwrap(),
            Some("<html></html>".to_string())
        );
    }

    #[tokio::test]
    async fn test_get_nonexistent() {
        let store = MemoryStore::new();
        assert!(!store.exists("missing").await.unwrap());
        assert_eq!(store.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_is_full_replacement() {
        let store = MemoryStore::new();
        store.set("key", "first").await.unwrap();
        store.set("key", "second").await.unwrap();
        assert_eq!(store.get("key").await.unwrap(), Some("second".to_string()));
    }

    #[tokio::test]
    async fn test_json_set_and_get() {
        let store = MemoryStore::new();
        let doc = serde_json::json!({"id": 1, "name": "bulbasaur"});
        store.json_set("pokemonData:1", ".", &doc).await.unwrap();

        assert!(store.exists("pokemonData:1").await.unwrap());
        assert_eq!(store.json_get("pokemonData:1", ".").await.unwrap(), Some(doc));
    }

    #[tokio::test]
    async fn test_json_array_append_returns_new_length() {
        let store = MemoryStore::new();
        store
            .json_set("history", ".", &serde_json::json!([]))
            .await
            .unwrap();

        let len = store
            .json_array_append("history", ".", &serde_json::json!({"id": 1}))
            .await
            .unwrap();
        assert_eq!(len, 1);

        let len = store
            .json_array_append("history", ".", &serde_json::json!({"id": 2}))
            .await
            .unwrap();
        assert_eq!(len, 2);
    }

    #[tokio::test]
    async fn test_json_array_append_missing_key_fails() {
        let store = MemoryStore::new();
        let err = store
            .json_array_append("missing", ".", &serde_json::json!(1))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::OperationFailed(_)));
    }

    #[tokio::test]
    async fn test_json_array_append_non_array_fails() {
        let store = MemoryStore::new();
        store
            .json_set("doc", ".", &serde_json::json!({"id": 1}))
            .await
            .unwrap();

        let err = store
            .json_array_append("doc", ".", &serde_json::json!(2))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::OperationFailed(_)));
    }
}
