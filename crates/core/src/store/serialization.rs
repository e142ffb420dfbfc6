//! Pure functions for converting resource records to and from cache values.
//!
//! The raw-payload tier and the history array both hold JSON documents, so
//! these helpers keep the `serde_json` plumbing (and its error mapping) out
//! of the orchestration code.

use serde_json::Value;
use thiserror::Error;

use crate::resource::ResourceRecord;

/// Errors that can occur converting between records and cache documents.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Converts a record into the JSON document stored in the raw tier.
pub fn record_to_value(record: &ResourceRecord) -> Result<Value> {
    serde_json::to_value(record).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Reads a record back out of a raw-tier document.
pub fn deserialize_record(value: Value) -> Result<ResourceRecord> {
    serde_json::from_value(value).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

/// Reads a history array back out of its JSON document.
pub fn deserialize_records(value: Value) -> Result<Vec<ResourceRecord>> {
    serde_json::from_value(value).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}
