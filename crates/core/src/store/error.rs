use thiserror::Error;

/// Errors that can occur during key-value store operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Store connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Store operation failed: {0}")]
    OperationFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_failed_display() {
        let error = StoreError::ConnectionFailed("timeout".to_string());
        assert_eq!(error.to_string(), "Store connection failed: timeout");
    }

    #[test]
    fn test_operation_failed_display() {
        let error = StoreError::OperationFailed("wrong type".to_string());
        assert_eq!(error.to_string(), "Store operation failed: wrong type");
    }

    #[test]
    fn test_serialization_display() {
        let error = StoreError::Serialization("invalid JSON".to_string());
        assert_eq!(error.to_string(), "Serialization error: invalid JSON");
    }
}
