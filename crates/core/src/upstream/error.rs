use thiserror::Error;

/// Errors surfaced by the upstream provider.
///
/// Everything that is not a definite 404 collapses into `ServiceFailure`:
/// transport errors, timeouts, other non-2xx statuses, and malformed
/// response bodies. No retries happen at this layer; a single failed call
/// is surfaced immediately.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    #[error("Upstream resource not found")]
    NotFound,
    #[error("Upstream service failure: {0}")]
    ServiceFailure(String),
}

impl UpstreamError {
    /// HTTP status class this error maps to on the rendered error page.
    pub fn status_code(&self) -> u16 {
        match self {
            UpstreamError::NotFound => 404,
            UpstreamError::ServiceFailure(_) => 500,
        }
    }
}

/// Result type for upstream operations.
pub type Result<T> = std::result::Result<T, UpstreamError>;
