//! Typed failures reported by remote host services.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failure returned by [`crate::FileStoreService`] and [`crate::ExecutionService`] adapters.
pub enum StoreError {
    /// The request never produced a response (connection refused, CORS rejection, abort).
    #[error("request failed: {0}")]
    Network(String),
    /// The service answered with a non-success status.
    #[error("unexpected status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },
    /// The service reports the addressed record as absent.
    #[error("`{0}` not found")]
    NotFound(String),
    /// The response body could not be decoded into the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
    /// No adapter is wired for this service on the active host.
    #[error("{0} unavailable")]
    Unavailable(&'static str),
}

impl StoreError {
    /// Returns `true` when the service reported the target record as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
