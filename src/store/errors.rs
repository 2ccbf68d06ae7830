//! # Store Errors
//!
//! Error types for the post store. The store never raises transport-layer
//! errors; mapping outcomes to HTTP status codes is the API layer's job.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Post store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// A required field is missing or empty on create
    #[error("invalid document: {0}")]
    Validation(String),

    /// No document with the given id
    #[error("post not found")]
    NotFound,

    /// The backing store cannot be reached or has failed
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
