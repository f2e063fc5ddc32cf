//! Error types for the cache layer
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Store Error Enum ==
/// Errors raised by a [`CacheStore`](crate::store::CacheStore) backend.
///
/// These are transport-level failures. The cache layer never retries them;
/// they propagate directly to the caller of the operation that hit them.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backend could not be reached or the connection dropped mid-request
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The backend answered with something the client could not interpret
    #[error("Store protocol error: {0}")]
    Protocol(String),
}

// == Cache Error Enum ==
/// Unified error type for cache operations.
///
/// A cache miss is *not* an error; `get` reports misses through its
/// `Option` result. Every variant here is a genuine failure.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Invalid configuration detected at construction time
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// The underlying store failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A value could not be serialized for storage
    #[error("Failed to encode value: {source}")]
    Encode {
        #[source]
        source: serde_json::Error,
    },

    /// Stored bytes could not be deserialized. Distinct from a miss:
    /// the entry exists but holds corrupt data
    #[error("Failed to decode cached value: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    /// Caller passed a negative or non-finite duration
    #[error("Invalid cache duration: {0} (must be >= 0 seconds)")]
    InvalidDuration(f64),
}

// == Result Type Aliases ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;

/// Convenience Result type for store backends.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
