//! Store Entry Module
//!
//! Defines the structure for individual store entries with millisecond TTL.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::codec::Ttl;

// == Store Entry ==
/// A single stored entry: value bytes plus optional expiration.
#[derive(Debug, Clone)]
pub struct StoreEntry {
    /// The stored bytes
    pub value: Vec<u8>,
    /// Expiration timestamp (Unix milliseconds), None = no expiration
    pub expires_at: Option<u64>,
}

impl StoreEntry {
    // == Constructor ==
    /// Creates a new store entry with the given TTL.
    pub fn new(value: Vec<u8>, ttl: Ttl) -> Self {
        let expires_at = ttl.as_millis().map(|ms| current_timestamp_ms() + ms);
        Self { value, expires_at }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is expired once the current time is greater than or equal
    /// to the expiration time; entries without a TTL never expire.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires) => current_timestamp_ms() >= expires,
            None => false,
        }
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
