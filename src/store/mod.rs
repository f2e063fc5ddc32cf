//! Store Module
//!
//! The capability boundary between the cache layer and the underlying
//! key-value engine, plus the in-memory reference backend.

use async_trait::async_trait;

use crate::codec::Ttl;
use crate::error::StoreResult;

mod entry;
mod memory;
mod stats;

// Re-export public types
pub use entry::StoreEntry;
pub use memory::MemoryStore;
pub use stats::StoreStats;

// == Cache Store Trait ==
/// Capability interface over the underlying key-value engine.
///
/// This is the complete surface the cache layer depends on. Any engine
/// offering atomic conditional writes and per-key millisecond expiration
/// can implement it. Implementations must be safe for concurrent use;
/// the cache layer adds no locking of its own.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Reads the bytes stored under a key; None when the key is absent
    /// or its entry has expired.
    async fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>>;

    /// Writes bytes under a key, overwriting any existing entry and its
    /// expiration.
    async fn set(&self, key: &str, value: Vec<u8>, ttl: Ttl) -> StoreResult<()>;

    /// Writes bytes under a key only if no live entry exists.
    ///
    /// Must be atomic inside the engine: two concurrent calls for the
    /// same key never both return true. Returns true if this call
    /// created the entry, false if an entry already existed (left
    /// untouched).
    async fn set_if_absent(&self, key: &str, value: Vec<u8>, ttl: Ttl) -> StoreResult<bool>;

    /// Removes a key. Returns the number of keys removed (0 or 1).
    async fn delete(&self, key: &str) -> StoreResult<u64>;

    /// Reports whether a live entry exists under the key.
    async fn exists(&self, key: &str) -> StoreResult<bool>;

    /// Removes every entry in the store, including data written by other
    /// components sharing it.
    async fn flush_all(&self) -> StoreResult<()>;

    /// Removes every entry whose key starts with the given prefix.
    /// Returns the number of keys removed.
    async fn flush_prefix(&self, prefix: &str) -> StoreResult<u64>;
}
