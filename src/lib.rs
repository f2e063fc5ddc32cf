//! kvcache - A namespaced cache abstraction over key-value stores
//!
//! Normalizes application keys, values, and durations into store-level
//! operations with millisecond TTLs and atomic add-if-absent semantics.
//! Ships with an in-memory reference backend; any engine with conditional
//! writes and per-key expiration can implement [`CacheStore`].

pub mod cache;
pub mod codec;
pub mod config;
pub mod error;
pub mod store;
pub mod tasks;

pub use cache::Cache;
pub use codec::{CacheKey, Ttl};
pub use config::{CacheConfig, FlushScope};
pub use error::{CacheError, Result, StoreError};
pub use store::{CacheStore, MemoryStore};
pub use tasks::spawn_cleanup_task;
