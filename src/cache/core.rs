//! Cache Core Module
//!
//! The cache orchestrator: composes key normalization, value
//! serialization, and duration conversion over a store backend.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::codec::{CacheKey, JsonCodec, KeyCodec, Ttl};
use crate::config::{CacheConfig, FlushScope};
use crate::error::Result;
use crate::store::CacheStore;

// == Cache ==
/// A namespaced cache over a TTL-capable key-value store.
///
/// Holds only immutable references to its store and codecs, so it is safe
/// for concurrent use from any number of tasks without internal locking.
/// Every operation is a single round trip to the store; `add` in
/// particular delegates its atomicity to the store's conditional write
/// rather than checking-then-setting here. Two concurrent `set` calls on
/// the same key race at the store with last-write-wins.
///
/// Store failures propagate to the caller of the operation that hit them;
/// nothing is retried.
#[derive(Clone)]
pub struct Cache {
    /// The underlying key-value engine
    store: Arc<dyn CacheStore>,
    /// Application-key to store-key normalization
    keys: KeyCodec,
    /// Value serialization
    values: JsonCodec,
    /// Scope of the flush operation
    flush_scope: FlushScope,
}

impl Cache {
    // == Constructor ==
    /// Creates a new Cache over an already-constructed store client.
    ///
    /// Fails with [`CacheError::Configuration`](crate::CacheError::Configuration)
    /// if the configuration is invalid; no operation proceeds on a
    /// misconfigured cache.
    pub fn new(store: Arc<dyn CacheStore>, config: CacheConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            store,
            keys: KeyCodec::new(config.key_prefix),
            values: JsonCodec,
            flush_scope: config.flush_scope,
        })
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns `Ok(None)` on a miss (key never set, deleted, or expired);
    /// a miss is a normal outcome, not an error. Returns
    /// [`CacheError::Decode`](crate::CacheError::Decode) if the stored
    /// bytes are corrupt, which is never conflated with a miss.
    pub async fn get<T: DeserializeOwned>(&self, key: impl Into<CacheKey>) -> Result<Option<T>> {
        let store_key = self.keys.build(&key.into());

        match self.store.get(&store_key).await? {
            Some(bytes) => {
                debug!(key = %store_key, "cache hit");
                Ok(Some(self.values.decode(&bytes)?))
            }
            None => {
                debug!(key = %store_key, "cache miss");
                Ok(None)
            }
        }
    }

    // == Set ==
    /// Stores a value under a key, overwriting any existing entry and
    /// its expiration.
    ///
    /// `duration_secs` of 0 means the entry never expires; positive
    /// values may be fractional (0.1 is 100ms). Negative durations are
    /// rejected before any store call.
    pub async fn set<T: Serialize>(
        &self,
        key: impl Into<CacheKey>,
        value: &T,
        duration_secs: f64,
    ) -> Result<bool> {
        let ttl = Ttl::from_secs(duration_secs)?;
        let store_key = self.keys.build(&key.into());
        let bytes = self.values.encode(value)?;

        self.store.set(&store_key, bytes, ttl).await?;
        debug!(key = %store_key, ?ttl, "cache set");
        Ok(true)
    }

    // == Add ==
    /// Stores a value under a key only if no entry exists yet.
    ///
    /// Uses the store's atomic set-if-absent primitive, so concurrent
    /// adds for the same key from different callers never both succeed.
    /// Returns true only if this call created the entry; false leaves an
    /// existing entry (and its expiration) untouched.
    pub async fn add<T: Serialize>(
        &self,
        key: impl Into<CacheKey>,
        value: &T,
        duration_secs: f64,
    ) -> Result<bool> {
        let ttl = Ttl::from_secs(duration_secs)?;
        let store_key = self.keys.build(&key.into());
        let bytes = self.values.encode(value)?;

        let created = self.store.set_if_absent(&store_key, bytes, ttl).await?;
        debug!(key = %store_key, created, "cache add");
        Ok(created)
    }

    // == Exists ==
    /// Checks whether a key currently has a live entry.
    ///
    /// Cheaper than [`get`](Cache::get) for large values: the store's
    /// presence predicate is consulted and nothing is decoded. A true
    /// result does not guarantee a later `get` will hit; the entry can
    /// expire or be deleted between the two calls.
    pub async fn exists(&self, key: impl Into<CacheKey>) -> Result<bool> {
        let store_key = self.keys.build(&key.into());
        Ok(self.store.exists(&store_key).await?)
    }

    // == Delete ==
    /// Removes a key. Returns true if the store removed an entry.
    pub async fn delete(&self, key: impl Into<CacheKey>) -> Result<bool> {
        let store_key = self.keys.build(&key.into());
        let removed = self.store.delete(&store_key).await?;
        debug!(key = %store_key, removed, "cache delete");
        Ok(removed > 0)
    }

    // == Flush ==
    /// Clears cached entries according to the configured
    /// [`FlushScope`](crate::FlushScope).
    ///
    /// `Namespace` (the default) removes only keys under this cache's
    /// prefix. `Store` truncates the entire underlying store, including
    /// data other components may have written.
    pub async fn flush(&self) -> Result<bool> {
        match self.flush_scope {
            FlushScope::Namespace => {
                let removed = self.store.flush_prefix(self.keys.prefix()).await?;
                debug!(prefix = %self.keys.prefix(), removed, "cache flush");
            }
            FlushScope::Store => {
                warn!("flushing entire store, shared data included");
                self.store.flush_all().await?;
            }
        }
        Ok(true)
    }
}
