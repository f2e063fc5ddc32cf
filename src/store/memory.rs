//! Memory Store Module
//!
//! In-memory reference backend: a HashMap engine with millisecond TTL
//! expiration and atomic set-if-absent.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::codec::Ttl;
use crate::error::StoreResult;
use crate::store::{CacheStore, StoreEntry, StoreStats};

// == Inner State ==
/// Entries and statistics, guarded together by one lock.
#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<String, StoreEntry>,
    stats: StoreStats,
}

// == Memory Store ==
/// In-memory key-value engine with TTL support.
///
/// Expired entries are dropped lazily on read and in bulk by
/// [`purge_expired`](MemoryStore::purge_expired), which the cleanup task
/// calls periodically. All operations take the internal lock, so the
/// store is safe to share behind an `Arc`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates an empty MemoryStore.
    pub fn new() -> Self {
        Self::default()
    }

    // == Purge Expired ==
    /// Removes all expired entries.
    ///
    /// Returns the number of entries removed.
    pub async fn purge_expired(&self) -> usize {
        let mut inner = self.inner.write().await;

        let expired_keys: Vec<String> = inner
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired_keys.len();
        for key in expired_keys {
            inner.entries.remove(&key);
        }

        let len = inner.entries.len();
        inner.stats.set_total_entries(len);
        count
    }

    // == Stats ==
    /// Returns current store statistics.
    pub async fn stats(&self) -> StoreStats {
        let inner = self.inner.read().await;
        let mut stats = inner.stats.clone();
        stats.set_total_entries(inner.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries, expired ones included
    /// until the next read or purge touches them.
    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }

    /// Returns true if the store holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.entries.is_empty()
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        // Write lock: expired entries are removed on the way out and
        // stats are updated
        let mut inner = self.inner.write().await;

        match inner.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                inner.entries.remove(key);
                let len = inner.entries.len();
                inner.stats.set_total_entries(len);
                inner.stats.record_miss();
                Ok(None)
            }
            Some(entry) => {
                let value = entry.value.clone();
                inner.stats.record_hit();
                Ok(Some(value))
            }
            None => {
                inner.stats.record_miss();
                Ok(None)
            }
        }
    }

    async fn set(&self, key: &str, value: Vec<u8>, ttl: Ttl) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        inner
            .entries
            .insert(key.to_string(), StoreEntry::new(value, ttl));

        let len = inner.entries.len();
        inner.stats.set_total_entries(len);
        Ok(())
    }

    async fn set_if_absent(&self, key: &str, value: Vec<u8>, ttl: Ttl) -> StoreResult<bool> {
        // Presence check and insert happen under one write lock, so two
        // concurrent calls for the same key never both succeed
        let mut inner = self.inner.write().await;

        let live = matches!(inner.entries.get(key), Some(entry) if !entry.is_expired());
        if live {
            return Ok(false);
        }

        inner
            .entries
            .insert(key.to_string(), StoreEntry::new(value, ttl));
        let len = inner.entries.len();
        inner.stats.set_total_entries(len);
        Ok(true)
    }

    async fn delete(&self, key: &str) -> StoreResult<u64> {
        let mut inner = self.inner.write().await;
        let removed = inner.entries.remove(key).is_some();

        let len = inner.entries.len();
        inner.stats.set_total_entries(len);
        Ok(removed as u64)
    }

    async fn exists(&self, key: &str) -> StoreResult<bool> {
        let mut inner = self.inner.write().await;

        match inner.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                inner.entries.remove(key);
                let len = inner.entries.len();
                inner.stats.set_total_entries(len);
                Ok(false)
            }
            Some(_) => Ok(true),
            None => Ok(false),
        }
    }

    async fn flush_all(&self) -> StoreResult<()> {
        let mut inner = self.inner.write().await;
        inner.entries.clear();
        inner.stats.set_total_entries(0);
        Ok(())
    }

    async fn flush_prefix(&self, prefix: &str) -> StoreResult<u64> {
        let mut inner = self.inner.write().await;
        let before = inner.entries.len();
        inner.entries.retain(|key, _| !key.starts_with(prefix));

        let len = inner.entries.len();
        inner.stats.set_total_entries(len);
        Ok((before - len) as u64)
    }
}
