//! Configuration Module
//!
//! Handles cache configuration: key namespace, flush scope, and the
//! cleanup interval for the in-memory backend.

use std::env;

use crate::error::{CacheError, Result};

// == Flush Scope ==
/// Controls how much data [`Cache::flush`](crate::Cache::flush) removes.
///
/// When the underlying store is shared with other data, flushing the whole
/// store is destructive, so the scope is an explicit switch rather than an
/// accidental default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlushScope {
    /// Remove only keys under this cache's key prefix (default).
    Namespace,
    /// Truncate the entire underlying store, including data written by
    /// other components sharing it. Opt-in only.
    Store,
}

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Prefix prepended to every store key; namespaces this cache's entries
    /// when the store is shared. May be empty.
    pub key_prefix: String,
    /// Whether `flush` clears only this namespace or the whole store
    pub flush_scope: FlushScope,
    /// Background cleanup task interval in seconds (in-memory backend only)
    pub cleanup_interval: u64,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_KEY_PREFIX` - Key namespace prefix (default: empty)
    /// - `CACHE_FLUSH_SCOPE` - `namespace` or `store` (default: namespace)
    /// - `CACHE_CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 1)
    pub fn from_env() -> Self {
        Self {
            key_prefix: env::var("CACHE_KEY_PREFIX").unwrap_or_default(),
            flush_scope: match env::var("CACHE_FLUSH_SCOPE").as_deref() {
                Ok("store") => FlushScope::Store,
                _ => FlushScope::Namespace,
            },
            cleanup_interval: env::var("CACHE_CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1),
        }
    }

    /// Validates the configuration.
    ///
    /// The key prefix must stay within the store-safe alphabet so prefixed
    /// keys never need escaping: ASCII alphanumerics plus `_`, `:`, `.`, `-`.
    pub fn validate(&self) -> Result<()> {
        let safe = |c: char| c.is_ascii_alphanumeric() || matches!(c, '_' | ':' | '.' | '-');
        if !self.key_prefix.chars().all(safe) {
            return Err(CacheError::Configuration(format!(
                "key_prefix {:?} contains characters outside [A-Za-z0-9_:.-]",
                self.key_prefix
            )));
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            key_prefix: String::new(),
            flush_scope: FlushScope::Namespace,
            cleanup_interval: 1,
        }
    }
}
