//! Duration Policy Module
//!
//! Converts application-level durations into the store's expiration unit.

use crate::error::{CacheError, Result};

// == Ttl ==
/// Store-level expiration derived from an application duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ttl {
    /// Entry persists until an explicit delete or flush
    None,
    /// Entry expires this many milliseconds after the write
    Millis(u64),
}

impl Ttl {
    // == From Seconds ==
    /// Converts a duration in seconds to a store TTL.
    ///
    /// A duration of exactly `0` means "never expires" and results in no
    /// TTL argument reaching the store. Positive durations may be
    /// fractional (`0.1` is 100ms) and are rounded to the nearest
    /// millisecond, with a floor of 1ms: a tiny positive duration must
    /// never round down to 0, which the store would read as "no
    /// expiration".
    ///
    /// Negative and non-finite durations are a caller contract violation
    /// and are rejected before any store call is made.
    pub fn from_secs(duration: f64) -> Result<Ttl> {
        if !duration.is_finite() || duration < 0.0 {
            return Err(CacheError::InvalidDuration(duration));
        }
        if duration == 0.0 {
            return Ok(Ttl::None);
        }
        let millis = (duration * 1000.0).round() as u64;
        Ok(Ttl::Millis(millis.max(1)))
    }

    /// Returns the TTL in milliseconds, or None for "never expires".
    pub fn as_millis(&self) -> Option<u64> {
        match self {
            Ttl::None => None,
            Ttl::Millis(ms) => Some(*ms),
        }
    }
}
