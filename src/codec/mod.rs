//! Codec Module
//!
//! Normalizes application keys, values, and durations into what the
//! underlying store understands.

mod duration;
mod key;
mod value;

// Re-export public types
pub use duration::Ttl;
pub use key::{CacheKey, KeyCodec};
pub use value::JsonCodec;
