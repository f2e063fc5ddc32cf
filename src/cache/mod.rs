//! Cache Module
//!
//! The public cache API over a pluggable store backend.

mod core;


// Re-export public types
pub use self::core::Cache;
