//! Background Tasks Module
//!
//! Periodic maintenance for the in-memory backend.

mod cleanup;

pub use cleanup::spawn_cleanup_task;
