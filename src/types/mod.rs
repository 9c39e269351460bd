//! Core types for thread reconstruction.

pub mod context;
pub mod id;
pub mod item;

pub use context::ThreadContext;
pub use id::StatusId;
pub use item::{thread_items, ThreadItem, PENDING_PREFIX, TOMBSTONE_SUFFIX};
