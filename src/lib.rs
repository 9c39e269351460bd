//! # thread-context
//!
//! Deterministic thread reconstruction for federated reply graphs.
//!
//! Given a focal status and the two relation maps a conversation-context
//! fetch populates — `in-reply-to` (child → parent) and `replies`
//! (parent → ordered children) — this crate answers one question:
//!
//! > Which statuses render above and below the focal status, in what order?
//!
//! ## Core Contract
//!
//! 1. The ancestor walk yields the chain from the most distant ancestor
//!    down to the focal status's immediate parent
//! 2. The descendant walk yields the depth-first, left-to-right reply
//!    expansion below the focal status
//! 3. Combination resolves overlaps: the sequences are disjoint and the
//!    focal id appears in neither
//!
//! ## Architecture
//!
//! ```text
//! Focal Status → ThreadAssembler → walks → combine → ThreadContext
//!                      ↓
//!               ContextStore (in-memory relation maps)
//! ```
//!
//! ## Safety Guarantees
//!
//! - Walks are pure and read-only; every invocation returns fresh sequences
//! - Cycles in either map truncate the result, they never loop or error
//! - Sibling order is arrival order, preserved end to end

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assembler;
pub mod canonical;
pub mod memo;
pub mod menu;
pub mod store;
pub mod types;
pub mod walk;

// Re-exports
pub use assembler::{ThreadAssembler, ThreadError};
pub use canonical::{canonical_hash, canonical_hash_hex, to_canonical_bytes};
pub use memo::{CacheConfig, MemoizedAssembler, MemoizedContext};
pub use menu::{
    profile_menu, Account, Capabilities, MenuAction, MenuEntry, MenuLink, Relationship, Viewer,
};
pub use store::{ContextStore, InMemoryContextStore};
pub use types::{thread_items, StatusId, ThreadContext, ThreadItem};
pub use walk::{ancestors_of, combine, descendants_of, reconstruct, InReplyToMap, RepliesMap};
