//! Conversation context storage.
//!
//! The walks in [`crate::walk`] take their relation maps as plain
//! arguments; a [`ContextStore`] is the collaborator that owns those maps,
//! populates them incrementally as thread context arrives from the server,
//! and hands out consistent snapshots per reconstruction.

pub mod memory;

use crate::types::StatusId;
use crate::walk::{InReplyToMap, RepliesMap};

/// Read side of a conversation context store.
///
/// Implementations must keep sibling order stable (arrival order) and keep
/// the two maps mutually consistent. All methods are synchronous: the
/// reconstruction core is pure, single-threaded computation and a store is
/// expected to serve it from memory.
pub trait ContextStore {
    /// Whether the status id is known to the store.
    fn contains(&self, id: &StatusId) -> bool;

    /// Parent of a status, if it is a known reply.
    fn parent_of(&self, id: &StatusId) -> Option<&StatusId>;

    /// Ordered replies of a status, if any arrived.
    fn replies_of(&self, id: &StatusId) -> Option<&[StatusId]>;

    /// The full child → parent map, as one consistent snapshot.
    fn in_reply_to(&self) -> &InReplyToMap;

    /// The full parent → ordered children map, as one consistent snapshot.
    fn replies(&self) -> &RepliesMap;

    /// Monotonically increasing revision, bumped on every mutation.
    ///
    /// Lets memoization layers detect that the maps changed without
    /// diffing them.
    fn revision(&self) -> u64;
}

pub use memory::InMemoryContextStore;
