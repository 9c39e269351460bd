//! Thread assembly over a context store.
//!
//! [`ThreadAssembler`] is the per-invocation driver: it checks that the
//! focal status is known, runs both walks against one consistent snapshot
//! of the store's maps, and combines the results into a disjoint
//! [`ThreadContext`].

use tracing::debug;

use crate::store::ContextStore;
use crate::types::{StatusId, ThreadContext};
use crate::walk;

/// Error type for thread assembly.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThreadError {
    /// The focal status has not been fetched into the store.
    #[error("focal status not known: {0}")]
    FocalNotKnown(StatusId),
}

/// Assembles thread contexts from a [`ContextStore`].
///
/// Holds only a reference to the store; every call reads the maps as they
/// are at that moment and returns fresh output sequences. The walks inside
/// are infallible — the one failure mode is asking for a focal status the
/// store has never seen, which a view surfaces as a missing-status
/// indicator rather than an empty thread.
pub struct ThreadAssembler<'a, S: ContextStore> {
    store: &'a S,
}

impl<'a, S: ContextStore> ThreadAssembler<'a, S> {
    /// Create an assembler over a store.
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Reconstruct the thread context around `focal`.
    pub fn context_of(&self, focal: &StatusId) -> Result<ThreadContext, ThreadError> {
        if !self.store.contains(focal) {
            return Err(ThreadError::FocalNotKnown(focal.clone()));
        }

        let context = walk::reconstruct(focal, self.store.in_reply_to(), self.store.replies());

        debug!(
            focal = %focal,
            ancestors = context.ancestors.len(),
            descendants = context.descendants.len(),
            "assembled thread context"
        );

        Ok(context)
    }

    /// Get a reference to the store.
    pub fn store(&self) -> &S {
        self.store
    }
}
