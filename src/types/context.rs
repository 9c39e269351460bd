//! Thread context output type.

use serde::{Deserialize, Serialize};

use crate::canonical::canonical_hash_hex;
use crate::types::StatusId;

/// Reconstructed view of a thread around a focal status.
///
/// Produced by [`crate::walk::combine`] (usually via
/// [`crate::assembler::ThreadAssembler`]). The two sequences are disjoint
/// and the focal id appears in neither:
///
/// - `ancestors` runs from the most distant ancestor down to the immediate
///   parent of the focal status
/// - `descendants` is the depth-first, left-to-right expansion of replies
///   below the focal status
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadContext {
    /// Ordered ancestor chain, root first.
    pub ancestors: Vec<StatusId>,
    /// Ordered descendant sequence, depth first.
    pub descendants: Vec<StatusId>,
}

impl ThreadContext {
    /// An empty context (no known ancestors or descendants).
    pub fn empty() -> Self {
        Self {
            ancestors: Vec::new(),
            descendants: Vec::new(),
        }
    }

    /// Total number of statuses in the context, excluding the focal status.
    pub fn len(&self) -> usize {
        self.ancestors.len() + self.descendants.len()
    }

    /// Whether the context holds no statuses at all.
    pub fn is_empty(&self) -> bool {
        self.ancestors.is_empty() && self.descendants.is_empty()
    }

    /// Whether an id appears anywhere in the context.
    pub fn contains(&self, id: &StatusId) -> bool {
        self.ancestors.contains(id) || self.descendants.contains(id)
    }

    /// Index of the focal status in the rendered row list: the focal row
    /// sits directly after the ancestors, so this is also the scroll
    /// target index used by thread views.
    pub fn focal_index(&self) -> usize {
        self.ancestors.len()
    }

    /// Deterministic fingerprint of the context.
    ///
    /// Same ancestor and descendant sequences hash to the same value, so a
    /// consumer can compare fingerprints across refetches and skip work
    /// when the reconstructed thread did not change.
    pub fn fingerprint(&self) -> String {
        canonical_hash_hex(self)
    }
}
