//! Display classification of status ids.
//!
//! The reconstructor itself never inspects id text; how an id renders is a
//! consumer concern decided by textual convention:
//!
//! - ids ending in `-tombstone` stand for statuses known to be deleted or
//!   unavailable
//! - ids starting with `末pending-` stand for locally composed statuses not
//!   yet confirmed by the server; the remainder of the id is the compose
//!   idempotency key
//!
//! Everything else is a normal, fetched status.

use serde::{Deserialize, Serialize};

use crate::types::{StatusId, ThreadContext};

/// Suffix marking a deleted/unavailable status placeholder.
pub const TOMBSTONE_SUFFIX: &str = "-tombstone";

/// Prefix marking a locally optimistic, not-yet-confirmed status.
///
/// The leading non-ASCII character keeps the prefix out of the server's id
/// space, so a real status id can never be misclassified as pending.
pub const PENDING_PREFIX: &str = "末pending-";

/// How a status id should be displayed in a thread view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ThreadItem {
    /// A normal status, fetched from the server.
    Status {
        /// The status id.
        id: StatusId,
    },
    /// Placeholder for a deleted or unavailable status.
    Tombstone {
        /// The placeholder id (retains the `-tombstone` suffix).
        id: StatusId,
    },
    /// Placeholder for a locally composed status awaiting confirmation.
    Pending {
        /// The placeholder id (retains the pending prefix).
        id: StatusId,
        /// Idempotency key of the pending compose request.
        idempotency_key: String,
    },
}

impl ThreadItem {
    /// Classify a single id by the placeholder conventions.
    pub fn classify(id: &StatusId) -> Self {
        if id.as_str().ends_with(TOMBSTONE_SUFFIX) {
            ThreadItem::Tombstone { id: id.clone() }
        } else if let Some(key) = id.as_str().strip_prefix(PENDING_PREFIX) {
            ThreadItem::Pending {
                id: id.clone(),
                idempotency_key: key.to_string(),
            }
        } else {
            ThreadItem::Status { id: id.clone() }
        }
    }

    /// The id behind this item, whatever its kind.
    pub fn id(&self) -> &StatusId {
        match self {
            ThreadItem::Status { id } => id,
            ThreadItem::Tombstone { id } => id,
            ThreadItem::Pending { id, .. } => id,
        }
    }
}

/// Flatten a reconstructed context into the ordered row list a thread view
/// renders: classified ancestors, then the focal status, then classified
/// descendants.
pub fn thread_items(context: &ThreadContext, focal_id: &StatusId) -> Vec<ThreadItem> {
    let mut items = Vec::with_capacity(context.len() + 1);
    items.extend(context.ancestors.iter().map(ThreadItem::classify));
    items.push(ThreadItem::Status {
        id: focal_id.clone(),
    });
    items.extend(context.descendants.iter().map(ThreadItem::classify));
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_normal() {
        let id = StatusId::new("109348595892");
        assert_eq!(ThreadItem::classify(&id), ThreadItem::Status { id });
    }

    #[test]
    fn test_classify_tombstone() {
        let id = StatusId::new("109348595892-tombstone");
        assert_eq!(ThreadItem::classify(&id), ThreadItem::Tombstone { id });
    }

    #[test]
    fn test_classify_pending_strips_key() {
        let id = StatusId::new("末pending-4f2f1c9a");
        let item = ThreadItem::classify(&id);
        assert_eq!(
            item,
            ThreadItem::Pending {
                id,
                idempotency_key: "4f2f1c9a".to_string(),
            }
        );
    }

    #[test]
    fn test_pending_prefix_must_lead() {
        // The marker only counts at the start of the id.
        let id = StatusId::new("x末pending-abc");
        assert!(matches!(ThreadItem::classify(&id), ThreadItem::Status { .. }));
    }

    #[test]
    fn test_thread_items_order() {
        let ctx = ThreadContext {
            ancestors: vec![StatusId::new("a")],
            descendants: vec![
                StatusId::new("d-tombstone"),
                StatusId::new("末pending-key1"),
            ],
        };
        let focal = StatusId::new("f");
        let items = thread_items(&ctx, &focal);

        assert_eq!(items.len(), 4);
        assert_eq!(items[0].id().as_str(), "a");
        assert_eq!(items[1], ThreadItem::Status { id: focal });
        assert!(matches!(items[2], ThreadItem::Tombstone { .. }));
        assert!(matches!(items[3], ThreadItem::Pending { .. }));
    }
}
