//! In-memory conversation context store.

use std::collections::BTreeSet;

use tracing::debug;

use crate::types::StatusId;
use crate::walk::{InReplyToMap, RepliesMap};

use super::ContextStore;

/// In-memory context store.
///
/// Uses `BTreeMap`/`BTreeSet` for deterministic iteration; reply lists are
/// `Vec`s in arrival order, which is what fixes sibling display order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContextStore {
    /// Every status id the store has been told about.
    statuses: BTreeSet<StatusId>,
    /// Child -> parent.
    in_reply_to: InReplyToMap,
    /// Parent -> children in arrival order.
    replies: RepliesMap,
    /// Bumped on every mutation.
    revision: u64,
}

impl InMemoryContextStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fetched status and, when it is a reply, its parent link.
    ///
    /// The child is appended to its parent's reply list on first arrival;
    /// re-inserting a known reply with the same parent is a no-op. If the
    /// parent link changed (an edit moved the reply), the old sibling slot
    /// is released and the child is appended to the new parent's list.
    pub fn insert_status(&mut self, id: StatusId, in_reply_to: Option<StatusId>) {
        self.statuses.insert(id.clone());

        match in_reply_to {
            Some(parent) => {
                if let Some(old_parent) = self.in_reply_to.get(&id) {
                    if *old_parent == parent {
                        self.revision += 1;
                        return;
                    }
                    let old_parent = old_parent.clone();
                    self.unlink_child(&old_parent, &id);
                }
                self.replies.entry(parent.clone()).or_default().push(id.clone());
                self.in_reply_to.insert(id, parent);
            }
            None => {
                // A status that used to be a reply can arrive re-parented
                // to a root (e.g. its parent was deleted server-side).
                if let Some(old_parent) = self.in_reply_to.remove(&id) {
                    self.unlink_child(&old_parent, &id);
                }
            }
        }

        self.revision += 1;
    }

    /// Forget a status: drop its parent link, its sibling slot, and its own
    /// reply list. Its former children become orphan roots.
    pub fn remove_status(&mut self, id: &StatusId) {
        debug!(status_id = %id, "removing status from context");

        self.statuses.remove(id);

        if let Some(parent) = self.in_reply_to.remove(id) {
            self.unlink_child(&parent, id);
        }

        if let Some(children) = self.replies.remove(id) {
            for child in &children {
                self.in_reply_to.remove(child);
            }
        }

        self.revision += 1;
    }

    /// Number of known statuses.
    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    /// Whether the store knows no statuses.
    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    fn unlink_child(&mut self, parent: &StatusId, child: &StatusId) {
        if let Some(children) = self.replies.get_mut(parent) {
            children.retain(|c| c != child);
            if children.is_empty() {
                self.replies.remove(parent);
            }
        }
    }
}

impl ContextStore for InMemoryContextStore {
    fn contains(&self, id: &StatusId) -> bool {
        self.statuses.contains(id)
    }

    fn parent_of(&self, id: &StatusId) -> Option<&StatusId> {
        self.in_reply_to.get(id)
    }

    fn replies_of(&self, id: &StatusId) -> Option<&[StatusId]> {
        self.replies.get(id).map(Vec::as_slice)
    }

    fn in_reply_to(&self) -> &InReplyToMap {
        &self.in_reply_to
    }

    fn replies(&self) -> &RepliesMap {
        &self.replies
    }

    fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> StatusId {
        StatusId::new(s)
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut store = InMemoryContextStore::new();
        store.insert_status(id("root"), None);
        store.insert_status(id("r1"), Some(id("root")));

        assert!(store.contains(&id("root")));
        assert_eq!(store.parent_of(&id("r1")), Some(&id("root")));
        assert_eq!(store.replies_of(&id("root")), Some(&[id("r1")][..]));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_sibling_order_is_arrival_order() {
        let mut store = InMemoryContextStore::new();
        store.insert_status(id("root"), None);
        store.insert_status(id("b"), Some(id("root")));
        store.insert_status(id("a"), Some(id("root")));

        // Arrival order, not id order.
        assert_eq!(store.replies_of(&id("root")), Some(&[id("b"), id("a")][..]));
    }

    #[test]
    fn test_reinsert_same_parent_keeps_slot() {
        let mut store = InMemoryContextStore::new();
        store.insert_status(id("root"), None);
        store.insert_status(id("a"), Some(id("root")));
        store.insert_status(id("b"), Some(id("root")));
        store.insert_status(id("a"), Some(id("root")));

        assert_eq!(store.replies_of(&id("root")), Some(&[id("a"), id("b")][..]));
    }

    #[test]
    fn test_reparent_moves_sibling_slot() {
        let mut store = InMemoryContextStore::new();
        store.insert_status(id("p1"), None);
        store.insert_status(id("p2"), None);
        store.insert_status(id("a"), Some(id("p1")));
        store.insert_status(id("a"), Some(id("p2")));

        assert_eq!(store.replies_of(&id("p1")), None);
        assert_eq!(store.replies_of(&id("p2")), Some(&[id("a")][..]));
        assert_eq!(store.parent_of(&id("a")), Some(&id("p2")));
    }

    #[test]
    fn test_remove_unlinks_both_sides() {
        let mut store = InMemoryContextStore::new();
        store.insert_status(id("root"), None);
        store.insert_status(id("mid"), Some(id("root")));
        store.insert_status(id("leaf"), Some(id("mid")));

        store.remove_status(&id("mid"));

        assert!(!store.contains(&id("mid")));
        assert_eq!(store.replies_of(&id("root")), None);
        // The orphaned leaf is now a root.
        assert_eq!(store.parent_of(&id("leaf")), None);
        assert!(store.contains(&id("leaf")));
    }

    #[test]
    fn test_revision_bumps_on_mutation() {
        let mut store = InMemoryContextStore::new();
        let r0 = store.revision();
        store.insert_status(id("root"), None);
        let r1 = store.revision();
        store.remove_status(&id("root"));
        let r2 = store.revision();

        assert!(r0 < r1);
        assert!(r1 < r2);
    }
}
