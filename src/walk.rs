//! Thread reconstruction walks.
//!
//! The reconstructor consumes two externally owned relation maps — child to
//! parent (`in-reply-to`) and parent to ordered children (`replies`) — plus
//! a focal status id, and produces the ordered, duplicate-free ancestor and
//! descendant sequences a thread view renders around that status.
//!
//! Both walks are pure: they never mutate the maps, never allocate beyond
//! their output, and never fail. Malformed graphs (missing parents, cycles
//! from adversarial or inconsistent federation data) degrade to truncated
//! partial results instead of errors.

use std::collections::{BTreeMap, HashSet, VecDeque};

use tracing::trace;

use crate::types::{StatusId, ThreadContext};

/// Child → parent relation. Absence means root or unknown parent.
pub type InReplyToMap = BTreeMap<StatusId, StatusId>;

/// Parent → ordered children relation. Arrival order of children is
/// meaningful: it fixes sibling display order.
pub type RepliesMap = BTreeMap<StatusId, Vec<StatusId>>;

/// Walk the in-reply-to chain upward from `start`, returning the ancestor
/// chain in root-to-parent order.
///
/// `start` is the parent of the focal status (or `None` when the focal
/// status is a root or its parent is unknown, yielding an empty chain).
/// A repeated id stops the walk, so a cyclic chain truncates instead of
/// looping.
pub fn ancestors_of(start: Option<&StatusId>, in_reply_to: &InReplyToMap) -> Vec<StatusId> {
    let mut chain: Vec<StatusId> = Vec::new();
    let mut seen: HashSet<&StatusId> = HashSet::new();

    let mut current = start;
    while let Some(id) = current {
        if !seen.insert(id) {
            trace!(status_id = %id, "ancestor cycle, truncating chain");
            break;
        }
        chain.push(id.clone());
        current = in_reply_to.get(id);
    }

    // Collected parent-upward; the view wants root first.
    chain.reverse();
    chain
}

/// Depth-first expansion of the replies below `focal`, excluding `focal`
/// itself, in left-to-right sibling order.
///
/// Popping an id that was already processed halts the entire walk, not just
/// that branch, leaving a partial result. That is a defensive bound against
/// cyclic reply data, not an error condition, and it deliberately matches
/// the long-standing client behavior. (Whether a repeat should skip only
/// the offending branch is an open product question; do not "fix" it here.)
pub fn descendants_of(focal: &StatusId, replies_of: &RepliesMap) -> Vec<StatusId> {
    let mut emitted: Vec<StatusId> = Vec::new();
    let mut seen: HashSet<StatusId> = HashSet::new();
    let mut queue: VecDeque<StatusId> = VecDeque::new();
    queue.push_back(focal.clone());

    while let Some(id) = queue.pop_front() {
        if !seen.insert(id.clone()) {
            trace!(status_id = %id, emitted = emitted.len(), "descendant repeat, halting walk");
            break;
        }

        if id != *focal {
            emitted.push(id.clone());
        }

        if let Some(children) = replies_of.get(&id) {
            // Front-push in reverse so the children come back off the
            // queue in their original left-to-right order.
            for child in children.iter().rev() {
                queue.push_front(child.clone());
            }
        }
    }

    emitted
}

/// Resolve raw ancestor and descendant sequences into the final disjoint
/// context.
///
/// The raw sequences can overlap when the reply graph is inconsistent.
/// Descendants win any contested id: ancestors drop the focal id and
/// anything also present in descendants, then descendants drop the focal
/// id. Relative order within each sequence is preserved.
pub fn combine(
    focal: &StatusId,
    ancestors: Vec<StatusId>,
    descendants: Vec<StatusId>,
) -> ThreadContext {
    let ancestors = {
        let descendant_set: HashSet<&StatusId> = descendants.iter().collect();
        ancestors
            .into_iter()
            .filter(|id| id != focal && !descendant_set.contains(id))
            .collect()
    };
    let descendants = descendants.into_iter().filter(|id| id != focal).collect();

    ThreadContext {
        ancestors,
        descendants,
    }
}

/// Run both walks around `focal` and combine them.
///
/// The ancestor walk starts at the focal status's own parent link, so the
/// focal id is excluded from both sequences by construction.
pub fn reconstruct(
    focal: &StatusId,
    in_reply_to: &InReplyToMap,
    replies_of: &RepliesMap,
) -> ThreadContext {
    let ancestors = ancestors_of(in_reply_to.get(focal), in_reply_to);
    let descendants = descendants_of(focal, replies_of);
    combine(focal, ancestors, descendants)
}
