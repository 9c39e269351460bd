//! End-to-end reconstruction scenarios.
//!
//! These tests drive the full path a thread view takes: populate the
//! context store from a fetch, assemble the context, classify the rows.

use thread_context::{
    thread_items, InMemoryContextStore, MemoizedAssembler, StatusId, ThreadAssembler, ThreadError,
    ThreadItem,
};

fn id(s: &str) -> StatusId {
    StatusId::new(s)
}

/// The thread used across most scenarios:
///
/// ```text
///   A
///   └ B
///     └ C            <- focal
///       ├ d1
///       │ └ d2
///       └ d3
/// ```
fn build_thread() -> InMemoryContextStore {
    let mut store = InMemoryContextStore::new();
    store.insert_status(id("A"), None);
    store.insert_status(id("B"), Some(id("A")));
    store.insert_status(id("C"), Some(id("B")));
    store.insert_status(id("d1"), Some(id("C")));
    store.insert_status(id("d2"), Some(id("d1")));
    store.insert_status(id("d3"), Some(id("C")));
    store
}

#[test]
fn reconstructs_full_thread_around_focal() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let store = build_thread();
    let assembler = ThreadAssembler::new(&store);

    let ctx = assembler.context_of(&id("C")).unwrap();

    assert_eq!(ctx.ancestors, vec![id("A"), id("B")]);
    assert_eq!(ctx.descendants, vec![id("d1"), id("d2"), id("d3")]);
    assert_eq!(ctx.focal_index(), 2);
}

#[test]
fn context_is_stable_across_repeated_assembly() {
    let store = build_thread();
    let assembler = ThreadAssembler::new(&store);

    let first = assembler.context_of(&id("C")).unwrap();
    let fingerprint = first.fingerprint();

    for _ in 0..100 {
        let ctx = assembler.context_of(&id("C")).unwrap();
        assert_eq!(ctx, first);
        assert_eq!(ctx.fingerprint(), fingerprint);
    }
}

#[test]
fn late_arriving_reply_appears_after_existing_siblings() {
    let mut store = build_thread();

    // d4 arrives after d1/d3 and replies to C.
    store.insert_status(id("d4"), Some(id("C")));

    let assembler = ThreadAssembler::new(&store);
    let ctx = assembler.context_of(&id("C")).unwrap();

    assert_eq!(
        ctx.descendants,
        vec![id("d1"), id("d2"), id("d3"), id("d4")]
    );
}

#[test]
fn deleting_a_descendant_removes_its_branch() {
    let mut store = build_thread();
    store.remove_status(&id("d1"));

    let assembler = ThreadAssembler::new(&store);
    let ctx = assembler.context_of(&id("C")).unwrap();

    // d2 is orphaned by the deletion and no longer reachable from C.
    assert_eq!(ctx.descendants, vec![id("d3")]);
}

#[test]
fn deleting_an_ancestor_truncates_the_chain() {
    let mut store = build_thread();
    store.remove_status(&id("B"));

    let assembler = ThreadAssembler::new(&store);
    let ctx = assembler.context_of(&id("C")).unwrap();

    // C is now a root; A is unreachable.
    assert!(ctx.ancestors.is_empty());
    assert_eq!(ctx.descendants, vec![id("d1"), id("d2"), id("d3")]);
}

#[test]
fn cyclic_reply_data_yields_finite_partial_context() {
    let mut store = build_thread();

    // Adversarial payload: A claims to reply to d2, closing a cycle
    // through the whole thread.
    store.insert_status(id("A"), Some(id("d2")));

    let assembler = ThreadAssembler::new(&store);
    let ctx = assembler.context_of(&id("C")).unwrap();

    // Finite and disjoint; exact truncation point is the walk's business.
    assert!(!ctx.contains(&id("C")));
    let overlap: Vec<_> = ctx
        .ancestors
        .iter()
        .filter(|a| ctx.descendants.contains(a))
        .collect();
    assert!(overlap.is_empty());
}

#[test]
fn unknown_focal_is_an_error_not_an_empty_thread() {
    let store = build_thread();
    let assembler = ThreadAssembler::new(&store);

    assert_eq!(
        assembler.context_of(&id("missing")),
        Err(ThreadError::FocalNotKnown(id("missing")))
    );
}

#[test]
fn placeholder_ids_flow_through_and_classify_at_the_edge() {
    let mut store = build_thread();

    // A deleted reply surfaced as a tombstone and an optimistic local
    // compose, both parented under C like any other status.
    store.insert_status(id("x-tombstone"), Some(id("C")));
    store.insert_status(id("末pending-abc123"), Some(id("C")));

    let assembler = ThreadAssembler::new(&store);
    let ctx = assembler.context_of(&id("C")).unwrap();
    let items = thread_items(&ctx, &id("C"));

    assert_eq!(items.len(), ctx.len() + 1);
    assert!(items.contains(&ThreadItem::Tombstone {
        id: id("x-tombstone"),
    }));
    assert!(items.contains(&ThreadItem::Pending {
        id: id("末pending-abc123"),
        idempotency_key: "abc123".to_string(),
    }));
    // The focal row sits right after the ancestors.
    assert_eq!(
        items[ctx.focal_index()],
        ThreadItem::Status { id: id("C") }
    );
}

#[test]
fn memoized_assembly_tracks_store_revisions() {
    let mut store = build_thread();
    let memo = MemoizedAssembler::new();

    let first = memo.context_of(&store, &id("C")).unwrap();
    assert!(!first.cache_hit);

    let second = memo.context_of(&store, &id("C")).unwrap();
    assert!(second.cache_hit);
    assert_eq!(second.context, first.context);

    store.insert_status(id("d4"), Some(id("C")));

    let third = memo.context_of(&store, &id("C")).unwrap();
    assert!(!third.cache_hit);
    assert_eq!(third.context.descendants.len(), 4);
}

#[test]
fn empty_store_after_failed_fetch_degrades_gracefully() {
    // The context fetch failed upstream; only the focal status itself is
    // known from the timeline.
    let mut store = InMemoryContextStore::new();
    store.insert_status(id("C"), None);

    let assembler = ThreadAssembler::new(&store);
    let ctx = assembler.context_of(&id("C")).unwrap();

    assert!(ctx.is_empty());
    assert_eq!(thread_items(&ctx, &id("C")), vec![ThreadItem::Status {
        id: id("C"),
    }]);
}
