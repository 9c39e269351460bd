//! Memoized thread assembly.
//!
//! Reconstruction is cheap but thread views recompute it on every data
//! change notification, most of which do not touch the relation maps. This
//! module caches assembled contexts keyed by (focal id, store revision):
//! a context is reused until the store reports a new revision, then the
//! next lookup recomputes.
//!
//! The memoizer takes the store per call, like a selector takes its state,
//! so the caller stays free to mutate the store between lookups.

use std::hash::Hasher;
use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::RwLock;
use tracing::trace;
use xxhash_rust::xxh64::Xxh64;

use crate::assembler::{ThreadAssembler, ThreadError};
use crate::store::ContextStore;
use crate::types::{StatusId, ThreadContext};

/// Configuration for the context cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of cached contexts.
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        // A client rarely has more than a handful of thread views alive;
        // the default leaves room for history navigation.
        Self { max_entries: 64 }
    }
}

/// Cache key: xxh64 over focal id and store revision.
///
/// Any mutation of the maps bumps the revision and misses the cache for
/// every focal id; repeated renders of unchanged data hit it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ContextCacheKey(u64);

impl ContextCacheKey {
    fn compute(focal: &StatusId, revision: u64) -> Self {
        let mut hasher = Xxh64::new(0);
        hasher.write(focal.as_str().as_bytes());
        hasher.write_u64(revision);
        Self(hasher.finish())
    }
}

/// Result of a memoized assembly.
#[derive(Debug, Clone)]
pub struct MemoizedContext {
    /// The assembled context.
    pub context: ThreadContext,
    /// Whether this result came from cache.
    pub cache_hit: bool,
}

/// Memoizing wrapper around [`ThreadAssembler`].
///
/// Thread-safe: the cache sits behind a `parking_lot::RwLock`, reads take
/// the read lock first and only upgrade to a write on a miss.
pub struct MemoizedAssembler {
    cache: RwLock<LruCache<ContextCacheKey, ThreadContext>>,
}

impl MemoizedAssembler {
    /// Create a memoized assembler with default cache configuration.
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    /// Create a memoized assembler with explicit cache configuration.
    pub fn with_config(config: CacheConfig) -> Self {
        let size = NonZeroUsize::new(config.max_entries)
            .unwrap_or_else(|| NonZeroUsize::new(1).expect("1 is non-zero"));
        Self {
            cache: RwLock::new(LruCache::new(size)),
        }
    }

    /// Reconstruct the thread context around `focal`, reusing a cached
    /// result when neither the focal id nor the store revision changed.
    pub fn context_of<S: ContextStore>(
        &self,
        store: &S,
        focal: &StatusId,
    ) -> Result<MemoizedContext, ThreadError> {
        let key = ContextCacheKey::compute(focal, store.revision());

        if let Some(context) = self.cache.read().peek(&key) {
            trace!(focal = %focal, "thread context cache hit");
            return Ok(MemoizedContext {
                context: context.clone(),
                cache_hit: true,
            });
        }

        let context = ThreadAssembler::new(store).context_of(focal)?;
        self.cache.write().put(key, context.clone());

        Ok(MemoizedContext {
            context,
            cache_hit: false,
        })
    }
}

impl Default for MemoizedAssembler {
    fn default() -> Self {
        Self::new()
    }
}
