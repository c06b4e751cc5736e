use std::num::NonZeroUsize;
use std::sync::Arc;
use parking_lot::RwLock;
use lru::LruCache;
use crate::metrics::Metrics;
use crate::paths::LearningPlan;

const DEFAULT_CACHE_CAPACITY: usize = 64;

/// Application-wide state container.
/// Shared mutable state lives here and is passed explicitly to commands;
/// the planning core itself holds none.
#[derive(Clone)]
pub struct AppState {
    /// Generated plans keyed by request fingerprint (LRU with bounded size)
    pub plan_cache: Arc<RwLock<LruCache<String, LearningPlan>>>,
    pub metrics: Metrics,
}

impl AppState {
    /// Create a new AppState with the default cache size
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// A capacity of zero falls back to the default.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity)
            .or_else(|| NonZeroUsize::new(DEFAULT_CACHE_CAPACITY))
            .unwrap_or(NonZeroUsize::MIN);
        AppState {
            plan_cache: Arc::new(RwLock::new(LruCache::new(capacity))),
            metrics: Metrics::new(),
        }
    }

    pub fn cached_plans(&self) -> usize {
        self.plan_cache.read().len()
    }

    pub fn clear_cache(&self) {
        self.plan_cache.write().clear();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
