use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Planning counters. All fields are atomic so clones share one set.
#[derive(Clone, Default)]
pub struct Metrics {
    /// Learning paths produced by fresh planning runs
    pub paths_generated: Arc<AtomicU64>,
    /// Candidate courses that went through relevance scoring
    pub courses_scored: Arc<AtomicU64>,
    pub cache_hit_count: Arc<AtomicU64>,
    pub cache_miss_count: Arc<AtomicU64>,
    pub errors_total: Arc<AtomicU64>,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_plan(&self, paths: usize, courses: usize) {
        self.paths_generated.fetch_add(paths as u64, Ordering::Relaxed);
        self.courses_scored.fetch_add(courses as u64, Ordering::Relaxed);
    }

    pub fn record_cache_hit(&self) {
        self.cache_hit_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_miss(&self) {
        self.cache_miss_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_error(&self) {
        self.errors_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            paths_generated: self.paths_generated.load(Ordering::Relaxed),
            courses_scored: self.courses_scored.load(Ordering::Relaxed),
            cache_hit_count: self.cache_hit_count.load(Ordering::Relaxed),
            cache_miss_count: self.cache_miss_count.load(Ordering::Relaxed),
            errors_total: self.errors_total.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct MetricsSnapshot {
    pub paths_generated: u64,
    pub courses_scored: u64,
    pub cache_hit_count: u64,
    pub cache_miss_count: u64,
    pub errors_total: u64,
}
