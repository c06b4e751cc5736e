use sha2::{Digest, Sha256};
use crate::error::PathError;
use crate::paths::{LearningPlan, PathRequest};
use crate::state::app::AppState;

/// SHA-256 of the request's JSON form, hex encoded.
pub fn fingerprint(request: &PathRequest) -> Result<String, PathError> {
    let json = serde_json::to_vec(request)
        .map_err(|e| PathError::new(
            format!("Failed to serialize request for fingerprint: {}", e),
            "json_serialize"
        ))?;
    Ok(format!("{:x}", Sha256::digest(&json)))
}

/// Check cache and return if found
pub fn get_cached(state: &AppState, key: &str) -> Option<LearningPlan> {
    // `get` bumps recency, so this needs the write lock.
    let mut cache = state.plan_cache.write();
    match cache.get(key) {
        Some(plan) => {
            tracing::debug!(key = &key[..key.len().min(12)], "Cache hit");
            Some(plan.clone())
        }
        None => {
            tracing::debug!(key = &key[..key.len().min(12)], "Cache miss");
            None
        }
    }
}

/// Store a plan in cache
pub fn cache_plan(state: &AppState, key: String, plan: &LearningPlan) {
    let mut cache = state.plan_cache.write();
    cache.put(key, plan.clone());
}
