use crate::cache::{cache_plan, fingerprint, get_cached};
use crate::error::PathError;
use crate::paths::{LearnerInsights, LearningPlan, PathPlanner, PathRequest};
use crate::state::app::AppState;

/// Plan learning paths for a request, reusing a cached plan for an identical request.
pub fn recommend_paths(
    state: &AppState,
    planner: &PathPlanner,
    request: &PathRequest,
) -> Result<LearningPlan, PathError> {
    let key = fingerprint(request).map_err(|e| {
        state.metrics.record_error();
        tracing::error!(error = %e, "Failed to fingerprint path request");
        e
    })?;

    if let Some(plan) = get_cached(state, &key) {
        state.metrics.record_cache_hit();
        return Ok(plan);
    }
    state.metrics.record_cache_miss();

    let plan = planner.plan(request);
    let placed: usize = plan.paths.iter().map(|p| p.courses.len()).sum();
    state.metrics.record_plan(plan.paths.len(), placed);

    cache_plan(state, key, &plan);
    Ok(plan)
}

/// Gap, pattern and engagement analysis without path assembly.
pub fn learner_insights(planner: &PathPlanner, request: &PathRequest) -> LearnerInsights {
    planner.insights(request)
}
