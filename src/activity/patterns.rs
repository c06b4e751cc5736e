use std::cmp::Ordering;
use chrono::FixedOffset;
use crate::activity::model::{ActivityRecord, LearningPattern, TimeOfDay};

/// Bucket the activity log by time of day and rank the buckets by
/// `completion_rate * sessions`, strongest first.
///
/// Records are folded in input order. Buckets appear in the order they were
/// first seen before the stable sort, so equal strengths keep that order.
/// Buckets without records are omitted; an empty log yields no patterns.
pub fn analyze_learning_patterns(
    activity: &[ActivityRecord],
    offset: Option<FixedOffset>,
) -> Vec<LearningPattern> {
    let mut patterns: Vec<LearningPattern> = Vec::with_capacity(4);

    for record in activity {
        let bucket = TimeOfDay::of(&record.local_time(offset));
        let idx = match patterns.iter().position(|p| p.time_of_day == bucket) {
            Some(idx) => idx,
            None => {
                patterns.push(LearningPattern::new(bucket));
                patterns.len() - 1
            }
        };
        patterns[idx].record(record.duration, record.completed);
    }

    patterns.sort_by(|a, b| b.strength().partial_cmp(&a.strength()).unwrap_or(Ordering::Equal));

    tracing::debug!(
        records = activity.len(),
        buckets = patterns.len(),
        best = ?patterns.first().map(|p| p.time_of_day),
        "Analyzed learning patterns"
    );

    patterns
}

/// Convert a configured minute offset into a chrono offset.
/// Out-of-range values are ignored with a warning.
pub fn offset_from_minutes(minutes: Option<i32>) -> Option<FixedOffset> {
    let minutes = minutes?;
    let offset = minutes.checked_mul(60).and_then(FixedOffset::east_opt);
    if offset.is_none() {
        tracing::warn!(utc_offset_minutes = minutes, "Ignoring out-of-range UTC offset");
    }
    offset
}
