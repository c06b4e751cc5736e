pub mod store;

use std::collections::BTreeMap;
use serde::{Serialize, Deserialize};
use crate::activity::model::ActivityRecord;
use crate::skills::model::SkillScore;

/// Everything known about a learner that path planning reads.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    #[serde(default)]
    pub skill_scores: Vec<SkillScore>,
    /// Engagement weight per content type ("video", "quiz", ...)
    #[serde(default)]
    pub preferred_content_types: BTreeMap<String, f64>,
    #[serde(default, alias = "activityData")]
    pub activity: Vec<ActivityRecord>,
}

impl StudentProfile {
    pub fn preferred_content_type(&self) -> Option<&str> {
        most_engaged(&self.preferred_content_types)
    }
}

/// Key with the highest engagement value.
/// Equal values resolve to the lexicographically smallest key.
pub fn most_engaged(weights: &BTreeMap<String, f64>) -> Option<&str> {
    let mut best: Option<(&str, f64)> = None;
    for (key, value) in weights {
        if value.is_nan() {
            continue;
        }
        match best {
            Some((_, top)) if top >= *value => {}
            _ => best = Some((key.as_str(), *value)),
        }
    }
    best.map(|(key, _)| key)
}
