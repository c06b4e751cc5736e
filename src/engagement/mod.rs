use std::collections::BTreeMap;
use chrono::{FixedOffset, NaiveDate};
use serde::{Serialize, Deserialize};
use crate::activity::model::ActivityRecord;
use crate::config::scoring::ScoringConfig;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Engagement {
    /// Mean study hours per day over the window
    pub activity_score: f64,
    /// Fraction of days in the window with any study time
    pub consistency_score: f64,
    pub predicted_dropoff: bool,
}

/// Anything that can turn an activity log into an engagement estimate.
pub trait EngagementPredictor {
    fn predict(&self, activity: &[ActivityRecord]) -> Engagement;
}

/// Looks at the most recent `window_days` study days.
#[derive(Debug, Clone)]
pub struct RecentActivityPredictor {
    pub window_days: usize,
    pub dropoff_activity_threshold: f64,
    pub dropoff_consistency_threshold: f64,
    pub offset: Option<FixedOffset>,
}

impl RecentActivityPredictor {
    pub fn from_config(config: &ScoringConfig) -> Self {
        RecentActivityPredictor {
            window_days: config.engagement_window_days.max(1),
            dropoff_activity_threshold: config.dropoff_activity_threshold,
            dropoff_consistency_threshold: config.dropoff_consistency_threshold,
            offset: crate::activity::patterns::offset_from_minutes(config.utc_offset_minutes),
        }
    }
}

impl Default for RecentActivityPredictor {
    fn default() -> Self {
        Self::from_config(&ScoringConfig::default())
    }
}

impl EngagementPredictor for RecentActivityPredictor {
    fn predict(&self, activity: &[ActivityRecord]) -> Engagement {
        let days = daily_hours(activity, self.offset);
        let window = self.window_days as f64;

        let recent: Vec<f64> = days
            .values()
            .rev()
            .take(self.window_days)
            .copied()
            .collect();

        let activity_score = recent.iter().sum::<f64>() / window;
        let consistency_score = recent.iter().filter(|h| **h > 0.0).count() as f64 / window;

        Engagement {
            activity_score,
            consistency_score,
            predicted_dropoff: activity_score < self.dropoff_activity_threshold
                && consistency_score < self.dropoff_consistency_threshold,
        }
    }
}

/// Hours studied per calendar day, in date order.
pub fn daily_hours(activity: &[ActivityRecord], offset: Option<FixedOffset>) -> BTreeMap<NaiveDate, f64> {
    let mut days: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for record in activity {
        let date = record.local_time(offset).date_naive();
        *days.entry(date).or_insert(0.0) += record.duration / 60.0;
    }
    days
}
