use std::collections::BTreeMap;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Serialize, Deserialize};
use crate::activity::model::{LearningPattern, TimeOfDay};
use crate::skills::model::{weakest_skill, SkillScore};
use crate::student::most_engaged;

/// One graded unit of work, used for monthly trend reporting.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PerformanceRecord {
    pub date: NaiveDate,
    pub score: f64,
    #[serde(default)]
    pub hours: f64,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceTrend {
    /// Short month name, e.g. "Mar"
    pub period: String,
    pub average_score: f64,
    pub total_hours: f64,
    pub completion_rate: f64,
}

/// Group records by month and summarize each group.
/// Periods are listed in the order their first record appears.
pub fn analyze_performance_trends(records: &[PerformanceRecord]) -> Vec<PerformanceTrend> {
    let mut groups: Vec<(String, Vec<&PerformanceRecord>)> = Vec::new();

    for record in records {
        let period = record.date.format("%b").to_string();
        match groups.iter_mut().find(|(p, _)| *p == period) {
            Some((_, items)) => items.push(record),
            None => groups.push((period, vec![record])),
        }
    }

    groups
        .into_iter()
        .map(|(period, items)| {
            let n = items.len() as f64;
            PerformanceTrend {
                period,
                average_score: items.iter().map(|r| r.score).sum::<f64>() / n,
                total_hours: items.iter().map(|r| r.hours).sum(),
                completion_rate: items.iter().filter(|r| r.completed).count() as f64 / n,
            }
        })
        .collect()
}

/// Aggregated view of a learner used for coaching recommendations.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct LearnerSnapshot {
    #[serde(default)]
    pub average_hours_per_day: Option<f64>,
    #[serde(default)]
    pub content_type_engagement: BTreeMap<String, f64>,
    #[serde(default)]
    pub skill_scores: Vec<SkillScore>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Pace,
    Content,
    Skill,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub message: String,
}

/// Coaching hints: study pace, favoured content type, weakest skill.
/// A hint is skipped when the data it needs is missing.
pub fn generate_recommendations(snapshot: &LearnerSnapshot) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if let Some(hours) = snapshot.average_hours_per_day {
        if hours < 1.0 {
            recommendations.push(Recommendation {
                kind: RecommendationKind::Pace,
                message: "Consider increasing your daily study time to maintain momentum".to_string(),
            });
        }
    }

    if let Some(content) = most_engaged(&snapshot.content_type_engagement) {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Content,
            message: format!(
                "You seem to engage well with {} content. We'll prioritize similar materials.",
                content
            ),
        });
    }

    if let Some(weakest) = weakest_skill(&snapshot.skill_scores) {
        recommendations.push(Recommendation {
            kind: RecommendationKind::Skill,
            message: format!("Consider focusing on improving your {} skills", weakest.name),
        });
    }

    recommendations
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProgressPoint {
    pub date: DateTime<Utc>,
    /// Cumulative progress, e.g. percent complete
    pub progress: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VelocityTrend {
    Increasing,
    Decreasing,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LearningVelocity {
    /// Progress per day over the latest interval
    pub current: f64,
    pub average: f64,
    pub trend: VelocityTrend,
}

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Progress-per-day between consecutive points.
///
/// Intervals with no progress or no elapsed time are dropped. Returns `None`
/// when no interval is left.
pub fn calculate_learning_velocity(points: &[ProgressPoint]) -> Option<LearningVelocity> {
    let velocities: Vec<f64> = points
        .windows(2)
        .filter_map(|pair| {
            let elapsed = (pair[1].date - pair[0].date).num_milliseconds() as f64;
            let velocity = (pair[1].progress - pair[0].progress) / elapsed * MILLIS_PER_DAY;
            (velocity.is_finite() && velocity != 0.0).then_some(velocity)
        })
        .collect();

    let current = *velocities.last()?;
    let average = velocities.iter().sum::<f64>() / velocities.len() as f64;

    Some(LearningVelocity {
        current,
        average,
        trend: if current > average {
            VelocityTrend::Increasing
        } else {
            VelocityTrend::Decreasing
        },
    })
}

/// Inputs for a learner's weighted performance score.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSummary {
    pub courses_completed: u32,
    pub total_courses: u32,
    /// 0-100
    pub average_score: f64,
    /// Consecutive study days
    pub learning_streak: u32,
}

const COMPLETION_WEIGHT: f64 = 0.4;
const SCORE_WEIGHT: f64 = 0.3;
const CONSISTENCY_WEIGHT: f64 = 0.3;
const STREAK_TARGET_DAYS: f64 = 30.0;

/// Weighted blend of completion rate, average score and streak, each on a
/// 0-100 scale. No enrolled courses counts as zero completion.
pub fn calculate_performance_score(summary: &PerformanceSummary) -> f64 {
    let completion_rate = if summary.total_courses == 0 {
        0.0
    } else {
        summary.courses_completed as f64 / summary.total_courses as f64 * 100.0
    };
    let consistency = summary.learning_streak as f64 / STREAK_TARGET_DAYS * 100.0;

    completion_rate * COMPLETION_WEIGHT
        + summary.average_score * SCORE_WEIGHT
        + consistency * CONSISTENCY_WEIGHT
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyProgress {
    #[serde(default)]
    pub week: String,
    /// Units completed that week
    pub completed: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressTrend {
    Improving,
    Declining,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct InsightInput {
    #[serde(default)]
    pub learning_patterns: Vec<LearningPattern>,
    #[serde(default)]
    pub skill_progress: Vec<SkillScore>,
    /// Oldest week first
    #[serde(default)]
    pub weekly_progress: Vec<WeeklyProgress>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct LearningInsights {
    pub most_productive_time: Option<TimeOfDay>,
    pub improvement_area: Option<String>,
    pub progress_trend: Option<ProgressTrend>,
}

impl LearningInsights {
    /// Human-readable lines, one per insight that could be computed.
    pub fn messages(&self) -> Vec<String> {
        let mut messages = Vec::new();
        if let Some(time) = self.most_productive_time {
            messages.push(format!("Most productive time: {:?}", time));
        }
        if let Some(ref skill) = self.improvement_area {
            messages.push(format!("Area for improvement: {}", skill));
        }
        if let Some(trend) = self.progress_trend {
            messages.push(format!("Progress trend: {:?}", trend));
        }
        messages
    }
}

/// Busiest time of day, weakest skill and week-over-week trend.
///
/// Ties resolve to the earliest entry. Each insight is `None` when its input
/// is empty; the trend needs at least two weeks.
pub fn generate_insights(input: &InsightInput) -> LearningInsights {
    let most_productive_time = input
        .learning_patterns
        .iter()
        .fold(None, |best: Option<&LearningPattern>, p| match best {
            Some(b) if b.sessions >= p.sessions => Some(b),
            _ => Some(p),
        })
        .map(|p| p.time_of_day);

    let progress_trend = match input.weekly_progress.as_slice() {
        [.., previous, latest] => Some(if latest.completed > previous.completed {
            ProgressTrend::Improving
        } else {
            ProgressTrend::Declining
        }),
        _ => None,
    };

    LearningInsights {
        most_productive_time,
        improvement_area: weakest_skill(&input.skill_progress).map(|s| s.name.clone()),
        progress_trend,
    }
}
