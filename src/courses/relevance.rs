use serde::{Serialize, Deserialize};
use crate::activity::model::LearningPattern;
use crate::config::scoring::ScoringConfig;
use crate::courses::course::{Course, CourseLevel};
use crate::engagement::Engagement;
use crate::skills::model::{average_score, SkillGap};
use crate::student::StudentProfile;

/// Everything a course is scored against, with the per-student lookups
/// resolved once up front.
#[derive(Debug, Clone)]
pub struct RelevanceContext<'a> {
    pub skill_gaps: &'a [SkillGap],
    pub learning_patterns: &'a [LearningPattern],
    pub engagement: &'a Engagement,
    pub student: &'a StudentProfile,
    preferred_content_type: Option<&'a str>,
    average_skill_score: Option<f64>,
}

impl<'a> RelevanceContext<'a> {
    pub fn new(
        skill_gaps: &'a [SkillGap],
        learning_patterns: &'a [LearningPattern],
        engagement: &'a Engagement,
        student: &'a StudentProfile,
    ) -> Self {
        RelevanceContext {
            skill_gaps,
            learning_patterns,
            engagement,
            student,
            preferred_content_type: student.preferred_content_type(),
            average_skill_score: average_score(&student.skill_scores),
        }
    }

    /// The strongest learning pattern, if any activity was recorded.
    pub fn best_pattern(&self) -> Option<&'a LearningPattern> {
        self.learning_patterns.first()
    }

    pub fn preferred_content_type(&self) -> Option<&'a str> {
        self.preferred_content_type
    }

    pub fn average_skill_score(&self) -> Option<f64> {
        self.average_skill_score
    }
}

/// Per-component breakdown of a relevance score.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RelevanceBreakdown {
    pub skill_gap: f64,
    pub duration: f64,
    pub content_type: f64,
    pub level: f64,
}

impl RelevanceBreakdown {
    pub fn total(&self) -> f64 {
        self.skill_gap + self.duration + self.content_type + self.level
    }
}

/// Score one course. Higher is more relevant; the scale is unbounded.
pub fn course_relevance_score(course: &Course, ctx: &RelevanceContext<'_>, config: &ScoringConfig) -> f64 {
    score_breakdown(course, ctx, config).total()
}

pub fn score_breakdown(course: &Course, ctx: &RelevanceContext<'_>, config: &ScoringConfig) -> RelevanceBreakdown {
    let mut breakdown = RelevanceBreakdown::default();

    for skill in &course.skills_gained {
        if let Some(gap) = ctx.skill_gaps.iter().find(|g| &g.skill == skill) {
            breakdown.skill_gap += config.skill_gap_weight * gap.priority as f64 * gap.size();
        }
    }

    // No recorded activity means no session length to compare against.
    if let Some(best) = ctx.best_pattern() {
        if course.estimated_duration <= best.average_duration * config.duration_tolerance {
            breakdown.duration = config.duration_bonus;
        }
    }

    if ctx.preferred_content_type() == Some(course.content_type.as_str()) {
        breakdown.content_type = config.content_type_bonus;
    }

    if let Some(average) = ctx.average_skill_score() {
        let band = CourseLevel::for_average_score(average, config.beginner_ceiling, config.advanced_floor);
        if course.level == band {
            breakdown.level = config.level_match_bonus;
        }
    }

    breakdown
}
