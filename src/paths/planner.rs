use std::cmp::Ordering;
use serde::{Serialize, Deserialize};
use crate::activity::model::LearningPattern;
use crate::activity::patterns::{analyze_learning_patterns, offset_from_minutes};
use crate::config::scoring::ScoringConfig;
use crate::courses::course::Course;
use crate::courses::relevance::{course_relevance_score, RelevanceContext};
use crate::engagement::{Engagement, EngagementPredictor, RecentActivityPredictor};
use crate::paths::assembler::{group_courses_into_paths, LearningPath};
use crate::skills::gaps::{analyze_skill_gaps, is_gap_skill};
use crate::skills::model::{SkillGap, TargetSkill};
use crate::student::StudentProfile;

/// Input to one planning run.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PathRequest {
    #[serde(default)]
    pub student: StudentProfile,
    #[serde(default)]
    pub catalog: Vec<Course>,
    #[serde(default)]
    pub targets: Vec<TargetSkill>,
}

/// Analysis that feeds path assembly, without the paths themselves.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LearnerInsights {
    pub skill_gaps: Vec<SkillGap>,
    pub learning_patterns: Vec<LearningPattern>,
    pub engagement: Engagement,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LearningPlan {
    #[serde(flatten)]
    pub insights: LearnerInsights,
    pub paths: Vec<LearningPath>,
}

/// A course paired with its relevance score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCourse {
    pub course: Course,
    pub score: f64,
}

pub struct PathPlanner {
    config: ScoringConfig,
    predictor: Box<dyn EngagementPredictor + Send + Sync>,
}

impl PathPlanner {
    pub fn new(config: ScoringConfig) -> Self {
        let predictor = RecentActivityPredictor::from_config(&config);
        PathPlanner {
            config,
            predictor: Box::new(predictor),
        }
    }

    pub fn with_predictor<P>(mut self, predictor: P) -> Self
    where
        P: EngagementPredictor + Send + Sync + 'static,
    {
        self.predictor = Box::new(predictor);
        self
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Gap, pattern and engagement analysis for a request.
    pub fn insights(&self, request: &PathRequest) -> LearnerInsights {
        let student = &request.student;
        let offset = offset_from_minutes(self.config.utc_offset_minutes);

        LearnerInsights {
            skill_gaps: analyze_skill_gaps(&student.skill_scores, &request.targets),
            learning_patterns: analyze_learning_patterns(&student.activity, offset),
            engagement: self.predictor.predict(&student.activity),
        }
    }

    /// Courses that close at least one gap, most relevant first.
    /// Equal scores keep catalog order.
    pub fn rank_courses(&self, request: &PathRequest, insights: &LearnerInsights) -> Vec<ScoredCourse> {
        let ctx = RelevanceContext::new(
            &insights.skill_gaps,
            &insights.learning_patterns,
            &insights.engagement,
            &request.student,
        );

        let mut scored: Vec<ScoredCourse> = request
            .catalog
            .iter()
            .filter(|course| {
                course
                    .skills_gained
                    .iter()
                    .any(|skill| is_gap_skill(&insights.skill_gaps, skill))
            })
            .map(|course| ScoredCourse {
                score: course_relevance_score(course, &ctx, &self.config),
                course: course.clone(),
            })
            .collect();

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        scored
    }

    /// Full run: analysis, relevance ranking and path assembly.
    pub fn plan(&self, request: &PathRequest) -> LearningPlan {
        let insights = self.insights(request);
        let ranked = self.rank_courses(request, &insights);
        let sorted: Vec<Course> = ranked.into_iter().map(|s| s.course).collect();
        let paths = group_courses_into_paths(&sorted, &insights.skill_gaps);

        tracing::info!(
            catalog = request.catalog.len(),
            candidates = sorted.len(),
            gaps = insights.skill_gaps.len(),
            paths = paths.len(),
            predicted_dropoff = insights.engagement.predicted_dropoff,
            "Generated learning paths"
        );

        LearningPlan { insights, paths }
    }
}

impl Default for PathPlanner {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}
