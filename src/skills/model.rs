use serde::{Serialize, Deserialize};

/// A student's assessed proficiency in one skill, on a 0-100 scale.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SkillScore {
    #[serde(alias = "subject")]
    pub name: String,
    pub score: f64,
}

impl SkillScore {
    pub fn new<S: Into<String>>(name: S, score: f64) -> Self {
        SkillScore { name: name.into(), score }
    }
}

/// A skill the student is expected to reach.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TargetSkill {
    pub name: String,
    pub minimum_score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
}

impl TargetSkill {
    pub fn new<S: Into<String>>(name: S, minimum_score: f64) -> Self {
        TargetSkill { name: name.into(), minimum_score, priority: None }
    }

    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Declared priority, or 1 when absent. A declared 0 is also treated as 1.
    pub fn effective_priority(&self) -> u32 {
        self.priority.filter(|p| *p > 0).unwrap_or(1)
    }
}

/// Distance between where a student is and where a target skill requires them to be.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkillGap {
    pub skill: String,
    pub current_level: f64,
    pub target_level: f64,
    pub priority: u32,
}

impl SkillGap {
    pub fn size(&self) -> f64 {
        self.target_level - self.current_level
    }

    /// Sort key: larger gaps on higher-priority skills come first.
    pub fn weighted_size(&self) -> f64 {
        self.size() * self.priority as f64
    }
}

/// Mean score across all skills, or `None` for an empty list.
pub fn average_score(skills: &[SkillScore]) -> Option<f64> {
    if skills.is_empty() {
        return None;
    }
    let total: f64 = skills.iter().map(|s| s.score).sum();
    Some(total / skills.len() as f64)
}

/// Lowest-scoring skill. Ties resolve to the earliest entry.
pub fn weakest_skill(skills: &[SkillScore]) -> Option<&SkillScore> {
    skills.iter().fold(None, |weakest: Option<&SkillScore>, skill| match weakest {
        Some(w) if w.score <= skill.score => Some(w),
        _ => Some(skill),
    })
}
