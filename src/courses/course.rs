use serde::{Serialize, Deserialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl CourseLevel {
    /// Declaration order; also the tie-break order for majority votes.
    pub const ALL: [CourseLevel; 3] = [
        CourseLevel::Beginner,
        CourseLevel::Intermediate,
        CourseLevel::Advanced,
    ];

    fn index(self) -> usize {
        match self {
            CourseLevel::Beginner => 0,
            CourseLevel::Intermediate => 1,
            CourseLevel::Advanced => 2,
        }
    }

    /// Level band implied by an average skill score.
    pub fn for_average_score(average: f64, beginner_ceiling: f64, advanced_floor: f64) -> Self {
        if average < beginner_ceiling {
            CourseLevel::Beginner
        } else if average < advanced_floor {
            CourseLevel::Intermediate
        } else {
            CourseLevel::Advanced
        }
    }

    /// Most frequent level. Equal counts resolve in declaration order.
    pub fn majority<I: IntoIterator<Item = CourseLevel>>(levels: I) -> Option<CourseLevel> {
        let mut counts = [0usize; 3];
        for level in levels {
            counts[level.index()] += 1;
        }

        let mut best: Option<(CourseLevel, usize)> = None;
        for level in Self::ALL {
            let count = counts[level.index()];
            if count == 0 {
                continue;
            }
            match best {
                Some((_, top)) if top >= count => {}
                _ => best = Some((level, count)),
            }
        }
        best.map(|(level, _)| level)
    }
}

/// Catalog entry. Missing list fields deserialize as empty.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub skills_gained: Vec<String>,
    /// Minutes
    #[serde(default)]
    pub estimated_duration: f64,
    #[serde(default)]
    pub content_type: String,
    pub level: CourseLevel,
    /// Skill names (not course ids) the learner should already have
    #[serde(default)]
    pub prerequisites: Vec<String>,
}

impl Course {
    pub fn new<S: Into<String>>(id: S, level: CourseLevel) -> Self {
        Course {
            id: id.into(),
            title: String::new(),
            skills_gained: Vec::new(),
            estimated_duration: 0.0,
            content_type: String::new(),
            level,
            prerequisites: Vec::new(),
        }
    }

    pub fn with_skills(mut self, skills: &[&str]) -> Self {
        self.skills_gained = skills.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_prerequisites(mut self, prerequisites: &[&str]) -> Self {
        self.prerequisites = prerequisites.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_duration(mut self, minutes: f64) -> Self {
        self.estimated_duration = minutes;
        self
    }

    pub fn with_content_type<S: Into<String>>(mut self, content_type: S) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn grants(&self, skill: &str) -> bool {
        self.skills_gained.iter().any(|s| s == skill)
    }
}
