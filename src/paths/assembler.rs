use std::collections::HashSet;
use serde::{Serialize, Deserialize};
use crate::courses::course::{Course, CourseLevel};
use crate::skills::model::SkillGap;

/// An ordered sequence of courses where each one builds on the skills of
/// those before it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LearningPath {
    pub id: String,
    pub title: String,
    pub courses: Vec<Course>,
    /// Skills gained along the path, in course order (duplicates kept)
    pub skill_gaps: Vec<String>,
    pub estimated_duration: f64,
    pub difficulty: CourseLevel,
}

impl LearningPath {
    fn numbered(n: usize) -> Self {
        LearningPath {
            id: format!("path-{}", n),
            title: format!("Learning Path {}", n),
            courses: Vec::new(),
            skill_gaps: Vec::new(),
            estimated_duration: 0.0,
            difficulty: CourseLevel::Beginner,
        }
    }

    fn push(&mut self, course: Course) {
        self.estimated_duration += course.estimated_duration;
        self.skill_gaps.extend(course.skills_gained.iter().cloned());
        self.courses.push(course);
    }
}

/// Chain relevance-sorted courses into paths.
///
/// Each path is seeded with the most relevant course left, then repeatedly
/// extended with the first remaining course whose prerequisites are all
/// either gained earlier in the same path or outside the gap skills. When no
/// course qualifies the path is closed and the next one is seeded from what
/// remains. Every input course lands in exactly one path.
pub fn group_courses_into_paths(courses: &[Course], skill_gaps: &[SkillGap]) -> Vec<LearningPath> {
    let gap_skills: HashSet<&str> = skill_gaps.iter().map(|g| g.skill.as_str()).collect();
    let mut remaining: Vec<Course> = courses.to_vec();
    let mut paths: Vec<LearningPath> = Vec::new();

    while !remaining.is_empty() {
        let mut path = LearningPath::numbered(paths.len() + 1);
        let mut gained: HashSet<String> = HashSet::new();
        let mut next = Some(0);

        while let Some(idx) = next {
            let course = remaining.remove(idx);
            gained.extend(course.skills_gained.iter().cloned());
            path.push(course);

            next = remaining.iter().position(|candidate| {
                candidate
                    .prerequisites
                    .iter()
                    .all(|p| gained.contains(p) || !gap_skills.contains(p.as_str()))
            });
        }

        path.difficulty = CourseLevel::majority(path.courses.iter().map(|c| c.level))
            .unwrap_or(CourseLevel::Beginner);

        tracing::debug!(
            path_id = %path.id,
            courses = path.courses.len(),
            estimated_duration = path.estimated_duration,
            difficulty = ?path.difficulty,
            "Assembled learning path"
        );

        paths.push(path);
    }

    paths
}
