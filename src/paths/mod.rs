pub mod assembler;
pub mod planner;
pub mod store;

pub use assembler::{group_courses_into_paths, LearningPath};
pub use planner::{LearnerInsights, LearningPlan, PathPlanner, PathRequest, ScoredCourse};
