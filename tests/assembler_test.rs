use pathwise_lib::courses::course::{Course, CourseLevel};
use pathwise_lib::paths::group_courses_into_paths;
use pathwise_lib::skills::model::SkillGap;

fn gap(skill: &str) -> SkillGap {
    SkillGap {
        skill: skill.to_string(),
        current_level: 0.0,
        target_level: 50.0,
        priority: 1,
    }
}

#[test]
fn test_prerequisite_chains_into_single_path() {
    let a = Course::new("A", CourseLevel::Beginner).with_skills(&["X"]).with_duration(5.0);
    let b = Course::new("B", CourseLevel::Beginner)
        .with_skills(&["Y"])
        .with_prerequisites(&["X"])
        .with_duration(3.0);

    let paths = group_courses_into_paths(&[a, b], &[gap("X"), gap("Y")]);

    assert_eq!(paths.len(), 1);
    let ids: Vec<&str> = paths[0].courses.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["A", "B"]);
    assert_eq!(paths[0].estimated_duration, 8.0);
    assert_eq!(paths[0].skill_gaps, vec!["X".to_string(), "Y".to_string()]);
    assert_eq!(paths[0].id, "path-1");
    assert_eq!(paths[0].title, "Learning Path 1");
}

#[test]
fn test_prerequisite_outside_gaps_is_satisfied() {
    let a = Course::new("A", CourseLevel::Beginner).with_skills(&["X"]);
    let b = Course::new("B", CourseLevel::Beginner)
        .with_skills(&["Y"])
        .with_prerequisites(&["Z"]);

    let paths = group_courses_into_paths(&[a, b], &[gap("X"), gap("Y")]);
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].courses[1].id, "B");
}

#[test]
fn test_unsatisfied_prerequisite_starts_new_path() {
    // B needs Y, which only C grants, and C needs V, which nothing grants.
    let a = Course::new("A", CourseLevel::Beginner).with_skills(&["X"]);
    let b = Course::new("B", CourseLevel::Advanced)
        .with_skills(&["W"])
        .with_prerequisites(&["Y"]);
    let c = Course::new("C", CourseLevel::Intermediate)
        .with_skills(&["Y"])
        .with_prerequisites(&["V"]);

    let gaps = vec![gap("X"), gap("Y"), gap("W"), gap("V")];
    let paths = group_courses_into_paths(&[a, b, c], &gaps);

    assert_eq!(paths.len(), 3);
    // Seeds are taken in order regardless of their own prerequisites.
    let seeds: Vec<&str> = paths.iter().map(|p| p.courses[0].id.as_str()).collect();
    assert_eq!(seeds, vec!["A", "B", "C"]);
    assert!(paths.iter().all(|p| p.courses.len() == 1));
    assert_eq!(paths[2].id, "path-3");
    assert_eq!(paths[1].difficulty, CourseLevel::Advanced);
}

#[test]
fn test_every_course_placed_once() {
    let courses: Vec<Course> = (0..7)
        .map(|i| {
            Course::new(format!("c{}", i), CourseLevel::Intermediate)
                .with_skills(&[["a", "b", "c"][i % 3]])
                .with_prerequisites(if i % 2 == 0 { &["b"][..] } else { &["z"][..] })
                .with_duration(i as f64 + 1.0)
        })
        .collect();

    let paths = group_courses_into_paths(&courses, &[gap("a"), gap("b"), gap("c")]);

    let placed: usize = paths.iter().map(|p| p.courses.len()).sum();
    assert_eq!(placed, courses.len());

    let mut ids: Vec<&str> = paths.iter().flat_map(|p| p.courses.iter().map(|c| c.id.as_str())).collect();
    ids.sort();
    let mut expected: Vec<&str> = courses.iter().map(|c| c.id.as_str()).collect();
    expected.sort();
    assert_eq!(ids, expected);

    for path in &paths {
        let sum: f64 = path.courses.iter().map(|c| c.estimated_duration).sum();
        assert_eq!(path.estimated_duration, sum);
    }
}

#[test]
fn test_duplicate_ids_are_not_dropped() {
    let a = Course::new("dup", CourseLevel::Beginner).with_skills(&["X"]);
    let paths = group_courses_into_paths(&[a.clone(), a], &[gap("X")]);
    let placed: usize = paths.iter().map(|p| p.courses.len()).sum();
    assert_eq!(placed, 2);
}

#[test]
fn test_difficulty_majority() {
    let courses = vec![
        Course::new("1", CourseLevel::Beginner),
        Course::new("2", CourseLevel::Beginner),
        Course::new("3", CourseLevel::Advanced),
    ];
    let paths = group_courses_into_paths(&courses, &[]);
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].difficulty, CourseLevel::Beginner);
}

#[test]
fn test_difficulty_tie_uses_level_order() {
    assert_eq!(
        CourseLevel::majority([CourseLevel::Advanced, CourseLevel::Intermediate]),
        Some(CourseLevel::Intermediate)
    );
    assert_eq!(
        CourseLevel::majority([CourseLevel::Advanced, CourseLevel::Advanced, CourseLevel::Beginner]),
        Some(CourseLevel::Advanced)
    );
    assert_eq!(CourseLevel::majority(std::iter::empty()), None);
}

#[test]
fn test_empty_input_yields_no_paths() {
    assert!(group_courses_into_paths(&[], &[gap("X")]).is_empty());
}

#[test]
fn test_course_without_lists_deserializes() {
    let course: Course = serde_json::from_str(r#"{"id":"c1","level":"advanced"}"#).unwrap();
    assert!(course.skills_gained.is_empty());
    assert!(course.prerequisites.is_empty());

    let paths = group_courses_into_paths(&[course], &[gap("X")]);
    assert!(paths[0].skill_gaps.is_empty());
    assert_eq!(paths[0].difficulty, CourseLevel::Advanced);
}
