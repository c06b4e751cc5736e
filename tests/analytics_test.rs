use std::collections::BTreeMap;
use chrono::{DateTime, NaiveDate, Utc};
use pathwise_lib::activity::model::{LearningPattern, TimeOfDay};
use pathwise_lib::analytics::{
    analyze_performance_trends, calculate_learning_velocity, calculate_performance_score,
    generate_insights, generate_recommendations, InsightInput, LearnerSnapshot,
    LearningInsights, PerformanceRecord, PerformanceSummary, ProgressPoint, ProgressTrend,
    RecommendationKind, VelocityTrend, WeeklyProgress,
};
use pathwise_lib::skills::model::SkillScore;

fn perf(date: (i32, u32, u32), score: f64, hours: f64, completed: bool) -> PerformanceRecord {
    PerformanceRecord {
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        score,
        hours,
        completed,
    }
}

fn point(ts: &str, progress: f64) -> ProgressPoint {
    ProgressPoint {
        date: ts.parse::<DateTime<Utc>>().unwrap(),
        progress,
    }
}

#[test]
fn test_performance_trends_group_by_month() {
    let records = vec![
        perf((2024, 3, 1), 80.0, 2.0, true),
        perf((2024, 2, 10), 60.0, 1.0, false),
        perf((2024, 3, 20), 90.0, 3.0, false),
    ];
    let trends = analyze_performance_trends(&records);

    assert_eq!(trends.len(), 2);
    assert_eq!(trends[0].period, "Mar");
    assert_eq!(trends[0].average_score, 85.0);
    assert_eq!(trends[0].total_hours, 5.0);
    assert_eq!(trends[0].completion_rate, 0.5);
    assert_eq!(trends[1].period, "Feb");
    assert_eq!(trends[1].completion_rate, 0.0);
}

#[test]
fn test_performance_trends_empty() {
    assert!(analyze_performance_trends(&[]).is_empty());
}

#[test]
fn test_recommendations_cover_pace_content_and_skill() {
    let mut engagement = BTreeMap::new();
    engagement.insert("quiz".to_string(), 4.0);
    engagement.insert("video".to_string(), 9.0);

    let snapshot = LearnerSnapshot {
        average_hours_per_day: Some(0.5),
        content_type_engagement: engagement,
        skill_scores: vec![SkillScore::new("sql", 70.0), SkillScore::new("css", 20.0)],
    };
    let recs = generate_recommendations(&snapshot);

    let kinds: Vec<RecommendationKind> = recs.iter().map(|r| r.kind).collect();
    assert_eq!(kinds, vec![RecommendationKind::Pace, RecommendationKind::Content, RecommendationKind::Skill]);
    assert!(recs[1].message.contains("video"));
    assert!(recs[2].message.contains("css"));
}

#[test]
fn test_recommendations_skip_missing_data() {
    let snapshot = LearnerSnapshot {
        average_hours_per_day: Some(2.0),
        ..LearnerSnapshot::default()
    };
    assert!(generate_recommendations(&snapshot).is_empty());
}

#[test]
fn test_recommendation_serializes_type_field() {
    let snapshot = LearnerSnapshot {
        average_hours_per_day: Some(0.1),
        ..LearnerSnapshot::default()
    };
    let json = serde_json::to_value(generate_recommendations(&snapshot)).unwrap();
    assert_eq!(json[0]["type"], "pace");
}

#[test]
fn test_velocity_trend() {
    let points = vec![
        point("2024-03-01T00:00:00Z", 0.0),
        point("2024-03-03T00:00:00Z", 20.0),  // 10/day
        point("2024-03-04T00:00:00Z", 20.0),  // dropped
        point("2024-03-05T00:00:00Z", 50.0),  // 30/day
    ];
    let velocity = calculate_learning_velocity(&points).unwrap();
    assert!((velocity.current - 30.0).abs() < 1e-9);
    assert!((velocity.average - 20.0).abs() < 1e-9);
    assert_eq!(velocity.trend, VelocityTrend::Increasing);
}

#[test]
fn test_velocity_decreasing() {
    let points = vec![
        point("2024-03-01T00:00:00Z", 0.0),
        point("2024-03-02T00:00:00Z", 40.0),
        point("2024-03-03T00:00:00Z", 50.0),
    ];
    let velocity = calculate_learning_velocity(&points).unwrap();
    assert_eq!(velocity.trend, VelocityTrend::Decreasing);
}

#[test]
fn test_velocity_needs_an_interval() {
    assert!(calculate_learning_velocity(&[]).is_none());
    assert!(calculate_learning_velocity(&[point("2024-03-01T00:00:00Z", 5.0)]).is_none());
    // Same timestamp twice
    let same = vec![point("2024-03-01T00:00:00Z", 0.0), point("2024-03-01T00:00:00Z", 5.0)];
    assert!(calculate_learning_velocity(&same).is_none());
}

#[test]
fn test_performance_score_weights() {
    let summary = PerformanceSummary {
        courses_completed: 5,
        total_courses: 10,
        average_score: 80.0,
        learning_streak: 15,
    };
    // 50 * 0.4 + 80 * 0.3 + 50 * 0.3
    assert!((calculate_performance_score(&summary) - 59.0).abs() < 1e-9);
}

#[test]
fn test_performance_score_without_courses() {
    let summary = PerformanceSummary {
        average_score: 50.0,
        ..PerformanceSummary::default()
    };
    let score = calculate_performance_score(&summary);
    assert!(score.is_finite());
    assert!((score - 15.0).abs() < 1e-9);
}

fn pattern(time_of_day: TimeOfDay, sessions: u32) -> LearningPattern {
    LearningPattern { sessions, ..LearningPattern::new(time_of_day) }
}

fn week(completed: f64) -> WeeklyProgress {
    WeeklyProgress { week: String::new(), completed }
}

#[test]
fn test_insights_pick_busiest_time_and_weakest_skill() {
    let input = InsightInput {
        learning_patterns: vec![
            pattern(TimeOfDay::Evening, 2),
            pattern(TimeOfDay::Morning, 5),
            pattern(TimeOfDay::Night, 5),
        ],
        skill_progress: vec![
            SkillScore::new("rust", 70.0),
            SkillScore::new("sql", 30.0),
            SkillScore::new("css", 30.0),
        ],
        weekly_progress: vec![week(4.0), week(2.0), week(6.0)],
    };
    let insights = generate_insights(&input);

    // Ties go to the earliest entry.
    assert_eq!(insights.most_productive_time, Some(TimeOfDay::Morning));
    assert_eq!(insights.improvement_area.as_deref(), Some("sql"));
    assert_eq!(insights.progress_trend, Some(ProgressTrend::Improving));
    assert_eq!(
        insights.messages(),
        vec![
            "Most productive time: Morning".to_string(),
            "Area for improvement: sql".to_string(),
            "Progress trend: Improving".to_string(),
        ]
    );
}

#[test]
fn test_insights_flat_week_is_declining() {
    let input = InsightInput {
        weekly_progress: vec![week(3.0), week(3.0)],
        ..InsightInput::default()
    };
    assert_eq!(generate_insights(&input).progress_trend, Some(ProgressTrend::Declining));
}

#[test]
fn test_insights_missing_data() {
    let input = InsightInput {
        weekly_progress: vec![week(3.0)],
        ..InsightInput::default()
    };
    let insights = generate_insights(&input);
    assert_eq!(insights, LearningInsights::default());
    assert!(insights.messages().is_empty());
}

#[test]
fn test_insight_input_from_json() {
    let input: InsightInput = serde_json::from_str(
        r#"{"skillProgress":[{"subject":"algebra","score":40}],"weeklyProgress":[{"week":"W1","completed":1},{"week":"W2","completed":0}]}"#,
    ).unwrap();
    let insights = generate_insights(&input);
    assert_eq!(insights.improvement_area.as_deref(), Some("algebra"));
    assert_eq!(insights.progress_trend, Some(ProgressTrend::Declining));
    assert_eq!(insights.most_productive_time, None);
}
