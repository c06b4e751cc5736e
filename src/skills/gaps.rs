use std::cmp::Ordering;
use crate::skills::model::{SkillGap, SkillScore, TargetSkill};

/// Compare each target skill against the student's scores and return the gaps,
/// largest `(target - current) * priority` first.
///
/// A student skill is matched by exact name. A missing skill counts as level 0.
/// Targets the student already meets (including any target with a minimum of 0)
/// produce no gap. The sort is stable, so equal keys keep target order.
pub fn analyze_skill_gaps(student_skills: &[SkillScore], required: &[TargetSkill]) -> Vec<SkillGap> {
    let mut gaps: Vec<SkillGap> = required
        .iter()
        .filter_map(|target| {
            let current = student_skills
                .iter()
                .find(|s| s.name == target.name)
                .map(|s| s.score)
                .unwrap_or(0.0);

            if current < target.minimum_score {
                Some(SkillGap {
                    skill: target.name.clone(),
                    current_level: current,
                    target_level: target.minimum_score,
                    priority: target.effective_priority(),
                })
            } else {
                None
            }
        })
        .collect();

    gaps.sort_by(|a, b| {
        b.weighted_size()
            .partial_cmp(&a.weighted_size())
            .unwrap_or(Ordering::Equal)
    });

    tracing::debug!(
        targets = required.len(),
        gaps = gaps.len(),
        "Analyzed skill gaps"
    );

    gaps
}

/// True when `skill` is one of the gap skills.
pub fn is_gap_skill(gaps: &[SkillGap], skill: &str) -> bool {
    gaps.iter().any(|g| g.skill == skill)
}
