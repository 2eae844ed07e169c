//! Employment improvement prediction
//!
//! Estimates how much each recommended course moves the learner toward the
//! target jobs. The blend mixes the course's match quality with its market
//! signals and a gap-closure term measured against every analyzed job.

use crate::analysis::aggregate::JobGapAnalysis;
use crate::matching::SkillMatcher;
use crate::recommend::course_matcher::MatchedCourse;
use serde::{Deserialize, Serialize};

const IMPROVEMENT_MATCH_WEIGHT: f32 = 0.4;
const IMPROVEMENT_LEVEL_WEIGHT: f32 = 0.2;
const IMPROVEMENT_DEMAND_WEIGHT: f32 = 0.2;
const IMPROVEMENT_COMPLETION_WEIGHT: f32 = 0.1;
const IMPROVEMENT_ENGAGEMENT_WEIGHT: f32 = 0.1;
/// Stand-in engagement signal until per-learner telemetry exists
const ENGAGEMENT_FACTOR: f32 = 0.7;
/// Weight of the gap-closure term added on top of the base blend
const GAP_CLOSURE_WEIGHT: f32 = 0.2;

/// Summary statistics over per-course improvement predictions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImprovementAggregate {
    pub average: f32,
    pub max: f32,
    pub min: f32,
    /// Average rendered as a whole percentage, e.g. "42%"
    pub formatted: String,
}

impl ImprovementAggregate {
    /// Aggregate over already-predicted courses; all zeros when empty
    pub fn from_courses(courses: &[MatchedCourse]) -> Self {
        if courses.is_empty() {
            return Self {
                average: 0.0,
                max: 0.0,
                min: 0.0,
                formatted: "0%".to_string(),
            };
        }

        let mut max = f32::MIN;
        let mut min = f32::MAX;
        let mut sum = 0.0;
        for course in courses {
            let value = course.employment_improvement;
            max = max.max(value);
            min = min.min(value);
            sum += value;
        }
        let average = sum / courses.len() as f32;

        Self {
            average,
            max,
            min,
            formatted: format!("{}%", (average * 100.0).round() as u32),
        }
    }
}

/// Predicted improvement for one course against the analyzed jobs
pub fn predict_improvement(
    matcher: &SkillMatcher,
    matched: &MatchedCourse,
    analyses: &[JobGapAnalysis],
) -> f32 {
    let base = IMPROVEMENT_MATCH_WEIGHT * matched.match_score
        + IMPROVEMENT_LEVEL_WEIGHT * matched.course.level.score()
        + IMPROVEMENT_DEMAND_WEIGHT * matched.course.market_demand
        + IMPROVEMENT_COMPLETION_WEIGHT * matched.course.completion_rate
        + IMPROVEMENT_ENGAGEMENT_WEIGHT * ENGAGEMENT_FACTOR;

    let gap_closure = gap_closure_fraction(matcher, matched, analyses);

    (base + GAP_CLOSURE_WEIGHT * gap_closure).clamp(0.0, 1.0)
}

/// Mean fraction of each job's missing skills that this course teaches.
/// Jobs with no missing skills are left out of the mean rather than
/// contributing a spurious 0 or 1.
fn gap_closure_fraction(
    matcher: &SkillMatcher,
    matched: &MatchedCourse,
    analyses: &[JobGapAnalysis],
) -> f32 {
    let mut fractions = Vec::new();

    for job_analysis in analyses {
        let missing = &job_analysis.analysis.missing_skills;
        if missing.is_empty() {
            continue;
        }
        let covered = missing
            .iter()
            .filter(|skill| {
                matched
                    .course
                    .skills
                    .iter()
                    .any(|tag| matcher.are_equivalent(tag, &skill.name))
            })
            .count();
        fractions.push(covered as f32 / missing.len() as f32);
    }

    if fractions.is_empty() {
        0.0
    } else {
        fractions.iter().sum::<f32>() / fractions.len() as f32
    }
}

/// Human-readable outcome statements for a matched course
pub fn expected_outcomes(matched: &MatchedCourse) -> Vec<String> {
    let mut outcomes = Vec::new();

    for skill in &matched.matched_skills {
        outcomes.push(format!("Gain working knowledge of {}", skill.skill));
    }
    if matched.skill_coverage >= 0.5 {
        outcomes.push("Close a substantial share of your identified skill gap".to_string());
    }
    if matched.course.market_demand >= 0.8 {
        outcomes.push("Strengthen your profile in a high-demand area".to_string());
    }

    outcomes
}
