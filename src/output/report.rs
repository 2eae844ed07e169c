//! Narrative report assembled from pipeline results

use crate::analysis::aggregate::JobGapAnalysis;
use crate::analysis::types::AggregatedSkill;
use crate::recommend::course_matcher::MatchedCourse;
use crate::recommend::improvement::ImprovementAggregate;
use crate::recommend::level::LearnerLevel;
use serde::{Deserialize, Serialize};

/// How many findings and steps the report keeps
const MAX_KEY_FINDINGS: usize = 5;
const MAX_NEXT_STEPS: usize = 3;

/// Human-readable digest of a recommendation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationReport {
    pub summary: String,
    pub key_findings: Vec<String>,
    pub next_steps: Vec<String>,
}

impl RecommendationReport {
    pub fn build(
        job_analyses: &[JobGapAnalysis],
        aggregated_skills: &[AggregatedSkill],
        recommendations: &[MatchedCourse],
        learner_level: LearnerLevel,
        improvement: &ImprovementAggregate,
    ) -> Self {
        let average_coverage = if job_analyses.is_empty() {
            0.0
        } else {
            job_analyses
                .iter()
                .map(|job| job.analysis.summary.overall_coverage)
                .sum::<f32>()
                / job_analyses.len() as f32
        };

        let summary = if aggregated_skills.is_empty() {
            format!(
                "Your profile already covers the skills required by the {} analyzed job(s). \
                 Average coverage is {:.0}%.",
                job_analyses.len(),
                average_coverage
            )
        } else {
            format!(
                "Across {} analyzed job(s) you are missing {} skill(s), with an average \
                 coverage of {:.0}%. Following the recommended courses could improve your \
                 employment prospects by about {}.",
                job_analyses.len(),
                aggregated_skills.len(),
                average_coverage,
                improvement.formatted
            )
        };

        let mut key_findings = Vec::new();
        key_findings.push(format!("Assessed learner level: {:?}", learner_level));
        for skill in aggregated_skills.iter().take(MAX_KEY_FINDINGS - 1) {
            key_findings.push(format!(
                "Missing skill '{}' is required by {} job(s) (priority {:.2})",
                skill.name,
                skill.required_by_jobs.len(),
                skill.priority
            ));
        }

        let mut next_steps = Vec::new();
        for matched in recommendations.iter().take(MAX_NEXT_STEPS) {
            next_steps.push(format!(
                "Take '{}' to cover {} missing skill(s)",
                matched.course.title,
                matched.matched_skills.len()
            ));
        }
        if next_steps.is_empty() {
            next_steps.push(
                "Keep your profile up to date and revisit the analysis when targeting new roles"
                    .to_string(),
            );
        }

        Self {
            summary,
            key_findings,
            next_steps,
        }
    }
}
