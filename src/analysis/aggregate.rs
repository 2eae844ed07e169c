//! Cross-job aggregation of missing skills
//!
//! Merges N per-job gap analyses into one deduplicated, priority-ranked
//! list. Aggregated `frequency` counts distinct jobs requiring a skill,
//! which is a different quantity than the per-job text-occurrence count,
//! and is normalized by /10 here versus /5 in the per-job priority blend.
//! The asymmetry is intentional and must not be unified.

use crate::analysis::gap::GapAnalysis;
use crate::analysis::types::{AggregatedSkill, JobRef};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Ranking blend for the aggregated list
const AGGREGATE_PRIORITY_WEIGHT: f32 = 0.7;
const AGGREGATE_FREQUENCY_WEIGHT: f32 = 0.3;
/// Job counts saturate at this many jobs
const AGGREGATE_FREQUENCY_NORM: f32 = 10.0;

/// One job's gap analysis, tagged with the job it was run against
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobGapAnalysis {
    pub job_id: String,
    pub job_title: String,
    pub analysis: GapAnalysis,
}

/// Ranking key for an aggregated skill
pub fn aggregate_rank_score(skill: &AggregatedSkill) -> f32 {
    let frequency_factor = (skill.frequency as f32 / AGGREGATE_FREQUENCY_NORM).min(1.0);
    AGGREGATE_PRIORITY_WEIGHT * skill.priority + AGGREGATE_FREQUENCY_WEIGHT * frequency_factor
}

/// Merge missing skills across all job analyses into one ranked list.
///
/// Merging is keyed by lowercased canonical name and deduplicated per job
/// id, so feeding the same analysis twice leaves the output unchanged.
/// Ties in the rank score keep first-appearance order (stable sort over
/// insertion order), so output is deterministic across runs.
pub fn aggregate_missing_skills(analyses: &[JobGapAnalysis]) -> Vec<AggregatedSkill> {
    let mut skills: Vec<AggregatedSkill> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for job_analysis in analyses {
        let job = JobRef {
            job_id: job_analysis.job_id.clone(),
            job_title: job_analysis.job_title.clone(),
        };

        for missing in &job_analysis.analysis.missing_skills {
            let key = missing.name.to_lowercase();
            match index.get(&key) {
                Some(&i) => skills[i].merge(missing, job.clone()),
                None => {
                    index.insert(key, skills.len());
                    skills.push(AggregatedSkill::from_missing(missing, job.clone()));
                }
            }
        }
    }

    skills.sort_by(|a, b| {
        aggregate_rank_score(b)
            .partial_cmp(&aggregate_rank_score(a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    skills
}

/// Count of missing skills per category, for reporting
pub fn skill_distribution(skills: &[AggregatedSkill]) -> HashMap<String, usize> {
    let mut distribution = HashMap::new();
    for skill in skills {
        *distribution.entry(skill.category.to_string()).or_insert(0) += 1;
    }
    distribution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::gap::GapAnalyzer;
    use crate::input::records::{JobPosting, Profile};
    use crate::matching::SkillMatcher;

    fn analysis_for(matcher: &SkillMatcher, job_id: &str, job_title: &str, text: &str) -> JobGapAnalysis {
        let analyzer = GapAnalyzer::new(matcher);
        let job = JobPosting {
            id: job_id.to_string(),
            title: job_title.to_string(),
            description: String::new(),
            requirements: text.to_string(),
        };
        JobGapAnalysis {
            job_id: job_id.to_string(),
            job_title: job_title.to_string(),
            analysis: analyzer.analyze(&Profile::default(), &job),
        }
    }

    #[test]
    fn test_same_skill_across_jobs_merges_to_one_entry() {
        let matcher = SkillMatcher::builtin().unwrap();
        let analyses = vec![
            analysis_for(&matcher, "a", "Job A", "react needed"),
            analysis_for(&matcher, "b", "Job B", "react react required"),
        ];

        let aggregated = aggregate_missing_skills(&analyses);
        let react: Vec<_> = aggregated.iter().filter(|s| s.name == "react").collect();
        assert_eq!(react.len(), 1);
        assert_eq!(react[0].frequency, 2);
        assert_eq!(react[0].required_by_jobs.len(), 2);
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let matcher = SkillMatcher::builtin().unwrap();
        let one = analysis_for(&matcher, "a", "Job A", "react and mongodb");
        let once = aggregate_missing_skills(&[one.clone()]);
        let twice = aggregate_missing_skills(&[one.clone(), one]);

        assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(twice.iter()) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.frequency, b.frequency);
            assert_eq!(a.required_by_jobs.len(), b.required_by_jobs.len());
        }
    }

    #[test]
    fn test_adding_a_job_never_decreases_frequency() {
        let matcher = SkillMatcher::builtin().unwrap();
        let first = analysis_for(&matcher, "a", "Job A", "react and mongodb");
        let second = analysis_for(&matcher, "b", "Job B", "react and figma");

        let before = aggregate_missing_skills(&[first.clone()]);
        let after = aggregate_missing_skills(&[first, second]);

        for skill in &before {
            let merged = after.iter().find(|s| s.name == skill.name).unwrap();
            assert!(merged.frequency >= skill.frequency);
        }
    }

    #[test]
    fn test_importance_is_max_across_jobs() {
        let matcher = SkillMatcher::builtin().unwrap();
        // Job B mentions react three times with a required marker, so its
        // importance outranks job A's single mention
        let analyses = vec![
            analysis_for(&matcher, "a", "Job A", "react"),
            analysis_for(&matcher, "b", "Job B", "react react react required"),
        ];

        let aggregated = aggregate_missing_skills(&analyses);
        let react = aggregated.iter().find(|s| s.name == "react").unwrap();
        assert!((react.importance - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_output_sorted_by_rank_score() {
        let matcher = SkillMatcher::builtin().unwrap();
        let analyses = vec![
            analysis_for(&matcher, "a", "Job A", "figma and react react react required"),
            analysis_for(&matcher, "b", "Job B", "react"),
        ];

        let aggregated = aggregate_missing_skills(&analyses);
        for pair in aggregated.windows(2) {
            assert!(aggregate_rank_score(&pair[0]) >= aggregate_rank_score(&pair[1]));
        }
    }
}
