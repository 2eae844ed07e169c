//! End-to-end recommendation pipeline
//!
//! Ties the per-job gap analyzer, the cross-job aggregator, the course
//! matcher, the level assigner, and the improvement predictor into one
//! entry point that produces a complete recommendation result.

use crate::analysis::aggregate::{aggregate_missing_skills, JobGapAnalysis};
use crate::analysis::gap::{GapAnalysis, GapAnalyzer};
use crate::analysis::types::AggregatedSkill;
use crate::catalog::CandidateCourse;
use crate::error::{Result, SkillPathError};
use crate::input::records::{JobPosting, Profile};
use crate::matching::SkillMatcher;
use crate::output::report::RecommendationReport;
use crate::recommend::course_matcher::{CourseMatcher, MatchedCourse};
use crate::recommend::improvement::{expected_outcomes, predict_improvement, ImprovementAggregate};
use crate::recommend::level::{assess_learner_level, level_suitability, LearnerLevel};
use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Default cap on returned course recommendations
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 10;

/// Provenance attached to every recommendation result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultMetadata {
    pub generated_at: DateTime<Utc>,
    pub jobs_analyzed: usize,
    pub courses_considered: usize,
}

/// Everything the pipeline produces for one profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub learner_level: LearnerLevel,
    pub job_analyses: Vec<JobGapAnalysis>,
    pub aggregated_skills: Vec<AggregatedSkill>,
    pub recommendations: Vec<MatchedCourse>,
    pub employment_improvement: ImprovementAggregate,
    pub report: RecommendationReport,
    pub metadata: ResultMetadata,
}

/// Owns the matcher and course catalog; everything else is borrowed per run
pub struct RecommendationEngine {
    matcher: SkillMatcher,
    courses: Vec<CandidateCourse>,
}

impl RecommendationEngine {
    pub fn new(matcher: SkillMatcher, courses: Vec<CandidateCourse>) -> Self {
        Self { matcher, courses }
    }

    /// Engine over the built-in synonym dictionary and sample catalog
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(
            SkillMatcher::builtin()?,
            CandidateCourse::builtin_catalog(),
        ))
    }

    pub fn matcher(&self) -> &SkillMatcher {
        &self.matcher
    }

    pub fn courses(&self) -> &[CandidateCourse] {
        &self.courses
    }

    /// Gap analysis for a single (profile, job) pair
    pub fn analyze_gap(&self, profile: &Profile, job: &JobPosting) -> GapAnalysis {
        GapAnalyzer::new(&self.matcher).analyze(profile, job)
    }

    /// Gap analyses for every target job. At least one job is required.
    pub fn analyze_target_jobs(
        &self,
        profile: &Profile,
        jobs: &[JobPosting],
    ) -> Result<Vec<JobGapAnalysis>> {
        if jobs.is_empty() {
            return Err(SkillPathError::NoTargetJobs);
        }

        Ok(jobs
            .iter()
            .map(|job| JobGapAnalysis {
                job_id: job.id.clone(),
                job_title: job.title.clone(),
                analysis: self.analyze_gap(profile, job),
            })
            .collect())
    }

    /// Run the full pipeline and return at most `limit` ranked courses
    pub fn recommend(
        &self,
        profile: &Profile,
        jobs: &[JobPosting],
        limit: usize,
    ) -> Result<RecommendationResult> {
        let job_analyses = self.analyze_target_jobs(profile, jobs)?;
        let aggregated_skills = aggregate_missing_skills(&job_analyses);
        let learner_level = assess_learner_level(profile);

        debug!(
            "aggregated {} missing skills across {} jobs, learner level {:?}",
            aggregated_skills.len(),
            job_analyses.len(),
            learner_level
        );

        let course_matcher = CourseMatcher::new(&self.matcher);
        let mut recommendations = course_matcher.match_and_rank(&self.courses, &aggregated_skills);
        recommendations.truncate(limit);

        for matched in &mut recommendations {
            matched.level_suitability =
                Some(level_suitability(matched.course.level, learner_level));
            matched.employment_improvement =
                predict_improvement(&self.matcher, matched, &job_analyses);
            matched.expected_outcomes = expected_outcomes(matched);
        }

        let employment_improvement = ImprovementAggregate::from_courses(&recommendations);
        let report = RecommendationReport::build(
            &job_analyses,
            &aggregated_skills,
            &recommendations,
            learner_level,
            &employment_improvement,
        );

        info!(
            "recommended {} of {} courses for profile '{}'",
            recommendations.len(),
            self.courses.len(),
            profile.name
        );

        Ok(RecommendationResult {
            learner_level,
            job_analyses,
            aggregated_skills,
            recommendations,
            employment_improvement,
            report,
            metadata: ResultMetadata {
                generated_at: Utc::now(),
                jobs_analyzed: jobs.len(),
                courses_considered: self.courses.len(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::records::DeclaredSkill;

    fn job(id: &str, requirements: &str) -> JobPosting {
        JobPosting {
            id: id.to_string(),
            title: format!("Job {}", id),
            description: String::new(),
            requirements: requirements.to_string(),
        }
    }

    fn profile_with(skills: &[&str]) -> Profile {
        Profile {
            computer_skills: skills
                .iter()
                .map(|s| DeclaredSkill {
                    skill: s.to_string(),
                    proficiency: None,
                })
                .collect(),
            ..Profile::default()
        }
    }

    #[test]
    fn test_no_target_jobs_is_an_error() {
        let engine = RecommendationEngine::builtin().unwrap();
        let result = engine.recommend(&Profile::default(), &[], 10);
        assert!(matches!(result, Err(SkillPathError::NoTargetJobs)));
    }

    #[test]
    fn test_recommend_respects_limit() {
        let engine = RecommendationEngine::builtin().unwrap();
        let jobs = vec![job("a", "python javascript react nodejs typescript mongodb")];
        let result = engine.recommend(&Profile::default(), &jobs, 2).unwrap();
        assert!(result.recommendations.len() <= 2);
    }

    #[test]
    fn test_recommendations_are_fully_annotated() {
        let engine = RecommendationEngine::builtin().unwrap();
        let jobs = vec![job("a", "python and react required")];
        let result = engine
            .recommend(&profile_with(&["html"]), &jobs, 10)
            .unwrap();

        assert!(!result.recommendations.is_empty());
        for matched in &result.recommendations {
            assert!(matched.level_suitability.is_some());
            assert!(matched.employment_improvement > 0.0);
            assert!(!matched.expected_outcomes.is_empty());
        }
    }

    #[test]
    fn test_covered_profile_gets_no_recommendations() {
        let engine = RecommendationEngine::builtin().unwrap();
        let jobs = vec![job("a", "react and nodejs")];
        let result = engine
            .recommend(&profile_with(&["react", "nodejs"]), &jobs, 10)
            .unwrap();

        assert!(result.aggregated_skills.is_empty());
        assert!(result.recommendations.is_empty());
        assert_eq!(result.employment_improvement.formatted, "0%");
    }

    #[test]
    fn test_metadata_counts() {
        let engine = RecommendationEngine::builtin().unwrap();
        let jobs = vec![job("a", "react"), job("b", "python")];
        let result = engine.recommend(&Profile::default(), &jobs, 10).unwrap();
        assert_eq!(result.metadata.jobs_analyzed, 2);
        assert_eq!(result.metadata.courses_considered, engine.courses().len());
    }
}
