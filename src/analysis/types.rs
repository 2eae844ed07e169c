//! Tagged skill variants flowing through the analysis pipeline
//!
//! Each stage of the pipeline has its own skill shape, converted explicitly
//! rather than by ad hoc field copying: profile extraction produces
//! [`ExtractedSkill`], job extraction produces [`RequiredSkill`], the gap
//! analyzer derives [`MissingSkill`], and the aggregator merges those into
//! [`AggregatedSkill`].

use crate::catalog::SkillCategory;
use serde::{Deserialize, Serialize};

/// Declared or inferred proficiency in a skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
    None,
}

impl Default for Proficiency {
    fn default() -> Self {
        Proficiency::None
    }
}

/// Which profile field a skill was extracted from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillSource {
    ComputerSkills,
    SoftwareSkills,
    OtherSkills,
    Bio,
}

/// A skill the profile holder already has
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedSkill {
    pub name: String,
    pub proficiency: Proficiency,
    pub category: SkillCategory,
    pub source: SkillSource,
    /// 1.0 for structured lists, lower for free-text hits
    pub confidence: f32,
}

/// A skill a job posting asks for
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequiredSkill {
    pub name: String,
    pub importance: f32,
    pub category: SkillCategory,
    /// Occurrence count of all variants in the job text
    pub frequency: u32,
    /// The synonym forms that actually appeared
    pub variants: Vec<String>,
}

/// A required skill the profile does not cover
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissingSkill {
    pub name: String,
    pub importance: f32,
    pub category: SkillCategory,
    pub frequency: u32,
    pub priority: f32,
}

/// Weights of the per-job missing-skill priority blend
pub const MISSING_IMPORTANCE_WEIGHT: f32 = 0.7;
pub const MISSING_FREQUENCY_WEIGHT: f32 = 0.3;
/// Text-occurrence counts saturate at this many hits
pub const MISSING_FREQUENCY_NORM: f32 = 5.0;

impl MissingSkill {
    /// Convert a required skill into a missing one, computing its priority
    pub fn from_required(required: &RequiredSkill) -> Self {
        let frequency_factor = (required.frequency as f32 / MISSING_FREQUENCY_NORM).min(1.0);
        let priority = (MISSING_IMPORTANCE_WEIGHT * required.importance
            + MISSING_FREQUENCY_WEIGHT * frequency_factor)
            .clamp(0.0, 1.0);

        Self {
            name: required.name.clone(),
            importance: required.importance,
            category: required.category,
            frequency: required.frequency,
            priority,
        }
    }
}

/// Reference to a job that requires a skill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRef {
    pub job_id: String,
    pub job_title: String,
}

/// A missing skill merged across all target jobs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregatedSkill {
    pub name: String,
    pub category: SkillCategory,
    /// Max importance across the jobs that required it
    pub importance: f32,
    /// Number of distinct jobs requiring this skill, not text occurrences
    pub frequency: u32,
    /// Max per-job priority across jobs
    pub priority: f32,
    pub required_by_jobs: Vec<JobRef>,
    pub current_level: Proficiency,
    pub target_level: Proficiency,
}

impl AggregatedSkill {
    /// Seed an aggregate from the first job that listed this skill missing
    pub fn from_missing(missing: &MissingSkill, job: JobRef) -> Self {
        Self {
            name: missing.name.clone(),
            category: missing.category,
            importance: missing.importance,
            frequency: 1,
            priority: missing.priority,
            required_by_jobs: vec![job],
            current_level: Proficiency::None,
            target_level: target_level_for(missing.importance, missing.priority),
        }
    }

    /// Fold another job's sighting of the same skill into this aggregate.
    /// Re-merging a job already recorded is a no-op.
    pub fn merge(&mut self, missing: &MissingSkill, job: JobRef) {
        if self.required_by_jobs.iter().any(|j| j.job_id == job.job_id) {
            return;
        }
        self.frequency += 1;
        self.importance = self.importance.max(missing.importance);
        self.priority = self.priority.max(missing.priority);
        self.target_level = target_level_for(self.importance, self.priority);
        self.required_by_jobs.push(job);
    }
}

/// Learning target derived from how badly a skill is needed
pub fn target_level_for(importance: f32, priority: f32) -> Proficiency {
    if priority >= 0.8 || importance >= 0.8 {
        Proficiency::Advanced
    } else if priority >= 0.6 || importance >= 0.6 {
        Proficiency::Intermediate
    } else {
        Proficiency::Beginner
    }
}
