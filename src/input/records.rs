//! Profile, job, and course records as supplied by the persistence layer
//!
//! The engine treats these as already-resolved values. Absent fields decode
//! to empty collections or strings so a sparse record never fails analysis.

use crate::analysis::types::Proficiency;
use crate::catalog::CandidateCourse;
use crate::error::{Result, SkillPathError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A typed skill entry from the profile's computer-skills list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeclaredSkill {
    pub skill: String,
    #[serde(default)]
    pub proficiency: Option<Proficiency>,
}

/// A typed entry from the profile's software-skills list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeclaredSoftware {
    pub software: String,
    #[serde(default)]
    pub proficiency: Option<Proficiency>,
}

/// One period of work experience; open-ended periods contribute nothing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub from: Option<NaiveDate>,
    #[serde(default)]
    pub to: Option<NaiveDate>,
}

/// A job-seeker profile record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub computer_skills: Vec<DeclaredSkill>,
    #[serde(default)]
    pub software_skills: Vec<DeclaredSoftware>,
    #[serde(default)]
    pub other_skills: Vec<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
}

impl Profile {
    /// Total number of declared skills across all structured lists
    pub fn declared_skill_count(&self) -> usize {
        self.computer_skills.len() + self.software_skills.len() + self.other_skills.len()
    }
}

/// A target job posting record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: String,
}

impl JobPosting {
    /// The concatenated free text the gap analyzer scans
    pub fn full_text(&self) -> String {
        format!("{} {} {}", self.title, self.description, self.requirements)
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        SkillPathError::InvalidInput(format!("failed to read {} file {}: {}", what, path.display(), e))
    })?;
    serde_json::from_str(&content).map_err(|e| {
        SkillPathError::InvalidInput(format!("failed to parse {} file {}: {}", what, path.display(), e))
    })
}

/// Load a profile record from a JSON file
pub fn load_profile(path: &Path) -> Result<Profile> {
    read_json(path, "profile")
}

/// Load a job posting record from a JSON file
pub fn load_job(path: &Path) -> Result<JobPosting> {
    read_json(path, "job")
}

/// Load a course catalog (JSON array) from a file
pub fn load_courses(path: &Path) -> Result<Vec<CandidateCourse>> {
    read_json(path, "course catalog")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_sparse_profile_decodes_with_defaults() {
        let profile: Profile = serde_json::from_str(r#"{"name": "Sara"}"#).unwrap();
        assert_eq!(profile.name, "Sara");
        assert!(profile.computer_skills.is_empty());
        assert!(profile.bio.is_empty());
        assert_eq!(profile.declared_skill_count(), 0);
    }

    #[test]
    fn test_job_full_text_concatenates_fields() {
        let job = JobPosting {
            id: "j1".to_string(),
            title: "Frontend Developer".to_string(),
            description: "Build UIs".to_string(),
            requirements: "react required".to_string(),
        };
        let text = job.full_text();
        assert!(text.contains("Frontend Developer"));
        assert!(text.contains("react required"));
    }

    #[test]
    fn test_load_profile_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{"name": "Omar", "computer_skills": [{{"skill": "python", "proficiency": "advanced"}}]}}"#
        )
        .unwrap();

        let profile = load_profile(&path).unwrap();
        assert_eq!(profile.computer_skills.len(), 1);
        assert_eq!(
            profile.computer_skills[0].proficiency,
            Some(Proficiency::Advanced)
        );
    }

    #[test]
    fn test_load_missing_file_is_invalid_input() {
        let err = load_job(Path::new("/nonexistent/job.json")).unwrap_err();
        assert!(matches!(err, SkillPathError::InvalidInput(_)));
    }
}
