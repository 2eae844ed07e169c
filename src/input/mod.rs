//! Already-decoded input records supplied by external collaborators

pub mod records;

pub use records::{DeclaredSkill, DeclaredSoftware, ExperienceEntry, JobPosting, Profile};
