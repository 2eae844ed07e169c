//! Static catalogs: the bilingual skill dictionary and the course catalog

pub mod courses;
pub mod skills;

pub use courses::{CandidateCourse, CourseLevel};
pub use skills::{SkillCatalog, SkillCategory, SkillSynonymEntry};
