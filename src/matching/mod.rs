//! Skill equivalence and free-text extraction primitives

pub mod skill_matcher;

pub use skill_matcher::{SkillMatcher, SkillOccurrence};
