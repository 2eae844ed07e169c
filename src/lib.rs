//! Skill gap analysis and course recommendation engine
//!
//! Given a job-seeker profile and one or more target job postings, the
//! engine extracts skills from both sides through a bilingual synonym
//! dictionary, scores the gap, recommends and ranks courses that close it,
//! and lays the recommendations out as a prerequisite-ordered learning
//! path with progress tracking.
//!
//! The typical flow is [`recommend::RecommendationEngine::recommend`]
//! followed by [`path::PathBuilder::build`].

pub mod analysis;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod matching;
pub mod output;
pub mod path;
pub mod recommend;

pub use error::{Result, SkillPathError};
