//! Gap analysis: per-job skill extraction and cross-job aggregation

pub mod aggregate;
pub mod gap;
pub mod types;

pub use aggregate::{aggregate_missing_skills, JobGapAnalysis};
pub use gap::{CategoryGap, CoverageLevel, GapAnalysis, GapAnalyzer, GapSeverity, GapSummary};
pub use types::{AggregatedSkill, ExtractedSkill, MissingSkill, Proficiency, RequiredSkill};
