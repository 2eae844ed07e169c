//! Error handling for the skill-path engine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillPathError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("No target jobs supplied: a learning path needs at least one job to aim for")]
    NoTargetJobs,

    #[error("Learning path has no stage with order {0}")]
    StageNotFound(u32),

    #[error("Stage {stage} has no course '{course}'")]
    CourseNotFound { stage: u32, course: String },

    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, SkillPathError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for SkillPathError {
    fn from(err: anyhow::Error) -> Self {
        SkillPathError::AnalysisFailed(err.to_string())
    }
}
