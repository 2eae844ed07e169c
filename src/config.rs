//! Persistent configuration stored as TOML in the user's config directory

use crate::error::{Result, SkillPathError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How results are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Console,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default output format when no --format flag is given
    pub output_format: OutputFormat,
    /// Maximum number of course recommendations to return
    pub recommendation_limit: usize,
    /// Assumed study hours per week for path pacing
    pub weekly_hours: u32,
    /// Optional path to a JSON course catalog replacing the built-in one
    #[serde(default)]
    pub courses_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Console,
            recommendation_limit: crate::recommend::engine::DEFAULT_RECOMMENDATION_LIMIT,
            weekly_hours: 10,
            courses_path: None,
        }
    }
}

impl Config {
    /// Location of the config file, if a config directory exists
    pub fn config_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("skill-path").join("config.toml"))
    }

    /// Load from disk, falling back to defaults when no file exists
    pub fn load() -> Result<Self> {
        let Some(path) = Self::config_file_path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        toml::from_str(&content).map_err(|e| {
            SkillPathError::Configuration(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    /// Write the current values to the config file, creating directories
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path().ok_or_else(|| {
            SkillPathError::Configuration("no config directory available".to_string())
        })?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            SkillPathError::Configuration(format!("failed to serialize config: {}", e))
        })?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

/// Parse a --format flag value
pub fn parse_output_format(value: &str) -> Result<OutputFormat> {
    match value.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        other => Err(SkillPathError::Configuration(format!(
            "unknown output format '{}', expected 'console' or 'json'",
            other
        ))),
    }
}
