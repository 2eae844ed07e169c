//! Command line interface definition

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "skill-path",
    about = "Skill gap analysis and course recommendations for job seekers",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: console or json
    #[arg(long, short, global = true)]
    pub format: Option<String>,

    /// Increase log verbosity (-v, -vv)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze the skill gap between a profile and one job posting
    Analyze {
        /// Path to the profile JSON file
        profile: PathBuf,
        /// Path to the job posting JSON file
        job: PathBuf,
    },

    /// Recommend courses closing the gap toward one or more target jobs
    Recommend {
        /// Path to the profile JSON file
        profile: PathBuf,
        /// Paths to one or more job posting JSON files
        #[arg(required = true)]
        jobs: Vec<PathBuf>,
        /// Maximum number of courses to recommend
        #[arg(long)]
        limit: Option<usize>,
        /// JSON course catalog replacing the built-in one
        #[arg(long)]
        courses: Option<PathBuf>,
    },

    /// Build a prerequisite-ordered learning path toward the target jobs
    Path {
        /// Path to the profile JSON file
        profile: PathBuf,
        /// Paths to one or more job posting JSON files
        #[arg(required = true)]
        jobs: Vec<PathBuf>,
        /// JSON course catalog replacing the built-in one
        #[arg(long)]
        courses: Option<PathBuf>,
        /// Study hours available per week
        #[arg(long)]
        weekly_hours: Option<u32>,
    },

    /// Show or initialize the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write the configuration file back to defaults
    Reset,
}
