use clap::Parser;
use colored::Colorize;
use log::LevelFilter;
use skill_path::cli::{Cli, Commands, ConfigAction};
use skill_path::config::{parse_output_format, Config, OutputFormat};
use skill_path::error::Result;
use skill_path::input::records::{load_courses, load_job, load_profile};
use skill_path::matching::SkillMatcher;
use skill_path::output::{ConsoleFormatter, JsonFormatter, OutputFormatter, ReportPayload};
use skill_path::path::{CareerGoal, PathBuilder, PathSettings};
use skill_path::recommend::engine::RecommendationEngine;
use std::path::{Path, PathBuf};

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let format = match &cli.format {
        Some(value) => parse_output_format(value)?,
        None => config.output_format,
    };

    match cli.command {
        Commands::Analyze { profile, job } => {
            let profile = load_profile(&profile)?;
            let job = load_job(&job)?;
            let matcher = SkillMatcher::builtin()?;
            let engine = RecommendationEngine::new(matcher, Vec::new());
            let analysis = engine.analyze_gap(&profile, &job);
            print_payload(&ReportPayload::Analysis(&analysis), format)
        }
        Commands::Recommend {
            profile,
            jobs,
            limit,
            courses,
        } => {
            let profile = load_profile(&profile)?;
            let jobs = load_jobs(&jobs)?;
            let engine = build_engine(courses.as_deref(), &config)?;
            let limit = limit.unwrap_or(config.recommendation_limit);
            let result = engine.recommend(&profile, &jobs, limit)?;
            print_payload(&ReportPayload::Recommendations(&result), format)
        }
        Commands::Path {
            profile,
            jobs,
            courses,
            weekly_hours,
        } => {
            let profile = load_profile(&profile)?;
            let jobs = load_jobs(&jobs)?;
            let engine = build_engine(courses.as_deref(), &config)?;
            let result = engine.recommend(&profile, &jobs, config.recommendation_limit)?;

            let goal = CareerGoal {
                target_job_titles: jobs.iter().map(|job| job.title.clone()).collect(),
                description: String::new(),
            };
            let settings = PathSettings {
                weekly_hours: weekly_hours.unwrap_or(config.weekly_hours),
            };
            let path = PathBuilder::new()?.build(
                &result.aggregated_skills,
                &result.recommendations,
                jobs.len(),
                engine.matcher(),
                goal,
                settings,
            );
            print_payload(&ReportPayload::Path(&path), format)
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                println!("{:#?}", config);
                Ok(())
            }
            ConfigAction::Reset => {
                let config = Config::default();
                config.save()?;
                if let Some(path) = Config::config_file_path() {
                    println!("reset configuration at {}", path.display());
                }
                Ok(())
            }
        },
    }
}

fn load_jobs(paths: &[PathBuf]) -> Result<Vec<skill_path::input::records::JobPosting>> {
    paths.iter().map(|path| load_job(path)).collect()
}

fn build_engine(courses: Option<&Path>, config: &Config) -> Result<RecommendationEngine> {
    let matcher = SkillMatcher::builtin()?;
    let catalog = match courses.or(config.courses_path.as_deref()) {
        Some(path) => load_courses(path)?,
        None => skill_path::catalog::CandidateCourse::builtin_catalog(),
    };
    Ok(RecommendationEngine::new(matcher, catalog))
}

fn print_payload(payload: &ReportPayload, format: OutputFormat) -> Result<()> {
    let text = match format {
        OutputFormat::Console => ConsoleFormatter.format(payload)?,
        OutputFormat::Json => JsonFormatter.format(payload)?,
    };
    println!("{}", text);
    Ok(())
}
