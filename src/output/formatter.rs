//! Console and JSON renderings of analysis results

use crate::analysis::gap::{CoverageLevel, GapAnalysis};
use crate::error::{Result, SkillPathError};
use crate::path::builder::LearningPath;
use crate::recommend::engine::RecommendationResult;
use colored::Colorize;
use std::fmt::Write as _;

/// What a formatter is asked to render
pub enum ReportPayload<'a> {
    Analysis(&'a GapAnalysis),
    Recommendations(&'a RecommendationResult),
    Path(&'a LearningPath),
}

pub trait OutputFormatter {
    fn format(&self, payload: &ReportPayload) -> Result<String>;
}

/// Colored terminal output
pub struct ConsoleFormatter;

/// Pretty-printed JSON of the underlying result structs
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, payload: &ReportPayload) -> Result<String> {
        let json = match payload {
            ReportPayload::Analysis(analysis) => serde_json::to_string_pretty(analysis)?,
            ReportPayload::Recommendations(result) => serde_json::to_string_pretty(result)?,
            ReportPayload::Path(path) => serde_json::to_string_pretty(path)?,
        };
        Ok(json)
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, payload: &ReportPayload) -> Result<String> {
        match payload {
            ReportPayload::Analysis(analysis) => self.format_analysis(analysis),
            ReportPayload::Recommendations(result) => self.format_recommendations(result),
            ReportPayload::Path(path) => self.format_path(path),
        }
    }
}

impl ConsoleFormatter {
    fn format_analysis(&self, analysis: &GapAnalysis) -> Result<String> {
        let mut out = String::new();
        let write_err =
            |e: std::fmt::Error| SkillPathError::OutputFormatting(format!("console render: {e}"));

        writeln!(out, "{}", "Skill Gap Analysis".bold().underline()).map_err(write_err)?;
        writeln!(
            out,
            "Coverage: {} ({} / {})",
            colored_coverage(analysis.summary.overall_coverage, analysis.summary.coverage_level),
            analysis.summary.coverage_level.label(),
            analysis.summary.coverage_level.label_ar()
        )
        .map_err(write_err)?;
        writeln!(
            out,
            "Your skills: {}   Required: {}   Missing: {}",
            analysis.summary.total_user_skills.to_string().green(),
            analysis.summary.total_job_skills,
            analysis.summary.total_missing_skills.to_string().red()
        )
        .map_err(write_err)?;

        if !analysis.missing_skills.is_empty() {
            writeln!(out, "\n{}", "Missing skills".bold()).map_err(write_err)?;
            for skill in &analysis.missing_skills {
                writeln!(
                    out,
                    "  {} {:<20} priority {:.2}  ({})",
                    "•".red(),
                    skill.name,
                    skill.priority,
                    skill.category
                )
                .map_err(write_err)?;
            }
            writeln!(
                out,
                "\nEstimated time to close: {} hours (~{} weeks)",
                analysis.summary.estimated_time_to_close.total_hours,
                analysis.summary.estimated_time_to_close.weeks
            )
            .map_err(write_err)?;
        }

        Ok(out)
    }

    fn format_recommendations(&self, result: &RecommendationResult) -> Result<String> {
        let mut out = String::new();
        let write_err =
            |e: std::fmt::Error| SkillPathError::OutputFormatting(format!("console render: {e}"));

        writeln!(out, "{}", "Course Recommendations".bold().underline()).map_err(write_err)?;
        writeln!(out, "{}", result.report.summary).map_err(write_err)?;

        if !result.recommendations.is_empty() {
            writeln!(out).map_err(write_err)?;
            for (i, matched) in result.recommendations.iter().enumerate() {
                writeln!(
                    out,
                    "{:>2}. {} [{}]",
                    i + 1,
                    matched.course.title.bold(),
                    matched.course.level
                )
                .map_err(write_err)?;
                writeln!(
                    out,
                    "    match {:.2}  relevance {:.2}  improvement {:.0}%",
                    matched.match_score,
                    matched.relevance,
                    matched.employment_improvement * 100.0
                )
                .map_err(write_err)?;
                if let Some(suitability) = matched.level_suitability {
                    writeln!(out, "    {}", suitability.fit.description().cyan())
                        .map_err(write_err)?;
                }
            }
        }

        if !result.report.next_steps.is_empty() {
            writeln!(out, "\n{}", "Next steps".bold()).map_err(write_err)?;
            for step in &result.report.next_steps {
                writeln!(out, "  {} {}", "→".green(), step).map_err(write_err)?;
            }
        }

        Ok(out)
    }

    fn format_path(&self, path: &LearningPath) -> Result<String> {
        let mut out = String::new();
        let write_err =
            |e: std::fmt::Error| SkillPathError::OutputFormatting(format!("console render: {e}"));

        writeln!(out, "{}", "Learning Path".bold().underline()).map_err(write_err)?;
        writeln!(out, "Pattern: {}", path.pattern.label().cyan()).map_err(write_err)?;
        writeln!(
            out,
            "Covers {:.0}% of your gap, predicted improvement {:.0}% (confidence {:.0}%)",
            path.metrics.skill_coverage,
            path.metrics.employment_improvement,
            path.metrics.confidence * 100.0
        )
        .map_err(write_err)?;

        for stage in &path.stages {
            writeln!(
                out,
                "\n{} {} ({} hours, ~{} weeks) [{:?}]",
                format!("Stage {}:", stage.order).bold(),
                stage.name,
                stage.estimated_hours,
                stage.estimated_weeks,
                stage.status
            )
            .map_err(write_err)?;
            for course in &stage.courses {
                writeln!(out, "  {} {} ({}h)", "•".green(), course.title, course.estimated_hours)
                    .map_err(write_err)?;
            }
        }

        let progress = path.progress();
        writeln!(
            out,
            "\nProgress: {}/{} courses ({:.0}%), target completion {}",
            progress.completed_courses,
            progress.total_courses,
            progress.percent_complete,
            path.target_completion_date.format("%Y-%m-%d")
        )
        .map_err(write_err)?;

        Ok(out)
    }
}

fn colored_coverage(coverage: f32, level: CoverageLevel) -> colored::ColoredString {
    let text = format!("{:.0}%", coverage);
    match level {
        CoverageLevel::Excellent | CoverageLevel::Good => text.green(),
        CoverageLevel::Fair => text.yellow(),
        CoverageLevel::Poor | CoverageLevel::VeryPoor => text.red(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::records::{JobPosting, Profile};
    use crate::recommend::engine::RecommendationEngine;

    fn sample_result() -> RecommendationResult {
        let engine = RecommendationEngine::builtin().unwrap();
        let jobs = vec![JobPosting {
            id: "j1".to_string(),
            title: "Frontend Developer".to_string(),
            description: String::new(),
            requirements: "react nodejs typescript required".to_string(),
        }];
        engine.recommend(&Profile::default(), &jobs, 5).unwrap()
    }

    #[test]
    fn test_json_formatter_produces_valid_json() {
        let result = sample_result();
        let json = JsonFormatter
            .format(&ReportPayload::Recommendations(&result))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.get("recommendations").is_some());
    }

    #[test]
    fn test_console_formatter_mentions_courses() {
        let result = sample_result();
        let text = ConsoleFormatter
            .format(&ReportPayload::Recommendations(&result))
            .unwrap();
        assert!(text.contains("Course Recommendations"));
        for matched in &result.recommendations {
            assert!(text.contains(&matched.course.title));
        }
    }

    #[test]
    fn test_console_analysis_shows_bilingual_tier() {
        let engine = RecommendationEngine::builtin().unwrap();
        let job = JobPosting {
            id: "j1".to_string(),
            title: "Dev".to_string(),
            description: String::new(),
            requirements: "react nodejs mongodb typescript".to_string(),
        };
        let analysis = engine.analyze_gap(&Profile::default(), &job);
        let text = ConsoleFormatter
            .format(&ReportPayload::Analysis(&analysis))
            .unwrap();
        assert!(text.contains("very poor"));
        assert!(text.contains("ضعيف جداً"));
    }
}
