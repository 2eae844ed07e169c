//! Per-job skill gap analysis
//!
//! Compares one profile against one job posting: extracts both skill sets,
//! derives the missing list, and reports per-category coverage plus an
//! overall summary. Degenerate inputs (no job skills, empty profile) produce
//! well-formed results with zeroed coverage, never a division by zero.

use crate::analysis::types::{
    ExtractedSkill, MissingSkill, Proficiency, RequiredSkill, SkillSource,
};
use crate::catalog::SkillCategory;
use crate::input::records::{JobPosting, Profile};
use crate::matching::SkillMatcher;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Importance assigned by text-occurrence count
const IMPORTANCE_FREQ_3: f32 = 0.9;
const IMPORTANCE_FREQ_2: f32 = 0.7;
const IMPORTANCE_FREQ_1: f32 = 0.5;
/// Bonus when the job text carries a "required" marker in either language
const IMPORTANCE_REQUIRED_BONUS: f32 = 0.2;
const REQUIRED_MARKERS: [&str; 2] = ["required", "مطلوب"];

/// Confidence for skills taken from structured profile lists
const CONFIDENCE_DECLARED: f32 = 1.0;
/// Confidence for untyped "other skills" entries
const CONFIDENCE_OTHER: f32 = 0.8;
/// Confidence for skills found in free-text bio
const CONFIDENCE_BIO: f32 = 0.6;

/// Hours to close one gap, by priority band
const HOURS_HIGH_PRIORITY: u32 = 20;
const HOURS_MEDIUM_PRIORITY: u32 = 15;
const HOURS_LOW_PRIORITY: u32 = 10;
/// Assumed study pace when converting hours to weeks
pub const STUDY_HOURS_PER_WEEK: u32 = 10;

/// Qualitative coverage bucket per category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GapSeverity {
    Low,
    Medium,
    High,
}

/// Coverage tier with bilingual labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoverageLevel {
    Excellent,
    Good,
    Fair,
    Poor,
    VeryPoor,
}

impl CoverageLevel {
    pub fn from_coverage(coverage: f32) -> Self {
        if coverage >= 90.0 {
            CoverageLevel::Excellent
        } else if coverage >= 75.0 {
            CoverageLevel::Good
        } else if coverage >= 50.0 {
            CoverageLevel::Fair
        } else if coverage >= 25.0 {
            CoverageLevel::Poor
        } else {
            CoverageLevel::VeryPoor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CoverageLevel::Excellent => "excellent",
            CoverageLevel::Good => "good",
            CoverageLevel::Fair => "fair",
            CoverageLevel::Poor => "poor",
            CoverageLevel::VeryPoor => "very poor",
        }
    }

    pub fn label_ar(&self) -> &'static str {
        match self {
            CoverageLevel::Excellent => "ممتاز",
            CoverageLevel::Good => "جيد",
            CoverageLevel::Fair => "متوسط",
            CoverageLevel::Poor => "ضعيف",
            CoverageLevel::VeryPoor => "ضعيف جداً",
        }
    }
}

/// Coverage report for one skill category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryGap {
    pub category: SkillCategory,
    pub user_skill_count: usize,
    pub job_skill_count: usize,
    pub missing_skill_count: usize,
    /// Percentage in [0, 100]; 0 when the category has no job skills
    pub coverage: f32,
    pub gap_severity: GapSeverity,
}

/// Estimated effort to close all gaps at the assumed weekly pace
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEstimate {
    pub total_hours: u32,
    pub weeks: u32,
}

/// Top-level summary of one gap analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapSummary {
    pub total_user_skills: usize,
    pub total_job_skills: usize,
    pub total_missing_skills: usize,
    /// Percentage in [0, 100], 0 when the job lists no recognizable skills
    pub overall_coverage: f32,
    pub coverage_level: CoverageLevel,
    pub critical_gaps: Vec<SkillCategory>,
    pub medium_gaps: Vec<SkillCategory>,
    pub top_missing_skills: Vec<String>,
    pub estimated_time_to_close: TimeEstimate,
}

/// Complete result of analyzing one (profile, job) pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapAnalysis {
    pub user_skills: Vec<ExtractedSkill>,
    pub job_skills: Vec<RequiredSkill>,
    pub missing_skills: Vec<MissingSkill>,
    pub category_gaps: Vec<CategoryGap>,
    pub summary: GapSummary,
}

/// Analyzer comparing a profile against a single job posting
pub struct GapAnalyzer<'a> {
    matcher: &'a SkillMatcher,
}

impl<'a> GapAnalyzer<'a> {
    pub fn new(matcher: &'a SkillMatcher) -> Self {
        Self { matcher }
    }

    /// Run the full per-job analysis
    pub fn analyze(&self, profile: &Profile, job: &JobPosting) -> GapAnalysis {
        let user_skills = self.extract_user_skills(profile);
        let job_skills = self.extract_job_skills(job);
        let missing_skills = self.identify_missing_skills(&user_skills, &job_skills);
        let category_gaps = self.analyze_by_category(&user_skills, &job_skills, &missing_skills);
        let summary = self.summarize(&user_skills, &job_skills, &missing_skills, &category_gaps);

        debug!(
            "gap analysis for job '{}': {} required, {} missing, {:.0}% coverage",
            job.title,
            job_skills.len(),
            missing_skills.len(),
            summary.overall_coverage
        );

        GapAnalysis {
            user_skills,
            job_skills,
            missing_skills,
            category_gaps,
            summary,
        }
    }

    /// Extract the profile holder's skills from structured lists and bio.
    /// Deduplicated by canonical name, first occurrence wins; structured
    /// lists are scanned before free text so confidence-1.0 entries always
    /// shadow bio hits.
    pub fn extract_user_skills(&self, profile: &Profile) -> Vec<ExtractedSkill> {
        let mut skills = Vec::new();

        for item in &profile.computer_skills {
            skills.push(ExtractedSkill {
                name: item.skill.clone(),
                proficiency: item.proficiency.unwrap_or(Proficiency::Intermediate),
                category: self.matcher.category_of(&item.skill),
                source: SkillSource::ComputerSkills,
                confidence: CONFIDENCE_DECLARED,
            });
        }

        for item in &profile.software_skills {
            skills.push(ExtractedSkill {
                name: item.software.clone(),
                proficiency: item.proficiency.unwrap_or(Proficiency::Intermediate),
                category: self.matcher.category_of(&item.software),
                source: SkillSource::SoftwareSkills,
                confidence: CONFIDENCE_DECLARED,
            });
        }

        for name in &profile.other_skills {
            skills.push(ExtractedSkill {
                name: name.clone(),
                proficiency: Proficiency::Intermediate,
                category: self.matcher.category_of(name),
                source: SkillSource::OtherSkills,
                confidence: CONFIDENCE_OTHER,
            });
        }

        if !profile.bio.is_empty() {
            for canonical in self.matcher.extract_from_text(&profile.bio) {
                skills.push(ExtractedSkill {
                    name: canonical.clone(),
                    proficiency: Proficiency::Intermediate,
                    category: self.matcher.category_of(&canonical),
                    source: SkillSource::Bio,
                    confidence: CONFIDENCE_BIO,
                });
            }
        }

        let mut seen = HashSet::new();
        skills.retain(|skill| seen.insert(skill.name.to_lowercase()));
        skills
    }

    /// Extract required skills with importance weights from the job text
    pub fn extract_job_skills(&self, job: &JobPosting) -> Vec<RequiredSkill> {
        let text = job.full_text().to_lowercase();
        let has_required_marker = REQUIRED_MARKERS.iter().any(|marker| text.contains(marker));

        self.matcher
            .scan_text(&text)
            .into_iter()
            .map(|occ| {
                let importance = importance_for(occ.frequency, has_required_marker);
                RequiredSkill {
                    name: occ.canonical,
                    importance,
                    category: occ.category,
                    frequency: occ.frequency,
                    variants: occ.variants,
                }
            })
            .collect()
    }

    /// Required skills with no equivalent extracted skill, sorted by priority
    pub fn identify_missing_skills(
        &self,
        user_skills: &[ExtractedSkill],
        job_skills: &[RequiredSkill],
    ) -> Vec<MissingSkill> {
        let mut missing: Vec<MissingSkill> = job_skills
            .iter()
            .filter(|job_skill| {
                !user_skills
                    .iter()
                    .any(|user_skill| self.matcher.are_equivalent(&user_skill.name, &job_skill.name))
            })
            .map(MissingSkill::from_required)
            .collect();

        missing.sort_by(|a, b| b.priority.partial_cmp(&a.priority).unwrap_or(std::cmp::Ordering::Equal));
        missing
    }

    fn analyze_by_category(
        &self,
        user_skills: &[ExtractedSkill],
        job_skills: &[RequiredSkill],
        missing_skills: &[MissingSkill],
    ) -> Vec<CategoryGap> {
        SkillCategory::all()
            .into_iter()
            .map(|category| {
                let user_skill_count = user_skills.iter().filter(|s| s.category == category).count();
                let job_skill_count = job_skills.iter().filter(|s| s.category == category).count();
                let missing_skill_count =
                    missing_skills.iter().filter(|s| s.category == category).count();

                let (coverage, gap_severity) = if job_skill_count == 0 {
                    (0.0, GapSeverity::Low)
                } else {
                    let coverage = (job_skill_count - missing_skill_count) as f32
                        / job_skill_count as f32
                        * 100.0;
                    let severity = if coverage < 50.0 {
                        GapSeverity::High
                    } else if coverage < 75.0 {
                        GapSeverity::Medium
                    } else {
                        GapSeverity::Low
                    };
                    (coverage.clamp(0.0, 100.0), severity)
                };

                CategoryGap {
                    category,
                    user_skill_count,
                    job_skill_count,
                    missing_skill_count,
                    coverage,
                    gap_severity,
                }
            })
            .collect()
    }

    fn summarize(
        &self,
        user_skills: &[ExtractedSkill],
        job_skills: &[RequiredSkill],
        missing_skills: &[MissingSkill],
        category_gaps: &[CategoryGap],
    ) -> GapSummary {
        let total_job_skills = job_skills.len();
        let total_missing_skills = missing_skills.len();

        let overall_coverage = if total_job_skills == 0 {
            0.0
        } else {
            ((total_job_skills - total_missing_skills) as f32 / total_job_skills as f32 * 100.0)
                .clamp(0.0, 100.0)
        };

        let critical_gaps = category_gaps
            .iter()
            .filter(|gap| gap.gap_severity == GapSeverity::High)
            .map(|gap| gap.category)
            .collect();
        let medium_gaps = category_gaps
            .iter()
            .filter(|gap| gap.gap_severity == GapSeverity::Medium)
            .map(|gap| gap.category)
            .collect();

        GapSummary {
            total_user_skills: user_skills.len(),
            total_job_skills,
            total_missing_skills,
            overall_coverage,
            coverage_level: CoverageLevel::from_coverage(overall_coverage),
            critical_gaps,
            medium_gaps,
            top_missing_skills: missing_skills.iter().take(5).map(|s| s.name.clone()).collect(),
            estimated_time_to_close: estimate_time_to_close(missing_skills),
        }
    }
}

fn importance_for(frequency: u32, has_required_marker: bool) -> f32 {
    let base = if frequency >= 3 {
        IMPORTANCE_FREQ_3
    } else if frequency >= 2 {
        IMPORTANCE_FREQ_2
    } else {
        IMPORTANCE_FREQ_1
    };

    if has_required_marker {
        (base + IMPORTANCE_REQUIRED_BONUS).min(1.0)
    } else {
        base
    }
}

fn estimate_time_to_close(missing_skills: &[MissingSkill]) -> TimeEstimate {
    let total_hours: u32 = missing_skills
        .iter()
        .map(|skill| {
            if skill.priority >= 0.8 {
                HOURS_HIGH_PRIORITY
            } else if skill.priority >= 0.6 {
                HOURS_MEDIUM_PRIORITY
            } else {
                HOURS_LOW_PRIORITY
            }
        })
        .sum();

    TimeEstimate {
        total_hours,
        weeks: total_hours.div_ceil(STUDY_HOURS_PER_WEEK),
    }
}
