//! Prerequisite-ordered learning path construction
//!
//! Recommended courses are partitioned by level into disjoint buckets, then
//! dealt into stages by fixed per-stage take plans. Each bucket keeps a
//! cursor so no course appears in two stages. The path pattern picks how
//! many of the five stage templates are used.

use crate::analysis::types::AggregatedSkill;
use crate::error::{Result, SkillPathError};
use crate::matching::SkillMatcher;
use crate::path::progress::{derive_stage_status, CourseStatus, PathProgress, StageStatus};
use crate::recommend::course_matcher::MatchedCourse;
use chrono::{DateTime, Duration, Utc};
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Fallback when a course's duration text carries no number
const DEFAULT_COURSE_HOURS: u32 = 20;
/// Assumed study pace when converting stage hours to weeks
const STUDY_HOURS_PER_WEEK: u32 = 10;

/// Pattern selection thresholds
const COMPREHENSIVE_MIN_MISSING: usize = 10;
const COMPREHENSIVE_MIN_JOBS: usize = 3;
const QUICK_BOOST_MIN_HIGH_PRIORITY: usize = 3;
const HIGH_PRIORITY_THRESHOLD: f32 = 0.8;
const GAP_FILLER_MIN_MISSING: usize = 5;

/// Confidence blend over the path's coverage and improvement percentages
const CONFIDENCE_COVERAGE_WEIGHT: f32 = 0.8;
const CONFIDENCE_IMPROVEMENT_WEIGHT: f32 = 0.2;
const CONFIDENCE_CAP: f32 = 0.9;

/// Overall shape of a learning path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathPattern {
    ComprehensiveCareerShift,
    QuickSkillBoost,
    SkillGapFiller,
    CareerAdvancement,
}

impl PathPattern {
    /// Pick a pattern from the size and urgency of the gap
    pub fn select(missing_skills: &[AggregatedSkill], jobs_analyzed: usize) -> Self {
        let missing = missing_skills.len();
        let high_priority = missing_skills
            .iter()
            .filter(|skill| skill.priority >= HIGH_PRIORITY_THRESHOLD)
            .count();

        if missing >= COMPREHENSIVE_MIN_MISSING && jobs_analyzed >= COMPREHENSIVE_MIN_JOBS {
            PathPattern::ComprehensiveCareerShift
        } else if high_priority >= QUICK_BOOST_MIN_HIGH_PRIORITY {
            PathPattern::QuickSkillBoost
        } else if missing >= GAP_FILLER_MIN_MISSING {
            PathPattern::SkillGapFiller
        } else {
            PathPattern::CareerAdvancement
        }
    }

    /// How many of the five stage templates this pattern uses
    pub fn stage_count(&self) -> usize {
        match self {
            PathPattern::ComprehensiveCareerShift => 5,
            PathPattern::QuickSkillBoost => 3,
            PathPattern::SkillGapFiller => 4,
            PathPattern::CareerAdvancement => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PathPattern::ComprehensiveCareerShift => "Comprehensive Career Shift",
            PathPattern::QuickSkillBoost => "Quick Skill Boost",
            PathPattern::SkillGapFiller => "Skill Gap Filler",
            PathPattern::CareerAdvancement => "Career Advancement",
        }
    }
}

/// One course placed into a stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageCourse {
    pub course_id: String,
    pub title: String,
    pub skills: Vec<String>,
    pub estimated_hours: u32,
    pub status: CourseStatus,
}

/// One ordered stage of the path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningStage {
    /// 1-based position in the path
    pub order: u32,
    pub name: String,
    pub courses: Vec<StageCourse>,
    /// Orders of stages that must complete first
    pub prerequisites: Vec<u32>,
    pub estimated_hours: u32,
    pub estimated_weeks: u32,
    pub status: StageStatus,
}

/// Predicted payoff of following the whole path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImprovementMetrics {
    /// Percentage of missing skills the path covers, in [0, 100]
    pub skill_coverage: f32,
    /// Mean predicted employment improvement as a percentage, in [0, 100]
    pub employment_improvement: f32,
    /// Confidence in the prediction, in [0, 0.9]
    pub confidence: f32,
}

/// What the learner is working toward
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CareerGoal {
    pub target_job_titles: Vec<String>,
    #[serde(default)]
    pub description: String,
}

/// Tunable pacing for a path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathSettings {
    pub weekly_hours: u32,
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            weekly_hours: STUDY_HOURS_PER_WEEK,
        }
    }
}

/// A complete prerequisite-ordered learning path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningPath {
    pub pattern: PathPattern,
    pub stages: Vec<LearningStage>,
    pub metrics: ImprovementMetrics,
    pub goal: CareerGoal,
    pub settings: PathSettings,
    pub created_at: DateTime<Utc>,
    pub target_completion_date: DateTime<Utc>,
}

impl LearningPath {
    /// Set one course's status and re-derive every stage status.
    pub fn update_course_status(
        &mut self,
        stage_order: u32,
        course_id: &str,
        status: CourseStatus,
    ) -> Result<()> {
        let stage = self
            .stages
            .iter_mut()
            .find(|stage| stage.order == stage_order)
            .ok_or(SkillPathError::StageNotFound(stage_order))?;

        let course = stage
            .courses
            .iter_mut()
            .find(|course| course.course_id == course_id)
            .ok_or_else(|| SkillPathError::CourseNotFound {
                stage: stage_order,
                course: course_id.to_string(),
            })?;

        course.status = status;
        self.refresh_stage_statuses();
        Ok(())
    }

    /// Re-derive all stage statuses, applying the blocked override
    pub fn refresh_stage_statuses(&mut self) {
        let derived: Vec<StageStatus> = self
            .stages
            .iter()
            .map(|stage| {
                let statuses: Vec<CourseStatus> =
                    stage.courses.iter().map(|course| course.status).collect();
                derive_stage_status(&statuses)
            })
            .collect();

        for i in 0..self.stages.len() {
            let blocked = self.stages[i].prerequisites.iter().any(|&prereq| {
                self.stages
                    .iter()
                    .position(|stage| stage.order == prereq)
                    .map(|j| derived[j] != StageStatus::Completed)
                    .unwrap_or(false)
            });
            self.stages[i].status = if blocked {
                StageStatus::Blocked
            } else {
                derived[i]
            };
        }
    }

    pub fn progress(&self) -> PathProgress {
        let total_courses: usize = self.stages.iter().map(|stage| stage.courses.len()).sum();
        let completed_courses = self
            .stages
            .iter()
            .flat_map(|stage| &stage.courses)
            .filter(|course| course.status.is_done())
            .count();
        let completed_stages = self
            .stages
            .iter()
            .filter(|stage| stage.status == StageStatus::Completed)
            .count();

        let percent_complete = if total_courses == 0 {
            100.0
        } else {
            completed_courses as f32 / total_courses as f32 * 100.0
        };

        PathProgress {
            total_courses,
            completed_courses,
            total_stages: self.stages.len(),
            completed_stages,
            percent_complete,
        }
    }
}

/// Which level bucket a stage draws from, and how many courses it takes
struct StageTemplate {
    name: &'static str,
    takes: &'static [(LevelBucket, usize)],
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum LevelBucket {
    Beginner,
    Intermediate,
    Advanced,
    Comprehensive,
}

const STAGE_TEMPLATES: [StageTemplate; 5] = [
    StageTemplate {
        name: "Foundation",
        takes: &[(LevelBucket::Beginner, 3)],
    },
    StageTemplate {
        name: "Core Skills",
        takes: &[(LevelBucket::Beginner, 2), (LevelBucket::Intermediate, 2)],
    },
    StageTemplate {
        name: "Advanced Topics",
        takes: &[(LevelBucket::Intermediate, 2), (LevelBucket::Advanced, 2)],
    },
    StageTemplate {
        name: "Practical Application",
        takes: &[(LevelBucket::Advanced, 2)],
    },
    StageTemplate {
        name: "Portfolio Development",
        takes: &[(LevelBucket::Comprehensive, 2)],
    },
];

/// Builds learning paths from ranked course recommendations
pub struct PathBuilder {
    duration_pattern: Regex,
}

impl PathBuilder {
    pub fn new() -> Result<Self> {
        let duration_pattern = Regex::new(r"\d+")
            .map_err(|e| SkillPathError::AnalysisFailed(format!("bad duration pattern: {e}")))?;
        Ok(Self { duration_pattern })
    }

    /// Build a path for the given gap and recommendations
    pub fn build(
        &self,
        missing_skills: &[AggregatedSkill],
        recommendations: &[MatchedCourse],
        jobs_analyzed: usize,
        matcher: &SkillMatcher,
        goal: CareerGoal,
        settings: PathSettings,
    ) -> LearningPath {
        let pattern = PathPattern::select(missing_skills, jobs_analyzed);
        let stages = self.build_stages(pattern, recommendations);
        let metrics = path_metrics(missing_skills, recommendations, &stages, matcher);

        let total_weeks: i64 = stages.iter().map(|stage| stage.estimated_weeks as i64).sum();
        let created_at = Utc::now();

        debug!(
            "built {} path: {} stages, {} weeks",
            pattern.label(),
            stages.len(),
            total_weeks
        );

        let mut path = LearningPath {
            pattern,
            stages,
            metrics,
            goal,
            settings,
            created_at,
            target_completion_date: created_at + Duration::weeks(total_weeks),
        };
        path.refresh_stage_statuses();
        path
    }

    /// Deal ranked courses into the pattern's stages. Buckets are disjoint
    /// and consumed by cursor, so no course is placed twice.
    fn build_stages(&self, pattern: PathPattern, recommendations: &[MatchedCourse]) -> Vec<LearningStage> {
        let mut buckets: [Vec<&MatchedCourse>; 4] = [vec![], vec![], vec![], vec![]];
        for matched in recommendations {
            let bucket = match matched.course.level {
                crate::catalog::CourseLevel::Beginner => 0,
                crate::catalog::CourseLevel::Intermediate => 1,
                crate::catalog::CourseLevel::Advanced => 2,
                crate::catalog::CourseLevel::Comprehensive => 3,
            };
            buckets[bucket].push(matched);
        }
        let mut cursors = [0usize; 4];

        STAGE_TEMPLATES
            .iter()
            .take(pattern.stage_count())
            .enumerate()
            .map(|(i, template)| {
                let order = (i + 1) as u32;
                let mut courses = Vec::new();

                for &(bucket, count) in template.takes {
                    let b = match bucket {
                        LevelBucket::Beginner => 0,
                        LevelBucket::Intermediate => 1,
                        LevelBucket::Advanced => 2,
                        LevelBucket::Comprehensive => 3,
                    };
                    let available = buckets[b].len() - cursors[b];
                    for matched in &buckets[b][cursors[b]..cursors[b] + count.min(available)] {
                        courses.push(self.stage_course(matched));
                    }
                    cursors[b] += count.min(available);
                }

                let estimated_hours: u32 = courses.iter().map(|course| course.estimated_hours).sum();
                LearningStage {
                    order,
                    name: template.name.to_string(),
                    courses,
                    prerequisites: if order == 1 { vec![] } else { vec![order - 1] },
                    estimated_hours,
                    estimated_weeks: estimated_hours.div_ceil(STUDY_HOURS_PER_WEEK),
                    status: StageStatus::NotStarted,
                }
            })
            .collect()
    }

    fn stage_course(&self, matched: &MatchedCourse) -> StageCourse {
        StageCourse {
            course_id: matched.course.id.clone(),
            title: matched.course.title.clone(),
            skills: matched
                .matched_skills
                .iter()
                .map(|skill| skill.skill.clone())
                .collect(),
            estimated_hours: self.parse_duration_hours(&matched.course.duration),
            status: CourseStatus::NotStarted,
        }
    }

    /// First number in the free-text duration, else the default
    pub fn parse_duration_hours(&self, duration: &str) -> u32 {
        self.duration_pattern
            .find(duration)
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(DEFAULT_COURSE_HOURS)
    }
}

fn path_metrics(
    missing_skills: &[AggregatedSkill],
    recommendations: &[MatchedCourse],
    stages: &[LearningStage],
    matcher: &SkillMatcher,
) -> ImprovementMetrics {
    let placed_ids: Vec<&str> = stages
        .iter()
        .flat_map(|stage| &stage.courses)
        .map(|course| course.course_id.as_str())
        .collect();
    let placed: Vec<&MatchedCourse> = recommendations
        .iter()
        .filter(|matched| placed_ids.contains(&matched.course.id.as_str()))
        .collect();

    let skill_coverage = if missing_skills.is_empty() {
        0.0
    } else {
        let covered = missing_skills
            .iter()
            .filter(|skill| {
                placed.iter().any(|matched| {
                    matched
                        .course
                        .skills
                        .iter()
                        .any(|tag| matcher.are_equivalent(tag, &skill.name))
                })
            })
            .count();
        covered as f32 / missing_skills.len() as f32 * 100.0
    };

    let employment_improvement = if placed.is_empty() {
        0.0
    } else {
        placed
            .iter()
            .map(|matched| matched.employment_improvement)
            .sum::<f32>()
            / placed.len() as f32
            * 100.0
    };

    let confidence = (skill_coverage / 100.0 * CONFIDENCE_COVERAGE_WEIGHT
        + employment_improvement / 100.0 * CONFIDENCE_IMPROVEMENT_WEIGHT)
        .min(CONFIDENCE_CAP);

    ImprovementMetrics {
        skill_coverage,
        employment_improvement,
        confidence,
    }
}
