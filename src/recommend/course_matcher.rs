//! Course-to-gap matching and ranking
//!
//! Every catalog course is tested against the aggregated missing-skill list
//! through the skill matcher's equivalence relation; courses covering
//! nothing are excluded. Matched courses carry per-skill match scores and a
//! blended ranking key. All weights are named constants so the formulas stay
//! traceable and independently testable.

use crate::analysis::types::AggregatedSkill;
use crate::catalog::CandidateCourse;
use crate::matching::SkillMatcher;
use crate::recommend::level::LevelSuitability;
use serde::{Deserialize, Serialize};

/// Per-skill match score blend
const SKILL_MATCH_BASE: f32 = 0.5;
const SKILL_MATCH_IMPORTANCE_WEIGHT: f32 = 0.3;
const SKILL_MATCH_TITLE_BONUS: f32 = 0.2;
const SKILL_MATCH_LEVEL_WEIGHT: f32 = 0.1;

/// Course relevance blend
const RELEVANCE_SKILL_COUNT_WEIGHT: f32 = 0.4;
const RELEVANCE_MATCH_WEIGHT: f32 = 0.3;
const RELEVANCE_RATING_WEIGHT: f32 = 0.2;
const RELEVANCE_DEMAND_WEIGHT: f32 = 0.1;
/// Matched-skill counts saturate at this many skills
const RELEVANCE_SKILL_COUNT_NORM: f32 = 5.0;

/// Final ranking key blend
const PRIORITY_MATCH_WEIGHT: f32 = 0.4;
const PRIORITY_RELEVANCE_WEIGHT: f32 = 0.3;
const PRIORITY_RATING_WEIGHT: f32 = 0.15;
const PRIORITY_DEMAND_WEIGHT: f32 = 0.1;
const PRIORITY_COMPLETION_WEIGHT: f32 = 0.05;

const MAX_RATING: f32 = 5.0;

/// One missing skill a course covers, with its match quality
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedSkill {
    pub skill: String,
    pub importance: f32,
    pub match_score: f32,
}

/// A catalog course matched against the aggregated gap
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedCourse {
    pub course: CandidateCourse,
    pub matched_skills: Vec<MatchedSkill>,
    /// Mean of the per-skill match scores
    pub match_score: f32,
    /// Matched skills over total missing skills
    pub skill_coverage: f32,
    pub relevance: f32,
    /// Ranking key; higher ranks earlier
    pub priority: f32,
    /// Filled in by the level assigner
    pub level_suitability: Option<LevelSuitability>,
    /// Filled in by the improvement predictor
    pub employment_improvement: f32,
    pub expected_outcomes: Vec<String>,
}

/// Matches and ranks catalog courses against aggregated missing skills
pub struct CourseMatcher<'a> {
    matcher: &'a SkillMatcher,
}

impl<'a> CourseMatcher<'a> {
    pub fn new(matcher: &'a SkillMatcher) -> Self {
        Self { matcher }
    }

    /// Does the course's declared skill tags cover the given skill name?
    pub fn course_covers_skill(&self, course: &CandidateCourse, skill_name: &str) -> bool {
        course
            .skills
            .iter()
            .any(|tag| self.matcher.are_equivalent(tag, skill_name))
    }

    /// Match every course against the missing-skill list and rank the
    /// matches by the blended priority key, descending and stable on ties
    pub fn match_and_rank(
        &self,
        courses: &[CandidateCourse],
        missing_skills: &[AggregatedSkill],
    ) -> Vec<MatchedCourse> {
        let mut matched: Vec<MatchedCourse> = courses
            .iter()
            .filter_map(|course| self.match_course(course, missing_skills))
            .collect();

        matched.sort_by(|a, b| {
            b.priority
                .partial_cmp(&a.priority)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        matched
    }

    /// Match one course; `None` when it covers no missing skill
    pub fn match_course(
        &self,
        course: &CandidateCourse,
        missing_skills: &[AggregatedSkill],
    ) -> Option<MatchedCourse> {
        let matched_skills: Vec<MatchedSkill> = missing_skills
            .iter()
            .filter(|skill| self.course_covers_skill(course, &skill.name))
            .map(|skill| MatchedSkill {
                skill: skill.name.clone(),
                importance: skill.importance,
                match_score: skill_match_score(course, skill),
            })
            .collect();

        if matched_skills.is_empty() {
            return None;
        }

        let match_score = matched_skills.iter().map(|s| s.match_score).sum::<f32>()
            / matched_skills.len() as f32;
        let skill_coverage = if missing_skills.is_empty() {
            0.0
        } else {
            matched_skills.len() as f32 / missing_skills.len() as f32
        };
        let relevance = course_relevance(course, &matched_skills, match_score);
        let priority = course_priority(course, match_score, relevance);

        Some(MatchedCourse {
            course: course.clone(),
            matched_skills,
            match_score,
            skill_coverage,
            relevance,
            priority,
            level_suitability: None,
            employment_improvement: 0.0,
            expected_outcomes: Vec::new(),
        })
    }
}

/// Match quality of one course for one missing skill
fn skill_match_score(course: &CandidateCourse, skill: &AggregatedSkill) -> f32 {
    let mut score = SKILL_MATCH_BASE + SKILL_MATCH_IMPORTANCE_WEIGHT * skill.importance;

    if course
        .title
        .to_lowercase()
        .contains(&skill.name.to_lowercase())
    {
        score += SKILL_MATCH_TITLE_BONUS;
    }

    score += SKILL_MATCH_LEVEL_WEIGHT * course.level.score();
    score.min(1.0)
}

fn course_relevance(course: &CandidateCourse, matched: &[MatchedSkill], match_score: f32) -> f32 {
    let skill_count_factor = (matched.len() as f32 / RELEVANCE_SKILL_COUNT_NORM).min(1.0);

    let relevance = RELEVANCE_SKILL_COUNT_WEIGHT * skill_count_factor
        + RELEVANCE_MATCH_WEIGHT * match_score
        + RELEVANCE_RATING_WEIGHT * (course.rating / MAX_RATING)
        + RELEVANCE_DEMAND_WEIGHT * course.market_demand;

    relevance.min(1.0)
}

fn course_priority(course: &CandidateCourse, match_score: f32, relevance: f32) -> f32 {
    PRIORITY_MATCH_WEIGHT * match_score
        + PRIORITY_RELEVANCE_WEIGHT * relevance
        + PRIORITY_RATING_WEIGHT * (course.rating / MAX_RATING)
        + PRIORITY_DEMAND_WEIGHT * course.market_demand
        + PRIORITY_COMPLETION_WEIGHT * course.completion_rate
}
