//! Learner level assessment and course level fitting

use crate::catalog::CourseLevel;
use crate::input::records::Profile;
use serde::{Deserialize, Serialize};

/// Experience years that mark an advanced or intermediate learner
const ADVANCED_YEARS: f32 = 5.0;
const INTERMEDIATE_YEARS: f32 = 2.0;
/// Declared skill counts with the same effect
const ADVANCED_SKILLS: usize = 15;
const INTERMEDIATE_SKILLS: usize = 8;

/// Overall proficiency level estimated from profile signals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearnerLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl LearnerLevel {
    /// Position in the learner hierarchy, 1-based
    pub fn rank(&self) -> i32 {
        match self {
            LearnerLevel::Beginner => 1,
            LearnerLevel::Intermediate => 2,
            LearnerLevel::Advanced => 3,
        }
    }
}

/// Qualitative fit between a course's level and the learner's
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelFit {
    Ideal,
    Challenging,
    Review,
    TooAdvanced,
    Refresher,
}

impl LevelFit {
    pub fn description(&self) -> &'static str {
        match self {
            LevelFit::Ideal => "ideal level for you",
            LevelFit::Challenging => "a suitable challenge",
            LevelFit::Review => "useful review",
            LevelFit::TooAdvanced => "advanced level, may be difficult",
            LevelFit::Refresher => "foundational level, good for a refresher",
        }
    }
}

/// Numeric score plus the qualitative label; both are exposed
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LevelSuitability {
    pub score: f32,
    pub fit: LevelFit,
}

/// Estimate the learner's overall level from experience and skill count
pub fn assess_learner_level(profile: &Profile) -> LearnerLevel {
    let years = experience_years(profile);
    let skills = profile.declared_skill_count();

    if years >= ADVANCED_YEARS || skills >= ADVANCED_SKILLS {
        LearnerLevel::Advanced
    } else if years >= INTERMEDIATE_YEARS || skills >= INTERMEDIATE_SKILLS {
        LearnerLevel::Intermediate
    } else {
        LearnerLevel::Beginner
    }
}

/// Total years of work experience across closed periods
pub fn experience_years(profile: &Profile) -> f32 {
    let mut total_days = 0i64;
    for entry in &profile.experience {
        if let (Some(from), Some(to)) = (entry.from, entry.to) {
            let days = (to - from).num_days();
            if days > 0 {
                total_days += days;
            }
        }
    }
    // Round to one decimal, matching profile display conventions
    (total_days as f32 / 365.25 * 10.0).round() / 10.0
}

/// Score how well a course's difficulty fits the learner
pub fn level_suitability(course_level: CourseLevel, learner_level: LearnerLevel) -> LevelSuitability {
    let difference = course_level.rank() - learner_level.rank();

    let (score, fit) = match difference {
        0 => (1.0, LevelFit::Ideal),
        1 => (0.8, LevelFit::Challenging),
        -1 => (0.6, LevelFit::Review),
        d if d > 1 => (0.4, LevelFit::TooAdvanced),
        _ => (0.7, LevelFit::Refresher),
    };

    LevelSuitability { score, fit }
}
