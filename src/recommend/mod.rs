//! Course matching, ranking, level fitting, and improvement prediction

pub mod course_matcher;
pub mod engine;
pub mod improvement;
pub mod level;

pub use course_matcher::{CourseMatcher, MatchedCourse, MatchedSkill};
pub use engine::{RecommendationEngine, RecommendationResult};
pub use improvement::ImprovementAggregate;
pub use level::{LearnerLevel, LevelFit, LevelSuitability};
