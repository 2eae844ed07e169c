//! Learning path construction and progress tracking

pub mod builder;
pub mod progress;

pub use builder::{
    CareerGoal, ImprovementMetrics, LearningPath, LearningStage, PathBuilder, PathPattern,
    PathSettings, StageCourse,
};
pub use progress::{CourseStatus, PathProgress, StageStatus};
