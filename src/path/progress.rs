//! Course and stage status tracking
//!
//! Stage status is derived from its courses, then overridden to `Blocked`
//! while any prerequisite stage is incomplete. Empty stages count as
//! completed so they never block their successors.

use serde::{Deserialize, Serialize};

/// Status of one course inside a learning path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseStatus {
    NotStarted,
    InProgress,
    Completed,
    Skipped,
}

impl CourseStatus {
    /// Completed and skipped courses both count as done
    pub fn is_done(&self) -> bool {
        matches!(self, CourseStatus::Completed | CourseStatus::Skipped)
    }
}

/// Status of one stage, derived from its courses and prerequisites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageStatus {
    NotStarted,
    InProgress,
    Completed,
    Blocked,
}

/// Completion snapshot over a whole path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathProgress {
    pub total_courses: usize,
    pub completed_courses: usize,
    pub total_stages: usize,
    pub completed_stages: usize,
    /// Done courses over total, in [0, 100]; 100 for an empty path
    pub percent_complete: f32,
}

/// Stage status from course statuses alone, before the blocked override
pub fn derive_stage_status(courses: &[CourseStatus]) -> StageStatus {
    if courses.is_empty() {
        return StageStatus::Completed;
    }
    if courses.iter().all(|status| status.is_done()) {
        return StageStatus::Completed;
    }
    let any_started = courses
        .iter()
        .any(|status| *status != CourseStatus::NotStarted);
    if any_started {
        StageStatus::InProgress
    } else {
        StageStatus::NotStarted
    }
}
