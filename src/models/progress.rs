//! Per-course progress summary

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Derived completion summary for one active course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseProgressSummary {
    pub course_id: String,
    pub title: String,
    pub description: Option<String>,
    /// Count of active modules in the course
    pub total_modules: u32,
    /// Count of those modules with a completed record
    pub completed_modules: u32,
    /// Whole-number completion percentage, half-up, 0 when the course has
    /// no active modules
    pub percent: u32,
    /// Most recent completion timestamp in the course, by timestamp value
    pub last_completed_at: Option<DateTime<Utc>>,
}
