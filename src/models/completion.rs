//! Completion record model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Evidence that a user finished a module, carrying an awarded point value
/// and timestamp.
///
/// At most one record exists per `(user_id, module_id)` pair; uniqueness is
/// enforced by the storage layer, the aggregators assume it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRecord {
    pub user_id: String,
    pub module_id: String,
    pub completed: bool,
    /// When the module was completed; absent for in-progress records
    pub completed_at: Option<DateTime<Utc>>,
    /// Awarded points; absent is treated as 0 by every aggregation
    pub points: Option<i64>,
}

impl CompletionRecord {
    pub fn awarded_points(&self) -> i64 {
        self.points.unwrap_or(0)
    }
}
