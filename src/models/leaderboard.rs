//! Leaderboard models
//!
//! Derived, never persisted by the core: entries are recomputed per request
//! unless served from the precomputed aggregate view owned by the storage
//! layer.

use serde::{Deserialize, Serialize};

/// One ranked leaderboard row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub user_id: String,
    pub name: String,
    pub points: i64,
    /// Number of distinct study weeks; only known to the aggregate view
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weeks: Option<i64>,
}

/// Row shape returned by the storage layer's precomputed aggregate view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardViewRow {
    pub user_id: String,
    pub name: Option<String>,
    pub total_points: Option<i64>,
    pub weeks_count: Option<i64>,
}

impl From<LeaderboardViewRow> for LeaderboardEntry {
    fn from(row: LeaderboardViewRow) -> Self {
        Self {
            user_id: row.user_id,
            name: row.name.unwrap_or_default(),
            points: row.total_points.unwrap_or(0),
            weeks: row.weeks_count,
        }
    }
}

/// Minimal completion projection read by the fallback tier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPoints {
    pub user_id: String,
    pub points: Option<i64>,
}

/// Minimal profile projection read by the fallback tier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileName {
    pub id: String,
    pub name: Option<String>,
}
