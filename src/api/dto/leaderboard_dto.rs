//! Leaderboard DTOs

use serde::Serialize;

use crate::models::LeaderboardEntry;

/// Response for `GET /api/leaderboard`
#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub leaderboard: Vec<LeaderboardEntry>,
}
