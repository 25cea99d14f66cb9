//! Leaderboard API handler

use axum::{extract::State, response::IntoResponse, Json};
use tracing::debug;

use crate::api::app_state::AppState;
use crate::api::dto::leaderboard_dto::LeaderboardResponse;
use crate::error::AppError;
use crate::services::leaderboard::LeaderboardSource;

/// Global points leaderboard
///
/// GET /api/leaderboard
pub async fn get_leaderboard(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let source = state.leaderboard_service.resolve().await?;

    match &source {
        LeaderboardSource::ViewAggregate(entries) => {
            debug!("leaderboard served from aggregate view, {} entries", entries.len())
        }
        LeaderboardSource::Fallback(entries) => {
            debug!("leaderboard derived from raw records, {} entries", entries.len())
        }
    }

    Ok(Json(LeaderboardResponse {
        leaderboard: source.into_entries(),
    }))
}
