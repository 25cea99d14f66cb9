//! Leaderboard routes

use axum::{routing::get, Router};

use crate::api::app_state::AppState;
use crate::api::handlers::leaderboard_handler::get_leaderboard;

/// Create the leaderboard router
pub fn create_leaderboard_router() -> Router<AppState> {
    Router::new().route("/leaderboard", get(get_leaderboard))
}
