//! Public profile routes

use axum::{routing::get, Router};

use crate::api::app_state::AppState;
use crate::api::handlers::profile_handler::get_public_profile;

/// Create the public profile router
pub fn create_profile_router() -> Router<AppState> {
    Router::new().route("/profiles/:identifier", get(get_public_profile))
}
