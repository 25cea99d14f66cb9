//! API module
//!
//! REST surface over the aggregation services.

pub mod app_state;
pub mod dto;
pub mod handlers;
pub mod routes;

use axum::{routing::get, Json, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::api::app_state::AppState;

pub fn create_router(app_state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::leaderboard_routes::create_leaderboard_router())
        .merge(routes::profile_routes::create_profile_router())
        .merge(routes::account_routes::create_account_router(
            app_state.clone(),
        ));

    Router::new()
        .nest("/api", api)
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

/// Liveness probe
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
