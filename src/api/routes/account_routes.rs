//! Account routes

use axum::{middleware, routing::delete, Router};

use crate::api::app_state::AppState;
use crate::api::handlers::account_handler::delete_account;
use crate::security::middleware::require_session;

/// Create the account router; every route requires a verified session
pub fn create_account_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/account", delete(delete_account))
        .layer(middleware::from_fn_with_state(state, require_session))
}
