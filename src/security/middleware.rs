//! Security middleware
//!
//! Verifies the session bearer token and inserts the claims into request
//! extensions for protected routes.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::api::app_state::AppState;
use crate::error::AppError;
use crate::security::auth::bearer_token;

/// Session authentication middleware
pub async fn require_session(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let token = bearer_token(header)
        .ok_or_else(|| AppError::Unauthorized("missing bearer token".to_string()))?;

    let claims = state.verifier.verify_session(token)?;
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
