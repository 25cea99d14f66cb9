//! Account API handler

use axum::{
    extract::{Extension, State},
    http::HeaderMap,
    response::IntoResponse,
    Json,
};
use tracing::info;

use crate::api::app_state::AppState;
use crate::api::dto::account_dto::DeleteAccountResponse;
use crate::error::AppError;
use crate::security::auth::Claims;

/// Header carrying the short-lived re-authentication token
pub const REAUTH_HEADER: &str = "x-reauth-token";

/// Delete the caller's own account
///
/// DELETE /api/account
pub async fn delete_account(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let reauth = headers
        .get(REAUTH_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("missing re-auth token".to_string()))?;

    state.verifier.verify_reauth(reauth, &claims.sub)?;

    info!("account deletion requested by {}", claims.sub);
    state.account_service.delete_account(&claims.sub).await?;

    Ok(Json(DeleteAccountResponse::success()))
}
