//! Public profile API handler

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use tracing::debug;

use crate::api::app_state::AppState;
use crate::api::dto::profile_dto::PublicProfileResponse;
use crate::error::AppError;

/// Unauthenticated public profile lookup
///
/// GET /api/profiles/:identifier
pub async fn get_public_profile(
    State(state): State<AppState>,
    // `Path` hands over the segment already percent-decoded; decoding again
    // would corrupt identifiers containing a literal escape.
    Path(identifier): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    debug!("public profile lookup: {identifier}");

    let composed = state.profile_service.compose(&identifier).await?;
    Ok(Json(PublicProfileResponse::from(composed)))
}
