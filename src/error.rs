//! Error handling module
//!
//! Defines the application error type and its HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::services::account::DeletionStep;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Lookup yielded nothing
    #[error("not found: {0}")]
    NotFound(String),

    /// Storage layer read failure
    #[error("upstream read failed: {0}")]
    UpstreamRead(String),

    /// Storage layer write failure during cascading deletion
    #[error("upstream write failed at step '{step}': {message}")]
    UpstreamWrite {
        step: DeletionStep,
        message: String,
    },

    /// Missing or invalid session / re-authentication token
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<figment::Error> for AppError {
    fn from(e: figment::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

/// HTTP status mapping
impl From<&AppError> for StatusCode {
    fn from(err: &AppError) -> StatusCode {
        match err {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::UpstreamRead(_)
            | AppError::UpstreamWrite { .. }
            | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Structured failure body; internal error objects never leak past here.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub ok: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<DeletionStep>,
}

impl ErrorBody {
    pub fn new(message: &str) -> Self {
        Self {
            ok: false,
            error: message.to_string(),
            step: None,
        }
    }

    pub fn with_step(mut self, step: DeletionStep) -> Self {
        self.step = Some(step);
        self
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from(&self);
        let body = match &self {
            AppError::UpstreamWrite { step, .. } => {
                ErrorBody::new(&self.to_string()).with_step(*step)
            }
            _ => ErrorBody::new(&self.to_string()),
        };
        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, AppError>;
