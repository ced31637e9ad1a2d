// crates/server/src/error.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use ts_rs::TS;
use visigen_core::AnalysisError;

/// Structured JSON error response for API errors
#[derive(Debug, Serialize, TS)]
#[cfg_attr(feature = "codegen", ts(export, export_to = "../../web/src/types/generated/"))]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

/// API error types that map to HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Theme not found: {0}")]
    ThemeNotFound(String),

    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("Bad request: {0}")]
    BadRequest(String),

}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::ThemeNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Analysis(e) if e.is_validation() => StatusCode::BAD_REQUEST,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Analysis(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_response = match &self {
            ApiError::ThemeNotFound(id) => {
                tracing::warn!(theme_id = %id, "Theme not found");
                ErrorResponse::with_details("Theme not found", format!("Theme ID: {}", id))
            }
            ApiError::Analysis(e) if e.is_validation() => {
                tracing::warn!(error = %e, "Rejected content");
                ErrorResponse::with_details("Invalid content", e.to_string())
            }
            ApiError::Analysis(AnalysisError::TaskFailed(msg)) => {
                tracing::error!(message = %msg, "Internal server error");
                ErrorResponse::new("Internal server error")
            }
            ApiError::Analysis(e) => {
                tracing::error!(error = %e, "Analysis failed");
                ErrorResponse::with_details("Analysis failed", e.to_string())
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(message = %msg, "Bad request");
                ErrorResponse::with_details("Bad request", msg.clone())
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
