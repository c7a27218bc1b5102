use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::generation::validation::ValidationError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Client input malformed. Surfaced to the user verbatim.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Deployment misconfiguration, e.g. the model credential is not set.
    #[error("{0}")]
    Configuration(String),

    /// The model returned no text at all.
    #[error("Empty response from AI model")]
    EmptyResponse,

    /// Provider or network failure. Carries the underlying cause.
    #[error("AI provider error: {0}")]
    Upstream(#[from] LlmError),

    /// The model text did not match the expected JSON shape.
    #[error("AI model returned invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl AppError {
    /// Machine-readable code sent alongside the message.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(e) => e.code(),
            AppError::Configuration(_) => "missing_api_key",
            AppError::EmptyResponse => "empty_response",
            AppError::Upstream(_) => "upstream_error",
            AppError::Parse(_) => "invalid_json",
        }
    }

    /// Validation failures are routine; everything else is logged as an error.
    pub fn log(&self) {
        match self {
            AppError::Validation(e) => tracing::debug!("Rejected request: {}", e.code()),
            other => tracing::error!("Generation failed ({}): {other}", other.code()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        self.log();

        let body = Json(json!({
            "error": self.to_string(),
            "code": self.code(),
        }));

        (status, body).into_response()
    }
}
