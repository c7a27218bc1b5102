//! Axum route handlers for the Q&A API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde_json::Value;

use crate::errors::AppError;
use crate::generation::export::{export_filename, render_export};
use crate::generation::generator::QaGenerator;
use crate::generation::models::GenerationResult;
use crate::generation::validation::{validate_request, ValidationError};
use crate::state::AppState;

/// Validator then generator. The model is never called for an invalid payload.
pub async fn validate_and_generate(
    generator: &QaGenerator,
    payload: &Value,
) -> Result<GenerationResult, AppError> {
    let request = validate_request(payload)?;
    generator.generate(&request).await
}

/// POST /api/generate-qa
///
/// 200 with the GenerationResult, 400 on validation failure, 500 otherwise.
pub async fn handle_generate_qa(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<GenerationResult>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!("Unreadable request body: {rejection}");
        AppError::Validation(ValidationError::InvalidBody)
    })?;

    let result = validate_and_generate(&state.generator, &payload).await?;
    Ok(Json(result))
}

/// POST /api/export
///
/// Returns the plain-text export of the posted result as a file download.
pub async fn handle_export(Json(result): Json<GenerationResult>) -> Response {
    export_response(&result, Utc::now().date_naive())
}

/// Builds the `text/plain` attachment response for a result.
pub fn export_response(result: &GenerationResult, date: NaiveDate) -> Response {
    let disposition = format!("attachment; filename=\"{}\"", export_filename(date));
    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        render_export(result, date),
    )
        .into_response()
}
