//! Axum route handlers for the HTML page.

use axum::{
    extract::State,
    response::{Html, Response},
    Form,
};
use chrono::Utc;
use serde::Deserialize;

use crate::errors::AppError;
use crate::generation::handlers::{export_response, validate_and_generate};
use crate::generation::models::GenerationResult;
use crate::generation::validation::ValidationError;
use crate::state::AppState;
use crate::ui::form::{FormFields, FormState};
use crate::ui::view::render_page;

#[derive(Debug, Deserialize)]
pub struct ExportForm {
    /// The current result as JSON, echoed back by the results view.
    pub result: String,
}

/// GET /
pub async fn handle_index() -> Html<String> {
    Html(render_page(&FormState::default()))
}

/// POST /
///
/// One submission cycle: validate, generate, re-render with the outcome.
pub async fn handle_submit(
    State(state): State<AppState>,
    Form(fields): Form<FormFields>,
) -> Html<String> {
    let mut form = FormState::with_fields(fields);

    if let Some(payload) = form.begin_submit() {
        match validate_and_generate(&state.generator, &payload).await {
            Ok(result) => form.finish_success(result),
            Err(err) => {
                err.log();
                form.finish_failure(Some(&err.to_string()));
            }
        }
    }

    Html(render_page(&form))
}

/// POST /export
///
/// Form variant of `/api/export` used by the page's download button.
pub async fn handle_export_form(Form(form): Form<ExportForm>) -> Result<Response, AppError> {
    let result: GenerationResult = serde_json::from_str(&form.result)
        .map_err(|_| AppError::Validation(ValidationError::InvalidBody))?;
    Ok(export_response(&result, Utc::now().date_naive()))
}
