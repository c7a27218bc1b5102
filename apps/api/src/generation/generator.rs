//! Generation Client — builds the prompt, makes the single model call, and
//! parses the reply into a `GenerationResult`.
//!
//! Flow: credential check → build prompt → TextGenerator::generate →
//!       empty check → strip fences → JSON parse.
//!
//! All-or-nothing: any failure discards the reply.

use std::sync::Arc;

use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::models::{GenerationRequest, GenerationResult};
use crate::generation::prompts::{JOB_DESCRIPTION_HEADING, QA_INSTRUCTION_TEMPLATE, RESUME_HEADING};
use crate::llm_client::prompts::{JSON_ONLY_INSTRUCTION, NO_HALLUCINATION_INSTRUCTION};
use crate::llm_client::{strip_json_fences, GenerationPrompt, TextGenerator};

pub const MISSING_API_KEY_MESSAGE: &str = "Missing GEMINI_API_KEY environment variable.";

/// Produces interview Q&A for a validated request.
///
/// The credential is injected at construction; `None` makes every call fail
/// with a configuration error before the backend is touched.
#[derive(Clone)]
pub struct QaGenerator {
    api_key: Option<String>,
    backend: Arc<dyn TextGenerator>,
}

impl QaGenerator {
    pub fn new(api_key: Option<String>, backend: Arc<dyn TextGenerator>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            backend,
        }
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    pub async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResult, AppError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::Configuration(MISSING_API_KEY_MESSAGE.to_string()))?;

        let prompt = build_prompt(request);
        info!(
            "Generating {} questions (level={}, type={}, jd_chars={}, resume_chars={})",
            request.num_questions,
            request.target_role_level,
            request.interview_type,
            request.job_description.chars().count(),
            request.resume.chars().count(),
        );

        let text = self.backend.generate(api_key, &prompt).await?;
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::EmptyResponse);
        }

        let result: GenerationResult = serde_json::from_str(strip_json_fences(text))?;

        let total = result.total_items();
        if total != request.num_questions as usize {
            warn!(
                "Model returned {total} Q&A items, {} were requested",
                request.num_questions
            );
        }
        info!(
            "Generated {} sections with {total} items",
            result.sections.len()
        );

        Ok(result)
    }
}

/// Builds the fixed instruction segment and the literal content segment.
pub fn build_prompt(request: &GenerationRequest) -> GenerationPrompt {
    let instruction = QA_INSTRUCTION_TEMPLATE
        .replace("{num_questions}", &request.num_questions.to_string())
        .replace("{role_level}", request.target_role_level.as_str())
        .replace("{interview_type}", request.interview_type.as_str())
        .replace("{no_hallucination_instruction}", NO_HALLUCINATION_INSTRUCTION)
        .replace("{json_only_instruction}", JSON_ONLY_INSTRUCTION);

    // Formatted rather than templated so user text containing braces is never rewritten.
    let content = format!(
        "{JOB_DESCRIPTION_HEADING}\n{}\n\n{RESUME_HEADING}\n{}\n",
        request.job_description, request.resume
    );

    GenerationPrompt {
        instruction,
        content,
    }
}
