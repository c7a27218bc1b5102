//! Request Validator — turns an untrusted JSON payload into a `GenerationRequest`.
//!
//! Pure: no I/O, no logging. Text is passed through unchanged (no trimming).

use serde_json::Value;
use thiserror::Error;

use crate::generation::models::{
    GenerationRequest, InterviewType, RoleLevel, ALLOWED_QUESTION_COUNTS, MAX_INPUT_CHARS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Job description is required and must be under 20k characters.")]
    MissingOrOversizedJobDescription,

    #[error("Resume is required and must be under 20k characters.")]
    MissingOrOversizedResume,

    #[error("Number of questions must be 10, 15, or 20.")]
    InvalidQuestionCount,

    #[error("Target role level must be one of Junior, Mid, Senior, or Lead.")]
    InvalidRoleLevel,

    #[error("Interview type must be one of General, Technical, or Mixed.")]
    InvalidInterviewType,

    #[error("Request body must be a JSON object.")]
    InvalidBody,
}

impl ValidationError {
    pub fn code(self) -> &'static str {
        match self {
            ValidationError::MissingOrOversizedJobDescription => {
                "missing_or_oversized_job_description"
            }
            ValidationError::MissingOrOversizedResume => "missing_or_oversized_resume",
            ValidationError::InvalidQuestionCount => "invalid_question_count",
            ValidationError::InvalidRoleLevel => "invalid_role_level",
            ValidationError::InvalidInterviewType => "invalid_interview_type",
            ValidationError::InvalidBody => "invalid_body",
        }
    }
}

/// Validates a payload and returns the normalized request, or the first
/// failing constraint.
///
/// Check order: job description, resume, question count, role level,
/// interview type.
pub fn validate_request(payload: &Value) -> Result<GenerationRequest, ValidationError> {
    if let Some(first) = validation_failures(payload).into_iter().next() {
        return Err(first);
    }

    // All checks passed, so every accessor below succeeds.
    let (Some(job_description), Some(resume), Some(num_questions), Some(level), Some(kind)) = (
        bounded_text(payload, "jobDescription"),
        bounded_text(payload, "resume"),
        question_count(payload),
        role_level(payload),
        interview_type(payload),
    ) else {
        return Err(ValidationError::InvalidBody);
    };

    Ok(GenerationRequest {
        job_description: job_description.to_string(),
        resume: resume.to_string(),
        target_role_level: level,
        interview_type: kind,
        num_questions,
    })
}

/// Every failing constraint, in check order. Empty means the payload is valid.
pub fn validation_failures(payload: &Value) -> Vec<ValidationError> {
    if !payload.is_object() {
        return vec![ValidationError::InvalidBody];
    }

    let mut failures = Vec::new();
    if bounded_text(payload, "jobDescription").is_none() {
        failures.push(ValidationError::MissingOrOversizedJobDescription);
    }
    if bounded_text(payload, "resume").is_none() {
        failures.push(ValidationError::MissingOrOversizedResume);
    }
    if question_count(payload).is_none() {
        failures.push(ValidationError::InvalidQuestionCount);
    }
    if role_level(payload).is_none() {
        failures.push(ValidationError::InvalidRoleLevel);
    }
    if interview_type(payload).is_none() {
        failures.push(ValidationError::InvalidInterviewType);
    }
    failures
}

/// A non-empty string of at most `MAX_INPUT_CHARS` characters.
fn bounded_text<'a>(payload: &'a Value, key: &str) -> Option<&'a str> {
    payload
        .get(key)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty() && text.chars().count() <= MAX_INPUT_CHARS)
}

/// Accepts `15` and `15.0`, nothing else (strings included).
fn question_count(payload: &Value) -> Option<u32> {
    let n = payload.get("numQuestions")?.as_f64()?;
    ALLOWED_QUESTION_COUNTS
        .into_iter()
        .find(|&allowed| f64::from(allowed) == n)
}

fn role_level(payload: &Value) -> Option<RoleLevel> {
    payload
        .get("targetRoleLevel")
        .and_then(Value::as_str)
        .and_then(RoleLevel::parse)
}

fn interview_type(payload: &Value) -> Option<InterviewType> {
    payload
        .get("interviewType")
        .and_then(Value::as_str)
        .and_then(InterviewType::parse)
}
