//! Form state for the interview prep page.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::generation::models::{GenerationResult, InterviewType, RoleLevel};

pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to generate Q&A";

/// Raw field values as submitted by the browser (form-urlencoded).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormFields {
    pub job_description: String,
    pub resume: String,
    pub target_role_level: String,
    pub interview_type: String,
    pub num_questions: String,
}

impl Default for FormFields {
    fn default() -> Self {
        Self {
            job_description: String::new(),
            resume: String::new(),
            target_role_level: RoleLevel::default().as_str().to_string(),
            interview_type: InterviewType::default().as_str().to_string(),
            num_questions: "15".to_string(),
        }
    }
}

impl FormFields {
    /// GenerationRequest-shaped JSON payload. `numQuestions` becomes a number
    /// when it parses as one; otherwise it stays a string and fails validation.
    pub fn to_payload(&self) -> Value {
        let num_questions = self
            .num_questions
            .trim()
            .parse::<u64>()
            .map(Value::from)
            .unwrap_or_else(|_| Value::from(self.num_questions.clone()));

        json!({
            "jobDescription": self.job_description,
            "resume": self.resume,
            "targetRoleLevel": self.target_role_level,
            "interviewType": self.interview_type,
            "numQuestions": num_questions,
        })
    }
}

/// What the page shows: the fields, an in-flight flag, and at most one of
/// an error message or a result.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub fields: FormFields,
    pub is_loading: bool,
    pub error: Option<String>,
    pub result: Option<GenerationResult>,
}

impl FormState {
    pub fn with_fields(fields: FormFields) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    /// Starts a submission and returns the payload to send. A submission
    /// while one is in flight is refused with `None`.
    pub fn begin_submit(&mut self) -> Option<Value> {
        if self.is_loading {
            return None;
        }
        self.is_loading = true;
        self.error = None;
        self.result = None;
        Some(self.fields.to_payload())
    }

    pub fn finish_success(&mut self, result: GenerationResult) {
        self.is_loading = false;
        self.error = None;
        self.result = Some(result);
    }

    /// Records a failure, showing the server message or the generic fallback.
    pub fn finish_failure(&mut self, message: Option<&str>) {
        self.is_loading = false;
        self.result = None;
        let message = message
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(FALLBACK_ERROR_MESSAGE);
        self.error = Some(message.to_string());
    }

    pub fn can_submit(&self) -> bool {
        !self.is_loading
    }
}
