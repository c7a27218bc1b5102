//! Test doubles and canned model output shared by the unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use crate::generation::models::{GenerationRequest, InterviewType, RoleLevel};
use crate::llm_client::{GenerationPrompt, LlmError, TextGenerator};

pub fn sample_request() -> GenerationRequest {
    GenerationRequest {
        job_description: "Backend engineer role building payment APIs in Rust.".to_string(),
        resume: "5 years experience with distributed systems and Postgres.".to_string(),
        target_role_level: RoleLevel::Senior,
        interview_type: InterviewType::Technical,
        num_questions: 10,
    }
}

/// A well-formed model reply with `total` Q&A items split over two sections.
pub fn sample_result_json(total: usize) -> String {
    let technical = total.div_ceil(2);
    let item = |n: usize| {
        json!({
            "question": format!("Question {n}?"),
            "answer": format!("Answer {n}."),
            "tags": ["backend", format!("q{n}")]
        })
    };

    json!({
        "roleSummary": "Backend engineer owning payment APIs.",
        "candidateSummary": "Five years of distributed systems work maps well.",
        "tellMeAboutYourself": {
            "question": "Tell me about yourself",
            "longAnswer": "I have spent five years building backend systems...",
            "shortAnswer": "Backend engineer focused on reliable APIs."
        },
        "sections": [
            {
                "title": "Technical",
                "description": "Core engineering depth",
                "items": (1..=technical).map(item).collect::<Vec<_>>()
            },
            {
                "title": "Experience",
                "items": (technical + 1..=total).map(item).collect::<Vec<_>>()
            }
        ],
        "suggestionsForInterviewerQuestions": [
            "How is on-call organized?",
            "What does success look like in six months?",
            "Which services would I own first?"
        ]
    })
    .to_string()
}

enum FakeReply {
    Text(String),
    ApiError(u16, String),
}

/// Records every call and answers with a fixed reply.
pub struct FakeGenerator {
    reply: FakeReply,
    calls: AtomicUsize,
    last: Mutex<Option<(String, GenerationPrompt)>>,
}

impl FakeGenerator {
    pub fn text(text: impl Into<String>) -> Self {
        Self::with_reply(FakeReply::Text(text.into()))
    }

    pub fn api_error(status: u16, message: &str) -> Self {
        Self::with_reply(FakeReply::ApiError(status, message.to_string()))
    }

    fn with_reply(reply: FakeReply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_api_key(&self) -> Option<String> {
        self.last.lock().unwrap().as_ref().map(|(key, _)| key.clone())
    }

    pub fn last_prompt(&self) -> Option<GenerationPrompt> {
        self.last.lock().unwrap().as_ref().map(|(_, p)| p.clone())
    }
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(&self, api_key: &str, prompt: &GenerationPrompt) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some((api_key.to_string(), prompt.clone()));

        match &self.reply {
            FakeReply::Text(text) => Ok(text.clone()),
            FakeReply::ApiError(status, message) => Err(LlmError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}
