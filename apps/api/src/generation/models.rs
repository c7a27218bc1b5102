//! Request and result records exchanged with the client and the model.
//!
//! Result types are lenient: missing or `null` fields fall back to empty
//! values and unknown keys are carried through untouched, so whatever shape
//! the model returns reaches the client as long as it is a JSON object.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

pub const MAX_INPUT_CHARS: usize = 20_000;
pub const ALLOWED_QUESTION_COUNTS: [u32; 3] = [10, 15, 20];
pub const TELL_ME_ABOUT_YOURSELF: &str = "Tell me about yourself";

// ────────────────────────────────────────────────────────────────────────────
// Request
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoleLevel {
    Junior,
    #[default]
    Mid,
    Senior,
    Lead,
}

impl RoleLevel {
    pub const ALL: [RoleLevel; 4] = [
        RoleLevel::Junior,
        RoleLevel::Mid,
        RoleLevel::Senior,
        RoleLevel::Lead,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RoleLevel::Junior => "Junior",
            RoleLevel::Mid => "Mid",
            RoleLevel::Senior => "Senior",
            RoleLevel::Lead => "Lead",
        }
    }

    /// Label shown in the form's select control.
    pub fn label(self) -> &'static str {
        match self {
            RoleLevel::Junior => "Junior",
            RoleLevel::Mid => "Mid-Level",
            RoleLevel::Senior => "Senior",
            RoleLevel::Lead => "Lead / Staff",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == value)
    }
}

impl fmt::Display for RoleLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterviewType {
    General,
    Technical,
    #[default]
    Mixed,
}

impl InterviewType {
    pub const ALL: [InterviewType; 3] = [
        InterviewType::General,
        InterviewType::Technical,
        InterviewType::Mixed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            InterviewType::General => "General",
            InterviewType::Technical => "Technical",
            InterviewType::Mixed => "Mixed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InterviewType::General => "General / Behavioral",
            InterviewType::Technical => "Technical",
            InterviewType::Mixed => "Mixed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

impl fmt::Display for InterviewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated request. Only `validation::validate_request` builds one from
/// untrusted input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub job_description: String,
    pub resume: String,
    pub target_role_level: RoleLevel,
    pub interview_type: InterviewType,
    pub num_questions: u32,
}

// ────────────────────────────────────────────────────────────────────────────
// Result
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QaItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub question: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub answer: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QaSection {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<QaItem>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl QaSection {
    /// Description, treating an empty string as absent.
    pub fn description(&self) -> Option<&str> {
        non_empty(self.description.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TellMeAboutYourself {
    #[serde(default = "default_tmay_question", deserialize_with = "null_as_tmay_question")]
    pub question: String,
    /// ~2 minutes spoken.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_answer: Option<String>,
    /// ~45 seconds spoken.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_answer: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for TellMeAboutYourself {
    fn default() -> Self {
        Self {
            question: default_tmay_question(),
            long_answer: None,
            short_answer: None,
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub role_summary: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub candidate_summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tell_me_about_yourself: Option<TellMeAboutYourself>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sections: Vec<QaSection>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub suggestions_for_interviewer_questions: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GenerationResult {
    pub fn long_answer(&self) -> Option<&str> {
        non_empty(
            self.tell_me_about_yourself
                .as_ref()
                .and_then(|t| t.long_answer.as_deref()),
        )
    }

    pub fn short_answer(&self) -> Option<&str> {
        non_empty(
            self.tell_me_about_yourself
                .as_ref()
                .and_then(|t| t.short_answer.as_deref()),
        )
    }

    /// Q&A entries across all sections. The model is asked for exactly
    /// `numQuestions`; nothing enforces it.
    pub fn total_items(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn default_tmay_question() -> String {
    TELL_ME_ABOUT_YOURSELF.to_string()
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_tmay_question<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_tmay_question))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_role_level_and_interview_type_parse_exact_names() {
        assert_eq!(RoleLevel::parse("Senior"), Some(RoleLevel::Senior));
        assert_eq!(RoleLevel::parse("senior"), None);
        assert_eq!(InterviewType::parse("Technical"), Some(InterviewType::Technical));
        assert_eq!(InterviewType::parse("Behavioral"), None);
    }

    #[test]
    fn test_form_defaults_are_mid_and_mixed() {
        assert_eq!(RoleLevel::default(), RoleLevel::Mid);
        assert_eq!(InterviewType::default(), InterviewType::Mixed);
    }

    #[test]
    fn test_request_uses_camel_case_on_the_wire() {
        let request = GenerationRequest {
            job_description: "JD".to_string(),
            resume: "CV".to_string(),
            target_role_level: RoleLevel::Lead,
            interview_type: InterviewType::General,
            num_questions: 20,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["jobDescription"], "JD");
        assert_eq!(value["targetRoleLevel"], "Lead");
        assert_eq!(value["interviewType"], "General");
        assert_eq!(value["numQuestions"], 20);
    }

    #[test]
    fn test_full_result_deserializes() {
        let value = json!({
            "roleSummary": "Backend role",
            "candidateSummary": "Strong fit",
            "tellMeAboutYourself": {
                "question": "Tell me about yourself",
                "longAnswer": "Long version",
                "shortAnswer": "Short version"
            },
            "sections": [
                {
                    "title": "Technical",
                    "description": "Core skills",
                    "items": [
                        {"question": "Q1", "answer": "A1", "tags": ["rust", "async"]},
                        {"question": "Q2", "answer": "A2", "tags": []}
                    ]
                },
                {
                    "title": "Experience",
                    "items": [{"question": "Q3", "answer": "A3", "tags": ["leadership"]}]
                }
            ],
            "suggestionsForInterviewerQuestions": ["What does success look like?"]
        });

        let result: GenerationResult = serde_json::from_value(value).unwrap();
        assert_eq!(result.role_summary, "Backend role");
        assert_eq!(result.long_answer(), Some("Long version"));
        assert_eq!(result.short_answer(), Some("Short version"));
        assert_eq!(result.sections.len(), 2);
        assert_eq!(result.sections[1].description(), None);
        assert_eq!(result.sections[0].items[0].tags, vec!["rust", "async"]);
        assert_eq!(result.total_items(), 3);
        assert!(result.extra.is_empty());
    }

    #[test]
    fn test_missing_and_null_fields_degrade_to_empty() {
        let value = json!({
            "roleSummary": null,
            "tellMeAboutYourself": {"longAnswer": ""},
            "sections": [{"title": "General", "items": [{"question": "Q", "tags": null}]}]
        });

        let result: GenerationResult = serde_json::from_value(value).unwrap();
        assert_eq!(result.role_summary, "");
        assert_eq!(result.candidate_summary, "");
        assert_eq!(result.long_answer(), None);
        assert_eq!(result.short_answer(), None);
        assert_eq!(
            result.tell_me_about_yourself.as_ref().unwrap().question,
            TELL_ME_ABOUT_YOURSELF
        );
        assert!(result.sections[0].items[0].tags.is_empty());
        assert!(result.suggestions_for_interviewer_questions.is_empty());
    }

    #[test]
    fn test_unknown_keys_pass_through() {
        let value = json!({
            "roleSummary": "R",
            "confidence": 0.9,
            "sections": [{"title": "T", "items": [], "difficulty": "hard"}]
        });

        let result: GenerationResult = serde_json::from_value(value).unwrap();
        let back = serde_json::to_value(&result).unwrap();
        assert_eq!(back["confidence"], 0.9);
        assert_eq!(back["sections"][0]["difficulty"], "hard");
    }

    #[test]
    fn test_wrong_types_are_rejected() {
        let value = json!({"sections": "not a list"});
        assert!(serde_json::from_value::<GenerationResult>(value).is_err());

        assert!(serde_json::from_value::<GenerationResult>(json!([1, 2, 3])).is_err());
    }
}
