//! Plain-text export of a `GenerationResult`.
//!
//! `render_export` is pure: the same result and date always give the same bytes.

use chrono::NaiveDate;

use crate::generation::models::GenerationResult;

const RULE: &str = "==================================================";
const SECTION_RULE: &str = "--------------------------------------------------";
const NOT_AVAILABLE: &str = "N/A";

/// `interview-prep-qa-<YYYY-MM-DD>.txt`
pub fn export_filename(date: NaiveDate) -> String {
    format!("interview-prep-qa-{}.txt", date.format("%Y-%m-%d"))
}

/// Flattens a result into the export document. Lines are joined with `\n`,
/// without a trailing newline.
pub fn render_export(result: &GenerationResult, date: NaiveDate) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("INTERVIEW PREP Q&A - {}", date.format("%Y-%m-%d")));
    lines.push(RULE.to_string());
    lines.push(String::new());

    lines.push("[ROLE SUMMARY]".to_string());
    lines.push(result.role_summary.clone());
    lines.push(String::new());
    lines.push("[CANDIDATE SUMMARY]".to_string());
    lines.push(result.candidate_summary.clone());
    lines.push(String::new());
    lines.push(RULE.to_string());
    lines.push(String::new());

    lines.push("[TELL ME ABOUT YOURSELF - LONG]".to_string());
    lines.push(result.long_answer().unwrap_or(NOT_AVAILABLE).to_string());
    lines.push(String::new());
    lines.push("[TELL ME ABOUT YOURSELF - SHORT]".to_string());
    lines.push(result.short_answer().unwrap_or(NOT_AVAILABLE).to_string());
    lines.push(String::new());
    lines.push(RULE.to_string());
    lines.push(String::new());

    for section in &result.sections {
        lines.push(format!("[SECTION: {}]", section.title.to_uppercase()));
        if let Some(description) = section.description() {
            lines.push(description.to_string());
        }
        lines.push(String::new());

        // Numbering restarts in every section.
        for (idx, item) in section.items.iter().enumerate() {
            lines.push(format!("Q{}: {}", idx + 1, item.question));
            lines.push(format!("A: {}", item.answer));
            lines.push(format!("Tags: {}", item.tags.join(", ")));
            lines.push(String::new());
        }

        lines.push(SECTION_RULE.to_string());
        lines.push(String::new());
    }

    lines.push("[QUESTIONS TO ASK THE INTERVIEWER]".to_string());
    for (idx, question) in result.suggestions_for_interviewer_questions.iter().enumerate() {
        lines.push(format!("{}. {}", idx + 1, question));
    }

    lines.join("\n")
}
