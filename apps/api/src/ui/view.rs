//! HTML rendering for the interview prep page.
//!
//! Everything user- or model-supplied goes through `escape_html`.

use crate::generation::models::{GenerationResult, InterviewType, RoleLevel, ALLOWED_QUESTION_COUNTS};
use crate::ui::form::FormState;

pub const NOT_AVAILABLE: &str = "Not available.";

/// Delay before scrolling to freshly rendered results.
pub const SCROLL_DELAY_MS: u32 = 100;

const STYLE: &str = "
body { font-family: system-ui, sans-serif; max-width: 64rem; margin: 0 auto; padding: 2rem 1rem; color: #1f2937; }
textarea { width: 100%; height: 16rem; box-sizing: border-box; }
.grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr)); gap: 1.5rem; }
.error { padding: 1rem; background: #fef2f2; color: #dc2626; border-radius: .5rem; text-align: center; }
.card { padding: 1.5rem; border: 1px solid #e5e7eb; border-radius: .75rem; }
.tag { display: inline-block; padding: .1rem .5rem; margin-right: .3rem; background: #f3f4f6; border-radius: 999px; font-size: .75rem; }
.loading[hidden] { display: none; }
";

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Full page: header, form, inline error, and results when present.
pub fn render_page(state: &FormState) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>Interview Prep Generator</title>\n");
    html.push_str(&format!("<style>{STYLE}</style>\n</head>\n<body>\n"));

    html.push_str("<header>\n<h1>Interview Prep Generator</h1>\n");
    html.push_str(
        "<p>Paste your job description and resume below to get tailored interview questions, \
         answers, and a &quot;Tell me about yourself&quot; script.</p>\n</header>\n",
    );

    html.push_str(&render_form(state));

    if let Some(result) = &state.result {
        html.push_str(&render_results(result));
    }

    html.push_str(&render_script());
    html.push_str("</body>\n</html>\n");
    html
}

fn render_form(state: &FormState) -> String {
    let fields = &state.fields;
    let mut html = String::new();

    html.push_str("<form id=\"prep-form\" method=\"post\" action=\"/\">\n<div class=\"grid\">\n");
    html.push_str(&format!(
        "<label>Job Description *<textarea name=\"jobDescription\" required \
         placeholder=\"Paste the full job description here...\">{}</textarea></label>\n",
        escape_html(&fields.job_description)
    ));
    html.push_str(&format!(
        "<label>Resume *<textarea name=\"resume\" required \
         placeholder=\"Paste your resume text here...\">{}</textarea></label>\n",
        escape_html(&fields.resume)
    ));
    html.push_str("</div>\n<div class=\"grid\">\n");

    html.push_str("<label>Target Role Level<select name=\"targetRoleLevel\">");
    for level in RoleLevel::ALL {
        html.push_str(&option(
            level.as_str(),
            level.label(),
            fields.target_role_level == level.as_str(),
        ));
    }
    html.push_str("</select></label>\n");

    html.push_str("<label>Interview Type<select name=\"interviewType\">");
    for kind in InterviewType::ALL {
        html.push_str(&option(
            kind.as_str(),
            kind.label(),
            fields.interview_type == kind.as_str(),
        ));
    }
    html.push_str("</select></label>\n");

    html.push_str("<fieldset><legend>Number of Questions</legend>");
    for count in ALLOWED_QUESTION_COUNTS {
        let checked = if fields.num_questions.trim() == count.to_string() {
            " checked"
        } else {
            ""
        };
        html.push_str(&format!(
            "<label><input type=\"radio\" name=\"numQuestions\" value=\"{count}\"{checked}> {count}</label>"
        ));
    }
    html.push_str("</fieldset>\n</div>\n");

    let disabled = if state.can_submit() { "" } else { " disabled" };
    let hidden = if state.is_loading { "" } else { " hidden" };
    html.push_str(&format!(
        "<button type=\"submit\" id=\"submit\"{disabled}>Generate Q&amp;A</button>\n\
         <span class=\"loading\" id=\"loading\"{hidden}>Generating Interview Plan...</span>\n"
    ));

    if let Some(error) = &state.error {
        html.push_str(&format!(
            "<div class=\"error\" role=\"alert\">{}</div>\n",
            escape_html(error)
        ));
    }

    html.push_str("</form>\n");
    html
}

fn option(value: &str, label: &str, selected: bool) -> String {
    let selected = if selected { " selected" } else { "" };
    format!("<option value=\"{value}\"{selected}>{label}</option>")
}

/// Results block: summaries, both scripts, sections with tags, and the
/// interviewer questions, plus the export control.
pub fn render_results(result: &GenerationResult) -> String {
    let mut html = String::new();

    html.push_str("<section id=\"results\">\n<h2>Your Interview Plan</h2>\n");
    if let Ok(json) = serde_json::to_string(result) {
        html.push_str(&format!(
            "<form method=\"post\" action=\"/export\">\
             <input type=\"hidden\" name=\"result\" value=\"{}\">\
             <button type=\"submit\">Download .txt</button></form>\n",
            escape_html(&json)
        ));
    }

    html.push_str("<div class=\"grid\">\n");
    html.push_str(&format!(
        "<div class=\"card\"><h3>Role Summary</h3><p>{}</p></div>\n",
        escape_html(&result.role_summary)
    ));
    html.push_str(&format!(
        "<div class=\"card\"><h3>Candidate Fit</h3><p>{}</p></div>\n",
        escape_html(&result.candidate_summary)
    ));
    html.push_str("</div>\n");

    html.push_str("<div class=\"card\">\n<h3>Tell Me About Yourself</h3>\n");
    html.push_str(&format!(
        "<h4>Long Version (~2 min)</h4><p style=\"white-space: pre-wrap\">{}</p>\n",
        escape_html(result.long_answer().unwrap_or(NOT_AVAILABLE))
    ));
    html.push_str(&format!(
        "<h4>Short Version (~45 sec)</h4><p style=\"white-space: pre-wrap\">{}</p>\n",
        escape_html(result.short_answer().unwrap_or(NOT_AVAILABLE))
    ));
    html.push_str("</div>\n");

    for section in &result.sections {
        html.push_str(&format!(
            "<div class=\"section\">\n<h3>{}</h3>\n",
            escape_html(&section.title)
        ));
        if let Some(description) = section.description() {
            html.push_str(&format!("<p>{}</p>\n", escape_html(description)));
        }
        for item in &section.items {
            html.push_str(&format!(
                "<div class=\"card\"><h4>{}</h4><p>{}</p><div>",
                escape_html(&item.question),
                escape_html(&item.answer)
            ));
            for tag in &item.tags {
                html.push_str(&format!("<span class=\"tag\">{}</span>", escape_html(tag)));
            }
            html.push_str("</div></div>\n");
        }
        html.push_str("</div>\n");
    }

    html.push_str("<div class=\"card\">\n<h3>Questions to Ask the Interviewer</h3>\n<ol>\n");
    for question in &result.suggestions_for_interviewer_questions {
        html.push_str(&format!("<li>{}</li>\n", escape_html(question)));
    }
    html.push_str("</ol>\n</div>\n</section>\n");

    html
}

/// Disables the submit button and shows the loading indicator while the
/// request is in flight; scrolls to results once rendered.
fn render_script() -> String {
    format!(
        "<script>
document.getElementById('prep-form').addEventListener('submit', function () {{
  document.getElementById('submit').disabled = true;
  document.getElementById('loading').hidden = false;
}});
var results = document.getElementById('results');
if (results) {{
  setTimeout(function () {{ results.scrollIntoView({{ behavior: 'smooth' }}); }}, {SCROLL_DELAY_MS});
}}
</script>\n"
    )
}
