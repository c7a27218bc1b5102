// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Appended to every prompt that expects structured output.
pub const JSON_ONLY_INSTRUCTION: &str = "\
  - Return ONLY valid JSON matching the specified structure. No markdown formatting.
  - Do NOT include any text outside the JSON object.";

/// Guards against invented facts in candidate-facing text.
pub const NO_HALLUCINATION_INSTRUCTION: &str = "\
  - Do NOT hallucinate companies, projects, or skills not present in the resume or implied by the JD.";
