// Interview Q&A generation: request validation, the single model call,
// and the plain-text export of its result.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod export;
pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod validation;

#[cfg(test)]
pub mod fixtures;
