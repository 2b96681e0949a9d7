// Technique generation: prompt construction, model invocation, shape
// validation, and the fixed fallback plan.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod generator;
pub mod handlers;
pub mod plan;
pub mod prompts;
