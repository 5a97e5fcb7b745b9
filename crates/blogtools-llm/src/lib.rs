//! blogtools-llm
//!
//! Language-model access: one completion capability, an OpenAI-compatible
//! client for it, and the prompts used by the tool workflow.

pub mod completion;
pub mod error;
pub mod fake;
pub mod generation;
pub mod ideas;
pub mod openai;
pub mod prompts;
