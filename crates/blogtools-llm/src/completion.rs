use async_trait::async_trait;

use crate::error::LlmError;

/// A single-shot prompt: a system instruction and an optional user turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: Option<String>,
}

impl Prompt {
    pub fn system(system: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: None,
        }
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }
}

/// Turns a prompt into model text.
///
/// Every model-driven handler goes through this, so tests can swap in
/// [`crate::fake::ScriptedCompletion`].
#[async_trait]
pub trait Completion: Send + Sync {
    async fn complete(&self, prompt: &Prompt) -> Result<String, LlmError>;
}
