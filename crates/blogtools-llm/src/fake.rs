//! A scripted [`Completion`] for tests: yields queued replies in order and
//! records every prompt it was given.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;

use crate::completion::{Completion, Prompt};
use crate::error::LlmError;

#[derive(Default)]
struct ScriptState {
    replies: VecDeque<Result<String, LlmError>>,
    prompts: Vec<Prompt>,
}

#[derive(Default)]
pub struct ScriptedCompletion {
    state: Mutex<ScriptState>,
}

impl ScriptedCompletion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful reply.
    pub fn reply(self, text: impl Into<String>) -> Self {
        self.push(Ok(text.into()));
        self
    }

    /// Queue a failure.
    pub fn fail(self, error: LlmError) -> Self {
        self.push(Err(error));
        self
    }

    pub fn push(&self, reply: Result<String, LlmError>) {
        self.lock().replies.push_back(reply);
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<Prompt> {
        self.lock().prompts.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ScriptState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl Completion for ScriptedCompletion {
    async fn complete(&self, prompt: &Prompt) -> Result<String, LlmError> {
        let mut state = self.lock();
        state.prompts.push(prompt.clone());
        state.replies.pop_front().unwrap_or_else(|| {
            Err(LlmError::ResponseParse(
                "no scripted reply left".to_string(),
            ))
        })
    }
}
