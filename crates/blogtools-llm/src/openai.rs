//! OpenAI-compatible chat completions client.
//!
//! Only the non-streaming `POST {base}/chat/completions` call is used. Any
//! server speaking that shape (OpenAI, Azure-style proxies, local gateways)
//! works by pointing `base_url` at it.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::completion::{Completion, Prompt};
use crate::error::LlmError;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4";

#[derive(Debug, Clone, Default)]
pub struct OpenAiOptions {
    pub api_key: String,
    /// Falls back to [`DEFAULT_MODEL`].
    pub model: Option<String>,
    /// Falls back to [`DEFAULT_BASE_URL`].
    pub base_url: Option<String>,
    pub client: Option<Client>,
}

pub struct OpenAiClient {
    http: Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl OpenAiClient {
    pub fn new(options: OpenAiOptions) -> Self {
        let OpenAiOptions {
            api_key,
            model,
            base_url,
            client,
        } = options;

        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Self {
            http: client.unwrap_or_default(),
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Completion for OpenAiClient {
    async fn complete(&self, prompt: &Prompt) -> Result<String, LlmError> {
        let mut messages = vec![ChatMessage {
            role: "system",
            content: &prompt.system,
        }];
        if let Some(user) = &prompt.user {
            messages.push(ChatMessage {
                role: "user",
                content: user,
            });
        }

        let body = ChatRequest {
            model: &self.model,
            messages,
        };

        info!(model = %self.model, "requesting chat completion");

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LlmError::Status {
                status: status.as_u16(),
                body: response.text().await.unwrap_or_default(),
            });
        }

        let parsed: ChatResponse = response.json().await?;
        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::ResponseParse("no choices in response".to_string()))?;

        // A null content (e.g. a refusal) is treated as empty text.
        Ok(choice.message.content.unwrap_or_default())
    }
}
