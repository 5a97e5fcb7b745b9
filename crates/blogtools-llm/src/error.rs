use thiserror::Error;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("model request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("model API returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("response parsing failed: {0}")]
    ResponseParse(String),
}
