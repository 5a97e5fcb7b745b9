use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("invalid URL {0}")]
    InvalidUrl(String),

    #[error("request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("readability failed: {0}")]
    Readability(String),

    #[error("no readable content found at {url}")]
    EmptyContent { url: String },
}
