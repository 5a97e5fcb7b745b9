use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("file not found: {path}")]
    NotFound { path: String },

    #[error("revision conflict for {path}: the file changed since it was read")]
    Conflict { path: String },

    #[error("invalid path: {0}")]
    InvalidPath(String),

    #[error("hosting API request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("hosting API returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected hosting API response: {0}")]
    Decode(String),

    #[error("store configuration error: {0}")]
    Config(String),
}
