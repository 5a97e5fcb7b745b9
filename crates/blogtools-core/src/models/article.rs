use serde::{Deserialize, Serialize};

/// The readable part of a fetched page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    /// Plain text of the article body.
    pub content: String,
    /// Cleaned article markup.
    pub html: String,
}
