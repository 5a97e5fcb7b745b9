use serde::{Deserialize, Serialize};

/// A tool file that lives in the hosting branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishedTool {
    pub name: String,
    pub url: String,
    /// Content hash reported by the hosting repository.
    pub sha: String,
}
