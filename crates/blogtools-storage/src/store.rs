use async_trait::async_trait;

use crate::error::StorageError;

/// One entry of the hosting branch root listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreEntry {
    pub name: String,
    /// Revision marker (git blob sha).
    pub revision: String,
    pub is_file: bool,
}

/// A versioned file store with optimistic concurrency.
///
/// Updates must carry the revision they were based on. The store rejects a
/// write whose revision is stale with [`StorageError::Conflict`]; nothing
/// here retries.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Current revision of `path`, or `None` if it does not exist.
    async fn get(&self, path: &str) -> Result<Option<String>, StorageError>;

    /// Contents of `path`.
    async fn read(&self, path: &str) -> Result<Vec<u8>, StorageError>;

    /// Create `path` (`revision` is `None`) or update it. Returns the new
    /// revision.
    async fn put(
        &self,
        path: &str,
        body: Vec<u8>,
        revision: Option<&str>,
    ) -> Result<String, StorageError>;

    /// Entries at the root, in the store's own order.
    async fn list(&self) -> Result<Vec<StoreEntry>, StorageError>;
}
