//! In-process store with the same revision rules as the GitHub store.
//!
//! Revisions are git blob shas of the content, so they match what GitHub
//! would report for the same bytes. Listing order is creation order.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use sha1::{Digest, Sha1};

use crate::error::StorageError;
use crate::store::{ContentStore, StoreEntry};

struct StoredFile {
    path: String,
    body: Vec<u8>,
    revision: String,
}

#[derive(Default)]
pub struct MemoryStore {
    files: Mutex<Vec<StoredFile>>,
}

/// Git's blob id: `sha1("blob <len>\0" + body)`.
pub fn blob_sha(body: &[u8]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(format!("blob {}\0", body.len()).as_bytes());
    hasher.update(body);
    format!("{:x}", hasher.finalize())
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn files(&self) -> MutexGuard<'_, Vec<StoredFile>> {
        self.files.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn get(&self, path: &str) -> Result<Option<String>, StorageError> {
        Ok(self
            .files()
            .iter()
            .find(|f| f.path == path)
            .map(|f| f.revision.clone()))
    }

    async fn read(&self, path: &str) -> Result<Vec<u8>, StorageError> {
        self.files()
            .iter()
            .find(|f| f.path == path)
            .map(|f| f.body.clone())
            .ok_or_else(|| StorageError::NotFound {
                path: path.to_string(),
            })
    }

    async fn put(
        &self,
        path: &str,
        body: Vec<u8>,
        revision: Option<&str>,
    ) -> Result<String, StorageError> {
        if path.is_empty() || path.contains('/') {
            return Err(StorageError::InvalidPath(path.to_string()));
        }

        let new_revision = blob_sha(&body);
        let mut files = self.files();
        let index = files.iter().position(|f| f.path == path);

        match (index, revision) {
            (None, None) => files.push(StoredFile {
                path: path.to_string(),
                body,
                revision: new_revision.clone(),
            }),
            (Some(i), Some(expected)) if files[i].revision == expected => {
                files[i].body = body;
                files[i].revision = new_revision.clone();
            }
            // Creating over an existing file, or updating from a stale or
            // unknown revision.
            _ => {
                return Err(StorageError::Conflict {
                    path: path.to_string(),
                });
            }
        }

        Ok(new_revision)
    }

    async fn list(&self) -> Result<Vec<StoreEntry>, StorageError> {
        Ok(self
            .files()
            .iter()
            .map(|f| StoreEntry {
                name: f.path.clone(),
                revision: f.revision.clone(),
                is_file: true,
            })
            .collect())
    }
}
