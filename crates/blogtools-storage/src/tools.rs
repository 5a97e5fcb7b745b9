//! Publishing and listing tools on top of a [`ContentStore`].

use tracing::{info, warn};

use blogtools_core::models::tool::PublishedTool;
use blogtools_core::paths;

use crate::error::StorageError;
use crate::store::ContentStore;

/// Write `html` to `filename` at the store root and return its public URL.
///
/// `filename` must already be normalized (see
/// [`blogtools_core::paths::tool_filename`]). An existing file is updated
/// using the revision read just before the write; a concurrent publisher
/// in between makes the write fail with [`StorageError::Conflict`].
pub async fn publish_tool(
    store: &dyn ContentStore,
    public_base_url: &str,
    filename: &str,
    html: &str,
) -> Result<PublishedTool, StorageError> {
    // Best effort: a failed lookup is treated as "create".
    let revision = match store.get(filename).await {
        Ok(revision) => revision,
        Err(e) => {
            warn!(filename, error = %e, "revision lookup failed, creating");
            None
        }
    };

    let sha = store
        .put(filename, html.as_bytes().to_vec(), revision.as_deref())
        .await?;

    let url = paths::public_url(public_base_url, filename);
    info!(filename, url = %url, updated = revision.is_some(), "tool published");

    Ok(PublishedTool {
        name: filename.to_string(),
        url,
        sha,
    })
}

/// Published tools, most recent first.
///
/// The store has no timestamps, so recency is approximated by reversing
/// its listing order.
pub async fn recent_tools(
    store: &dyn ContentStore,
    public_base_url: &str,
) -> Result<Vec<PublishedTool>, StorageError> {
    let entries = store.list().await?;

    let mut tools: Vec<PublishedTool> = entries
        .into_iter()
        .filter(|entry| entry.is_file && paths::is_tool_file(&entry.name))
        .map(|entry| PublishedTool {
            url: paths::public_url(public_base_url, &entry.name),
            name: entry.name,
            sha: entry.revision,
        })
        .collect();
    tools.reverse();

    Ok(tools)
}
