//! GitHub Contents API store.
//!
//! Files are read and written on one branch (typically `gh-pages`). The
//! blob sha GitHub reports is the revision marker; GitHub itself rejects
//! an update whose sha is stale with `409 Conflict`.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::info;
use url::Url;

use crate::error::StorageError;
use crate::store::{ContentStore, StoreEntry};

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_BRANCH: &str = "gh-pages";

const API_VERSION: &str = "2022-11-28";

#[derive(Debug, Clone)]
pub struct GitHubConfig {
    pub token: String,
    pub owner: String,
    pub repo: String,
    pub branch: String,
    pub api_url: String,
}

pub struct GitHubStore {
    http: Client,
    config: GitHubConfig,
}

#[derive(Deserialize)]
struct FileContents {
    sha: String,
    #[serde(default)]
    content: Option<String>,
}

#[derive(Deserialize)]
struct DirEntry {
    name: String,
    sha: String,
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Serialize)]
struct PutRequest<'a> {
    message: String,
    content: String,
    branch: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<&'a str>,
}

#[derive(Deserialize)]
struct PutResponse {
    content: FileContents,
}

impl GitHubStore {
    pub fn new(config: GitHubConfig) -> Result<Self, StorageError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert("x-github-api-version", HeaderValue::from_static(API_VERSION));
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.token))
            .map_err(|e| StorageError::Config(format!("invalid token: {e}")))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        // GitHub rejects requests without a user agent.
        let http = Client::builder()
            .user_agent(concat!("blogtools/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &GitHubConfig {
        &self.config
    }

    /// `{api}/repos/{owner}/{repo}/contents[/{path}]`, percent-encoded.
    fn contents_url(&self, path: &str) -> Result<Url, StorageError> {
        let mut url = Url::parse(&self.config.api_url)
            .map_err(|e| StorageError::Config(format!("invalid API URL: {e}")))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| StorageError::Config("API URL cannot be a base".to_string()))?;
            segments
                .pop_if_empty()
                .extend([
                    "repos",
                    self.config.owner.as_str(),
                    self.config.repo.as_str(),
                    "contents",
                ]);
            segments.extend(path.split('/').filter(|s| !s.is_empty()));
        }
        url.query_pairs_mut().append_pair("ref", &self.config.branch);
        Ok(url)
    }

    async fn fetch_file(&self, path: &str) -> Result<Option<FileContents>, StorageError> {
        let response = self.http.get(self.contents_url(path)?).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = check_status(response, path).await?;
        let file = response
            .json::<FileContents>()
            .await
            .map_err(|e| StorageError::Decode(format!("{path} is not a file: {e}")))?;
        Ok(Some(file))
    }
}

async fn check_status(response: Response, path: &str) -> Result<Response, StorageError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::CONFLICT {
        return Err(StorageError::Conflict {
            path: path.to_string(),
        });
    }
    Err(StorageError::Status {
        status: status.as_u16(),
        body: response.text().await.unwrap_or_default(),
    })
}

#[async_trait]
impl ContentStore for GitHubStore {
    async fn get(&self, path: &str) -> Result<Option<String>, StorageError> {
        Ok(self.fetch_file(path).await?.map(|file| file.sha))
    }

    async fn read(&self, path: &str) -> Result<Vec<u8>, StorageError> {
        let file = self
            .fetch_file(path)
            .await?
            .ok_or_else(|| StorageError::NotFound {
                path: path.to_string(),
            })?;

        // The API wraps base64 at 60 columns.
        let encoded: String = file
            .content
            .unwrap_or_default()
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        STANDARD
            .decode(encoded)
            .map_err(|e| StorageError::Decode(format!("{path}: {e}")))
    }

    async fn put(
        &self,
        path: &str,
        body: Vec<u8>,
        revision: Option<&str>,
    ) -> Result<String, StorageError> {
        info!(
            repo = %format!("{}/{}", self.config.owner, self.config.repo),
            branch = %self.config.branch,
            path,
            update = revision.is_some(),
            "writing file"
        );

        let request = PutRequest {
            message: format!("Publish {path}"),
            content: STANDARD.encode(&body),
            branch: &self.config.branch,
            sha: revision,
        };

        let response = self
            .http
            .put(self.contents_url(path)?)
            .json(&request)
            .send()
            .await?;
        let response = check_status(response, path).await?;

        let written: PutResponse = response
            .json()
            .await
            .map_err(|e| StorageError::Decode(e.to_string()))?;
        Ok(written.content.sha)
    }

    async fn list(&self) -> Result<Vec<StoreEntry>, StorageError> {
        let response = self.http.get(self.contents_url("")?).send().await?;
        let response = check_status(response, "/").await?;

        let entries: Vec<DirEntry> = response
            .json()
            .await
            .map_err(|e| StorageError::Decode(e.to_string()))?;

        Ok(entries
            .into_iter()
            .map(|entry| StoreEntry {
                is_file: entry.kind == "file",
                name: entry.name,
                revision: entry.sha,
            })
            .collect())
    }
}
