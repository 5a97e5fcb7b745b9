use std::sync::Arc;

use blogtools_extract::fetch::PageFetcher;
use blogtools_llm::completion::Completion;
use blogtools_llm::openai::{OpenAiClient, OpenAiOptions};
use blogtools_storage::github::GitHubStore;
use blogtools_storage::memory::MemoryStore;
use blogtools_storage::store::ContentStore;

use crate::config::{Config, PublishBackend};

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn Completion>,
    pub store: Arc<dyn ContentStore>,
    pub fetcher: PageFetcher,
    pub public_base_url: Arc<str>,
    pub allowed_origins: Arc<[String]>,
}

impl AppState {
    /// Wire up the real clients described by `config`.
    pub fn from_config(config: &Config) -> eyre::Result<Self> {
        let model = OpenAiClient::new(OpenAiOptions {
            api_key: config.model.api_key.clone(),
            model: Some(config.model.model.clone()),
            base_url: Some(config.model.base_url.clone()),
            client: None,
        });

        let store: Arc<dyn ContentStore> = match &config.backend {
            PublishBackend::GitHub(github) => {
                tracing::info!(
                    owner = %github.owner,
                    repo = %github.repo,
                    branch = %github.branch,
                    "publishing to GitHub"
                );
                Arc::new(GitHubStore::new(github.clone())?)
            }
            PublishBackend::Memory => {
                tracing::warn!("publishing to in-memory store, tools are lost on restart");
                Arc::new(MemoryStore::new())
            }
        };

        Ok(Self {
            model: Arc::new(model),
            store,
            fetcher: PageFetcher::new(config.fetch_timeout)?,
            public_base_url: Arc::from(config.public_base_url.as_str()),
            allowed_origins: Arc::from(config.allowed_origins.clone()),
        })
    }
}
