//! Start-up configuration.
//!
//! Everything the service needs from the environment is read once into a
//! [`Config`]; handlers never look at the environment themselves.

use std::time::Duration;

use thiserror::Error;

use blogtools_extract::fetch::DEFAULT_TIMEOUT;
use blogtools_llm::openai::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use blogtools_storage::github::{DEFAULT_API_URL, DEFAULT_BRANCH, GitHubConfig};

pub const DEFAULT_PORT: u16 = 5001;
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has invalid value {value:?}: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

/// Where published tools are written.
#[derive(Debug, Clone)]
pub enum PublishBackend {
    GitHub(GitHubConfig),
    /// In-process only; contents are lost on restart.
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub model: ModelConfig,
    pub backend: PublishBackend,
    pub public_base_url: String,
    /// `["*"]` allows any origin.
    pub allowed_origins: Vec<String>,
    pub port: u16,
    pub fetch_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let required = |name: &'static str| var(name).ok_or(ConfigError::Missing(name));

        let model = ModelConfig {
            api_key: required("OPENAI_API_KEY")?,
            model: var("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: var("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        };

        let port = match var("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::Invalid {
                name: "PORT",
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };

        let fetch_timeout = match var("FETCH_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                Ok(_) => {
                    return Err(ConfigError::Invalid {
                        name: "FETCH_TIMEOUT_SECS",
                        value: raw,
                        reason: "must be at least 1".to_string(),
                    });
                }
                Err(e) => {
                    return Err(ConfigError::Invalid {
                        name: "FETCH_TIMEOUT_SECS",
                        value: raw,
                        reason: e.to_string(),
                    });
                }
            },
            None => DEFAULT_TIMEOUT,
        };

        let backend_name = var("PUBLISH_BACKEND").unwrap_or_else(|| {
            if var("GITHUB_TOKEN").is_some() {
                "github".to_string()
            } else {
                "memory".to_string()
            }
        });

        let backend = match backend_name.to_ascii_lowercase().as_str() {
            "github" => PublishBackend::GitHub(GitHubConfig {
                token: required("GITHUB_TOKEN")?,
                owner: required("GITHUB_OWNER")?,
                repo: required("GITHUB_REPO")?,
                branch: var("GITHUB_BRANCH").unwrap_or_else(|| DEFAULT_BRANCH.to_string()),
                api_url: var("GITHUB_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            }),
            "memory" => PublishBackend::Memory,
            _ => {
                return Err(ConfigError::Invalid {
                    name: "PUBLISH_BACKEND",
                    value: backend_name,
                    reason: "expected github or memory".to_string(),
                });
            }
        };

        let public_base_url = var("PUBLIC_BASE_URL").unwrap_or_else(|| match &backend {
            PublishBackend::GitHub(github) => {
                format!("https://{}.github.io/{}", github.owner, github.repo)
            }
            PublishBackend::Memory => format!("http://localhost:{port}/tools"),
        });

        let allowed_origins = var("ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            model,
            backend,
            public_base_url,
            allowed_origins,
            port,
            fetch_timeout,
        })
    }
}
