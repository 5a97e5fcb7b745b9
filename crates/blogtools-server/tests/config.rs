use std::collections::HashMap;
use std::time::Duration;

use blogtools_server::config::{Config, ConfigError, PublishBackend};

fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|name| vars.get(name).cloned())
}

#[test]
fn defaults_with_only_api_key() {
    let config = config(&[("OPENAI_API_KEY", "sk-test")]).unwrap();

    assert_eq!(config.model.model, "gpt-4");
    assert_eq!(config.model.base_url, "https://api.openai.com/v1");
    assert_eq!(config.port, 5001);
    assert_eq!(config.fetch_timeout, Duration::from_secs(15));
    assert_eq!(config.allowed_origins, ["http://localhost:3000"]);
    assert!(matches!(config.backend, PublishBackend::Memory));
    assert_eq!(config.public_base_url, "http://localhost:5001/tools");
}

#[test]
fn api_key_is_required() {
    let err = config(&[("OPENAI_API_KEY", "  ")]).unwrap_err();
    assert!(matches!(err, ConfigError::Missing("OPENAI_API_KEY")));
}

#[test]
fn github_token_selects_github_backend() {
    let config = config(&[
        ("OPENAI_API_KEY", "sk-test"),
        ("GITHUB_TOKEN", "ghp_x"),
        ("GITHUB_OWNER", "acme"),
        ("GITHUB_REPO", "tools"),
    ])
    .unwrap();

    let PublishBackend::GitHub(github) = &config.backend else {
        panic!("expected github backend");
    };
    assert_eq!(github.branch, "gh-pages");
    assert_eq!(github.api_url, "https://api.github.com");
    assert_eq!(config.public_base_url, "https://acme.github.io/tools");
}

#[test]
fn github_backend_needs_repository() {
    let err = config(&[
        ("OPENAI_API_KEY", "sk-test"),
        ("PUBLISH_BACKEND", "github"),
        ("GITHUB_TOKEN", "ghp_x"),
    ])
    .unwrap_err();
    assert!(matches!(err, ConfigError::Missing("GITHUB_OWNER")));
}

#[test]
fn explicit_values_override_defaults() {
    let config = config(&[
        ("OPENAI_API_KEY", "sk-test"),
        ("OPENAI_MODEL", "gpt-4o-mini"),
        ("PORT", "8080"),
        ("FETCH_TIMEOUT_SECS", "3"),
        ("ALLOWED_ORIGINS", "https://a.example, https://b.example,"),
        ("PUBLIC_BASE_URL", "https://cdn.example/tools"),
    ])
    .unwrap();

    assert_eq!(config.model.model, "gpt-4o-mini");
    assert_eq!(config.port, 8080);
    assert_eq!(config.fetch_timeout, Duration::from_secs(3));
    assert_eq!(
        config.allowed_origins,
        ["https://a.example", "https://b.example"]
    );
    assert_eq!(config.public_base_url, "https://cdn.example/tools");
}

#[test]
fn bad_numbers_and_backends_are_rejected() {
    for (name, value) in [
        ("PORT", "http"),
        ("FETCH_TIMEOUT_SECS", "0"),
        ("PUBLISH_BACKEND", "s3"),
    ] {
        let err = config(&[("OPENAI_API_KEY", "sk-test"), (name, value)]).unwrap_err();
        assert!(
            matches!(err, ConfigError::Invalid { name: n, .. } if n == name),
            "{name}={value}"
        );
    }
}
