//! Process-wide configuration, read once at startup.
//!
//! The six upstream settings are required; a missing or blank value is a
//! fatal [`Error::ConfigurationMissing`]. Everything else has a default in
//! [`crate::defaults`].

use tracing::debug;

use crate::defaults::*;
use crate::error::{Error, Result};

/// Hosted chat-completion model settings.
#[derive(Debug, Clone)]
pub struct OpenAISettings {
    pub api_key: String,
    /// Resource endpoint, e.g. `https://my-resource.openai.azure.com/`.
    pub endpoint: String,
    pub deployment_name: String,
    pub api_version: String,
    pub max_tokens: u32,
}

impl OpenAISettings {
    /// Full chat completions URL for the configured deployment.
    pub fn chat_completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint.trim_end_matches('/'),
            self.deployment_name,
            self.api_version
        )
    }
}

/// Managed search index settings.
#[derive(Debug, Clone)]
pub struct SearchSettings {
    pub api_key: String,
    /// Service endpoint, e.g. `https://my-search.search.windows.net`.
    pub endpoint: String,
    pub index_name: String,
    pub api_version: String,
}

impl SearchSettings {
    /// Full documents search URL for the configured index.
    pub fn search_url(&self) -> String {
        format!(
            "{}/indexes/{}/docs/search?api-version={}",
            self.endpoint.trim_end_matches('/'),
            self.index_name,
            self.api_version
        )
    }
}

/// HTTP server settings.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_bytes: usize,
    /// Function-level access key; `None` leaves the route open.
    pub function_key: Option<String>,
    pub allowed_origins: Vec<String>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            max_upload_bytes: MAX_UPLOAD_BYTES,
            function_key: None,
            allowed_origins: Vec::new(),
        }
    }
}

/// Complete service configuration.
#[derive(Debug, Clone)]
pub struct StylistConfig {
    pub openai: OpenAISettings,
    pub search: SearchSettings,
    pub server: ServerSettings,
    pub upstream_timeout_secs: u64,
}

impl StylistConfig {
    /// Build from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String> {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| Error::ConfigurationMissing(key.to_string()))
        };
        let optional = |key: &str| -> Option<String> {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let openai = OpenAISettings {
            api_key: required(ENV_OPENAI_API_KEY)?,
            endpoint: required(ENV_OPENAI_ENDPOINT)?,
            deployment_name: required(ENV_OPENAI_DEPLOYMENT_NAME)?,
            api_version: optional(ENV_OPENAI_API_VERSION)
                .unwrap_or_else(|| OPENAI_API_VERSION.to_string()),
            max_tokens: optional(ENV_MAX_TOKENS)
                .and_then(|s| s.parse().ok())
                .unwrap_or(MAX_TOKENS),
        };

        let search = SearchSettings {
            api_key: required(ENV_SEARCH_API_KEY)?,
            endpoint: required(ENV_SEARCH_ENDPOINT)?,
            index_name: required(ENV_SEARCH_INDEX_NAME)?,
            api_version: optional(ENV_SEARCH_API_VERSION)
                .unwrap_or_else(|| SEARCH_API_VERSION.to_string()),
        };

        let server = ServerSettings {
            host: optional(ENV_HOST).unwrap_or_else(|| HOST.to_string()),
            port: optional(ENV_PORT)
                .and_then(|s| s.parse().ok())
                .unwrap_or(PORT),
            max_upload_bytes: optional(ENV_MAX_UPLOAD_BYTES)
                .and_then(|s| s.parse().ok())
                .unwrap_or(MAX_UPLOAD_BYTES),
            function_key: optional(ENV_FUNCTION_KEY),
            allowed_origins: optional(ENV_ALLOWED_ORIGINS)
                .map(|s| {
                    s.split(',')
                        .map(|o| o.trim().to_string())
                        .filter(|o| !o.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
        };

        let upstream_timeout_secs = optional(ENV_UPSTREAM_TIMEOUT_SECS)
            .and_then(|s| s.parse().ok())
            .unwrap_or(UPSTREAM_TIMEOUT_SECS);

        debug!(
            deployment = %openai.deployment_name,
            index = %search.index_name,
            upstream_timeout_secs,
            function_key = server.function_key.is_some(),
            "Configuration loaded"
        );

        Ok(Self {
            openai,
            search,
            server,
            upstream_timeout_secs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn base_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            (ENV_OPENAI_API_KEY, "sk-test"),
            (ENV_OPENAI_ENDPOINT, "https://res.openai.azure.com/"),
            (ENV_OPENAI_DEPLOYMENT_NAME, "gpt-4-vision"),
            (ENV_SEARCH_API_KEY, "search-key"),
            (ENV_SEARCH_ENDPOINT, "https://svc.search.windows.net"),
            (ENV_SEARCH_INDEX_NAME, "fashion"),
        ])
    }

    fn load(env: &HashMap<&'static str, &'static str>) -> Result<StylistConfig> {
        StylistConfig::from_lookup(|k| env.get(k).map(|v| v.to_string()))
    }

    #[test]
    fn test_required_values_and_defaults() {
        let config = load(&base_env()).unwrap();
        assert_eq!(config.openai.api_key, "sk-test");
        assert_eq!(config.openai.deployment_name, "gpt-4-vision");
        assert_eq!(config.openai.api_version, OPENAI_API_VERSION);
        assert_eq!(config.openai.max_tokens, 2000);
        assert_eq!(config.search.index_name, "fashion");
        assert_eq!(config.search.api_version, SEARCH_API_VERSION);
        assert_eq!(config.upstream_timeout_secs, UPSTREAM_TIMEOUT_SECS);
        assert_eq!(config.server.port, PORT);
        assert!(config.server.function_key.is_none());
        assert!(config.server.allowed_origins.is_empty());
    }

    #[test]
    fn test_each_required_value_is_fatal_when_missing() {
        for key in [
            ENV_OPENAI_API_KEY,
            ENV_OPENAI_ENDPOINT,
            ENV_OPENAI_DEPLOYMENT_NAME,
            ENV_SEARCH_API_KEY,
            ENV_SEARCH_ENDPOINT,
            ENV_SEARCH_INDEX_NAME,
        ] {
            let mut env = base_env();
            env.remove(key);
            match load(&env) {
                Err(Error::ConfigurationMissing(name)) => assert_eq!(name, key),
                other => panic!("Expected ConfigurationMissing for {}, got {:?}", key, other),
            }
        }
    }

    #[test]
    fn test_blank_required_value_counts_as_missing() {
        let mut env = base_env();
        env.insert(ENV_SEARCH_API_KEY, "   ");
        assert!(matches!(
            load(&env),
            Err(Error::ConfigurationMissing(name)) if name == ENV_SEARCH_API_KEY
        ));
    }

    #[test]
    fn test_optional_overrides() {
        let mut env = base_env();
        env.insert(ENV_PORT, "8080");
        env.insert(ENV_UPSTREAM_TIMEOUT_SECS, "30");
        env.insert(ENV_MAX_TOKENS, "500");
        env.insert(ENV_FUNCTION_KEY, "secret");
        env.insert(ENV_ALLOWED_ORIGINS, "http://localhost:5173, https://app.example.com,");
        let config = load(&env).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.upstream_timeout_secs, 30);
        assert_eq!(config.openai.max_tokens, 500);
        assert_eq!(config.server.function_key.as_deref(), Some("secret"));
        assert_eq!(
            config.server.allowed_origins,
            vec!["http://localhost:5173", "https://app.example.com"]
        );
    }

    #[test]
    fn test_unparseable_port_falls_back_to_default() {
        let mut env = base_env();
        env.insert(ENV_PORT, "not-a-port");
        assert_eq!(load(&env).unwrap().server.port, PORT);
    }

    #[test]
    fn test_chat_completions_url_trims_trailing_slash() {
        let config = load(&base_env()).unwrap();
        assert_eq!(
            config.openai.chat_completions_url(),
            "https://res.openai.azure.com/openai/deployments/gpt-4-vision/chat/completions?api-version=2023-12-01-preview"
        );
    }

    #[test]
    fn test_search_url() {
        let config = load(&base_env()).unwrap();
        assert_eq!(
            config.search.search_url(),
            "https://svc.search.windows.net/indexes/fashion/docs/search?api-version=2023-11-01"
        );
    }
}
