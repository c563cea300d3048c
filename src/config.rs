//! Credential and endpoint configuration.

use crate::error::{DecartError, Result};
use std::sync::Arc;

/// Environment variable consulted for the API key.
pub const API_KEY_ENV: &str = "DECART_API_KEY";

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.decart.ai";

/// Source of named external values, normally the process environment.
pub trait EnvSource: Send + Sync {
    /// Looks up `name`, returning `None` when unset.
    fn var(&self, name: &str) -> Option<String>;
}

/// Reads from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl<F> EnvSource for F
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn var(&self, name: &str) -> Option<String> {
        self(name)
    }
}

/// Shared handle to an [`EnvSource`].
pub type SharedEnv = Arc<dyn EnvSource>;

/// Resolved client configuration.
#[derive(Clone, PartialEq, Eq)]
pub struct DecartConfig {
    api_key: String,
    base_url: Option<String>,
}

impl DecartConfig {
    /// Creates a configuration from an explicit key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
        }
    }

    /// Resolves the API key: the explicit value first, then [`API_KEY_ENV`]
    /// from `env`. Empty values count as absent.
    pub fn resolve(
        api_key: Option<String>,
        base_url: Option<String>,
        env: &dyn EnvSource,
    ) -> Result<Self> {
        let api_key = api_key
            .filter(|k| !k.trim().is_empty())
            .or_else(|| env.var(API_KEY_ENV).filter(|k| !k.trim().is_empty()))
            .ok_or(DecartError::MissingApiKey { var: API_KEY_ENV })?;

        Ok(Self {
            api_key,
            base_url: base_url.filter(|u| !u.trim().is_empty()),
        })
    }

    /// Overrides the API endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Returns the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the endpoint to use, without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
    }
}

impl std::fmt::Debug for DecartConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecartConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn env_with_key(name: &str) -> Option<String> {
        (name == API_KEY_ENV).then(|| "env-api-key".to_string())
    }

    #[test]
    fn test_explicit_key_wins() {
        let config = DecartConfig::resolve(Some("my-api-key".into()), None, &env_with_key).unwrap();
        assert_eq!(config.api_key(), "my-api-key");
    }

    #[test]
    fn test_falls_back_to_env() {
        let config = DecartConfig::resolve(None, None, &env_with_key).unwrap();
        assert_eq!(config.api_key(), "env-api-key");
    }

    #[test]
    fn test_missing_key_fails() {
        let err = DecartConfig::resolve(None, None, &no_env).unwrap_err();
        assert!(matches!(err, DecartError::MissingApiKey { var: API_KEY_ENV }));
        assert!(err.to_string().contains("DECART_API_KEY is required"));
    }

    #[test]
    fn test_empty_values_count_as_missing() {
        let empty_env = |_: &str| Some(String::new());
        let err = DecartConfig::resolve(Some("  ".into()), None, &empty_env).unwrap_err();
        assert!(matches!(err, DecartError::MissingApiKey { .. }));
    }

    #[test]
    fn test_base_url_default_and_override() {
        let config = DecartConfig::new("k");
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);

        let config = DecartConfig::new("k").with_base_url("http://localhost:8080/");
        assert_eq!(config.base_url(), "http://localhost:8080");

        let config =
            DecartConfig::resolve(Some("k".into()), Some(String::new()), &no_env).unwrap();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_debug_redacts_key() {
        let rendered = format!("{:?}", DecartConfig::new("secret-key"));
        assert!(!rendered.contains("secret-key"));
        assert!(rendered.contains("redacted"));
    }
}
