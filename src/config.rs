//! Environment-driven configuration for hosts embedding the relay.

use std::time::Duration;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct RelayConfig {
    /// URL the HTTP delivery channel posts `Publish` forms to
    pub publish_endpoint: String,

    /// Token sent as `api_token` with every publish
    #[serde(default)]
    pub api_token: Option<String>,

    /// Whole-request HTTP timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// `User-Agent` override for the HTTP client
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl RelayConfig {
    /// Prefix of the environment variables read by [`RelayConfig::from_env`].
    pub const ENV_PREFIX: &'static str = "SMS_RELAY";

    /// Load from `SMS_RELAY_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_environment(Environment::with_prefix(Self::ENV_PREFIX))
    }

    fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<RelayConfig, ConfigError> {
        let source = vars
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect::<config::Map<String, String>>();
        RelayConfig::from_environment(
            Environment::with_prefix(RelayConfig::ENV_PREFIX).source(Some(source)),
        )
    }

    #[test]
    fn defaults_apply_when_only_endpoint_is_set() {
        let config = load(&[("SMS_RELAY_PUBLISH_ENDPOINT", "https://example.invalid/publish")])
            .unwrap();
        assert_eq!(config.publish_endpoint, "https://example.invalid/publish");
        assert_eq!(config.api_token, None);
        assert_eq!(config.timeout(), None);
        assert_eq!(config.user_agent, None);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn reads_all_fields() {
        let config = load(&[
            ("SMS_RELAY_PUBLISH_ENDPOINT", "https://example.invalid/publish"),
            ("SMS_RELAY_API_TOKEN", "secret"),
            ("SMS_RELAY_TIMEOUT_SECS", "5"),
            ("SMS_RELAY_USER_AGENT", "smsrelay-test"),
            ("SMS_RELAY_LOG_LEVEL", "debug"),
        ])
        .unwrap();
        assert_eq!(config.api_token.as_deref(), Some("secret"));
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.user_agent.as_deref(), Some("smsrelay-test"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn missing_endpoint_is_an_error() {
        assert!(load(&[("SMS_RELAY_LOG_LEVEL", "debug")]).is_err());
    }

    #[test]
    fn ignores_variables_without_prefix() {
        assert!(load(&[("PUBLISH_ENDPOINT", "https://example.invalid/publish")]).is_err());
    }
}
