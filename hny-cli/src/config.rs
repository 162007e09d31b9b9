//! Configuration module
//!
//! Handles CLI configuration: API endpoint, credentials, output format and
//! whether long-running operations may draw interactive progress.

use anyhow::{Context, Result, bail};
use hny_client::HoneycombClient;

use crate::output::Format;

/// Default API endpoint
pub const DEFAULT_API_URL: &str = "https://api.honeycomb.io";

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the API
    pub api_url: String,

    /// Configuration key for dataset, board, marker, SLO and query endpoints
    pub api_key: Option<String>,

    /// Management key (`keyid:secret`) for team endpoints
    pub management_key: Option<String>,

    /// Team slug for team endpoints
    pub team: Option<String>,

    /// Output format for command results
    pub format: Format,

    /// Whether polling may draw a spinner on the terminal
    pub interactive: bool,
}

impl Config {
    /// Creates a configuration with defaults and no credentials
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            api_key: None,
            management_key: None,
            team: None,
            format: Format::Table,
            interactive: false,
        }
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_url.is_empty() {
            bail!("api_url cannot be empty");
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            bail!("api_url must start with http:// or https://");
        }

        if self.api_key.as_deref().is_some_and(|k| k.trim().is_empty()) {
            bail!("api key cannot be empty");
        }

        if self.management_key.as_deref().is_some_and(|k| !k.contains(':')) {
            bail!("management key must have the form KEY_ID:SECRET");
        }

        Ok(())
    }

    /// Builds a client for configuration-key endpoints
    pub fn client(&self) -> Result<HoneycombClient> {
        let api_key = self.api_key.as_deref().context(
            "No API key configured. Pass --api-key or set HONEYCOMB_API_KEY",
        )?;

        Ok(HoneycombClient::new(&self.api_url).with_api_key(api_key))
    }

    /// Builds a client for team management endpoints
    pub fn management_client(&self) -> Result<HoneycombClient> {
        let management_key = self.management_key.as_deref().context(
            "No management key configured. Pass --management-key or set HONEYCOMB_MANAGEMENT_KEY",
        )?;
        let team = self
            .team
            .as_deref()
            .context("No team configured. Pass --team or set HONEYCOMB_TEAM")?;

        Ok(HoneycombClient::new(&self.api_url)
            .with_management_key(management_key)
            .with_team(team))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.format, Format::Table);
        assert!(!config.interactive);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        config.api_url = "api.honeycomb.io".to_string();
        assert!(config.validate().is_err());

        config.api_url = "http://localhost:8080".to_string();
        assert!(config.validate().is_ok());

        config.api_key = Some("  ".to_string());
        assert!(config.validate().is_err());

        config.api_key = Some("abc123".to_string());
        config.management_key = Some("no-separator".to_string());
        assert!(config.validate().is_err());

        config.management_key = Some("hcxmk_01:secret".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_client_requires_api_key() {
        let config = Config::default();
        let err = config.client().unwrap_err();
        assert!(err.to_string().contains("HONEYCOMB_API_KEY"));

        let config = Config {
            api_key: Some("abc123".to_string()),
            ..Config::default()
        };
        assert!(config.client().is_ok());
    }

    #[test]
    fn test_management_client_requires_team() {
        let config = Config {
            management_key: Some("hcxmk_01:secret".to_string()),
            ..Config::default()
        };
        let err = config.management_client().unwrap_err();
        assert!(err.to_string().contains("HONEYCOMB_TEAM"));
    }
}
