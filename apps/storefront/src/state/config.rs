//! # Configuration State
//!
//! Settings that don't change during a session.
//!
//! ## Configuration File
//! Configuration is read from `storefront.toml` in the platform config
//! directory (or the path given with `--config`):
//!
//! ```toml
//! [api]
//! base_url = "https://fakestoreapi.com"
//! timeout_secs = 30
//!
//! [display]
//! currency_symbol = "$"
//!
//! [form]
//! mock_submit_delay_ms = 1500
//! ```
//!
//! ## Load Order (later overrides earlier)
//! 1. Default values
//! 2. Config file
//! 3. Environment variables (`STOREFRONT_API_URL`, `STOREFRONT_TIMEOUT_SECS`,
//!    `STOREFRONT_CURRENCY_SYMBOL`)

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use storefront_api::{ClientConfig, DEFAULT_BASE_URL};
use storefront_core::Money;
use tracing::{debug, info, warn};

use crate::error::ConfigError;

/// File name looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "storefront.toml";

// =============================================================================
// Sections
// =============================================================================

/// Catalog API settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Transport timeout per request.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ApiSettings {
    fn default() -> Self {
        ApiSettings {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            currency_symbol: default_currency_symbol(),
        }
    }
}

/// Add-product form settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSettings {
    /// Simulated submission latency.
    #[serde(default = "default_mock_submit_delay_ms")]
    pub mock_submit_delay_ms: u64,
}

fn default_mock_submit_delay_ms() -> u64 {
    1500
}

impl Default for FormSettings {
    fn default() -> Self {
        FormSettings {
            mock_submit_delay_ms: default_mock_submit_delay_ms(),
        }
    }
}

// =============================================================================
// Config State
// =============================================================================

/// Session configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigState {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub display: DisplaySettings,

    #[serde(default)]
    pub form: FormSettings,
}

impl ConfigState {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// A missing file is not an error; an unreadable or malformed one is.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = match config_path.or_else(Self::default_config_path) {
            Some(path) if path.exists() => {
                info!(?path, "Loading config from file");
                Self::from_file(&path)?
            }
            Some(path) => {
                debug!(?path, "Config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a config file without applying overrides.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = &self.api.base_url;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "api.base_url must start with http:// or https://, got: {url}"
            )));
        }

        if self.api.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "api.timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from `lookup` (environment variables in production).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("STOREFRONT_API_URL") {
            debug!(url = %url, "Overriding API URL from environment");
            self.api.base_url = url;
        }

        if let Some(timeout) = lookup("STOREFRONT_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(secs) => self.api.timeout_secs = secs,
                Err(_) => warn!(value = %timeout, "Ignoring invalid STOREFRONT_TIMEOUT_SECS"),
            }
        }

        if let Some(symbol) = lookup("STOREFRONT_CURRENCY_SYMBOL") {
            self.display.currency_symbol = symbol;
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "storefront", "storefront")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Settings for the catalog HTTP client.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.api.base_url.clone())
            .with_timeout(Duration::from_secs(self.api.timeout_secs))
    }

    pub fn mock_submit_delay(&self) -> Duration {
        Duration::from_millis(self.form.mock_submit_delay_ms)
    }

    /// Formats an amount as a price label.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_price(Money::from_cents(123456)), "$1,234.56");
    /// ```
    pub fn format_price(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.display.currency_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ConfigState::default();
        assert_eq!(config.api.base_url, "https://fakestoreapi.com");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.form.mock_submit_delay_ms, 1500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_format_price() {
        let config = ConfigState::default();
        assert_eq!(config.format_price(Money::from_cents(123456)), "$1,234.56");
        assert_eq!(config.format_price(Money::from_cents(995)), "$9.95");

        let mut euro = ConfigState::default();
        euro.display.currency_symbol = "€".to_string();
        assert_eq!(euro.format_price(Money::from_cents(100)), "€1.00");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nbase_url = \"http://localhost:3000\"").unwrap();

        let config = ConfigState::from_file(file.path()).unwrap();

        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.display.currency_symbol, "$");
    }

    #[test]
    fn test_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api\nbase_url = ").unwrap();

        let err = ConfigState::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigState::load(Some(dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config.api.timeout_secs, ConfigState::default().api.timeout_secs);
    }

    #[test]
    fn test_overrides() {
        let mut config = ConfigState::default();
        config.apply_overrides(lookup(&[
            ("STOREFRONT_API_URL", "http://127.0.0.1:8080"),
            ("STOREFRONT_TIMEOUT_SECS", "5"),
            ("STOREFRONT_CURRENCY_SYMBOL", "£"),
        ]));

        assert_eq!(config.api.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.display.currency_symbol, "£");
    }

    #[test]
    fn test_invalid_timeout_override_ignored() {
        let mut config = ConfigState::default();
        config.apply_overrides(lookup(&[("STOREFRONT_TIMEOUT_SECS", "soon")]));
        assert_eq!(config.api.timeout_secs, 30);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = ConfigState::default();
        config.api.base_url = "ftp://example.com".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = ConfigState::default();
        config.api.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_client_config() {
        let mut config = ConfigState::default();
        config.api.timeout_secs = 7;
        let client = config.client_config();
        assert_eq!(client.base_url, "https://fakestoreapi.com");
        assert_eq!(client.timeout, Duration::from_secs(7));
    }
}
