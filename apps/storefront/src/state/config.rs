//! # Configuration State
//!
//! Storefront configuration loaded at startup.
//!
//! ## Configuration Sources (later overrides earlier)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Defaults (this file)                                                │
//! │  2. storefront.toml                                                     │
//! │     --config PATH, or the platform config dir:                          │
//! │     ~/.config/storefront/storefront.toml (Linux)                        │
//! │  3. Environment variables                                               │
//! │     STOREFRONT_CURRENCY=€                                               │
//! │     STOREFRONT_CURRENCY_CODE=EUR                                        │
//! │     STOREFRONT_STORE_NAME="Corner Grocer"                               │
//! │     STOREFRONT_VIEWPORT_WIDTH=1280                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## File Format
//! ```toml
//! storeName = "GreenCart"
//! currencySymbol = "$"
//! currencyCode = "USD"
//! currencyDecimals = 2
//! initialViewportWidth = 1280
//! ```
//!
//! Configuration is read-only once the session starts.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use storefront_core::Money;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Most minor-unit digits a currency may declare.
pub const MAX_CURRENCY_DECIMALS: u8 = 4;

/// Configuration loading failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file exists but could not be read.
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML for this schema.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Values parsed but break a rule.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigState {
    /// Store name shown in the navbar and footer.
    pub store_name: String,

    /// Currency symbol placed before every price.
    pub currency_symbol: String,

    /// Currency code (ISO 4217).
    pub currency_code: String,

    /// Number of decimal places for currency.
    pub currency_decimals: u8,

    /// Viewport width assumed before the first resize notification.
    pub initial_viewport_width: u32,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            store_name: "GreenCart".to_string(),
            currency_symbol: "$".to_string(),
            currency_code: "USD".to_string(),
            currency_decimals: 2,
            initial_viewport_width: 1280,
        }
    }
}

impl ConfigState {
    /// Loads defaults, then the config file, then environment overrides.
    ///
    /// A missing file is not an error; an unreadable or malformed one is.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = match config_path.or_else(Self::default_config_path) {
            Some(path) if path.exists() => Self::from_file(&path)?,
            Some(path) => {
                debug!(?path, "Config file not found, using defaults");
                ConfigState::default()
            }
            None => ConfigState::default(),
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parses a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        info!(?path, "Loading storefront config from file");
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Applies `STOREFRONT_*` environment variables.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(symbol) = lookup("STOREFRONT_CURRENCY") {
            debug!(%symbol, "Overriding currency symbol from environment");
            self.currency_symbol = symbol;
        }

        if let Some(code) = lookup("STOREFRONT_CURRENCY_CODE") {
            self.currency_code = code;
        }

        if let Some(name) = lookup("STOREFRONT_STORE_NAME") {
            self.store_name = name;
        }

        if let Some(width) = lookup("STOREFRONT_VIEWPORT_WIDTH") {
            match width.parse::<u32>() {
                Ok(width) => self.initial_viewport_width = width,
                Err(_) => warn!(%width, "Ignoring non-numeric STOREFRONT_VIEWPORT_WIDTH"),
            }
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.currency_symbol.trim().is_empty() {
            return Err(ConfigError::Invalid("currency symbol must not be empty".into()));
        }

        if self.currency_code.trim().is_empty() {
            return Err(ConfigError::Invalid("currency code must not be empty".into()));
        }

        if self.currency_decimals > MAX_CURRENCY_DECIMALS {
            return Err(ConfigError::Invalid(format!(
                "currency decimals must be at most {}, got {}",
                MAX_CURRENCY_DECIMALS, self.currency_decimals
            )));
        }

        Ok(())
    }

    /// Formats an amount with the configured symbol.
    ///
    /// Decimals above [`MAX_CURRENCY_DECIMALS`] are clamped, so an
    /// unvalidated config still formats.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::Money;
    /// use storefront_lib::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let decimals = self.currency_decimals.min(MAX_CURRENCY_DECIMALS);
        let cents = amount.cents();
        let divisor = 10_i64.pow(u32::from(decimals));
        let whole = cents / divisor;
        let frac = (cents % divisor).abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = usize::from(decimals)
                )
            } else {
                whole.abs().to_string()
            }
        )
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "storefront", "storefront")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_format_currency() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
        assert_eq!(config.format_currency(Money::from_cents(1)), "$0.01");
        assert_eq!(config.format_currency(Money::from_cents(0)), "$0.00");
        assert_eq!(config.format_currency(Money::from_cents(-1234)), "-$12.34");
    }

    #[test]
    fn test_format_currency_no_decimals() {
        let config = ConfigState {
            currency_symbol: "¥".into(),
            currency_code: "JPY".into(),
            currency_decimals: 0,
            ..ConfigState::default()
        };
        assert_eq!(config.format_currency(Money::from_cents(1500)), "¥1500");
    }

    #[test]
    fn test_format_currency_clamps_decimals() {
        let config = ConfigState {
            currency_decimals: 200,
            ..ConfigState::default()
        };
        assert!(config.validate().is_err());
        assert_eq!(config.format_currency(Money::from_cents(12345)), "$1.2345");
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("STOREFRONT_CURRENCY", "€"),
            ("STOREFRONT_CURRENCY_CODE", "EUR"),
            ("STOREFRONT_VIEWPORT_WIDTH", "700"),
        ]
        .into_iter()
        .collect();

        let mut config = ConfigState::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.currency_code, "EUR");
        assert_eq!(config.initial_viewport_width, 700);
        assert_eq!(config.store_name, "GreenCart");
    }

    #[test]
    fn test_bad_width_override_ignored() {
        let mut config = ConfigState::default();
        config.apply_overrides(|key| (key == "STOREFRONT_VIEWPORT_WIDTH").then(|| "wide".to_string()));
        assert_eq!(config.initial_viewport_width, 1280);
    }

    #[test]
    fn test_validation() {
        assert!(ConfigState::default().validate().is_ok());

        let config = ConfigState {
            currency_symbol: " ".into(),
            ..ConfigState::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = ConfigState {
            currency_decimals: 9,
            ..ConfigState::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_partial_file() {
        let config: ConfigState = toml::from_str(
            r#"
            storeName = "Corner Grocer"
            currencySymbol = "₹"
            "#,
        )
        .unwrap();

        assert_eq!(config.store_name, "Corner Grocer");
        assert_eq!(config.currency_symbol, "₹");
        assert_eq!(config.currency_code, "USD");
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("storefront-{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(&path, "currencyCode = \"GBP\"\ncurrencySymbol = \"£\"\n").unwrap();

        let config = ConfigState::from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.currency_code, "GBP");
        assert_eq!(config.format_currency(Money::from_cents(250)), "£2.50");
    }

    #[test]
    fn test_malformed_file_is_error() {
        let path = std::env::temp_dir().join(format!("storefront-{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(&path, "currencyDecimals = \"two\"").unwrap();

        let result = ConfigState::from_file(&path);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
