//! # Store Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     B2B_SELECTOR_CACHE_SIZE=25                                         │
//! │     B2B_LOG_FILTER=debug                                               │
//! │     B2B_WARNING_THRESHOLD_BPS=9000                                     │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/b2b-storefront/store.toml (Linux)                        │
//! │     ~/Library/Application Support/com.b2b.storefront/store.toml (macOS)│
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # store.toml
//! [selectors]
//! item_cache_size = 10
//!
//! [logging]
//! filter = "info,b2b=debug"
//!
//! [cart]
//! warning_threshold_bps = 8000  # 80% of a spending limit
//! ```

use std::path::PathBuf;

use b2b_core::{DEFAULT_SELECTOR_CACHE_SIZE, DEFAULT_WARNING_THRESHOLD_BPS};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Sections
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorSettings {
    /// Capacity of each parameterized selector cache (item by product id,
    /// limit by id, ...).
    #[serde(default = "default_item_cache_size")]
    pub item_cache_size: usize,
}

fn default_item_cache_size() -> usize {
    DEFAULT_SELECTOR_CACHE_SIZE
}

impl Default for SelectorSettings {
    fn default() -> Self {
        SelectorSettings {
            item_cache_size: default_item_cache_size(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `EnvFilter` directives used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "info,b2b=debug".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            filter: default_log_filter(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSettings {
    /// Utilisation, in basis points, at which a spending limit is reported
    /// as nearly exhausted.
    #[serde(default = "default_warning_threshold")]
    pub warning_threshold_bps: i64,
}

fn default_warning_threshold() -> i64 {
    DEFAULT_WARNING_THRESHOLD_BPS
}

impl Default for CartSettings {
    fn default() -> Self {
        CartSettings {
            warning_threshold_bps: default_warning_threshold(),
        }
    }
}

// =============================================================================
// Store Config
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub selectors: SelectorSettings,

    #[serde(default)]
    pub logging: LoggingSettings,

    #[serde(default)]
    pub cart: CartSettings,
}

impl StoreConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (store.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> StoreResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading store config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load store config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> StoreResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| StoreError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Store config saved");
        Ok(())
    }

    pub fn validate(&self) -> StoreResult<()> {
        if self.selectors.item_cache_size == 0 {
            return Err(StoreError::InvalidConfig(
                "item_cache_size must be greater than 0".into(),
            ));
        }

        if !(1..=10_000).contains(&self.cart.warning_threshold_bps) {
            return Err(StoreError::InvalidConfig(format!(
                "warning_threshold_bps must be between 1 and 10000, got: {}",
                self.cart.warning_threshold_bps
            )));
        }

        if self.logging.filter.trim().is_empty() {
            return Err(StoreError::InvalidConfig("logging filter must not be empty".into()));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup; unparsable values are logged
    /// and ignored.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(size) = lookup("B2B_SELECTOR_CACHE_SIZE") {
            match size.parse::<usize>() {
                Ok(parsed) => {
                    debug!(size = parsed, "Overriding selector cache size from environment");
                    self.selectors.item_cache_size = parsed;
                }
                Err(_) => warn!(value = %size, "Ignoring invalid B2B_SELECTOR_CACHE_SIZE"),
            }
        }

        if let Some(filter) = lookup("B2B_LOG_FILTER") {
            self.logging.filter = filter;
        }

        if let Some(bps) = lookup("B2B_WARNING_THRESHOLD_BPS") {
            match bps.parse::<i64>() {
                Ok(parsed) => {
                    debug!(bps = parsed, "Overriding warning threshold from environment");
                    self.cart.warning_threshold_bps = parsed;
                }
                Err(_) => warn!(value = %bps, "Ignoring invalid B2B_WARNING_THRESHOLD_BPS"),
            }
        }
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "b2b", "storefront")
            .map(|dirs| dirs.config_dir().join("store.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_are_valid() {
        let config = StoreConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.selectors.item_cache_size, DEFAULT_SELECTOR_CACHE_SIZE);
        assert_eq!(config.cart.warning_threshold_bps, 8_000);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config: StoreConfig = toml::from_str("[cart]\nwarning_threshold_bps = 9500\n").unwrap();
        assert_eq!(config.cart.warning_threshold_bps, 9_500);
        assert_eq!(config.selectors, SelectorSettings::default());
        assert_eq!(config.logging.filter, "info,b2b=debug");
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("B2B_SELECTOR_CACHE_SIZE", "32"),
            ("B2B_LOG_FILTER", "warn"),
            ("B2B_WARNING_THRESHOLD_BPS", "not-a-number"),
        ]
        .into_iter()
        .collect();

        let mut config = StoreConfig::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.selectors.item_cache_size, 32);
        assert_eq!(config.logging.filter, "warn");
        assert_eq!(config.cart.warning_threshold_bps, 8_000);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = StoreConfig::default();
        config.selectors.item_cache_size = 0;
        assert!(matches!(config.validate(), Err(StoreError::InvalidConfig(_))));

        let mut config = StoreConfig::default();
        config.cart.warning_threshold_bps = 12_000;
        assert!(config.validate().is_err());

        let mut config = StoreConfig::default();
        config.logging.filter = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.toml");

        let mut config = StoreConfig::default();
        config.selectors.item_cache_size = 4;
        config.save(Some(path.clone())).unwrap();

        let loaded: StoreConfig = toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_or_default_falls_back_on_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.toml");
        std::fs::write(&path, "[selectors]\nitem_cache_size = \"lots\"\n").unwrap();

        assert!(StoreConfig::load(Some(path.clone())).is_err());
        assert_eq!(StoreConfig::load_or_default(Some(path)), StoreConfig::default());
    }
}
