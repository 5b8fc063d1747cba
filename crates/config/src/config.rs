//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration sections for the nexus console.

use std::path::Path;

use nexus_protocol::Route;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::business::BusinessConfig;
use crate::error::Result;
use crate::log::LogConfig;
use crate::persistence::{find_config_file, read_config_file, write_config_file};
use crate::ui::UiConfig;

/// The main configuration struct for the nexus console.
///
/// Every section is optional in the file; missing sections and fields take
/// their defaults.
///
/// # Examples
///
/// ```
/// use nexus_config::Config;
/// use nexus_config::ui::UiConfig;
///
/// let config = Config::default();
/// assert_eq!(config.business.name, "Acme Corporation Ltd.");
///
/// let config = Config {
///     ui: UiConfig { page_size: 25, ..Default::default() },
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Business profile.
    #[serde(default)]
    pub business: BusinessConfig,

    /// Terminal UI preferences.
    #[serde(default)]
    pub ui: UiConfig,

    /// Log file settings.
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Creates a default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// Searches `./nexus.json5`, `./nexus.json`, then the user config
    /// directory. If no file is found, returns the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed, or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use nexus_config::Config;
    ///
    /// # async fn example() -> nexus_config::Result<()> {
    /// let config = Config::load().await?;
    /// println!("Business: {}", config.business.name);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(path),
            None => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads and validates configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config: Config = read_config_file(path)?;
        config.validate()?;
        info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Saves the configuration as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates every section.
    ///
    /// # Errors
    ///
    /// Returns the first section's validation error.
    ///
    /// # Examples
    ///
    /// ```
    /// use nexus_config::Config;
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.ui.page_size = 7;
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        self.business.validate()?;
        self.ui.validate()?;
        Ok(())
    }

    /// The page shown on startup.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfigError::InvalidStartRoute`] for an undeclared
    /// path.
    pub fn start_route(&self) -> Result<Route> {
        self.ui.start_route()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::business::Currency;
    use crate::error::ConfigError;
    use nexus_protocol::TaskView;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config, Config::new());
        assert!(config.validate().is_ok());
        assert_eq!(config.start_route().unwrap(), Route::Dashboard);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn deserialize_partial() {
        let json = r#"{"ui": {"start_route": "/customers"}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.start_route().unwrap(), Route::Customers);
        assert_eq!(config.ui.page_size, 50);
        assert_eq!(config.business, BusinessConfig::default());
    }

    #[test]
    fn validate_empty_business_name() {
        let mut config = Config::default();
        config.business.name = String::new();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyBusinessName)
        ));
    }

    #[test]
    fn load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json5");
        std::fs::write(
            &path,
            r#"
            {
                business: { name: "Acme Corp", currency: "bdt" },
                // open the task board in list layout
                ui: { start_route: "/tasks", task_view: "list", page_size: 25 },
                log: { level: "debug" },
            }
            "#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.business.name, "Acme Corp");
        assert_eq!(config.business.currency, Currency::Bdt);
        assert_eq!(config.start_route().unwrap(), Route::Tasks);
        assert_eq!(config.ui.task_view, TaskView::List);
        assert_eq!(config.ui.page_size, 25);
        assert_eq!(config.log.level, "debug");
    }

    #[test]
    fn load_from_rejects_invalid_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json5");
        std::fs::write(&path, r#"{ ui: { start_route: "/nowhere" } }"#).unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidStartRoute(_)));
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let mut original = Config::default();
        original.business.name = "Dhaka Traders".into();
        original.business.currency = Currency::Usd;
        original.ui.page_size = 100;

        original.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(original, loaded);
    }
}
