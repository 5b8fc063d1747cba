//! Log file settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::persistence::default_log_dir;

/// Where and how verbosely the application logs.
///
/// The `NEXUS_LOG` environment variable, when set, takes precedence over
/// `level`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// An `EnvFilter` directive such as `info` or `nexus_tui=debug`.
    pub level: String,
    /// Directory for the rolling log files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

impl LogConfig {
    /// The configured directory, or the platform data directory.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfigError::NoHomeDirectory`] when no directory is
    /// configured and the platform has no data directory.
    pub fn resolved_directory(&self) -> Result<PathBuf> {
        match &self.directory {
            Some(dir) => Ok(dir.clone()),
            None => default_log_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_directory_wins() {
        let log = LogConfig {
            directory: Some(PathBuf::from("/var/log/nexus")),
            ..Default::default()
        };
        assert_eq!(
            log.resolved_directory().unwrap(),
            PathBuf::from("/var/log/nexus")
        );
    }

    #[test]
    fn missing_directory_is_not_serialized() {
        let json = serde_json::to_string(&LogConfig::default()).unwrap();
        assert_eq!(json, r#"{"level":"info"}"#);
    }
}
