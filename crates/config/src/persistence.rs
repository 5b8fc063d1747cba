//! Configuration file discovery, reading, and writing.
//!
//! Files are read as JSON5 (which also accepts plain JSON) and written back
//! as pretty-printed JSON, since serde_json5 cannot serialize.
//!
//! # File Locations
//!
//! Configuration is searched in the following order:
//!
//! 1. Working directory: `./nexus.json5`, `./nexus.json`
//! 2. User config directory: `<config_dir>/nexus/config.json5`, then
//!    `config.json` (`~/.config/nexus/` on Linux)

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConfigError, Result};

/// Local file names, in priority order.
const LOCAL_FILE_NAMES: &[&str] = &["nexus.json5", "nexus.json"];

/// Application directory name under the platform config and data dirs.
const APP_DIR: &str = "nexus";

/// File names inside the user config directory, in priority order.
const USER_FILE_NAMES: &[&str] = &["config.json5", "config.json"];

/// The directories searched for a configuration file.
///
/// # Examples
///
/// ```
/// use nexus_config::persistence::SearchPaths;
///
/// let dir = tempfile::tempdir().unwrap();
/// std::fs::write(dir.path().join("nexus.json"), "{}").unwrap();
///
/// let paths = SearchPaths::new(dir.path(), None);
/// assert_eq!(paths.find(), Some(dir.path().join("nexus.json")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPaths {
    local_dir: PathBuf,
    user_dir: Option<PathBuf>,
}

impl SearchPaths {
    /// Searches `local_dir` first, then `user_dir` if given.
    #[must_use]
    pub fn new(local_dir: impl Into<PathBuf>, user_dir: Option<PathBuf>) -> Self {
        Self {
            local_dir: local_dir.into(),
            user_dir,
        }
    }

    /// The working directory and the platform user config directory.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(".", user_config_dir().ok())
    }

    /// Every candidate path, in priority order.
    #[must_use]
    pub fn candidates(&self) -> Vec<PathBuf> {
        let local = LOCAL_FILE_NAMES.iter().map(|n| self.local_dir.join(n));
        let user = self
            .user_dir
            .iter()
            .flat_map(|dir| USER_FILE_NAMES.iter().map(move |n| dir.join(n)));
        local.chain(user).collect()
    }

    /// Returns the first candidate that exists.
    #[must_use]
    pub fn find(&self) -> Option<PathBuf> {
        let found = self.candidates().into_iter().find(|p| p.is_file());
        debug!(path = ?found, "config file search finished");
        found
    }
}

/// Finds the configuration file in the standard locations.
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    SearchPaths::standard().find()
}

/// Returns the user configuration directory, e.g. `~/.config/nexus/`.
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDirectory`] if the platform has none.
pub fn user_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|d| d.join(APP_DIR))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Returns the path settings are saved to when no file was loaded.
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDirectory`] if the platform has none.
pub fn default_user_config_path() -> Result<PathBuf> {
    Ok(user_config_dir()?.join(USER_FILE_NAMES[0]))
}

/// Returns the default directory for log files, e.g.
/// `~/.local/share/nexus/logs`.
///
/// # Errors
///
/// Returns [`ConfigError::NoHomeDirectory`] if the platform has none.
pub fn default_log_dir() -> Result<PathBuf> {
    dirs::data_local_dir()
        .map(|d| d.join(APP_DIR).join("logs"))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Reads and parses a JSON5 or JSON file.
///
/// # Errors
///
/// Returns [`ConfigError::ReadFile`] if the file cannot be read and
/// [`ConfigError::ParseJson5`] if it cannot be parsed.
pub fn read_config_file<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json5::from_str(&content)?)
}

/// Writes `value` as pretty JSON, creating parent directories.
///
/// The file is written to a sibling temporary file first and renamed into
/// place, so a failed write leaves any previous file intact.
///
/// # Errors
///
/// Returns [`ConfigError::SerializeJson`] if serialization fails and
/// [`ConfigError::WriteFile`] for any filesystem error.
pub fn write_config_file<T: serde::Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    let write_err = |source| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    let mut content = serde_json::to_string_pretty(value)?;
    content.push('\n');

    let tmp = path.with_extension("tmp");
    std::fs::write(&tmp, content).map_err(write_err)?;
    std::fs::rename(&tmp, path).map_err(write_err)?;
    debug!(path = %path.display(), "config written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        size: u32,
    }

    #[test]
    fn json5_comments_and_trailing_commas() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sample.json5");
        std::fs::write(
            &path,
            r#"
            {
                // shop name
                name: "Acme",
                size: 25,
            }
            "#,
        )
        .unwrap();

        let sample: Sample = read_config_file(&path).unwrap();
        assert_eq!(
            sample,
            Sample {
                name: "Acme".into(),
                size: 25
            }
        );
    }

    #[test]
    fn missing_file_reports_its_path() {
        let err = read_config_file::<Sample>("/nonexistent/nexus.json").unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
        assert!(err.to_string().contains("/nonexistent/nexus.json"));
    }

    #[test]
    fn invalid_content_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "name = Acme").unwrap();

        let err = read_config_file::<Sample>(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseJson5(_)));
    }

    #[test]
    fn write_creates_parents_and_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a").join("b").join("config.json5");
        let sample = Sample {
            name: "Acme".into(),
            size: 10,
        };

        write_config_file(&path, &sample).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
        assert_eq!(read_config_file::<Sample>(&path).unwrap(), sample);
    }

    #[test]
    fn local_file_wins_over_user_file() {
        let local = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        std::fs::write(local.path().join("nexus.json5"), "{}").unwrap();
        std::fs::write(user.path().join("config.json5"), "{}").unwrap();

        let paths = SearchPaths::new(local.path(), Some(user.path().to_path_buf()));
        assert_eq!(paths.find(), Some(local.path().join("nexus.json5")));
    }

    #[test]
    fn user_file_is_used_when_no_local_file() {
        let local = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        std::fs::write(user.path().join("config.json"), "{}").unwrap();

        let paths = SearchPaths::new(local.path(), Some(user.path().to_path_buf()));
        assert_eq!(paths.find(), Some(user.path().join("config.json")));
    }

    #[test]
    fn nothing_found_in_empty_dirs() {
        let local = TempDir::new().unwrap();
        let paths = SearchPaths::new(local.path(), None);
        assert_eq!(paths.candidates().len(), 2);
        assert_eq!(paths.find(), None);
    }
}
