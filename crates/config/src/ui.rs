//! Terminal UI preferences.

use nexus_protocol::{Route, TaskView};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Page sizes offered by the order and customer tables.
pub const PAGE_SIZES: [usize; 4] = [10, 25, 50, 100];

/// Preferences for the terminal UI.
///
/// # Examples
///
/// ```
/// use nexus_config::ui::UiConfig;
/// use nexus_protocol::Route;
///
/// let ui = UiConfig {
///     start_route: "/tasks".into(),
///     ..Default::default()
/// };
/// assert_eq!(ui.start_route().unwrap(), Route::Tasks);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Path of the page shown on startup.
    pub start_route: String,
    /// Initial layout of the tasks page.
    pub task_view: TaskView,
    /// Rows per page in the order and customer tables.
    pub page_size: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            start_route: Route::Dashboard.path().to_string(),
            task_view: TaskView::Board,
            page_size: 50,
        }
    }
}

impl UiConfig {
    /// Parses the configured start route.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidStartRoute`] if the path is not a
    /// declared route.
    pub fn start_route(&self) -> Result<Route> {
        Route::from_path(&self.start_route).map_err(ConfigError::InvalidStartRoute)
    }

    /// Checks the start route and page size.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field's error.
    pub fn validate(&self) -> Result<()> {
        self.start_route()?;
        if !PAGE_SIZES.contains(&self.page_size) {
            return Err(ConfigError::InvalidPageSize {
                size: self.page_size,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_starts_on_dashboard() {
        let ui = UiConfig::default();
        assert!(ui.validate().is_ok());
        assert_eq!(ui.start_route().unwrap(), Route::Dashboard);
    }

    #[test]
    fn placeholder_routes_are_valid_start_routes() {
        let ui = UiConfig {
            start_route: "/reports".into(),
            ..Default::default()
        };
        assert_eq!(ui.start_route().unwrap(), Route::Reports);
    }

    #[test]
    fn unknown_start_route() {
        let ui = UiConfig {
            start_route: "/orders/42".into(),
            ..Default::default()
        };
        let err = ui.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidStartRoute(_)));
    }

    #[test]
    fn page_size_must_be_offered() {
        for size in PAGE_SIZES {
            let ui = UiConfig {
                page_size: size,
                ..Default::default()
            };
            assert!(ui.validate().is_ok(), "{size}");
        }

        let ui = UiConfig {
            page_size: 30,
            ..Default::default()
        };
        assert_eq!(
            ui.validate().unwrap_err().to_string(),
            "invalid page size 30: expected one of 10, 25, 50, 100"
        );
    }

    #[test]
    fn task_view_parses_from_snake_case() {
        let ui: UiConfig = serde_json::from_str(r#"{"task_view": "list"}"#).unwrap();
        assert_eq!(ui.task_view, TaskView::List);
        assert_eq!(ui.page_size, 50);
    }
}
