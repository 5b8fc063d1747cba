//! Navigation routes.
//!
//! The sidebar lists every [`Route`] in a fixed order. Only some routes have a
//! page behind them; the rest render a placeholder.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ProtocolError, Result};

/// A navigation destination.
///
/// # Examples
///
/// ```
/// use nexus_protocol::Route;
///
/// let route: Route = "/orders".parse().unwrap();
/// assert_eq!(route, Route::Orders);
/// assert_eq!(route.label(), "Orders");
/// assert!(route.is_implemented());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    #[default]
    Dashboard,
    Orders,
    Tasks,
    Automation,
    Inventory,
    Customers,
    Suppliers,
    Finance,
    Marketplace,
    Reports,
}

/// Sidebar items in display order.
pub const NAV_ITEMS: [Route; 10] = [
    Route::Dashboard,
    Route::Orders,
    Route::Tasks,
    Route::Automation,
    Route::Inventory,
    Route::Customers,
    Route::Suppliers,
    Route::Finance,
    Route::Marketplace,
    Route::Reports,
];

impl Route {
    /// The route's path, e.g. `/orders`.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::Orders => "/orders",
            Self::Tasks => "/tasks",
            Self::Automation => "/automation",
            Self::Inventory => "/inventory",
            Self::Customers => "/customers",
            Self::Suppliers => "/suppliers",
            Self::Finance => "/finance",
            Self::Marketplace => "/marketplace",
            Self::Reports => "/reports",
        }
    }

    /// Sidebar label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Orders => "Orders",
            Self::Tasks => "Tasks",
            Self::Automation => "Automation",
            Self::Inventory => "Inventory",
            Self::Customers => "Customers",
            Self::Suppliers => "Suppliers",
            Self::Finance => "Finance",
            Self::Marketplace => "Marketplace",
            Self::Reports => "Reports",
        }
    }

    /// Returns `true` if the route has a page rather than a placeholder.
    #[must_use]
    pub const fn is_implemented(self) -> bool {
        matches!(
            self,
            Self::Dashboard | Self::Orders | Self::Tasks | Self::Customers
        )
    }

    /// Position of the route in [`NAV_ITEMS`].
    #[must_use]
    pub fn nav_index(self) -> usize {
        NAV_ITEMS.iter().position(|r| *r == self).unwrap_or(0)
    }

    /// Looks up a route by exact path.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::UnknownRoute`] for any other path, including
    /// sub-paths such as `/orders/42`.
    pub fn from_path(path: &str) -> Result<Self> {
        NAV_ITEMS
            .into_iter()
            .find(|r| r.path() == path)
            .ok_or_else(|| ProtocolError::UnknownRoute(path.to_string()))
    }

    /// Returns `true` if this sidebar item should be highlighted for
    /// `current_path`. Matching is exact, not by prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use nexus_protocol::Route;
    ///
    /// assert!(Route::Orders.is_active("/orders"));
    /// assert!(!Route::Orders.is_active("/orders/FX-0005"));
    /// assert!(!Route::Dashboard.is_active("/orders"));
    /// ```
    #[must_use]
    pub fn is_active(self, current_path: &str) -> bool {
        self.path() == current_path
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_path(s)
    }
}
