//! Terminal UI for the nexus console.
//!
//! This crate provides a Ratatui-based admin console over the order,
//! customer, and task catalog: a sidebar shell, one page per route, status
//! menus, and the settings modal.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct and run loop
//! - [`state`]: Application state management
//! - [`tasks_state`], [`orders_state`], [`customers_state`]: Per-page view state
//! - [`menu`], [`form`]: Status menu and the "New Task" / "Add Customer" forms
//! - [`settings_state`]: Settings panel state management
//! - [`layout`]: Screen regions shared by rendering and hit-testing
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event handling and key mappings
//! - [`widgets`]: Rendering
//!
//! # Example
//!
//! ```no_run
//! use nexus_config::Config;
//! use nexus_protocol::Catalog;
//! use nexus_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let mut app = App::new(Catalog::sample(), Config::default());
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod customers_state;
pub mod event;
pub mod form;
pub mod layout;
pub mod menu;
pub mod orders_state;
pub mod settings_state;
pub mod state;
pub mod tasks_state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use state::{AppState, Focus};
