//! Configuration management for the nexus console.
//!
//! This crate handles loading, validating, and persisting configuration.
//!
//! # Overview
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`business`]: Business profile edited in the settings modal
//! - [`ui`]: Start page, task layout, and table page size
//! - [`log`]: Log level and directory
//! - [`persistence`]: Config file discovery, reading, and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. `--config <path>` / `NEXUS_CONFIG` (handled by the binary)
//! 2. Local config (`./nexus.json5` or `./nexus.json`)
//! 3. User config (`~/.config/nexus/config.json5` or `config.json`)
//! 4. Built-in defaults
//!
//! # File Format
//!
//! ```json5
//! {
//!   business: { name: "Acme Corp", currency: "bdt" },
//!   ui: { start_route: "/", task_view: "board", page_size: 50 },
//!   log: { level: "info" },
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use nexus_config::Config;
//!
//! # async fn example() -> nexus_config::Result<()> {
//! let config = Config::load().await?;
//! println!("Starting on {}", config.start_route()?);
//! # Ok(())
//! # }
//! ```

pub mod business;
pub mod config;
pub mod error;
pub mod log;
pub mod persistence;
pub mod ui;

// Re-export primary types at crate root for convenience
pub use business::{BusinessConfig, Currency};
pub use config::Config;
pub use error::{ConfigError, Result};
pub use log::LogConfig;
pub use ui::{PAGE_SIZES, UiConfig};
