//! nexus - a terminal admin console for orders, customers, and tasks.
//!
//! This is the main binary that launches the TUI application.

mod logging;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use nexus_config::Config;
use nexus_protocol::{Catalog, Route};
use nexus_tui::{App, terminal};
use tracing::info;

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "nexus", version, about)]
struct Cli {
    /// Configuration file to load and save settings to.
    #[arg(long, env = "NEXUS_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Page to open on startup, e.g. `/orders`. Overrides `ui.start_route`.
    #[arg(long, env = "NEXUS_ROUTE", value_name = "PATH")]
    route: Option<Route>,
}

impl Cli {
    async fn load_config(&self) -> anyhow::Result<Config> {
        match &self.config {
            Some(path) => Config::load_from(path)
                .with_context(|| format!("failed to load config from {}", path.display())),
            None => Ok(Config::load().await?),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config().await?;
    let _guard = logging::init(&config.log)?;
    info!(version = env!("CARGO_PKG_VERSION"), "starting nexus");

    let mut app = App::new(Catalog::sample(), config);
    if let Some(route) = cli.route {
        app = app.with_route(route);
    }
    if let Some(path) = cli.config {
        app = app.with_config_path(path);
    }

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();
    let mut terminal = terminal::setup_terminal()?;

    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn route_flag_parses_paths() {
        let cli = Cli::try_parse_from(["nexus", "--route", "/customers"]).unwrap();
        assert_eq!(cli.route, Some(Route::Customers));

        assert!(Cli::try_parse_from(["nexus", "--route", "/orders/42"]).is_err());
    }

    #[test]
    fn config_flag_takes_a_path() {
        let cli = Cli::try_parse_from(["nexus", "--config", "/tmp/nexus.json5"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/nexus.json5")));
    }
}
