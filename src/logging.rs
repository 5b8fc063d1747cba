//! File logging.
//!
//! The terminal belongs to the UI, so log output goes to a daily-rolling
//! file under the configured log directory instead of stderr.

use std::fs;

use anyhow::Context;
use nexus_config::LogConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable overriding the configured log filter.
pub const LOG_ENV: &str = "NEXUS_LOG";

/// File name prefix of the rolling log files.
const LOG_FILE_PREFIX: &str = "nexus.log";

/// Installs the global subscriber.
///
/// The returned guard flushes buffered lines when dropped; keep it alive
/// for the lifetime of the process.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created, the filter does
/// not parse, or a subscriber is already installed.
pub fn init(config: &LogConfig) -> anyhow::Result<WorkerGuard> {
    let directory = config.resolved_directory()?;
    fs::create_dir_all(&directory)
        .with_context(|| format!("failed to create log directory {}", directory.display()))?;

    let filter = filter(std::env::var(LOG_ENV).ok().as_deref(), &config.level)?;
    let appender = tracing_appender::rolling::daily(&directory, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .context("failed to install the log subscriber")?;

    Ok(guard)
}

/// The filter from `NEXUS_LOG` when set, else the configured level.
fn filter(env: Option<&str>, level: &str) -> anyhow::Result<EnvFilter> {
    let directive = env.filter(|d| !d.trim().is_empty()).unwrap_or(level);
    EnvFilter::try_new(directive).with_context(|| format!("invalid log filter `{directive}`"))
}
