use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, EnvFilter};

fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Installs a stdout subscriber; `RUST_LOG` wins over `default_level`.
/// Returns false when a global subscriber was already set.
pub fn init_logging(default_level: &str) -> bool {
    fmt()
        .with_env_filter(env_filter(default_level))
        .with_target(true)
        .with_level(true)
        .try_init()
        .is_ok()
}

/// Installs a daily-rolling file subscriber under `dir`.
///
/// Keep the guard alive for as long as events should be flushed.
pub fn init_file_logging(dir: &Path, file_prefix: &str, default_level: &str) -> Result<WorkerGuard> {
    fs::create_dir_all(dir).context("Failed to create log directory")?;

    let appender = tracing_appender::rolling::daily(dir, file_prefix);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install file logger: {}", e))?;

    Ok(guard)
}
