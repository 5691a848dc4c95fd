//! Logging configuration using tracing
//!
//! The TUI owns the terminal, so logs only go to a file.

use anyhow::Result;
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the logging subsystem
///
/// Logs are written to `<data dir>/starkfield/logs/starkfield.log`, rotated daily.
/// Level is controlled by the `STARKFIELD_LOG` environment variable.
pub fn init() -> Result<PathBuf> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "starkfield.log");

    let env_filter = EnvFilter::try_from_env("STARKFIELD_LOG")
        .unwrap_or_else(|_| EnvFilter::new("starkfield=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()?;

    tracing::info!("Starkfield listing starting, logs in {}", log_dir.display());

    Ok(log_dir)
}

fn log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("starkfield").join("logs")
}
