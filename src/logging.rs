//! Tracing subscriber setup.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

use crate::config::LoggingConfig;
use crate::error::{AppError, Result};

const LOG_FILE_PREFIX: &str = "bookstore-dashboard.log";

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. When file logging
/// is enabled the returned guard must be held until exit so buffered lines
/// are flushed.
pub fn init(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| AppError::logging(e.to_string()))?;

    if !config.file_enabled {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init()
            .map_err(|e| AppError::logging(e.to_string()))?;
        return Ok(None);
    }

    let dir = config.log_dir();
    std::fs::create_dir_all(&dir)?;
    let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(std::io::stdout.and(file_writer))
        .try_init()
        .map_err(|e| AppError::logging(e.to_string()))?;

    tracing::info!("Writing logs to {:?}", dir);
    Ok(Some(guard))
}
