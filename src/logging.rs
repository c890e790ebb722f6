//! Tracing subscriber setup

use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, filter::ParseError, fmt};

use crate::config::LogConfig;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log level directive: {0}")]
    InvalidLevel(#[from] ParseError),

    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    #[error("Failed to create log directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to install subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// Install the global subscriber described by `config`
///
/// `RUST_LOG` takes precedence over `config.level`. When logging to a file the
/// returned guard must be kept alive; dropping it flushes pending lines.
pub fn init(config: &LogConfig) -> Result<Option<WorkerGuard>, LoggingError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)?,
    };

    let (writer, guard) = match &config.file {
        Some(path) => {
            let directory = path
                .parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .unwrap_or_else(|| std::path::Path::new("."));
            let file_name = path
                .file_name()
                .ok_or_else(|| LoggingError::InvalidPath(path.clone()))?;
            std::fs::create_dir_all(directory)?;

            let appender = tracing_appender::rolling::never(directory, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            (BoxMakeWriter::new(non_blocking), Some(guard))
        }
        None => (BoxMakeWriter::new(std::io::stderr), None),
    };

    let (json_layer, text_layer) = if config.json {
        (Some(fmt::layer().json().with_writer(writer)), None)
    } else {
        let ansi = config.file.is_none();
        (None, Some(fmt::layer().with_ansi(ansi).with_writer(writer)))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()?;

    debug!("Logging initialized");
    Ok(guard)
}
