//! Run-scoped logging setup.
//!
//! A run writes two streams:
//! - the console (stderr), filtered by `RUST_LOG`, and
//! - an appended log file holding one line per run start and one per
//!   confirmed prime, each timestamped.
//!
//! The subscriber is installed for the current thread only and removed when
//! the returned [`LogGuard`] drops, so the logger lives exactly as long as
//! the run that owns it.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Default log file name, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "logfile";

/// Console filter used when `RUST_LOG` is unset.
pub const DEFAULT_CONSOLE_FILTER: &str = "warn";

/// Result type for logging setup.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while installing the logger.
#[derive(Debug, Error)]
pub enum Error {
    /// The log file could not be opened for appending.
    #[error("cannot open log file {path:?}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The console filter directive did not parse.
    #[error("invalid log filter: {0}")]
    Filter(String),
}

/// Where and how much to log.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Archive log file; `None` disables file logging.
    pub log_file: Option<PathBuf>,

    /// Console filter directive used when `RUST_LOG` is unset.
    pub console_filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_file: Some(PathBuf::from(DEFAULT_LOG_FILE)),
            console_filter: DEFAULT_CONSOLE_FILTER.to_string(),
        }
    }
}

impl LoggingConfig {
    /// Console only.
    #[must_use]
    pub fn console_only() -> Self {
        Self {
            log_file: None,
            ..Default::default()
        }
    }

    /// Log to `path` in addition to the console.
    #[must_use]
    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Self {
            log_file: Some(path.into()),
            ..Default::default()
        }
    }
}

/// Keeps the run's subscriber installed; dropping it uninstalls the logger.
#[must_use = "logging stops when the guard is dropped"]
pub struct LogGuard {
    _default: DefaultGuard,
}

/// Open `path` for appending, creating it if needed.
pub fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| Error::LogFile {
            path: path.to_path_buf(),
            source,
        })
}

/// Install the console and file layers for the current run.
pub fn init(config: &LoggingConfig) -> Result<LogGuard> {
    let console_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.console_filter)
            .map_err(|e| Error::Filter(e.to_string()))?,
    };
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(console_filter);

    let file = match &config.log_file {
        Some(path) => {
            let file = open_log_file(path)?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(false)
                    .with_writer(Mutex::new(file))
                    .with_filter(LevelFilter::INFO),
            )
        }
        None => None,
    };

    let guard = tracing_subscriber::registry()
        .with(console)
        .with(file)
        .set_default();

    Ok(LogGuard { _default: guard })
}
