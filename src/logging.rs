use crate::error::{PrioError, Result};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter, Layer, fmt, layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt,
};

const DEFAULT_LOG_NAME: &str = "prio.log";

/// Initialize the logging system
///
/// # Arguments
/// * `verbose` - Enable verbose (DEBUG) logging
/// * `log_file` - Optional path to log file. If None, logs only to stderr
pub fn init(verbose: bool, log_file: Option<PathBuf>) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let file_layer = match log_file {
        Some(log_path) => Some(json_file_layer(file_appender(&log_path)?)),
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| PrioError::Config(format!("Failed to initialize logging: {e}")))
}

/// Filter used when `RUST_LOG` is unset. Only warnings unless verbose, so
/// log lines stay out of the menus.
pub fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::new(if verbose { "prio=debug" } else { "prio=warn" })
}

/// Daily-rotated appender writing `<file name>.<date>` next to `log_path`.
/// The directory is created if missing.
pub fn file_appender(log_path: &Path) -> Result<RollingFileAppender> {
    let dir = log_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir).map_err(|e| PrioError::persistence(dir, e))?;

    let prefix = log_path
        .file_name()
        .unwrap_or_else(|| OsStr::new(DEFAULT_LOG_NAME))
        .to_string_lossy()
        .into_owned();

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .build(dir)
        .map_err(|e| {
            PrioError::Config(format!(
                "Failed to open log file {}: {e}",
                log_path.display()
            ))
        })
}

fn json_file_layer<S>(appender: RollingFileAppender) -> impl Layer<S>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer().with_writer(appender).with_ansi(false).json()
}
