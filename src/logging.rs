use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt};

use crate::error::{BookshelfError, Result};

/// Sends tracing output to `path`; the terminal belongs to the UI.
/// `RUST_LOG` takes precedence over `default_level`.
/// Keep the returned guard alive until exit so buffered lines are flushed.
pub fn init(path: &Path, default_level: &str) -> Result<WorkerGuard> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir)?;
    let file_name = path
        .file_name()
        .map_or_else(|| "bookshelf.log".into(), |name| name.to_os_string());

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| BookshelfError::Logging(e.to_string()))?;

    Ok(guard)
}
