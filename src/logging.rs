//! File logging for the binaries.
//!
//! stdout is the game surface, so log lines go to a file instead. Filtering
//! follows `RUST_LOG` (default: `info`).

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Install a global subscriber writing to `path`.
///
/// Keep the returned guard alive until exit; dropping it flushes pending lines.
/// Returns `None` if a global subscriber is already installed.
pub fn init_file_logging(path: impl AsRef<Path>) -> Result<Option<WorkerGuard>> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .with_context(|| format!("log path {} has no file name", path.display()))?;

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
    {
        Ok(()) => Ok(Some(guard)),
        // Another subscriber won; dropping the guard shuts our writer down.
        Err(_) => Ok(None),
    }
}
