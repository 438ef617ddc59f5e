//! Logging init: file under the XDG state dir, or stderr when that is unusable.
//!
//! Retry attempts are logged at debug level and exhaustion at warn level by
//! the `retry` module; both end up in `retrying.log` with the default filter.

use anyhow::{anyhow, Result};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,retrying=debug";

/// `RUST_LOG` if set and valid, otherwise [`DEFAULT_FILTER`].
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Path of the log file: `~/.local/state/retrying/retrying.log`.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("retrying")?;
    Ok(xdg_dirs.get_state_home().join("retrying.log"))
}

/// A cloned log file handle, or stderr if the clone failed.
enum LogSink {
    File(File),
    Stderr,
}

impl Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogSink::File(f) => f.write(buf),
            LogSink::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogSink::File(f) => f.flush(),
            LogSink::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct LogFile(File);

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = LogSink;

    fn make_writer(&'a self) -> Self::Writer {
        self.0
            .try_clone()
            .map(LogSink::File)
            .unwrap_or(LogSink::Stderr)
    }
}

/// Initialize structured logging to the XDG state log file.
/// On failure (e.g. state dir unwritable) returns Err so the caller can fall back to stderr.
pub fn init_logging() -> Result<PathBuf> {
    let path = log_file_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(BoxMakeWriter::new(LogFile(file)))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("installing log subscriber: {e}"))?;

    tracing::info!("retrying logging initialized at {}", path.display());
    Ok(path)
}

/// Initialize logging to stderr only. Fallback when [`init_logging`] fails.
pub fn init_logging_stderr() {
    // A subscriber may already be installed (e.g. by a test harness); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_lives_under_retrying_state_dir() {
        let path = log_file_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "retrying.log");
    }

    #[test]
    fn stderr_init_is_idempotent() {
        init_logging_stderr();
        init_logging_stderr();
        tracing::debug!("still alive");
    }
}
