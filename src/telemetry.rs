//! File-based structured logging.
//!
//! The terminal belongs to the TUI, so log events go to a JSON Lines file
//! under the configured log directory.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Local};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use crate::config::Config;

/// Errors that can occur while setting up logging.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The log directory or file could not be created.
    #[error("could not open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The `MARSFORM_LOG` filter could not be parsed.
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    /// A global subscriber was already installed.
    #[error("logging already initialised: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Returns the log file path for a session started at `started`.
pub fn log_file_path(dir: &Path, started: DateTime<Local>) -> PathBuf {
    dir.join(format!("marsform-{}.jsonl", started.format("%Y%m%d-%H%M%S")))
}

/// Creates the log directory if needed and opens a fresh session log file.
pub fn open_log_file(dir: &Path, started: DateTime<Local>) -> Result<(PathBuf, File), TelemetryError> {
    let path = log_file_path(dir, started);
    let open = || -> io::Result<File> {
        fs::create_dir_all(dir)?;
        OpenOptions::new().create(true).append(true).open(&path)
    };
    match open() {
        Ok(file) => Ok((path, file)),
        Err(source) => Err(TelemetryError::LogFile { path, source }),
    }
}

/// Installs the global JSON subscriber. Returns the path of the log file.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn init(config: &Config) -> Result<PathBuf, TelemetryError> {
    let filter = EnvFilter::try_new(&config.log_filter)?;
    let (path, file) = open_log_file(&config.log_dir, Local::now())?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(filter)
        .try_init()?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use tempfile::tempdir;

    use super::*;

    fn started() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 16, 9, 5, 7).unwrap()
    }

    #[test]
    fn file_name_has_session_timestamp() {
        let path = log_file_path(Path::new("/logs"), started());
        assert_eq!(path, PathBuf::from("/logs/marsform-20261016-090507.jsonl"));
    }

    #[test]
    fn open_creates_missing_directories() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let (path, _file) = open_log_file(&nested, started()).unwrap();
        assert!(path.exists());
        assert_eq!(path.parent().unwrap(), nested);
    }

    #[test]
    fn open_fails_when_directory_is_a_file() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        let err = open_log_file(&blocker, started()).unwrap_err();
        assert!(matches!(err, TelemetryError::LogFile { .. }));
    }
}
