//! Tracing subscriber initialization
//!
//! Logs go to a file so they never mix with the game's terminal output.
//! Follow them with `tail -f` from another terminal.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for logging initialization failures
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Path has no file name component
    #[error("invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    #[error("tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Install a file-backed tracing subscriber
///
/// Respects `RUST_LOG`, defaulting to `info`. Missing parent directories
/// are created.
///
/// # Errors
/// Returns a [`LoggingError`] if the path is unusable, the directory cannot
/// be created, or a subscriber is already installed.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    use tracing_subscriber::EnvFilter;

    let file_name = log_path
        .file_name()
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

    let directory = prepare_directory(log_path)?;

    let file_appender = tracing_appender::rolling::never(directory, file_name);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(file_appender)
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}

/// Create the directory that will hold `log_path` and return it
///
/// A bare file name resolves to the current directory.
fn prepare_directory(log_path: &Path) -> Result<&Path, LoggingError> {
    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    std::fs::create_dir_all(directory).map_err(|source| LoggingError::DirectoryCreation {
        path: directory.to_path_buf(),
        source,
    })?;

    Ok(directory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn init_rejects_path_without_file_name() {
        let result = init(Path::new("/"));
        assert!(matches!(result, Err(LoggingError::InvalidPath(_))));
    }

    #[test]
    fn prepare_directory_creates_missing_parents() {
        let test_dir = std::env::temp_dir().join("wordle_rounds_test_logs");
        let log_file = test_dir.join("nested").join("game.log");
        let _ = fs::remove_dir_all(&test_dir);

        let directory = prepare_directory(&log_file).unwrap();

        assert_eq!(directory, test_dir.join("nested"));
        assert!(directory.is_dir());
        assert!(!log_file.exists());

        let _ = fs::remove_dir_all(&test_dir);
    }

    #[test]
    fn prepare_directory_defaults_to_current_dir() {
        let directory = prepare_directory(Path::new("game.log")).unwrap();
        assert_eq!(directory, Path::new("."));
    }

    #[test]
    fn prepare_directory_reports_blocked_path() {
        let blocker = std::env::temp_dir().join("wordle_rounds_test_log_blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let log_path = blocker.join("game.log");
        let result = prepare_directory(&log_path);
        assert!(matches!(result, Err(LoggingError::DirectoryCreation { .. })));

        let _ = fs::remove_file(&blocker);
    }
}
