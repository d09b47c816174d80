//! Logging setup
//!
//! The terminal belongs to the alternate screen while the app runs, so log
//! output only ever goes to a file.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Verbosity;
use crate::error::{AppError, AppResult};

/// Builds the log filter: `RUST_LOG` when set, else the verbosity level
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()))
}

/// Installs the global subscriber writing to `log_file`
///
/// Returns `Ok(false)` without installing anything when no file is given.
pub fn init(verbosity: Verbosity, log_file: Option<&Path>) -> AppResult<bool> {
    let Some(path) = log_file else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| AppError::logging(format!("cannot open {}: {e}", path.display())))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::logging(e.to_string()))?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_without_file_is_noop() {
        assert!(!init(Verbosity::Debug, None).unwrap());
    }

    #[test]
    fn test_init_with_bad_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("calc.log");
        let err = init(Verbosity::Normal, Some(&path)).unwrap_err();
        assert!(matches!(err, AppError::Logging { .. }));
    }

    #[test]
    fn test_init_writes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calc.log");
        assert!(init(Verbosity::Debug, Some(&path)).unwrap());
        assert!(path.exists());
    }
}
