//! Log setup.
//!
//! The TUI owns the terminal, so log records go to a file. `RUST_LOG`
//! selects the level; `info` when unset.

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use std::fs::File;
use std::path::Path;

/// Build a logger that appends records to `path`
pub fn file_logger(path: &Path) -> Result<Builder> {
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    builder.target(Target::Pipe(Box::new(file)));
    Ok(builder)
}

/// Install the global logger when a log file was requested
pub fn init(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    file_logger(path)?
        .try_init()
        .context("Failed to install logger")?;
    log::info!("logging to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_path_is_noop() {
        assert!(init(None).is_ok());
    }

    #[test]
    fn test_file_logger_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snake.log");

        assert!(file_logger(&path).is_ok());
        assert!(path.exists());
    }

    #[test]
    fn test_unwritable_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("snake.log");

        let err = file_logger(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to open log file"));
    }
}
