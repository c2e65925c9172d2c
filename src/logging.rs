//! Tracing setup.
//!
//! The terminal belongs to the game screen, so log output only goes to a file.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "tile_snake=info";

/// Install a file-backed subscriber. `RUST_LOG` overrides the default filter.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("Failed to install tracing subscriber: {err}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_file_means_no_subscriber() {
        assert!(init(None).is_ok());
    }

    #[test]
    fn test_unwritable_path_is_reported() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing").join("game.log");
        let err = init(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to create log file"));
    }
}
