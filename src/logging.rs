//! File logging
//!
//! The terminal is in raw mode on the alternate screen while the app runs,
//! so events go to a log file. Without a writable file logging stays off.

use crate::config::Config;
use anyhow::Result;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn open_log_file(path: &Path) -> Option<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

/// `RUST_LOG` wins over the configured level
fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber; returns the file being written, if any
pub fn init(config: &Config) -> Result<Option<PathBuf>> {
    let Some(path) = config.log_path() else {
        return Ok(None);
    };
    let Some(file) = open_log_file(&path) else {
        return Ok(None);
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config.log_level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {}", e))?;

    Ok(Some(path))
}
