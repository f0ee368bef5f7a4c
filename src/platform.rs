//! Config directory resolution.

use anyhow::{Context, Result};
use std::path::PathBuf;

const DIR_NAME: &str = ".time-calc";

/// Get the config directory.
///
/// Priority order:
/// 1. Home directory (~/.time-calc)
/// 2. Platform config directory (XDG on Linux, AppData on Windows)
pub fn config_dir() -> Result<PathBuf> {
    if let Some(home) = home::home_dir() {
        return Ok(home.join(DIR_NAME));
    }

    // - Linux: ~/.config/time-calc
    // - macOS: ~/Library/Application Support/time-calc
    // - Windows: C:\Users\<User>\AppData\Roaming\time-calc
    dirs::config_dir()
        .map(|dir| dir.join("time-calc"))
        .context("Could not find a home or config directory")
}

pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}
