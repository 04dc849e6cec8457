//! Where Stanza keeps its files
//!
//! Everything lives in one directory, `~/.config/stanza/` unless the
//! `STANZA_DIR` environment variable names another one:
//! - config.toml - User configuration
//! - stanza.sqlite - Favorites and the daily poem

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;

/// Environment variable that overrides the data directory
pub const DIR_ENV: &str = "STANZA_DIR";

/// Resolve the data directory without touching the filesystem.
///
/// A non-empty override wins; otherwise `<home>/.config/stanza`.
fn resolve_dir(override_dir: Option<OsString>, home: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = override_dir.filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    let home = home.with_context(|| {
        format!("Could not determine home directory (set {DIR_ENV} to choose a data directory)")
    })?;
    Ok(home.join(".config").join("stanza"))
}

/// Get the Stanza data directory, creating it if needed
pub fn stanza_dir() -> Result<PathBuf> {
    let dir = resolve_dir(std::env::var_os(DIR_ENV), dirs::home_dir())?;
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create data directory {}", dir.display()))?;
    Ok(dir)
}

/// Get the config file path
pub fn config_path() -> Result<PathBuf> {
    Ok(stanza_dir()?.join("config.toml"))
}

/// Get the database file path
pub fn database_path() -> Result<PathBuf> {
    Ok(stanza_dir()?.join("stanza.sqlite"))
}
