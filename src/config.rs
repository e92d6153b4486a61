//! # Configuration Module
//!
//! Catalog file resolution and data directory management for Moodtune.
//!
//! ## Resolution order
//!
//! 1. An explicit path (the `--catalog` flag, or the `MOODTUNE_CATALOG`
//!    environment variable through clap's env fallback).
//! 2. A `musics` file in the current directory, matching the original
//!    tool's default.
//! 3. The platform data directory:
//!    - Linux: `~/.local/share/moodtune/musics`
//!    - macOS: `~/Library/Application Support/moodtune/musics`
//!    - Windows: `%APPDATA%\moodtune\musics`
//!
//! Every resolved path is absolutized so log output and error messages
//! always name an unambiguous file.

use anyhow::{anyhow, Context, Result};
use log::{debug, info};
use path_absolutize::Absolutize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default catalog file name, inherited from the original tool.
pub const CATALOG_FILE_NAME: &str = "musics";

/// Resolve the catalog file to load, trying each strategy in order.
///
/// An explicit path is trusted but must exist; the fallback strategies are
/// each logged so `RUST_LOG=debug` shows where the catalog came from.
///
/// # Errors
///
/// Fails if an explicit path does not exist, or if no strategy finds a
/// catalog file.
pub fn resolve_catalog_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        let path = path
            .absolutize()
            .with_context(|| format!("Failed to absolutize catalog path: {}", path.display()))?
            .to_path_buf();
        if !path.is_file() {
            return Err(anyhow!("Catalog file does not exist: {}", path.display()));
        }
        debug!("Using explicit catalog: {}", path.display());
        return Ok(path);
    }

    let local = Path::new(CATALOG_FILE_NAME);
    if local.is_file() {
        let path = local
            .absolutize()
            .context("Failed to absolutize ./musics")?
            .to_path_buf();
        info!("Using catalog from current directory: {}", path.display());
        return Ok(path);
    }

    let data_catalog = get_data_dir()?.join(CATALOG_FILE_NAME);
    if data_catalog.is_file() {
        info!("Using catalog from data directory: {}", data_catalog.display());
        return Ok(data_catalog);
    }

    Err(anyhow!(
        "No catalog file found. Provide one with:\n\
         1. --catalog /path/to/musics (or MOODTUNE_CATALOG)\n\
         2. a 'musics' file in the current directory\n\
         3. a 'musics' file at {}",
        data_catalog.display()
    ))
}

/// Returns the platform-appropriate data directory for Moodtune.
///
/// The `moodtune` subdirectory is created if it doesn't exist, so users can
/// drop a `musics` file there without any setup step.
///
/// # Errors
///
/// This function will return an error if:
/// - The system data directory cannot be determined
/// - The moodtune subdirectory cannot be created due to permissions
pub fn get_data_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| {
        anyhow!(
            "Could not determine system data directory. Please ensure your platform supports standard data directories."
        )
    })?;

    let moodtune_dir = data_dir.join("moodtune");
    fs::create_dir_all(&moodtune_dir).with_context(|| {
        format!(
            "Failed to create Moodtune data directory at {}. Please check file permissions.",
            moodtune_dir.display()
        )
    })?;

    Ok(moodtune_dir)
}
