//! Centralized configuration paths for socialtext
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/socialtext/`
//! - Windows: `%APPDATA%\socialtext\`

use std::{env, fs, path::PathBuf};

use anyhow::{Context, Result};

const APP_DIR: &str = "socialtext";

/// Base config directory for socialtext
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/socialtext`
///   - Else: `~/.config/socialtext`
///
/// Windows:
///   - `%APPDATA%\socialtext`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/socialtext/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/socialtext/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf> {
    let logs = logs_dir().context("No config directory available")?;
    fs::create_dir_all(&logs)
        .with_context(|| format!("Failed to create directory {}", logs.display()))?;
    Ok(logs)
}
