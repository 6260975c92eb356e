use anyhow::{Context, Result};
use std::path::PathBuf;

/// Get the deskwall config directory
pub fn deskwall_config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Unable to determine user config directory")?
        .join("deskwall");

    std::fs::create_dir_all(&config_dir)
        .with_context(|| format!("creating config directory at {}", config_dir.display()))?;

    Ok(config_dir)
}

/// Get the deskwall data directory
pub fn deskwall_data_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_local_dir()
        .context("Unable to determine local data directory")?
        .join("deskwall");

    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("creating data directory at {}", data_dir.display()))?;

    Ok(data_dir)
}

/// Default location for images fetched by the sync controller
pub fn downloads_dir() -> Result<PathBuf> {
    let dir = deskwall_data_dir()?.join("downloads");
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("creating downloads directory at {}", dir.display()))?;
    Ok(dir)
}

/// Wallpaper change history database
pub fn history_db_path() -> Result<PathBuf> {
    Ok(deskwall_data_dir()?.join("history.db"))
}
