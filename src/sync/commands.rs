use anyhow::{Context, Result};
use colored::*;
use std::path::{Path, PathBuf};

use super::cli::{ConfigCommands, SyncCommands};
use super::config::SyncConfig;
use super::engine::{SyncEngine, SyncOutcome, run_loop};
use super::history::HistoryDb;
use super::remote::HttpSource;
use crate::common::paths;
use crate::ui::prelude::*;
use crate::wallpaper::system_desktop;

pub async fn handle_sync_command(command: SyncCommands, config_path: Option<PathBuf>) -> Result<()> {
    let config_path = match config_path {
        Some(p) => p,
        None => SyncConfig::default_path()?,
    };

    match command {
        SyncCommands::Run => handle_run(&config_path, true).await,
        SyncCommands::Check => handle_run(&config_path, false).await,
        SyncCommands::History { limit } => handle_history(limit),
        SyncCommands::Config { command } => handle_config(command, &config_path),
    }
}

async fn handle_run(config_path: &Path, forever: bool) -> Result<()> {
    let config = SyncConfig::load_from(config_path)?;
    let remote = HttpSource::new(config.control_url()?, &config.user_agent())?;
    let desktop = system_desktop();
    let history = HistoryDb::open(&paths::history_db_path()?)?;
    let engine = SyncEngine::new(&remote, desktop.as_ref(), &history, config.download_dir()?)
        .keep_downloads(config.keep_downloads);

    if forever {
        return run_loop(&engine, config.interval()).await;
    }

    match engine.check_once().await? {
        SyncOutcome::UpToDate { image_url } => emit(
            Level::Info,
            "sync.check.up_to_date",
            &format!("Wallpaper is up to date ({})", image_url),
            None,
        ),
        SyncOutcome::Applied { .. } => {}
    }
    Ok(())
}

fn handle_history(limit: usize) -> Result<()> {
    let history = HistoryDb::open(&paths::history_db_path()?)?;
    let changes = history.recent_changes(limit)?;

    if matches!(get_output_format(), OutputFormat::Json) {
        emit(
            Level::Info,
            "sync.history",
            &format!("{} change(s)", changes.len()),
            Some(serde_json::to_value(&changes).context("serializing history")?),
        );
        return Ok(());
    }

    if changes.is_empty() {
        emit(Level::Info, "sync.history.empty", "No wallpaper changes recorded yet", None);
        return Ok(());
    }

    for change in &changes {
        emit(
            Level::Info,
            "sync.history.entry",
            &format!("{}  {}", change.applied_at.dimmed(), change.image_url),
            None,
        );
    }
    Ok(())
}

fn handle_config(command: ConfigCommands, config_path: &Path) -> Result<()> {
    match command {
        ConfigCommands::Path => {
            emit(
                Level::Info,
                "sync.config.path",
                &config_path.display().to_string(),
                None,
            );
        }
        ConfigCommands::Show => {
            let config = SyncConfig::load_from(config_path)?;
            let toml = toml::to_string_pretty(&config).context("serializing config to toml")?;
            emit(
                Level::Info,
                "sync.config.show",
                toml.trim_end(),
                serde_json::to_value(&config).ok(),
            );
        }
        ConfigCommands::SetUrl { url } => {
            let mut config = SyncConfig::load_from(config_path)?;
            config.control_url = Some(url.clone());
            config.save_to(config_path)?;
            emit(
                Level::Success,
                "sync.config.updated",
                &format!("Control URL set to {}", url.green()),
                None,
            );
        }
    }
    Ok(())
}
