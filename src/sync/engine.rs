use anyhow::{Context, Result};
use colored::*;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::control::should_apply;
use super::history::HistoryDb;
use super::remote::RemoteSource;
use crate::ui::prelude::*;
use crate::wallpaper::DesktopEnvironment;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    UpToDate { image_url: String },
    Applied { image_url: String, path: PathBuf },
}

pub struct SyncEngine<'a> {
    remote: &'a dyn RemoteSource,
    desktop: &'a dyn DesktopEnvironment,
    history: &'a HistoryDb,
    download_dir: PathBuf,
    keep_downloads: bool,
}

impl<'a> SyncEngine<'a> {
    pub fn new(
        remote: &'a dyn RemoteSource,
        desktop: &'a dyn DesktopEnvironment,
        history: &'a HistoryDb,
        download_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            remote,
            desktop,
            history,
            download_dir: download_dir.into(),
            keep_downloads: false,
        }
    }

    pub fn keep_downloads(mut self, keep: bool) -> Self {
        self.keep_downloads = keep;
        self
    }

    /// Fetch the control document and, if it announces something new,
    /// download it, set it as wallpaper and record the change.
    pub async fn check_once(&self) -> Result<SyncOutcome> {
        let doc = self.remote.fetch_control().await?;
        let last = self.history.last_change()?;

        if !should_apply(&doc, last.as_ref()) {
            debug(
                "sync.check.up_to_date",
                &format!("{} is already the current wallpaper", doc.image_url),
            );
            return Ok(SyncOutcome::UpToDate {
                image_url: doc.image_url,
            });
        }

        let downloaded = self
            .remote
            .download(&doc.image_url, &self.download_dir)
            .await?;
        let path = absolute(&downloaded)?;
        debug(
            "sync.download.done",
            &format!("Downloaded {} to {}", doc.image_url, path.display()),
        );

        self.desktop
            .set_wallpaper(&path.to_string_lossy())
            .with_context(|| format!("Applying {}", path.display()))?;

        self.history.record_change(&doc.image_url)?;

        if !self.keep_downloads
            && let Err(e) = std::fs::remove_file(&path)
        {
            emit(
                Level::Warn,
                "sync.download.cleanup_failed",
                &format!("Could not remove downloaded image {}: {}", path.display(), e),
                None,
            );
        }

        emit(
            Level::Success,
            "sync.check.applied",
            &format!("Wallpaper updated from {}", doc.image_url.green()),
            Some(serde_json::json!({ "image_url": doc.image_url })),
        );

        Ok(SyncOutcome::Applied {
            image_url: doc.image_url,
            path,
        })
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    Ok(std::env::current_dir()
        .context("getting current directory")?
        .join(path))
}

/// Check now, then once per `interval`, until Ctrl+C.
pub async fn run_loop(engine: &SyncEngine<'_>, interval: Duration) -> Result<()> {
    emit(
        Level::Info,
        "sync.loop.started",
        &format!(
            "Checking for new wallpapers every {} minute(s), press Ctrl+C to stop",
            interval.as_secs() / 60
        ),
        None,
    );

    run_until(engine, interval, async {
        let _ = tokio::signal::ctrl_c().await;
    })
    .await
}

/// Check now, then once per `interval`, until `shutdown` completes. A
/// shutdown requested during a check takes effect once that check finishes.
pub async fn run_until(
    engine: &SyncEngine<'_>,
    interval: Duration,
    shutdown: impl Future<Output = ()>,
) -> Result<()> {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    // Polled first on every iteration, so the signal listener is registered
    // before the first check and stays registered across checks.
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            biased;
            _ = &mut shutdown => {
                emit(Level::Info, "sync.loop.stopped", "Stopping wallpaper sync", None);
                return Ok(());
            }
            _ = ticker.tick() => {
                if let Err(e) = engine.check_once().await {
                    emit(
                        Level::Warn,
                        "sync.check.failed",
                        &format!("Wallpaper check failed: {:#}", e),
                        None,
                    );
                }
            }
        }
    }
}
