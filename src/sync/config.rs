use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::common::paths;

fn default_interval_minutes() -> u64 {
    60
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// URL of the `<image_url>,<date>` control document
    pub control_url: Option<String>,
    #[serde(default = "default_interval_minutes")]
    pub interval_minutes: u64,
    /// Where downloaded images are stored before being applied
    pub download_dir: Option<PathBuf>,
    #[serde(default)]
    pub keep_downloads: bool,
    pub user_agent: Option<String>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            control_url: None,
            interval_minutes: default_interval_minutes(),
            download_dir: None,
            keep_downloads: false,
            user_agent: None,
        }
    }
}

impl SyncConfig {
    pub fn default_path() -> Result<PathBuf> {
        Ok(paths::deskwall_config_dir()?.join("sync.toml"))
    }

    pub fn load_from(cfg_path: &Path) -> Result<Self> {
        if !cfg_path.exists() {
            return Ok(Self::default());
        }

        let s = fs::read_to_string(cfg_path)
            .with_context(|| format!("reading config {}", cfg_path.display()))?;
        toml::from_str(&s).context("parsing config toml")
    }

    pub fn save_to(&self, cfg_path: &Path) -> Result<()> {
        if let Some(parent) = cfg_path.parent() {
            fs::create_dir_all(parent).context("creating config directory")?;
        }

        let toml = toml::to_string_pretty(self).context("serializing config to toml")?;
        fs::write(cfg_path, toml).context("writing config file")?;
        Ok(())
    }

    pub fn control_url(&self) -> Result<&str> {
        self.control_url
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .context("No control_url configured; run `deskwall-sync config set-url <URL>`")
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_minutes.max(1) * 60)
    }

    pub fn download_dir(&self) -> Result<PathBuf> {
        match &self.download_dir {
            Some(dir) => {
                fs::create_dir_all(dir)
                    .with_context(|| format!("creating download directory {}", dir.display()))?;
                Ok(dir.clone())
            }
            None => paths::downloads_dir(),
        }
    }

    pub fn user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("deskwall/{}", env!("CARGO_PKG_VERSION")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = SyncConfig::load_from(&dir.path().join("sync.toml")).unwrap();
        assert_eq!(cfg, SyncConfig::default());
        assert_eq!(cfg.interval(), Duration::from_secs(3600));
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sync.toml");
        fs::write(&path, "control_url = \"https://example.com/wall\"\n").unwrap();

        let cfg = SyncConfig::load_from(&path).unwrap();
        assert_eq!(cfg.control_url().unwrap(), "https://example.com/wall");
        assert_eq!(cfg.interval_minutes, 60);
        assert!(!cfg.keep_downloads);
    }

    #[test]
    fn save_then_load_keeps_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("sync.toml");
        let cfg = SyncConfig {
            control_url: Some("https://example.com/c".into()),
            interval_minutes: 15,
            download_dir: Some(dir.path().join("dl")),
            keep_downloads: true,
            user_agent: None,
        };
        cfg.save_to(&path).unwrap();
        assert_eq!(SyncConfig::load_from(&path).unwrap(), cfg);
    }

    #[test]
    fn blank_control_url_is_an_error() {
        let cfg = SyncConfig {
            control_url: Some("  ".into()),
            ..Default::default()
        };
        assert!(cfg.control_url().is_err());
    }

    #[test]
    fn zero_interval_is_clamped() {
        let cfg = SyncConfig {
            interval_minutes: 0,
            ..Default::default()
        };
        assert_eq!(cfg.interval(), Duration::from_secs(60));
    }
}
