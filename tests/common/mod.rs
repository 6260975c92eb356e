use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scratch space for one test: config and data directories live inside a
/// temp dir so nothing touches the real user profile.
pub struct TestEnvironment {
    temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir()?;
        std::fs::create_dir_all(temp_dir.path().join("config"))?;
        std::fs::create_dir_all(temp_dir.path().join("data"))?;
        Ok(Self { temp_dir })
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_home(&self) -> PathBuf {
        self.path().join("config")
    }

    pub fn data_home(&self) -> PathBuf {
        self.path().join("data")
    }

    /// Config file passed to `deskwall-sync --config`
    pub fn sync_config(&self) -> PathBuf {
        self.path().join("sync.toml")
    }

    /// Environment overrides pointing the platform directories at the temp dir
    pub fn vars(&self) -> Vec<(&'static str, PathBuf)> {
        vec![
            ("XDG_CONFIG_HOME", self.config_home()),
            ("XDG_DATA_HOME", self.data_home()),
            ("HOME", self.path().to_path_buf()),
        ]
    }
}
