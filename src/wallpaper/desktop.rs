use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// `SPI_SETDESKWALLPAPER`
pub const SPI_SETDESKWALLPAPER: u32 = 0x0014;
/// Write the new setting to the user profile.
pub const SPIF_UPDATEINIFILE: u32 = 0x0001;
/// Broadcast `WM_SETTINGCHANGE` after updating the profile.
pub const SPIF_SENDWININICHANGE: u32 = 0x0002;

pub const WALLPAPER_UPDATE_FLAGS: u32 = SPIF_UPDATEINIFILE | SPIF_SENDWININICHANGE;

/// The argument tuple handed to the system-parameter facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WallpaperCall {
    pub action: u32,
    pub param: u32,
    pub path: String,
    pub flags: u32,
}

impl WallpaperCall {
    /// Persist and broadcast a new desktop wallpaper.
    pub fn desk_wallpaper(path: impl Into<String>) -> Self {
        Self {
            action: SPI_SETDESKWALLPAPER,
            param: 0,
            path: path.into(),
            flags: WALLPAPER_UPDATE_FLAGS,
        }
    }
}

impl fmt::Display for WallpaperCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "action={:#04x} param={} path=\"{}\" flags={:#04x}",
            self.action, self.param, self.path, self.flags
        )
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DesktopError {
    #[error("the system rejected wallpaper '{path}': {reason}")]
    Rejected { path: String, reason: String },

    #[error("path contains an interior NUL byte: {0:?}")]
    InvalidPath(String),

    #[error("setting the wallpaper is not supported on {0}")]
    Unsupported(&'static str),
}

/// Something that can change the desktop background.
pub trait DesktopEnvironment {
    fn name(&self) -> &'static str;

    /// Perform one system-parameter call.
    fn apply(&self, call: &WallpaperCall) -> Result<(), DesktopError>;

    fn set_wallpaper(&self, path: &str) -> Result<(), DesktopError> {
        self.apply(&WallpaperCall::desk_wallpaper(path))
    }
}
