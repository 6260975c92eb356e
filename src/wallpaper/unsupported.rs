use super::desktop::{DesktopEnvironment, DesktopError, WallpaperCall};

/// Stand-in for platforms without a system-parameter facility.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedDesktop;

impl DesktopEnvironment for UnsupportedDesktop {
    fn name(&self) -> &'static str {
        "unsupported"
    }

    fn apply(&self, _call: &WallpaperCall) -> Result<(), DesktopError> {
        Err(DesktopError::Unsupported(std::env::consts::OS))
    }
}
