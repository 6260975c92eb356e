use std::ffi::OsStr;
use std::os::windows::ffi::OsStrExt;

use windows::Win32::UI::WindowsAndMessaging::{
    SYSTEM_PARAMETERS_INFO_ACTION, SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS, SystemParametersInfoW,
};

use super::desktop::{DesktopEnvironment, DesktopError, WallpaperCall};

/// The real desktop, reached through `user32!SystemParametersInfoW`.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsDesktop;

fn to_wide(path: &str) -> Result<Vec<u16>, DesktopError> {
    if path.contains('\0') {
        return Err(DesktopError::InvalidPath(path.to_string()));
    }
    Ok(OsStr::new(path)
        .encode_wide()
        .chain(std::iter::once(0))
        .collect())
}

impl DesktopEnvironment for WindowsDesktop {
    fn name(&self) -> &'static str {
        "windows"
    }

    fn apply(&self, call: &WallpaperCall) -> Result<(), DesktopError> {
        let mut wide = to_wide(&call.path)?;

        // SAFETY: `wide` is NUL-terminated and outlives the call; the OS only
        // reads from it for SPI_SETDESKWALLPAPER.
        unsafe {
            SystemParametersInfoW(
                SYSTEM_PARAMETERS_INFO_ACTION(call.action),
                call.param,
                Some(wide.as_mut_ptr().cast()),
                SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS(call.flags),
            )
        }
        .map_err(|e| DesktopError::Rejected {
            path: call.path.clone(),
            reason: e.to_string(),
        })
    }
}
