pub mod cli;
pub mod commands;
pub mod desktop;
pub mod recording;
#[cfg(not(windows))]
pub mod unsupported;
#[cfg(windows)]
pub mod windows;

pub use desktop::{DesktopEnvironment, DesktopError, WallpaperCall};
pub use recording::{DryRunDesktop, RecordingDesktop};

/// The desktop of the machine we are running on.
pub fn system_desktop() -> Box<dyn DesktopEnvironment> {
    #[cfg(windows)]
    {
        Box::new(windows::WindowsDesktop)
    }
    #[cfg(not(windows))]
    {
        Box::new(unsupported::UnsupportedDesktop)
    }
}
