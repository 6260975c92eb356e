//! Set the desktop wallpaper through the system-parameter facility, and
//! optionally keep it in sync with a remote control document.

pub mod common;
pub mod sync;
pub mod ui;
pub mod wallpaper;
