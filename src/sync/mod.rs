//! Periodically fetch a remote `<image_url>,<date>` document and apply the
//! announced image as wallpaper, keeping a local history of changes.

pub mod cli;
pub mod commands;
pub mod config;
pub mod control;
pub mod engine;
pub mod history;
pub mod remote;

pub use control::{ControlDocument, ControlError, should_apply};
pub use engine::{SyncEngine, SyncOutcome};
pub use history::{HistoryDb, WallpaperChange};
pub use remote::{HttpSource, RemoteSource};
