//! Desktops that never touch the OS.

use colored::*;
use std::sync::Mutex;

use super::desktop::{DesktopEnvironment, DesktopError, WallpaperCall};
use crate::ui::prelude::*;

/// Remembers every call it receives. Used to observe the entry point and the
/// sync engine without changing the real wallpaper.
#[derive(Debug, Default)]
pub struct RecordingDesktop {
    calls: Mutex<Vec<WallpaperCall>>,
    fail_with: Option<String>,
}

impl RecordingDesktop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records calls but rejects each one with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_with: Some(reason.into()),
        }
    }

    pub fn calls(&self) -> Vec<WallpaperCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl DesktopEnvironment for RecordingDesktop {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn apply(&self, call: &WallpaperCall) -> Result<(), DesktopError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call.clone());
        }
        match &self.fail_with {
            Some(reason) => Err(DesktopError::Rejected {
                path: call.path.clone(),
                reason: reason.clone(),
            }),
            None => Ok(()),
        }
    }
}

/// Prints the call instead of making it.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunDesktop;

impl DesktopEnvironment for DryRunDesktop {
    fn name(&self) -> &'static str {
        "dry-run"
    }

    fn apply(&self, call: &WallpaperCall) -> Result<(), DesktopError> {
        emit(
            Level::Info,
            "wallpaper.dry_run",
            &format!("Would call SystemParametersInfoW({})", call.to_string().cyan()),
            serde_json::to_value(call).ok(),
        );
        Ok(())
    }
}
