use colored::*;

use crate::ui::prelude::*;
use crate::wallpaper::cli::SetArgs;
use crate::wallpaper::desktop::{DesktopEnvironment, DesktopError};

/// What happened to a `deskwall` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetOutcome {
    /// No path was given; nothing was called.
    NoPath,
    Applied { path: String },
    Failed { path: String, error: DesktopError },
}

impl SetOutcome {
    /// Process exit status. Failures only count under `--strict`.
    pub fn exit_code(&self, strict: bool) -> i32 {
        match self {
            SetOutcome::Failed { .. } if strict => 1,
            _ => 0,
        }
    }
}

/// Hand the first path to the desktop. Extra arguments are ignored.
pub fn handle_set(args: &SetArgs, desktop: &dyn DesktopEnvironment) -> SetOutcome {
    let Some(path) = args.path.as_deref() else {
        debug("wallpaper.set.skipped", "No wallpaper path given, nothing to do");
        return SetOutcome::NoPath;
    };

    if !args.extra.is_empty() {
        debug(
            "wallpaper.set.extra_args",
            &format!("Ignoring {} extra argument(s)", args.extra.len()),
        );
    }

    debug(
        "wallpaper.set.backend",
        &format!("Using {} desktop", desktop.name()),
    );

    match desktop.set_wallpaper(path) {
        Ok(()) => {
            debug(
                "wallpaper.set.applied",
                &format!("Wallpaper set to {}", path.green()),
            );
            SetOutcome::Applied {
                path: path.to_string(),
            }
        }
        Err(error) => {
            if args.strict {
                emit(
                    Level::Error,
                    "wallpaper.set.failed",
                    &format!("Failed to set wallpaper: {}", error),
                    Some(serde_json::json!({ "path": path })),
                );
            } else {
                debug(
                    "wallpaper.set.failed",
                    &format!("Failed to set wallpaper: {}", error),
                );
            }
            SetOutcome::Failed {
                path: path.to_string(),
                error,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallpaper::RecordingDesktop;
    use crate::wallpaper::desktop::{SPI_SETDESKWALLPAPER, WALLPAPER_UPDATE_FLAGS};

    fn args(path: Option<&str>, extra: &[&str], strict: bool) -> SetArgs {
        SetArgs {
            path: path.map(str::to_string),
            extra: extra.iter().map(|s| s.to_string()).collect(),
            strict,
            dry_run: false,
        }
    }

    #[test]
    fn no_path_makes_no_call() {
        let desktop = RecordingDesktop::new();
        let outcome = handle_set(&args(None, &[], false), &desktop);
        assert_eq!(outcome, SetOutcome::NoPath);
        assert_eq!(outcome.exit_code(false), 0);
        assert!(desktop.calls().is_empty());
    }

    #[test]
    fn path_is_passed_with_persist_and_broadcast_flags() {
        let desktop = RecordingDesktop::new();
        let outcome = handle_set(&args(Some(r"C:\images\sky.jpg"), &[], false), &desktop);

        assert_eq!(outcome.exit_code(false), 0);
        let calls = desktop.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].action, SPI_SETDESKWALLPAPER);
        assert_eq!(calls[0].action, 0x14);
        assert_eq!(calls[0].path, r"C:\images\sky.jpg");
        assert_eq!(calls[0].flags, WALLPAPER_UPDATE_FLAGS);
        assert_eq!(calls[0].flags, 0x03);
    }

    #[test]
    fn only_first_argument_is_used() {
        let desktop = RecordingDesktop::new();
        handle_set(&args(Some("first.jpg"), &["second.jpg", "third.jpg"], false), &desktop);
        let calls = desktop.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].path, "first.jpg");
    }

    #[test]
    fn failure_is_silent_by_default() {
        let desktop = RecordingDesktop::failing("file not found");
        let outcome = handle_set(&args(Some("missing.jpg"), &[], false), &desktop);
        assert!(matches!(outcome, SetOutcome::Failed { .. }));
        assert_eq!(outcome.exit_code(false), 0);
    }

    #[test]
    fn failure_exits_nonzero_when_strict() {
        let desktop = RecordingDesktop::failing("file not found");
        let outcome = handle_set(&args(Some("missing.jpg"), &[], true), &desktop);
        assert_eq!(outcome.exit_code(true), 1);
    }

    #[test]
    fn success_exits_zero_when_strict() {
        let desktop = RecordingDesktop::new();
        let outcome = handle_set(&args(Some("ok.bmp"), &[], true), &desktop);
        assert_eq!(
            outcome,
            SetOutcome::Applied {
                path: "ok.bmp".into()
            }
        );
        assert_eq!(outcome.exit_code(true), 0);
    }
}
