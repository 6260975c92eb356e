use clap::{Args, Parser};

use crate::ui::OutputFormat;

/// Set the desktop wallpaper
#[derive(Parser, Debug, Clone)]
#[command(name = "deskwall", author, version, about, long_about = None)]
pub struct Cli {
    /// Print the outcome of the system call
    #[arg(short, long)]
    pub debug: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    #[command(flatten)]
    pub set: SetArgs,
}

#[derive(Args, Debug, Clone, Default)]
pub struct SetArgs {
    /// Path to the wallpaper image
    #[arg(allow_hyphen_values = true)]
    pub path: Option<String>,

    /// Ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,

    /// Exit with status 1 when the system rejects the wallpaper
    #[arg(long)]
    pub strict: bool,

    /// Show the system call instead of making it
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_parse_to_no_path() {
        let cli = Cli::try_parse_from(["deskwall"]).unwrap();
        assert_eq!(cli.set.path, None);
        assert!(!cli.set.strict);
    }

    #[test]
    fn only_first_positional_is_the_path() {
        let cli = Cli::try_parse_from(["deskwall", "one.jpg", "two.jpg", "three.jpg"]).unwrap();
        assert_eq!(cli.set.path.as_deref(), Some("one.jpg"));
        assert_eq!(cli.set.extra, ["two.jpg", "three.jpg"]);
    }

    #[test]
    fn windows_path_is_kept_verbatim() {
        let cli = Cli::try_parse_from(["deskwall", r"C:\images\sky.jpg"]).unwrap();
        assert_eq!(cli.set.path.as_deref(), Some(r"C:\images\sky.jpg"));
    }

    #[test]
    fn flags_parse() {
        let cli = Cli::try_parse_from([
            "deskwall", "--strict", "--dry-run", "--format", "json", "--no-color", "-d", "x.png",
        ])
        .unwrap();
        assert!(cli.debug && cli.no_color && cli.set.strict && cli.set.dry_run);
        assert_eq!(cli.format, OutputFormat::Json);
    }

    #[test]
    fn unknown_flags_after_the_path_are_ignored() {
        let cli = Cli::try_parse_from(["deskwall", r"C:\images\sky.jpg", "--unknown", "-x"]).unwrap();
        assert_eq!(cli.set.path.as_deref(), Some(r"C:\images\sky.jpg"));
        assert_eq!(cli.set.extra, ["--unknown", "-x"]);
    }

    #[test]
    fn negative_number_after_the_path_is_ignored() {
        let cli = Cli::try_parse_from(["deskwall", "sky.jpg", "-1"]).unwrap();
        assert_eq!(cli.set.path.as_deref(), Some("sky.jpg"));
        assert_eq!(cli.set.extra, ["-1"]);
    }

    #[test]
    fn path_may_start_with_a_hyphen() {
        let cli = Cli::try_parse_from(["deskwall", "-wall.jpg"]).unwrap();
        assert_eq!(cli.set.path.as_deref(), Some("-wall.jpg"));
    }

    #[test]
    fn known_flags_after_the_path_still_apply() {
        let cli = Cli::try_parse_from(["deskwall", "sky.jpg", "--dry-run"]).unwrap();
        assert_eq!(cli.set.path.as_deref(), Some("sky.jpg"));
        assert!(cli.set.dry_run);
        assert!(cli.set.extra.is_empty());
    }
}
