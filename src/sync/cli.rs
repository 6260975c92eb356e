use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::ui::OutputFormat;

/// Keep the desktop wallpaper in sync with a remote control document
#[derive(Parser, Debug)]
#[command(name = "deskwall-sync", author, version, about, long_about = None)]
pub struct SyncCli {
    /// Activate debug mode
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use this config file instead of the default one
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: SyncCommands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum SyncCommands {
    /// Check now and then periodically until interrupted
    Run,
    /// Check once and exit
    Check,
    /// Show recently applied wallpapers
    History {
        /// Number of entries to show
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },
    /// Inspect or edit the sync configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Print the config file location
    Path,
    /// Set the control document URL
    SetUrl {
        /// URL returning `<image_url>,<date>`
        url: String,
    },
}
