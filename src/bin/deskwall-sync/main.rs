use clap::Parser;

use deskwall::sync::cli::SyncCli;
use deskwall::sync::commands::handle_sync_command;
use deskwall::ui::{self, Level, emit};

#[tokio::main]
async fn main() {
    let cli = SyncCli::parse();

    ui::init(cli.format, !cli.no_color);
    ui::set_debug_mode(cli.debug);

    if let Err(e) = handle_sync_command(cli.command, cli.config).await {
        emit(Level::Error, "sync.error", &format!("Error: {:#}", e), None);
        std::process::exit(1);
    }
}
