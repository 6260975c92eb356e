use clap::Parser;

use deskwall::ui;
use deskwall::wallpaper::cli::Cli;
use deskwall::wallpaper::commands::handle_set;
use deskwall::wallpaper::{DesktopEnvironment, DryRunDesktop, system_desktop};

fn main() {
    let cli = Cli::parse();

    ui::init(cli.format, !cli.no_color);
    ui::set_debug_mode(cli.debug);

    let desktop: Box<dyn DesktopEnvironment> = if cli.set.dry_run {
        Box::new(DryRunDesktop)
    } else {
        system_desktop()
    };

    let outcome = handle_set(&cli.set, desktop.as_ref());
    std::process::exit(outcome.exit_code(cli.set.strict));
}
