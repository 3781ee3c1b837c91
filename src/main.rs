mod analyze;
mod cli;
mod error;
mod progress;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use issues::ReportView;
use std::process;

fn main() {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let result = match cli.command {
        Commands::Analyze { args } => analyze::execute(args, ReportView::Full),
        Commands::Fixes { args } => analyze::execute(args, ReportView::FixDescriptions),
    };

    if let Err(err) = result {
        ui::error_message(&err.user_message());
        process::exit(1);
    }
}
