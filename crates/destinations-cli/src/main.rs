//! Destinations CLI - normalize the curated locations table.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Import { source, output } => commands::import::run(source, output, cli.verbose),

        Commands::Check { source, json } => commands::check::run(source, json, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
