// wmark-cli/src/main.rs
//
// Entry point for the wmark command-line tool.
//
// Responsibilities:
// - Initializing logging from the environment
// - Parsing command-line arguments
// - Dispatching to the subcommand implementations
// - Mapping errors to the process exit code

use clap::Parser;
use wmark_cli::cli::{Cli, Commands};
use wmark_cli::commands::apply::run_apply;
use wmark_cli::{logging, terminal};

use std::process;

fn main() {
    logging::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Apply(args) => run_apply(args),
    };

    if let Err(e) = result {
        terminal::print_error(&format!("Error: {e}"));
        process::exit(1);
    }
}
