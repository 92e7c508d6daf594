//! Curator CLI Binary
//!
//! Command-line interface for prompt library validation and curation.

use clap::Parser;
use curator::tooling::cli::{Cli, CliContext};
use std::process;

fn main() {
    let cli = Cli::parse();

    let context = match CliContext::new(cli.library.clone(), cli.config.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = context.init_logging(&cli) {
        eprintln!("Error initializing logging: {}", e);
        process::exit(1);
    }

    match context.run(&cli.command) {
        Ok(outcome) => {
            println!("{}", outcome.output);
            if outcome.validation_failed {
                process::exit(2);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
