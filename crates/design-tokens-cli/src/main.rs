//! `design-tokens`: validates the token set before a build.
//!
//! Exits 0 when every check passes, 1 when validation reported errors, and
//! 2 when the tool itself could not run (unreadable token document, etc.).

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use console::style;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    match commands::run(&cli) {
        Ok(outcome) => {
            println!("{}", outcome.output);
            if outcome.ok {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(err) => {
            eprintln!("{} {:#}", style("error:").red().bold(), err);
            ExitCode::from(2)
        }
    }
}
