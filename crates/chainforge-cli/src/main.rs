//! ChainForge CLI entry point.

mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if !cli.quiet {
        chainforge_console::init();
    }

    match commands::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "error:".bright_red().bold());
            ExitCode::FAILURE
        }
    }
}
