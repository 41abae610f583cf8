//! zigbee-ota
//!
//! Command-line front end for ota-core: builds OTA upgrade images from raw
//! firmware and inspects existing ones.

mod cli;
mod commands;
mod render;

use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use simple_logger::SimpleLogger;

use cli::{Cli, Command};

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logging goes to stderr; the report itself goes to stdout.
    let _ = SimpleLogger::new()
        .with_level(level_for(cli.verbose))
        .without_timestamps()
        .env()
        .init();

    let result = match &cli.command {
        Command::Create(args) => commands::run_create(args).map(|_| ()),
        Command::Parse(args) => commands::run_parse(args).map(|_| ()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
