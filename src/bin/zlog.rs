//! Command line front end for the zlog logger.
//!
//! Usage:
//!   zlog log <level> <message>... [--file PATH] [--truncate]
//!   zlog clear <path>
//!   zlog flags
//!
//! Global options: --config PATH, --name NAME, --pattern P, --no-color, --debug

use clap::Parser;
use std::process::ExitCode;
use zlog::cli::{Cli, run};

fn main() -> ExitCode {
    let cli = Cli::parse();
    run(&cli)
}
