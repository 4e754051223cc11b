//! Shell scripts want the same line format as the library without writing Rust:
//!
//!   levelog [--level <LEVEL>] [--prefix <PREFIX>] info <message>...
//!   levelog log <level> <message>...
//!   levelog fatal <message>...           exits with status 1
//!   some-command | levelog pipe --as warning

use clap::Parser;
use levelog::cli::{Cli, exit_code, run};
use levelog::{Level, LevelLogger};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli, io::stdin().lock(), io::stderr()) {
        Ok(code) => code,
        Err(e) => {
            // Diagnostics go through the same line format, tagged with our own prefix
            let mut diagnostics = LevelLogger::new(Level::ERROR, "levelog");
            levelog::error!(diagnostics, "{e}");
            exit_code(&e)
        }
    }
}
