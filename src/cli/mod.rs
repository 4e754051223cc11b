//! Command-line front end: one log line per invocation, or one per stdin line.

use crate::Error;
use crate::level::Level;
use crate::logger::LevelLogger;
use clap::{Parser, Subcommand};
use std::io::{BufRead, Write};
use std::process::ExitCode;

/// levelog - Write leveled log lines from shell scripts.
#[derive(Debug, Parser)]
#[command(name = "levelog", version, about = "Write leveled log lines to stderr")]
pub struct Cli {
    /// Threshold: error, warning, info, debug, or an integer rank
    #[arg(short, long, env = "LEVELOG_LEVEL", default_value = "info")]
    pub level: String,

    /// Prefix written at the start of every line
    #[arg(short, long, env = "LEVELOG_PREFIX", default_value = "")]
    pub prefix: String,

    /// Omit the date and time column
    #[arg(long)]
    pub no_timestamp: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log at an explicit level (integer ranks allowed).
    #[command(allow_negative_numbers = true)]
    Log {
        /// Message level
        level: String,
        /// Message words, joined with spaces
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Log at DEBUG.
    Debug {
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Log at INFO.
    Info {
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Log at WARNING.
    Warning {
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Log at ERROR (never filtered).
    Error {
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Log at ERROR, then exit with status 1.
    Fatal {
        #[arg(required = true)]
        message: Vec<String>,
    },
    /// Log every line read from stdin.
    Pipe {
        /// Level for each line
        #[arg(long = "as", default_value = "info")]
        level: String,
    },
}

/// Builds the logger described by the global flags and runs `cli.command` against it.
///
/// `fatal` does not return from here.
///
/// # Errors
/// [`Error::InvalidLevel`] for an unparseable level, [`Error::Io`] when stdin
/// cannot be read.
pub fn run<R: BufRead, W: Write>(cli: Cli, input: R, writer: W) -> Result<ExitCode, Error> {
    let threshold: Level = cli.level.parse()?;
    let mut builder = LevelLogger::builder()
        .level(threshold)
        .prefix(cli.prefix)
        .writer(writer);
    if cli.no_timestamp {
        builder = builder.without_timestamp();
    }
    let mut logger = builder.build();

    match cli.command {
        Command::Log { level, message } => {
            let level: Level = level.parse()?;
            logger.log(level, message.join(" "));
        }
        Command::Debug { message } => logger.debug(message.join(" ")),
        Command::Info { message } => logger.info(message.join(" ")),
        Command::Warning { message } => logger.warning(message.join(" ")),
        Command::Error { message } => logger.error(message.join(" ")),
        Command::Fatal { message } => logger.fatal(message.join(" ")),
        Command::Pipe { level } => {
            let level: Level = level.parse()?;
            for line in input.lines() {
                logger.log(level, line?);
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Usage mistakes get clap's status 2; I/O failures get 1.
#[must_use]
pub fn exit_code(error: &Error) -> ExitCode {
    match error {
        Error::InvalidLevel(_) => ExitCode::from(2),
        Error::Io(_) => ExitCode::FAILURE,
    }
}
