//! `levelog` - a minimal leveled logger.
//!
//! Messages carry a [`Level`], are filtered against the logger's threshold, and
//! are written to standard error as one line each:
//!
//! ```text
//! LOGGER 2009/11/10 23:00:00 INFO    should print
//! ```
//!
//! # Example
//!
//! ```
//! use levelog::{Level, LevelLogger};
//!
//! let mut log = LevelLogger::new(Level::INFO, "logger");
//!
//! log.info("should print");
//! levelog::debug!(log, "current level is {}", log.threshold()); // filtered out
//! log.error("errors are always written");
//! ```
//!
//! [`LevelLogger::fatal`] logs at ERROR and then exits the process with status 1.
//!
//! # Features
//!
//! - `cli` (default): builds the `levelog` command-line front end

pub mod error;
pub mod level;
pub mod logger;
pub mod output;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::Error;
pub use level::{Level, ParseLevelError};
pub use logger::{FATAL_EXIT_CODE, LevelLogger, LoggerBuilder};
pub use output::LineWriter;
