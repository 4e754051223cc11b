//! Stepwise construction for the knobs `LevelLogger::new` doesn't expose.

use super::LevelLogger;
use crate::level::Level;
use crate::output::{DEFAULT_TIMESTAMP_FORMAT, LineWriter, normalize_prefix};
use std::io::{self, Stderr, Write};

/// Collects threshold, prefix, timestamp format and sink before building a [`LevelLogger`].
#[derive(Debug)]
pub struct LoggerBuilder<W = Stderr> {
    level: Level,
    prefix: String,
    timestamp_format: Option<String>,
    writer: W,
}

impl Default for LoggerBuilder<Stderr> {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder<Stderr> {
    /// INFO threshold, no prefix, standard timestamp, standard error.
    #[must_use]
    pub fn new() -> Self {
        Self {
            level: Level::INFO,
            prefix: String::new(),
            timestamp_format: Some(DEFAULT_TIMESTAMP_FORMAT.to_string()),
            writer: io::stderr(),
        }
    }
}

impl<W: Write> LoggerBuilder<W> {
    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Normalized when the logger is built.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// chrono strftime pattern for the timestamp column.
    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = Some(format.into());
        self
    }

    /// Drops the timestamp and the space after it.
    #[must_use]
    pub fn without_timestamp(mut self) -> Self {
        self.timestamp_format = None;
        self
    }

    /// Swaps the sink, keeping every other setting.
    #[must_use]
    pub fn writer<W2: Write>(self, writer: W2) -> LoggerBuilder<W2> {
        LoggerBuilder {
            level: self.level,
            prefix: self.prefix,
            timestamp_format: self.timestamp_format,
            writer,
        }
    }

    #[must_use]
    pub fn build(self) -> LevelLogger<W> {
        LevelLogger::from_parts(
            self.level,
            LineWriter::new(
                self.writer,
                normalize_prefix(self.prefix),
                self.timestamp_format,
            ),
        )
    }
}
