//! The leveled logger handle: threshold check, label lookup and emission.

mod builder;

pub use builder::LoggerBuilder;

use crate::level::Level;
use crate::output::{DEFAULT_TIMESTAMP_FORMAT, LineWriter, normalize_prefix};
use std::fmt;
use std::io::{self, Stderr, Write};

/// Exit status used by [`LevelLogger::fatal`].
pub const FATAL_EXIT_CODE: i32 = 1;

/// A threshold plus an exclusively owned line sink.
///
/// Every method takes `&mut self`; there is no internal locking. Share one
/// instance across threads by wrapping it in a `Mutex` at the call site.
#[derive(Debug)]
pub struct LevelLogger<W = Stderr> {
    threshold: Level,
    sink: LineWriter<W>,
}

impl LevelLogger<Stderr> {
    /// Creates a logger that writes to standard error.
    ///
    /// A non-empty `prefix` is normalized to end with exactly one space.
    #[must_use]
    pub fn new(threshold: Level, prefix: impl Into<String>) -> Self {
        Self::with_writer(threshold, prefix, io::stderr())
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder<Stderr> {
        LoggerBuilder::new()
    }
}

impl<W: Write> LevelLogger<W> {
    /// Same as [`LevelLogger::new`] but writes to `writer`.
    #[must_use]
    pub fn with_writer(threshold: Level, prefix: impl Into<String>, writer: W) -> Self {
        Self {
            threshold,
            sink: LineWriter::new(
                writer,
                normalize_prefix(prefix),
                Some(DEFAULT_TIMESTAMP_FORMAT.to_string()),
            ),
        }
    }

    pub(crate) const fn from_parts(threshold: Level, sink: LineWriter<W>) -> Self {
        Self { threshold, sink }
    }

    pub const fn set_threshold(&mut self, level: Level) {
        self.threshold = level;
    }

    #[must_use]
    pub const fn threshold(&self) -> Level {
        self.threshold
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        self.sink.prefix()
    }

    /// Whether a message at `level` would be written under the current threshold.
    #[must_use]
    pub const fn is_enabled(&self, level: Level) -> bool {
        level.is_error() || self.threshold.rank() >= level.rank()
    }

    /// Writes `message` if `level` passes the threshold.
    ///
    /// Errors are always written. Ranks past [`Level::DEBUG`] are written with the
    /// `DEBUG` label. Sink I/O errors are dropped.
    pub fn log(&mut self, level: Level, message: impl fmt::Display) {
        if !self.is_enabled(level) {
            return;
        }
        let _ = self.sink.write_line(level.label(), &message);
    }

    pub fn debug(&mut self, message: impl fmt::Display) {
        self.log(Level::DEBUG, message);
    }

    pub fn info(&mut self, message: impl fmt::Display) {
        self.log(Level::INFO, message);
    }

    pub fn warning(&mut self, message: impl fmt::Display) {
        self.log(Level::WARNING, message);
    }

    /// Written regardless of the threshold.
    pub fn error(&mut self, message: impl fmt::Display) {
        self.log(Level::ERROR, message);
    }

    /// Logs `message` at [`Level::ERROR`] and exits the process with status 1.
    ///
    /// # Process termination
    /// This calls [`std::process::exit`]: the stack is not unwound, so
    /// destructors of values still alive anywhere in the process do not run.
    /// Only the line written here is guaranteed to be flushed.
    pub fn fatal(&mut self, message: impl fmt::Display) -> ! {
        self.error(message);
        std::process::exit(FATAL_EXIT_CODE)
    }

    #[must_use]
    pub const fn writer(&self) -> &W {
        self.sink.get_ref()
    }

    pub const fn writer_mut(&mut self) -> &mut W {
        self.sink.get_mut()
    }

    #[must_use]
    pub fn into_writer(self) -> W {
        self.sink.into_inner()
    }
}

/// Logs printf-style at an explicit level: `log!(logger, level, "x = {}", x)`.
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, ::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warning(::core::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(::core::format_args!($($arg)+))
    };
}

/// Logs at ERROR and exits with status 1. Expands to an expression of type `!`.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal(::core::format_args!($($arg)+))
    };
}
