//! Line-oriented writer that stamps every line with the prefix and local time.

use chrono::Local;
use std::fmt::{self, Write as _};
use std::io::{self, Write};

/// Owns the destination and renders `<prefix><timestamp> <body>\n`.
#[derive(Debug)]
pub struct LineWriter<W> {
    writer: W,
    /// Already normalized by the caller.
    prefix: String,
    /// strftime pattern; `None` drops the timestamp column entirely.
    timestamp_format: Option<String>,
}

impl<W: Write> LineWriter<W> {
    #[must_use]
    pub const fn new(writer: W, prefix: String, timestamp_format: Option<String>) -> Self {
        Self {
            writer,
            prefix,
            timestamp_format,
        }
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub fn timestamp_format(&self) -> Option<&str> {
        self.timestamp_format.as_deref()
    }

    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    pub const fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Writes one line in a single `write_all`, then flushes.
    ///
    /// # Errors
    /// I/O errors from the underlying writer.
    pub fn write_line(&mut self, label: &str, message: &dyn fmt::Display) -> io::Result<()> {
        let line = self.compose(label, message);
        self.writer.write_all(line.as_bytes())?;
        self.writer.flush()
    }

    fn compose(&self, label: &str, message: &dyn fmt::Display) -> String {
        let mut line = String::with_capacity(self.prefix.len() + 64);
        line.push_str(&self.prefix);
        if let Some(format) = &self.timestamp_format {
            // A malformed strftime pattern makes chrono's Display fail; keep the line anyway.
            let _ = write!(line, "{} ", Local::now().format(format));
        }
        line.push_str(label);
        let _ = write!(line, "{message}");
        if !line.ends_with('\n') {
            line.push('\n');
        }
        line
    }
}
