//! Severity levels that decide which messages reach the sink.

use std::fmt;
use std::str::FromStr;

/// Fixed-width labels, indexed by `rank + 1`.
const LABELS: [&str; 4] = ["ERROR   ", "WARNING ", "INFO    ", "DEBUG   "];

/// A message severity, ordered by rank.
///
/// Lower ranks are more urgent. [`Level::ERROR`] is the only negative rank and is
/// never filtered out. Ranks above [`Level::DEBUG`] are legal: they are treated
/// as extra-verbose levels and share the `DEBUG` label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(i32);

impl Level {
    /// Always emitted, whatever the threshold.
    pub const ERROR: Self = Self(-1);
    /// Non-fatal anomalies.
    pub const WARNING: Self = Self(0);
    /// Normal operational milestones.
    pub const INFO: Self = Self(1);
    /// Development-time diagnostics.
    pub const DEBUG: Self = Self(2);

    /// Builds a level from a raw rank, including ranks past `DEBUG`.
    #[must_use]
    pub const fn new(rank: i32) -> Self {
        Self(rank)
    }

    #[must_use]
    pub const fn rank(self) -> i32 {
        self.0
    }

    /// Negative ranks bypass the threshold.
    #[must_use]
    pub const fn is_error(self) -> bool {
        self.0 < 0
    }

    /// The 8-column label written in front of the message.
    ///
    /// Out-of-range ranks clamp to the nearest end of the table, so any rank
    /// above `DEBUG` gets `"DEBUG   "`.
    #[must_use]
    pub fn label(self) -> &'static str {
        let index = usize::try_from(self.0.saturating_add(1)).unwrap_or(0);
        LABELS[index.min(LABELS.len() - 1)]
    }

    /// Lowercase name of a named level, `None` for custom ranks.
    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            -1 => Some("error"),
            0 => Some("warning"),
            1 => Some("info"),
            2 => Some("debug"),
            _ => None,
        }
    }

    /// The four named levels, most urgent first.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::ERROR, Self::WARNING, Self::INFO, Self::DEBUG]
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::INFO
    }
}

impl From<i32> for Level {
    fn from(rank: i32) -> Self {
        Self(rank)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}

/// Returned by `FromStr` for input that is neither a level name nor an integer rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl ParseLevelError {
    /// The rejected input, as given.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "error" | "err" => Ok(Self::ERROR),
            "warning" | "warn" => Ok(Self::WARNING),
            "info" => Ok(Self::INFO),
            "debug" => Ok(Self::DEBUG),
            other => other
                .parse::<i32>()
                .map(Self)
                .map_err(|_| ParseLevelError(s.to_string())),
        }
    }
}
