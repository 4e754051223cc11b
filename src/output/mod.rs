//! The sink side of the logger: everything between a labelled message and the bytes
//! that land on the writer.

mod line;

pub use line::LineWriter;

/// `log.LstdFlags`-style date and time, e.g. `2009/11/10 23:00:00`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Appends a single space to a non-empty prefix that does not already end in one.
#[must_use]
pub fn normalize_prefix(prefix: impl Into<String>) -> String {
    let mut prefix = prefix.into();
    if !prefix.is_empty() && !prefix.ends_with(' ') {
        prefix.push(' ');
    }
    prefix
}
