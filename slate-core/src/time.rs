//! Time utilities: fixed-pattern local timestamps.

use chrono::NaiveDateTime;

use crate::error::{Error, Result};

/// Pattern used for task input and listings, e.g. "2026-02-20 23:59".
pub const DEFAULT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Parse a timestamp like "2026-02-20 23:59" using a chrono format string.
pub fn parse_timestamp(s: &str, format: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), format).map_err(|_| Error::InvalidTimestamp {
        value: s.trim().to_string(),
        format: format.to_string(),
    })
}

pub fn format_timestamp(ts: NaiveDateTime, format: &str) -> String {
    ts.format(format).to_string()
}
