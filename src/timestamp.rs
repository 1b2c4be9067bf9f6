use crate::error::{BzrError, Result};
use chrono::{DateTime, FixedOffset};

/// Formats bzr (and tools quoting it) print dates in, tried in order.
const FORMATS: &[&str] = &[
    // version-info: 2007-08-22 11:22:03 +0200
    "%Y-%m-%d %H:%M:%S %z",
    // log: Wed 2007-08-22 11:22:03 +0200
    "%a %Y-%m-%d %H:%M:%S %z",
    // Wed Aug 22 11:22:03 +0200 2007
    "%a %b %d %H:%M:%S %z %Y",
    "%a %b %e %H:%M:%S %z %Y",
];

/// Parses a date string as printed by bzr into a zoned timestamp.
pub fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>> {
    let value = value.trim();

    for format in FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(value, format) {
            return Ok(parsed);
        }
    }

    DateTime::parse_from_rfc3339(value)
        .or_else(|_| DateTime::parse_from_rfc2822(value))
        .map_err(|_| BzrError::MalformedTimestamp {
            value: value.to_string(),
        })
}
