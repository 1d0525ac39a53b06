//! Error types for time-scale and calendar conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar parsing and timezone rendering.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Date string did not match `YYYY-MM-DD` or named an impossible date.
    InvalidDate(String),
    /// IANA timezone identifier not found in the timezone database.
    UnknownTimezone(String),
    /// Instant outside the representable timestamp range.
    OutOfRange(f64),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(s) => write!(f, "invalid date: {s}"),
            Self::UnknownTimezone(tz) => write!(f, "unknown timezone: {tz}"),
            Self::OutOfRange(jd) => write!(f, "instant out of range: JD {jd}"),
        }
    }
}

impl Error for TimeError {}
