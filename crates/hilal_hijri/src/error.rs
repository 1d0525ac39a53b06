//! Error types for Hijri calendar arithmetic.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from Hijri date construction.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum HijriError {
    /// Month number outside 1-12.
    InvalidMonth(u32),
    /// Day outside the month's length.
    InvalidDay { year: i32, month: u32, day: u32 },
}

impl Display for HijriError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth(m) => write!(f, "invalid Hijri month: {m}"),
            Self::InvalidDay { year, month, day } => {
                write!(f, "invalid Hijri day: {day} in month {month} of {year} AH")
            }
        }
    }
}

impl Error for HijriError {}
