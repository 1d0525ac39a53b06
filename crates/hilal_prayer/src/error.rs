//! Error types for prayer-time calculation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use hilal_time::TimeError;

/// Errors from prayer-time computation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PrayerError {
    /// Error from date parsing or timezone rendering.
    Time(TimeError),
    /// Convention identifier not recognized.
    UnknownConvention(String),
    /// Asr method identifier not recognized.
    UnknownAsrMethod(String),
    /// Latitude or longitude outside valid range.
    InvalidLocation(&'static str),
}

impl Display for PrayerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::UnknownConvention(id) => write!(f, "unknown prayer convention: {id}"),
            Self::UnknownAsrMethod(id) => write!(f, "unknown asr method: {id}"),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
        }
    }
}

impl Error for PrayerError {}

impl From<TimeError> for PrayerError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
