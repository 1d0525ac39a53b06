//! Time scales and calendar plumbing for the hilal workspace.
//!
//! This crate provides:
//! - Julian Day <-> Gregorian calendar conversion (Meeus)
//! - Delta T (TT - UT) table lookup and TT<->UT conversion
//! - A validated civil date type with ISO-8601 parsing
//! - IANA-timezone rendering of UT instants to wall-clock strings

pub mod civil;
pub mod delta_t;
pub mod error;
pub mod format;
pub mod julian;

pub use civil::{
    CivilDate, ISLAMIC_WEEKDAY_NAMES, WEEKDAY_NAMES, days_in_month, is_gregorian_leap_year,
};
pub use delta_t::{SECONDS_PER_DAY, delta_t_days, delta_t_seconds, tt_to_ut, ut_to_tt};
pub use error::TimeError;
pub use format::{format_hhmm, format_local, lookup_timezone};
pub use julian::{DAYS_PER_CENTURY, J2000_JD, calendar_to_jd, jd_to_calendar};
