//! Civil (Gregorian) calendar dates.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::TimeError;
use crate::julian::{calendar_to_jd, jd_to_calendar};

/// English weekday names, Sunday first.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Islamic weekday names (transliterated), Sunday first.
pub const ISLAMIC_WEEKDAY_NAMES: [&str; 7] = [
    "al-Ahad",
    "al-Ithnayn",
    "ath-Thulatha",
    "al-Arbi'a",
    "al-Khamis",
    "al-Jumu'ah",
    "as-Sabt",
];

/// A Gregorian calendar date, no time-of-day component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDate {
    /// Calendar year.
    pub year: i32,
    /// Month, 1-12.
    pub month: u32,
    /// Day of month, 1-31.
    pub day: u32,
}

impl CivilDate {
    /// Construct a validated date.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) || day < 1 || day > days_in_month(year, month) {
            return Err(TimeError::InvalidDate(format!("{year:04}-{month:02}-{day:02}")));
        }
        Ok(Self { year, month, day })
    }

    /// Julian Day at 0h UT on this date.
    pub fn jd0(&self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day as f64)
    }

    /// The civil date containing a Julian Day instant (UT).
    pub fn from_jd(jd: f64) -> Self {
        let (year, month, day) = jd_to_calendar(jd);
        Self {
            year,
            month,
            day: day.floor() as u32,
        }
    }

    /// This date shifted by `n` days (negative moves backward).
    pub fn add_days(&self, n: i32) -> Self {
        Self::from_jd(self.jd0() + n as f64 + 0.25)
    }

    /// Weekday index, 0 = Sunday.
    pub fn weekday(&self) -> usize {
        ((self.jd0() + 1.5) as i64).rem_euclid(7) as usize
    }

    /// English weekday name.
    pub fn weekday_name(&self) -> &'static str {
        WEEKDAY_NAMES[self.weekday()]
    }
}

impl Display for CivilDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CivilDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || TimeError::InvalidDate(s.to_string());
        let mut parts = s.splitn(3, '-');
        let year = parts.next().ok_or_else(bad)?;
        let month = parts.next().ok_or_else(bad)?;
        let day = parts.next().ok_or_else(bad)?;
        if year.len() != 4 || month.len() != 2 || day.len() != 2 {
            return Err(bad());
        }
        let year: i32 = year.parse().map_err(|_| bad())?;
        let month: u32 = month.parse().map_err(|_| bad())?;
        let day: u32 = day.parse().map_err(|_| bad())?;
        Self::new(year, month, day)
    }
}

/// Number of days in a Gregorian month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_gregorian_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Gregorian leap-year rule.
pub fn is_gregorian_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        let d: CivilDate = "2025-03-21".parse().unwrap();
        assert_eq!(d, CivilDate { year: 2025, month: 3, day: 21 });
        assert_eq!(d.to_string(), "2025-03-21");
    }

    #[test]
    fn parse_rejects_malformed() {
        assert!("2025-3-21".parse::<CivilDate>().is_err());
        assert!("2025-13-01".parse::<CivilDate>().is_err());
        assert!("2025-02-30".parse::<CivilDate>().is_err());
        assert!("not-a-date".parse::<CivilDate>().is_err());
        assert!("20250321".parse::<CivilDate>().is_err());
    }

    #[test]
    fn leap_february() {
        assert!(CivilDate::new(2024, 2, 29).is_ok());
        assert!(CivilDate::new(2025, 2, 29).is_err());
        assert!(CivilDate::new(2000, 2, 29).is_ok());
        assert!(CivilDate::new(1900, 2, 29).is_err());
    }

    #[test]
    fn add_days_across_year_boundary() {
        let d: CivilDate = "2024-12-30".parse().unwrap();
        assert_eq!(d.add_days(3).to_string(), "2025-01-02");
        assert_eq!(d.add_days(-30).to_string(), "2024-11-30");
    }

    #[test]
    fn weekday_known_dates() {
        // 2000-01-01 was a Saturday, 2025-03-21 a Friday.
        let d: CivilDate = "2000-01-01".parse().unwrap();
        assert_eq!(d.weekday_name(), "Saturday");
        let d: CivilDate = "2025-03-21".parse().unwrap();
        assert_eq!(d.weekday_name(), "Friday");
        assert_eq!(ISLAMIC_WEEKDAY_NAMES[d.weekday()], "al-Jumu'ah");
    }
}
