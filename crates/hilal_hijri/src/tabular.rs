//! Tabular (arithmetic) Hijri calendar.
//!
//! The civil tabular calendar: a 30-year cycle of 10631 days with
//! eleven 355-day leap years, months alternating 30/29 and the leap
//! year's Dhul Hijjah taking 30. Exact and reversible, used both as a
//! calendar in its own right and as the numbering anchor for the
//! sighting-based calendars.

use hilal_time::CivilDate;

use crate::month::{HijriDate, HijriMonth};

/// Julian Day of the Hijri epoch: 1 Muharram 1 AH = 622 July 16 (Julian).
pub const HIJRI_EPOCH_JD: f64 = 1948439.5;

/// Days in one 30-year cycle (360 months).
pub const TABULAR_CYCLE_DAYS: i64 = 10631;

/// Leap years within a 30-year cycle (355 days instead of 354).
const TABULAR_LEAP_YEARS: [i32; 11] = [2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29];

/// Whether a Hijri year is a leap year of the tabular calendar.
pub fn is_tabular_leap_year(hijri_year: i32) -> bool {
    let year_in_cycle = (hijri_year - 1).rem_euclid(30) + 1;
    TABULAR_LEAP_YEARS.contains(&year_in_cycle)
}

/// Days in a tabular Hijri month.
pub fn tabular_month_days(hijri_year: i32, month: HijriMonth) -> u32 {
    if month == HijriMonth::DhulHijjah && is_tabular_leap_year(hijri_year) {
        30
    } else if month.number() % 2 == 1 {
        30
    } else {
        29
    }
}

/// Days in a tabular Hijri year.
pub fn tabular_year_days(hijri_year: i32) -> u32 {
    if is_tabular_leap_year(hijri_year) { 355 } else { 354 }
}

/// Convert a Gregorian date to tabular Hijri.
pub fn gregorian_to_hijri_tabular(date: CivilDate) -> HijriDate {
    let days_since_epoch = (date.jd0() - HIJRI_EPOCH_JD).floor() as i64;

    let cycles = days_since_epoch.div_euclid(TABULAR_CYCLE_DAYS);
    let mut remaining = days_since_epoch.rem_euclid(TABULAR_CYCLE_DAYS);

    let mut hijri_year = (cycles * 30) as i32 + 1;
    loop {
        let year_days = tabular_year_days(hijri_year) as i64;
        if remaining < year_days {
            break;
        }
        remaining -= year_days;
        hijri_year += 1;
    }

    let mut month = HijriMonth::Muharram;
    for m in HijriMonth::ALL {
        let month_days = tabular_month_days(hijri_year, m) as i64;
        if remaining < month_days {
            month = m;
            break;
        }
        remaining -= month_days;
    }

    HijriDate {
        year: hijri_year,
        month,
        day: remaining as u32 + 1,
    }
}

/// Convert a tabular Hijri date to Gregorian.
pub fn hijri_to_gregorian_tabular(date: HijriDate) -> CivilDate {
    let mut days: i64 = 0;

    let cycles = ((date.year - 1).div_euclid(30)) as i64;
    days += cycles * TABULAR_CYCLE_DAYS;

    let start_year = (cycles * 30) as i32 + 1;
    for y in start_year..date.year {
        days += tabular_year_days(y) as i64;
    }

    for m in HijriMonth::ALL {
        if m == date.month {
            break;
        }
        days += tabular_month_days(date.year, m) as i64;
    }

    days += date.day as i64 - 1;

    CivilDate::from_jd(HIJRI_EPOCH_JD + days as f64 + 0.25)
}
