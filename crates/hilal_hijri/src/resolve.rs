//! Gregorian-to-Hijri resolution against computed month starts.

use hilal_time::CivilDate;

use crate::month::{HijriDate, HijriMonth};
use crate::month_start::HijriMonthStart;
use crate::tabular::{gregorian_to_hijri_tabular, tabular_month_days};

/// Which calendar produced a resolved date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalendarSource {
    /// A sighting-based month start covered the date.
    Astronomical,
    /// Tabular arithmetic, either by choice or as fallback.
    Tabular,
}

impl CalendarSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Astronomical => "astronomical",
            Self::Tabular => "tabular",
        }
    }
}

/// A Hijri date with the provenance of its resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedHijriDate {
    pub date: HijriDate,
    pub source: CalendarSource,
}

/// Gregorian date range of one Hijri month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRange {
    /// First Gregorian day.
    pub start: CivilDate,
    /// Last Gregorian day (inclusive).
    pub end: CivilDate,
    /// Length in days.
    pub days: u32,
}

/// Resolve a Gregorian date against a run of month starts.
///
/// The latest start on or before the date wins. When no start covers
/// the date, or the nearest one lies a full month or more behind (the
/// run has a gap), the tabular calendar answers instead and the result
/// says so.
pub fn gregorian_to_hijri(date: CivilDate, starts: &[HijriMonthStart]) -> ResolvedHijriDate {
    let covering = starts
        .iter()
        .filter(|ms| ms.gregorian_start <= date)
        .max_by_key(|ms| ms.gregorian_start);

    if let Some(ms) = covering {
        let diff = (date.jd0() - ms.gregorian_start.jd0()).round() as i64;
        if (0..30).contains(&diff) {
            let source = if ms.conjunction_jd_tt.is_some() {
                CalendarSource::Astronomical
            } else {
                CalendarSource::Tabular
            };
            return ResolvedHijriDate {
                date: HijriDate {
                    year: ms.hijri_year,
                    month: ms.hijri_month,
                    day: diff as u32 + 1,
                },
                source,
            };
        }
    }

    ResolvedHijriDate {
        date: gregorian_to_hijri_tabular(date),
        source: CalendarSource::Tabular,
    }
}

/// Gregorian range of a Hijri month, from its start to the day before
/// the next month's start.
///
/// Returns `None` when the month has no start in the run. When only the
/// next start is missing, the tabular month length stands in for it.
pub fn hijri_month_range(
    hijri_year: i32,
    hijri_month: HijriMonth,
    starts: &[HijriMonthStart],
) -> Option<MonthRange> {
    let this = starts
        .iter()
        .find(|ms| ms.hijri_year == hijri_year && ms.hijri_month == hijri_month)?;

    let next_year = if hijri_month == HijriMonth::DhulHijjah { hijri_year + 1 } else { hijri_year };
    let next_month = hijri_month.next();
    let next = starts
        .iter()
        .find(|ms| ms.hijri_year == next_year && ms.hijri_month == next_month);

    let days = match next {
        Some(next) => {
            (next.gregorian_start.jd0() - this.gregorian_start.jd0()).round() as u32
        }
        None => tabular_month_days(hijri_year, hijri_month),
    };

    Some(MonthRange {
        start: this.gregorian_start,
        end: this.gregorian_start.add_days(days as i32 - 1),
        days,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start(
        hijri_year: i32,
        hijri_month: HijriMonth,
        year: i32,
        month: u32,
        day: u32,
    ) -> HijriMonthStart {
        HijriMonthStart {
            hijri_year,
            hijri_month,
            gregorian_start: CivilDate::new(year, month, day).unwrap(),
            conjunction_jd_tt: Some(2460734.53205),
        }
    }

    #[test]
    fn resolves_within_month() {
        let starts = [
            start(1446, HijriMonth::Shaban, 2025, 1, 31),
            start(1446, HijriMonth::Ramadan, 2025, 3, 1),
            start(1446, HijriMonth::Shawwal, 2025, 3, 30),
        ];
        let r = gregorian_to_hijri(CivilDate::new(2025, 3, 14).unwrap(), &starts);
        assert_eq!(r.date, HijriDate { year: 1446, month: HijriMonth::Ramadan, day: 14 });
        assert_eq!(r.source, CalendarSource::Astronomical);

        // First day of the month.
        let r = gregorian_to_hijri(CivilDate::new(2025, 3, 30).unwrap(), &starts);
        assert_eq!(r.date.day, 1);
        assert_eq!(r.date.month, HijriMonth::Shawwal);
    }

    #[test]
    fn empty_starts_fall_back_to_tabular() {
        let r = gregorian_to_hijri(CivilDate::new(2025, 1, 1).unwrap(), &[]);
        assert_eq!(r.source, CalendarSource::Tabular);
        assert_eq!(r.date, HijriDate { year: 1446, month: HijriMonth::Rajab, day: 1 });
    }

    #[test]
    fn gap_in_starts_falls_back_to_tabular() {
        // Only one old start; a date months later must not resolve to
        // day 70 of Sha'ban.
        let starts = [start(1446, HijriMonth::Shaban, 2025, 1, 31)];
        let r = gregorian_to_hijri(CivilDate::new(2025, 6, 1).unwrap(), &starts);
        assert_eq!(r.source, CalendarSource::Tabular);
        assert!(r.date.day <= 30);
    }

    #[test]
    fn range_between_starts() {
        let starts = [
            start(1446, HijriMonth::Ramadan, 2025, 3, 1),
            start(1446, HijriMonth::Shawwal, 2025, 3, 30),
        ];
        let range = hijri_month_range(1446, HijriMonth::Ramadan, &starts).unwrap();
        assert_eq!(range.days, 29);
        assert_eq!(range.start.to_string(), "2025-03-01");
        assert_eq!(range.end.to_string(), "2025-03-29");
    }

    #[test]
    fn range_estimates_open_end() {
        let starts = [start(1446, HijriMonth::Shawwal, 2025, 3, 30)];
        let range = hijri_month_range(1446, HijriMonth::Shawwal, &starts).unwrap();
        // Tabular Shawwal has 29 days.
        assert_eq!(range.days, 29);
        assert!(hijri_month_range(1446, HijriMonth::Ramadan, &starts).is_none());
    }

    #[test]
    fn range_wraps_year_at_dhul_hijjah() {
        let starts = [
            start(1446, HijriMonth::DhulHijjah, 2025, 5, 28),
            start(1447, HijriMonth::Muharram, 2025, 6, 27),
        ];
        let range = hijri_month_range(1446, HijriMonth::DhulHijjah, &starts).unwrap();
        assert_eq!(range.days, 30);
    }
}
