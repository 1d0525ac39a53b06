//! Hijri calendars: tabular arithmetic, sighting-based month starts,
//! date resolution, and the Islamic festival index.
//!
//! Two calendars coexist. The tabular calendar is closed-form and
//! reversible; the sighting-based calendars start each month from a
//! crescent criterion verdict over injected conjunction data, and
//! borrow the tabular calendar for numbering anchors and fallback.

pub mod error;
pub mod festivals;
pub mod month;
pub mod month_start;
pub mod resolve;
pub mod tabular;

pub use error::HijriError;
pub use festivals::{
    Category, FESTIVAL_RULES, FestivalMatch, FestivalRule, Importance, Observance, all_rules,
    festivals_on, is_last_ten, is_odd_night, is_ramadan, rules_for_month,
};
pub use month::{HijriDate, HijriMonth};
pub use month_start::{
    HijriMonthStart, MonthStartCache, NewMoonTable, SIGHTING_SEARCH_EVENINGS, month_starts,
    tabular_month_starts,
};
pub use resolve::{
    CalendarSource, MonthRange, ResolvedHijriDate, gregorian_to_hijri, hijri_month_range,
};
pub use tabular::{
    HIJRI_EPOCH_JD, TABULAR_CYCLE_DAYS, gregorian_to_hijri_tabular, hijri_to_gregorian_tabular,
    is_tabular_leap_year, tabular_month_days, tabular_year_days,
};
