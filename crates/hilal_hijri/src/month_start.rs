//! Sighting-based month starts.
//!
//! Each new-moon conjunction is followed by up to four evenings of
//! criterion evaluation; the civil month begins the morning after the
//! first positive evening. The resulting starts carry no Hijri numbers
//! of their own, so the first one is anchored against the nearest
//! tabular month start and the rest are numbered by counting forward.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use hilal_crescent::{CriterionId, first_sighting};
use hilal_time::CivilDate;

use crate::month::{HijriDate, HijriMonth};
use crate::tabular::{gregorian_to_hijri_tabular, hijri_to_gregorian_tabular};

/// Evenings checked after a conjunction before giving up on the month.
pub const SIGHTING_SEARCH_EVENINGS: u32 = 4;

/// Conjunctions closer than this are duplicates from overlapping years.
const MIN_CONJUNCTION_SPACING_DAYS: f64 = 15.0;

/// Tabular starts built per fallback request: two months before the
/// Hijri month containing January 1, through fourteen months after.
const TABULAR_FALLBACK_MONTHS: u32 = 16;

/// The first civil day of one Hijri month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HijriMonthStart {
    /// Hijri year of the month.
    pub hijri_year: i32,
    /// Which Hijri month starts.
    pub hijri_month: HijriMonth,
    /// First Gregorian day of the month.
    pub gregorian_start: CivilDate,
    /// The conjunction that opened this month, TT Julian Day.
    /// `None` for starts produced by tabular arithmetic.
    pub conjunction_jd_tt: Option<f64>,
}

/// Pre-computed new-moon conjunctions, JD (TT), keyed by Gregorian year.
#[derive(Debug, Clone, Default)]
pub struct NewMoonTable {
    by_year: HashMap<i32, Vec<f64>>,
}

impl NewMoonTable {
    /// Build a table from `(year, conjunctions)` pairs.
    pub fn new(entries: impl IntoIterator<Item = (i32, Vec<f64>)>) -> Self {
        Self { by_year: entries.into_iter().collect() }
    }

    /// Conjunctions recorded for one Gregorian year.
    pub fn year(&self, year: i32) -> &[f64] {
        self.by_year.get(&year).map_or(&[], Vec::as_slice)
    }

    /// Conjunctions covering `year` and both neighbours, sorted and
    /// deduplicated (real new moons are ~29.53 days apart).
    pub fn around_year(&self, year: i32) -> Vec<f64> {
        let mut all: Vec<f64> = (year - 1..=year + 1)
            .flat_map(|y| self.year(y).iter().copied())
            .collect();
        all.sort_by(f64::total_cmp);

        let mut deduped: Vec<f64> = Vec::with_capacity(all.len());
        for jd in all {
            match deduped.last() {
                Some(&prev) if jd - prev <= MIN_CONJUNCTION_SPACING_DAYS => {}
                _ => deduped.push(jd),
            }
        }
        deduped
    }
}

/// Sixteen consecutive tabular month starts bracketing a Gregorian year,
/// beginning two Hijri months before the month containing January 1.
pub fn tabular_month_starts(year: i32) -> Vec<HijriMonthStart> {
    let jan1 = gregorian_to_hijri_tabular(CivilDate { year, month: 1, day: 1 });

    let mut h_year = jan1.year;
    let mut h_month_num = jan1.month.number() as i32 - 2;
    if h_month_num < 1 {
        h_month_num += 12;
        h_year -= 1;
    }
    let mut h_month = HijriMonth::ALL[(h_month_num - 1) as usize];

    let mut starts = Vec::with_capacity(TABULAR_FALLBACK_MONTHS as usize);
    for _ in 0..TABULAR_FALLBACK_MONTHS {
        let first = HijriDate { year: h_year, month: h_month, day: 1 };
        starts.push(HijriMonthStart {
            hijri_year: h_year,
            hijri_month: h_month,
            gregorian_start: hijri_to_gregorian_tabular(first),
            conjunction_jd_tt: None,
        });
        if h_month == HijriMonth::DhulHijjah {
            h_year += 1;
        }
        h_month = h_month.next();
    }
    starts
}

/// Sighting-based month starts covering a Gregorian year.
///
/// Falls back to pure tabular starts when the criterion is tabular or
/// the table has no conjunctions around the year.
pub fn month_starts(
    year: i32,
    criterion: CriterionId,
    lat_deg: f64,
    lon_deg: f64,
    table: &NewMoonTable,
) -> Vec<HijriMonthStart> {
    if criterion == CriterionId::Tabular {
        return tabular_month_starts(year);
    }
    let new_moons = table.around_year(year);
    if new_moons.is_empty() {
        return tabular_month_starts(year);
    }

    let mut starts: Vec<HijriMonthStart> = Vec::with_capacity(new_moons.len());
    for conj_tt in new_moons {
        let Some((evening, _)) =
            first_sighting(criterion, conj_tt, lat_deg, lon_deg, SIGHTING_SEARCH_EVENINGS)
        else {
            continue;
        };
        let start = evening.add_days(1);
        // Two conjunctions can resolve to the same evening near the
        // year-overlap seams.
        if starts.last().is_some_and(|prev| prev.gregorian_start == start) {
            continue;
        }
        starts.push(HijriMonthStart {
            hijri_year: 0,
            hijri_month: HijriMonth::Muharram,
            gregorian_start: start,
            conjunction_jd_tt: Some(conj_tt),
        });
    }

    assign_hijri_numbers(&mut starts, year);
    starts
}

/// Number a sorted run of starts by anchoring the first against the
/// closest tabular month start over `year - 1 ..= year + 1`.
fn assign_hijri_numbers(starts: &mut [HijriMonthStart], year: i32) {
    let Some(first) = starts.first() else {
        return;
    };

    let tabular: Vec<HijriMonthStart> = (year - 1..=year + 1)
        .flat_map(tabular_month_starts)
        .collect();
    let first_jd = first.gregorian_start.jd0();
    let Some(anchor) = tabular.iter().min_by(|a, b| {
        let da = (a.gregorian_start.jd0() - first_jd).abs();
        let db = (b.gregorian_start.jd0() - first_jd).abs();
        da.total_cmp(&db)
    }) else {
        return;
    };

    let mut h_year = anchor.hijri_year;
    let mut h_month = anchor.hijri_month;
    for start in starts.iter_mut() {
        start.hijri_year = h_year;
        start.hijri_month = h_month;
        if h_month == HijriMonth::DhulHijjah {
            h_year += 1;
        }
        h_month = h_month.next();
    }
}

type CacheKey = (i32, CriterionId, Option<(i32, i32)>);

/// Thread-safe memo cache over [`month_starts`].
///
/// Keyed by year, criterion, and the observer rounded to 0.1 degrees;
/// fixed-location and tabular criteria drop the location component.
#[derive(Debug, Default)]
pub struct MonthStartCache {
    inner: RwLock<HashMap<CacheKey, Arc<Vec<HijriMonthStart>>>>,
}

impl MonthStartCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(year: i32, criterion: CriterionId, lat_deg: f64, lon_deg: f64) -> CacheKey {
        let location = match criterion {
            CriterionId::UmmAlQura | CriterionId::Turkey | CriterionId::Tabular => None,
            _ => Some((
                (lat_deg * 10.0).round() as i32,
                (lon_deg * 10.0).round() as i32,
            )),
        };
        (year, criterion, location)
    }

    /// Month starts for a year, computed once per cache key.
    pub fn month_starts(
        &self,
        year: i32,
        criterion: CriterionId,
        lat_deg: f64,
        lon_deg: f64,
        table: &NewMoonTable,
    ) -> Arc<Vec<HijriMonthStart>> {
        let key = Self::key(year, criterion, lat_deg, lon_deg);

        if let Ok(cache) = self.inner.read() {
            if let Some(starts) = cache.get(&key) {
                return Arc::clone(starts);
            }
        }

        let starts = Arc::new(month_starts(year, criterion, lat_deg, lon_deg, table));
        if let Ok(mut cache) = self.inner.write() {
            // A racing writer may have inserted first; keep its value so
            // all callers share one allocation.
            return Arc::clone(cache.entry(key).or_insert_with(|| Arc::clone(&starts)));
        }
        starts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn around_year_merges_and_dedupes() {
        let table = NewMoonTable::new([
            (2024, vec![2460645.8]),
            (2025, vec![2460645.9, 2460675.4, 2460705.0]),
            (2026, vec![2461059.3]),
        ]);
        let moons = table.around_year(2025);
        // The 2024/2025 near-duplicate collapses to one entry.
        assert_eq!(moons, vec![2460645.8, 2460675.4, 2460705.0, 2461059.3]);
    }

    #[test]
    fn empty_table_has_no_moons() {
        let table = NewMoonTable::default();
        assert!(table.around_year(2025).is_empty());
        assert!(table.year(2025).is_empty());
    }

    #[test]
    fn tabular_starts_bracket_january() {
        let starts = tabular_month_starts(2025);
        assert_eq!(starts.len(), 16);
        // Jan 1 2025 falls in Rajab 1446; the run starts two months
        // earlier, in Jumada al-Ula.
        assert_eq!(starts[0].hijri_month, HijriMonth::JumadaAlUla);
        assert_eq!(starts[0].hijri_year, 1446);
        assert!(starts[0].conjunction_jd_tt.is_none());
        // Consecutive months, 29 or 30 days apart.
        for pair in starts.windows(2) {
            assert_eq!(pair[0].hijri_month.next(), pair[1].hijri_month);
            let gap = pair[1].gregorian_start.jd0() - pair[0].gregorian_start.jd0();
            assert!(gap == 29.0 || gap == 30.0, "gap: {gap}");
        }
    }

    #[test]
    fn tabular_criterion_ignores_table() {
        let table = NewMoonTable::default();
        let starts = month_starts(2025, CriterionId::Tabular, 0.0, 0.0, &table);
        assert_eq!(starts.len(), 16);
    }

    #[test]
    fn missing_years_fall_back_to_tabular() {
        let table = NewMoonTable::default();
        let starts = month_starts(1995, CriterionId::UmmAlQura, 21.4225, 39.8262, &table);
        assert_eq!(starts.len(), 16);
        assert!(starts.iter().all(|s| s.conjunction_jd_tt.is_none()));
    }

    #[test]
    fn cache_key_drops_location_for_fixed_criteria() {
        let a = MonthStartCache::key(2025, CriterionId::UmmAlQura, 24.7, 46.7);
        let b = MonthStartCache::key(2025, CriterionId::UmmAlQura, 33.7, 73.1);
        assert_eq!(a, b);

        let c = MonthStartCache::key(2025, CriterionId::Yallop, 24.71, 46.68);
        let d = MonthStartCache::key(2025, CriterionId::Yallop, 24.74, 46.72);
        assert_eq!(c, d);
        let e = MonthStartCache::key(2025, CriterionId::Yallop, 25.3, 46.7);
        assert_ne!(c, e);
    }

    #[test]
    fn cache_returns_shared_value() {
        let cache = MonthStartCache::new();
        let table = NewMoonTable::default();
        let a = cache.month_starts(2025, CriterionId::Tabular, 0.0, 0.0, &table);
        let b = cache.month_starts(2025, CriterionId::Tabular, 10.0, 10.0, &table);
        assert!(Arc::ptr_eq(&a, &b));
    }
}
