//! Delta T (TT - UT) lookup and time-scale conversion.
//!
//! Terrestrial Time runs ahead of Universal Time by a slowly varying
//! offset. Conjunction ephemerides are tabulated in TT while rise/set
//! geometry is computed in UT, so every comparison between the two
//! crosses this table.
//!
//! Sources: IERS/USNO historical values through 2024, polynomial
//! extrapolation beyond. Accuracy about 0.1 s historical, 1-2 s for
//! predictions.

use crate::julian::J2000_JD;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// (calendar year, TT - UT in seconds), strictly increasing in year.
static DELTA_T_TABLE: [(f64, f64); 60] = [
    (1900.0, -2.72),
    (1905.0, 3.86),
    (1910.0, 10.38),
    (1915.0, 17.20),
    (1920.0, 21.16),
    (1925.0, 23.62),
    (1930.0, 24.02),
    (1935.0, 23.93),
    (1940.0, 24.33),
    (1945.0, 26.77),
    (1950.0, 29.15),
    (1955.0, 31.07),
    (1960.0, 33.15),
    (1965.0, 35.73),
    (1970.0, 40.18),
    (1975.0, 45.48),
    (1980.0, 50.54),
    (1985.0, 54.34),
    (1990.0, 56.86),
    (1995.0, 60.79),
    (2000.0, 63.83),
    (2001.0, 64.09),
    (2002.0, 64.30),
    (2003.0, 64.47),
    (2004.0, 64.57),
    (2005.0, 64.69),
    (2006.0, 64.85),
    (2007.0, 65.15),
    (2008.0, 65.46),
    (2009.0, 65.78),
    (2010.0, 66.07),
    (2011.0, 66.32),
    (2012.0, 66.60),
    (2013.0, 66.91),
    (2014.0, 67.28),
    (2015.0, 67.64),
    (2016.0, 68.12),
    (2017.0, 68.59),
    (2018.0, 68.97),
    (2019.0, 69.22),
    (2020.0, 69.36),
    // ΔT has been decreasing slightly since 2020.
    (2021.0, 69.29),
    (2022.0, 69.18),
    (2023.0, 69.10),
    (2024.0, 69.20),
    (2025.0, 69.5),
    (2026.0, 69.7),
    (2027.0, 69.9),
    (2028.0, 70.1),
    (2029.0, 70.3),
    (2030.0, 70.5),
    (2035.0, 71.5),
    (2040.0, 73.0),
    (2045.0, 75.0),
    (2050.0, 77.0),
    (2060.0, 82.0),
    (2070.0, 88.0),
    (2080.0, 95.0),
    (2090.0, 103.0),
    (2100.0, 112.0),
];

/// ΔT (TT - UT) in seconds for a (possibly fractional) calendar year.
///
/// Linear interpolation between table entries; clamps to the first and
/// last entries outside 1900-2100.
pub fn delta_t_seconds(year: f64) -> f64 {
    let (first_year, first_dt) = DELTA_T_TABLE[0];
    if year <= first_year {
        return first_dt;
    }
    let (last_year, last_dt) = DELTA_T_TABLE[DELTA_T_TABLE.len() - 1];
    if year >= last_year {
        return last_dt;
    }
    for pair in DELTA_T_TABLE.windows(2) {
        let (y0, dt0) = pair[0];
        let (y1, dt1) = pair[1];
        if year >= y0 && year < y1 {
            let fraction = (year - y0) / (y1 - y0);
            return dt0 + fraction * (dt1 - dt0);
        }
    }
    last_dt
}

/// Approximate calendar year of a Julian Day, for ΔT lookup.
///
/// The TT/UT distinction of the input is far below the table resolution.
fn jd_to_year(jd: f64) -> f64 {
    2000.0 + (jd - J2000_JD) / 365.25
}

/// ΔT in days at a Julian Day.
pub fn delta_t_days(jd: f64) -> f64 {
    delta_t_seconds(jd_to_year(jd)) / SECONDS_PER_DAY
}

/// Convert a Julian Day in UT to TT.
pub fn ut_to_tt(jd_ut: f64) -> f64 {
    jd_ut + delta_t_days(jd_ut)
}

/// Convert a Julian Day in TT to UT.
pub fn tt_to_ut(jd_tt: f64) -> f64 {
    jd_tt - delta_t_days(jd_tt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::calendar_to_jd;

    #[test]
    fn table_years_strictly_increasing() {
        for pair in DELTA_T_TABLE.windows(2) {
            assert!(pair[0].0 < pair[1].0, "out of order at {}", pair[1].0);
        }
    }

    #[test]
    fn exact_table_years() {
        assert!((delta_t_seconds(2015.0) - 67.64).abs() < 1e-9);
        assert!((delta_t_seconds(1970.0) - 40.18).abs() < 1e-9);
    }

    #[test]
    fn interpolates_between_entries() {
        // Midway 2021..2022: 69.29 -> 69.18
        let dt = delta_t_seconds(2021.5);
        assert!((dt - 69.235).abs() < 1e-9, "dt: {dt}");
    }

    #[test]
    fn clamps_outside_range() {
        assert!((delta_t_seconds(1800.0) - (-2.72)).abs() < 1e-9);
        assert!((delta_t_seconds(2200.0) - 112.0).abs() < 1e-9);
    }

    #[test]
    fn round_trip_through_tt() {
        let jd_ut = calendar_to_jd(2025, 6, 1.25);
        let back = tt_to_ut(ut_to_tt(jd_ut));
        // Not exactly involutive (lookup year shifts by ~70 s) but far
        // below a millisecond.
        assert!((back - jd_ut).abs() * SECONDS_PER_DAY < 1e-3);
    }

    #[test]
    fn delta_t_2025_close_to_69_5() {
        let jd = calendar_to_jd(2025, 1, 1.0);
        let dt = delta_t_days(jd) * SECONDS_PER_DAY;
        assert!((dt - 69.5).abs() < 0.1, "dt: {dt}");
    }
}
