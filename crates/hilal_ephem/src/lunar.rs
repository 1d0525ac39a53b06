//! Lunar position from the truncated ELP 2000-82 series.
//!
//! Clean-room implementation of Meeus, *Astronomical Algorithms*
//! (2nd ed.), chapter 47: the 60 largest longitude/distance terms and
//! the 60 largest latitude terms, plus the A1/A2/A3 additive terms and
//! the eccentricity correction. Positional accuracy is about 10" in
//! longitude and 4" in latitude, a few kilometres in distance.

use hilal_time::{DAYS_PER_CENTURY, J2000_JD};

use crate::solar::{altitude, azimuth_from_north, clamped_asin, mean_obliquity, sidereal_time};

/// Mean Earth-Moon distance baseline, km.
const MEAN_DISTANCE_KM: f64 = 385000.56;

/// Earth equatorial radius, km (for horizontal parallax).
pub const EARTH_RADIUS_KM: f64 = 6378.14;

/// Moon radius, km (for semidiameter).
pub const MOON_RADIUS_KM: f64 = 1737.4;

/// Topocentric lunar position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarPosition {
    /// Altitude above the horizon, degrees, refraction-corrected.
    pub altitude_deg: f64,
    /// Azimuth from North, clockwise, degrees in `[0, 360)`.
    pub azimuth_deg: f64,
    /// Geocentric distance, km.
    pub distance_km: f64,
}

/// Longitude/distance periodic terms: (D, M, M', F, sin coeff, cos coeff).
static LR_TABLE: [(i8, i8, i8, i8, i32, i32); 60] = [
    (0, 0, 1, 0, 6288774, -20905355),
    (2, 0, -1, 0, 1274027, -3699111),
    (2, 0, 0, 0, 658314, -2955968),
    (0, 0, 2, 0, 213618, -569925),
    (0, 1, 0, 0, -185116, 48888),
    (0, 0, 0, 2, -114332, -3149),
    (2, 0, -2, 0, 58793, 246158),
    (2, -1, -1, 0, 57066, -152138),
    (2, 0, 1, 0, 53322, -170733),
    (2, -1, 0, 0, 45758, -204586),
    (0, 1, -1, 0, -40923, -129620),
    (1, 0, 0, 0, -34720, 108743),
    (0, 1, 1, 0, -30383, 104755),
    (2, 0, 0, -2, 15327, 10321),
    (0, 0, 1, 2, -12528, 0),
    (0, 0, 1, -2, 10980, 79661),
    (4, 0, -1, 0, 10675, -34782),
    (0, 0, 3, 0, 10034, -23210),
    (4, 0, -2, 0, 8548, -21636),
    (2, 1, -1, 0, -7888, 24208),
    (2, 1, 0, 0, -6766, 30824),
    (1, 0, -1, 0, -5163, -8379),
    (1, 1, 0, 0, 4987, -16675),
    (2, -1, 1, 0, 4036, -12831),
    (2, 0, 2, 0, 3994, -10445),
    (4, 0, 0, 0, 3861, -11650),
    (2, 0, -3, 0, 3665, 14403),
    (0, 1, -2, 0, -2689, -7003),
    (2, 0, -1, 2, -2602, 0),
    (2, -1, -2, 0, 2390, 10056),
    (1, 0, 1, 0, -2348, 6322),
    (2, -2, 0, 0, 2236, -9884),
    (0, 1, 2, 0, -2120, 5751),
    (0, 2, 0, 0, -2069, 0),
    (2, -2, -1, 0, 2048, -4950),
    (2, 0, 1, -2, -1773, 4130),
    (2, 0, 0, 2, -1595, 0),
    (4, -1, -1, 0, 1215, -3958),
    (0, 0, 2, 2, -1110, 0),
    (3, 0, -1, 0, -892, 3258),
    (2, 1, 1, 0, -810, 2616),
    (4, -1, -2, 0, 759, -1897),
    (0, 2, -1, 0, -713, -2117),
    (2, 2, -1, 0, -700, 2354),
    (2, 1, -2, 0, 691, 0),
    (2, -1, 0, -2, 596, 0),
    (4, 0, 1, 0, 549, -1423),
    (0, 0, 4, 0, 537, -1117),
    (4, -1, 0, 0, 520, -1571),
    (1, 0, -2, 0, -487, -1739),
    (2, 1, 0, -2, -399, 0),
    (0, 0, 2, -2, -381, -4421),
    (1, 1, 1, 0, 351, 0),
    (3, 0, -2, 0, -340, 0),
    (4, 0, -3, 0, 330, 0),
    (2, -1, 2, 0, 327, 0),
    (0, 2, 1, 0, -323, 1165),
    (1, 1, -1, 0, 299, 0),
    (2, 0, 3, 0, 294, 0),
    (2, 0, -1, -2, 0, 8752),
];

/// Latitude periodic terms: (D, M, M', F, sin coeff).
static B_TABLE: [(i8, i8, i8, i8, i32); 60] = [
    (0, 0, 0, 1, 5128122),
    (0, 0, 1, 1, 280602),
    (0, 0, 1, -1, 277693),
    (2, 0, 0, -1, 173237),
    (2, 0, -1, 1, 55413),
    (2, 0, -1, -1, 46271),
    (2, 0, 0, 1, 32573),
    (0, 0, 2, 1, 17198),
    (2, 0, 1, -1, 9266),
    (0, 0, 2, -1, 8822),
    (2, -1, 0, -1, 8216),
    (2, 0, -2, -1, 4324),
    (2, 0, 1, 1, 4200),
    (2, 1, 0, -1, -3359),
    (2, -1, -1, 1, 2463),
    (2, -1, 0, 1, 2211),
    (2, -1, -1, -1, 2065),
    (0, 1, -1, -1, -1870),
    (4, 0, -1, -1, 1828),
    (0, 1, 0, 1, -1794),
    (0, 0, 0, 3, -1749),
    (0, 1, -1, 1, -1565),
    (1, 0, 0, 1, -1491),
    (0, 1, 1, 1, -1475),
    (0, 1, 1, -1, -1410),
    (0, 1, 0, -1, -1344),
    (1, 0, 0, -1, -1335),
    (0, 0, 3, 1, 1107),
    (4, 0, 0, -1, 1021),
    (4, 0, -1, 1, 833),
    (0, 0, 1, -3, 777),
    (4, 0, -2, 1, 671),
    (2, 0, 0, -3, 607),
    (2, 0, 2, -1, 596),
    (2, -1, 1, -1, 491),
    (2, 0, -2, 1, -451),
    (0, 0, 3, -1, 439),
    (2, 0, 2, 1, 422),
    (2, 0, -3, -1, 421),
    (2, 1, -1, 1, -366),
    (2, 1, 0, 1, -351),
    (4, 0, 0, 1, 331),
    (2, -1, 1, 1, 315),
    (2, -2, 0, -1, 302),
    (0, 0, 1, 3, -283),
    (2, 1, 1, -1, -229),
    (1, 1, 0, -1, 223),
    (1, 1, 0, 1, 223),
    (0, 1, -2, -1, -220),
    (2, 1, -1, -1, -220),
    (1, 0, 1, 1, -185),
    (2, -1, -2, -1, 181),
    (0, 1, 2, 1, -177),
    (4, 0, -2, -1, 176),
    (4, -1, -1, -1, 166),
    (1, 0, 1, -1, -164),
    (4, 0, 1, -1, 132),
    (1, 0, -1, -1, -119),
    (4, -1, 0, -1, 115),
    (2, -2, 0, 1, 107),
];

/// Moon geocentric right ascension, declination (radians) and distance
/// (km) at `d` days since J2000.
pub(crate) fn moon_coords(d: f64) -> (f64, f64, f64) {
    let t = d / DAYS_PER_CENTURY;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    // Mean longitude, elongation, anomalies, argument of latitude (deg).
    let lp = 218.3164477 + 481267.88123421 * t - 0.0015786 * t2 + t3 / 538841.0
        - t4 / 65194000.0;
    let d_el = 297.8501921 + 445267.1114034 * t - 0.0018819 * t2 + t3 / 545868.0
        - t4 / 113065000.0;
    let m = 357.5291092 + 35999.0502909 * t - 0.0001536 * t2 + t3 / 24490000.0;
    let mp = 134.9633964 + 477198.8675055 * t + 0.0087414 * t2 + t3 / 69699.0
        - t4 / 14712000.0;
    let f = 93.2720950 + 483202.0175233 * t - 0.0036539 * t2 - t3 / 3526000.0
        + t4 / 863310000.0;

    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479264.290 * t).to_radians();
    let a3 = (313.45 + 481266.484 * t).to_radians();

    let dr = d_el.to_radians();
    let mr = m.to_radians();
    let mpr = mp.to_radians();
    let fr = f.to_radians();
    let lpr = lp.to_radians();

    let e = 1.0 - 0.002516 * t - 0.0000074 * t2;
    let e2 = e * e;
    let e_corr = |m_mult: i8| match m_mult.abs() {
        2 => e2,
        1 => e,
        _ => 1.0,
    };

    let mut sum_l = 0.0;
    let mut sum_r = 0.0;
    for &(cd, cm, cmp, cf, sl, sr) in &LR_TABLE {
        let arg = cd as f64 * dr + cm as f64 * mr + cmp as f64 * mpr + cf as f64 * fr;
        let ec = e_corr(cm);
        sum_l += sl as f64 * ec * arg.sin();
        sum_r += sr as f64 * ec * arg.cos();
    }

    let mut sum_b = 0.0;
    for &(cd, cm, cmp, cf, sb) in &B_TABLE {
        let arg = cd as f64 * dr + cm as f64 * mr + cmp as f64 * mpr + cf as f64 * fr;
        sum_b += sb as f64 * e_corr(cm) * arg.sin();
    }

    sum_l += 3958.0 * a1.sin() + 1962.0 * (lpr - fr).sin() + 318.0 * a2.sin();
    sum_b += -2235.0 * lpr.sin()
        + 382.0 * a3.sin()
        + 175.0 * (a1 - fr).sin()
        + 175.0 * (a1 + fr).sin()
        + 127.0 * (lpr - mpr).sin()
        - 115.0 * (lpr + mpr).sin();

    let lambda = (lp + sum_l / 1_000_000.0).to_radians();
    let beta = (sum_b / 1_000_000.0).to_radians();
    let dist = MEAN_DISTANCE_KM + sum_r / 1000.0;

    let eps = mean_obliquity(d);
    let ra = (lambda.sin() * eps.cos() - beta.tan() * eps.sin()).atan2(lambda.cos());
    let dec = clamped_asin(beta.sin() * eps.cos() + beta.cos() * eps.sin() * lambda.sin());
    (ra, dec, dist)
}

/// Moon altitude/azimuth/distance for an observer, at a UT Julian Day.
///
/// The altitude carries the small-angle refraction correction used for
/// the crescent geometry; rise/set thresholds use the geometric
/// altitude via [`moon_alt_above_horizon`] instead.
pub fn moon_position(jd_ut: f64, lat_deg: f64, lon_deg: f64) -> LunarPosition {
    let d = jd_ut - J2000_JD;
    let phi = lat_deg.to_radians();
    let (ra, dec, dist) = moon_coords(d);
    let h = sidereal_time(d, lon_deg.to_radians()) - ra;
    let mut alt = altitude(h, phi, dec);
    let rad = std::f64::consts::PI / 180.0;
    alt += rad * 0.017 / (alt + rad * 10.26 / (alt + rad * 5.10)).tan();
    LunarPosition {
        altitude_deg: alt.to_degrees(),
        azimuth_deg: azimuth_from_north(h, phi, dec).to_degrees(),
        distance_km: dist,
    }
}

/// Geometric moon altitude minus the rise/set threshold, radians.
///
/// The threshold folds in horizontal parallax and 34' of horizon
/// refraction: `0.7275 hp - 34'`. Zero crossings of this function are
/// moonrise and moonset of the upper limb.
pub(crate) fn moon_alt_above_horizon(jd_ut: f64, phi: f64, lon_rad: f64) -> f64 {
    let d = jd_ut - J2000_JD;
    let (ra, dec, dist) = moon_coords(d);
    let h = sidereal_time(d, lon_rad) - ra;
    let h_geo = altitude(h, phi, dec);
    let hp = clamped_asin(EARTH_RADIUS_KM / dist);
    let h0 = 0.7275 * hp - (34.0 / 60.0_f64).to_radians();
    h_geo - h0
}

#[cfg(test)]
mod tests {
    use super::*;
    use hilal_time::calendar_to_jd;

    #[test]
    fn meeus_example_47a() {
        // 1992 April 12.0 TT: lambda 133.162655, beta -3.229126,
        // dist 368409.7 km. Distance is the directly comparable output.
        let d = calendar_to_jd(1992, 4, 12.0) - J2000_JD;
        let (_, _, dist) = moon_coords(d);
        assert!((dist - 368409.7).abs() < 5.0, "distance: {dist}");
    }

    #[test]
    fn distance_within_orbit_bounds() {
        for day in (0..365).step_by(7) {
            let d = calendar_to_jd(2025, 1, 1.0) - J2000_JD + day as f64;
            let (_, _, dist) = moon_coords(d);
            assert!((350000.0..410000.0).contains(&dist), "day {day}: {dist}");
        }
    }

    #[test]
    fn declination_within_bounds() {
        // Geocentric declination stays within roughly +-29 degrees.
        for day in 0..60 {
            let d = calendar_to_jd(2025, 1, 1.0) - J2000_JD + day as f64 * 0.5;
            let (_, dec, _) = moon_coords(d);
            assert!(dec.to_degrees().abs() < 29.5, "day {day}: {}", dec.to_degrees());
        }
    }

    #[test]
    fn position_azimuth_range() {
        for h in 0..24 {
            let pos = moon_position(calendar_to_jd(2025, 7, 1.0) + h as f64 / 24.0, 51.5, -0.1);
            assert!((0.0..360.0).contains(&pos.azimuth_deg));
        }
    }
}
