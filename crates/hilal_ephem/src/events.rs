//! Rise, set, and altitude-crossing event finding.
//!
//! Sun events use an analytic hour-angle first estimate refined by
//! bisection on the full solar position. Moon events scan the day in
//! two-hour steps, bracket crossings by quadratic interpolation, and
//! refine by bisection against the parallax-corrected horizon.
//!
//! All returned instants are UT Julian Days. A `None` (or the
//! `always_up`/`always_down` flags) is a valid outcome, not an error:
//! at polar latitudes the crossing simply may not exist.

use hilal_time::{CivilDate, J2000_JD};

use crate::lunar::moon_alt_above_horizon;
use crate::solar::{
    clamped_asin, ecliptic_longitude, solar_mean_anomaly, sun_position,
};

/// Standard rise/set altitude: upper limb on the horizon, refracted.
pub const SUN_HORIZON_DEG: f64 = -0.833;

/// Bisection iteration cap for event refinement.
const MAX_BISECTIONS: u32 = 20;

/// Half-width of the sun refinement window, days (20 minutes).
const SUN_WINDOW_DAYS: f64 = 20.0 / 1440.0;

/// Half-width of the moon refinement window, days (30 minutes).
const MOON_WINDOW_DAYS: f64 = 30.0 / 1440.0;

/// Constant of the analytic transit estimate (Meeus/NOAA `J0`).
const J0: f64 = 0.0009;

/// Moon rise/set outcome for one civil day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonEvents {
    /// Moonrise, UT Julian Day, if one occurs this day.
    pub rise: Option<f64>,
    /// Moonset, UT Julian Day, if one occurs this day.
    pub set: Option<f64>,
    /// Moon stays above the horizon all day.
    pub always_up: bool,
    /// Moon stays below the horizon all day.
    pub always_down: bool,
}

/// Find the UT instant the sun crosses `target_alt_deg` on `date`.
///
/// `rising` selects the morning (ascending) crossing; otherwise the
/// evening (descending) one. Returns `None` when the sun never reaches
/// the altitude that day (polar day/night, or an angle below the
/// midnight sun).
pub fn sun_event(
    date: CivilDate,
    lat_deg: f64,
    lon_deg: f64,
    target_alt_deg: f64,
    rising: bool,
) -> Option<f64> {
    let lw = -lon_deg.to_radians();
    let phi = lat_deg.to_radians();
    let two_pi = 2.0 * std::f64::consts::PI;

    // Analytic estimate around local solar noon.
    let d = date.jd0() + 0.5 - J2000_JD;
    let n = (d + 0.5 - J0).round();
    let ds = J0 + lw / two_pi + n;
    let m = solar_mean_anomaly(ds);
    let l = ecliptic_longitude(m);
    let dec = clamped_asin(23.4397_f64.to_radians().sin() * l.sin());
    let j_noon = J2000_JD + ds + 0.0053 * m.sin() - 0.0069 * (2.0 * l).sin();

    let h = target_alt_deg.to_radians();
    let cos_ha = (h.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos());
    if !(-1.0..=1.0).contains(&cos_ha) {
        return None;
    }
    let w = cos_ha.acos();
    let j_set = J2000_JD + (J0 + (w + lw) / two_pi + n) + 0.0053 * m.sin() - 0.0069 * (2.0 * l).sin();
    let estimate = if rising { j_noon - (j_set - j_noon) } else { j_set };

    Some(refine_sun_event(estimate, lat_deg, lon_deg, target_alt_deg, rising))
}

/// Bisection on the full solar altitude around an estimate.
///
/// Falls back to the estimate itself when the 20-minute window does
/// not bracket the crossing.
fn refine_sun_event(
    estimate: f64,
    lat_deg: f64,
    lon_deg: f64,
    target_alt_deg: f64,
    rising: bool,
) -> f64 {
    let mut lo = estimate - SUN_WINDOW_DAYS;
    let mut hi = estimate + SUN_WINDOW_DAYS;

    let alt_lo = sun_position(lo, lat_deg, lon_deg).altitude_deg;
    let alt_hi = sun_position(hi, lat_deg, lon_deg).altitude_deg;
    let bracketed = if rising {
        alt_lo < target_alt_deg && alt_hi > target_alt_deg
    } else {
        alt_lo > target_alt_deg && alt_hi < target_alt_deg
    };
    if !bracketed {
        return estimate;
    }

    for _ in 0..MAX_BISECTIONS {
        let mid = (lo + hi) / 2.0;
        let alt_mid = sun_position(mid, lat_deg, lon_deg).altitude_deg;
        let below = alt_mid < target_alt_deg;
        if below == rising {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    (lo + hi) / 2.0
}

/// Sunrise (upper limb, refracted) on `date`, UT Julian Day.
pub fn sunrise_jd(date: CivilDate, lat_deg: f64, lon_deg: f64) -> Option<f64> {
    sun_event(date, lat_deg, lon_deg, SUN_HORIZON_DEG, true)
}

/// Sunset (upper limb, refracted) on `date`, UT Julian Day.
pub fn sunset_jd(date: CivilDate, lat_deg: f64, lon_deg: f64) -> Option<f64> {
    sun_event(date, lat_deg, lon_deg, SUN_HORIZON_DEG, false)
}

/// Moonrise and moonset for the local day of `date`.
///
/// The scan window is anchored to approximate local midnight (whole
/// hours of longitude) and covers 26 hours, so events are reported for
/// the observer's day, not the UT day.
pub fn moon_events(date: CivilDate, lat_deg: f64, lon_deg: f64) -> MoonEvents {
    let phi = lat_deg.to_radians();
    let lon_rad = lon_deg.to_radians();

    let offset_hours = (lon_deg / 15.0).round();
    let local_midnight = date.jd0() - offset_hours / 24.0 - 1.0 / 24.0;
    let local_end = local_midnight + 26.0 / 24.0;
    let search_start = local_midnight - 3.0 / 24.0;

    let alt_at = |jd: f64| moon_alt_above_horizon(jd, phi, lon_rad);

    let mut h0 = alt_at(search_start);
    let mut rise: Option<f64> = None;
    let mut set: Option<f64> = None;

    let mut i = 1;
    while i <= 30 {
        let h1 = alt_at(search_start + i as f64 / 24.0);
        let h2 = alt_at(search_start + (i + 1) as f64 / 24.0);

        // Quadratic through (−1,h0), (0,h1), (1,h2) in hour units.
        let a = (h0 + h2) / 2.0 - h1;
        let b = (h2 - h0) / 2.0;
        let xe = -b / (2.0 * a);
        let ye = (a * xe + b) * xe + h1;
        let disc = b * b - 4.0 * a * h1;
        let mut roots = 0;
        let mut x1 = 0.0;
        let mut x2 = 0.0;
        if disc >= 0.0 {
            let dx = disc.sqrt() / (a.abs() * 2.0);
            x1 = xe - dx;
            x2 = xe + dx;
            if x1.abs() <= 1.0 {
                roots += 1;
            }
            if x2.abs() <= 1.0 {
                roots += 1;
            }
            if x1 < -1.0 {
                x1 = x2;
            }
        }

        if roots == 1 {
            let candidate = search_start + (i as f64 + x1) / 24.0;
            if (local_midnight..local_end).contains(&candidate) {
                if h0 < 0.0 && rise.is_none() {
                    rise = Some(candidate);
                } else if h0 >= 0.0 && set.is_none() {
                    set = Some(candidate);
                }
            }
        } else if roots == 2 {
            let (rx, sx) = if ye < 0.0 { (x2, x1) } else { (x1, x2) };
            let rise_candidate = search_start + (i as f64 + rx) / 24.0;
            let set_candidate = search_start + (i as f64 + sx) / 24.0;
            if rise.is_none() && (local_midnight..local_end).contains(&rise_candidate) {
                rise = Some(rise_candidate);
            }
            if set.is_none() && (local_midnight..local_end).contains(&set_candidate) {
                set = Some(set_candidate);
            }
        }

        if rise.is_some() && set.is_some() {
            break;
        }
        h0 = h2;
        i += 2;
    }

    let rise = rise.map(|jd| refine_moon_event(jd, phi, lon_rad, true));
    let set = set.map(|jd| refine_moon_event(jd, phi, lon_rad, false));

    MoonEvents {
        rise,
        set,
        always_up: rise.is_none() && set.is_none() && h0 > 0.0,
        always_down: rise.is_none() && set.is_none() && h0 <= 0.0,
    }
}

/// Bisection on the parallax-corrected moon altitude.
fn refine_moon_event(estimate: f64, phi: f64, lon_rad: f64, rising: bool) -> f64 {
    let mut lo = estimate - MOON_WINDOW_DAYS;
    let mut hi = estimate + MOON_WINDOW_DAYS;

    let alt_lo = moon_alt_above_horizon(lo, phi, lon_rad);
    let alt_hi = moon_alt_above_horizon(hi, phi, lon_rad);
    let bracketed = if rising {
        alt_lo < 0.0 && alt_hi > 0.0
    } else {
        alt_lo > 0.0 && alt_hi < 0.0
    };
    if !bracketed {
        return estimate;
    }

    for _ in 0..MAX_BISECTIONS {
        let mid = (lo + hi) / 2.0;
        let below = moon_alt_above_horizon(mid, phi, lon_rad) < 0.0;
        if below == rising {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    (lo + hi) / 2.0
}
