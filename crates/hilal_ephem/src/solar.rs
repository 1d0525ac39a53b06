//! Solar position and timing.
//!
//! Clean-room implementation of the solar theory in Meeus, *Astronomical
//! Algorithms* (2nd ed.), chapter 25, with the apparent sidereal time of
//! eq. 12.4. Accuracy is well under an arcminute over 1900-2100, which
//! translates to a few seconds of event time.

use hilal_time::{DAYS_PER_CENTURY, J2000_JD};

/// Topocentric solar position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Altitude above the horizon, degrees (no refraction).
    pub altitude_deg: f64,
    /// Azimuth from North, clockwise, degrees in `[0, 360)`.
    pub azimuth_deg: f64,
}

/// Right ascension from ecliptic longitude/latitude (radians).
pub(crate) fn right_ascension(lon: f64, lat: f64, eps: f64) -> f64 {
    (lon.sin() * eps.cos() - lat.tan() * eps.sin()).atan2(lon.cos())
}

/// Declination from ecliptic longitude/latitude (radians).
pub(crate) fn declination(lon: f64, lat: f64, eps: f64) -> f64 {
    clamped_asin(lat.sin() * eps.cos() + lat.cos() * eps.sin() * lon.sin())
}

/// Altitude from hour angle, latitude, declination (radians).
pub(crate) fn altitude(h: f64, phi: f64, dec: f64) -> f64 {
    clamped_asin(phi.sin() * dec.sin() + phi.cos() * dec.cos() * h.cos())
}

/// Azimuth from North, clockwise, radians in `[0, 2pi)`.
pub(crate) fn azimuth_from_north(h: f64, phi: f64, dec: f64) -> f64 {
    let az_south = h.sin().atan2(h.cos() * phi.sin() - dec.tan() * phi.cos());
    (az_south + std::f64::consts::PI).rem_euclid(2.0 * std::f64::consts::PI)
}

/// `asin` with the argument clamped to `[-1, 1]`.
pub(crate) fn clamped_asin(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).asin()
}

/// `acos` with the argument clamped to `[-1, 1]`.
pub(crate) fn clamped_acos(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).acos()
}

/// Mean obliquity of the ecliptic, radians, at `d` days since J2000.
pub(crate) fn mean_obliquity(d: f64) -> f64 {
    let t = d / DAYS_PER_CENTURY;
    (23.439291 - 0.0130042 * t).to_radians()
}

/// Apparent sidereal time at Greenwich plus east longitude, radians.
pub(crate) fn sidereal_time(d: f64, lon_rad: f64) -> f64 {
    let t = d / DAYS_PER_CENTURY;
    (280.46061837 + 360.98564736629 * d + 0.000387933 * t * t).to_radians() + lon_rad
}

/// Solar right ascension and declination (radians) at `d` days since J2000.
pub(crate) fn sun_coords(d: f64) -> (f64, f64) {
    let t = d / DAYS_PER_CENTURY;
    let l0 = ((280.46646 + 36000.76983 * t + 0.0003032 * t * t) % 360.0).to_radians();
    let m = ((357.52911 + 35999.05029 * t - 0.0001537 * t * t) % 360.0).to_radians();
    let c = ((1.914602 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin())
    .to_radians();
    let sun_lon = l0 + c;
    let eps = mean_obliquity(d);
    let ra = (sun_lon.sin() * eps.cos()).atan2(sun_lon.cos());
    let dec = clamped_asin(eps.sin() * sun_lon.sin());
    (ra, dec)
}

/// Sun altitude/azimuth for an observer, at a UT Julian Day.
pub fn sun_position(jd_ut: f64, lat_deg: f64, lon_deg: f64) -> SolarPosition {
    let d = jd_ut - J2000_JD;
    let phi = lat_deg.to_radians();
    let (ra, dec) = sun_coords(d);
    let h = sidereal_time(d, lon_deg.to_radians()) - ra;
    SolarPosition {
        altitude_deg: altitude(h, phi, dec).to_degrees(),
        azimuth_deg: azimuth_from_north(h, phi, dec).to_degrees(),
    }
}

/// Solar mean anomaly (radians) from a low-precision linear series.
///
/// The short series is only used for the first rise/set estimate and
/// the noon declination; the bisection refinement runs on the full
/// `sun_position`.
pub(crate) fn solar_mean_anomaly(d: f64) -> f64 {
    (357.5291 + 0.98560028 * d).to_radians()
}

/// Ecliptic longitude (radians) from the mean anomaly.
pub(crate) fn ecliptic_longitude(m: f64) -> f64 {
    let c = (1.9148 * m.sin() + 0.02 * (2.0 * m).sin() + 0.0003 * (3.0 * m).sin()).to_radians();
    let perihelion = 102.9372_f64.to_radians();
    m + c + perihelion + std::f64::consts::PI
}

/// Sun declination (radians) at `d` days since J2000.
pub fn sun_declination_rad(d: f64) -> f64 {
    let l = ecliptic_longitude(solar_mean_anomaly(d));
    clamped_asin(23.4397_f64.to_radians().sin() * l.sin())
}

/// Equation of time in minutes (mean solar time minus apparent).
pub fn equation_of_time_min(d: f64) -> f64 {
    let m = solar_mean_anomaly(d);
    let l = ecliptic_longitude(m);
    let ra = (l.sin() * 23.4397_f64.to_radians().cos()).atan2(l.cos());
    let perihelion = 102.9372_f64.to_radians();
    let eot = (m + perihelion + std::f64::consts::PI - ra) / (2.0 * std::f64::consts::PI) * 1440.0;
    let mut result = eot % 1440.0;
    if result > 720.0 {
        result -= 1440.0;
    }
    if result < -720.0 {
        result += 1440.0;
    }
    result
}

/// Local solar transit (apparent noon) as a UT Julian Day.
///
/// `jd0` is 0h UT of the civil date; `lon_deg` is east-positive.
pub fn solar_noon_jd(jd0: f64, lon_deg: f64) -> f64 {
    let d = jd0 + 0.5 - J2000_JD;
    let eot = equation_of_time_min(d);
    let transit_hours = 12.0 - eot / 60.0 - lon_deg / 15.0;
    jd0 + transit_hours / 24.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use hilal_time::calendar_to_jd;

    #[test]
    fn equinox_declination_near_zero() {
        let jd = calendar_to_jd(2025, 3, 20.375); // ~equinox instant
        let dec = sun_declination_rad(jd - J2000_JD).to_degrees();
        assert!(dec.abs() < 0.5, "declination: {dec}");
    }

    #[test]
    fn solstice_declination_near_obliquity() {
        let jd = calendar_to_jd(2025, 6, 21.0);
        let dec = sun_declination_rad(jd - J2000_JD).to_degrees();
        assert!((dec - 23.4).abs() < 0.2, "declination: {dec}");
    }

    #[test]
    fn equation_of_time_bounded() {
        for day in 0..365 {
            let d = calendar_to_jd(2025, 1, 1.5) - J2000_JD + day as f64;
            let eot = equation_of_time_min(d);
            assert!(eot.abs() < 17.0, "day {day}: eot {eot}");
        }
    }

    #[test]
    fn noon_sun_high_at_equator() {
        let jd = solar_noon_jd(calendar_to_jd(2025, 3, 20.0), 0.0);
        let pos = sun_position(jd, 0.0, 0.0);
        assert!(pos.altitude_deg > 85.0, "altitude: {}", pos.altitude_deg);
    }

    #[test]
    fn greenwich_noon_near_12ut() {
        let noon = solar_noon_jd(calendar_to_jd(2025, 4, 15.0), 0.0);
        let hours = (noon - calendar_to_jd(2025, 4, 15.0)) * 24.0;
        assert!((hours - 12.0).abs() < 0.3, "transit hour: {hours}");
    }

    #[test]
    fn azimuth_range() {
        for h in 0..24 {
            let jd = calendar_to_jd(2025, 5, 1.0) + h as f64 / 24.0;
            let pos = sun_position(jd, 48.8, 2.3);
            assert!(
                (0.0..360.0).contains(&pos.azimuth_deg),
                "azimuth: {}",
                pos.azimuth_deg
            );
        }
    }
}
