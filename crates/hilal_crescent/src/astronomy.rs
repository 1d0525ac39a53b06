//! Crescent geometry at sunset.
//!
//! Raw positions are gathered once at sunset; everything the sighting
//! criteria consume (arc of light, arc of vision, crescent width,
//! Yallop q, age, lag) is a pure function of those raw values.
//!
//! References: Yallop 1997 ("A Method for Predicting the First
//! Sighting of the New Crescent Moon"), Odeh 2004 ("New Criterion for
//! Lunar Crescent Visibility"), Ilyas 1994.

use hilal_time::{CivilDate, tt_to_ut};
use hilal_ephem::{MOON_RADIUS_KM, moon_events, moon_position, sun_position, sunrise_jd, sunset_jd};

/// Raw parameters gathered at sunset for one evening and location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrescentParams {
    /// Sunset, UT Julian Day.
    pub sunset_jd: f64,
    /// Moon altitude at sunset, degrees (refraction-corrected).
    pub moon_alt_deg: f64,
    /// Sun altitude at sunset, degrees (about -0.833 by construction).
    pub sun_alt_deg: f64,
    /// Moon azimuth at sunset, degrees from North.
    pub moon_az_deg: f64,
    /// Sun azimuth at sunset, degrees from North.
    pub sun_az_deg: f64,
    /// Moon distance, km.
    pub moon_distance_km: f64,
    /// Moonset after sunset, UT Julian Day, if the moon sets at all.
    pub moonset_jd: Option<f64>,
    /// New-moon conjunction, TT Julian Day.
    pub conjunction_jd_tt: f64,
    /// Sunrise of the same day, UT Julian Day.
    pub sunrise_jd: Option<f64>,
}

/// Derived crescent visibility parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrescentVisibility {
    /// Arc of Light: sun-moon elongation, degrees.
    pub arcl_deg: f64,
    /// Arc of Vision: moon altitude minus sun altitude, degrees.
    pub arcv_deg: f64,
    /// Azimuth difference between moon and sun, degrees in `[0, 180]`.
    pub daz_deg: f64,
    /// Crescent width, arcminutes.
    pub width_arcmin: f64,
    /// Moon semidiameter, arcminutes.
    pub sd_arcmin: f64,
    /// Moon age since conjunction at sunset, hours.
    pub moon_age_hours: f64,
    /// Moonset minus sunset, minutes (0 when the moon sets first).
    pub lag_minutes: f64,
    /// Yallop q-value.
    pub q_yallop: f64,
    /// Best naked-eye observation time (sunset + 4/9 lag), UT Julian Day.
    pub best_time_jd: f64,
    /// Illuminated fraction of the disc, percent.
    pub illumination_pct: f64,
    /// Moon altitude at the best time, degrees (sunset value is used as
    /// the approximation; the geometry barely changes over the lag).
    pub moon_alt_best_deg: f64,
}

/// Params plus derived visibility for one evening.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crescent {
    pub params: CrescentParams,
    pub visibility: CrescentVisibility,
}

/// Topocentric sun-moon elongation from horizontal coordinates, degrees.
pub fn elongation_deg(
    moon_alt_deg: f64,
    sun_alt_deg: f64,
    moon_az_deg: f64,
    sun_az_deg: f64,
) -> f64 {
    let m_alt = moon_alt_deg.to_radians();
    let s_alt = sun_alt_deg.to_radians();
    let d_az = (moon_az_deg - sun_az_deg).to_radians();
    let cos_arcl = m_alt.sin() * s_alt.sin() + m_alt.cos() * s_alt.cos() * d_az.cos();
    cos_arcl.clamp(-1.0, 1.0).acos().to_degrees()
}

/// Moon semidiameter from its distance, arcminutes.
pub fn moon_semidiameter_arcmin(dist_km: f64) -> f64 {
    (MOON_RADIUS_KM / dist_km).clamp(-1.0, 1.0).asin().to_degrees() * 60.0
}

/// Crescent width `W = SD * (1 - cos ARCL)`, arcminutes.
pub fn crescent_width_arcmin(sd_arcmin: f64, arcl_deg: f64) -> f64 {
    sd_arcmin * (1.0 - arcl_deg.to_radians().cos())
}

/// Yallop q-value from the arc of vision and crescent width.
///
/// `q = (ARCV - (11.8371 - 6.3226 W + 0.7319 W^2 - 0.1018 W^3)) / 10`.
pub fn yallop_q(arcv_deg: f64, w_arcmin: f64) -> f64 {
    let w = w_arcmin;
    let limit = 11.8371 - 6.3226 * w + 0.7319 * w * w - 0.1018 * w * w * w;
    (arcv_deg - limit) / 10.0
}

/// Moon age in hours since the conjunction, at a UT instant.
pub fn moon_age_hours(jd_ut: f64, conjunction_jd_tt: f64) -> f64 {
    (jd_ut - tt_to_ut(conjunction_jd_tt)) * 24.0
}

/// Yallop's optimum naked-eye observation time: sunset + 4/9 of the lag.
pub fn best_observation_jd(sunset_jd: f64, moonset_jd: Option<f64>) -> f64 {
    match moonset_jd {
        Some(moonset) if moonset > sunset_jd => sunset_jd + (4.0 / 9.0) * (moonset - sunset_jd),
        _ => sunset_jd,
    }
}

/// Illuminated fraction of the disc from the elongation, in `[0, 1]`.
pub fn illuminated_fraction(arcl_deg: f64) -> f64 {
    (1.0 - arcl_deg.to_radians().cos()) / 2.0
}

/// Gather the raw sunset parameters for one evening.
///
/// Returns `None` exactly when the sun does not set that day. A
/// same-day moonset before sunset falls through to the next day's
/// moonset; if the moon does not set after sunset either, `moonset_jd`
/// stays `None`.
pub fn compute_crescent_params(
    date: CivilDate,
    lat_deg: f64,
    lon_deg: f64,
    conjunction_jd_tt: f64,
) -> Option<CrescentParams> {
    let sunset = sunset_jd(date, lat_deg, lon_deg)?;
    let sunrise = sunrise_jd(date, lat_deg, lon_deg);

    let moon = moon_position(sunset, lat_deg, lon_deg);
    let sun = sun_position(sunset, lat_deg, lon_deg);

    let moonset = match moon_events(date, lat_deg, lon_deg).set {
        Some(jd) if jd > sunset => Some(jd),
        _ => moon_events(date.add_days(1), lat_deg, lon_deg)
            .set
            .filter(|&jd| jd > sunset),
    };

    Some(CrescentParams {
        sunset_jd: sunset,
        moon_alt_deg: moon.altitude_deg,
        sun_alt_deg: sun.altitude_deg,
        moon_az_deg: moon.azimuth_deg,
        sun_az_deg: sun.azimuth_deg,
        moon_distance_km: moon.distance_km,
        moonset_jd: moonset,
        conjunction_jd_tt,
        sunrise_jd: sunrise,
    })
}

/// Derive the visibility parameters from raw sunset values.
pub fn compute_visibility(params: &CrescentParams) -> CrescentVisibility {
    let arcl = elongation_deg(
        params.moon_alt_deg,
        params.sun_alt_deg,
        params.moon_az_deg,
        params.sun_az_deg,
    );
    let arcv = params.moon_alt_deg - params.sun_alt_deg;
    let mut daz = (params.moon_az_deg - params.sun_az_deg).abs();
    if daz > 180.0 {
        daz = 360.0 - daz;
    }

    let sd = moon_semidiameter_arcmin(params.moon_distance_km);
    let w = crescent_width_arcmin(sd, arcl);

    let lag_minutes = match params.moonset_jd {
        Some(moonset) if moonset > params.sunset_jd => (moonset - params.sunset_jd) * 24.0 * 60.0,
        _ => 0.0,
    };

    CrescentVisibility {
        arcl_deg: arcl,
        arcv_deg: arcv,
        daz_deg: daz,
        width_arcmin: w,
        sd_arcmin: sd,
        moon_age_hours: moon_age_hours(params.sunset_jd, params.conjunction_jd_tt),
        lag_minutes,
        q_yallop: yallop_q(arcv, w),
        best_time_jd: best_observation_jd(params.sunset_jd, params.moonset_jd),
        illumination_pct: illuminated_fraction(arcl) * 100.0,
        moon_alt_best_deg: params.moon_alt_deg,
    }
}

/// Full crescent computation: raw params plus visibility in one call.
pub fn compute_crescent(
    date: CivilDate,
    lat_deg: f64,
    lon_deg: f64,
    conjunction_jd_tt: f64,
) -> Option<Crescent> {
    let params = compute_crescent_params(date, lat_deg, lon_deg, conjunction_jd_tt)?;
    let visibility = compute_visibility(&params);
    Some(Crescent { params, visibility })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elongation_zero_when_coincident() {
        assert!(elongation_deg(10.0, 10.0, 240.0, 240.0).abs() < 1e-12);
    }

    #[test]
    fn elongation_pure_altitude_difference() {
        let e = elongation_deg(12.0, -0.8, 250.0, 250.0);
        assert!((e - 12.8).abs() < 1e-9, "elongation: {e}");
    }

    #[test]
    fn semidiameter_at_mean_distance() {
        // ~15.5' at 385000 km.
        let sd = moon_semidiameter_arcmin(385000.0);
        assert!((sd - 15.5).abs() < 0.2, "sd: {sd}");
    }

    #[test]
    fn width_zero_at_conjunction() {
        assert!(crescent_width_arcmin(15.5, 0.0).abs() < 1e-12);
    }

    #[test]
    fn yallop_limit_at_zero_width() {
        // W=0: limit is 11.8371, so ARCV=11.8371 gives q=0.
        assert!(yallop_q(11.8371, 0.0).abs() < 1e-12);
    }

    #[test]
    fn illumination_quadrature() {
        // 90 degrees elongation: half lit.
        assert!((illuminated_fraction(90.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn best_time_within_lag() {
        let best = best_observation_jd(100.0, Some(100.0 + 45.0 / 1440.0));
        assert!((best - (100.0 + 20.0 / 1440.0)).abs() < 1e-9);
        assert_eq!(best_observation_jd(100.0, None), 100.0);
    }

    #[test]
    fn age_positive_after_conjunction() {
        let conj_tt = 2460750.0;
        let age = moon_age_hours(2460751.0, conj_tt);
        assert!(age > 23.9 && age < 24.1, "age: {age}");
    }

    #[test]
    fn params_present_at_mid_latitude() {
        let date = CivilDate::new(2025, 2, 28).unwrap();
        // Conjunction 2025-02-28 00:45 TT.
        let p = compute_crescent_params(date, 21.4225, 39.8262, 2460734.53205).unwrap();
        assert!(p.sun_alt_deg < 0.5 && p.sun_alt_deg > -2.0, "sun alt: {}", p.sun_alt_deg);
        let v = compute_visibility(&p);
        assert!(v.moon_age_hours > 0.0);
        assert!(v.arcl_deg >= 0.0 && v.sd_arcmin > 14.0 && v.sd_arcmin < 17.0);
    }
}
