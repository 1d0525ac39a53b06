//! Daily prayer-time computation.
//!
//! Follows the classical solar-position method ("Prayer Times
//! Calculation", Zarrabi-Zadeh): angle-based times from the hour angle
//! at the noon declination, horizon times from the refined rise/set
//! finder, Dhuhr from the apparent transit.

use hilal_time::{CivilDate, J2000_JD, format_hhmm};
use hilal_ephem::{solar_noon_jd, sun_declination_rad, sunrise_jd, sunset_jd};

use crate::convention::{AsrMethod, ConventionId, IshaRule, convention};
use crate::error::PrayerError;

/// One minute in days.
const MINUTE_DAYS: f64 = 1.0 / 1440.0;

/// Noon shadow ratio used when the sun does not rise above the horizon
/// at transit (polar winter); keeps the Asr target angle finite.
const POLAR_NOON_SHADOW: f64 = 100.0;

/// Prayer times as UT Julian Days.
///
/// `None` means the sun never reaches the defining altitude that day.
/// Dhuhr is the only time that always exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrayerTimesJd {
    /// Dawn prayer (sun at the convention's Fajr depression).
    pub fajr: Option<f64>,
    /// Sunrise (end of Fajr window).
    pub sunrise: Option<f64>,
    /// Noon prayer (transit plus one minute).
    pub dhuhr: Option<f64>,
    /// Afternoon prayer (shadow-length altitude).
    pub asr: Option<f64>,
    /// Sunset prayer.
    pub maghrib: Option<f64>,
    /// Night prayer (depression angle or offset after Maghrib).
    pub isha: Option<f64>,
    /// Islamic midnight (midpoint of Maghrib and next Fajr).
    pub midnight: Option<f64>,
}

/// Prayer times rendered as `HH:MM` wall-clock strings.
#[derive(Debug, Clone, PartialEq)]
pub struct PrayerTimes {
    pub fajr: Option<String>,
    pub sunrise: Option<String>,
    pub dhuhr: Option<String>,
    pub asr: Option<String>,
    pub maghrib: Option<String>,
    pub isha: Option<String>,
    pub midnight: Option<String>,
}

/// UT instant the sun reaches `alt_deg` on `date`, analytically.
///
/// Uses the noon declination and the hour-angle formula; `None` when
/// the altitude is never reached. `rising` selects the morning branch.
fn sun_angle_time(
    date: CivilDate,
    lat_deg: f64,
    lon_deg: f64,
    alt_deg: f64,
    rising: bool,
) -> Option<f64> {
    let noon = solar_noon_jd(date.jd0(), lon_deg);
    let decl = sun_declination_rad(noon - J2000_JD);
    let phi = lat_deg.to_radians();
    let alt = alt_deg.to_radians();

    let cos_ha = (alt.sin() - phi.sin() * decl.sin()) / (phi.cos() * decl.cos());
    if !(-1.0..=1.0).contains(&cos_ha) {
        return None;
    }
    let ha_days = cos_ha.acos() / (2.0 * std::f64::consts::PI);
    Some(if rising { noon - ha_days } else { noon + ha_days })
}

/// Asr time for the shadow-length `factor` (1 Shafi'i, 2 Hanafi).
///
/// Target altitude satisfies shadow = factor * height + noon shadow,
/// i.e. `alt = atan(1 / (factor + cot(noon_alt)))`.
fn asr_time(date: CivilDate, lat_deg: f64, lon_deg: f64, factor: f64) -> Option<f64> {
    let noon = solar_noon_jd(date.jd0(), lon_deg);
    let decl = sun_declination_rad(noon - J2000_JD);
    let phi = lat_deg.to_radians();

    let noon_alt = (phi.sin() * decl.sin() + phi.cos() * decl.cos()).asin();
    let noon_shadow = if noon_alt > 0.0 {
        1.0 / noon_alt.tan()
    } else {
        POLAR_NOON_SHADOW
    };
    let asr_alt_deg = (1.0 / (factor + noon_shadow)).atan().to_degrees();
    sun_angle_time(date, lat_deg, lon_deg, asr_alt_deg, false)
}

/// Compute the day's prayer times as UT Julian Days.
pub fn prayer_times_jd(
    date: CivilDate,
    lat_deg: f64,
    lon_deg: f64,
    convention_id: ConventionId,
    asr_method: AsrMethod,
) -> Result<PrayerTimesJd, PrayerError> {
    if !(-90.0..=90.0).contains(&lat_deg) {
        return Err(PrayerError::InvalidLocation("latitude outside [-90, 90]"));
    }
    if !(-180.0..=180.0).contains(&lon_deg) {
        return Err(PrayerError::InvalidLocation("longitude outside [-180, 180]"));
    }

    let conv = convention(convention_id);

    let fajr = sun_angle_time(date, lat_deg, lon_deg, -conv.fajr_angle_deg, true);
    let sunrise = sunrise_jd(date, lat_deg, lon_deg);
    let dhuhr = Some(solar_noon_jd(date.jd0(), lon_deg) + MINUTE_DAYS);
    let asr = asr_time(date, lat_deg, lon_deg, asr_method.factor());
    let maghrib = sunset_jd(date, lat_deg, lon_deg);

    let isha = match conv.isha {
        IshaRule::Depression(angle) => sun_angle_time(date, lat_deg, lon_deg, -angle, false),
        IshaRule::AfterMaghrib(minutes) => maghrib.map(|jd| jd + minutes as f64 * MINUTE_DAYS),
    };

    let midnight = match (maghrib, fajr) {
        (Some(maghrib_jd), Some(_)) => {
            let next_fajr =
                sun_angle_time(date.add_days(1), lat_deg, lon_deg, -conv.fajr_angle_deg, true);
            next_fajr.map(|jd| (maghrib_jd + jd) / 2.0)
        }
        _ => None,
    };

    Ok(PrayerTimesJd {
        fajr,
        sunrise,
        dhuhr,
        asr,
        maghrib,
        isha,
        midnight,
    })
}

/// Compute the day's prayer times rendered in an IANA timezone.
pub fn prayer_times(
    date: CivilDate,
    lat_deg: f64,
    lon_deg: f64,
    tz: &str,
    convention_id: ConventionId,
    asr_method: AsrMethod,
) -> Result<PrayerTimes, PrayerError> {
    let jd = prayer_times_jd(date, lat_deg, lon_deg, convention_id, asr_method)?;
    let render = |t: Option<f64>| -> Result<Option<String>, PrayerError> {
        t.map(|jd| format_hhmm(jd, tz)).transpose().map_err(Into::into)
    };
    Ok(PrayerTimes {
        fajr: render(jd.fajr)?,
        sunrise: render(jd.sunrise)?,
        dhuhr: render(jd.dhuhr)?,
        asr: render(jd.asr)?,
        maghrib: render(jd.maghrib)?,
        isha: render(jd.isha)?,
        midnight: render(jd.midnight)?,
    })
}
