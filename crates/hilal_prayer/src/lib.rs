//! Prayer times and Qibla built on the solar ephemeris.
//!
//! This crate provides:
//! - The seven angle/offset prayer conventions
//! - Daily prayer times (Fajr through Islamic midnight)
//! - Shafi'i and Hanafi Asr shadow methods
//! - Qibla bearing and distance

pub mod convention;
pub mod error;
pub mod qibla;
pub mod times;

pub use convention::{
    AsrMethod, CONVENTIONS, ConventionId, IshaRule, PrayerConvention, convention,
};
pub use error::PrayerError;
pub use qibla::{KAABA_LAT, KAABA_LON, QiblaInfo, qibla, qibla_bearing_deg, qibla_distance_km};
pub use times::{PrayerTimes, PrayerTimesJd, prayer_times, prayer_times_jd};
