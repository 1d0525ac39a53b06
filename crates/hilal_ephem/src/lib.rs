//! Solar and lunar ephemeris for civil-timekeeping accuracy.
//!
//! This crate provides:
//! - Meeus solar position, declination, equation of time, solar noon
//! - Truncated ELP 2000-82 lunar position and distance
//! - Sun altitude-crossing events (sunrise, sunset, twilight angles)
//! - Moonrise/moonset with horizontal parallax
//!
//! Target accuracy is about one minute of event time, which is what
//! prayer timetables and crescent-visibility geometry need. All inputs
//! and outputs are UT Julian Days; TT conversion stays in `hilal_time`.

pub mod events;
pub mod lunar;
pub mod solar;

pub use events::{
    MoonEvents, SUN_HORIZON_DEG, moon_events, sun_event, sunrise_jd, sunset_jd,
};
pub use lunar::{EARTH_RADIUS_KM, LunarPosition, MOON_RADIUS_KM, moon_position};
pub use solar::{
    SolarPosition, equation_of_time_min, solar_noon_jd, sun_declination_rad, sun_position,
};
