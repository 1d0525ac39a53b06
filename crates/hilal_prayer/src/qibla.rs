//! Qibla direction and distance.

/// Kaaba latitude, degrees North.
pub const KAABA_LAT: f64 = 21.4225;

/// Kaaba longitude, degrees East.
pub const KAABA_LON: f64 = 39.8262;

/// Mean Earth radius for the haversine distance, km.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Qibla summary for a location.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QiblaInfo {
    /// Initial great-circle bearing to the Kaaba, degrees from North
    /// clockwise, rounded to two decimals.
    pub direction_deg: f64,
    /// Great-circle distance to the Kaaba, km, rounded to the nearest.
    pub distance_km: f64,
}

/// Initial great-circle bearing from the observer to the Kaaba.
///
/// Degrees from North, clockwise, in `[0, 360)`.
pub fn qibla_bearing_deg(lat_deg: f64, lon_deg: f64) -> f64 {
    let lat1 = lat_deg.to_radians();
    let lat2 = KAABA_LAT.to_radians();
    let d_lon = (KAABA_LON - lon_deg).to_radians();

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();
    (y.atan2(x).to_degrees() + 360.0) % 360.0
}

/// Haversine distance from the observer to the Kaaba, km.
pub fn qibla_distance_km(lat_deg: f64, lon_deg: f64) -> f64 {
    let lat1 = lat_deg.to_radians();
    let lat2 = KAABA_LAT.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (KAABA_LON - lon_deg).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Rounded Qibla summary for display.
pub fn qibla(lat_deg: f64, lon_deg: f64) -> QiblaInfo {
    QiblaInfo {
        direction_deg: (qibla_bearing_deg(lat_deg, lon_deg) * 100.0).round() / 100.0,
        distance_km: qibla_distance_km(lat_deg, lon_deg).round(),
    }
}
