//! Rendering UT instants as local wall-clock strings.

use jiff::Timestamp;
use jiff::tz::TimeZone;

use crate::error::TimeError;

/// Julian Day of the Unix epoch (1970-01-01 00:00 UT).
const UNIX_EPOCH_JD: f64 = 2440587.5;

/// Look up an IANA timezone by identifier.
pub fn lookup_timezone(tz: &str) -> Result<TimeZone, TimeError> {
    TimeZone::get(tz).map_err(|_| TimeError::UnknownTimezone(tz.to_string()))
}

/// Render a UT Julian Day as `HH:MM` wall-clock time in an IANA timezone.
pub fn format_hhmm(jd_ut: f64, tz: &str) -> Result<String, TimeError> {
    let tz = lookup_timezone(tz)?;
    let millis = ((jd_ut - UNIX_EPOCH_JD) * 86_400_000.0).round() as i64;
    let ts = Timestamp::from_millisecond(millis).map_err(|_| TimeError::OutOfRange(jd_ut))?;
    Ok(ts.to_zoned(tz).strftime("%H:%M").to_string())
}

/// Render a UT Julian Day as `YYYY-MM-DD HH:MM` in an IANA timezone.
pub fn format_local(jd_ut: f64, tz: &str) -> Result<String, TimeError> {
    let tz = lookup_timezone(tz)?;
    let millis = ((jd_ut - UNIX_EPOCH_JD) * 86_400_000.0).round() as i64;
    let ts = Timestamp::from_millisecond(millis).map_err(|_| TimeError::OutOfRange(jd_ut))?;
    Ok(ts.to_zoned(tz).strftime("%Y-%m-%d %H:%M").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::calendar_to_jd;

    #[test]
    fn utc_noon() {
        let jd = calendar_to_jd(2025, 3, 21.5);
        assert_eq!(format_hhmm(jd, "UTC").unwrap(), "12:00");
    }

    #[test]
    fn fixed_offset_zone() {
        // Karachi is UTC+5 year-round.
        let jd = calendar_to_jd(2025, 3, 21.5);
        assert_eq!(format_hhmm(jd, "Asia/Karachi").unwrap(), "17:00");
    }

    #[test]
    fn unknown_timezone_is_an_error() {
        let jd = calendar_to_jd(2025, 3, 21.5);
        assert!(matches!(
            format_hhmm(jd, "Mars/Olympus"),
            Err(TimeError::UnknownTimezone(_))
        ));
    }

    #[test]
    fn local_format_includes_date() {
        let jd = calendar_to_jd(2025, 3, 21.5);
        assert_eq!(format_local(jd, "UTC").unwrap(), "2025-03-21 12:00");
    }
}
