//! Display formatting: Kelvin temperatures and epoch timestamps.

use chrono::{DateTime, Local, TimeZone};

/// Rendered when an epoch value falls outside chrono's representable range.
const INVALID_TIME: &str = "--:--:--";

/// Convert a Kelvin reading to whole-degree Celsius, as a string with no
/// decimals. Rounds half away from zero (`f64::round`), which matches what
/// the screens display for every reading the API produces.
pub fn kelvin_to_celsius(kelvin: f64) -> String {
    let celsius = (kelvin - 273.15).round();
    format!("{}", celsius as i64)
}

/// Format an epoch-seconds timestamp as `HH:MM:SS` wall-clock time in the
/// device-local timezone.
pub fn format_local_time(epoch_seconds: i64) -> String {
    format_time_in(epoch_seconds, &Local)
}

/// Timezone-explicit worker behind [`format_local_time`]; tests pin a
/// `FixedOffset` here instead of asserting against the host timezone.
pub fn format_time_in<Tz: TimeZone>(epoch_seconds: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match DateTime::from_timestamp(epoch_seconds, 0) {
        Some(utc) => utc.with_timezone(tz).format("%H:%M:%S").to_string(),
        None => INVALID_TIME.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn kelvin_goldens() {
        assert_eq!(kelvin_to_celsius(273.15), "0");
        assert_eq!(kelvin_to_celsius(300.0), "27");
        assert_eq!(kelvin_to_celsius(0.0), "-273");
    }

    #[test]
    fn kelvin_rounds_half_away_from_zero() {
        assert_eq!(kelvin_to_celsius(273.15 + 26.5), "27");
        assert_eq!(kelvin_to_celsius(273.15 - 0.5), "-1");
        assert_eq!(kelvin_to_celsius(273.15 + 0.4), "0");
    }

    #[test]
    fn time_formats_in_a_pinned_offset() {
        // +07:00, the original app's home city.
        let tz = FixedOffset::east_opt(7 * 3600).unwrap();

        // 2024-09-30 10:35:14 UTC -> 17:35:14 at +07:00.
        assert_eq!(format_time_in(1727692514, &tz), "17:35:14");
        assert_eq!(format_time_in(0, &tz), "07:00:00");
    }

    #[test]
    fn out_of_range_epoch_renders_placeholder() {
        let tz = FixedOffset::east_opt(0).unwrap();
        assert_eq!(format_time_in(i64::MAX, &tz), "--:--:--");
    }
}
