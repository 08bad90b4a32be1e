use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::error::{RfcError, RfcResult};
use crate::rfc::rrule::core::DateValue;

/// ## Summary
/// Parses a date or date-time in either iCalendar basic form
/// (`20240131`, `20240131T090000`, `20240131T090000Z`) or ISO 8601 extended
/// form (`2024-01-31`, `2024-01-31T09:00:00`, `2024-01-31T09:00:00+02:00`).
///
/// ## Errors
/// Returns `RfcError::InvalidDate` if no form matches.
pub fn parse_date_value(s: &str) -> RfcResult<DateValue> {
    let s = s.trim();
    let invalid = || RfcError::InvalidDate(s.to_string());

    if s.len() >= 8 && s.bytes().take(8).all(|b| b.is_ascii_digit()) {
        return parse_basic(s).ok_or_else(invalid);
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(DateValue::Date(date));
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(s) {
        return Ok(DateValue::Instant(datetime));
    }

    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
        .map(DateValue::Floating)
        .ok_or_else(invalid)
}

/// Basic form: `YYYYMMDD[THHMMSS[Z]]`.
fn parse_basic(s: &str) -> Option<DateValue> {
    let date = NaiveDate::from_ymd_opt(
        s.get(0..4)?.parse().ok()?,
        s.get(4..6)?.parse().ok()?,
        s.get(6..8)?.parse().ok()?,
    )?;

    let rest = &s[8..];
    if rest.is_empty() {
        return Some(DateValue::Date(date));
    }

    let time = rest.strip_prefix('T')?;
    let (time, is_utc) = match time.strip_suffix('Z') {
        Some(stripped) => (stripped, true),
        None => (time, false),
    };
    if time.len() != 6 || !time.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let time = NaiveTime::from_hms_opt(
        time[0..2].parse().ok()?,
        time[2..4].parse().ok()?,
        time[4..6].parse().ok()?,
    )?;
    let datetime = date.and_time(time);

    if is_utc {
        let instant = Utc.from_utc_datetime(&datetime).fixed_offset();
        Some(DateValue::Instant(instant))
    } else {
        Some(DateValue::Floating(datetime))
    }
}
