use crate::error::{RfcError, RfcResult};
use crate::rfc::rrule::core::{ByDaySpec, weekday_from_code};

/// ## Summary
/// Decodes one BYDAY token: a two-letter weekday code (`TU`), optionally
/// preceded by a signed ordinal (`2TU`, `+2TU`, `-1FR`).
///
/// ## Errors
/// Returns `RfcError::UnknownWeekday` if the code is not one of `SU` to `SA`,
/// or the ordinal prefix is not a non-zero integer.
pub fn parse_byday(token: &str) -> RfcResult<ByDaySpec> {
    let token = token.trim();
    let unknown = || RfcError::UnknownWeekday(token.to_string());

    let split = token
        .len()
        .checked_sub(2)
        .filter(|at| token.is_char_boundary(*at))
        .ok_or_else(unknown)?;
    let (ordinal, code) = token.split_at(split);

    let weekday = weekday_from_code(code).ok_or_else(unknown)?;

    if ordinal.is_empty() {
        return Ok(ByDaySpec::WeekdayOnly(weekday));
    }

    let digits = ordinal.trim_start_matches(['+', '-']);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(unknown());
    }

    let ordinal = ordinal
        .parse::<i32>()
        .ok()
        .filter(|n| *n != 0)
        .ok_or_else(unknown)?;

    Ok(ByDaySpec::OrdinalWeekdayOfMonth { ordinal, weekday })
}
