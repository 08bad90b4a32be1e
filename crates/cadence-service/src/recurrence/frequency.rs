//! Frequency-specific sub-expressions.
//!
//! Each FREQ value has one handler. A handler narrows the series to the
//! days the rule's BY* parts select within its unit, falling back to the
//! matching part of the event start when the rule leaves it open.

use cadence_rfc::error::RfcResult;
use cadence_rfc::rfc::rrule::core::{ByDaySpec, Frequency, RuleTable};
use cadence_rfc::rfc::temporal::{Expr, Primitive};
use chrono::{Datelike, NaiveDate};

/// ## Summary
/// Builds the sub-expression for `frequency`.
///
/// ## Errors
/// Returns an error if BYDAY, BYMONTH or BYMONTHDAY cannot be interpreted.
pub(super) fn frequency_expression(
    frequency: Frequency,
    table: &RuleTable,
    start: NaiveDate,
) -> RfcResult<Expr> {
    match frequency {
        Frequency::Daily => Ok(daily(table, start)),
        Frequency::Weekly => weekly(table, start),
        Frequency::Monthly => monthly(table, start),
        Frequency::Yearly => yearly(table, start),
    }
}

/// Every INTERVAL days from the start.
fn daily(table: &RuleTable, start: NaiveDate) -> Expr {
    Primitive::DayInterval {
        anchor: start,
        n: table.interval(),
    }
    .into()
}

/// BYDAY weekdays, or the start's weekday.
fn weekly(table: &RuleTable, start: NaiveDate) -> RfcResult<Expr> {
    let default = Primitive::WeekdayOfWeek(start.weekday());
    Ok(match table.by_day()? {
        Some(days) => union(days.into_iter().map(by_day_primitive), default),
        None => default.into(),
    })
}

/// BYDAY weekdays, else BYMONTHDAY days, else the start's day of month.
fn monthly(table: &RuleTable, start: NaiveDate) -> RfcResult<Expr> {
    let default = start_day_of_month(start);
    if let Some(days) = table.by_day()? {
        return Ok(union(days.into_iter().map(by_day_primitive), default));
    }
    Ok(match table.by_month_day()? {
        Some(days) => union(days.into_iter().map(Primitive::day_of_month), default),
        None => default.into(),
    })
}

/// BYMONTH months (or the start's month), intersected with BYDAY weekdays
/// (or the start's day of month).
fn yearly(table: &RuleTable, start: NaiveDate) -> RfcResult<Expr> {
    let default_month = Primitive::MonthEquals(start.month());
    let months = match table.by_month()? {
        Some(months) => union(months.into_iter().map(Primitive::MonthEquals), default_month),
        None => default_month.into(),
    };

    let default_day = start_day_of_month(start);
    let days = match table.by_day()? {
        Some(days) => union(days.into_iter().map(by_day_primitive), default_day),
        None => default_day.into(),
    };

    Ok(months.and(days))
}

fn by_day_primitive(spec: ByDaySpec) -> Primitive {
    match spec {
        ByDaySpec::WeekdayOnly(weekday) => Primitive::WeekdayOfWeek(weekday),
        ByDaySpec::OrdinalWeekdayOfMonth { ordinal, weekday } => {
            Primitive::OrdinalWeekdayOfMonth { ordinal, weekday }
        }
    }
}

fn start_day_of_month(start: NaiveDate) -> Primitive {
    // Day of month is at most 31.
    Primitive::day_of_month(i32::try_from(start.day()).unwrap_or(31))
}

/// Union of `primitives`, or `default` when there are none.
fn union(primitives: impl IntoIterator<Item = Primitive>, default: Primitive) -> Expr {
    Expr::any(primitives).unwrap_or_else(|| default.into())
}
