use cadence_rfc::rfc::rrule::core::{Frequency, RuleTable};
use cadence_rfc::rfc::temporal::{Expr, Primitive};
use chrono::NaiveDate;

use super::frequency::frequency_expression;
use crate::error::ServiceResult;

/// ## Summary
/// Builds the composite expression for a rule table anchored at `start`.
///
/// The result is the intersection of:
/// 1. a lower bound strictly after the day before `start`, so `start` itself
///    can match;
/// 2. every INTERVAL weeks, months or years from `start` (not for DAILY,
///    whose handler already steps by INTERVAL days);
/// 3. the FREQ handler's sub-expression;
/// 4. an inclusive upper bound on the UNTIL date.
///
/// Without FREQ only the bounds remain.
///
/// ## Errors
/// Returns an error if FREQ is unsupported, a BYDAY token names an unknown
/// weekday, BYMONTH/BYMONTHDAY are out of range, or UNTIL is not a date.
pub fn build_expression(table: &RuleTable, start: NaiveDate) -> ServiceResult<Expr> {
    let mut expression = start_bound(start);

    if let Some(frequency) = table.frequency()? {
        if frequency != Frequency::Daily {
            let every = Primitive::EveryNUnits {
                anchor: start,
                n: table.interval(),
                unit: frequency.unit(),
            };
            tracing::trace!(expression = %every, "Built interval expression");
            expression = expression.and(every);
        }

        let handler = frequency_expression(frequency, table, start)?;
        tracing::trace!(frequency = %frequency, expression = %handler, "Built frequency expression");
        expression = expression.and(handler);
    }

    if let Some(until) = table.until()? {
        expression = expression.and(Primitive::Before {
            date: until.civil_date(),
            inclusive: true,
        });
    }

    tracing::trace!(expression = %expression, "Built recurrence expression");
    Ok(expression)
}

fn start_bound(start: NaiveDate) -> Expr {
    match start.pred_opt() {
        Some(day_before) => Primitive::After {
            date: day_before,
            inclusive: false,
        },
        None => Primitive::After {
            date: start,
            inclusive: true,
        },
    }
    .into()
}
