use std::collections::BTreeSet;

use cadence_rfc::rfc::temporal::{DateRange, Expr};
use chrono::NaiveDate;

/// ## Summary
/// Enumerates occurrence dates of `expression` within `range`.
///
/// With `count == 0` the expression is evaluated over `range` alone. With
/// `count > 0` the series is evaluated from `start`, cut after `count`
/// occurrences, then clipped to `range`, so that occurrences before `range`
/// still use up the count.
///
/// `start` is always part of the result when it lies within `range`, and no
/// date in `exceptions` ever is. The result is ascending and free of
/// duplicates.
#[must_use]
pub fn occurrence_dates(
    range: &DateRange,
    expression: &Expr,
    start: NaiveDate,
    count: u32,
    exceptions: &BTreeSet<NaiveDate>,
) -> Vec<NaiveDate> {
    let mut candidates: BTreeSet<NaiveDate> = if count == 0 {
        tracing::trace!(range = %range, "Enumerating range-bounded series");
        expression.dates(range).into_iter().collect()
    } else {
        let series = DateRange::new(start, range.end);
        let limit = usize::try_from(count).unwrap_or(usize::MAX);
        tracing::trace!(range = %range, series = %series, count, "Enumerating count-bounded series");
        expression
            .dates_limited(&series, limit)
            .into_iter()
            .filter(|date| range.contains(*date))
            .collect()
    };

    if range.contains(start) {
        candidates.insert(start);
    }

    candidates
        .into_iter()
        .filter(|date| !exceptions.contains(date))
        .collect()
}
