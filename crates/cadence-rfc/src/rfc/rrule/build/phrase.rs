use chrono::TimeZone;

use crate::rfc::rrule::core::{RuleKey, RuleTable};
use crate::rfc::rrule::parse::parse_byday;

/// ## Summary
/// Describes a rule in English, e.g. `Every 2 weeks on Monday and Friday
/// until March 01, 2024`.
///
/// The phrase is built from up to three clauses, each present only when its
/// keys are: frequency with interval (needs both FREQ and INTERVAL), BYDAY,
/// and UNTIL. UNTIL is rendered as a calendar date in `zone`. A table with
/// none of these describes as `Never`.
///
/// Values that cannot be interpreted (an unsupported FREQ, an unknown BYDAY
/// code, an unparseable UNTIL) are logged and rendered verbatim or skipped.
#[must_use]
pub fn human_phrase<Z: TimeZone>(table: &RuleTable, zone: &Z) -> String {
    let clauses: Vec<String> = [
        frequency_clause(table),
        by_day_clause(table),
        until_clause(table, zone),
    ]
    .into_iter()
    .flatten()
    .collect();

    if clauses.is_empty() {
        "Never".to_string()
    } else {
        format!("Every {}", clauses.join(" "))
    }
}

fn frequency_clause(table: &RuleTable) -> Option<String> {
    if !table.contains(&RuleKey::Interval) {
        return None;
    }

    let frequency = match table.frequency() {
        Ok(frequency) => frequency?,
        Err(err) => {
            tracing::warn!(error = %err, "Skipping frequency clause");
            return None;
        }
    };

    Some(pluralize(table.interval(), frequency.unit().name()))
}

fn by_day_clause(table: &RuleTable) -> Option<String> {
    let days: Vec<String> = table
        .get(&RuleKey::ByDay)?
        .items()
        .into_iter()
        .map(|token| match parse_byday(token) {
            Ok(spec) => spec.describe(),
            Err(err) => {
                tracing::warn!(error = %err, "Rendering BYDAY token verbatim");
                token.to_string()
            }
        })
        .collect();

    let listed = match days.as_slice() {
        [] => return None,
        [only] => only.clone(),
        [first, second] => format!("{first} and {second}"),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    };

    Some(format!("on {listed}"))
}

fn until_clause<Z: TimeZone>(table: &RuleTable, zone: &Z) -> Option<String> {
    match table.until() {
        Ok(until) => {
            let date = until?.date_in(zone);
            Some(format!("until {}", date.format("%B %d, %Y")))
        }
        Err(err) => {
            tracing::warn!(error = %err, "Skipping until clause");
            None
        }
    }
}

fn pluralize(count: u32, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{count} {word}s")
    }
}
