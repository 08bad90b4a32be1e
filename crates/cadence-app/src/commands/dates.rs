use cadence_core::config::Settings;
use cadence_rfc::rfc::temporal::DateRange;
use chrono::Days;

use super::{event_recurrence, parse_day};
use crate::cli::DatesArgs;
use crate::error::{AppError, AppResult};

/// ## Summary
/// Lists occurrence dates, one ISO date per line or as a JSON array.
///
/// The range runs from `--from` (default: the event's start date) to `--to`
/// (default: `query.window_days` days including the first).
///
/// ## Errors
/// Returns an error if an argument does not parse, the rules are invalid,
/// or the default range end overflows the calendar.
#[tracing::instrument(skip_all, fields(rules = args.rules.rules.len(), start = %args.start))]
pub fn run(args: &DatesArgs, settings: &Settings) -> AppResult<String> {
    let recurrence = event_recurrence(&args.rules.rules, &args.start, &args.exdates)?;

    let from = match &args.from {
        Some(value) => parse_day("--from", value)?,
        None => recurrence.event().start_date(),
    };
    let to = match &args.to {
        Some(value) => parse_day("--to", value)?,
        None => from
            .checked_add_days(Days::new(u64::from(settings.query.window_days() - 1)))
            .ok_or_else(|| AppError::InvalidArgument(format!("range after {from} is out of bounds")))?,
    };

    let range = DateRange::new(from, to);
    let dates = recurrence.dates(&range);
    tracing::debug!(range = %range, occurrences = dates.len(), "Listed occurrences");

    if args.json {
        return Ok(serde_json::to_string(&dates)?);
    }

    Ok(dates
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}
