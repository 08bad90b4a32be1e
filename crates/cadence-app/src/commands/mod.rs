//! Command implementations. Each returns the text to print on stdout.

pub mod dates;
pub mod describe;
pub mod normalize;

use cadence_core::config::Settings;
use cadence_rfc::rfc::rrule::parse::parse_date_value;
use cadence_service::recurrence::{Event, EventRecurrence};
use chrono::NaiveDate;

use crate::cli::Command;
use crate::error::{AppError, AppResult};

/// ## Summary
/// Runs `command` against the loaded configuration.
///
/// ## Errors
/// Returns an error if an argument does not parse or the rules cannot be
/// interpreted.
pub fn run(command: &Command, settings: &Settings) -> AppResult<String> {
    match command {
        Command::Dates(args) => dates::run(args, settings),
        Command::Describe(args) => describe::run(args, settings),
        Command::Normalize(args) => normalize::run(args),
    }
}

/// ## Summary
/// Builds the recurrence for an event given on the command line.
///
/// ## Errors
/// Returns `AppError::InvalidArgument` if `start` is not a date or date-time,
/// and the construction error if the rules or exceptions are invalid.
pub(crate) fn event_recurrence(
    rules: &[String],
    start: &str,
    exdates: &[String],
) -> AppResult<EventRecurrence> {
    let start = parse_date_value(start)
        .map_err(|err| AppError::InvalidArgument(format!("--start: {err}")))?
        .civil_datetime();

    let event = Event {
        start,
        recurrence_rules: rules.to_vec(),
        exception_dates: exdates.to_vec(),
    };

    Ok(EventRecurrence::new(event)?)
}

/// ## Summary
/// Parses a range bound as written, ignoring any time of day.
///
/// ## Errors
/// Returns `AppError::InvalidArgument` naming `flag` if the value is not a date.
pub(crate) fn parse_day(flag: &str, value: &str) -> AppResult<NaiveDate> {
    parse_date_value(value)
        .map(|parsed| parsed.civil_date())
        .map_err(|err| AppError::InvalidArgument(format!("{flag}: {err}")))
}
