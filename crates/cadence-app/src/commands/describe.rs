use std::str::FromStr;

use cadence_core::config::Settings;
use chrono_tz::Tz;

use super::event_recurrence;
use crate::cli::DescribeArgs;
use crate::error::{AppError, AppResult};

/// ## Summary
/// Describes the rules in English, rendering UNTIL in `--tz` or the
/// configured display zone.
///
/// ## Errors
/// Returns an error if the zone is unknown, the start does not parse, or the
/// rules are invalid.
pub fn run(args: &DescribeArgs, settings: &Settings) -> AppResult<String> {
    let zone = match &args.tz {
        Some(name) => Tz::from_str(name.trim())
            .map_err(|err| AppError::InvalidArgument(format!("--tz '{name}': {err}")))?,
        None => settings.timezone()?,
    };

    let recurrence = event_recurrence(&args.rules.rules, &args.start, &[])?;
    tracing::debug!(zone = %zone, rules = %recurrence.rules(), "Describing rules");

    Ok(recurrence.human_phrase(&zone))
}
