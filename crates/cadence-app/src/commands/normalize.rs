use cadence_rfc::rfc::rrule::build::serialize;
use cadence_rfc::rfc::rrule::parse::parse_rules;

use crate::cli::RuleArgs;
use crate::error::AppResult;

/// ## Summary
/// Merges the rule strings into one table and prints it in canonical order.
///
/// ## Errors
/// Returns `RfcError::MalformedRule` if a segment lacks `=` or a key.
pub fn run(args: &RuleArgs) -> AppResult<String> {
    let table = parse_rules(&args.rules)?;
    Ok(serialize(&table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn normalize(rules: &[&str]) -> AppResult<String> {
        run(&RuleArgs {
            rules: rules.iter().map(ToString::to_string).collect(),
        })
    }

    #[test]
    fn leading_keys_come_first() {
        assert_eq!(
            normalize(&["BYDAY=MO,WE;INTERVAL=2;FREQ=WEEKLY"]).unwrap(),
            "FREQ=WEEKLY;INTERVAL=2;BYDAY=MO,WE"
        );
    }

    #[test]
    fn rule_strings_merge() {
        assert_eq!(
            normalize(&["FREQ=MONTHLY;", "COUNT=3", "BYMONTHDAY=1,15"]).unwrap(),
            "FREQ=MONTHLY;COUNT=3;BYMONTHDAY=1,15"
        );
    }

    #[test]
    fn malformed_segment_fails() {
        assert!(matches!(
            normalize(&["FREQ=DAILY;BYDAY"]).unwrap_err(),
            AppError::RfcError(_)
        ));
    }
}
