use crate::error::{RfcError, RfcResult};
use crate::rfc::rrule::core::{RuleKey, RuleTable, RuleValue};

/// ## Summary
/// Parses recurrence rule strings into a single [`RuleTable`].
///
/// Each string is split on `;` into `KEY=VALUE` pairs and each pair on its
/// first `=`. Keys are case-insensitive. A value containing `,` becomes a
/// list. When several strings set the same key, the last one wins. Empty
/// segments (a trailing `;`, an empty string) are skipped.
///
/// ## Errors
/// Returns `RfcError::MalformedRule` if a pair has no `=` or an empty key. No
/// partial table is produced.
pub fn parse_rules<I, S>(rules: I) -> RfcResult<RuleTable>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut entries = Vec::new();

    for rule in rules {
        let rule = rule.as_ref();
        for pair in rule.split(';') {
            if pair.trim().is_empty() {
                continue;
            }

            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| RfcError::malformed(rule, format!("pair '{pair}' has no '='")))?;

            if key.trim().is_empty() {
                return Err(RfcError::malformed(rule, format!("pair '{pair}' has an empty key")));
            }

            let key = RuleKey::parse(key);
            let value = RuleValue::parse(value);
            tracing::trace!(key = %key, value = %value, "Parsed rule pair");
            entries.push((key, value));
        }
    }

    Ok(RuleTable::from_entries(entries))
}
