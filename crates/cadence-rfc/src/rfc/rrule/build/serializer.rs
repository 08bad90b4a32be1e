use crate::rfc::rrule::core::{RuleKey, RuleTable};

/// Keys always rendered first, in this order, when present.
static LEADING_KEYS: [RuleKey; 3] = [RuleKey::Freq, RuleKey::Interval, RuleKey::ByDay];

/// ## Summary
/// Serializes a [`RuleTable`] to canonical rule text: `FREQ`, `INTERVAL` and
/// `BYDAY` first (each only when present), then every other key in table
/// order, joined with `;`. Keys are upper-case; list values are joined with
/// `,`.
#[must_use]
pub fn serialize(table: &RuleTable) -> String {
    let leading = LEADING_KEYS
        .iter()
        .filter_map(|wanted| table.iter().find(|(key, _)| *key == wanted));
    let rest = table.iter().filter(|(key, _)| !LEADING_KEYS.contains(*key));

    leading
        .chain(rest)
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join(";")
}
