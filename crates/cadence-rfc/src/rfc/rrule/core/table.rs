use crate::error::{RfcError, RfcResult};
use crate::rfc::rrule::build::serialize;
use crate::rfc::rrule::parse::{parse_byday, parse_date_value};

use super::{ByDaySpec, DateValue, Frequency, RuleKey, RuleValue};

/// Parsed recurrence rule parts.
///
/// Holds at most one value per key, in first-seen order. Blank values are
/// kept for serialization but read as absent by [`RuleTable::get`] and the
/// typed accessors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleTable {
    entries: Vec<(RuleKey, RuleValue)>,
}

impl RuleTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ## Summary
    /// Builds a table from key/value pairs. A repeated key replaces the earlier
    /// value but keeps the earlier position.
    #[must_use]
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (RuleKey, RuleValue)>,
    {
        let mut table = Self::new();
        for (key, value) in entries {
            if let Some(slot) = table.entries.iter_mut().find(|(k, _)| *k == key) {
                slot.1 = value;
            } else {
                table.entries.push((key, value));
            }
        }
        table
    }

    /// Non-blank value stored for `key`.
    #[must_use]
    pub fn get(&self, key: &RuleKey) -> Option<&RuleValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
            .filter(|value| !value.is_blank())
    }

    #[must_use]
    pub fn contains(&self, key: &RuleKey) -> bool {
        self.get(key).is_some()
    }

    /// Raw entries in table order, blank values included.
    pub fn iter(&self) -> impl Iterator<Item = (&RuleKey, &RuleValue)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// ## Summary
    /// Interprets FREQ.
    ///
    /// ## Errors
    /// Returns `RfcError::UnsupportedFrequency` for values other than DAILY,
    /// WEEKLY, MONTHLY and YEARLY.
    pub fn frequency(&self) -> RfcResult<Option<Frequency>> {
        self.get(&RuleKey::Freq)
            .map(|value| {
                let text = value.as_text();
                Frequency::parse(&text).ok_or_else(|| RfcError::UnsupportedFrequency(text.into_owned()))
            })
            .transpose()
    }

    /// ## Summary
    /// Interprets INTERVAL. Absent, zero, negative and non-numeric values all
    /// resolve to 1.
    #[must_use]
    pub fn interval(&self) -> u32 {
        let Some(value) = self.get(&RuleKey::Interval) else {
            return 1;
        };
        match value.as_text().trim().parse::<i64>() {
            Ok(n) if n >= 1 => u32::try_from(n).unwrap_or(u32::MAX),
            _ => {
                tracing::warn!(interval = %value, "INTERVAL is not a positive integer, using 1");
                1
            }
        }
    }

    /// ## Summary
    /// Interprets COUNT. `0` means unbounded; absent, negative and non-numeric
    /// values resolve to 0.
    #[must_use]
    pub fn count(&self) -> u32 {
        let Some(value) = self.get(&RuleKey::Count) else {
            return 0;
        };
        match value.as_text().trim().parse::<i64>() {
            Ok(n) if n >= 0 => u32::try_from(n).unwrap_or(u32::MAX),
            _ => {
                tracing::warn!(count = %value, "COUNT is not a non-negative integer, treating as unbounded");
                0
            }
        }
    }

    /// ## Summary
    /// Decodes every BYDAY token.
    ///
    /// ## Errors
    /// Returns `RfcError::UnknownWeekday` for the first token that does not
    /// decode.
    pub fn by_day(&self) -> RfcResult<Option<Vec<ByDaySpec>>> {
        self.get(&RuleKey::ByDay)
            .map(|value| value.items().into_iter().map(parse_byday).collect())
            .transpose()
    }

    /// ## Summary
    /// Interprets BYMONTH as month numbers.
    ///
    /// ## Errors
    /// Returns `RfcError::MalformedRule` for entries outside 1 to 12.
    pub fn by_month(&self) -> RfcResult<Option<Vec<u32>>> {
        self.get(&RuleKey::ByMonth)
            .map(|value| {
                value
                    .items()
                    .into_iter()
                    .map(|item| {
                        item.parse::<u32>()
                            .ok()
                            .filter(|month| (1..=12).contains(month))
                            .ok_or_else(|| {
                                RfcError::malformed(
                                    serialize(self),
                                    format!("BYMONTH entry '{item}' is not a month"),
                                )
                            })
                    })
                    .collect()
            })
            .transpose()
    }

    /// ## Summary
    /// Interprets BYMONTHDAY as days of the month; negative days count back
    /// from the month end.
    ///
    /// ## Errors
    /// Returns `RfcError::MalformedRule` for zero, non-numeric entries, or
    /// entries outside -31 to 31.
    pub fn by_month_day(&self) -> RfcResult<Option<Vec<i32>>> {
        self.get(&RuleKey::ByMonthDay)
            .map(|value| {
                value
                    .items()
                    .into_iter()
                    .map(|item| {
                        item.parse::<i32>()
                            .ok()
                            .filter(|day| *day != 0 && (-31..=31).contains(day))
                            .ok_or_else(|| {
                                RfcError::malformed(
                                    serialize(self),
                                    format!("BYMONTHDAY entry '{item}' is not a day of the month"),
                                )
                            })
                    })
                    .collect()
            })
            .transpose()
    }

    /// ## Summary
    /// Parses UNTIL.
    ///
    /// ## Errors
    /// Returns `RfcError::InvalidDate` if the value is not a date or date-time.
    pub fn until(&self) -> RfcResult<Option<DateValue>> {
        self.get(&RuleKey::Until)
            .map(|value| parse_date_value(&value.as_text()))
            .transpose()
    }
}

impl std::fmt::Display for RuleTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&serialize(self))
    }
}
