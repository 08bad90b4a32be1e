use chrono::Weekday;

use super::weekday::{weekday_code, weekday_name};

/// Decoded BYDAY token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByDaySpec {
    /// Plain weekday (`MO`): that weekday of every week.
    WeekdayOnly(Weekday),
    /// Ordinal weekday (`2TU`, `-1FR`): the nth such weekday of the month,
    /// counted from the end when negative.
    OrdinalWeekdayOfMonth { ordinal: i32, weekday: Weekday },
}

impl ByDaySpec {
    #[must_use]
    pub const fn weekday(self) -> Weekday {
        match self {
            Self::WeekdayOnly(weekday) | Self::OrdinalWeekdayOfMonth { weekday, .. } => weekday,
        }
    }

    /// ## Summary
    /// English rendering, e.g. `Tuesday`, `2nd Tuesday`, `last Friday`.
    #[must_use]
    pub fn describe(self) -> String {
        match self {
            Self::WeekdayOnly(weekday) => weekday_name(weekday).to_string(),
            Self::OrdinalWeekdayOfMonth { ordinal: -1, weekday } => {
                format!("last {}", weekday_name(weekday))
            }
            Self::OrdinalWeekdayOfMonth { ordinal, weekday } if ordinal < 0 => format!(
                "{} to last {}",
                english_ordinal(ordinal.unsigned_abs()),
                weekday_name(weekday)
            ),
            Self::OrdinalWeekdayOfMonth { ordinal, weekday } => format!(
                "{} {}",
                english_ordinal(ordinal.unsigned_abs()),
                weekday_name(weekday)
            ),
        }
    }
}

impl std::fmt::Display for ByDaySpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WeekdayOnly(weekday) => f.write_str(weekday_code(*weekday)),
            Self::OrdinalWeekdayOfMonth { ordinal, weekday } => {
                write!(f, "{ordinal}{}", weekday_code(*weekday))
            }
        }
    }
}

fn english_ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_ordinals() {
        let spec = ByDaySpec::OrdinalWeekdayOfMonth {
            ordinal: 2,
            weekday: Weekday::Tue,
        };
        assert_eq!(spec.describe(), "2nd Tuesday");
        assert_eq!(spec.to_string(), "2TU");

        let last = ByDaySpec::OrdinalWeekdayOfMonth {
            ordinal: -1,
            weekday: Weekday::Fri,
        };
        assert_eq!(last.describe(), "last Friday");

        let second_last = ByDaySpec::OrdinalWeekdayOfMonth {
            ordinal: -2,
            weekday: Weekday::Fri,
        };
        assert_eq!(second_last.describe(), "2nd to last Friday");
    }

    #[test]
    fn english_ordinal_teens() {
        assert_eq!(english_ordinal(1), "1st");
        assert_eq!(english_ordinal(3), "3rd");
        assert_eq!(english_ordinal(11), "11th");
        assert_eq!(english_ordinal(22), "22nd");
    }
}
