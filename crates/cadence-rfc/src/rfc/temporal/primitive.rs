use chrono::{Datelike, NaiveDate, Weekday};

/// Calendar unit used by [`Primitive::EveryNUnits`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Day,
    /// Monday-start calendar week.
    Week,
    Month,
    Year,
}

impl TimeUnit {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    /// Ordinal of the unit containing `date`, counted from a fixed epoch.
    fn index(self, date: NaiveDate) -> i64 {
        match self {
            Self::Day => i64::from(date.num_days_from_ce()),
            Self::Week => {
                let monday = i64::from(date.num_days_from_ce())
                    - i64::from(date.weekday().num_days_from_monday());
                monday.div_euclid(7)
            }
            Self::Month => i64::from(date.year()) * 12 + i64::from(date.month0()),
            Self::Year => i64::from(date.year()),
        }
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Leaf date matcher.
///
/// Negative day and ordinal values count back from the end of the month
/// (`-1` is the last day, or the last such weekday).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// Dates after `date` (or on it, when `inclusive`).
    After { date: NaiveDate, inclusive: bool },
    /// Dates before `date` (or on it, when `inclusive`).
    Before { date: NaiveDate, inclusive: bool },
    /// Every `n`th calendar `unit`, starting with the unit containing `anchor`.
    EveryNUnits {
        anchor: NaiveDate,
        n: u32,
        unit: TimeUnit,
    },
    /// Every `n`th day counted from `anchor`, in either direction.
    DayInterval { anchor: NaiveDate, n: u32 },
    WeekdayOfWeek(Weekday),
    OrdinalWeekdayOfMonth { ordinal: i32, weekday: Weekday },
    DayOfMonthRange { min: i32, max: i32 },
    /// Month number, 1 to 12.
    MonthEquals(u32),
}

impl Primitive {
    #[must_use]
    pub const fn day_of_month(day: i32) -> Self {
        Self::DayOfMonthRange { min: day, max: day }
    }

    /// ## Summary
    /// Returns true if `date` satisfies this matcher.
    #[must_use]
    pub fn includes(&self, date: NaiveDate) -> bool {
        match *self {
            Self::After { date: bound, inclusive } => date > bound || (inclusive && date == bound),
            Self::Before { date: bound, inclusive } => date < bound || (inclusive && date == bound),
            Self::EveryNUnits { anchor, n, unit } => {
                let diff = unit.index(date) - unit.index(anchor);
                diff >= 0 && diff % i64::from(n.max(1)) == 0
            }
            Self::DayInterval { anchor, n } => {
                let diff = date.signed_duration_since(anchor).num_days();
                diff.rem_euclid(i64::from(n.max(1))) == 0
            }
            Self::WeekdayOfWeek(weekday) => date.weekday() == weekday,
            Self::OrdinalWeekdayOfMonth { ordinal, weekday } => {
                if date.weekday() != weekday {
                    return false;
                }
                let day = date.day();
                let (nth, wanted) = if ordinal > 0 {
                    ((day - 1) / 7 + 1, ordinal.unsigned_abs())
                } else {
                    ((month_length(date) - day) / 7 + 1, ordinal.unsigned_abs())
                };
                ordinal != 0 && nth == wanted
            }
            Self::DayOfMonthRange { min, max } => {
                let last = month_length(date);
                let day = i64::from(date.day());
                resolve_day(min, last) <= day && day <= resolve_day(max, last)
            }
            Self::MonthEquals(month) => date.month() == month,
        }
    }
}

impl std::fmt::Display for Primitive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::After { date, inclusive } => {
                write!(f, "after{}({date})", if *inclusive { "=" } else { "" })
            }
            Self::Before { date, inclusive } => {
                write!(f, "before{}({date})", if *inclusive { "=" } else { "" })
            }
            Self::EveryNUnits { anchor, n, unit } => write!(f, "every({n} {unit} from {anchor})"),
            Self::DayInterval { anchor, n } => write!(f, "day_interval({n} from {anchor})"),
            Self::WeekdayOfWeek(weekday) => write!(f, "weekday({weekday})"),
            Self::OrdinalWeekdayOfMonth { ordinal, weekday } => {
                write!(f, "weekday_of_month({ordinal}{weekday})")
            }
            Self::DayOfMonthRange { min, max } if min == max => write!(f, "month_day({min})"),
            Self::DayOfMonthRange { min, max } => write!(f, "month_day({min}..={max})"),
            Self::MonthEquals(month) => write!(f, "month({month})"),
        }
    }
}

/// Maps a possibly negative day-of-month onto 1-based days of a month of
/// length `last`.
fn resolve_day(day: i32, last: u32) -> i64 {
    if day < 0 {
        i64::from(last) + 1 + i64::from(day)
    } else {
        i64::from(day)
    }
}

/// Number of days in the month containing `date`.
fn month_length(date: NaiveDate) -> u32 {
    u32::from(date.num_days_in_month())
}
