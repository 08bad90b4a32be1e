use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// Date or date-time taken from UNTIL or an exception timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateValue {
    /// Date without a time of day.
    Date(NaiveDate),
    /// Local date-time without a zone.
    Floating(NaiveDateTime),
    /// Date-time pinned to an offset (`Z` included).
    Instant(DateTime<FixedOffset>),
}

impl DateValue {
    /// ## Summary
    /// Calendar date exactly as written in the source text.
    #[must_use]
    pub fn civil_date(&self) -> NaiveDate {
        match self {
            Self::Date(date) => *date,
            Self::Floating(datetime) => datetime.date(),
            Self::Instant(datetime) => datetime.date_naive(),
        }
    }

    /// Wall-clock date-time as written; date-only values start at midnight.
    #[must_use]
    pub fn civil_datetime(&self) -> NaiveDateTime {
        match self {
            Self::Date(date) => date.and_time(NaiveTime::MIN),
            Self::Floating(datetime) => *datetime,
            Self::Instant(datetime) => datetime.naive_local(),
        }
    }

    /// ## Summary
    /// Calendar date in UTC; zone-less values keep their written date.
    #[must_use]
    pub fn utc_date(&self) -> NaiveDate {
        self.date_in(&Utc)
    }

    /// ## Summary
    /// Calendar date as observed in `zone`. Only values pinned to an offset
    /// are converted; date-only and floating values are local to `zone`.
    #[must_use]
    pub fn date_in<Z: TimeZone>(&self, zone: &Z) -> NaiveDate {
        match self {
            Self::Instant(datetime) => datetime.with_timezone(zone).date_naive(),
            Self::Date(_) | Self::Floating(_) => self.civil_date(),
        }
    }
}

impl std::fmt::Display for DateValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{date}"),
            Self::Floating(datetime) => write!(f, "{datetime}"),
            Self::Instant(datetime) => write!(f, "{}", datetime.to_rfc3339()),
        }
    }
}
