use chrono::{NaiveDate, NaiveDateTime};

/// Calendar event as seen by recurrence expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Series anchor (DTSTART).
    pub start: NaiveDateTime,
    /// Rule strings, e.g. `FREQ=WEEKLY;BYDAY=MO`.
    pub recurrence_rules: Vec<String>,
    /// Excluded occurrences as date or date-time text.
    pub exception_dates: Vec<String>,
}

impl Event {
    #[must_use]
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            start,
            recurrence_rules: Vec::new(),
            exception_dates: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_rule(mut self, rule: impl Into<String>) -> Self {
        self.recurrence_rules.push(rule.into());
        self
    }

    #[must_use]
    pub fn with_exception_date(mut self, exception: impl Into<String>) -> Self {
        self.exception_dates.push(exception.into());
        self
    }

    #[must_use]
    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }
}
