use std::collections::BTreeSet;

use cadence_rfc::error::RfcResult;
use cadence_rfc::rfc::rrule::build::{human_phrase, serialize};
use cadence_rfc::rfc::rrule::core::{Frequency, RuleTable};
use cadence_rfc::rfc::rrule::parse::{parse_date_value, parse_rules};
use cadence_rfc::rfc::temporal::{DateRange, Expr};
use chrono::{NaiveDate, TimeZone};

use super::builder::build_expression;
use super::enumerate::occurrence_dates;
use super::event::Event;
use crate::error::ServiceResult;

/// Recurrence state derived from one event snapshot.
#[derive(Debug, Clone)]
struct Derived {
    rules: RuleTable,
    expression: Expr,
    frequency: Option<Frequency>,
    interval: u32,
    occurrence_count: u32,
    exceptions: BTreeSet<NaiveDate>,
}

impl Derived {
    fn from_event(event: &Event) -> ServiceResult<Self> {
        let rules = parse_rules(&event.recurrence_rules)?;
        let expression = build_expression(&rules, event.start_date())?;
        let exceptions = parse_exception_dates(event.exception_dates.as_slice())?;

        Ok(Self {
            frequency: rules.frequency()?,
            interval: rules.interval(),
            occurrence_count: rules.count(),
            rules,
            expression,
            exceptions,
        })
    }
}

/// ## Summary
/// An event together with the recurrence state derived from it.
///
/// The rule table, expression and exception set are derived together at
/// construction and replaced together by [`EventRecurrence::reload`]; a
/// failed reload leaves the previous state in place. Queries never mutate.
#[derive(Debug, Clone)]
pub struct EventRecurrence {
    event: Event,
    derived: Derived,
}

impl EventRecurrence {
    /// ## Summary
    /// Parses the event's rules and exceptions and builds its expression.
    ///
    /// ## Errors
    /// Returns an error if a rule is malformed, a BYDAY token is unknown,
    /// FREQ is unsupported, or UNTIL or an exception date does not parse.
    #[tracing::instrument(skip_all, fields(start = %event.start, rules = event.recurrence_rules.len()))]
    pub fn new(event: Event) -> ServiceResult<Self> {
        let derived = Derived::from_event(&event)?;
        tracing::debug!(
            rules = %derived.rules,
            count = derived.occurrence_count,
            exceptions = derived.exceptions.len(),
            "Built event recurrence"
        );
        Ok(Self { event, derived })
    }

    /// ## Summary
    /// Replaces the event and rebuilds all derived state from it.
    ///
    /// ## Errors
    /// Same as [`EventRecurrence::new`]. On error `self` is left unchanged.
    #[tracing::instrument(skip_all, fields(start = %event.start, rules = event.recurrence_rules.len()))]
    pub fn reload(&mut self, event: Event) -> ServiceResult<()> {
        let derived = Derived::from_event(&event)?;
        tracing::debug!(rules = %derived.rules, "Reloaded event recurrence");
        self.event = event;
        self.derived = derived;
        Ok(())
    }

    #[must_use]
    pub fn event(&self) -> &Event {
        &self.event
    }

    #[must_use]
    pub fn rules(&self) -> &RuleTable {
        &self.derived.rules
    }

    #[must_use]
    pub fn expression(&self) -> &Expr {
        &self.derived.expression
    }

    #[must_use]
    pub fn exceptions(&self) -> &BTreeSet<NaiveDate> {
        &self.derived.exceptions
    }

    #[must_use]
    pub fn frequency(&self) -> Option<Frequency> {
        self.derived.frequency
    }

    #[must_use]
    pub fn interval(&self) -> u32 {
        self.derived.interval
    }

    /// COUNT, or 0 when the series is bounded by the query range only.
    #[must_use]
    pub fn occurrence_count(&self) -> u32 {
        self.derived.occurrence_count
    }

    /// ## Summary
    /// Occurrence dates within `range`, ascending and unique.
    #[tracing::instrument(skip_all, fields(range = %range))]
    #[must_use]
    pub fn dates(&self, range: &DateRange) -> Vec<NaiveDate> {
        let dates = occurrence_dates(
            range,
            &self.derived.expression,
            self.event.start_date(),
            self.derived.occurrence_count,
            &self.derived.exceptions,
        );
        tracing::trace!(occurrences = dates.len(), "Enumerated occurrences");
        dates
    }

    /// Canonical rule text.
    #[must_use]
    pub fn serialize(&self) -> String {
        serialize(&self.derived.rules)
    }

    /// English description, with UNTIL rendered in `zone`.
    #[must_use]
    pub fn human_phrase<Z: TimeZone>(&self, zone: &Z) -> String {
        human_phrase(&self.derived.rules, zone)
    }
}

/// ## Summary
/// Parses exception timestamps to the calendar dates they exclude. Values
/// pinned to an offset are taken as UTC dates.
///
/// ## Errors
/// Returns `RfcError::InvalidDate` for the first value that does not parse.
pub fn parse_exception_dates<S: AsRef<str>>(values: &[S]) -> RfcResult<BTreeSet<NaiveDate>> {
    values
        .iter()
        .map(|value| parse_date_value(value.as_ref()).map(|parsed| parsed.utc_date()))
        .collect()
}

#[cfg(test)]
mod tests {
    use cadence_rfc::error::RfcError;
    use chrono::NaiveDateTime;

    use super::*;
    use crate::error::ServiceError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn start(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    #[test_log::test]
    fn reload_replaces_state() {
        let mut recurrence =
            EventRecurrence::new(Event::new(start("2024-01-01T09:00:00")).with_rule("FREQ=DAILY;COUNT=2"))
                .unwrap();
        assert_eq!(recurrence.occurrence_count(), 2);

        recurrence
            .reload(Event::new(start("2024-01-01T09:00:00")).with_rule("FREQ=WEEKLY;INTERVAL=2"))
            .unwrap();
        assert_eq!(recurrence.frequency(), Some(Frequency::Weekly));
        assert_eq!(recurrence.interval(), 2);
        assert_eq!(recurrence.occurrence_count(), 0);
        assert_eq!(recurrence.serialize(), "FREQ=WEEKLY;INTERVAL=2");
    }

    #[test]
    fn failed_reload_keeps_previous_state() {
        let event = Event::new(start("2024-01-01T09:00:00")).with_rule("FREQ=DAILY");
        let mut recurrence = EventRecurrence::new(event.clone()).unwrap();

        let broken = Event::new(start("2024-02-01T09:00:00"))
            .with_rule("FREQ=WEEKLY")
            .with_exception_date("not a date");
        let err = recurrence.reload(broken).unwrap_err();

        assert!(matches!(err, ServiceError::RfcError(RfcError::InvalidDate(_))));
        assert_eq!(recurrence.event(), &event);
        assert_eq!(recurrence.frequency(), Some(Frequency::Daily));
    }

    #[test]
    fn malformed_rule_fails_construction() {
        let err = EventRecurrence::new(Event::new(start("2024-01-01T09:00:00")).with_rule("FREQ"))
            .unwrap_err();
        assert!(matches!(err, ServiceError::RfcError(RfcError::MalformedRule { .. })));
    }

    #[test]
    fn exception_dates_use_utc() {
        let exceptions = parse_exception_dates(&[
            "20240105T090000Z",
            "2024-01-07",
            "2024-01-09T01:00:00+03:00",
        ])
        .unwrap();
        assert_eq!(
            exceptions,
            BTreeSet::from([date(2024, 1, 5), date(2024, 1, 7), date(2024, 1, 8)])
        );
    }

    #[test]
    fn accessors_expose_snapshot() {
        let recurrence = EventRecurrence::new(
            Event::new(start("2024-01-01T09:00:00"))
                .with_rule("FREQ=MONTHLY;BYDAY=2TU")
                .with_exception_date("20240109"),
        )
        .unwrap();
        assert!(recurrence.rules().contains(&cadence_rfc::rfc::rrule::core::RuleKey::ByDay));
        assert!(recurrence.exceptions().contains(&date(2024, 1, 9)));
        assert!(recurrence.expression().includes(date(2024, 2, 13)));
        assert_eq!(recurrence.human_phrase(&chrono::Utc), "Every on 2nd Tuesday");
    }
}
