use cadence_rfc::rfc::temporal::DateRange;
use cadence_service::recurrence::{Event, EventRecurrence};
use chrono::{NaiveDate, NaiveDateTime};

pub struct RecurrenceCase {
    pub name: &'static str,
    pub rules: &'static [&'static str],
    pub start: &'static str,
    pub exceptions: &'static [&'static str],
    pub range: (&'static str, &'static str),
    pub expected: &'static [&'static str],
}

pub fn parse_day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn parse_start(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").expect("valid test start")
}

impl RecurrenceCase {
    pub fn event(&self) -> Event {
        let mut event = Event::new(parse_start(self.start));
        event.recurrence_rules = self.rules.iter().map(ToString::to_string).collect();
        event.exception_dates = self.exceptions.iter().map(ToString::to_string).collect();
        event
    }

    pub fn recurrence(&self) -> EventRecurrence {
        EventRecurrence::new(self.event())
            .unwrap_or_else(|err| panic!("{}: failed to build recurrence: {err}", self.name))
    }

    pub fn range(&self) -> DateRange {
        DateRange::new(parse_day(self.range.0), parse_day(self.range.1))
    }
}

pub static RECURRENCE_CASES: &[RecurrenceCase] = &[
    RecurrenceCase {
        name: "weekly_two_days",
        rules: &["FREQ=WEEKLY;BYDAY=MO,WE;INTERVAL=1"],
        start: "2024-01-01T09:00:00",
        exceptions: &[],
        range: ("2024-01-01", "2024-01-14"),
        expected: &["2024-01-01", "2024-01-03", "2024-01-08", "2024-01-10"],
    },
    RecurrenceCase {
        name: "monthly_second_tuesday",
        rules: &["FREQ=MONTHLY;BYDAY=2TU"],
        start: "2024-01-09T18:30:00",
        exceptions: &[],
        range: ("2024-01-01", "2024-03-31"),
        expected: &["2024-01-09", "2024-02-13", "2024-03-12"],
    },
    RecurrenceCase {
        name: "daily_interval_count",
        rules: &["FREQ=DAILY;INTERVAL=2;COUNT=3"],
        start: "2024-01-01T07:00:00",
        exceptions: &[],
        range: ("2024-01-01", "2024-01-30"),
        expected: &["2024-01-01", "2024-01-03", "2024-01-05"],
    },
    RecurrenceCase {
        name: "weekly_until_before_second",
        rules: &["FREQ=WEEKLY;BYDAY=MO;UNTIL=20240105"],
        start: "2024-01-01T09:00:00",
        exceptions: &[],
        range: ("2024-01-01", "2024-01-31"),
        expected: &["2024-01-01"],
    },
    RecurrenceCase {
        name: "exception_removes_second_occurrence",
        rules: &["FREQ=WEEKLY;BYDAY=MO"],
        start: "2024-01-01T09:00:00",
        exceptions: &["20240108T090000Z"],
        range: ("2024-01-01", "2024-01-31"),
        expected: &["2024-01-01", "2024-01-15", "2024-01-22", "2024-01-29"],
    },
    RecurrenceCase {
        name: "count_consumed_before_range",
        rules: &["FREQ=MONTHLY;COUNT=3"],
        start: "2024-01-15T12:00:00",
        exceptions: &[],
        range: ("2024-03-01", "2024-12-31"),
        expected: &["2024-03-15"],
    },
    RecurrenceCase {
        name: "count_not_extended_by_exception",
        rules: &["FREQ=DAILY;COUNT=3"],
        start: "2024-01-01T07:00:00",
        exceptions: &["2024-01-02"],
        range: ("2024-01-01", "2024-01-31"),
        expected: &["2024-01-01", "2024-01-03"],
    },
    RecurrenceCase {
        name: "start_added_when_pattern_misses_it",
        rules: &["FREQ=WEEKLY;BYDAY=WE"],
        start: "2024-01-01T09:00:00",
        exceptions: &[],
        range: ("2024-01-01", "2024-01-10"),
        expected: &["2024-01-01", "2024-01-03", "2024-01-10"],
    },
    RecurrenceCase {
        name: "yearly_last_monday_of_may",
        rules: &["FREQ=YEARLY;BYMONTH=5;BYDAY=-1MO"],
        start: "2024-05-27T00:00:00",
        exceptions: &[],
        range: ("2024-01-01", "2026-12-31"),
        expected: &["2024-05-27", "2025-05-26", "2026-05-25"],
    },
    RecurrenceCase {
        name: "monthly_thirty_first_skips_short_months",
        rules: &["FREQ=MONTHLY"],
        start: "2024-01-31T10:00:00",
        exceptions: &[],
        range: ("2024-01-01", "2024-06-30"),
        expected: &["2024-01-31", "2024-03-31", "2024-05-31"],
    },
    RecurrenceCase {
        name: "biweekly_across_month",
        rules: &["FREQ=WEEKLY;INTERVAL=2;BYDAY=TU,TH"],
        start: "2024-01-30T08:00:00",
        exceptions: &[],
        range: ("2024-01-29", "2024-02-29"),
        expected: &["2024-01-30", "2024-02-01", "2024-02-13", "2024-02-15", "2024-02-27", "2024-02-29"],
    },
    RecurrenceCase {
        name: "rules_split_over_strings",
        rules: &["FREQ=MONTHLY", "BYMONTHDAY=1,-1"],
        start: "2024-02-01T10:00:00",
        exceptions: &[],
        range: ("2024-02-01", "2024-03-31"),
        expected: &["2024-02-01", "2024-02-29", "2024-03-01", "2024-03-31"],
    },
    RecurrenceCase {
        name: "query_before_start",
        rules: &["FREQ=DAILY"],
        start: "2024-06-01T10:00:00",
        exceptions: &[],
        range: ("2024-05-01", "2024-05-31"),
        expected: &[],
    },
    RecurrenceCase {
        name: "without_freq_bounds_only",
        rules: &["UNTIL=20240103"],
        start: "2024-01-01T10:00:00",
        exceptions: &[],
        range: ("2023-12-30", "2024-01-06"),
        expected: &["2024-01-01", "2024-01-02", "2024-01-03"],
    },
];

pub fn assert_case(case: &RecurrenceCase) {
    let dates = case.recurrence().dates(&case.range());
    let expected: Vec<NaiveDate> = case.expected.iter().map(|s| parse_day(s)).collect();
    assert_eq!(dates, expected, "case {}", case.name);
}
