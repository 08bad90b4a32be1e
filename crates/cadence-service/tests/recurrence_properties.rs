//! Invariants that must hold for every scenario and every query range.

include!(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/recurrence_cases_data/mod.rs"));

use cadence_rfc::rfc::rrule::parse::parse_rules;
use cadence_service::recurrence::parse_exception_dates;

/// Query ranges around each case's start, including ones that begin before it,
/// end before it, and straddle it.
fn query_ranges(start: NaiveDate) -> Vec<DateRange> {
    let offsets: [(i64, i64); 6] = [(0, 0), (0, 13), (-10, 40), (5, 400), (-30, -1), (-365, 730)];
    offsets
        .iter()
        .map(|(from, to)| {
            DateRange::new(
                start + chrono::Duration::days(*from),
                start + chrono::Duration::days(*to),
            )
        })
        .collect()
}

#[test_log::test]
fn results_stay_within_range() {
    for case in RECURRENCE_CASES {
        let recurrence = case.recurrence();
        for range in query_ranges(recurrence.event().start_date()) {
            for date in recurrence.dates(&range) {
                assert!(range.contains(date), "{}: {date} outside {range}", case.name);
            }
        }
    }
}

#[test]
fn results_are_sorted_and_unique() {
    for case in RECURRENCE_CASES {
        let recurrence = case.recurrence();
        for range in query_ranges(recurrence.event().start_date()) {
            let dates = recurrence.dates(&range);
            assert!(
                dates.windows(2).all(|pair| pair[0] < pair[1]),
                "{}: not strictly ascending in {range}",
                case.name
            );
        }
    }
}

#[test]
fn exceptions_never_appear() {
    for case in RECURRENCE_CASES {
        let recurrence = case.recurrence();
        let exceptions = parse_exception_dates(case.exceptions).expect("valid exceptions");
        for range in query_ranges(recurrence.event().start_date()) {
            for date in recurrence.dates(&range) {
                assert!(!exceptions.contains(&date), "{}: exception {date} returned", case.name);
            }
        }
    }
}

#[test]
fn start_is_present_when_in_range() {
    for case in RECURRENCE_CASES {
        let recurrence = case.recurrence();
        let start = recurrence.event().start_date();
        if recurrence.exceptions().contains(&start) {
            continue;
        }
        for range in query_ranges(start) {
            let dates = recurrence.dates(&range);
            assert_eq!(
                dates.contains(&start),
                range.contains(start),
                "{}: start presence wrong in {range}",
                case.name
            );
        }
    }
}

#[test]
fn count_caps_the_full_series() {
    for case in RECURRENCE_CASES {
        let recurrence = case.recurrence();
        let count = recurrence.occurrence_count();
        if count == 0 {
            continue;
        }
        let start = recurrence.event().start_date();
        let everything = DateRange::new(start, start + chrono::Duration::days(3650));
        let cap = if recurrence.expression().includes(start) {
            count
        } else {
            count + 1
        };
        let produced = u32::try_from(recurrence.dates(&everything).len()).expect("small");
        assert!(produced <= cap, "{}: {produced} > {cap}", case.name);
    }
}

#[test]
fn serialized_rules_parse_back_equivalently() {
    for case in RECURRENCE_CASES {
        let recurrence = case.recurrence();
        let reparsed = parse_rules([recurrence.serialize()]).expect("serialized rule parses");
        assert_eq!(reparsed.len(), recurrence.rules().len(), "{}", case.name);
        for (key, value) in recurrence.rules().iter() {
            assert_eq!(reparsed.get(key), Some(value), "{}: {key}", case.name);
        }
    }
}
