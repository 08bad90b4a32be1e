//! Event recurrence: turns an event's rule strings into a date predicate and
//! enumerates its occurrences.

pub mod error;
pub mod recurrence;
