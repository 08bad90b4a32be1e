//! Recurrence rule parsing.
//!
//! - Table: `KEY=VALUE;...` rule strings into a [`RuleTable`](crate::rfc::rrule::core::RuleTable)
//! - BYDAY: single weekday tokens, plain or ordinal
//! - Date: UNTIL and exception timestamps

mod byday;
mod date;
mod table;

pub use byday::parse_byday;
pub use date::parse_date_value;
pub use table::parse_rules;
