//! Recurrence rule models.
//!
//! A [`RuleTable`] keeps every key it was given, in first-seen order, so that
//! unknown keys survive a parse/serialize round trip untouched. Interpretation
//! of the known keys happens through the typed accessors.

mod byday;
mod date_value;
mod frequency;
mod key;
mod table;
mod value;
mod weekday;

pub use byday::ByDaySpec;
pub use date_value::DateValue;
pub use frequency::Frequency;
pub use key::RuleKey;
pub use table::RuleTable;
pub use value::RuleValue;
pub use weekday::{weekday_code, weekday_from_code, weekday_name};
