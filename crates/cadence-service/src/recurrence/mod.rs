//! Recurrence expansion for a single event.
//!
//! [`EventRecurrence`] derives a rule table, a composite temporal expression
//! and an exception set from an [`Event`], then answers date, serialization
//! and description queries against that snapshot.

mod builder;
mod enumerate;
mod event;
mod event_recurrence;
mod frequency;

pub use builder::build_expression;
pub use enumerate::occurrence_dates;
pub use event::Event;
pub use event_recurrence::{EventRecurrence, parse_exception_dates};
