//! Temporal expression engine.
//!
//! A temporal expression is a predicate over civil calendar dates. Leaves are
//! [`Primitive`] matchers that own all of the calendar arithmetic (week and
//! month boundaries, month lengths, leap years); [`Expr`] combines them with
//! intersection and union and enumerates the matching dates of a
//! [`DateRange`].

mod expr;
mod primitive;
mod range;

pub use expr::Expr;
pub use primitive::{Primitive, TimeUnit};
pub use range::DateRange;
