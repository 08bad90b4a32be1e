//! Recurrence-rule handling for a subset of RFC 5545 plus the temporal
//! expression engine the rules are evaluated with.

pub mod error;
pub mod rfc;
