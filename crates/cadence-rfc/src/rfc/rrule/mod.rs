//! Recurrence rules (RFC 5545 §3.3.10 subset).
//!
//! - Core: the parsed [`RuleTable`](self::core::RuleTable) and its value types
//! - Parse: rule strings, BYDAY tokens and date values
//! - Build: canonical serialization and human-readable phrases

pub mod build;
pub mod core;
pub mod parse;
