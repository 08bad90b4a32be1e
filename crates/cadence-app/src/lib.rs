//! The `cadence` command-line tool: expands, describes and normalizes
//! recurrence rules.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
