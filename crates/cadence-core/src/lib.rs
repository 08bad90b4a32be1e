//! Shared building blocks for the cadence workspace: configuration and the
//! core error type.

pub mod config;
pub mod error;
