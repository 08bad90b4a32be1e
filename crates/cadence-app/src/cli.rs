//! Command-line arguments.
//!
//! - `cadence dates` prints occurrence dates of an event
//! - `cadence describe` prints an English description of its rules
//! - `cadence normalize` prints the canonical rule text

use clap::{Args, Parser, Subcommand};

/// Recurrence rule expansion and description
#[derive(Debug, Parser)]
#[command(name = "cadence")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log at debug level regardless of configuration
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path (defaults to cadence.toml)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the occurrence dates of an event within a range
    Dates(DatesArgs),

    /// Describe an event's rules in English
    Describe(DescribeArgs),

    /// Print rules in canonical form
    Normalize(RuleArgs),
}

#[derive(Debug, Args)]
pub struct RuleArgs {
    /// Rule text such as FREQ=WEEKLY;BYDAY=MO,WE (repeatable)
    #[arg(short, long = "rule", value_name = "RRULE", required = true)]
    pub rules: Vec<String>,
}

#[derive(Debug, Args)]
pub struct DatesArgs {
    #[command(flatten)]
    pub rules: RuleArgs,

    /// Event start, e.g. 2024-01-01T09:00:00 or 20240101T090000
    #[arg(short, long)]
    pub start: String,

    /// Excluded occurrence (repeatable)
    #[arg(short = 'x', long = "exdate", value_name = "TIMESTAMP")]
    pub exdates: Vec<String>,

    /// First date of the range (defaults to the start date)
    #[arg(long)]
    pub from: Option<String>,

    /// Last date of the range (defaults to the configured window after --from)
    #[arg(long)]
    pub to: Option<String>,

    /// Print a JSON array instead of one date per line
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct DescribeArgs {
    #[command(flatten)]
    pub rules: RuleArgs,

    /// Event start
    #[arg(short, long)]
    pub start: String,

    /// IANA zone for rendering UNTIL (defaults to display.timezone)
    #[arg(long)]
    pub tz: Option<String>,
}
