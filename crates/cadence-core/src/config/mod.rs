use std::str::FromStr;

use chrono_tz::Tz;
use config::Config;
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

/// Configuration file consulted when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "cadence.toml";

/// Prefix for environment variable overrides, e.g. `CADENCE_LOGGING__LEVEL`.
pub const ENV_PREFIX: &str = "CADENCE";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub display: DisplayConfig,
    pub query: QueryConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// IANA zone name used when rendering UNTIL in human phrases.
    pub timezone: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QueryConfig {
    pub window_days: u32,
}

impl QueryConfig {
    /// ## Summary
    /// Returns the default query window length in days, never less than one.
    #[must_use]
    pub fn window_days(&self) -> u32 {
        self.window_days.max(1)
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, environment variables and an optional
    /// TOML file. Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load(file: &str) -> CoreResult<Self> {
        Ok(Config::builder()
            .set_default("logging.level", "info")?
            .set_default("display.timezone", "UTC")?
            .set_default("query.window_days", 30)?
            // TOML file
            .add_source(config::File::with_name(file).required(false))
            // Env vars
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }

    /// ## Summary
    /// Resolves the configured display zone.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` if the zone is not a known IANA name.
    pub fn timezone(&self) -> CoreResult<Tz> {
        Tz::from_str(self.display.timezone.trim()).map_err(|err| {
            CoreError::InvalidConfiguration(format!(
                "display.timezone '{}': {err}",
                self.display.timezone
            ))
        })
    }
}

/// ## Summary
/// Loads configuration from the `.env` file, environment variables and the
/// given TOML file (or `cadence.toml` when `None`).
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config(file: Option<&str>) -> CoreResult<Settings> {
    if let Err(err) = dotenvy::dotenv() {
        tracing::trace!(error = %err, "No .env file loaded");
    }

    Settings::load(file.unwrap_or(DEFAULT_CONFIG_FILE))
}

#[cfg(test)]
mod tests;
