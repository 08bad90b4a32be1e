use thiserror::Error;

/// Recurrence rule parsing and build errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RfcError {
    #[error("Malformed rule '{rule}': {reason}")]
    MalformedRule { rule: String, reason: String },

    #[error("Unknown weekday: {0}")]
    UnknownWeekday(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unsupported frequency: {0}")]
    UnsupportedFrequency(String),
}

impl RfcError {
    pub(crate) fn malformed(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedRule {
            rule: rule.into(),
            reason: reason.into(),
        }
    }
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
