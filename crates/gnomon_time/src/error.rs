//! Error types for timestamp parsing.

use thiserror::Error;

/// Errors from timestamp parsing and calendar validation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The text does not follow `YYYY-MM-DDTHH:mm:SS±HHMM`.
    #[error("malformed timestamp '{input}': {reason}")]
    Format { input: String, reason: &'static str },
    /// The text is well formed but names an impossible calendar field.
    #[error("{field} out of range: {value}")]
    FieldOutOfRange { field: &'static str, value: i64 },
}

impl TimeError {
    pub(crate) fn format(input: &str, reason: &'static str) -> Self {
        Self::Format {
            input: input.to_string(),
            reason,
        }
    }
}
