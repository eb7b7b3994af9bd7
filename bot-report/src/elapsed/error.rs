//! Elapsed format error types.

/// Errors raised while parsing an elapsed-time pattern.
#[derive(Debug, thiserror::Error)]
pub enum ElapsedError {
    /// Pattern references a field that isn't days, hours, minutes or seconds.
    #[error("Unknown field '{name}' in elapsed pattern '{pattern}'")]
    UnknownField { name: String, pattern: String },

    /// A `{` was opened but never closed.
    #[error("Unterminated field in elapsed pattern '{pattern}'")]
    Unterminated { pattern: String },
}
