//! Error types for pureza-roster.

/// Result type alias for roster operations.
pub type Result<T> = std::result::Result<T, RosterError>;

/// Errors raised by roster configuration and reporting.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// Configuration error (invalid policy values).
    #[error("configuration error: {0}")]
    Config(String),

    /// A report that needs at least one student was given none.
    #[error("roster is empty")]
    EmptyRoster,

    /// Policy file parse error.
    #[error("parse error: {0}")]
    Parse(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RosterError {
    /// Creates a configuration error.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates a parse error.
    #[must_use]
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
