//! Error types for pureza-core.
//!
//! All errors are explicit, no panics allowed.

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised by the core combinators.
///
/// Library code never panics; the two partial operations in this crate
/// surface their failure modes here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A seedless fold was asked to reduce an empty sequence.
    #[error("cannot fold an empty sequence without an initial value")]
    EmptySequence,

    /// A calendar month outside 1..=12.
    #[error("invalid month: {0} (expected 1..=12)")]
    InvalidMonth(u32),
}

impl CoreError {
    /// Returns true if supplying an initial accumulator would avoid the error.
    #[must_use]
    pub const fn needs_initial(&self) -> bool {
        matches!(self, Self::EmptySequence)
    }
}
