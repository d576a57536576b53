//! Error types for html-selection.
//!
//! Absence of an attribute, class or match is never an error here; only
//! rendering failures and unparsable selectors are surfaced.

/// Error type for selection operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Serializing a node to markup failed.
    #[error("markup rendering failed: {0}")]
    Render(String),

    /// A CSS selector could not be parsed.
    #[error("invalid selector: {0}")]
    InvalidSelector(String),
}

/// Result type alias for selection operations.
pub type Result<T> = std::result::Result<T, Error>;
