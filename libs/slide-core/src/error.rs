//! Error types for slide-core.

use thiserror::Error;

/// Result type alias using ParseError.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while reading slide identifiers.
///
/// Deck parsing itself never fails; malformed markup degrades to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid slide id: {value}")]
    InvalidSlideId { value: String },
}
