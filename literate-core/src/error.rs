//! Error types for Literate Core
//!
//! The catalog operations themselves never fail: lookup misses are no-ops and
//! an empty region is `None`. These errors only come from the validation
//! helpers used when turning user input into core values.

use thiserror::Error;

/// Result type alias using LiterateError
pub type Result<T> = std::result::Result<T, LiterateError>;

/// Top-level error type for all Literate validation helpers
#[derive(Debug, Error, PartialEq)]
pub enum LiterateError {
    #[error("Invalid location: latitude {latitude}, longitude {longitude}")]
    InvalidLocation { latitude: f64, longitude: f64 },

    #[error("Invalid book id: {0}")]
    InvalidId(String),

    #[error("Unknown section: {0}")]
    UnknownSection(String),
}
