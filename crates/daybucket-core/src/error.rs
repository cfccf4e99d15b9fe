//! Error types for daybucket-core.
//!
//! Bucketing itself never fails on record data: missing or unparsable dates
//! are skipped. Errors only arise at the boundaries, when a window is built
//! from caller input or when a strict date argument cannot be parsed.

use thiserror::Error;

/// The main error type for daybucket operations.
#[derive(Debug, Error)]
pub enum DayBucketError {
    /// The window has no defined semantics (negative length, calendar overflow).
    #[error("Invalid window: {0}")]
    InvalidWindow(String),

    /// Error parsing a date argument.
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Result type alias for daybucket operations.
pub type Result<T> = std::result::Result<T, DayBucketError>;
