//! Error types for color parsing.

use thiserror::Error;

/// Error type for strict hex color parsing.
///
/// Only [`Color::try_from_hex`](crate::Color::try_from_hex) produces this
/// error; the primary [`Color::from_hex`](crate::Color::from_hex) substitutes
/// opaque white instead of failing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Digit count was neither 6 nor 8 (covers empty input).
    #[error("invalid hex length: {0} (expected 6 or 8 digits)")]
    InvalidLength(usize),

    /// A character outside `0-9`, `A-F`, `a-f`.
    #[error("invalid hex digit")]
    InvalidDigit,
}
