//! Error types for color construction and parsing.

use thiserror::Error;

/// Errors that can occur when building, editing or parsing a color.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorError {
    /// A channel or alpha value lies outside its valid range.
    ///
    /// Values are never clamped; the caller decides what to do instead.
    #[error("value of `{channel}` must be between {min} and {max}, got {value}")]
    RangeInvalid {
        channel: char,
        value: f64,
        min: f64,
        max: f64,
    },

    /// The input could not be read as a color.
    #[error("invalid color format: {0}")]
    FormatInvalid(String),

    /// Name-based access used a channel the color does not have.
    #[error("unknown channel `{0}`")]
    UnknownChannel(String),

    /// Named channels can be reassigned but never removed.
    #[error("cannot remove channel `{0}` from a color value")]
    ImmutablePropertyViolation(String),
}
