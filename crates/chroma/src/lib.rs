//! Color values for stylesheets.
//!
//! This crate models the three color notations CSS authors reach for most:
//!
//! - [`Rgb`]: `rgb(240, 180, 60)` / `rgba(240, 180, 60, 0.5)`
//! - [`Hsl`]: `hsl(40, 75%, 94%)` / `hsla(40, 75%, 94%, 0.5)`
//! - [`Hex`]: `#f0b43c` / `#fff`
//!
//! Every representation converts into the other two. Channels are validated
//! whenever they are set: an out-of-range value is an error, never clamped.
//!
//! # Usage
//!
//! ```
//! use chroma::{Color, Rgb};
//!
//! let rgb = Rgb::new(240, 180, 60, Some(0.5)).unwrap();
//! assert_eq!(rgb.to_string(), "rgba(240, 180, 60, 0.5)");
//! assert_eq!(rgb.to_hex().to_string(), "#f0b43c");
//!
//! let parsed = Color::parse("hsla(240, 100%, 100%, 0.5)").unwrap();
//! assert!(matches!(parsed, Color::Hsl(_)));
//! ```
//!
//! # Lightness
//!
//! [`Hsl`] follows the brightness model: `l` is the largest normalized
//! channel and `s` is `(max - min) / max`. Conversions in both directions use
//! that model. `h`, `s` and `l` are whole numbers, so `Rgb -> Hsl -> Rgb` can
//! drift by up to three units per channel. Grays drift by at most one.

pub mod color;
pub mod error;
pub mod hex;
pub mod hsl;
pub mod rgb;

pub use color::Color;
pub use error::ColorError;
pub use hex::Hex;
pub use hsl::Hsl;
pub use rgb::Rgb;

/// Name-based access to the channels of a color value.
///
/// Channels can be read and reassigned by name. They can never be removed:
/// [`Channels::remove_channel`] fails for every name.
pub trait Channels {
    /// Type handed out and accepted for a single channel.
    type Value;

    /// Names this color answers to, in display order.
    const NAMES: &'static [&'static str];

    /// Reads a channel by name.
    fn channel(&self, name: &str) -> Result<Self::Value, ColorError>;

    /// Assigns a channel by name, validating the new value.
    fn set_channel(&mut self, name: &str, value: Self::Value) -> Result<(), ColorError>;

    fn has_channel(&self, name: &str) -> bool {
        Self::NAMES.contains(&name)
    }

    fn remove_channel(&mut self, name: &str) -> Result<(), ColorError> {
        if self.has_channel(name) {
            Err(ColorError::ImmutablePropertyViolation(name.to_string()))
        } else {
            Err(ColorError::UnknownChannel(name.to_string()))
        }
    }
}

/// Validates an integer channel against an inclusive range.
pub(crate) fn check_channel(channel: char, value: i32, max: i32) -> Result<i32, ColorError> {
    if (0..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ColorError::RangeInvalid {
            channel,
            value: f64::from(value),
            min: 0.0,
            max: f64::from(max),
        })
    }
}

/// Validates an alpha value; NaN is rejected along with anything outside `0..=1`.
pub(crate) fn check_alpha(value: f64) -> Result<f64, ColorError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ColorError::RangeInvalid {
            channel: 'a',
            value,
            min: 0.0,
            max: 1.0,
        })
    }
}
