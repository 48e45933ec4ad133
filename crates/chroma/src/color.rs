//! The [`Color`] enum and color string parsing.

use std::fmt;
use std::str::FromStr;

use nom::{
    IResult,
    branch::alt,
    character::complete::{char, digit1, multispace0, one_of},
    combinator::{all_consuming, map_res, opt, recognize},
    sequence::{delimited, pair, terminated, tuple},
};

use crate::{ColorError, Hex, Hsl, Rgb};

/// Any of the supported color notations.
#[derive(Clone, Debug, PartialEq)]
pub enum Color {
    Rgb(Rgb),
    Hsl(Hsl),
    Hex(Hex),
}

impl Color {
    pub fn rgb(r: i32, g: i32, b: i32, a: Option<f64>) -> Result<Rgb, ColorError> {
        Rgb::new(r, g, b, a)
    }

    pub fn hsl(h: i32, s: i32, l: i32, a: Option<f64>) -> Result<Hsl, ColorError> {
        Hsl::new(h, s, l, a)
    }

    pub fn hex(hex: &str) -> Result<Hex, ColorError> {
        Hex::new(hex)
    }

    /// Parses a CSS color string.
    ///
    /// The input is lowercased, then dispatched on its prefix:
    /// - `rgb(...)` / `rgba(...)`: 3 or 4 comma separated values
    /// - `hsl(...)` / `hsla(...)`: 3 or 4 values, `%` signs allowed
    /// - `#...`: 3 or 6 hex digits
    ///
    /// Anything else, or a function missing either parenthesis, is a
    /// [`ColorError::FormatInvalid`].
    ///
    /// # Examples
    ///
    /// ```
    /// use chroma::{Color, ColorError};
    ///
    /// let Color::Rgb(rgb) = Color::parse("rgba(255, 255, 255, 0.5)").unwrap() else {
    ///     panic!("expected rgb");
    /// };
    /// assert_eq!(rgb.a(), Some(0.5));
    ///
    /// assert!(matches!(Color::parse("bad color"), Err(ColorError::FormatInvalid(_))));
    /// ```
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let lower = input.trim().to_lowercase();

        if lower.starts_with("rgb") {
            let values = function_values(&lower)?;
            let (r, g, b, a) = split_components(&values)?;
            Ok(Self::Rgb(Rgb::new(r, g, b, a)?))
        } else if lower.starts_with("hsl") {
            let values = function_values(&lower)?;
            let (h, s, l, a) = split_components(&values)?;
            Ok(Self::Hsl(Hsl::new(h, s, l, a)?))
        } else if lower.starts_with('#') {
            Ok(Self::Hex(Hex::new(&lower)?))
        } else {
            Err(ColorError::FormatInvalid(format!(
                "expected rgb(), hsl() or #hex, got `{}`",
                input.trim()
            )))
        }
    }

    pub fn to_rgb(&self) -> Rgb {
        match self {
            Self::Rgb(rgb) => *rgb,
            Self::Hsl(hsl) => hsl.to_rgb(),
            Self::Hex(hex) => hex.to_rgb(),
        }
    }

    pub fn to_hsl(&self) -> Hsl {
        match self {
            Self::Rgb(rgb) => rgb.to_hsl(),
            Self::Hsl(hsl) => *hsl,
            Self::Hex(hex) => hex.to_hsl(),
        }
    }

    pub fn to_hex(&self) -> Hex {
        match self {
            Self::Rgb(rgb) => rgb.to_hex(),
            Self::Hsl(hsl) => hsl.to_hex(),
            Self::Hex(hex) => hex.clone(),
        }
    }
}

/// Extracts the comma separated values between the first `(` and the
/// following `)`.
fn function_values(input: &str) -> Result<Vec<f64>, ColorError> {
    let (Some(open), Some(_)) = (input.find('('), input.find(')')) else {
        return Err(ColorError::FormatInvalid(format!(
            "missing parenthesis in `{input}`"
        )));
    };
    let inner = &input[open + 1..];
    let Some(close) = inner.find(')') else {
        return Err(ColorError::FormatInvalid(format!(
            "missing closing parenthesis in `{input}`"
        )));
    };

    inner[..close]
        .split(',')
        .map(|value| {
            all_consuming(component)(value)
                .map(|(_, number)| number)
                .map_err(|_| {
                    ColorError::FormatInvalid(format!("invalid color component `{}`", value.trim()))
                })
        })
        .collect()
}

/// Splits 3 or 4 values into integer channels and an optional alpha.
/// Channels are truncated toward zero.
fn split_components(values: &[f64]) -> Result<(i32, i32, i32, Option<f64>), ColorError> {
    match *values {
        [x, y, z] => Ok((x as i32, y as i32, z as i32, None)),
        [x, y, z, a] => Ok((x as i32, y as i32, z as i32, Some(a))),
        _ => Err(ColorError::FormatInvalid(format!(
            "expected 3 or 4 color components, got {}",
            values.len()
        ))),
    }
}

/// Parse a floating point or integer number.
fn parse_number(input: &str) -> IResult<&str, f64> {
    map_res(
        recognize(tuple((
            opt(one_of("+-")),
            alt((
                recognize(pair(digit1, opt(pair(char('.'), digit1)))),
                recognize(pair(char('.'), digit1)),
            )),
        ))),
        |s: &str| s.parse::<f64>(),
    )(input)
}

/// A single component, optionally followed by `%`, with surrounding space.
fn component(input: &str) -> IResult<&str, f64> {
    delimited(
        multispace0,
        terminated(parse_number, opt(char('%'))),
        multispace0,
    )(input)
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        Self::Hsl(hsl)
    }
}

impl From<Hex> for Color {
    fn from(hex: Hex) -> Self {
        Self::Hex(hex)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb(rgb) => fmt::Display::fmt(rgb, f),
            Self::Hsl(hsl) => fmt::Display::fmt(hsl, f),
            Self::Hex(hex) => fmt::Display::fmt(hex, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_accepts_percent_and_space() {
        assert_eq!(component(" 100% ").unwrap(), ("", 100.0));
        assert_eq!(component("0.5").unwrap(), ("", 0.5));
        assert_eq!(component(".25").unwrap(), ("", 0.25));
        assert!(all_consuming(component)("abc").is_err());
    }

    #[test]
    fn test_wrong_component_count() {
        assert!(matches!(
            Color::parse("rgb(255, 0)"),
            Err(ColorError::FormatInvalid(_))
        ));
        assert!(matches!(
            Color::parse("rgb(1, 2, 3, 0.5, 9)"),
            Err(ColorError::FormatInvalid(_))
        ));
    }

    #[test]
    fn test_out_of_range_component_is_range_error() {
        assert!(matches!(
            Color::parse("rgb(256, 0, 0)"),
            Err(ColorError::RangeInvalid { channel: 'r', .. })
        ));
        assert!(matches!(
            Color::parse("hsl(10, 150%, 50%)"),
            Err(ColorError::RangeInvalid { channel: 's', .. })
        ));
    }

    #[test]
    fn test_uppercase_input() {
        let color = Color::parse("RGB(10, 20, 30)").unwrap();
        assert_eq!(color.to_string(), "rgb(10, 20, 30)");
    }
}
