//! Hexadecimal color notation.

use std::fmt;

use crate::{Channels, ColorError, Hsl, Rgb};

/// A hex color such as `#f0b43c` or the short form `#fff`.
///
/// Channels are kept as the lowercase digit strings they were written with:
/// one digit each for the short form, two for the long form. A single digit
/// is doubled when the color is converted (`f` becomes `ff`, i.e. 255).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hex {
    r: String,
    g: String,
    b: String,
    hex: String,
}

impl Hex {
    /// Parses a 3 or 6 digit hex string, with or without a leading `#`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chroma::Hex;
    ///
    /// let hex = Hex::new("#FFF").unwrap();
    /// assert_eq!(hex.hex(), "fff");
    /// assert_eq!(hex.to_rgb().r(), 255);
    ///
    /// assert!(Hex::new("33").is_err());
    /// assert!(Hex::new("gggggg").is_err());
    /// ```
    pub fn new(hex: &str) -> Result<Self, ColorError> {
        let mut color = Self::from_channels(String::new(), String::new(), String::new());
        color.set_hex(hex)?;
        Ok(color)
    }

    pub(crate) fn from_channels(r: String, g: String, b: String) -> Self {
        let hex = format!("{r}{g}{b}");
        Self { r, g, b, hex }
    }

    /// Returns true when every character is a lowercase hex digit.
    pub fn is_valid(hex: &str) -> bool {
        hex.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'))
    }

    /// Replaces all three channels from a full hex string.
    pub fn set_hex(&mut self, hex: &str) -> Result<(), ColorError> {
        let hex = hex.to_lowercase();
        let hex = hex.strip_prefix('#').unwrap_or(&hex);

        if hex.len() != 3 && hex.len() != 6 {
            return Err(ColorError::FormatInvalid(format!(
                "hex color must have 3 or 6 digits, got `{hex}`"
            )));
        }
        if !Self::is_valid(hex) {
            return Err(ColorError::FormatInvalid(format!(
                "hex color contains non-hex digits: `{hex}`"
            )));
        }

        let width = hex.len() / 3;
        self.r = hex[..width].to_string();
        self.g = hex[width..width * 2].to_string();
        self.b = hex[width * 2..].to_string();
        self.hex = hex.to_string();
        Ok(())
    }

    pub fn set_r(&mut self, r: &str) -> Result<(), ColorError> {
        self.r = check_digits('r', r)?;
        self.sync();
        Ok(())
    }

    pub fn set_g(&mut self, g: &str) -> Result<(), ColorError> {
        self.g = check_digits('g', g)?;
        self.sync();
        Ok(())
    }

    pub fn set_b(&mut self, b: &str) -> Result<(), ColorError> {
        self.b = check_digits('b', b)?;
        self.sync();
        Ok(())
    }

    /// Rebuilds the full string after a single channel changed. Mixed widths
    /// are widened to the six digit form.
    fn sync(&mut self) {
        let short = [&self.r, &self.g, &self.b].iter().all(|c| c.len() == 1);
        self.hex = if short {
            format!("{}{}{}", self.r, self.g, self.b)
        } else {
            format!("{}{}{}", widen(&self.r), widen(&self.g), widen(&self.b))
        };
    }

    /// Full digit string without the `#`.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn r(&self) -> &str {
        &self.r
    }

    pub fn g(&self) -> &str {
        &self.g
    }

    pub fn b(&self) -> &str {
        &self.b
    }

    pub fn to_rgb(&self) -> Rgb {
        Rgb::from_channels(
            channel_value(&self.r),
            channel_value(&self.g),
            channel_value(&self.b),
            None,
        )
    }

    pub fn to_hsl(&self) -> Hsl {
        self.to_rgb().to_hsl()
    }
}

fn check_digits(channel: char, digits: &str) -> Result<String, ColorError> {
    let digits = digits.to_lowercase();
    if digits.is_empty() || digits.len() > 2 || !Hex::is_valid(&digits) {
        return Err(ColorError::FormatInvalid(format!(
            "hex channel `{channel}` must be one or two hex digits, got `{digits}`"
        )));
    }
    Ok(digits)
}

fn widen(channel: &str) -> String {
    if channel.len() == 1 {
        channel.repeat(2)
    } else {
        channel.to_string()
    }
}

fn channel_value(channel: &str) -> u8 {
    widen(channel)
        .chars()
        .filter_map(|c| c.to_digit(16))
        .fold(0u8, |acc, digit| acc.wrapping_mul(16).wrapping_add(digit as u8))
}

impl Channels for Hex {
    type Value = String;

    const NAMES: &'static [&'static str] = &["r", "g", "b", "hex"];

    fn channel(&self, name: &str) -> Result<String, ColorError> {
        match name {
            "r" => Ok(self.r.clone()),
            "g" => Ok(self.g.clone()),
            "b" => Ok(self.b.clone()),
            "hex" => Ok(self.hex.clone()),
            _ => Err(ColorError::UnknownChannel(name.to_string())),
        }
    }

    fn set_channel(&mut self, name: &str, value: String) -> Result<(), ColorError> {
        match name {
            "r" => self.set_r(&value),
            "g" => self.set_g(&value),
            "b" => self.set_b(&value),
            "hex" => self.set_hex(&value),
            _ => Err(ColorError::UnknownChannel(name.to_string())),
        }
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.hex)
    }
}
