//! HSL color with optional alpha.

use std::fmt;

use crate::{Channels, ColorError, Hex, Rgb, check_alpha, check_channel};

/// An HSL color: hue in `0..=360`, saturation and lightness in `0..=100`,
/// and an optional alpha in `0..=1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    h: u16,
    s: u8,
    l: u8,
    a: Option<f64>,
}

impl Hsl {
    pub fn new(h: i32, s: i32, l: i32, a: Option<f64>) -> Result<Self, ColorError> {
        let mut hsl = Self::from_channels(0, 0, 0, None);
        hsl.set_h(h)?;
        hsl.set_s(s)?;
        hsl.set_l(l)?;
        if let Some(a) = a {
            hsl.set_a(a)?;
        }
        Ok(hsl)
    }

    pub(crate) fn from_channels(h: u16, s: u8, l: u8, a: Option<f64>) -> Self {
        Self { h, s, l, a }
    }

    pub fn set_h(&mut self, h: i32) -> Result<(), ColorError> {
        self.h = check_channel('h', h, 360)? as u16;
        Ok(())
    }

    pub fn set_s(&mut self, s: i32) -> Result<(), ColorError> {
        self.s = check_channel('s', s, 100)? as u8;
        Ok(())
    }

    pub fn set_l(&mut self, l: i32) -> Result<(), ColorError> {
        self.l = check_channel('l', l, 100)? as u8;
        Ok(())
    }

    pub fn set_a(&mut self, a: f64) -> Result<(), ColorError> {
        self.a = Some(check_alpha(a)?);
        Ok(())
    }

    pub fn h(&self) -> u16 {
        self.h
    }

    pub fn s(&self) -> u8 {
        self.s
    }

    pub fn l(&self) -> u8 {
        self.l
    }

    pub fn a(&self) -> Option<f64> {
        self.a
    }

    pub fn has_alpha(&self) -> bool {
        self.a.is_some()
    }

    /// Converts to RGB using the six-sector algorithm. Alpha is carried over.
    ///
    /// Each sector spans 60 degrees of hue; a hue of exactly 360 lands back in
    /// the first sector.
    pub fn to_rgb(&self) -> Rgb {
        let s = f64::from(self.s) / 100.0;
        let v = f64::from(self.l) / 100.0;

        if self.s == 0 {
            let gray = to_byte(v);
            return Rgb::from_channels(gray, gray, gray, self.a);
        }

        let mut h = f64::from(self.h) / 360.0 * 6.0;
        if h == 6.0 {
            h = 0.0;
        }
        let sector = h.floor();
        let fraction = h - sector;

        let v1 = v * (1.0 - s);
        let v2 = v * (1.0 - s * fraction);
        let v3 = v * (1.0 - s * (1.0 - fraction));

        let (r, g, b) = match sector as u8 {
            0 => (v, v3, v1),
            1 => (v2, v, v1),
            2 => (v1, v, v3),
            3 => (v1, v2, v),
            4 => (v3, v1, v),
            _ => (v, v1, v2),
        };

        Rgb::from_channels(to_byte(r), to_byte(g), to_byte(b), self.a)
    }

    /// Converts to hex by way of RGB. Alpha is dropped.
    pub fn to_hex(&self) -> Hex {
        self.to_rgb().to_hex()
    }
}

fn to_byte(fraction: f64) -> u8 {
    (fraction * 255.0).round() as u8
}

impl Channels for Hsl {
    type Value = f64;

    const NAMES: &'static [&'static str] = &["h", "s", "l", "a"];

    /// Reads `h`, `s`, `l` or `a`. A color without alpha reports `a` as 1.
    fn channel(&self, name: &str) -> Result<f64, ColorError> {
        match name {
            "h" => Ok(f64::from(self.h)),
            "s" => Ok(f64::from(self.s)),
            "l" => Ok(f64::from(self.l)),
            "a" => Ok(self.a.unwrap_or(1.0)),
            _ => Err(ColorError::UnknownChannel(name.to_string())),
        }
    }

    fn set_channel(&mut self, name: &str, value: f64) -> Result<(), ColorError> {
        match name {
            "h" => self.set_h(value as i32),
            "s" => self.set_s(value as i32),
            "l" => self.set_l(value as i32),
            "a" => self.set_a(value),
            _ => Err(ColorError::UnknownChannel(name.to_string())),
        }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.a {
            Some(a) => write!(f, "hsla({}, {}%, {}%, {})", self.h, self.s, self.l, a),
            None => write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l),
        }
    }
}
