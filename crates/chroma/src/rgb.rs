//! RGB color with optional alpha.

use std::fmt;

use crate::{Channels, ColorError, Hex, Hsl, check_alpha, check_channel};

/// An RGB color: three channels in `0..=255` and an optional alpha in `0..=1`.
///
/// # Examples
///
/// ```
/// use chroma::Rgb;
///
/// let rgb = Rgb::new(240, 180, 60, None).unwrap();
/// let hsl = rgb.to_hsl();
/// assert_eq!((hsl.h(), hsl.s(), hsl.l()), (40, 75, 94));
///
/// assert!(Rgb::new(300, 0, 0, None).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgb {
    r: u8,
    g: u8,
    b: u8,
    a: Option<f64>,
}

impl Rgb {
    pub fn new(r: i32, g: i32, b: i32, a: Option<f64>) -> Result<Self, ColorError> {
        let mut rgb = Self::from_channels(0, 0, 0, None);
        rgb.set_r(r)?;
        rgb.set_g(g)?;
        rgb.set_b(b)?;
        if let Some(a) = a {
            rgb.set_a(a)?;
        }
        Ok(rgb)
    }

    /// Builds a color from channels that are valid by construction.
    pub(crate) fn from_channels(r: u8, g: u8, b: u8, a: Option<f64>) -> Self {
        Self { r, g, b, a }
    }

    pub fn set_r(&mut self, r: i32) -> Result<(), ColorError> {
        self.r = byte(check_channel('r', r, 255)?);
        Ok(())
    }

    pub fn set_g(&mut self, g: i32) -> Result<(), ColorError> {
        self.g = byte(check_channel('g', g, 255)?);
        Ok(())
    }

    pub fn set_b(&mut self, b: i32) -> Result<(), ColorError> {
        self.b = byte(check_channel('b', b, 255)?);
        Ok(())
    }

    pub fn set_a(&mut self, a: f64) -> Result<(), ColorError> {
        self.a = Some(check_alpha(a)?);
        Ok(())
    }

    pub fn r(&self) -> u8 {
        self.r
    }

    pub fn g(&self) -> u8 {
        self.g
    }

    pub fn b(&self) -> u8 {
        self.b
    }

    pub fn a(&self) -> Option<f64> {
        self.a
    }

    pub fn has_alpha(&self) -> bool {
        self.a.is_some()
    }

    /// Converts to HSL. Alpha is carried over unchanged.
    ///
    /// The hue comes from whichever channel is largest, normalized into
    /// `[0, 360)` before rounding. Lightness is the largest normalized channel
    /// and saturation is `(max - min) / max`, or 0 for grays.
    pub fn to_hsl(&self) -> Hsl {
        let r = f64::from(self.r);
        let g = f64::from(self.g);
        let b = f64::from(self.b);

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let mut h = 0.0;
        if delta > 0.0 {
            if max == r && max != g {
                h += (g - b) / delta;
            }
            if max == g && max != b {
                h += 2.0 + (b - r) / delta;
            }
            if max == b && max != r {
                h += 4.0 + (r - g) / delta;
            }
            h /= 6.0;
            if h < 0.0 {
                h += 1.0;
            }
        }

        let s = if delta == 0.0 { 0.0 } else { delta / max };
        let l = max / 255.0;

        Hsl::from_channels(
            (h * 360.0).round() as u16,
            (s * 100.0).round() as u8,
            (l * 100.0).round() as u8,
            self.a,
        )
    }

    /// Converts to a six digit hex color. Alpha is dropped.
    pub fn to_hex(&self) -> Hex {
        Hex::from_channels(
            format!("{:02x}", self.r),
            format!("{:02x}", self.g),
            format!("{:02x}", self.b),
        )
    }
}

// Callers validate against 0..=255 first.
fn byte(value: i32) -> u8 {
    value as u8
}

impl Channels for Rgb {
    type Value = f64;

    const NAMES: &'static [&'static str] = &["r", "g", "b", "a"];

    /// Reads `r`, `g`, `b` or `a`. A color without alpha reports `a` as 1.
    fn channel(&self, name: &str) -> Result<f64, ColorError> {
        match name {
            "r" => Ok(f64::from(self.r)),
            "g" => Ok(f64::from(self.g)),
            "b" => Ok(f64::from(self.b)),
            "a" => Ok(self.a.unwrap_or(1.0)),
            _ => Err(ColorError::UnknownChannel(name.to_string())),
        }
    }

    /// Color channels are truncated to integers before validation.
    fn set_channel(&mut self, name: &str, value: f64) -> Result<(), ColorError> {
        match name {
            "r" => self.set_r(value as i32),
            "g" => self.set_g(value as i32),
            "b" => self.set_b(value as i32),
            "a" => self.set_a(value),
            _ => Err(ColorError::UnknownChannel(name.to_string())),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.a {
            Some(a) => write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, a),
            None => write!(f, "rgb({}, {}, {})", self.r, self.g, self.b),
        }
    }
}
