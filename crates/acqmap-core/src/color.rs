use crate::error::{Error, Result};

/// An opaque sRGB color as produced by a color picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or the `#rgb` shorthand.
    pub fn parse_hex(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidColor(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize, len: usize| u8::from_str_radix(&hex[i..i + len], 16);
        match hex.len() {
            6 => Ok(Self::new(
                channel(0, 2).map_err(|_| invalid())?,
                channel(2, 2).map_err(|_| invalid())?,
                channel(4, 2).map_err(|_| invalid())?,
            )),
            3 => {
                let r = channel(0, 1).map_err(|_| invalid())?;
                let g = channel(1, 1).map_err(|_| invalid())?;
                let b = channel(2, 1).map_err(|_| invalid())?;
                Ok(Self::new(r * 17, g * 17, b * 17))
            }
            _ => Err(invalid()),
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// CSS color string with the given opacity, clamped to [0, 1].
    pub fn to_rgba_css(self, opacity: f64) -> String {
        let a = if opacity.is_finite() {
            opacity.clamp(0.0, 1.0)
        } else {
            1.0
        };
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, a)
    }
}
