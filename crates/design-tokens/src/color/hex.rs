//! Hex color parsing and alpha compositing.

use thiserror::Error;

/// A color parsed from `#RRGGBB` or `#RRGGBBAA`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Opacity normalized to `[0, 1]`.
    pub alpha: f64,
}

/// An opaque color with channels in `[0, 255]`.
///
/// Channels stay fractional after compositing; nothing is rounded before
/// luminance is computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color '{0}' must start with '#'")]
    MissingHash(String),
    #[error("color '{0}' must have 6 or 8 hex digits")]
    InvalidLength(String),
    #[error("color '{0}' contains a non-hex digit")]
    InvalidDigit(String),
}

impl HexColor {
    /// Parses a 6- or 8-digit hex color. The 8-digit form carries alpha in the last byte.
    ///
    /// ```rust
    /// use design_tokens::HexColor;
    ///
    /// let color = HexColor::parse("#0D0D0D80").unwrap();
    /// assert_eq!(color.r, 13);
    /// assert!((color.alpha - 128.0 / 255.0).abs() < f64::EPSILON);
    /// ```
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let digits = input
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(input.to_string()))?;

        if !digits.is_ascii() || !matches!(digits.len(), 6 | 8) {
            return Err(ColorParseError::InvalidLength(input.to_string()));
        }

        let byte = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ColorParseError::InvalidDigit(input.to_string()))
        };

        let alpha = if digits.len() == 8 {
            f64::from(byte(6)?) / 255.0
        } else {
            1.0
        };

        Ok(Self {
            r: byte(0)?,
            g: byte(2)?,
            b: byte(4)?,
            alpha,
        })
    }

    /// The color's channels, ignoring alpha.
    pub fn opaque(&self) -> Rgb {
        Rgb {
            r: f64::from(self.r),
            g: f64::from(self.g),
            b: f64::from(self.b),
        }
    }

    /// Blends this color over an opaque background: `fg * a + bg * (1 - a)`.
    pub fn composite_over(&self, background: Rgb) -> Rgb {
        let fg = self.opaque();
        if self.alpha >= 1.0 {
            return fg;
        }
        let a = self.alpha;
        let blend = |f: f64, b: f64| f * a + b * (1.0 - a);
        Rgb {
            r: blend(fg.r, background.r),
            g: blend(fg.g, background.g),
            b: blend(fg.b, background.b),
        }
    }
}

impl std::str::FromStr for HexColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HexColor::parse(s)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb {
            r: f64::from(r),
            g: f64::from(g),
            b: f64::from(b),
        }
    }
}
