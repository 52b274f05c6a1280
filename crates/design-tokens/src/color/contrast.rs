//! WCAG 2 relative luminance and contrast ratio.
//!
//! See <https://www.w3.org/TR/WCAG20/#relativeluminancedef> and
//! <https://www.w3.org/TR/WCAG20/#contrast-ratiodef>.

use serde::Serialize;

use super::hex::{HexColor, Rgb};

/// Minimum ratio for non-text UI such as focus rings and borders.
pub const NON_TEXT_MIN_CONTRAST: f64 = 3.0;

/// Minimum ratio for body text (WCAG AA).
pub const TEXT_MIN_CONTRAST: f64 = 4.5;

/// What a color pairing is used for, which decides its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContrastUsage {
    NonText,
    Text,
}

impl ContrastUsage {
    pub fn threshold(self) -> f64 {
        match self {
            ContrastUsage::NonText => NON_TEXT_MIN_CONTRAST,
            ContrastUsage::Text => TEXT_MIN_CONTRAST,
        }
    }

    /// A ratio exactly at the threshold passes.
    pub fn passes(self, ratio: f64) -> bool {
        ratio >= self.threshold()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContrastUsage::NonText => "non-text",
            ContrastUsage::Text => "text",
        }
    }
}

/// Converts a `[0, 255]` channel to linear light.
pub fn channel_to_linear(channel: f64) -> f64 {
    let c = channel / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

pub fn relative_luminance(color: Rgb) -> f64 {
    0.2126 * channel_to_linear(color.r)
        + 0.7152 * channel_to_linear(color.g)
        + 0.0722 * channel_to_linear(color.b)
}

/// Contrast between two opaque colors; symmetric and always `>= 1`.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let lighter = la.max(lb);
    let darker = la.min(lb);
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast of a possibly translucent foreground drawn on a background.
///
/// The background is treated as opaque; the foreground is composited over it first.
pub fn pair_contrast(foreground: &HexColor, background: &HexColor) -> f64 {
    let bg = background.opaque();
    contrast_ratio(foreground.composite_over(bg), bg)
}
