//! Color parsing and WCAG contrast math.

mod contrast;
mod hex;

pub use contrast::{
    channel_to_linear, contrast_ratio, pair_contrast, relative_luminance, ContrastUsage,
    NON_TEXT_MIN_CONTRAST, TEXT_MIN_CONTRAST,
};
pub use hex::{ColorParseError, HexColor, Rgb};
