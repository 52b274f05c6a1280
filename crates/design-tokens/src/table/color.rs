//! Color token tables keyed by category and mode.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// The semantic color categories every token set defines.
///
/// Declaration order is the canonical order used for maps and reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorCategory {
    Background,
    Text,
    Icon,
    Border,
    Accent,
    Interactive,
}

impl ColorCategory {
    /// All categories in canonical order.
    pub const ALL: [ColorCategory; 6] = [
        ColorCategory::Background,
        ColorCategory::Text,
        ColorCategory::Icon,
        ColorCategory::Border,
        ColorCategory::Accent,
        ColorCategory::Interactive,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ColorCategory::Background => "background",
            ColorCategory::Text => "text",
            ColorCategory::Icon => "icon",
            ColorCategory::Border => "border",
            ColorCategory::Accent => "accent",
            ColorCategory::Interactive => "interactive",
        }
    }
}

impl std::fmt::Display for ColorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown color category '{}'", s))
    }
}

/// A theming variant of the same semantic token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mode {
    Light,
    Dark,
    HighContrast,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Light, Mode::Dark, Mode::HighContrast];

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Light => "light",
            Mode::Dark => "dark",
            Mode::HighContrast => "highContrast",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Light and dark hex mappings for one color category.
///
/// Either side may be absent in a hand-written document; the builder treats
/// `light` as the authoritative key set and the validator reports gaps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorModes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub light: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark: Option<BTreeMap<String, String>>,
}

impl ColorModes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a key with both its light and dark hex values.
    pub fn add(mut self, key: &str, light: &str, dark: &str) -> Self {
        self.light
            .get_or_insert_with(BTreeMap::new)
            .insert(key.to_string(), light.to_string());
        self.dark
            .get_or_insert_with(BTreeMap::new)
            .insert(key.to_string(), dark.to_string());
        self
    }

    /// Returns the mapping for a stored mode. High contrast has no table of its own.
    pub fn mode(&self, mode: Mode) -> Option<&BTreeMap<String, String>> {
        match mode {
            Mode::Light => self.light.as_ref(),
            Mode::Dark => self.dark.as_ref(),
            Mode::HighContrast => None,
        }
    }
}

/// Color tokens for every category.
pub type ColorTable = BTreeMap<ColorCategory, ColorModes>;
