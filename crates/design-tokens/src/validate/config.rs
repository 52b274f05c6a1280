//! Validation configuration: which contrast pairings to check.

use serde::Serialize;

use crate::color::ContrastUsage;
use crate::table::{ColorCategory, Mode};

/// A semantic color token, e.g. `border.focus`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorRef {
    pub category: ColorCategory,
    pub key: String,
}

impl ColorRef {
    pub fn new(category: ColorCategory, key: &str) -> Self {
        Self {
            category,
            key: key.to_string(),
        }
    }
}

impl std::fmt::Display for ColorRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.category, self.key)
    }
}

/// A foreground/background pairing checked for contrast.
///
/// The usage, and with it the threshold, is stated by whoever defines the
/// check; it is never inferred from the token's category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrastCheck {
    pub label: String,
    pub foreground: ColorRef,
    pub background: ColorRef,
    pub usage: ContrastUsage,
}

impl ContrastCheck {
    /// A pairing for focus rings, borders and other non-text UI (3:1).
    pub fn non_text(label: &str, foreground: ColorRef, background: ColorRef) -> Self {
        Self {
            label: label.to_string(),
            foreground,
            background,
            usage: ContrastUsage::NonText,
        }
    }

    /// A pairing for body text (4.5:1).
    pub fn text(label: &str, foreground: ColorRef, background: ColorRef) -> Self {
        Self {
            label: label.to_string(),
            foreground,
            background,
            usage: ContrastUsage::Text,
        }
    }

    /// Focus ring against the page background.
    pub fn focus_ring() -> Self {
        Self::non_text(
            "focus ring",
            ColorRef::new(ColorCategory::Border, "focus"),
            ColorRef::new(ColorCategory::Background, "primary"),
        )
    }

    /// Primary text against the primary background.
    pub fn primary_text() -> Self {
        Self::text(
            "primary text",
            ColorRef::new(ColorCategory::Text, "primary"),
            ColorRef::new(ColorCategory::Background, "primary"),
        )
    }
}

/// Settings for a validation pass.
///
/// ```rust
/// use design_tokens::{ColorCategory, ColorRef, ContrastCheck, ValidationConfig};
///
/// let config = ValidationConfig::default().with_check(ContrastCheck::non_text(
///     "danger border",
///     ColorRef::new(ColorCategory::Accent, "danger"),
///     ColorRef::new(ColorCategory::Background, "primary"),
/// ));
/// assert_eq!(config.contrast_checks().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationConfig {
    contrast_checks: Vec<ContrastCheck>,
    contrast_modes: Vec<Mode>,
}

impl ValidationConfig {
    /// A configuration with no contrast checks.
    pub fn empty() -> Self {
        Self {
            contrast_checks: Vec::new(),
            contrast_modes: vec![Mode::Light, Mode::Dark],
        }
    }

    pub fn with_check(mut self, check: ContrastCheck) -> Self {
        self.contrast_checks.push(check);
        self
    }

    /// Drops every contrast check.
    pub fn without_contrast(mut self) -> Self {
        self.contrast_checks.clear();
        self
    }

    /// Overrides the modes contrast is evaluated in (light and dark by default).
    pub fn with_contrast_modes(mut self, modes: impl IntoIterator<Item = Mode>) -> Self {
        self.contrast_modes = modes.into_iter().collect();
        self
    }

    pub fn contrast_checks(&self) -> &[ContrastCheck] {
        &self.contrast_checks
    }

    pub fn contrast_modes(&self) -> &[Mode] {
        &self.contrast_modes
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self::empty()
            .with_check(ContrastCheck::focus_ring())
            .with_check(ContrastCheck::primary_text())
    }
}
