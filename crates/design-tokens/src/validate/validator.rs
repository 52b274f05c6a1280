//! The token validator.
//!
//! A pass walks the alias map against the token tree and reports, in order:
//! missing categories, missing modes, unresolved references, malformed
//! colors, and contrast violations. It never fails; a clean token set
//! yields an empty list.

use std::collections::{BTreeMap, HashSet};

use log::{debug, info, warn};

use super::config::{ColorRef, ContrastCheck, ValidationConfig};
use super::error::ValidationError;
use crate::alias::{AliasMap, AliasTarget};
use crate::color::{pair_contrast, HexColor};
use crate::table::{ColorCategory, Mode, TokenNode, TokenTables, TokenValue};

/// Checks token tables for consistency.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidationConfig,
}

/// Where a color value came from, for error messages and de-duplication.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum ColorSource {
    Path(String),
    Literal(ColorCategory, String, Mode),
}

impl ColorSource {
    fn describe(&self) -> String {
        match self {
            ColorSource::Path(path) => path.clone(),
            ColorSource::Literal(category, key, mode) => {
                format!("{}.{} ({} literal)", category, key, mode)
            }
        }
    }
}

type ColorSlot = (ColorCategory, String, Mode);

impl Validator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Builds a fresh alias map for the tables and validates it.
    pub fn validate(&self, tables: &TokenTables) -> Vec<ValidationError> {
        let aliases = AliasMap::build(tables);
        self.validate_aliases(tables, &aliases)
    }

    /// Validates a prebuilt alias map against the tables it should resolve in.
    pub fn validate_aliases(&self, tables: &TokenTables, aliases: &AliasMap) -> Vec<ValidationError> {
        let tree = tables.to_tree();
        let mut errors = Vec::new();

        check_categories(tables, &mut errors);
        let resolved = check_modes(&tree, aliases, &mut errors);
        check_references(&tree, aliases, &mut errors);
        let colors = check_color_formats(resolved, &mut errors);
        for check in self.config.contrast_checks() {
            check_contrast(check, self.config.contrast_modes(), aliases, &colors, &mut errors);
        }

        info!(
            "validated {} color keys, {} errors",
            aliases.color_key_count(),
            errors.len()
        );
        errors
    }
}

/// Validates the canonical token set with the default configuration.
pub fn validate_tokens() -> Vec<ValidationError> {
    Validator::default().validate(TokenTables::canonical())
}

fn check_categories(tables: &TokenTables, errors: &mut Vec<ValidationError>) {
    for category in ColorCategory::ALL {
        match tables.color_modes(category) {
            Some(modes) if modes.light.is_some() => {}
            Some(_) => errors.push(ValidationError::category_missing(category, true)),
            None => errors.push(ValidationError::category_missing(category, false)),
        }
    }
}

/// Resolves every mode of every color key.
///
/// Returns the resolved values in canonical order. A high-contrast alias
/// that shares its path with an already-failed dark alias is not reported
/// twice.
fn check_modes(
    tree: &TokenNode,
    aliases: &AliasMap,
    errors: &mut Vec<ValidationError>,
) -> Vec<(ColorSlot, ColorSource, TokenValue)> {
    let mut resolved = Vec::new();

    for (category, entries) in &aliases.color {
        for (key, alias) in entries {
            let mut failed: HashSet<&str> = HashSet::new();

            for (mode, target) in alias.iter() {
                let slot = (*category, key.clone(), mode);
                match target {
                    AliasTarget::PathRef(path) => match tree.resolve(path) {
                        Ok(value) => {
                            resolved.push((slot, ColorSource::Path(path.to_string()), value.clone()));
                        }
                        Err(err) => {
                            if !failed.insert(path.as_str()) {
                                continue;
                            }
                            debug!("{}.{} {}: {}", category, key, mode, err);
                            errors.push(ValidationError::mode_missing(*category, key, mode, err));
                        }
                    },
                    AliasTarget::Literal(value) => {
                        let source = ColorSource::Literal(*category, key.clone(), mode);
                        resolved.push((slot, source, value.clone()));
                    }
                }
            }
        }
    }

    resolved
}

fn check_references(tree: &TokenNode, aliases: &AliasMap, errors: &mut Vec<ValidationError>) {
    for (section, entries) in aliases.scalar_sections() {
        for (key, target) in entries {
            let AliasTarget::PathRef(path) = target else {
                continue;
            };
            if let Err(err) = tree.resolve(path) {
                debug!("{}.{}: {}", section, key, err);
                errors.push(ValidationError::reference_unresolved(
                    &format!("{}.{}", section, key),
                    err,
                ));
            }
        }
    }
}

/// Parses resolved color values, reporting each malformed source once.
fn check_color_formats(
    resolved: Vec<(ColorSlot, ColorSource, TokenValue)>,
    errors: &mut Vec<ValidationError>,
) -> BTreeMap<ColorSlot, HexColor> {
    let mut colors = BTreeMap::new();
    let mut reported: HashSet<ColorSource> = HashSet::new();

    for (slot, source, value) in resolved {
        let text = value.to_string();
        let parsed = match &value {
            TokenValue::Str(s) => HexColor::parse(s).map_err(|e| e.to_string()),
            TokenValue::Number(_) => Err("expected a string".to_string()),
        };
        match parsed {
            Ok(color) => {
                colors.insert(slot, color);
            }
            Err(reason) => {
                if reported.insert(source.clone()) {
                    errors.push(ValidationError::color_invalid(&source.describe(), &text, reason));
                }
            }
        }
    }

    colors
}

enum Lookup {
    Found,
    /// The category itself is absent; already reported as a missing category.
    CategoryAbsent,
    KeyAbsent,
}

fn lookup(aliases: &AliasMap, color: &ColorRef) -> Lookup {
    match aliases.color.get(&color.category) {
        None => Lookup::CategoryAbsent,
        Some(entries) if entries.contains_key(&color.key) => Lookup::Found,
        Some(_) => Lookup::KeyAbsent,
    }
}

fn check_contrast(
    check: &ContrastCheck,
    modes: &[Mode],
    aliases: &AliasMap,
    colors: &BTreeMap<ColorSlot, HexColor>,
    errors: &mut Vec<ValidationError>,
) {
    for color in [&check.foreground, &check.background] {
        match lookup(aliases, color) {
            Lookup::Found => {}
            Lookup::CategoryAbsent => {
                warn!("skipping {} contrast: category '{}' is not defined", check.label, color.category);
                return;
            }
            Lookup::KeyAbsent => {
                errors.push(ValidationError::reference_unresolved(
                    &format!("{} contrast pairing", check.label),
                    format!("color token '{}' is not defined", color),
                ));
                return;
            }
        }
    }

    let foreground = check.foreground.to_string();
    let background = check.background.to_string();

    for &mode in modes {
        let fg = colors.get(&(check.foreground.category, check.foreground.key.clone(), mode));
        let bg = colors.get(&(check.background.category, check.background.key.clone(), mode));
        let (Some(fg), Some(bg)) = (fg, bg) else {
            warn!("skipping {} contrast in {} mode: color did not resolve", check.label, mode);
            continue;
        };

        let ratio = pair_contrast(fg, bg);
        debug!(
            "{} contrast in {} mode: {} on {} = {:.3}",
            check.label, mode, foreground, background, ratio
        );
        if !check.usage.passes(ratio) {
            errors.push(ValidationError::contrast_insufficient(
                &check.label,
                &foreground,
                &background,
                mode,
                ratio,
                check.usage,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alias::ModeAlias;
    use crate::table::ColorModes;
    use crate::validate::ErrorCode;

    fn canonical() -> TokenTables {
        TokenTables::canonical().clone()
    }

    fn codes(errors: &[ValidationError]) -> Vec<ErrorCode> {
        errors.iter().map(ValidationError::code).collect()
    }

    fn set_color(tables: &mut TokenTables, category: ColorCategory, mode: Mode, key: &str, value: &str) {
        let modes = tables.color.entry(category).or_default();
        let map = match mode {
            Mode::Light => modes.light.get_or_insert_with(Default::default),
            _ => modes.dark.get_or_insert_with(Default::default),
        };
        map.insert(key.to_string(), value.to_string());
    }

    fn remove_color(tables: &mut TokenTables, category: ColorCategory, mode: Mode, key: &str) {
        if let Some(modes) = tables.color.get_mut(&category) {
            let map = match mode {
                Mode::Light => modes.light.as_mut(),
                _ => modes.dark.as_mut(),
            };
            if let Some(map) = map {
                map.remove(key);
            }
        }
    }

    #[test]
    fn test_canonical_is_clean() {
        assert!(validate_tokens().is_empty());
    }

    #[test]
    fn test_missing_dark_reports_once() {
        let mut tables = canonical();
        remove_color(&mut tables, ColorCategory::Accent, Mode::Dark, "primary");

        let errors = Validator::default().validate(&tables);
        assert_eq!(codes(&errors), vec![ErrorCode::TokenModeMissing]);
        assert!(errors[0].message().contains("accent.primary"));
        assert!(errors[0].message().contains("dark"));
    }

    #[test]
    fn test_missing_category() {
        let mut tables = canonical();
        tables.color.remove(&ColorCategory::Icon);

        let errors = Validator::default().validate(&tables);
        assert_eq!(codes(&errors), vec![ErrorCode::TokenCategoryMissing]);
        assert!(errors[0].message().contains("'icon' is not defined"));
    }

    #[test]
    fn test_missing_light_mapping() {
        let mut tables = canonical();
        if let Some(modes) = tables.color.get_mut(&ColorCategory::Icon) {
            modes.light = None;
        }

        let errors = Validator::default().validate(&tables);
        assert_eq!(codes(&errors), vec![ErrorCode::TokenCategoryMissing]);
        assert!(errors[0].message().contains("no light mapping"));
    }

    #[test]
    fn test_missing_background_category_skips_contrast() {
        let mut tables = canonical();
        tables.color.remove(&ColorCategory::Background);

        let errors = Validator::default().validate(&tables);
        assert_eq!(codes(&errors), vec![ErrorCode::TokenCategoryMissing]);
    }

    #[test]
    fn test_invalid_color_reported_once_for_shared_dark_path() {
        let mut tables = canonical();
        set_color(&mut tables, ColorCategory::Icon, Mode::Dark, "secondary", "grey");

        let errors = Validator::default().validate(&tables);
        assert_eq!(codes(&errors), vec![ErrorCode::TokenColorInvalid]);
        assert!(errors[0].message().contains("color.icon.dark.secondary"));
        assert!(errors[0].message().contains("'grey'"));
    }

    #[test]
    fn test_numeric_color_is_invalid() {
        let mut tables = canonical();
        let modes = ColorModes::new().add("primary", "#FFFFFF", "#000000");
        tables.color.insert(ColorCategory::Icon, modes);
        let mut aliases = AliasMap::build(&tables);
        if let Some(entries) = aliases.color.get_mut(&ColorCategory::Icon) {
            entries.insert(
                "weight".into(),
                ModeAlias {
                    light: AliasTarget::literal(400u32),
                    dark: AliasTarget::literal("#000000"),
                    high_contrast: AliasTarget::literal("#000000"),
                },
            );
        }

        let errors = Validator::default().validate_aliases(&tables, &aliases);
        assert_eq!(codes(&errors), vec![ErrorCode::TokenColorInvalid]);
        assert!(errors[0].message().contains("icon.weight (light literal)"));
    }

    #[test]
    fn test_unresolved_scalar_reference() {
        let tables = canonical();
        let mut aliases = AliasMap::build(&tables);
        aliases
            .radius
            .insert("huge".into(), AliasTarget::path("radius.huge"));

        let errors = Validator::default().validate_aliases(&tables, &aliases);
        assert_eq!(codes(&errors), vec![ErrorCode::TokenReferenceUnresolved]);
        assert!(errors[0].message().contains("radius.huge"));
    }

    #[test]
    fn test_low_contrast_focus_ring_fails_in_one_mode_only() {
        let mut tables = canonical();
        set_color(&mut tables, ColorCategory::Border, Mode::Dark, "focus", "#2A2A2A");

        let errors = Validator::default().validate(&tables);
        assert_eq!(codes(&errors), vec![ErrorCode::ContrastInsufficient]);
        assert!(errors[0].message().contains("focus ring contrast in dark mode"));
        assert!(errors[0].message().contains("non-text minimum of 3:1"));
    }

    #[test]
    fn test_text_threshold_is_stricter() {
        // #8F8F8F on white is about 3.23:1: enough for a focus ring, not for text.
        let mut tables = canonical();
        set_color(&mut tables, ColorCategory::Border, Mode::Light, "focus", "#8F8F8F");
        set_color(&mut tables, ColorCategory::Text, Mode::Light, "primary", "#8F8F8F");

        let errors = Validator::default().validate(&tables);
        assert_eq!(codes(&errors), vec![ErrorCode::ContrastInsufficient]);
        assert!(errors[0].message().contains("primary text contrast in light mode"));
        assert!(errors[0].message().contains("text minimum of 4.5:1"));
    }

    #[test]
    fn test_undefined_contrast_token() {
        let mut tables = canonical();
        remove_color(&mut tables, ColorCategory::Border, Mode::Light, "focus");
        remove_color(&mut tables, ColorCategory::Border, Mode::Dark, "focus");

        let errors = Validator::default().validate(&tables);
        assert_eq!(codes(&errors), vec![ErrorCode::TokenReferenceUnresolved]);
        assert!(errors[0].message().contains("border.focus"));
    }

    #[test]
    fn test_errors_accumulate_in_order() {
        let mut tables = canonical();
        tables.color.remove(&ColorCategory::Icon);
        remove_color(&mut tables, ColorCategory::Accent, Mode::Dark, "primary");
        set_color(&mut tables, ColorCategory::Text, Mode::Dark, "primary", "#333333");

        let errors = Validator::default().validate(&tables);
        assert_eq!(
            codes(&errors),
            vec![
                ErrorCode::TokenCategoryMissing,
                ErrorCode::TokenModeMissing,
                ErrorCode::ContrastInsufficient,
            ]
        );
    }

    #[test]
    fn test_without_contrast_ignores_low_contrast() {
        let mut tables = canonical();
        set_color(&mut tables, ColorCategory::Text, Mode::Light, "primary", "#FFFFFF");

        let validator = Validator::new(ValidationConfig::default().without_contrast());
        assert!(validator.validate(&tables).is_empty());
    }
}
