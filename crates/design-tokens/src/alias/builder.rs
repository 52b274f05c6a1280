//! Alias map construction.
//!
//! Every alias is derived from the token tables themselves, so there is no
//! hand-maintained duplication between categories. The builders never
//! resolve or validate; gaps surface later in the validator.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::entry::{AliasTarget, ModeAlias, TokenPath};
use crate::table::{space_step_key, ColorCategory, Mode, TokenTables, TokenValue, TypographyTable};

/// Semantic token name to alias, for every category.
///
/// Ordered maps keep serialization byte-identical for identical tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AliasMap {
    pub color: BTreeMap<ColorCategory, BTreeMap<String, ModeAlias>>,
    pub space: BTreeMap<String, AliasTarget>,
    pub radius: BTreeMap<String, AliasTarget>,
    pub shadow: BTreeMap<String, AliasTarget>,
    pub size: BTreeMap<String, AliasTarget>,
    #[serde(rename = "type")]
    pub typography: BTreeMap<String, AliasTarget>,
    pub motion: BTreeMap<String, AliasTarget>,
}

impl AliasMap {
    /// Builds the alias map for a set of tables.
    pub fn build(tables: &TokenTables) -> Self {
        build_alias_map(tables)
    }

    /// Number of color keys across all categories.
    pub fn color_key_count(&self) -> usize {
        self.color.values().map(BTreeMap::len).sum()
    }

    /// Non-color aliases tagged with their section name, in section order.
    pub fn scalar_sections(&self) -> [(&'static str, &BTreeMap<String, AliasTarget>); 6] {
        [
            ("space", &self.space),
            ("radius", &self.radius),
            ("shadow", &self.shadow),
            ("size", &self.size),
            ("type", &self.typography),
            ("motion", &self.motion),
        ]
    }
}

fn color_path(category: ColorCategory, mode: Mode, key: &str) -> TokenPath {
    TokenPath::from_segments(["color", category.as_str(), mode.as_str(), key])
}

/// Builds light/dark/high-contrast aliases for one color category.
///
/// Returns `None` when the category or its `light` mapping is absent. The
/// key set comes from `light`; a key missing from `dark` still receives a
/// dark reference. High contrast aliases the dark path until dedicated
/// high-contrast tokens exist.
pub fn build_mode_map(
    tables: &TokenTables,
    category: ColorCategory,
) -> Option<BTreeMap<String, ModeAlias>> {
    let light = tables.color_modes(category)?.light.as_ref()?;

    let map = light
        .keys()
        .map(|key| {
            let dark = color_path(category, Mode::Dark, key);
            let alias = ModeAlias {
                light: AliasTarget::PathRef(color_path(category, Mode::Light, key)),
                dark: AliasTarget::PathRef(dark.clone()),
                high_contrast: AliasTarget::PathRef(dark),
            };
            (key.clone(), alias)
        })
        .collect();

    Some(map)
}

/// Builds `space.<step>` references for each spacing step.
pub fn build_space_map(values: &[f64]) -> BTreeMap<String, AliasTarget> {
    values
        .iter()
        .map(|step| {
            let key = space_step_key(*step);
            let target = AliasTarget::PathRef(TokenPath::from_segments(["space", key.as_str()]));
            (key, target)
        })
        .collect()
}

/// Builds `<prefix>.<key>` references for a flat record.
pub fn build_record_map<V>(record: &BTreeMap<String, V>, prefix: &[&str]) -> BTreeMap<String, AliasTarget> {
    record
        .keys()
        .map(|key| {
            let segments = prefix.iter().copied().chain([key.as_str()]);
            let target = AliasTarget::PathRef(TokenPath::from_segments(segments));
            (key.clone(), target)
        })
        .collect()
}

/// Builds typography references.
///
/// `fontFamily` is platform and mode invariant, so it points at
/// `type.fontFamily` rather than `type.web.fontFamily`.
pub fn build_typography_map(record: &TypographyTable) -> BTreeMap<String, AliasTarget> {
    let mut map = build_record_map(&record.web, &["type", "web"]);
    if record.font_family.is_some() {
        map.insert("fontFamily".to_string(), AliasTarget::path("type.fontFamily"));
    }
    map
}

/// Motion tokens are constants and alias their literal value directly.
pub fn build_motion_map(record: &BTreeMap<String, TokenValue>) -> BTreeMap<String, AliasTarget> {
    record
        .iter()
        .map(|(key, value)| (key.clone(), AliasTarget::Literal(value.clone())))
        .collect()
}

/// Assembles the full alias map from every category's builder.
pub fn build_alias_map(tables: &TokenTables) -> AliasMap {
    let color = ColorCategory::ALL
        .into_iter()
        .filter_map(|category| build_mode_map(tables, category).map(|map| (category, map)))
        .collect();

    AliasMap {
        color,
        space: build_space_map(&tables.space),
        radius: build_record_map(&tables.radius, &["radius"]),
        shadow: build_record_map(&tables.shadow, &["shadow"]),
        size: build_record_map(&tables.size, &["size"]),
        typography: build_typography_map(&tables.typography),
        motion: build_motion_map(&tables.motion),
    }
}
