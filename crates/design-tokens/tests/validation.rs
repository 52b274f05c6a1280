//! Integration tests for alias building and token validation.
//!
//! These exercise the public API end to end: canonical tables, modified
//! tables, schema files on disk, and the rendered report.

use std::collections::BTreeMap;
use std::fs;

use design_tokens::validate::DEFAULT_SCHEMA_PATH;
use design_tokens::{
    build_alias_map, contrast_ratio, pair_contrast, render_report, validate_build,
    validate_tokens, AliasTarget, ColorCategory, ColorModes, ContrastUsage, ErrorCode, HexColor,
    Mode, OutputMode, Rgb, SchemaContract, TokenDocument, TokenTables, Validator,
};
use proptest::prelude::*;

fn schema_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("schema")).unwrap();
    fs::write(
        dir.path().join("schema/tokens.schema.json"),
        r#"{ "$id": "tokens", "type": "object" }"#,
    )
    .unwrap();
    fs::write(dir.path().join("schema/VERSION"), "2025.1\n").unwrap();
    dir
}

fn contract(dir: &tempfile::TempDir) -> SchemaContract {
    SchemaContract::new(
        dir.path().join("schema/tokens.schema.json"),
        dir.path().join("schema/VERSION"),
    )
    .with_pinned_reference(DEFAULT_SCHEMA_PATH)
}

#[test]
fn test_builder_and_validator_are_deterministic() {
    let tables = TokenTables::canonical();
    let first = serde_json::to_string(&build_alias_map(tables)).unwrap();
    let second = serde_json::to_string(&build_alias_map(tables)).unwrap();
    assert_eq!(first, second);

    let mut broken = tables.clone();
    broken.color.remove(&ColorCategory::Icon);
    if let Some(dark) = broken
        .color
        .get_mut(&ColorCategory::Border)
        .and_then(|m| m.dark.as_mut())
    {
        dark.insert("focus".into(), "#222222".into());
    }
    let validator = Validator::default();
    assert_eq!(validator.validate(&broken), validator.validate(&broken));
}

#[test]
fn test_every_mode_alias_has_three_modes_and_high_contrast_mirrors_dark() {
    let aliases = build_alias_map(TokenTables::canonical());
    assert_eq!(aliases.color.len(), ColorCategory::ALL.len());

    for (category, entries) in &aliases.color {
        for (key, alias) in entries {
            assert_eq!(alias.iter().count(), 3);
            assert_eq!(
                alias.high_contrast, alias.dark,
                "{}.{}: high contrast is a placeholder for dark",
                category, key
            );
        }
    }

    let json = serde_json::to_value(&aliases).unwrap();
    let entry = json["color"]["background"]["primary"].as_object().unwrap();
    let fields: Vec<&str> = entry.keys().map(String::as_str).collect();
    assert_eq!(fields, vec!["dark", "highContrast", "light"]);
}

#[test]
fn test_canonical_paths_resolve() {
    let tables = TokenTables::canonical();
    let tree = tables.to_tree();
    let aliases = build_alias_map(tables);

    for entries in aliases.color.values() {
        for alias in entries.values() {
            for (_, target) in alias.iter() {
                let path = target.as_path().unwrap();
                assert!(tree.resolve(path).is_ok(), "{} should resolve", path);
            }
        }
    }
    for (section, entries) in aliases.scalar_sections() {
        for (key, target) in entries {
            if let AliasTarget::PathRef(path) = target {
                assert!(tree.resolve(path).is_ok(), "{}.{} should resolve", section, key);
            }
        }
    }
}

#[test]
fn test_contrast_symmetry_and_identity() {
    let a = HexColor::parse("#0285FF").unwrap().opaque();
    let b = HexColor::parse("#212121").unwrap().opaque();
    assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
    assert_eq!(contrast_ratio(a, a), 1.0);
}

#[test]
fn test_threshold_boundary_is_inclusive() {
    assert!(ContrastUsage::NonText.passes(3.0));
    assert!(!ContrastUsage::NonText.passes(2.999));
}

fn with_light_focus(value: &str) -> TokenTables {
    let mut tables = TokenTables::canonical().clone();
    if let Some(light) = tables
        .color
        .get_mut(&ColorCategory::Border)
        .and_then(|m| m.light.as_mut())
    {
        light.insert("focus".into(), value.into());
    }
    tables
}

#[test]
fn test_focus_ring_just_at_threshold_passes() {
    let white = HexColor::parse("#FFFFFF").unwrap();
    let ratio = pair_contrast(&HexColor::parse("#7799B4").unwrap(), &white);
    assert!((3.0..3.0001).contains(&ratio), "{}", ratio);

    let errors = Validator::default().validate(&with_light_focus("#7799B4"));
    assert!(errors.is_empty(), "{:?}", errors);
}

#[test]
fn test_focus_ring_just_below_threshold_fails() {
    let white = HexColor::parse("#FFFFFF").unwrap();
    let ratio = pair_contrast(&HexColor::parse("#B178FF").unwrap(), &white);
    assert!((2.9999..3.0).contains(&ratio), "{}", ratio);

    let errors = Validator::default().validate(&with_light_focus("#B178FF"));
    assert_eq!(errors.len(), 1, "{:?}", errors);
    assert_eq!(errors[0].code(), ErrorCode::ContrastInsufficient);
    assert!(errors[0].message().contains("light"));
}

#[test]
fn test_dotted_keys_resolve_and_validate_clean() {
    let mut tables = TokenTables::canonical()
        .clone()
        .with_radius("1.5x", 12u32)
        .with_type("line.height", 1.5);
    if let Some(modes) = tables.color.get_mut(&ColorCategory::Accent) {
        if let Some(light) = modes.light.as_mut() {
            light.insert("primary.hover".into(), "#0285FF".into());
        }
        if let Some(dark) = modes.dark.as_mut() {
            dark.insert("primary.hover".into(), "#3E9BFF".into());
        }
    }

    let tree = tables.to_tree();
    let aliases = build_alias_map(&tables);
    let hover = &aliases.color[&ColorCategory::Accent]["primary.hover"];
    for (_, target) in hover.iter() {
        let path = target.as_path().unwrap();
        assert!(tree.resolve(path).is_ok(), "{} should resolve", path);
    }
    let radius = aliases.radius["1.5x"].as_path().unwrap();
    assert_eq!(tree.resolve(radius).unwrap().as_number(), Some(12.0));

    let errors = Validator::default().validate(&tables);
    assert!(errors.is_empty(), "{:?}", errors);
}

#[test]
fn test_missing_dark_accent_primary_reports_exactly_one_error() {
    let mut tables = TokenTables::canonical().clone();
    if let Some(dark) = tables
        .color
        .get_mut(&ColorCategory::Accent)
        .and_then(|m| m.dark.as_mut())
    {
        dark.remove("primary");
    }

    let errors = Validator::default().validate(&tables);
    assert_eq!(errors.len(), 1, "{:?}", errors);
    assert_eq!(errors[0].code(), ErrorCode::TokenModeMissing);
    assert!(errors[0].message().contains("accent.primary"));
    assert!(errors[0].message().contains(Mode::Dark.as_str()));
}

#[test]
fn test_wrong_schema_reference_reports_one_error() {
    let dir = schema_dir();
    let document = TokenDocument::new("wrong/path.json", TokenTables::canonical().clone());

    let schema_errors = contract(&dir).check(&document);
    assert_eq!(schema_errors.len(), 1);
    assert_eq!(schema_errors[0].code(), ErrorCode::SchemaReferenceInvalid);

    let all = validate_build(&contract(&dir), Some(&document), &Validator::default());
    assert!(!all.is_empty());
}

#[test]
fn test_canonical_set_with_correct_schema_is_clean() {
    assert!(validate_tokens().is_empty());

    let dir = schema_dir();
    let document = TokenDocument::new(DEFAULT_SCHEMA_PATH, TokenTables::canonical().clone());
    let errors = validate_build(&contract(&dir), Some(&document), &Validator::default());
    assert!(errors.is_empty(), "{:?}", errors);
}

#[test]
fn test_document_from_disk_end_to_end() {
    let dir = schema_dir();
    let mut document = TokenDocument::new(
        "./schema/tokens.schema.json",
        TokenTables::canonical().clone(),
    );
    if let Some(light) = document
        .tables
        .color
        .get_mut(&ColorCategory::Text)
        .and_then(|m| m.light.as_mut())
    {
        light.insert("primary".into(), "#AFAFAF".into());
    }
    let path = dir.path().join("tokens.json");
    fs::write(&path, serde_json::to_string_pretty(&document).unwrap()).unwrap();

    let loaded = TokenDocument::from_path(&path).unwrap();
    assert_eq!(loaded, document);

    let errors = validate_build(&contract(&dir), Some(&loaded), &Validator::default());
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code(), ErrorCode::ContrastInsufficient);

    let report = render_report(&errors, OutputMode::Text).unwrap();
    assert!(report.starts_with("[CONTRAST_INSUFFICIENT] primary text contrast in light mode"));
    assert!(report.ends_with("1 error found"));
}

fn key() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z.]{0,8}"
}

fn hex() -> impl Strategy<Value = String> {
    any::<(u8, u8, u8)>().prop_map(|(r, g, b)| format!("#{:02X}{:02X}{:02X}", r, g, b))
}

fn color_table() -> impl Strategy<Value = TokenTables> {
    prop::collection::btree_map(key(), (hex(), hex()), 1..6).prop_map(|entries| {
        ColorCategory::ALL.into_iter().fold(TokenTables::new(), |tables, category| {
            let modes = entries
                .iter()
                .fold(ColorModes::new(), |modes, (k, (light, dark))| modes.add(k, light, dark));
            tables.with_color(category, modes)
        })
    })
}

proptest! {
    #[test]
    fn prop_built_paths_resolve_in_unmodified_tables(tables in color_table()) {
        let tree = tables.to_tree();
        let aliases = build_alias_map(&tables);
        for entries in aliases.color.values() {
            for alias in entries.values() {
                for (_, target) in alias.iter() {
                    let path = target.as_path().unwrap();
                    prop_assert!(tree.resolve(path).is_ok());
                }
            }
        }
    }

    #[test]
    fn prop_complete_tables_only_fail_on_contrast(tables in color_table()) {
        let errors = Validator::default().validate(&tables);
        prop_assert!(errors.iter().all(|e| matches!(
            e.code(),
            ErrorCode::ContrastInsufficient | ErrorCode::TokenReferenceUnresolved
        )));
    }

    #[test]
    fn prop_contrast_symmetric(a in any::<(u8, u8, u8)>(), b in any::<(u8, u8, u8)>()) {
        prop_assert_eq!(contrast_ratio(Rgb::from(a), Rgb::from(b)), contrast_ratio(Rgb::from(b), Rgb::from(a)));
    }
}

#[test]
fn test_space_steps_alias_by_step_value() {
    let aliases = build_alias_map(TokenTables::canonical());
    let keys: BTreeMap<&str, &AliasTarget> =
        aliases.space.iter().map(|(k, v)| (k.as_str(), v)).collect();
    assert_eq!(keys["16"], &AliasTarget::path("space.16"));
}
