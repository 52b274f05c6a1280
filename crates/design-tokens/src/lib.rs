//! # Design Tokens
//!
//! Alias map builder and consistency validator for light/dark design tokens.
//!
//! Token tables hold the raw values: per-category light and dark colors,
//! a spacing scale, radius/shadow/size records, typography and motion. From
//! them the builder derives an [`AliasMap`] that points each semantic token
//! at its mode-specific location, and the [`Validator`] checks that every
//! alias resolves, every color defines all three modes, and the
//! accessibility-critical pairings meet their WCAG contrast minimums.
//!
//! ## Quick Start
//!
//! ```rust
//! use design_tokens::{validate_tokens, AliasMap, TokenTables};
//!
//! // The built-in token set is internally consistent.
//! assert!(validate_tokens().is_empty());
//!
//! let aliases = AliasMap::build(TokenTables::canonical());
//! let primary = &aliases.color[&design_tokens::ColorCategory::Text]["primary"];
//! assert_eq!(
//!     primary.high_contrast.as_path().map(|p| p.as_str()),
//!     Some("color.text.dark.primary"),
//! );
//! ```
//!
//! ## Reporting, not raising
//!
//! Validation never fails. Problems come back as a flat list of
//! [`ValidationError`] values, each with a stable [`ErrorCode`], a message
//! and an optional suggestion. An empty list means the tokens are valid;
//! callers decide what a non-empty list means for their build.
//!
//! ```rust
//! use design_tokens::{ColorCategory, ErrorCode, TokenTables, Validator};
//!
//! let mut tables = TokenTables::canonical().clone();
//! if let Some(dark) = tables.color.get_mut(&ColorCategory::Accent).and_then(|m| m.dark.as_mut()) {
//!     dark.remove("primary");
//! }
//!
//! let errors = Validator::default().validate(&tables);
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors[0].code(), ErrorCode::TokenModeMissing);
//! ```
//!
//! ## Contrast
//!
//! Each [`ContrastCheck`] states its own usage: non-text pairings such as
//! focus rings need 3:1, body text needs 4.5:1. Both light and dark modes
//! are checked independently.
//!
//! ## Schema contract
//!
//! [`SchemaContract`] covers the build-time checks: the pinned schema file
//! and version marker must exist, and a token document's `$schema` must
//! reference the pinned schema. [`validate_build`] runs those checks and the
//! validator together.

pub mod alias;
pub mod color;
pub mod report;
pub mod table;
pub mod validate;

pub use alias::{build_alias_map, AliasMap, AliasTarget, ModeAlias, TokenPath};
pub use color::{contrast_ratio, pair_contrast, relative_luminance, ContrastUsage, HexColor, Rgb};
pub use report::{render_report, OutputMode, ReportError, ReportRenderer};
pub use table::{
    ColorCategory, ColorModes, LoadError, Mode, TokenDocument, TokenNode, TokenTables, TokenValue,
};
pub use validate::{
    validate_build, validate_tokens, ColorRef, ContrastCheck, ErrorCode, SchemaContract,
    ValidationConfig, ValidationError, Validator,
};
