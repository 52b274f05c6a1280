//! Alias map builder.
//!
//! Semantic token names alias mode-specific locations in the token tables:
//!
//! - [`AliasTarget`]: either a [`TokenPath`] reference or a literal value
//! - [`ModeAlias`]: light, dark and high-contrast targets for a color token
//! - [`AliasMap`]: the assembled map for every category

mod builder;
mod entry;

pub use builder::{
    build_alias_map, build_mode_map, build_motion_map, build_record_map, build_space_map,
    build_typography_map, AliasMap,
};
pub use entry::{AliasTarget, ModeAlias, TokenPath};
