//! Raw token tables and the tree alias paths resolve against.
//!
//! This module provides:
//!
//! - [`TokenTables`]: every token category, built once and read afterwards
//! - [`ColorModes`] / [`ColorCategory`] / [`Mode`]: light and dark color tables
//! - [`TokenNode`]: the tagged tree used for dot-path resolution
//! - [`TokenDocument`]: a token file with its `$schema` marker

mod canonical;
mod color;
mod document;
mod tables;
mod tree;
mod value;

pub use color::{ColorCategory, ColorModes, ColorTable, Mode};
pub use document::{LoadError, TokenDocument};
pub use tables::{space_step_key, TokenTables, TypographyTable};
pub use tree::{ResolveError, TokenNode};
pub use value::TokenValue;
