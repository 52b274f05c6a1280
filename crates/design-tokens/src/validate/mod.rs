//! Token validation.
//!
//! This module provides:
//!
//! - [`Validator`]: checks token tables against their alias map
//! - [`ValidationConfig`] / [`ContrastCheck`]: which pairings get contrast checks
//! - [`ValidationError`] / [`ErrorCode`]: reported violations
//! - [`SchemaContract`]: the build-time schema file and `$schema` checks

mod config;
mod error;
mod schema;
mod validator;

pub use config::{ColorRef, ContrastCheck, ValidationConfig};
pub use error::{ErrorCode, ValidationError};
pub use schema::{
    check_schema_file, check_schema_reference, check_schema_version, references_pinned,
    validate_build, SchemaContract, DEFAULT_SCHEMA_PATH, DEFAULT_VERSION_PATH,
};
pub use validator::{validate_tokens, Validator};
