//! Build-time schema contract checks.
//!
//! Before token validation, the build confirms that the pinned schema file
//! and its version marker exist, and that the token document declares a
//! `$schema` pointing at the pinned file.

use std::path::{Path, PathBuf};

use log::debug;

use super::error::ValidationError;
use super::validator::Validator;
use crate::table::{TokenDocument, TokenTables};

/// Default location of the pinned token schema.
pub const DEFAULT_SCHEMA_PATH: &str = "schema/tokens.schema.json";

/// Default location of the schema version marker.
pub const DEFAULT_VERSION_PATH: &str = "schema/VERSION";

enum FileState {
    Missing,
    Empty,
    Present,
}

fn file_state(path: &Path) -> FileState {
    match std::fs::read_to_string(path) {
        Ok(contents) if contents.trim().is_empty() => FileState::Empty,
        Ok(_) => FileState::Present,
        Err(err) => {
            debug!("cannot read {}: {}", path.display(), err);
            FileState::Missing
        }
    }
}

/// Reports a missing or empty pinned schema file.
pub fn check_schema_file(path: impl AsRef<Path>) -> Option<ValidationError> {
    let path = path.as_ref();
    match file_state(path) {
        FileState::Present => None,
        FileState::Empty => Some(ValidationError::schema_file_missing(&path.display().to_string(), true)),
        FileState::Missing => Some(ValidationError::schema_file_missing(&path.display().to_string(), false)),
    }
}

/// Reports a missing or empty schema version marker.
pub fn check_schema_version(path: impl AsRef<Path>) -> Option<ValidationError> {
    let path = path.as_ref();
    match file_state(path) {
        FileState::Present => None,
        FileState::Empty => Some(ValidationError::schema_version_missing(&path.display().to_string(), true)),
        FileState::Missing => Some(ValidationError::schema_version_missing(&path.display().to_string(), false)),
    }
}

/// True when a declared `$schema` names the pinned schema path.
///
/// Leading `./` is ignored, and any directory prefix is accepted as long as
/// it ends at the pinned path (`../schema/tokens.schema.json` references
/// `schema/tokens.schema.json`).
pub fn references_pinned(declared: &str, pinned: &str) -> bool {
    let declared = strip_dot_slash(declared.trim());
    let pinned = strip_dot_slash(pinned.trim());
    if pinned.is_empty() {
        return false;
    }
    declared == pinned || declared.ends_with(&format!("/{}", pinned))
}

fn strip_dot_slash(mut path: &str) -> &str {
    while let Some(rest) = path.strip_prefix("./") {
        path = rest;
    }
    path
}

/// Reports a token document whose `$schema` is absent or not the pinned path.
pub fn check_schema_reference(declared: Option<&str>, pinned: &str) -> Option<ValidationError> {
    match declared {
        Some(found) if references_pinned(found, pinned) => None,
        other => Some(ValidationError::schema_reference_invalid(other, pinned)),
    }
}

/// The files and reference the build pins token documents to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaContract {
    pub schema_path: PathBuf,
    pub version_path: PathBuf,
    /// What a document's `$schema` must reference.
    pub pinned_reference: String,
}

impl SchemaContract {
    /// A contract for the given schema and version files. The pinned
    /// reference defaults to the schema path as written.
    pub fn new(schema_path: impl Into<PathBuf>, version_path: impl Into<PathBuf>) -> Self {
        let schema_path = schema_path.into();
        let pinned_reference = schema_path.to_string_lossy().into_owned();
        Self {
            schema_path,
            version_path: version_path.into(),
            pinned_reference,
        }
    }

    pub fn with_pinned_reference(mut self, reference: impl Into<String>) -> Self {
        self.pinned_reference = reference.into();
        self
    }

    /// Checks the schema and version files.
    pub fn check_files(&self) -> Vec<ValidationError> {
        check_schema_file(&self.schema_path)
            .into_iter()
            .chain(check_schema_version(&self.version_path))
            .collect()
    }

    /// Checks the files and the document's `$schema` reference.
    pub fn check(&self, document: &TokenDocument) -> Vec<ValidationError> {
        let mut errors = self.check_files();
        errors.extend(check_schema_reference(
            document.schema.as_deref(),
            &self.pinned_reference,
        ));
        errors
    }
}

impl Default for SchemaContract {
    fn default() -> Self {
        Self::new(DEFAULT_SCHEMA_PATH, DEFAULT_VERSION_PATH)
    }
}

/// Runs the full build check: schema contract, then token validation.
///
/// With a document, its `$schema` is checked and its tables validated. Without
/// one, the canonical tables are validated and no reference check applies.
pub fn validate_build(
    contract: &SchemaContract,
    document: Option<&TokenDocument>,
    validator: &Validator,
) -> Vec<ValidationError> {
    match document {
        Some(document) => {
            let mut errors = contract.check(document);
            errors.extend(validator.validate(&document.tables));
            errors
        }
        None => {
            let mut errors = contract.check_files();
            errors.extend(validator.validate(TokenTables::canonical()));
            errors
        }
    }
}
