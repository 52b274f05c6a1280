//! Validation error values.
//!
//! These are reported, not raised: a validation pass collects every
//! [`ValidationError`] it finds and hands the list back to the caller.

use serde::Serialize;

use crate::color::ContrastUsage;
use crate::table::{ColorCategory, Mode};

/// Stable error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    SchemaFileMissing,
    SchemaVersionMissing,
    SchemaReferenceInvalid,
    TokenReferenceUnresolved,
    TokenCategoryMissing,
    TokenModeMissing,
    TokenColorInvalid,
    ContrastInsufficient,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::SchemaFileMissing => "SCHEMA_FILE_MISSING",
            ErrorCode::SchemaVersionMissing => "SCHEMA_VERSION_MISSING",
            ErrorCode::SchemaReferenceInvalid => "SCHEMA_REFERENCE_INVALID",
            ErrorCode::TokenReferenceUnresolved => "TOKEN_REFERENCE_UNRESOLVED",
            ErrorCode::TokenCategoryMissing => "TOKEN_CATEGORY_MISSING",
            ErrorCode::TokenModeMissing => "TOKEN_MODE_MISSING",
            ErrorCode::TokenColorInvalid => "TOKEN_COLOR_INVALID",
            ErrorCode::ContrastInsufficient => "CONTRAST_INSUFFICIENT",
        }
    }

    /// True for the schema-contract codes checked before token validation.
    pub fn is_schema(self) -> bool {
        matches!(
            self,
            ErrorCode::SchemaFileMissing
                | ErrorCode::SchemaVersionMissing
                | ErrorCode::SchemaReferenceInvalid
        )
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single consistency violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    code: ErrorCode,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    suggestion: Option<String>,
}

impl ValidationError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn suggestion(&self) -> Option<&str> {
        self.suggestion.as_deref()
    }

    pub(crate) fn category_missing(category: ColorCategory, has_modes: bool) -> Self {
        let message = if has_modes {
            format!("color category '{}' has no light mapping", category)
        } else {
            format!("color category '{}' is not defined", category)
        };
        Self::new(ErrorCode::TokenCategoryMissing, message).with_suggestion(format!(
            "define color.{0}.light and color.{0}.dark with the same keys",
            category
        ))
    }

    pub(crate) fn mode_missing(
        category: ColorCategory,
        key: &str,
        mode: Mode,
        reason: impl std::fmt::Display,
    ) -> Self {
        Self::new(
            ErrorCode::TokenModeMissing,
            format!(
                "color token '{}.{}' has no {} value: {}",
                category, key, mode, reason
            ),
        )
        .with_suggestion(format!(
            "add '{}' to color.{}.{}",
            key,
            category,
            stored_mode(mode)
        ))
    }

    pub(crate) fn reference_unresolved(alias: &str, reason: impl std::fmt::Display) -> Self {
        Self::new(
            ErrorCode::TokenReferenceUnresolved,
            format!("alias '{}' does not resolve: {}", alias, reason),
        )
        .with_suggestion("define the referenced token or remove the alias")
    }

    pub(crate) fn color_invalid(location: &str, value: &str, reason: impl std::fmt::Display) -> Self {
        Self::new(
            ErrorCode::TokenColorInvalid,
            format!(
                "color '{}' has value '{}', which is not a hex color: {}",
                location, value, reason
            ),
        )
        .with_suggestion("use #RRGGBB or #RRGGBBAA")
    }

    pub(crate) fn contrast_insufficient(
        label: &str,
        foreground: &str,
        background: &str,
        mode: Mode,
        ratio: f64,
        usage: ContrastUsage,
    ) -> Self {
        Self::new(
            ErrorCode::ContrastInsufficient,
            format!(
                "{} contrast in {} mode: {} on {} is {:.2}:1, below the {} minimum of {}:1",
                label,
                mode,
                foreground,
                background,
                ratio,
                usage.as_str(),
                usage.threshold()
            ),
        )
        .with_suggestion(format!(
            "adjust {} or {} in {} mode to reach at least {}:1",
            foreground,
            background,
            mode,
            usage.threshold()
        ))
    }

    pub(crate) fn schema_file_missing(path: &str, empty: bool) -> Self {
        let state = if empty { "is empty" } else { "is missing" };
        Self::new(
            ErrorCode::SchemaFileMissing,
            format!("pinned schema file '{}' {}", path, state),
        )
        .with_suggestion("restore the pinned token schema before validating")
    }

    pub(crate) fn schema_version_missing(path: &str, empty: bool) -> Self {
        let state = if empty { "is empty" } else { "is missing" };
        Self::new(
            ErrorCode::SchemaVersionMissing,
            format!("schema version marker '{}' {}", path, state),
        )
        .with_suggestion("write the pinned schema version to the marker file")
    }

    pub(crate) fn schema_reference_invalid(declared: Option<&str>, pinned: &str) -> Self {
        let message = match declared {
            Some(found) => format!(
                "token document $schema '{}' does not reference the pinned schema '{}'",
                found, pinned
            ),
            None => format!(
                "token document does not declare $schema (expected '{}')",
                pinned
            ),
        };
        Self::new(ErrorCode::SchemaReferenceInvalid, message)
            .with_suggestion(format!("set \"$schema\" to \"{}\"", pinned))
    }
}

// High contrast has no table of its own; its gaps are fixed in dark.
fn stored_mode(mode: Mode) -> Mode {
    match mode {
        Mode::HighContrast => Mode::Dark,
        other => other,
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}
