//! Token documents loaded from JSON or YAML files.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::tables::TokenTables;

/// A token file: the `$schema` marker plus the token tables themselves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenDocument {
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(flatten)]
    pub tables: TokenTables,
}

/// Error loading a token document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read token document \"{}\": {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON token document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML token document: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl TokenDocument {
    /// Wraps existing tables with a `$schema` reference.
    pub fn new(schema: impl Into<String>, tables: TokenTables) -> Self {
        Self {
            schema: Some(schema.into()),
            tables,
        }
    }

    pub fn from_json_str(source: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_yaml_str(source: &str) -> Result<Self, LoadError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Reads a document from disk; `.yaml`/`.yml` files parse as YAML, anything else as JSON.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&source),
            _ => Self::from_json_str(&source),
        }
    }
}
