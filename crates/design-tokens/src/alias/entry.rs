//! Alias entries: path references and literal values.

use serde::{Deserialize, Serialize};

use crate::table::{Mode, TokenValue};

/// A dot-delimited location in the token tree, e.g. `color.text.light.primary`.
///
/// Segments built with [`TokenPath::from_segments`] escape `.` and `\` with a
/// backslash, so a key such as `primary.hover` stays a single segment.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenPath(String);

const SEPARATOR: char = '.';
const ESCAPE: char = '\\';

impl TokenPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Builds a path from individual segments, escaping each one.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let escaped: Vec<String> = segments
            .into_iter()
            .map(|s| escape_segment(s.as_ref()))
            .collect();
        Self(escaped.join("."))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splits at unescaped dots and unescapes each segment.
    pub fn segments(&self) -> Vec<String> {
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut chars = self.0.chars();
        while let Some(c) = chars.next() {
            match c {
                ESCAPE => current.push(chars.next().unwrap_or(ESCAPE)),
                SEPARATOR => segments.push(std::mem::take(&mut current)),
                _ => current.push(c),
            }
        }
        segments.push(current);
        segments
    }
}

fn escape_segment(segment: &str) -> String {
    let mut escaped = String::with_capacity(segment.len());
    for c in segment.chars() {
        if c == SEPARATOR || c == ESCAPE {
            escaped.push(ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

impl std::fmt::Display for TokenPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where an alias points: a path into the token tree, or a constant.
///
/// Serializes as `{ "path": "..." }` or `{ "value": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AliasTarget {
    #[serde(rename = "path")]
    PathRef(TokenPath),
    #[serde(rename = "value")]
    Literal(TokenValue),
}

impl AliasTarget {
    pub fn path(path: impl Into<String>) -> Self {
        AliasTarget::PathRef(TokenPath::new(path))
    }

    pub fn literal<V: Into<TokenValue>>(value: V) -> Self {
        AliasTarget::Literal(value.into())
    }

    /// Returns the referenced path, if this alias is not a literal.
    pub fn as_path(&self) -> Option<&TokenPath> {
        match self {
            AliasTarget::PathRef(path) => Some(path),
            AliasTarget::Literal(_) => None,
        }
    }
}

/// Per-mode aliases for one semantic color token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeAlias {
    pub light: AliasTarget,
    pub dark: AliasTarget,
    /// No dedicated high-contrast tables exist yet; this mirrors `dark`.
    #[serde(rename = "highContrast")]
    pub high_contrast: AliasTarget,
}

impl ModeAlias {
    pub fn get(&self, mode: Mode) -> &AliasTarget {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
            Mode::HighContrast => &self.high_contrast,
        }
    }

    /// Iterates the three modes in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Mode, &AliasTarget)> {
        Mode::ALL.into_iter().map(move |mode| (mode, self.get(mode)))
    }
}
