//! Tagged token tree and dot-path resolution.
//!
//! [`TokenTables`](super::TokenTables) flatten into a [`TokenNode`] tree so
//! that alias paths such as `color.background.light.primary` can be walked
//! segment by segment with an explicit not-found result.

use std::collections::BTreeMap;

use thiserror::Error;

use super::value::TokenValue;
use crate::alias::TokenPath;

/// A node in the token tree: either a named group or a literal value.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenNode {
    Branch(BTreeMap<String, TokenNode>),
    Leaf(TokenValue),
}

/// Why a path failed to resolve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// A segment is missing, or the walk reached a value before the path ended.
    #[error("path '{path}' does not resolve: no entry for segment '{segment}'")]
    NotFound { path: String, segment: String },
    /// The path names a group of tokens rather than a single value.
    #[error("path '{path}' names a token group, not a value")]
    NotALeaf { path: String },
}

impl TokenNode {
    pub fn branch() -> Self {
        TokenNode::Branch(BTreeMap::new())
    }

    /// Inserts a child under this branch, returning the updated node.
    ///
    /// Inserting into a leaf replaces the leaf with a branch.
    pub fn with(self, key: impl Into<String>, child: TokenNode) -> Self {
        let mut children = match self {
            TokenNode::Branch(children) => children,
            TokenNode::Leaf(_) => BTreeMap::new(),
        };
        children.insert(key.into(), child);
        TokenNode::Branch(children)
    }

    /// Looks up a direct child by name.
    pub fn child(&self, key: &str) -> Option<&TokenNode> {
        match self {
            TokenNode::Branch(children) => children.get(key),
            TokenNode::Leaf(_) => None,
        }
    }

    /// Resolves a dot-delimited path to the value it names.
    pub fn resolve(&self, path: &TokenPath) -> Result<&TokenValue, ResolveError> {
        let segments = path.segments();
        resolve_segments(self, segments.iter().map(String::as_str), path)
    }
}

fn resolve_segments<'a, 'p>(
    node: &'a TokenNode,
    mut segments: impl Iterator<Item = &'p str>,
    path: &TokenPath,
) -> Result<&'a TokenValue, ResolveError> {
    match segments.next() {
        None => match node {
            TokenNode::Leaf(value) => Ok(value),
            TokenNode::Branch(_) => Err(ResolveError::NotALeaf {
                path: path.to_string(),
            }),
        },
        Some(segment) => match node.child(segment) {
            Some(next) => resolve_segments(next, segments, path),
            None => Err(ResolveError::NotFound {
                path: path.to_string(),
                segment: segment.to_string(),
            }),
        },
    }
}
