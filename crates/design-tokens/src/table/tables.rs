//! The full set of raw token tables.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::color::{ColorCategory, ColorModes, ColorTable};
use super::tree::TokenNode;
use super::value::TokenValue;

/// Typography tokens.
///
/// `fontFamily` is shared across platforms and modes; everything else lives
/// under the `web` record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypographyTable {
    #[serde(rename = "fontFamily", default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default)]
    pub web: BTreeMap<String, TokenValue>,
}

/// Raw token tables for every category.
///
/// Constructed once (from the built-in set or a token document) and then
/// only read. Builder methods follow a fluent style:
///
/// ```rust
/// use design_tokens::{ColorCategory, ColorModes, TokenTables};
///
/// let tables = TokenTables::new()
///     .with_color(
///         ColorCategory::Background,
///         ColorModes::new().add("primary", "#FFFFFF", "#212121"),
///     )
///     .with_space([0.0, 4.0, 8.0])
///     .with_radius("md", 8u32)
///     .with_font_family("system-ui");
///
/// assert_eq!(tables.space.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenTables {
    #[serde(default)]
    pub color: ColorTable,
    #[serde(default)]
    pub space: Vec<f64>,
    #[serde(default)]
    pub radius: BTreeMap<String, TokenValue>,
    #[serde(default)]
    pub shadow: BTreeMap<String, TokenValue>,
    #[serde(default)]
    pub size: BTreeMap<String, TokenValue>,
    #[serde(rename = "type", default)]
    pub typography: TypographyTable,
    #[serde(default)]
    pub motion: BTreeMap<String, TokenValue>,
}

impl TokenTables {
    /// Creates an empty set of tables.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, category: ColorCategory, modes: ColorModes) -> Self {
        self.color.insert(category, modes);
        self
    }

    pub fn with_space(mut self, steps: impl IntoIterator<Item = f64>) -> Self {
        self.space = steps.into_iter().collect();
        self
    }

    pub fn with_radius<V: Into<TokenValue>>(mut self, key: &str, value: V) -> Self {
        self.radius.insert(key.to_string(), value.into());
        self
    }

    pub fn with_shadow<V: Into<TokenValue>>(mut self, key: &str, value: V) -> Self {
        self.shadow.insert(key.to_string(), value.into());
        self
    }

    pub fn with_size<V: Into<TokenValue>>(mut self, key: &str, value: V) -> Self {
        self.size.insert(key.to_string(), value.into());
        self
    }

    pub fn with_font_family(mut self, family: &str) -> Self {
        self.typography.font_family = Some(family.to_string());
        self
    }

    pub fn with_type<V: Into<TokenValue>>(mut self, key: &str, value: V) -> Self {
        self.typography.web.insert(key.to_string(), value.into());
        self
    }

    pub fn with_motion<V: Into<TokenValue>>(mut self, key: &str, value: V) -> Self {
        self.motion.insert(key.to_string(), value.into());
        self
    }

    /// Returns the color modes for a category, if the category is defined.
    pub fn color_modes(&self, category: ColorCategory) -> Option<&ColorModes> {
        self.color.get(&category)
    }

    /// Flattens the tables into the tree that alias paths resolve against.
    pub fn to_tree(&self) -> TokenNode {
        let mut color = TokenNode::branch();
        for (category, modes) in &self.color {
            let mut node = TokenNode::branch();
            if let Some(light) = &modes.light {
                node = node.with("light", string_leaves(light));
            }
            if let Some(dark) = &modes.dark {
                node = node.with("dark", string_leaves(dark));
            }
            color = color.with(category.as_str(), node);
        }

        let space = self.space.iter().fold(TokenNode::branch(), |node, step| {
            node.with(space_step_key(*step), TokenNode::Leaf(TokenValue::Number(*step)))
        });

        let mut typography = TokenNode::branch().with("web", value_leaves(&self.typography.web));
        if let Some(family) = &self.typography.font_family {
            typography = typography.with("fontFamily", TokenNode::Leaf(TokenValue::from(family.as_str())));
        }

        TokenNode::branch()
            .with("color", color)
            .with("space", space)
            .with("radius", value_leaves(&self.radius))
            .with("shadow", value_leaves(&self.shadow))
            .with("size", value_leaves(&self.size))
            .with("type", typography)
            .with("motion", value_leaves(&self.motion))
    }
}

/// The key a spacing step is stored under.
///
/// Decimal points would split the alias path, so `0.5` becomes `0_5`.
pub fn space_step_key(step: f64) -> String {
    TokenValue::Number(step).to_string().replace('.', "_")
}

fn string_leaves(record: &BTreeMap<String, String>) -> TokenNode {
    record.iter().fold(TokenNode::branch(), |node, (key, value)| {
        node.with(key.as_str(), TokenNode::Leaf(TokenValue::from(value.as_str())))
    })
}

fn value_leaves(record: &BTreeMap<String, TokenValue>) -> TokenNode {
    record.iter().fold(TokenNode::branch(), |node, (key, value)| {
        node.with(key.as_str(), TokenNode::Leaf(value.clone()))
    })
}
