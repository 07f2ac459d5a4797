//! Shared dimension styles
//!
//! A record either links to a named [`DimStyle`] in the [`StyleTable`] or
//! carries its own local [`StyleProperties`]. [`StyleTable::effective`]
//! resolves which set applies.

use crate::dimensions::DimensionCommon;
use crate::error::{DimensionError, Result};
use crate::types::Color;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Endcap drawn at the end of a dimension line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EndcapStyle {
    /// No cap
    #[default]
    None,
    /// Open arrow
    Arrow,
    /// Filled triangle
    Triangle,
}

impl fmt::Display for EndcapStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndcapStyle::None => write!(f, "--"),
            EndcapStyle::Arrow => write!(f, "Arrow"),
            EndcapStyle::Triangle => write!(f, "Triangle"),
        }
    }
}

/// Horizontal alignment of dimension text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TextAlignment {
    Left,
    #[default]
    Center,
    Right,
}

/// Appearance fields shared by styles and by unstyled records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleProperties {
    /// Line and text color
    pub color: Color,
    /// Line weight in pixels
    pub line_weight: u32,
    /// Font size in points
    pub font_size: u32,
    /// Text raster resolution in DPI
    pub text_resolution: u32,
    /// Text alignment
    pub text_alignment: TextAlignment,
    /// Endcap at point A
    pub endcap_a: EndcapStyle,
    /// Endcap at point B
    pub endcap_b: EndcapStyle,
    /// Endcap size
    pub endcap_size: u32,
}

impl Default for StyleProperties {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            line_weight: 1,
            font_size: 7,
            text_resolution: 72,
            text_alignment: TextAlignment::Center,
            endcap_a: EndcapStyle::None,
            endcap_b: EndcapStyle::None,
            endcap_size: 4,
        }
    }
}

/// A named, shareable dimension style
#[derive(Debug, Clone, PartialEq)]
pub struct DimStyle {
    /// Style name
    pub name: String,
    /// Appearance applied to every record linking to this style
    pub properties: StyleProperties,
}

impl DimStyle {
    /// Create a style with default properties
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: StyleProperties::default(),
        }
    }

    /// Builder: Set the properties
    pub fn with_properties(mut self, properties: StyleProperties) -> Self {
        self.properties = properties;
        self
    }
}

/// Table of shared styles, keyed case-insensitively by name
#[derive(Debug, Clone, Default)]
pub struct StyleTable {
    entries: IndexMap<String, DimStyle>,
}

impl StyleTable {
    /// Create a new empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Lookup key of a style name
    ///
    /// Two names refer to the same style when their keys are equal.
    pub fn key(name: &str) -> String {
        name.to_uppercase()
    }

    /// Add a style to the table
    pub fn add(&mut self, style: DimStyle) -> Result<()> {
        let key = Self::key(&style.name);
        if self.entries.contains_key(&key) {
            return Err(DimensionError::DuplicateStyle(style.name));
        }
        self.entries.insert(key, style);
        Ok(())
    }

    /// Get a style by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&DimStyle> {
        self.entries.get(&Self::key(name))
    }

    /// Get a mutable style by name (case-insensitive)
    pub fn get_mut(&mut self, name: &str) -> Option<&mut DimStyle> {
        self.entries.get_mut(&Self::key(name))
    }

    /// Remove a style by name, keeping the order of the others
    pub fn remove(&mut self, name: &str) -> Option<DimStyle> {
        self.entries.shift_remove(&Self::key(name))
    }

    /// Check if a style exists (case-insensitive)
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&Self::key(name))
    }

    /// Number of styles
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over styles in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &DimStyle> {
        self.entries.values()
    }

    /// Appearance that applies to a record
    ///
    /// The linked style wins when it exists; a missing link falls back to
    /// the record's local properties.
    pub fn effective<'a>(&'a self, common: &'a DimensionCommon) -> &'a StyleProperties {
        common
            .style
            .as_deref()
            .and_then(|name| self.get(name))
            .map(|style| &style.properties)
            .unwrap_or(&common.local_style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_add_and_get() {
        let mut table = StyleTable::new();
        assert!(table.add(DimStyle::new("Plan")).is_ok());
        assert!(table.contains("Plan"));
        assert!(table.contains("PLAN"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_table_duplicate_style() {
        let mut table = StyleTable::new();
        table.add(DimStyle::new("Plan")).unwrap();
        let err = table.add(DimStyle::new("plan")).unwrap_err();
        assert!(matches!(err, DimensionError::DuplicateStyle(name) if name == "plan"));
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut table = StyleTable::new();
        table.add(DimStyle::new("A")).unwrap();
        table.add(DimStyle::new("B")).unwrap();
        table.add(DimStyle::new("C")).unwrap();
        assert!(table.remove("b").is_some());
        let names: Vec<&str> = table.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_effective_style() {
        let mut table = StyleTable::new();
        let props = StyleProperties {
            font_size: 24,
            ..Default::default()
        };
        table
            .add(DimStyle::new("Section").with_properties(props))
            .unwrap();

        let mut common = DimensionCommon::new("Dimension 1");
        common.local_style.font_size = 9;
        assert_eq!(table.effective(&common).font_size, 9);

        common.style = Some("section".to_string());
        assert_eq!(table.effective(&common).font_size, 24);

        common.style = Some("Missing".to_string());
        assert_eq!(table.effective(&common).font_size, 9);
    }
}
