//! Dimension document structure

use crate::config::DimensionDefaults;
use crate::dimensions::DimensionCommon;
use crate::registry::DimensionRegistry;
use crate::style::{DimStyle, StyleProperties, StyleTable};
use crate::types::ObjectId;
use indexmap::IndexMap;
use tracing::debug;

/// All dimension data of a scene
///
/// Registries are created lazily, the first time a dimension is added to
/// an object, and kept in creation order.
#[derive(Debug, Clone, Default)]
pub struct DimensionDocument {
    /// Shared dimension styles
    pub styles: StyleTable,

    /// Defaults applied to new records
    pub defaults: DimensionDefaults,

    /// Registries indexed by annotated object
    registries: IndexMap<ObjectId, DimensionRegistry>,
}

impl DimensionDocument {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document with specific defaults
    pub fn with_defaults(defaults: DimensionDefaults) -> Self {
        Self {
            defaults,
            ..Self::default()
        }
    }

    /// Registry of an object, if it has one
    pub fn registry(&self, object: ObjectId) -> Option<&DimensionRegistry> {
        self.registries.get(&object)
    }

    /// Mutable registry of an object, if it has one
    pub fn registry_mut(&mut self, object: ObjectId) -> Option<&mut DimensionRegistry> {
        self.registries.get_mut(&object)
    }

    /// Registry of an object, created empty when missing
    pub fn registry_or_insert(&mut self, object: ObjectId) -> &mut DimensionRegistry {
        self.registries.entry(object).or_insert_with(|| {
            debug!(%object, "created dimension registry");
            DimensionRegistry::new(object)
        })
    }

    /// Remove an object's registry with all its records
    pub fn remove_registry(&mut self, object: ObjectId) -> Option<DimensionRegistry> {
        self.registries.shift_remove(&object)
    }

    /// Iterate over registries in creation order
    pub fn registries(&self) -> impl Iterator<Item = &DimensionRegistry> {
        self.registries.values()
    }

    /// Number of annotated objects
    pub fn registry_count(&self) -> usize {
        self.registries.len()
    }

    /// Total number of records across all registries
    pub fn dimension_count(&self) -> usize {
        self.registries.values().map(DimensionRegistry::len).sum()
    }

    /// Appearance that applies to a record
    pub fn effective_style<'a>(&'a self, common: &'a DimensionCommon) -> &'a StyleProperties {
        self.styles.effective(common)
    }

    /// Remove a shared style and unlink every record using it
    ///
    /// Unlinked records fall back to their local properties. Returns the
    /// removed style and the number of records unlinked.
    pub fn remove_style(&mut self, name: &str) -> Option<(DimStyle, usize)> {
        let style = self.styles.remove(name)?;
        let key = StyleTable::key(name);
        let mut unlinked = 0;
        for registry in self.registries.values_mut() {
            for common in registry.commons_mut() {
                if common
                    .style
                    .as_deref()
                    .is_some_and(|linked| StyleTable::key(linked) == key)
                {
                    common.style = None;
                    unlinked += 1;
                }
            }
        }
        debug!(style = %style.name, unlinked, "removed dimension style");
        Some((style, unlinked))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimensions::{AngleDimension, DimensionKind};

    #[test]
    fn test_registry_created_lazily() {
        let mut doc = DimensionDocument::new();
        let obj = ObjectId::new(7);
        assert!(doc.registry(obj).is_none());

        doc.registry_or_insert(obj)
            .create(AngleDimension::new("Angle 1", 0, 1, 2));
        assert_eq!(doc.registry_count(), 1);
        assert_eq!(doc.registry(obj).unwrap().count(DimensionKind::Angle), 1);
        assert_eq!(doc.dimension_count(), 1);

        doc.registry_or_insert(obj);
        assert_eq!(doc.registry_count(), 1);
    }

    #[test]
    fn test_remove_style_unlinks_records() {
        let mut doc = DimensionDocument::new();
        doc.styles.add(DimStyle::new("Plan")).unwrap();
        let obj = ObjectId::new(1);
        let mut angle = AngleDimension::new("Angle 1", 0, 1, 2);
        angle.common.style = Some("PLAN".to_string());
        doc.registry_or_insert(obj).create(angle);

        let (style, unlinked) = doc.remove_style("plan").unwrap();
        assert_eq!(style.name, "Plan");
        assert_eq!(unlinked, 1);
        assert!(doc.registry(obj).unwrap().angles()[0].common.style.is_none());
        assert!(doc.remove_style("plan").is_none());
    }

    #[test]
    fn test_remove_style_unlinks_non_ascii_case() {
        let mut doc = DimensionDocument::new();
        doc.styles.add(DimStyle::new("Ästhetik")).unwrap();
        let obj = ObjectId::new(1);
        let mut angle = AngleDimension::new("Angle 1", 0, 1, 2);
        angle.common.style = Some("ästhetik".to_string());
        doc.registry_or_insert(obj).create(angle);
        assert!(doc.styles.contains("ästhetik"));

        let (_, unlinked) = doc.remove_style("Ästhetik").unwrap();
        assert_eq!(unlinked, 1);
        assert!(doc.registry(obj).unwrap().angles()[0].common.style.is_none());
    }
}
