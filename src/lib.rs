//! # archdim
//!
//! Parametric architectural dimension annotations for 3D scenes.
//!
//! Each annotated object owns a [`DimensionRegistry`] holding its aligned,
//! angle, axis, bounding box and arc dimensions. Records are stored per kind,
//! and one ordered index spans all kinds so a UI list can show them in a
//! single sequence.
//!
//! ## Features
//!
//! - Typed records for five dimension kinds, with measurement helpers
//! - Ordered cross-kind index kept consistent by every mutation
//! - Duplicate guard for segment dimensions
//! - Shared, named dimension styles
//! - Selection-driven creation operators with validate-then-commit semantics
//! - JSON-loadable creation defaults
//!
//! ## Quick Start
//!
//! ```rust
//! use archdim::{AlignedDimension, DimensionKind, DimensionRegistry, ObjectId, VertexRef};
//!
//! let wall = ObjectId::new(1);
//! let mut registry = DimensionRegistry::new(wall);
//! let entry = registry.create(AlignedDimension::new(
//!     "Dimension 1",
//!     VertexRef::vertex(wall, 0),
//!     VertexRef::vertex(wall, 1),
//! ));
//!
//! assert_eq!(entry.kind, DimensionKind::Aligned);
//! assert_eq!(registry.resolve(&entry)?.name(), "Dimension 1");
//! # Ok::<(), archdim::DimensionError>(())
//! ```
//!
//! ## Architecture
//!
//! - `Dimension` - Base trait for all dimension records
//! - `DimensionRegistry` - Per-object storage and ordered index
//! - `SelectionSource` / `GeometrySource` - Host collaborator traits
//! - `DimensionDocument` - Registries, styles and defaults of a scene

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod dimensions;
pub mod document;
pub mod error;
pub mod notification;
pub mod operators;
pub mod registry;
pub mod selection;
pub mod style;
pub mod types;

// Re-export commonly used types
pub use error::{DimensionError, Result};
pub use types::{BoundingBox3D, Color, DimensionId, MeasureAxis, ObjectId, Vector3};

// Re-export dimension types
pub use dimensions::{
    AlignedDimension, AngleDimension, ArcDimension, AxisDimension, AxisFlags, BoundsDimension,
    Dimension, DimensionCommon, DimensionKind, DimensionRecord, DimensionRef, DimensionRefMut,
    VertexRef, ViewPlane,
};

// Re-export registry and document
pub use document::DimensionDocument;
pub use registry::{DimensionRegistry, IndexEntry};

// Re-export host interfaces and operators
pub use config::{DimensionDefaults, DistanceScaledSizes};
pub use operators::CreationReport;
pub use selection::{GeometrySource, InteractionMode, ObjectKind, SelectionSource};
pub use style::{DimStyle, EndcapStyle, StyleProperties, StyleTable, TextAlignment};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_document_creation() {
        let doc = DimensionDocument::new();
        assert_eq!(doc.registry_count(), 0);
        assert_eq!(doc.defaults, DimensionDefaults::default());
    }
}
