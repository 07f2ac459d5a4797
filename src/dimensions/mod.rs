//! Dimension record types and traits

use crate::error::DimensionError;
use crate::style::StyleProperties;
use crate::types::{DimensionId, ObjectId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// Must precede the submodule declarations.
macro_rules! impl_dimension {
    ($ty:ident, $kind:ident) => {
        impl $crate::dimensions::Dimension for $ty {
            fn kind(&self) -> $crate::dimensions::DimensionKind {
                $crate::dimensions::DimensionKind::$kind
            }
            fn common(&self) -> &$crate::dimensions::DimensionCommon {
                &self.common
            }
            fn common_mut(&mut self) -> &mut $crate::dimensions::DimensionCommon {
                &mut self.common
            }
        }
    };
}

pub mod aligned;
pub mod angle;
pub mod arc;
pub mod axis;
pub mod bounds;
pub mod record;

pub use aligned::AlignedDimension;
pub use angle::AngleDimension;
pub use arc::{ArcDimension, ArcMeasurement};
pub use axis::AxisDimension;
pub use bounds::{AxisFlags, BoundsDimension};
pub use record::{DimensionRecord, DimensionRef, DimensionRefMut};

/// Discriminant of the five dimension variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DimensionKind {
    /// Distance between two points
    Aligned,
    /// Angle defined by three vertices
    Angle,
    /// Distance along a single world axis
    Axis,
    /// Bounding box extents
    Bounds,
    /// Arc length and radius through three vertices
    Arc,
}

impl DimensionKind {
    /// All kinds, in storage order
    pub const ALL: [DimensionKind; 5] = [
        DimensionKind::Aligned,
        DimensionKind::Angle,
        DimensionKind::Axis,
        DimensionKind::Bounds,
        DimensionKind::Arc,
    ];

    /// Item type tag used by list widgets
    pub fn tag(&self) -> &'static str {
        match self {
            DimensionKind::Aligned => "D-ALIGNED",
            DimensionKind::Angle => "D-ANGLE",
            DimensionKind::Axis => "D-AXIS",
            DimensionKind::Bounds => "D-BOUNDS",
            DimensionKind::Arc => "D-ARC",
        }
    }

    /// Slot of this kind in per-kind counter arrays
    pub(crate) fn slot(&self) -> usize {
        match self {
            DimensionKind::Aligned => 0,
            DimensionKind::Angle => 1,
            DimensionKind::Axis => 2,
            DimensionKind::Bounds => 3,
            DimensionKind::Arc => 4,
        }
    }

    /// Whether records of this kind span two vertex references
    pub fn is_segment(&self) -> bool {
        matches!(self, DimensionKind::Aligned | DimensionKind::Axis)
    }
}

impl fmt::Display for DimensionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimensionKind::Aligned => write!(f, "Aligned"),
            DimensionKind::Angle => write!(f, "Angle"),
            DimensionKind::Axis => write!(f, "Axis"),
            DimensionKind::Bounds => write!(f, "Bounds"),
            DimensionKind::Arc => write!(f, "Arc"),
        }
    }
}

impl FromStr for DimensionKind {
    type Err = DimensionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DimensionKind::ALL
            .into_iter()
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| DimensionError::UnknownKind(s.to_string()))
    }
}

/// Plane a dimension is constrained to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ViewPlane {
    /// Unconstrained
    #[default]
    None,
    XY,
    XZ,
    YZ,
}

/// Reference to a point on a host object
///
/// `vertex` is `None` when the point is the object's origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexRef {
    pub object: ObjectId,
    pub vertex: Option<u32>,
}

impl VertexRef {
    /// Reference a mesh vertex
    pub const fn vertex(object: ObjectId, vertex: u32) -> Self {
        Self {
            object,
            vertex: Some(vertex),
        }
    }

    /// Reference an object's origin
    pub const fn origin(object: ObjectId) -> Self {
        Self {
            object,
            vertex: None,
        }
    }

    /// Unordered comparison of two vertex pairs
    pub fn same_segment(a: (VertexRef, VertexRef), b: (VertexRef, VertexRef)) -> bool {
        (a.0 == b.0 && a.1 == b.1) || (a.0 == b.1 && a.1 == b.0)
    }
}

impl fmt::Display for VertexRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.vertex {
            Some(v) => write!(f, "{}:{}", self.object, v),
            None => write!(f, "{}:origin", self.object),
        }
    }
}

/// Fields shared by every dimension record
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionCommon {
    /// Registry-assigned identity, read through [`Dimension::id`]
    pub(crate) id: DimensionId,
    /// Display name (not required to be unique)
    pub name: String,
    /// Visibility flag
    pub visible: bool,
    /// User text replacing the measured value when non-empty
    pub text: String,
    /// Linked shared style, if any
    pub style: Option<String>,
    /// Appearance used when no shared style applies
    pub local_style: StyleProperties,
    /// Text rotation in degrees
    pub rotation: f64,
    /// Offset of the dimension line from the measured geometry
    pub offset: f64,
    /// Offset of the leader lines
    pub leader_offset: f64,
    /// Plane constraint
    pub view_plane: ViewPlane,
    /// Only draw when viewed through this camera
    pub visible_in_view: Option<ObjectId>,
}

impl DimensionCommon {
    /// Create common fields with defaults
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: DimensionId::NULL,
            name: name.into(),
            visible: true,
            text: String::new(),
            style: None,
            local_style: StyleProperties::default(),
            rotation: 0.0,
            offset: 0.0,
            leader_offset: 0.0,
            view_plane: ViewPlane::None,
            visible_in_view: None,
        }
    }

    /// Whether the record links to a shared style
    pub fn uses_style(&self) -> bool {
        self.style.is_some()
    }
}

impl Default for DimensionCommon {
    fn default() -> Self {
        Self::new(String::new())
    }
}

/// Base trait for all dimension records
pub trait Dimension {
    /// Variant discriminant
    fn kind(&self) -> DimensionKind;

    /// Shared fields
    fn common(&self) -> &DimensionCommon;

    /// Mutable shared fields
    fn common_mut(&mut self) -> &mut DimensionCommon;

    /// Registry-assigned identity
    fn id(&self) -> DimensionId {
        self.common().id
    }

    /// Display name
    fn name(&self) -> &str {
        &self.common().name
    }

    /// Set the display name
    fn set_name(&mut self, name: String) {
        self.common_mut().name = name;
    }

    /// Check if the record is drawn
    fn is_visible(&self) -> bool {
        self.common().visible
    }

    /// Set visibility
    fn set_visible(&mut self, visible: bool) {
        self.common_mut().visible = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags_round_trip() {
        for kind in DimensionKind::ALL {
            assert_eq!(kind.tag().parse::<DimensionKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_kind() {
        let err = "D-AREA".parse::<DimensionKind>().unwrap_err();
        assert!(matches!(err, DimensionError::UnknownKind(tag) if tag == "D-AREA"));
    }

    #[test]
    fn test_segment_kinds() {
        assert!(DimensionKind::Aligned.is_segment());
        assert!(DimensionKind::Axis.is_segment());
        assert!(!DimensionKind::Angle.is_segment());
    }

    #[test]
    fn test_same_segment_is_unordered() {
        let obj = ObjectId::new(1);
        let a = VertexRef::vertex(obj, 0);
        let b = VertexRef::vertex(obj, 1);
        let c = VertexRef::vertex(obj, 2);
        assert!(VertexRef::same_segment((a, b), (b, a)));
        assert!(VertexRef::same_segment((a, b), (a, b)));
        assert!(!VertexRef::same_segment((a, b), (a, c)));
    }

    #[test]
    fn test_origin_differs_from_vertex() {
        let obj = ObjectId::new(4);
        assert_ne!(VertexRef::origin(obj), VertexRef::vertex(obj, 0));
        assert_eq!(VertexRef::origin(obj).to_string(), "#4:origin");
    }

    #[test]
    fn test_common_defaults() {
        let common = DimensionCommon::new("Dimension 1");
        assert!(common.visible);
        assert!(!common.uses_style());
        assert!(common.id.is_null());
    }
}
