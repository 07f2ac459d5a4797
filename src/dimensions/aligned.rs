//! Aligned dimension

use super::{DimensionCommon, VertexRef};
use crate::selection::GeometrySource;

/// Aligned dimension
///
/// Measures the straight distance between two points, which may live on
/// different objects.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedDimension {
    pub common: DimensionCommon,
    /// First endpoint
    pub point_a: VertexRef,
    /// Second endpoint
    pub point_b: VertexRef,
}

impl AlignedDimension {
    /// Create a new aligned dimension
    pub fn new(name: impl Into<String>, point_a: VertexRef, point_b: VertexRef) -> Self {
        Self {
            common: DimensionCommon::new(name),
            point_a,
            point_b,
        }
    }

    /// Check whether this dimension spans the given pair, in either order
    pub fn spans(&self, a: VertexRef, b: VertexRef) -> bool {
        VertexRef::same_segment((self.point_a, self.point_b), (a, b))
    }

    /// Get the measured distance
    pub fn measurement(&self, geometry: &dyn GeometrySource) -> Option<f64> {
        let a = geometry.position(self.point_a)?;
        let b = geometry.position(self.point_b)?;
        Some(a.distance(&b))
    }
}

impl_dimension!(AlignedDimension, Aligned);
