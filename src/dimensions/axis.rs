//! Single-axis dimension

use super::{DimensionCommon, VertexRef};
use crate::selection::GeometrySource;
use crate::types::MeasureAxis;

/// Axis dimension
///
/// Like an aligned dimension, but only the difference along one world axis
/// is measured.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisDimension {
    pub common: DimensionCommon,
    /// First endpoint
    pub point_a: VertexRef,
    /// Second endpoint
    pub point_b: VertexRef,
    /// Measured axis
    pub axis: MeasureAxis,
}

impl AxisDimension {
    /// Create a new axis dimension
    pub fn new(
        name: impl Into<String>,
        point_a: VertexRef,
        point_b: VertexRef,
        axis: MeasureAxis,
    ) -> Self {
        Self {
            common: DimensionCommon::new(name),
            point_a,
            point_b,
            axis,
        }
    }

    /// Check whether this dimension spans the given pair, in either order
    pub fn spans(&self, a: VertexRef, b: VertexRef) -> bool {
        VertexRef::same_segment((self.point_a, self.point_b), (a, b))
    }

    /// Get the unsigned distance along the measured axis
    pub fn measurement(&self, geometry: &dyn GeometrySource) -> Option<f64> {
        let a = geometry.position(self.point_a)?;
        let b = geometry.position(self.point_b)?;
        Some((a.component(self.axis) - b.component(self.axis)).abs())
    }
}

impl_dimension!(AxisDimension, Axis);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::test_support::PointCloud;
    use crate::types::{ObjectId, Vector3};

    #[test]
    fn test_measurement_per_axis() {
        let obj = ObjectId::new(1);
        let geo = PointCloud::with_mesh(
            obj,
            vec![Vector3::new(1.0, 2.0, 3.0), Vector3::new(4.0, -2.0, 3.5)],
        );
        let mut dim = AxisDimension::new(
            "Axis 1",
            VertexRef::vertex(obj, 0),
            VertexRef::vertex(obj, 1),
            MeasureAxis::X,
        );
        assert_eq!(dim.measurement(&geo), Some(3.0));
        dim.axis = MeasureAxis::Y;
        assert_eq!(dim.measurement(&geo), Some(4.0));
        dim.axis = MeasureAxis::Z;
        assert_eq!(dim.measurement(&geo), Some(0.5));
    }

    #[test]
    fn test_spans_reversed() {
        let obj = ObjectId::new(1);
        let a = VertexRef::vertex(obj, 3);
        let b = VertexRef::vertex(obj, 5);
        let dim = AxisDimension::new("Axis 1", a, b, MeasureAxis::Z);
        assert!(dim.spans(b, a));
    }
}
