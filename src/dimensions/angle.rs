//! Angle dimension

use super::DimensionCommon;
use crate::selection::GeometrySource;
use crate::types::ObjectId;
use std::f64::consts::TAU;

/// Angle dimension
///
/// Measures the angle at `point_b` between the legs towards `point_a` and
/// `point_c`. All three vertices belong to the owning object.
#[derive(Debug, Clone, PartialEq)]
pub struct AngleDimension {
    pub common: DimensionCommon,
    /// First leg end vertex
    pub point_a: u32,
    /// Angle vertex
    pub point_b: u32,
    /// Second leg end vertex
    pub point_c: u32,
    /// Radius of the drawn arc
    pub radius: f64,
    /// Show the reflex angle (greater than 180 degrees)
    pub reflex: bool,
}

impl AngleDimension {
    /// Create a new angle dimension
    pub fn new(name: impl Into<String>, point_a: u32, point_b: u32, point_c: u32) -> Self {
        Self {
            common: DimensionCommon::new(name),
            point_a,
            point_b,
            point_c,
            radius: 0.05,
            reflex: false,
        }
    }

    /// Get the angle measurement in radians
    pub fn measurement_radians(
        &self,
        owner: ObjectId,
        geometry: &dyn GeometrySource,
    ) -> Option<f64> {
        let a = geometry.vertex_position(owner, self.point_a)?;
        let b = geometry.vertex_position(owner, self.point_b)?;
        let c = geometry.vertex_position(owner, self.point_c)?;
        let angle = (a - b).angle_to(&(c - b))?;
        Some(if self.reflex { TAU - angle } else { angle })
    }

    /// Get the angle measurement in degrees
    pub fn measurement_degrees(
        &self,
        owner: ObjectId,
        geometry: &dyn GeometrySource,
    ) -> Option<f64> {
        self.measurement_radians(owner, geometry)
            .map(f64::to_degrees)
    }
}

impl_dimension!(AngleDimension, Angle);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::test_support::PointCloud;
    use crate::types::Vector3;

    fn right_angle() -> (ObjectId, PointCloud) {
        let obj = ObjectId::new(1);
        let geo = PointCloud::with_mesh(
            obj,
            vec![
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(0.0, 0.0, 0.0),
                Vector3::new(0.0, 1.0, 0.0),
            ],
        );
        (obj, geo)
    }

    #[test]
    fn test_right_angle() {
        let (obj, geo) = right_angle();
        let dim = AngleDimension::new("Angle 1", 0, 1, 2);
        let degrees = dim.measurement_degrees(obj, &geo).unwrap();
        assert!((degrees - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_reflex_angle() {
        let (obj, geo) = right_angle();
        let mut dim = AngleDimension::new("Angle 1", 0, 1, 2);
        dim.reflex = true;
        let degrees = dim.measurement_degrees(obj, &geo).unwrap();
        assert!((degrees - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_leg() {
        let (obj, geo) = right_angle();
        let dim = AngleDimension::new("Angle 1", 1, 1, 2);
        assert!(dim.measurement_radians(obj, &geo).is_none());
    }

    #[test]
    fn test_defaults() {
        let dim = AngleDimension::new("Angle 1", 0, 1, 2);
        assert_eq!(dim.radius, 0.05);
        assert!(!dim.reflex);
    }
}
