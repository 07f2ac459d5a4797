//! Arc dimension

use super::DimensionCommon;
use crate::selection::GeometrySource;
use crate::style::EndcapStyle;
use crate::types::{ObjectId, Vector3};
use std::f64::consts::TAU;

/// Arc dimension
///
/// The arc runs from `point_a` through `point_b` to `point_c` on the circle
/// through all three vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcDimension {
    pub common: DimensionCommon,
    /// Arc start vertex
    pub point_a: u32,
    /// Vertex on the arc between the extremes
    pub point_b: u32,
    /// Arc end vertex
    pub point_c: u32,
    /// Display the arc length
    pub show_length: bool,
    /// Display the radius and center
    pub show_radius: bool,
    /// Endcap of the radius leader
    pub endcap_c: EndcapStyle,
}

/// Measured values of an arc dimension
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcMeasurement {
    /// Circle center
    pub center: Vector3,
    /// Circle radius
    pub radius: f64,
    /// Central angle from A to C through B, in radians
    pub angle: f64,
    /// Arc length from A to C through B
    pub length: f64,
}

impl ArcDimension {
    /// Create a new arc dimension
    pub fn new(name: impl Into<String>, point_a: u32, point_b: u32, point_c: u32) -> Self {
        Self {
            common: DimensionCommon::new(name),
            point_a,
            point_b,
            point_c,
            show_length: true,
            show_radius: true,
            endcap_c: EndcapStyle::Triangle,
        }
    }

    /// Measure the arc through the three vertices
    ///
    /// Returns `None` when a vertex is missing or the vertices are collinear.
    pub fn measurement(
        &self,
        owner: ObjectId,
        geometry: &dyn GeometrySource,
    ) -> Option<ArcMeasurement> {
        let a = geometry.vertex_position(owner, self.point_a)?;
        let b = geometry.vertex_position(owner, self.point_b)?;
        let c = geometry.vertex_position(owner, self.point_c)?;
        circle_through(a, b, c)
    }
}

/// Circumscribed arc of a triangle, walked A -> B -> C
///
/// The normal `(B - A) x (C - A)` orients the plane so that A, B, C appear
/// counter-clockwise; the arc is the counter-clockwise sweep from A to C.
fn circle_through(a: Vector3, b: Vector3, c: Vector3) -> Option<ArcMeasurement> {
    let u = b - a;
    let v = c - a;
    let w = u.cross(&v);
    let w_len_sq = w.length_squared();
    // |u x v|^2 = |u|^2 |v|^2 sin^2, so the test is scale-free
    if w_len_sq <= f64::EPSILON * u.length_squared() * v.length_squared() {
        return None;
    }

    let center = a + (v.cross(&w) * u.length_squared() + w.cross(&u) * v.length_squared())
        / (2.0 * w_len_sq);
    let radius = center.distance(&a);

    let normal = w.normalize();
    let from = a - center;
    let to = c - center;
    let mut angle = from.cross(&to).dot(&normal).atan2(from.dot(&to));
    if angle <= 0.0 {
        angle += TAU;
    }

    Some(ArcMeasurement {
        center,
        radius,
        angle,
        length: radius * angle,
    })
}

impl_dimension!(ArcDimension, Arc);
