//! Bounding box dimension

use super::DimensionCommon;
use crate::selection::GeometrySource;
use crate::types::{BoundingBox3D, MeasureAxis, ObjectId, Vector3};
use bitflags::bitflags;

bitflags! {
    /// Axes annotated by a bounding box dimension
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct AxisFlags: u8 {
        const X = 1;
        const Y = 2;
        const Z = 4;
    }
}

impl AxisFlags {
    /// Flag for a single axis
    pub fn from_axis(axis: MeasureAxis) -> Self {
        match axis {
            MeasureAxis::X => AxisFlags::X,
            MeasureAxis::Y => AxisFlags::Y,
            MeasureAxis::Z => AxisFlags::Z,
        }
    }

    /// Build from an `[x, y, z]` toggle vector
    pub fn from_bools(toggles: [bool; 3]) -> Self {
        let mut flags = AxisFlags::empty();
        for (axis, on) in MeasureAxis::ALL.into_iter().zip(toggles) {
            flags.set(AxisFlags::from_axis(axis), on);
        }
        flags
    }

    /// Convert to an `[x, y, z]` toggle vector
    pub fn to_bools(self) -> [bool; 3] {
        MeasureAxis::ALL.map(|axis| self.contains(AxisFlags::from_axis(axis)))
    }
}

/// Bounding box dimension
///
/// Annotates the extents of the owning object's bounding box along each
/// enabled axis. Which box corners anchor the annotation is decided at
/// draw time, so only the axis toggles and per-axis texts are stored.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundsDimension {
    pub common: DimensionCommon,
    /// Axes to annotate
    pub draw_axes: AxisFlags,
    /// User text for the X, Y and Z annotations
    pub text_fields: [String; 3],
}

impl BoundsDimension {
    /// Create a new bounding box dimension
    pub fn new(name: impl Into<String>, draw_axes: AxisFlags) -> Self {
        Self {
            common: DimensionCommon::new(name),
            draw_axes,
            text_fields: Default::default(),
        }
    }

    /// User text of one axis
    pub fn text(&self, axis: MeasureAxis) -> &str {
        &self.text_fields[axis.ordinal()]
    }

    /// Set the user text of one axis
    pub fn set_text(&mut self, axis: MeasureAxis, text: impl Into<String>) {
        self.text_fields[axis.ordinal()] = text.into();
    }

    /// Extents of the owner's bounding box, zero on disabled axes
    pub fn measurement(&self, owner: ObjectId, geometry: &dyn GeometrySource) -> Option<Vector3> {
        let bbox = BoundingBox3D::from_points(&geometry.object_vertices(owner))?;
        let [x, y, z] = MeasureAxis::ALL.map(|axis| {
            if self.draw_axes.contains(AxisFlags::from_axis(axis)) {
                bbox.extent(axis)
            } else {
                0.0
            }
        });
        Some(Vector3::new(x, y, z))
    }
}

impl Default for BoundsDimension {
    fn default() -> Self {
        Self::new("Bounding Box Dimension", AxisFlags::empty())
    }
}

impl_dimension!(BoundsDimension, Bounds);
