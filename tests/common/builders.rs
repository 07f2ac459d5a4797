//! Test registry builders.

#![allow(dead_code)]

use archdim::{
    AlignedDimension, AngleDimension, ArcDimension, AxisDimension, AxisFlags, BoundsDimension,
    DimensionKind, DimensionRecord, DimensionRegistry, MeasureAxis, ObjectId, VertexRef,
};

pub const OWNER: ObjectId = ObjectId::new(1);

pub fn aligned(a: u32, b: u32) -> AlignedDimension {
    AlignedDimension::new(
        format!("Dimension {a}-{b}"),
        VertexRef::vertex(OWNER, a),
        VertexRef::vertex(OWNER, b),
    )
}

pub fn axis(a: u32, b: u32, measure: MeasureAxis) -> AxisDimension {
    AxisDimension::new(
        format!("Axis {a}-{b}"),
        VertexRef::vertex(OWNER, a),
        VertexRef::vertex(OWNER, b),
        measure,
    )
}

pub fn angle(a: u32, b: u32, c: u32) -> AngleDimension {
    AngleDimension::new(format!("Angle {a}-{b}-{c}"), a, b, c)
}

pub fn bounds() -> BoundsDimension {
    BoundsDimension::new("Bounding Box Dimension", AxisFlags::all())
}

/// A record of the given kind, distinguished by `seed`
pub fn record_of(kind: DimensionKind, seed: u32) -> DimensionRecord {
    match kind {
        DimensionKind::Aligned => aligned(seed, seed + 1).into(),
        DimensionKind::Angle => angle(seed, seed + 1, seed + 2).into(),
        DimensionKind::Axis => axis(seed, seed + 1, MeasureAxis::X).into(),
        DimensionKind::Bounds => bounds().into(),
        DimensionKind::Arc => ArcDimension::new(format!("Arc {seed}"), seed, seed + 1, seed + 2).into(),
    }
}

/// Aligned, Angle, Aligned, Bounds, created in that order
pub fn mixed_registry() -> DimensionRegistry {
    let mut registry = DimensionRegistry::new(OWNER);
    registry.create(aligned(0, 1));
    registry.create(angle(0, 1, 2));
    registry.create(aligned(1, 2));
    registry.create(bounds());
    registry
}
