//! Sum types over the five dimension variants

use super::{
    AlignedDimension, AngleDimension, ArcDimension, AxisDimension, BoundsDimension, Dimension,
    DimensionCommon, DimensionKind,
};
use crate::types::DimensionId;

/// Owned dimension record of any kind
#[derive(Debug, Clone, PartialEq)]
pub enum DimensionRecord {
    Aligned(AlignedDimension),
    Angle(AngleDimension),
    Axis(AxisDimension),
    Bounds(BoundsDimension),
    Arc(ArcDimension),
}

impl DimensionRecord {
    /// Borrow the record as a trait object
    pub fn as_dimension(&self) -> &dyn Dimension {
        match self {
            DimensionRecord::Aligned(d) => d,
            DimensionRecord::Angle(d) => d,
            DimensionRecord::Axis(d) => d,
            DimensionRecord::Bounds(d) => d,
            DimensionRecord::Arc(d) => d,
        }
    }

    /// Mutably borrow the record as a trait object
    pub fn as_dimension_mut(&mut self) -> &mut dyn Dimension {
        match self {
            DimensionRecord::Aligned(d) => d,
            DimensionRecord::Angle(d) => d,
            DimensionRecord::Axis(d) => d,
            DimensionRecord::Bounds(d) => d,
            DimensionRecord::Arc(d) => d,
        }
    }

    /// Variant discriminant
    pub fn kind(&self) -> DimensionKind {
        self.as_dimension().kind()
    }

    /// Shared fields
    pub fn common(&self) -> &DimensionCommon {
        self.as_dimension().common()
    }

    /// Mutable shared fields
    pub fn common_mut(&mut self) -> &mut DimensionCommon {
        self.as_dimension_mut().common_mut()
    }
}

impl From<AlignedDimension> for DimensionRecord {
    fn from(d: AlignedDimension) -> Self {
        DimensionRecord::Aligned(d)
    }
}

impl From<AngleDimension> for DimensionRecord {
    fn from(d: AngleDimension) -> Self {
        DimensionRecord::Angle(d)
    }
}

impl From<AxisDimension> for DimensionRecord {
    fn from(d: AxisDimension) -> Self {
        DimensionRecord::Axis(d)
    }
}

impl From<BoundsDimension> for DimensionRecord {
    fn from(d: BoundsDimension) -> Self {
        DimensionRecord::Bounds(d)
    }
}

impl From<ArcDimension> for DimensionRecord {
    fn from(d: ArcDimension) -> Self {
        DimensionRecord::Arc(d)
    }
}

/// Borrowed view of a record stored in a registry
#[derive(Debug, Clone, Copy)]
pub enum DimensionRef<'a> {
    Aligned(&'a AlignedDimension),
    Angle(&'a AngleDimension),
    Axis(&'a AxisDimension),
    Bounds(&'a BoundsDimension),
    Arc(&'a ArcDimension),
}

impl<'a> DimensionRef<'a> {
    /// Borrow the record as a trait object
    pub fn as_dimension(&self) -> &'a dyn Dimension {
        match *self {
            DimensionRef::Aligned(d) => d,
            DimensionRef::Angle(d) => d,
            DimensionRef::Axis(d) => d,
            DimensionRef::Bounds(d) => d,
            DimensionRef::Arc(d) => d,
        }
    }

    /// Variant discriminant
    pub fn kind(&self) -> DimensionKind {
        self.as_dimension().kind()
    }

    /// Shared fields
    pub fn common(&self) -> &'a DimensionCommon {
        self.as_dimension().common()
    }

    /// Registry-assigned identity
    pub fn id(&self) -> DimensionId {
        self.common().id
    }

    /// Display name
    pub fn name(&self) -> &'a str {
        &self.common().name
    }

    /// Clone into an owned record
    pub fn to_record(&self) -> DimensionRecord {
        match *self {
            DimensionRef::Aligned(d) => DimensionRecord::Aligned(d.clone()),
            DimensionRef::Angle(d) => DimensionRecord::Angle(d.clone()),
            DimensionRef::Axis(d) => DimensionRecord::Axis(d.clone()),
            DimensionRef::Bounds(d) => DimensionRecord::Bounds(d.clone()),
            DimensionRef::Arc(d) => DimensionRecord::Arc(d.clone()),
        }
    }
}

/// Mutable view of a record stored in a registry
#[derive(Debug)]
pub enum DimensionRefMut<'a> {
    Aligned(&'a mut AlignedDimension),
    Angle(&'a mut AngleDimension),
    Axis(&'a mut AxisDimension),
    Bounds(&'a mut BoundsDimension),
    Arc(&'a mut ArcDimension),
}

impl<'a> DimensionRefMut<'a> {
    /// Borrow the record as a trait object
    pub fn as_dimension_mut(&mut self) -> &mut dyn Dimension {
        match self {
            DimensionRefMut::Aligned(d) => &mut **d,
            DimensionRefMut::Angle(d) => &mut **d,
            DimensionRefMut::Axis(d) => &mut **d,
            DimensionRefMut::Bounds(d) => &mut **d,
            DimensionRefMut::Arc(d) => &mut **d,
        }
    }

    /// Variant discriminant
    pub fn kind(&self) -> DimensionKind {
        match self {
            DimensionRefMut::Aligned(_) => DimensionKind::Aligned,
            DimensionRefMut::Angle(_) => DimensionKind::Angle,
            DimensionRefMut::Axis(_) => DimensionKind::Axis,
            DimensionRefMut::Bounds(_) => DimensionKind::Bounds,
            DimensionRefMut::Arc(_) => DimensionKind::Arc,
        }
    }

    /// Mutable shared fields
    pub fn common_mut(&mut self) -> &mut DimensionCommon {
        self.as_dimension_mut().common_mut()
    }
}
