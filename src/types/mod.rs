//! Geometric and identifier types

pub mod bounds;
pub mod color;
pub mod handle;
pub mod vector;

pub use bounds::BoundingBox3D;
pub use color::Color;
pub use handle::{DimensionId, ObjectId};
pub use vector::{MeasureAxis, Vector3};
