//! Vector type for geometric operations

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// One of the three world axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MeasureAxis {
    /// Measure only the X axis
    #[default]
    X,
    /// Measure only the Y axis
    Y,
    /// Measure only the Z axis
    Z,
}

impl MeasureAxis {
    /// All axes in X, Y, Z order
    pub const ALL: [MeasureAxis; 3] = [MeasureAxis::X, MeasureAxis::Y, MeasureAxis::Z];

    /// Position of the axis in an `[x, y, z]` triple
    pub fn ordinal(&self) -> usize {
        match self {
            MeasureAxis::X => 0,
            MeasureAxis::Y => 1,
            MeasureAxis::Z => 2,
        }
    }
}

impl fmt::Display for MeasureAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeasureAxis::X => write!(f, "X"),
            MeasureAxis::Y => write!(f, "Y"),
            MeasureAxis::Z => write!(f, "Z"),
        }
    }
}

/// 3D vector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// Create a new 3D vector
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    /// Zero vector
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);

    /// Unit X vector
    pub const UNIT_X: Vector3 = Vector3::new(1.0, 0.0, 0.0);

    /// Unit Y vector
    pub const UNIT_Y: Vector3 = Vector3::new(0.0, 1.0, 0.0);

    /// Unit Z vector
    pub const UNIT_Z: Vector3 = Vector3::new(0.0, 0.0, 1.0);

    /// Calculate the length (magnitude) of the vector
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Calculate the squared length (avoids sqrt for performance)
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Normalize the vector (make it unit length)
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len > 0.0 {
            *self / len
        } else {
            *self
        }
    }

    /// Dot product
    pub fn dot(&self, other: &Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product
    pub fn cross(&self, other: &Vector3) -> Vector3 {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Distance to another point
    pub fn distance(&self, other: &Vector3) -> f64 {
        (*self - *other).length()
    }

    /// Single coordinate along an axis
    pub fn component(&self, axis: MeasureAxis) -> f64 {
        match axis {
            MeasureAxis::X => self.x,
            MeasureAxis::Y => self.y,
            MeasureAxis::Z => self.z,
        }
    }

    /// Unsigned angle to another vector, in radians
    ///
    /// Returns `None` when either vector has zero length.
    pub fn angle_to(&self, other: &Vector3) -> Option<f64> {
        let denom = self.length() * other.length();
        if denom <= f64::EPSILON {
            return None;
        }
        Some((self.dot(other) / denom).clamp(-1.0, 1.0).acos())
    }
}

impl Default for Vector3 {
    fn default() -> Self {
        Vector3::ZERO
    }
}

impl Add for Vector3 {
    type Output = Vector3;
    fn add(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;
    fn sub(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;
    fn mul(self, scalar: f64) -> Vector3 {
        Vector3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Div<f64> for Vector3 {
    type Output = Vector3;
    fn div(self, scalar: f64) -> Vector3 {
        Vector3::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;
    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector3_cross() {
        let cross = Vector3::UNIT_X.cross(&Vector3::UNIT_Y);
        assert_eq!(cross, Vector3::UNIT_Z);
    }

    #[test]
    fn test_vector3_operations() {
        let v1 = Vector3::new(1.0, 2.0, 3.0);
        let v2 = Vector3::new(4.0, 5.0, 6.0);

        assert_eq!(v1 + v2, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(-v1, Vector3::new(-1.0, -2.0, -3.0));
        assert_eq!(v2 - v1, Vector3::new(3.0, 3.0, 3.0));
    }

    #[test]
    fn test_vector3_distance() {
        let a = Vector3::new(0.0, 0.0, 0.0);
        let b = Vector3::new(3.0, 4.0, 0.0);
        assert_eq!(a.distance(&b), 5.0);
    }

    #[test]
    fn test_component() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.component(MeasureAxis::X), 1.0);
        assert_eq!(v.component(MeasureAxis::Y), 2.0);
        assert_eq!(v.component(MeasureAxis::Z), 3.0);
    }

    #[test]
    fn test_angle_to() {
        let right = Vector3::UNIT_X.angle_to(&Vector3::UNIT_Y).unwrap();
        assert!((right - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!(Vector3::ZERO.angle_to(&Vector3::UNIT_X).is_none());
    }
}
