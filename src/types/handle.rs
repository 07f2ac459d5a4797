//! Identifier types
//!
//! [`ObjectId`] names an object of the host scene (a mesh, empty, camera...).
//! [`DimensionId`] is the registry-assigned identity of one dimension record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a host scene object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(u64);

impl ObjectId {
    /// Create a new object id from a u64 value
    #[inline]
    pub const fn new(value: u64) -> Self {
        ObjectId(value)
    }

    /// Get the raw u64 value
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ObjectId {
    fn from(value: u64) -> Self {
        ObjectId(value)
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identity of a dimension record
///
/// Assigned by the registry when a record is inserted. Id 0 is reserved
/// for records that were never inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct DimensionId(u64);

impl DimensionId {
    /// The null/unassigned id (0)
    pub const NULL: DimensionId = DimensionId(0);

    /// Create a new id from a u64 value
    #[inline]
    pub const fn new(value: u64) -> Self {
        DimensionId(value)
    }

    /// Get the raw u64 value
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Check if this is the null id
    #[inline]
    pub const fn is_null(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for DimensionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#X}", self.0)
    }
}
