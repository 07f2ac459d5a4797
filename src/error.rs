//! Error types for archdim

use crate::dimensions::{DimensionKind, VertexRef};
use std::io;
use thiserror::Error;

/// Main error type for archdim operations
#[derive(Debug, Error)]
pub enum DimensionError {
    /// The current selection does not satisfy an operator's requirement
    #[error("Selection error: {0}")]
    Selection(String),

    /// Operator invoked outside of the context it supports
    #[error("Context error: {0}")]
    Context(String),

    /// Intra-kind index outside of the kind's collection
    #[error("{kind} index {index} out of range (len {len})")]
    OutOfRange {
        kind: DimensionKind,
        index: usize,
        len: usize,
    },

    /// Index entry points at a slot now holding a different record
    #[error("Stale index entry: {kind} index {index} no longer refers to the same record")]
    StaleEntry { kind: DimensionKind, index: usize },

    /// Display position outside of the index entry list
    #[error("Position {position} out of range (len {len})")]
    PositionOutOfRange { position: usize, len: usize },

    /// A record of the same kind already spans this vertex pair
    #[error("{kind} dimension already exists between {a} and {b}")]
    DuplicateSegment {
        kind: DimensionKind,
        a: VertexRef,
        b: VertexRef,
    },

    /// A style with this name is already in the table
    #[error("Style '{0}' already exists")]
    DuplicateStyle(String),

    /// Unrecognized dimension kind tag
    #[error("Unknown dimension kind: {0}")]
    UnknownKind(String),

    /// Malformed defaults configuration
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// Defaults parsed but hold an out-of-range value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error occurred while loading configuration
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl DimensionError {
    /// Whether the error is reported to the user rather than being a defect
    pub fn is_user_facing(&self) -> bool {
        matches!(self, DimensionError::Selection(_) | DimensionError::Context(_))
    }
}

/// Result type alias for archdim operations
pub type Result<T> = std::result::Result<T, DimensionError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ObjectId;

    #[test]
    fn test_error_display() {
        let err = DimensionError::OutOfRange {
            kind: DimensionKind::Aligned,
            index: 3,
            len: 2,
        };
        assert_eq!(err.to_string(), "Aligned index 3 out of range (len 2)");
    }

    #[test]
    fn test_duplicate_segment_display() {
        let obj = ObjectId::new(1);
        let err = DimensionError::DuplicateSegment {
            kind: DimensionKind::Axis,
            a: VertexRef::vertex(obj, 0),
            b: VertexRef::vertex(obj, 1),
        };
        assert_eq!(
            err.to_string(),
            "Axis dimension already exists between #1:0 and #1:1"
        );
    }

    #[test]
    fn test_user_facing() {
        assert!(DimensionError::Selection("x".into()).is_user_facing());
        assert!(DimensionError::Context("x".into()).is_user_facing());
        assert!(!DimensionError::DuplicateStyle("x".into()).is_user_facing());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: DimensionError = io_err.into();
        assert!(matches!(err, DimensionError::Io(_)));
    }
}
