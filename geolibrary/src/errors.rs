//! Error and result types for geometry operations.

use thiserror::Error;

use crate::geometry::GeometryKind;

/// Errors raised by the geometry algebra and the WKT writer.
///
/// The display messages are part of the public contract and never change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// The writer was asked to serialize a geometry that is not valid.
    #[error("Invalid geometry")]
    InvalidGeometry { kind: GeometryKind },

    /// The algebra has no rule for this pair of variants.
    #[error("Not supported type!")]
    UnsupportedCombination {
        left: GeometryKind,
        right: GeometryKind,
    },
}

/// Result type for geometry operations
pub type GeometryResult<T> = Result<T, GeometryError>;
