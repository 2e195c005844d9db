//! # Geometry Errors
//!
//! Error types for geometric operations.

use thiserror::Error;

/// Result type for geometry operations
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Errors produced by geometric operations
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// The matrix has a zero determinant and cannot be inverted
    #[error("Matrix is singular and cannot be inverted")]
    SingularMatrix,
}
