//! # Geometry
//!
//! 2D vectors, small matrices, and affine transformations.
//!
//! Everything in the simulation that has a position goes through this
//! module: shape vertices, robot poses, and the odometry integration all
//! use `Vector2` and `AffineTransform`.

mod approx;
mod errors;
mod matrix;
mod transform;
mod vector;

pub use approx::ApproxEq;
pub use errors::{GeometryError, GeometryResult};
pub use matrix::{Matrix2, Matrix3};
pub use transform::{AffineTransform, RotationDirection, ScaleMode, Transformable};
pub use vector::{Vector2, Vector3};
