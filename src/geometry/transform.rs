//! Affine transformations in homogeneous coordinates.
//!
//! An `AffineTransform` is built up from translate / rotate / scale steps.
//! Each builder call composes its matrix ON TOP of the accumulated one, so
//! `AffineTransform::identity().rotate(a).translate(x, y)` rotates first and
//! translates second when applied to a point.

use super::approx::ApproxEq;
use super::errors::GeometryResult;
use super::matrix::Matrix3;
use super::vector::{Vector2, Vector3};

/// Sense of a rotation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationDirection {
    /// Positive angles rotate counterclockwise (the default sense)
    Counterclockwise,
    /// Positive angles rotate clockwise
    Clockwise,
}

/// Sense of a scale step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleMode {
    /// Multiply by the given factors (the default sense)
    Enlarge,
    /// Divide by the given factors
    Shrink,
}

/// Anything expressible as a sequence of 2D points
pub trait Transformable: Sized {
    /// Rebuild `self` with every point passed through `f`
    fn map_points(&self, f: &mut dyn FnMut(Vector2) -> Vector2) -> Self;
}

impl Transformable for Vector2 {
    fn map_points(&self, f: &mut dyn FnMut(Vector2) -> Vector2) -> Self {
        f(*self)
    }
}

/// A 2D affine transformation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    matrix: Matrix3,
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineTransform {
    /// The identity transform
    pub fn identity() -> Self {
        Self {
            matrix: Matrix3::identity(),
        }
    }

    /// Create a transform directly from a homogeneous matrix
    pub fn from_matrix(matrix: Matrix3) -> Self {
        Self { matrix }
    }

    /// The underlying homogeneous matrix
    pub fn matrix(&self) -> Matrix3 {
        self.matrix
    }

    /// Compose a translation on top of this transform
    pub fn translate(self, x: f64, y: f64) -> Self {
        let step = Matrix3::new([1.0, 0.0, x], [0.0, 1.0, y], [0.0, 0.0, 1.0]);
        Self::from_matrix(step * self.matrix)
    }

    /// Compose a translation by a vector on top of this transform
    pub fn translate_vec(self, v: Vector2) -> Self {
        self.translate(v.x, v.y)
    }

    /// Compose a counterclockwise rotation about the origin
    pub fn rotate(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        let step = Matrix3::new([cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0]);
        Self::from_matrix(step * self.matrix)
    }

    /// Compose a rotation with an explicit sense
    pub fn rotate_toward(self, angle: f64, direction: RotationDirection) -> Self {
        match direction {
            RotationDirection::Counterclockwise => self.rotate(angle),
            RotationDirection::Clockwise => self.rotate(-angle),
        }
    }

    /// Compose a uniform scale about the origin
    pub fn scale(self, factor: f64) -> Self {
        self.scale_xy(factor, factor)
    }

    /// Compose a per-axis scale about the origin
    pub fn scale_xy(self, x: f64, y: f64) -> Self {
        let step = Matrix3::new([x, 0.0, 0.0], [0.0, y, 0.0], [0.0, 0.0, 1.0]);
        Self::from_matrix(step * self.matrix)
    }

    /// Compose a per-axis scale with an explicit sense
    pub fn scale_toward(self, x: f64, y: f64, mode: ScaleMode) -> Self {
        match mode {
            ScaleMode::Enlarge => self.scale_xy(x, y),
            ScaleMode::Shrink => self.scale_xy(1.0 / x, 1.0 / y),
        }
    }

    /// Compose another whole transform on top of this one
    pub fn then(self, other: &AffineTransform) -> Self {
        Self::from_matrix(other.matrix * self.matrix)
    }

    /// The inverse transform; fails for singular transforms (e.g. scale by 0)
    pub fn inverse(&self) -> GeometryResult<Self> {
        Ok(Self::from_matrix(self.matrix.inverse()?))
    }

    /// Apply this transform to a single point
    pub fn apply_point(&self, point: Vector2) -> Vector2 {
        (self.matrix * Vector3::from_point(point)).into_point()
    }

    /// Apply this transform to anything transformable
    pub fn apply<T: Transformable>(&self, transformable: &T) -> T {
        transformable.map_points(&mut |p| self.apply_point(p))
    }

    /// Undo this transform on anything transformable
    pub fn unapply<T: Transformable>(&self, transformable: &T) -> GeometryResult<T> {
        let inverse = self.inverse()?;
        Ok(transformable.map_points(&mut |p| inverse.apply_point(p)))
    }
}

impl ApproxEq for AffineTransform {
    fn approx_eq(&self, other: &Self, threshold: f64) -> bool {
        self.matrix.approx_eq(&other.matrix, threshold)
    }
}
