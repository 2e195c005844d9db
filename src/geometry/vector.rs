//! 2D and 3D vectors.
//!
//! `Vector2` is the workhorse of the simulation: positions, translations,
//! and shape vertices are all `Vector2`. `Vector3` only exists to carry
//! homogeneous coordinates through `Matrix3` multiplication.

use std::ops::{Add, Index, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use super::approx::ApproxEq;

/// A 2D vector
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    /// Create a new 2D vector
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The zero vector
    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Euclidean length
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x - other.x, self.y - other.y)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, scalar: f64) -> Vector2 {
        Vector2::new(self.x * scalar, self.y * scalar)
    }
}

impl Mul<Vector2> for f64 {
    type Output = Vector2;

    fn mul(self, vector: Vector2) -> Vector2 {
        vector * self
    }
}

impl Index<usize> for Vector2 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vector2 index out of range: {}", index),
        }
    }
}

impl ApproxEq for Vector2 {
    fn approx_eq(&self, other: &Self, threshold: f64) -> bool {
        self.x.approx_eq(&other.x, threshold) && self.y.approx_eq(&other.y, threshold)
    }
}

/// A 3D vector, used for homogeneous 2D coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// Create a new 3D vector
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Lift a 2D point into homogeneous coordinates (z = 1)
    pub fn from_point(point: Vector2) -> Self {
        Self::new(point.x, point.y, 1.0)
    }

    /// Project back down to a 2D point, discarding z
    pub fn into_point(self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, scalar: f64) -> Vector3 {
        Vector3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl ApproxEq for Vector3 {
    fn approx_eq(&self, other: &Self, threshold: f64) -> bool {
        self.x.approx_eq(&other.x, threshold)
            && self.y.approx_eq(&other.y, threshold)
            && self.z.approx_eq(&other.z, threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector2_add() {
        let sum = Vector2::new(1.0, 2.0) + Vector2::new(3.0, 4.0);
        assert_eq!(sum, Vector2::new(4.0, 6.0));
    }

    #[test]
    fn test_vector2_scalar_mul_commutes() {
        let v = Vector2::new(3.0, -4.0);
        assert_eq!(v * 2.0, 2.0 * v);
        assert_eq!(v * 2.0, Vector2::new(6.0, -8.0));
    }

    #[test]
    fn test_vector2_length() {
        assert_eq!(Vector2::new(3.0, 4.0).length(), 5.0);
    }

    #[test]
    fn test_vector2_indexing() {
        let v = Vector2::new(3.0, -4.0);
        assert_eq!(v[0], 3.0);
        assert_eq!(v[1], -4.0);
    }

    #[test]
    #[should_panic(expected = "index out of range")]
    fn test_vector2_index_out_of_range_panics() {
        let _ = Vector2::new(0.0, 0.0)[2];
    }

    #[test]
    fn test_homogeneous_round_trip() {
        let p = Vector2::new(7.0, -2.5);
        assert_eq!(Vector3::from_point(p).into_point(), p);
    }
}
