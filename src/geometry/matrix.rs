//! Small fixed-size matrices.
//!
//! `Matrix3` backs the affine transforms; `Matrix2` exists for determinant
//! cross-checks and completeness. Both are row-major.

use std::ops::Mul;

use super::approx::ApproxEq;
use super::errors::{GeometryError, GeometryResult};
use super::vector::{Vector2, Vector3};

/// A 2x2 matrix, row-major
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix2 {
    rows: [[f64; 2]; 2],
}

impl Matrix2 {
    /// Create a matrix from two rows
    pub fn new(row0: [f64; 2], row1: [f64; 2]) -> Self {
        Self { rows: [row0, row1] }
    }

    /// The identity matrix
    pub fn identity() -> Self {
        Self::new([1.0, 0.0], [0.0, 1.0])
    }

    /// Entry at (row, column)
    pub fn get(&self, row: usize, column: usize) -> f64 {
        self.rows[row][column]
    }

    /// Determinant
    pub fn det(&self) -> f64 {
        self.rows[0][0] * self.rows[1][1] - self.rows[0][1] * self.rows[1][0]
    }

    /// Transpose
    pub fn transpose(&self) -> Self {
        Self::new(
            [self.rows[0][0], self.rows[1][0]],
            [self.rows[0][1], self.rows[1][1]],
        )
    }

    /// Inverse; fails when the determinant is zero
    pub fn inverse(&self) -> GeometryResult<Self> {
        let det = self.det();
        if det == 0.0 {
            return Err(GeometryError::SingularMatrix);
        }

        Ok(Self::new(
            [self.rows[1][1] / det, -self.rows[0][1] / det],
            [-self.rows[1][0] / det, self.rows[0][0] / det],
        ))
    }
}

impl Mul for Matrix2 {
    type Output = Matrix2;

    fn mul(self, other: Matrix2) -> Matrix2 {
        let mut rows = [[0.0; 2]; 2];
        for (r, row) in rows.iter_mut().enumerate() {
            for (c, entry) in row.iter_mut().enumerate() {
                *entry = (0..2).map(|k| self.rows[r][k] * other.rows[k][c]).sum();
            }
        }
        Matrix2 { rows }
    }
}

impl Mul<Vector2> for Matrix2 {
    type Output = Vector2;

    fn mul(self, v: Vector2) -> Vector2 {
        Vector2::new(
            self.rows[0][0] * v.x + self.rows[0][1] * v.y,
            self.rows[1][0] * v.x + self.rows[1][1] * v.y,
        )
    }
}

impl Mul<Matrix2> for f64 {
    type Output = Matrix2;

    fn mul(self, m: Matrix2) -> Matrix2 {
        Matrix2::new(
            [self * m.rows[0][0], self * m.rows[0][1]],
            [self * m.rows[1][0], self * m.rows[1][1]],
        )
    }
}

impl ApproxEq for Matrix2 {
    fn approx_eq(&self, other: &Self, threshold: f64) -> bool {
        (0..2).all(|r| (0..2).all(|c| self.rows[r][c].approx_eq(&other.rows[r][c], threshold)))
    }
}

/// A 3x3 matrix, row-major
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3 {
    rows: [[f64; 3]; 3],
}

impl Matrix3 {
    /// Create a matrix from three rows
    pub fn new(row0: [f64; 3], row1: [f64; 3], row2: [f64; 3]) -> Self {
        Self {
            rows: [row0, row1, row2],
        }
    }

    /// The identity matrix
    pub fn identity() -> Self {
        Self::new([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0])
    }

    /// Entry at (row, column)
    pub fn get(&self, row: usize, column: usize) -> f64 {
        self.rows[row][column]
    }

    /// Determinant, by the rule of Sarrus
    pub fn det(&self) -> f64 {
        let m = &self.rows;
        m[0][0] * m[1][1] * m[2][2] + m[0][1] * m[1][2] * m[2][0] + m[0][2] * m[1][0] * m[2][1]
            - m[0][2] * m[1][1] * m[2][0]
            - m[0][0] * m[1][2] * m[2][1]
            - m[0][1] * m[1][0] * m[2][2]
    }

    /// Transpose
    pub fn transpose(&self) -> Self {
        let m = &self.rows;
        Self::new(
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        )
    }

    /// Inverse via the adjugate; fails when the determinant is zero
    pub fn inverse(&self) -> GeometryResult<Self> {
        let det = self.det();
        if det == 0.0 {
            return Err(GeometryError::SingularMatrix);
        }

        let m = &self.rows;
        let cofactors = Self::new(
            [
                m[1][1] * m[2][2] - m[1][2] * m[2][1],
                -(m[1][0] * m[2][2] - m[1][2] * m[2][0]),
                m[1][0] * m[2][1] - m[1][1] * m[2][0],
            ],
            [
                -(m[0][1] * m[2][2] - m[0][2] * m[2][1]),
                m[0][0] * m[2][2] - m[0][2] * m[2][0],
                -(m[0][0] * m[2][1] - m[0][1] * m[2][0]),
            ],
            [
                m[0][1] * m[1][2] - m[0][2] * m[1][1],
                -(m[0][0] * m[1][2] - m[0][2] * m[1][0]),
                m[0][0] * m[1][1] - m[0][1] * m[1][0],
            ],
        );

        Ok((1.0 / det) * cofactors.transpose())
    }
}

impl Mul for Matrix3 {
    type Output = Matrix3;

    fn mul(self, other: Matrix3) -> Matrix3 {
        let mut rows = [[0.0; 3]; 3];
        for (r, row) in rows.iter_mut().enumerate() {
            for (c, entry) in row.iter_mut().enumerate() {
                *entry = (0..3).map(|k| self.rows[r][k] * other.rows[k][c]).sum();
            }
        }
        Matrix3 { rows }
    }
}

impl Mul<Vector3> for Matrix3 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        Vector3::new(
            self.rows[0][0] * v.x + self.rows[0][1] * v.y + self.rows[0][2] * v.z,
            self.rows[1][0] * v.x + self.rows[1][1] * v.y + self.rows[1][2] * v.z,
            self.rows[2][0] * v.x + self.rows[2][1] * v.y + self.rows[2][2] * v.z,
        )
    }
}

impl Mul<Matrix3> for f64 {
    type Output = Matrix3;

    fn mul(self, m: Matrix3) -> Matrix3 {
        let mut rows = m.rows;
        for row in rows.iter_mut() {
            for entry in row.iter_mut() {
                *entry *= self;
            }
        }
        Matrix3 { rows }
    }
}

impl ApproxEq for Matrix3 {
    fn approx_eq(&self, other: &Self, threshold: f64) -> bool {
        (0..3).all(|r| (0..3).all(|c| self.rows[r][c].approx_eq(&other.rows[r][c], threshold)))
    }
}
