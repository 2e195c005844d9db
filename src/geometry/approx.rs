//! Approximate equality with an explicit threshold.
//!
//! Floating point comparisons throughout the simulation go through this
//! trait so the tolerance is always stated at the call site.

/// Comparison within an absolute threshold
pub trait ApproxEq {
    /// Returns true if `self` and `other` differ by at most `threshold`
    /// in every component
    fn approx_eq(&self, other: &Self, threshold: f64) -> bool;
}

impl ApproxEq for f64 {
    fn approx_eq(&self, other: &Self, threshold: f64) -> bool {
        (self - other).abs() <= threshold
    }
}
