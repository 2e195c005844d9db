//! # Simulation Errors
//!
//! Error types for simulation control.

use thiserror::Error;

/// Result type for simulation operations
pub type SimulationResult<T> = Result<T, SimulationError>;

/// Errors produced by simulation control operations
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SimulationError {
    /// `step` was called with a negative time delta
    #[error("Time step must be non-negative, got {0}")]
    NegativeTimeStep(f64),

    /// A controlled quantity fell below its configured minimum
    #[error("{quantity} {value} is below the minimum {bound}")]
    BelowMinimum {
        quantity: &'static str,
        value: f64,
        bound: f64,
    },

    /// A controlled quantity exceeded its configured maximum
    #[error("{quantity} {value} is above the maximum {bound}")]
    AboveMaximum {
        quantity: &'static str,
        value: f64,
        bound: f64,
    },
}
