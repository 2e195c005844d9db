//! # Observability
//!
//! Structured JSON logging for the simulation server.
//!
//! Logging is read-only with respect to the simulation: a failing log
//! write never fails or slows the caller. Events worth logging are the
//! server lifecycle (start, ready), tick-loop failures, and control
//! changes coming in over the API (speed, steering angle).

mod logger;

pub use logger::{Logger, Severity};
