//! # Input
//!
//! Keyboard control mapping. The browser forwards raw key events; this
//! module classifies them into control keys and turns press/release pairs
//! into simulation commands.
//!
//! WASD and the arrow keys are both accepted, case-insensitively. Pressing
//! a movement key starts motion at the default speed; releasing it stops
//! motion. Pressing a steering key starts turning at the default rate;
//! releasing it stops turning.

use serde::{Deserialize, Serialize};

use crate::simulation::{Simulation, SimulationResult};

/// The four control keys the simulation reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlKey {
    Forward,
    Backward,
    Left,
    Right,
}

/// Classify a raw key name into a control key.
///
/// Accepts the browser's `KeyboardEvent.key` values: `w`/`ArrowUp`,
/// `s`/`ArrowDown`, `a`/`ArrowLeft`, `d`/`ArrowRight`, in any casing.
/// Every other key is ignored.
pub fn classify(key: &str) -> Option<ControlKey> {
    match key.to_ascii_lowercase().as_str() {
        "w" | "arrowup" => Some(ControlKey::Forward),
        "s" | "arrowdown" => Some(ControlKey::Backward),
        "a" | "arrowleft" => Some(ControlKey::Left),
        "d" | "arrowright" => Some(ControlKey::Right),
        _ => None,
    }
}

/// Apply a control key press or release to the simulation.
///
/// Left steers counterclockwise, right steers clockwise. Releasing a
/// steering key stops turning; releasing a movement key stops motion.
pub fn apply(
    simulation: &mut Simulation,
    key: ControlKey,
    pressed: bool,
) -> SimulationResult<()> {
    match (key, pressed) {
        (ControlKey::Forward, true) => simulation.start_moving_forward(None),
        (ControlKey::Backward, true) => simulation.start_moving_backward(None),
        (ControlKey::Forward | ControlKey::Backward, false) => {
            simulation.stop_moving();
            Ok(())
        }
        (ControlKey::Left, true) => simulation.start_turning_counterclockwise(None),
        (ControlKey::Right, true) => simulation.start_turning_clockwise(None),
        (ControlKey::Left | ControlKey::Right, false) => {
            simulation.stop_turning();
            Ok(())
        }
    }
}
