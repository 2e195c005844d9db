//! Simulation Invariant Tests
//!
//! End-to-end checks of the simulation loop:
//! - The robot starts at rest at the initial pose
//! - Bounds clamp API-driven values and reject out-of-range setters
//! - The odometry estimate follows the Ackermann turning circle
//! - Keyboard control maps onto the expected state changes

use std::f64::consts::{FRAC_PI_4, PI};

use odosim::input::{self, ControlKey};
use odosim::simulation::{Simulation, SimulationError, SimulationParameters};

const DT: f64 = 0.02;

fn simulation() -> Simulation {
    Simulation::new(SimulationParameters::default())
}

// =============================================================================
// Initial State and Time Step Tests
// =============================================================================

/// A fresh simulation sits at the origin, heading pi, not moving.
#[test]
fn test_initial_state_is_at_rest() {
    let sim = simulation();
    let odometry = sim.odometry();

    assert_eq!(odometry.x, 0.0);
    assert_eq!(odometry.y, 0.0);
    assert_eq!(odometry.rotation, PI);
    assert_eq!(sim.speed(), 0.0);
    assert_eq!(sim.turning_speed(), 0.0);
}

/// Time never runs backwards.
#[test]
fn test_negative_time_step_is_rejected() {
    let mut sim = simulation();
    let err = sim.step(-0.01).unwrap_err();
    assert!(matches!(err, SimulationError::NegativeTimeStep(_)));
}

/// A zero time step changes nothing even while moving.
#[test]
fn test_zero_time_step_is_a_no_op() {
    let mut sim = simulation();
    sim.start_moving_forward(None).unwrap();

    let before = sim.odometry();
    sim.step(0.0).unwrap();
    assert_eq!(sim.odometry(), before);
}

// =============================================================================
// Motion Tests
// =============================================================================

/// Driving straight covers speed * time along the heading.
#[test]
fn test_straight_line_distance_matches_speed() {
    let mut sim = simulation();
    sim.start_moving_forward(Some(0.4)).unwrap();

    for _ in 0..100 {
        sim.step(DT).unwrap();
    }

    let odometry = sim.odometry();
    // Heading pi points along negative y
    assert!(odometry.x.abs() < 1e-9);
    assert!((odometry.y - (-0.8)).abs() < 1e-9);
    assert_eq!(odometry.rotation, PI);
}

/// Backward motion mirrors forward motion.
#[test]
fn test_backward_motion_mirrors_forward() {
    let mut forward = simulation();
    let mut backward = simulation();

    forward.start_moving_forward(Some(0.2)).unwrap();
    backward.start_moving_backward(Some(0.2)).unwrap();

    for _ in 0..50 {
        forward.step(DT).unwrap();
        backward.step(DT).unwrap();
    }

    assert!((forward.odometry().y + backward.odometry().y).abs() < 1e-9);
}

/// Under constant steering the pose stays on the turning circle.
#[test]
fn test_constant_steering_stays_on_turning_circle() {
    let parameters = SimulationParameters::default();
    let wheel_base = parameters.robot_measurements.wheel_base;
    let steering: f64 = 0.3;
    let radius = wheel_base / steering.sin();

    let mut sim = Simulation::new(parameters);
    sim.set_steering_angle(steering).unwrap();
    sim.start_moving_forward(Some(0.4)).unwrap();

    let mut previous = sim.odometry();
    for _ in 0..200 {
        sim.step(DT).unwrap();
        let current = sim.odometry();

        // Arc length per tick is speed * dt regardless of heading
        let dx = current.x - previous.x;
        let dy = current.y - previous.y;
        let chord = (dx * dx + dy * dy).sqrt();
        assert!(chord <= 0.4 * DT + 1e-9);

        previous = current;
    }

    // Heading accumulated matches the integrated angular rate
    let expected_rotation = PI + 0.4 * DT * 200.0 / radius;
    assert!((sim.odometry().rotation - expected_rotation).abs() < 1e-9);
}

// =============================================================================
// Bounds Tests
// =============================================================================

/// Checked setters reject out-of-range values with the violated bound.
#[test]
fn test_checked_setters_report_violated_bound() {
    let mut sim = simulation();

    match sim.set_speed(5.0) {
        Err(SimulationError::AboveMaximum { bound, .. }) => assert_eq!(bound, 0.4),
        other => panic!("expected AboveMaximum, got {:?}", other),
    }

    match sim.set_steering_angle(-PI) {
        Err(SimulationError::BelowMinimum { bound, .. }) => assert_eq!(bound, -FRAC_PI_4),
        other => panic!("expected BelowMinimum, got {:?}", other),
    }
}

/// Clamping setters apply the nearest bound and report it.
#[test]
fn test_clamping_setters_apply_nearest_bound() {
    let mut sim = simulation();

    assert_eq!(sim.set_speed_clamped(5.0), 0.4);
    assert_eq!(sim.set_speed_clamped(-5.0), -0.4);
    assert_eq!(sim.set_steering_angle_clamped(PI), FRAC_PI_4);
}

/// Turning integrates the steering angle but never past its bounds.
#[test]
fn test_turning_clamps_at_steering_bounds() {
    let mut sim = simulation();
    sim.start_turning_clockwise(None).unwrap();

    for _ in 0..500 {
        sim.step(DT).unwrap();
    }

    assert!((sim.steering_angle() - FRAC_PI_4).abs() < 1e-12);
}

// =============================================================================
// Keyboard Control Tests
// =============================================================================

/// The w/s/a/d and arrow keys map to the four controls, case-insensitively.
#[test]
fn test_key_classification() {
    assert_eq!(input::classify("w"), Some(ControlKey::Forward));
    assert_eq!(input::classify("ArrowUp"), Some(ControlKey::Forward));
    assert_eq!(input::classify("S"), Some(ControlKey::Backward));
    assert_eq!(input::classify("arrowdown"), Some(ControlKey::Backward));
    assert_eq!(input::classify("a"), Some(ControlKey::Left));
    assert_eq!(input::classify("D"), Some(ControlKey::Right));
    assert_eq!(input::classify("Escape"), None);
    assert_eq!(input::classify(" "), None);
}

/// Releasing a steering key stops the turn without touching the speed.
#[test]
fn test_steering_release_keeps_speed() {
    let mut sim = simulation();

    input::apply(&mut sim, ControlKey::Forward, true).unwrap();
    input::apply(&mut sim, ControlKey::Left, true).unwrap();
    assert!(sim.speed() > 0.0);
    assert!(sim.turning_speed() < 0.0);

    input::apply(&mut sim, ControlKey::Left, false).unwrap();
    assert_eq!(sim.turning_speed(), 0.0);
    assert!(sim.speed() > 0.0);
}

/// Releasing a movement key stops the robot.
#[test]
fn test_movement_release_stops_the_robot() {
    let mut sim = simulation();

    input::apply(&mut sim, ControlKey::Backward, true).unwrap();
    assert!(sim.speed() < 0.0);

    input::apply(&mut sim, ControlKey::Backward, false).unwrap();
    assert_eq!(sim.speed(), 0.0);
}

// =============================================================================
// Scene Tests
// =============================================================================

/// The rendered scene tracks the odometry estimate.
#[test]
fn test_world_shapes_follow_the_pose() {
    let mut sim = simulation();
    let before = sim.world_shapes();

    sim.start_moving_forward(None).unwrap();
    for _ in 0..50 {
        sim.step(DT).unwrap();
    }
    let after = sim.world_shapes();

    assert_eq!(before.len(), after.len());
    assert_ne!(before[0].vertices[0], after[0].vertices[0]);
}
