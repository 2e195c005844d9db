//! # Simulation
//!
//! The simulation state machine: owns the robot, its commanded speed and
//! turning rate, and the odometry estimate, and advances all of them in
//! fixed time steps.
//!
//! Speed, steering angle, and turning speed are range-checked against the
//! configured parameters. The checked setters reject out-of-range values;
//! the clamping setters saturate at the bounds, which is what the keyboard
//! control path uses.

mod errors;

use std::f64::consts::{FRAC_PI_4, PI};

use serde::{Deserialize, Serialize};

use crate::geometry::Vector2;
use crate::odometry::{self, Odometry};
use crate::robot::{Robot, RobotMeasurements};
use crate::shapes::Shape;

pub use errors::{SimulationError, SimulationResult};

// ==================
// Parameters
// ==================

/// Tunable simulation parameters with the stock robot's defaults
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    #[serde(default)]
    pub robot_measurements: RobotMeasurements,

    /// Speed bounds and the speed used when a movement command gives none,
    /// in units per second
    #[serde(default = "default_min_speed")]
    pub min_speed: f64,
    #[serde(default = "default_max_speed")]
    pub max_speed: f64,
    #[serde(default = "default_max_speed")]
    pub default_speed: f64,

    /// Steering angle bounds, in radians
    #[serde(default = "default_min_steering_angle")]
    pub min_steering_angle: f64,
    #[serde(default = "default_max_steering_angle")]
    pub max_steering_angle: f64,

    /// Turning speed bounds and default, in radians per second
    #[serde(default = "default_min_turning_speed")]
    pub min_turning_speed: f64,
    #[serde(default = "default_max_turning_speed")]
    pub max_turning_speed: f64,
    #[serde(default = "default_max_turning_speed")]
    pub default_turning_speed: f64,
}

fn default_min_speed() -> f64 {
    -0.4
}

fn default_max_speed() -> f64 {
    0.4
}

fn default_min_steering_angle() -> f64 {
    -FRAC_PI_4
}

fn default_max_steering_angle() -> f64 {
    FRAC_PI_4
}

fn default_min_turning_speed() -> f64 {
    -60.0 * PI / 180.0
}

fn default_max_turning_speed() -> f64 {
    60.0 * PI / 180.0
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            robot_measurements: RobotMeasurements::default(),
            min_speed: default_min_speed(),
            max_speed: default_max_speed(),
            default_speed: default_max_speed(),
            min_steering_angle: default_min_steering_angle(),
            max_steering_angle: default_max_steering_angle(),
            min_turning_speed: default_min_turning_speed(),
            max_turning_speed: default_max_turning_speed(),
            default_turning_speed: default_max_turning_speed(),
        }
    }
}

// ==================
// Simulation
// ==================

/// The running simulation
#[derive(Debug, Clone)]
pub struct Simulation {
    parameters: SimulationParameters,
    robot: Robot,
    speed: f64,
    turning_speed: f64,
    odometry: Odometry,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(SimulationParameters::default())
    }
}

impl Simulation {
    /// Create a simulation at rest. The initial pose is the origin facing
    /// heading pi, matching the viewer's expected start orientation.
    pub fn new(parameters: SimulationParameters) -> Self {
        Self {
            parameters,
            robot: Robot::new(parameters.robot_measurements),
            speed: 0.0,
            turning_speed: 0.0,
            odometry: Odometry::new(0.0, 0.0, PI),
        }
    }

    pub fn parameters(&self) -> &SimulationParameters {
        &self.parameters
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn steering_angle(&self) -> f64 {
        self.robot.steering_angle()
    }

    pub fn turning_speed(&self) -> f64 {
        self.turning_speed
    }

    pub fn odometry(&self) -> Odometry {
        self.odometry
    }

    pub fn robot(&self) -> &Robot {
        &self.robot
    }

    /// The robot's drawable shapes in world coordinates
    pub fn world_shapes(&self) -> Vec<Shape> {
        self.robot.scene().world_shapes()
    }

    // ==================
    // Time
    // ==================

    /// Advance the simulation by `dt` seconds.
    ///
    /// Integrates the steering angle by the commanded turning speed
    /// (clamped at the steering limits), advances the odometry, and moves
    /// the robot to the new pose.
    pub fn step(&mut self, dt: f64) -> SimulationResult<()> {
        if dt < 0.0 {
            return Err(SimulationError::NegativeTimeStep(dt));
        }

        self.set_steering_angle_clamped(self.steering_angle() + self.turning_speed * dt);

        self.odometry = odometry::advance(
            self.odometry,
            dt,
            self.speed,
            self.parameters.robot_measurements.wheel_base,
            self.steering_angle(),
        );
        self.robot
            .set_translation(Vector2::new(self.odometry.x, self.odometry.y));
        self.robot.set_rotation(self.odometry.rotation);

        Ok(())
    }

    // ==================
    // Movement commands
    // ==================

    /// Start moving forward, at the default speed when none is given
    pub fn start_moving_forward(&mut self, speed: Option<f64>) -> SimulationResult<()> {
        let speed = speed.unwrap_or(self.parameters.default_speed);
        if speed < 0.0 {
            return Err(SimulationError::BelowMinimum {
                quantity: "speed",
                value: speed,
                bound: 0.0,
            });
        }
        self.set_speed(speed)
    }

    /// Start moving backward, at the default speed when none is given
    pub fn start_moving_backward(&mut self, speed: Option<f64>) -> SimulationResult<()> {
        let speed = speed.unwrap_or(self.parameters.default_speed);
        if speed < 0.0 {
            return Err(SimulationError::BelowMinimum {
                quantity: "speed",
                value: speed,
                bound: 0.0,
            });
        }
        self.set_speed(-speed)
    }

    /// Stop all forward/backward motion
    pub fn stop_moving(&mut self) {
        self.speed = 0.0;
    }

    /// Start steering toward clockwise, at the default rate when none is given
    pub fn start_turning_clockwise(&mut self, rate: Option<f64>) -> SimulationResult<()> {
        let rate = rate.unwrap_or(self.parameters.default_turning_speed);
        if rate < 0.0 {
            return Err(SimulationError::BelowMinimum {
                quantity: "turning speed",
                value: rate,
                bound: 0.0,
            });
        }
        self.set_turning_speed(rate)
    }

    /// Start steering toward counterclockwise, at the default rate when
    /// none is given
    pub fn start_turning_counterclockwise(&mut self, rate: Option<f64>) -> SimulationResult<()> {
        let rate = rate.unwrap_or(self.parameters.default_turning_speed);
        if rate < 0.0 {
            return Err(SimulationError::BelowMinimum {
                quantity: "turning speed",
                value: rate,
                bound: 0.0,
            });
        }
        self.set_turning_speed(-rate)
    }

    /// Stop changing the steering angle
    pub fn stop_turning(&mut self) {
        self.turning_speed = 0.0;
    }

    // ==================
    // Checked setters
    // ==================

    /// Set the speed, rejecting values outside the configured bounds
    pub fn set_speed(&mut self, speed: f64) -> SimulationResult<()> {
        check_bounds(
            "speed",
            speed,
            self.parameters.min_speed,
            self.parameters.max_speed,
        )?;
        self.speed = speed;
        Ok(())
    }

    /// Set the steering angle, rejecting values outside the configured bounds
    pub fn set_steering_angle(&mut self, angle: f64) -> SimulationResult<()> {
        check_bounds(
            "steering angle",
            angle,
            self.parameters.min_steering_angle,
            self.parameters.max_steering_angle,
        )?;
        self.robot.set_steering_angle(angle);
        Ok(())
    }

    /// Set the turning speed, rejecting values outside the configured bounds
    pub fn set_turning_speed(&mut self, rate: f64) -> SimulationResult<()> {
        check_bounds(
            "turning speed",
            rate,
            self.parameters.min_turning_speed,
            self.parameters.max_turning_speed,
        )?;
        self.turning_speed = rate;
        Ok(())
    }

    // ==================
    // Clamping setters
    // ==================

    /// Set the speed, saturating at the configured bounds.
    /// Returns the value actually applied.
    pub fn set_speed_clamped(&mut self, speed: f64) -> f64 {
        self.speed = speed.clamp(self.parameters.min_speed, self.parameters.max_speed);
        self.speed
    }

    /// Set the steering angle, saturating at the configured bounds.
    /// Returns the value actually applied.
    pub fn set_steering_angle_clamped(&mut self, angle: f64) -> f64 {
        let clamped = angle.clamp(
            self.parameters.min_steering_angle,
            self.parameters.max_steering_angle,
        );
        self.robot.set_steering_angle(clamped);
        clamped
    }

    /// Set the turning speed, saturating at the configured bounds.
    /// Returns the value actually applied.
    pub fn set_turning_speed_clamped(&mut self, rate: f64) -> f64 {
        self.turning_speed = rate.clamp(
            self.parameters.min_turning_speed,
            self.parameters.max_turning_speed,
        );
        self.turning_speed
    }
}

fn check_bounds(quantity: &'static str, value: f64, min: f64, max: f64) -> SimulationResult<()> {
    if value < min {
        return Err(SimulationError::BelowMinimum {
            quantity,
            value,
            bound: min,
        });
    }
    if value > max {
        return Err(SimulationError::AboveMaximum {
            quantity,
            value,
            bound: max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::geometry::ApproxEq;

    use super::*;

    #[test]
    fn test_initial_state_is_at_rest() {
        let sim = Simulation::default();
        assert_eq!(sim.speed(), 0.0);
        assert_eq!(sim.turning_speed(), 0.0);
        assert_eq!(sim.steering_angle(), 0.0);
        assert_eq!(sim.odometry().rotation, PI);
    }

    #[test]
    fn test_negative_time_step_is_rejected() {
        let mut sim = Simulation::default();
        assert_eq!(
            sim.step(-0.01),
            Err(SimulationError::NegativeTimeStep(-0.01))
        );
    }

    #[test]
    fn test_forward_motion_moves_along_heading() {
        let mut sim = Simulation::default();
        sim.start_moving_forward(None).unwrap();
        sim.step(0.02).unwrap();

        // Initial heading is pi, so forward motion is along world -y.
        let od = sim.odometry();
        assert!(od.x.approx_eq(&0.0, 1e-9));
        assert!(od.y.approx_eq(&(-0.4 * 0.02), 1e-9));
    }

    #[test]
    fn test_speed_bounds_are_enforced() {
        let mut sim = Simulation::default();

        assert!(matches!(
            sim.set_speed(0.5),
            Err(SimulationError::AboveMaximum { .. })
        ));
        assert!(matches!(
            sim.set_speed(-0.5),
            Err(SimulationError::BelowMinimum { .. })
        ));
        assert!(sim.set_speed(0.4).is_ok());
    }

    #[test]
    fn test_clamped_setters_saturate() {
        let mut sim = Simulation::default();

        assert_eq!(sim.set_speed_clamped(10.0), 0.4);
        assert_eq!(sim.set_speed_clamped(-10.0), -0.4);
        assert_eq!(sim.set_steering_angle_clamped(10.0), FRAC_PI_4);
        assert_eq!(sim.set_steering_angle_clamped(-10.0), -FRAC_PI_4);
        assert!(sim
            .set_turning_speed_clamped(10.0)
            .approx_eq(&(PI / 3.0), 1e-12));
    }

    #[test]
    fn test_explicit_negative_command_speed_is_rejected() {
        let mut sim = Simulation::default();
        assert!(sim.start_moving_forward(Some(-0.1)).is_err());
        assert!(sim.start_moving_backward(Some(-0.1)).is_err());
        assert!(sim.start_turning_clockwise(Some(-0.1)).is_err());
        assert!(sim.start_turning_counterclockwise(Some(-0.1)).is_err());
    }

    #[test]
    fn test_backward_command_sets_negative_speed() {
        let mut sim = Simulation::default();
        sim.start_moving_backward(None).unwrap();
        assert_eq!(sim.speed(), -0.4);

        sim.stop_moving();
        assert_eq!(sim.speed(), 0.0);
    }

    #[test]
    fn test_turning_commands_set_signed_rates() {
        let mut sim = Simulation::default();

        sim.start_turning_clockwise(None).unwrap();
        assert!(sim.turning_speed() > 0.0);

        sim.start_turning_counterclockwise(None).unwrap();
        assert!(sim.turning_speed() < 0.0);

        sim.stop_turning();
        assert_eq!(sim.turning_speed(), 0.0);
    }

    #[test]
    fn test_steering_integrates_and_clamps_during_steps() {
        let mut sim = Simulation::default();
        sim.start_turning_clockwise(None).unwrap();

        // Turning at 60 deg/s, the steering limit of 45 deg is reached in
        // under a second; further steps must not exceed it.
        for _ in 0..100 {
            sim.step(0.02).unwrap();
        }
        assert!(sim.steering_angle().approx_eq(&FRAC_PI_4, 1e-12));
    }

    #[test]
    fn test_world_shapes_follow_the_pose() {
        let mut sim = Simulation::default();
        let before = sim.world_shapes();

        sim.start_moving_forward(None).unwrap();
        for _ in 0..10 {
            sim.step(0.02).unwrap();
        }
        let after = sim.world_shapes();

        assert_eq!(before.len(), after.len());
        assert_ne!(before[0].vertices, after[0].vertices);
    }
}
