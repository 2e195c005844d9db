//! # Robot
//!
//! The drawable model of the four-wheeled, Ackermann-steered robot.
//!
//! The robot is described by its measurements and its current pose; its
//! `scene()` method assembles the component tree that the viewer renders:
//! a center rod from the rear axle to the front axle, and two axle
//! linkages with a wheel on each end. The front wheels turn with the
//! steering angle.

use serde::{Deserialize, Serialize};

use crate::geometry::{AffineTransform, Vector2};
use crate::scene::Component;
use crate::shapes::Shape;

/// Physical measurements of the robot, in simulation units (meters)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RobotMeasurements {
    /// Distance between the front and rear axles
    #[serde(default = "default_wheel_base")]
    pub wheel_base: f64,
    /// Distance between the left and right wheels
    #[serde(default = "default_track_width")]
    pub track_width: f64,
    /// Width of a wheel
    #[serde(default = "default_wheel_width")]
    pub wheel_width: f64,
    /// Diameter of a wheel
    #[serde(default = "default_wheel_diameter")]
    pub wheel_diameter: f64,
}

fn default_wheel_base() -> f64 {
    0.2
}

fn default_track_width() -> f64 {
    0.2
}

fn default_wheel_width() -> f64 {
    0.03
}

fn default_wheel_diameter() -> f64 {
    0.06
}

impl Default for RobotMeasurements {
    fn default() -> Self {
        Self {
            wheel_base: default_wheel_base(),
            track_width: default_track_width(),
            wheel_width: default_wheel_width(),
            wheel_diameter: default_wheel_diameter(),
        }
    }
}

/// The robot model: measurements plus current pose and steering angle
#[derive(Debug, Clone, PartialEq)]
pub struct Robot {
    measurements: RobotMeasurements,
    translation: Vector2,
    rotation: f64,
    steering_angle: f64,
}

impl Robot {
    /// Create a robot at the origin with zero rotation and steering
    pub fn new(measurements: RobotMeasurements) -> Self {
        Self {
            measurements,
            translation: Vector2::zero(),
            rotation: 0.0,
            steering_angle: 0.0,
        }
    }

    pub fn measurements(&self) -> RobotMeasurements {
        self.measurements
    }

    pub fn set_measurements(&mut self, measurements: RobotMeasurements) {
        self.measurements = measurements;
    }

    pub fn translation(&self) -> Vector2 {
        self.translation
    }

    pub fn set_translation(&mut self, translation: Vector2) {
        self.translation = translation;
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: f64) {
        self.rotation = rotation;
    }

    pub fn steering_angle(&self) -> f64 {
        self.steering_angle
    }

    /// Set the steering angle. Range enforcement lives in the simulation;
    /// the robot itself draws whatever angle it is given.
    pub fn set_steering_angle(&mut self, angle: f64) {
        self.steering_angle = angle;
    }

    /// Assemble the drawable component tree for the current pose.
    ///
    /// The robot's local frame has the rear axle at the origin and the
    /// front axle at `(0, wheel_base)`; the node transform rotates by the
    /// pose rotation and then translates to the pose position.
    pub fn scene(&self) -> Component {
        let m = self.measurements;

        let mut robot = Component::new("robot")
            .with_shape(
                "center_rod",
                Shape::line(Vector2::zero(), Vector2::new(0.0, m.wheel_base)),
            )
            .with_child("back_axle_linkage", axle_linkage(&m, 0.0))
            .with_child(
                "front_axle_linkage",
                axle_linkage(&m, self.steering_angle).transformed(
                    AffineTransform::identity().translate(0.0, m.wheel_base),
                ),
            );

        robot.set_transform(
            AffineTransform::identity()
                .rotate(self.rotation)
                .translate_vec(self.translation),
        );

        robot
    }
}

/// An axle with a wheel at each end, in the axle's local frame
fn axle_linkage(m: &RobotMeasurements, wheel_rotation: f64) -> Component {
    let half_track = m.track_width / 2.0;
    let axle_start = Vector2::new(-half_track, 0.0);
    let axle_end = Vector2::new(half_track, 0.0);

    Component::new("axle_linkage")
        .with_shape("axle", Shape::line(axle_start, axle_end))
        .with_child(
            "left_wheel",
            wheel(m, wheel_rotation)
                .transformed(AffineTransform::identity().translate_vec(axle_start)),
        )
        .with_child(
            "right_wheel",
            wheel(m, wheel_rotation)
                .transformed(AffineTransform::identity().translate_vec(axle_end)),
        )
}

/// A single wheel as a rectangle centered on the origin, pre-rotated by
/// the wheel's own rotation
fn wheel(m: &RobotMeasurements, rotation: f64) -> Component {
    let rect = Shape::rect(
        Vector2::new(-m.wheel_width / 2.0, -m.wheel_diameter / 2.0),
        Vector2::new(m.wheel_width, m.wheel_diameter),
    );
    let rotated = AffineTransform::identity().rotate(rotation).apply(&rect);

    Component::new("wheel").with_shape("wheel", rotated)
}

/// Small extension to build a component with a transform applied, used by
/// the assembly helpers above
trait Transformed {
    fn transformed(self, transform: AffineTransform) -> Self;
}

impl Transformed for Component {
    fn transformed(mut self, transform: AffineTransform) -> Self {
        self.apply_transform(&transform);
        self
    }
}
