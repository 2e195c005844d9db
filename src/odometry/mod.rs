//! # Odometry
//!
//! Pose integration for an Ackermann-steered vehicle using the bicycle
//! model: the steering angle and wheel base determine a turning radius,
//! and each time step moves the vehicle along the corresponding arc.

use serde::{Deserialize, Serialize};

use crate::geometry::{AffineTransform, Vector2};

/// Stand-in turning radius for straight-line motion (zero steering angle)
const STRAIGHT_LINE_RADIUS: f64 = f64::MAX;

/// A vehicle pose estimate: position plus heading in radians
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Odometry {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
}

impl Odometry {
    /// Create a pose estimate
    pub fn new(x: f64, y: f64, rotation: f64) -> Self {
        Self { x, y, rotation }
    }

    /// Position as a vector
    pub fn position(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }
}

/// Advance a pose by one time step of the bicycle model.
///
/// The turning radius is `wheel_base / sin(steering_angle)`; a steering
/// angle of exactly zero degrades to straight-line motion. The heading
/// change over the step is `speed * dt / radius`, and the displacement is
/// the chord of the corresponding arc, rotated from the vehicle frame into
/// the world frame by the previous heading.
pub fn advance(
    last: Odometry,
    dt: f64,
    speed: f64,
    wheel_base: f64,
    steering_angle: f64,
) -> Odometry {
    let turning_radius = if steering_angle == 0.0 {
        STRAIGHT_LINE_RADIUS
    } else {
        wheel_base / steering_angle.sin()
    };

    let d_rotation = speed * dt / turning_radius;

    let displacement_in_vehicle_frame = Vector2::new(
        turning_radius * (1.0 - d_rotation.cos()),
        turning_radius * d_rotation.sin(),
    );
    let displacement = AffineTransform::identity()
        .rotate(last.rotation)
        .apply_point(displacement_in_vehicle_frame);

    Odometry::new(
        last.x + displacement.x,
        last.y + displacement.y,
        last.rotation + d_rotation,
    )
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use crate::geometry::ApproxEq;

    use super::*;

    #[test]
    fn test_zero_steering_moves_straight() {
        let next = advance(Odometry::default(), 0.02, 0.4, 0.2, 0.0);

        // Vehicle frame +y is forward; at heading 0 that is world +y.
        assert!(next.x.approx_eq(&0.0, 1e-9));
        assert!(next.y.approx_eq(&(0.4 * 0.02), 1e-9));
        assert!(next.rotation.approx_eq(&0.0, 1e-9));
    }

    #[test]
    fn test_zero_dt_is_identity() {
        let last = Odometry::new(1.0, 2.0, 0.3);
        let next = advance(last, 0.0, 0.4, 0.2, 0.1);
        assert!(next.x.approx_eq(&last.x, 1e-12));
        assert!(next.y.approx_eq(&last.y, 1e-12));
        assert!(next.rotation.approx_eq(&last.rotation, 1e-12));
    }

    #[test]
    fn test_heading_accumulates_arc_angle() {
        let wheel_base = 0.2;
        let steering = FRAC_PI_4;
        let speed = 0.4;
        let dt = 0.5;

        let radius = wheel_base / steering.sin();
        let next = advance(Odometry::default(), dt, speed, wheel_base, steering);

        assert!(next.rotation.approx_eq(&(speed * dt / radius), 1e-12));
    }

    #[test]
    fn test_constant_steering_stays_on_turning_circle() {
        // Starting at heading 0, the turning circle center is at (r, 0).
        let wheel_base = 0.2;
        let steering = FRAC_PI_4;
        let radius = wheel_base / steering.sin();
        let center = Vector2::new(radius, 0.0);

        for dt in [0.01, 0.1, 0.5, 1.0] {
            let next = advance(Odometry::default(), dt, 0.4, wheel_base, steering);
            let distance = (next.position() - center).length();
            assert!(distance.approx_eq(&radius.abs(), 1e-10));
        }
    }

    #[test]
    fn test_heading_rotates_displacement_into_world_frame() {
        let forward = advance(Odometry::default(), 0.02, 0.4, 0.2, 0.0);
        let reversed = advance(Odometry::new(0.0, 0.0, PI), 0.02, 0.4, 0.2, 0.0);

        assert!(reversed.x.approx_eq(&-forward.x, 1e-9));
        assert!(reversed.y.approx_eq(&-forward.y, 1e-9));
    }

    #[test]
    fn test_quarter_turn_lands_on_circle_axis() {
        // Drive exactly a quarter of the turning circle: the vehicle ends
        // level with the circle center.
        let wheel_base = 0.2;
        let steering = FRAC_PI_4;
        let radius = wheel_base / steering.sin();
        let dt = (FRAC_PI_2 * radius) / 0.4;

        let next = advance(Odometry::default(), dt, 0.4, wheel_base, steering);
        assert!(next.rotation.approx_eq(&FRAC_PI_2, 1e-10));
        assert!(next.x.approx_eq(&radius, 1e-9));
        assert!(next.y.approx_eq(&radius, 1e-9));
    }
}
