use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul};

use crate::constants::STANDARD_GRAVITY;
use crate::utils::vector3d::Vector3D;

/// Point-mass lander state, also used for its time derivative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LanderState {
    pub position: Vector3D,
    pub velocity: Vector3D,
    pub mass: f64,
}

impl LanderState {
    pub fn new(position: Vector3D, velocity: Vector3D, mass: f64) -> Self {
        LanderState {
            position,
            velocity,
            mass,
        }
    }

    pub fn get_altitude(&self) -> f64 {
        self.position.z
    }
}

impl Add for LanderState {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        LanderState::new(
            self.position + other.position,
            self.velocity + other.velocity,
            self.mass + other.mass,
        )
    }
}

impl Mul<f64> for LanderState {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        LanderState::new(self.position * scalar, self.velocity * scalar, self.mass * scalar)
    }
}

impl Div<f64> for LanderState {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        LanderState::new(self.position / scalar, self.velocity / scalar, self.mass / scalar)
    }
}

/// Uniform gravity plus a thrust vector held constant over the step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LanderDynamics {
    pub gravity: Vector3D,
    pub isp: f64,
}

impl LanderDynamics {
    pub fn new(gravity: Vector3D, isp: f64) -> Self {
        LanderDynamics { gravity, isp }
    }

    pub fn mass_flow_rate(&self, thrust: &Vector3D) -> f64 {
        thrust.magnitude() / (self.isp * STANDARD_GRAVITY)
    }

    pub fn derivatives(&self, state: &LanderState, thrust: &Vector3D) -> LanderState {
        LanderState::new(
            state.velocity,
            *thrust / state.mass + self.gravity,
            -self.mass_flow_rate(thrust),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trajectory_system::integrator::rk4_step;
    use approx::assert_relative_eq;

    fn mars() -> LanderDynamics {
        LanderDynamics::new(Vector3D::new(0.0, 0.0, -3.7114), 225.0)
    }

    #[test]
    fn test_free_fall_derivatives() {
        let state = LanderState::new(
            Vector3D::new(0.0, 0.0, 1000.0),
            Vector3D::new(5.0, 0.0, -10.0),
            1500.0,
        );
        let d = mars().derivatives(&state, &Vector3D::zeros());
        assert_eq!(d.position, state.velocity);
        assert_eq!(d.velocity, Vector3D::new(0.0, 0.0, -3.7114));
        assert_eq!(d.mass, 0.0);
    }

    #[test]
    fn test_hover_thrust_cancels_gravity() {
        let state = LanderState::new(Vector3D::new(0.0, 0.0, 500.0), Vector3D::zeros(), 2000.0);
        let thrust = Vector3D::new(0.0, 0.0, 2000.0 * 3.7114);
        let d = mars().derivatives(&state, &thrust);
        assert_relative_eq!(d.velocity.z, 0.0, epsilon = 1e-12);
        assert_relative_eq!(d.mass, -2000.0 * 3.7114 / (225.0 * 9.81), epsilon = 1e-12);
    }

    #[test]
    fn test_rk4_burn_depletes_mass() {
        let dynamics = mars();
        let thrust = Vector3D::new(0.0, 0.0, 10_000.0);
        let mut state = LanderState::new(
            Vector3D::new(0.0, 0.0, 1000.0),
            Vector3D::new(0.0, 0.0, -50.0),
            2000.0,
        );
        let h = 0.5;
        for step in 0..20 {
            state = rk4_step(
                step as f64 * h,
                &state,
                |_t, x| dynamics.derivatives(x, &thrust),
                h,
            );
        }
        let expected_mass = 2000.0 - dynamics.mass_flow_rate(&thrust) * 10.0;
        assert_relative_eq!(state.mass, expected_mass, epsilon = 1e-9);
        // Thrust-to-weight > 1, so the descent rate shrinks.
        assert!(state.velocity.z > -50.0);
    }
}
