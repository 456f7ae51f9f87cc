use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{
    LANDER_DRY_MASS, LANDER_ISP, LANDER_WET_MASS, MARS_GRAVITY, MAX_SIMULATION_TIME,
    MIN_TIME_TO_GO, TIME_STEP, TOUCHDOWN_ALTITUDE, ZEM_DEFAULT_GRAVITY,
};
use crate::errors::{GuidanceError, SimulationError};
use crate::guidance::thrust::ThrustLimits;
use crate::utils::vector3d::Vector3D;

/// Episode setup for a powered descent toward a target at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DescentConfig {
    pub initial_position: Vector3D,
    pub initial_velocity: Vector3D,
    pub wet_mass: f64,
    pub dry_mass: f64,
    pub isp: f64,
    pub thrust_limits: ThrustLimits,
    pub gravity: Vector3D,
    /// Gravity magnitude assumed when reporting the zero-effort-miss.
    pub zem_gravity: f64,
    pub time_step: f64,
    pub max_time: f64,
    pub touchdown_altitude: f64,
    pub min_time_to_go: f64,
}

impl Default for DescentConfig {
    fn default() -> Self {
        DescentConfig {
            initial_position: Vector3D::new(1000.0, 200.0, 1500.0),
            initial_velocity: Vector3D::new(-20.0, 0.0, -60.0),
            wet_mass: LANDER_WET_MASS,
            dry_mass: LANDER_DRY_MASS,
            isp: LANDER_ISP,
            thrust_limits: ThrustLimits::default(),
            gravity: Vector3D::new(0.0, 0.0, -MARS_GRAVITY),
            zem_gravity: ZEM_DEFAULT_GRAVITY,
            time_step: TIME_STEP,
            max_time: MAX_SIMULATION_TIME,
            touchdown_altitude: TOUCHDOWN_ALTITUDE,
            min_time_to_go: MIN_TIME_TO_GO,
        }
    }
}

impl DescentConfig {
    /// Default configuration with the initial state drawn from the usual
    /// approach corridor.
    pub fn with_dispersed_initial_state<R: Rng>(rng: &mut R) -> Self {
        DescentConfig {
            initial_position: Vector3D::new(
                rng.gen_range(0.0..1000.0),
                rng.gen_range(-500.0..500.0),
                rng.gen_range(1000.0..2000.0),
            ),
            initial_velocity: Vector3D::new(
                rng.gen_range(-30.0..-10.0),
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-90.0..-60.0),
            ),
            ..DescentConfig::default()
        }
    }

    pub fn validate(&self) -> Result<(), GuidanceError> {
        let invalid = |msg: String| Err(GuidanceError::InitializationError(msg));

        ThrustLimits::new(
            self.thrust_limits.min_magnitude(),
            self.thrust_limits.max_magnitude(),
        )?;
        if self.dry_mass.is_nan() || self.dry_mass <= 0.0 {
            return invalid(format!("dry mass must be positive, got {}", self.dry_mass));
        }
        if self.wet_mass.is_nan() || self.wet_mass <= self.dry_mass {
            return invalid(format!(
                "wet mass {} must exceed dry mass {}",
                self.wet_mass, self.dry_mass
            ));
        }
        if self.isp.is_nan() || self.isp <= 0.0 {
            return invalid(format!("specific impulse must be positive, got {}", self.isp));
        }
        if self.time_step.is_nan()
            || self.max_time.is_nan()
            || self.time_step <= 0.0
            || self.time_step > self.max_time
        {
            return invalid(format!(
                "time step {} must be positive and no longer than {}",
                self.time_step, self.max_time
            ));
        }
        if self.min_time_to_go.is_nan() || self.min_time_to_go <= 0.0 {
            return invalid(format!(
                "minimum time-to-go must be positive, got {}",
                self.min_time_to_go
            ));
        }
        if self.initial_position.z <= self.touchdown_altitude {
            return invalid(format!(
                "initial altitude {} is not above touchdown altitude {}",
                self.initial_position.z, self.touchdown_altitude
            ));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, SimulationError> {
        let config: DescentConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, SimulationError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
