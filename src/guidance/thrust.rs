use serde::{Deserialize, Serialize};

use crate::constants::{MAX_THRUST, MIN_THRUST, THRUST_LIMIT_EPSILON};
use crate::errors::GuidanceError;
use crate::utils::vector3d::Vector3D;

/// Saturates the magnitude of `thrust_cmd` into `[min_thrust, max_thrust]`.
///
/// The direction is taken as `cmd / (|cmd| + 1e-8)`, so a zero command
/// degenerates toward the zero vector instead of failing.
pub fn limit_thrust(thrust_cmd: Vector3D, min_thrust: f64, max_thrust: f64) -> Vector3D {
    let thrust_mag = thrust_cmd.magnitude();
    let thrust_dvec = thrust_cmd / (thrust_mag + THRUST_LIMIT_EPSILON);
    thrust_mag.max(min_thrust).min(max_thrust) * thrust_dvec
}

/// Projects `thrust_cmd` onto its direction at full scale: `|result| == max_thrust`.
pub fn scale_thrust(
    thrust_cmd: Vector3D,
    _min_thrust: f64,
    max_thrust: f64,
) -> Result<Vector3D, GuidanceError> {
    let thrust_mag = thrust_cmd.magnitude();
    if thrust_mag == 0.0 {
        return Err(GuidanceError::DivideByZero("thrust command"));
    }
    let thrust_dvec = thrust_cmd / thrust_mag;
    Ok(max_thrust * thrust_dvec)
}

/// Maps a full-scale command back to the unit interval: `|result| == |cmd| / max_thrust`.
pub fn reverse_thrust(
    thrust_cmd: Vector3D,
    _min_thrust: f64,
    max_thrust: f64,
) -> Result<Vector3D, GuidanceError> {
    let thrust_mag = thrust_cmd.magnitude();
    if thrust_mag == 0.0 {
        return Err(GuidanceError::DivideByZero("thrust command"));
    }
    let thrust_dvec = thrust_cmd / thrust_mag;
    Ok((thrust_mag / max_thrust) * thrust_dvec)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThrustLimits {
    min_magnitude: f64,
    max_magnitude: f64,
}

impl ThrustLimits {
    pub fn new(min_magnitude: f64, max_magnitude: f64) -> Result<Self, GuidanceError> {
        if !(min_magnitude >= 0.0 && max_magnitude >= 0.0) {
            return Err(GuidanceError::InitializationError(format!(
                "thrust limits must be non-negative, got [{}, {}]",
                min_magnitude, max_magnitude
            )));
        }
        if min_magnitude > max_magnitude {
            return Err(GuidanceError::InitializationError(format!(
                "minimum thrust {} exceeds maximum thrust {}",
                min_magnitude, max_magnitude
            )));
        }
        Ok(ThrustLimits {
            min_magnitude,
            max_magnitude,
        })
    }

    pub fn min_magnitude(&self) -> f64 {
        self.min_magnitude
    }

    pub fn max_magnitude(&self) -> f64 {
        self.max_magnitude
    }

    pub fn limit(&self, thrust_cmd: Vector3D) -> Vector3D {
        limit_thrust(thrust_cmd, self.min_magnitude, self.max_magnitude)
    }

    pub fn scale(&self, thrust_cmd: Vector3D) -> Result<Vector3D, GuidanceError> {
        scale_thrust(thrust_cmd, self.min_magnitude, self.max_magnitude)
    }

    pub fn reverse(&self, thrust_cmd: Vector3D) -> Result<Vector3D, GuidanceError> {
        reverse_thrust(thrust_cmd, self.min_magnitude, self.max_magnitude)
    }
}

impl Default for ThrustLimits {
    fn default() -> Self {
        ThrustLimits {
            min_magnitude: MIN_THRUST,
            max_magnitude: MAX_THRUST,
        }
    }
}
