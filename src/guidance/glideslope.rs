use crate::constants::{GLIDESLOPE_INACTIVE, GLIDESLOPE_MIN_ALTITUDE};
use crate::errors::GuidanceError;
use crate::utils::vector3d::Vector3D;

/// Glideslope ratio `|vz| / sqrt(vx² + vy²)` for one sample.
///
/// Returns [`GLIDESLOPE_INACTIVE`] at or below the minimum altitude. Zero
/// horizontal speed is not guarded: the result is `+inf` (violated), or NaN
/// when the vertical speed is zero as well.
pub fn glideslope(position: &Vector3D, velocity: &Vector3D) -> f64 {
    if position.z > GLIDESLOPE_MIN_ALTITUDE {
        velocity.z.abs() / velocity.horizontal_magnitude()
    } else {
        GLIDESLOPE_INACTIVE
    }
}

/// Per-sample [`glideslope`] over paired position/velocity histories.
pub fn glideslope_batch(
    positions: &[Vector3D],
    velocities: &[Vector3D],
) -> Result<Vec<f64>, GuidanceError> {
    if positions.len() != velocities.len() {
        return Err(GuidanceError::LengthMismatch {
            positions: positions.len(),
            velocities: velocities.len(),
        });
    }
    Ok(positions
        .iter()
        .zip(velocities)
        .map(|(pos, vel)| glideslope(pos, vel))
        .collect())
}
