use crate::constants::LOS_RATE_MIN_CLOSING_VELOCITY;
use crate::errors::GuidanceError;
use crate::utils::vector3d::Vector3D;

/// Rate at which the range `|r|` is shrinking; positive while approaching.
pub fn closing_velocity(r_tm: &Vector3D, v_tm: &Vector3D) -> Result<f64, GuidanceError> {
    let range = r_tm.magnitude();
    if range == 0.0 {
        return Err(GuidanceError::DivideByZero("relative position"));
    }
    Ok(-r_tm.dot(v_tm) / range)
}

/// Line-of-sight rate `v/|r| + r·vc/|r|²`, or zero unless closing faster
/// than [`LOS_RATE_MIN_CLOSING_VELOCITY`].
pub fn los_rate(r_tm: &Vector3D, v_tm: &Vector3D) -> Result<Vector3D, GuidanceError> {
    let vc = closing_velocity(r_tm, v_tm)?;
    let range = r_tm.magnitude();
    if vc > LOS_RATE_MIN_CLOSING_VELOCITY {
        Ok(*v_tm / range + *r_tm * vc / range.powi(2))
    } else {
        Ok(Vector3D::zeros())
    }
}
