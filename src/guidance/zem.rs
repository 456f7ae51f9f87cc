use crate::constants::ZEM_DEFAULT_GRAVITY;
use crate::errors::GuidanceError;
use crate::guidance::time_to_go::time_to_go;
use crate::utils::vector3d::Vector3D;

/// Zero-effort-miss `r - t_go·v`, computed whether or not the vehicle is closing.
pub fn zem(r_tm: &Vector3D, v_tm: &Vector3D, gravity: f64) -> Result<Vector3D, GuidanceError> {
    let t_go = time_to_go(r_tm, v_tm, gravity)?;
    Ok(*r_tm - t_go * *v_tm)
}

/// [`zem`] with the default guidance gravity of 4 m/s².
pub fn zem_default(r_tm: &Vector3D, v_tm: &Vector3D) -> Result<Vector3D, GuidanceError> {
    zem(r_tm, v_tm, ZEM_DEFAULT_GRAVITY)
}
