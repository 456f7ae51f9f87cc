use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GuidanceError {
    #[error("Division by zero: {0} has zero norm")]
    DivideByZero(&'static str),

    #[error(
        "No valid time-to-go root (r.r = {r_dot_r}, v.v = {v_dot_v}, v.r = {v_dot_r}, g = {gravity})"
    )]
    NoValidTimeToGoRoot {
        r_dot_r: f64,
        v_dot_v: f64,
        v_dot_r: f64,
        gravity: f64,
    },

    #[error("Length mismatch: {positions} positions vs {velocities} velocities")]
    LengthMismatch { positions: usize, velocities: usize },

    #[error("Initialization error: {0}")]
    InitializationError(String),
}

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Guidance error: {0}")]
    Guidance(#[from] GuidanceError),

    #[error("Physics error: {0}")]
    PhysicsError(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
