pub mod constants;
pub mod errors;
pub mod guidance;
pub mod simulation;
pub mod telemetry_system;
pub mod trajectory_system;
pub mod utils;

pub use constants::*;
pub use errors::{GuidanceError, SimulationError};

// Re-export the guidance kernel
pub use guidance::glideslope::{glideslope, glideslope_batch};
pub use guidance::kinematics::{closing_velocity, los_rate};
pub use guidance::thrust::{limit_thrust, reverse_thrust, scale_thrust, ThrustLimits};
pub use guidance::time_to_go::{polynomial_roots, time_to_go, time_to_go_coefficients};
pub use guidance::zem::{zem, zem_default};

// Re-export commonly used items from trajectory_system
pub use trajectory_system::dynamics::{LanderDynamics, LanderState};
pub use trajectory_system::integrator::rk4_step;

// Re-export commonly used items from telemetry_system
pub use telemetry_system::trajectory::{Trajectory, TrajectorySample, TrajectorySummary};

pub use simulation::config::DescentConfig;
pub use simulation::descent::{DescentSimulation, DescentState, GuidanceSolution};

// Re-export commonly used utilities
pub use utils::vector3d::{format_vector, Vector3D};
