pub mod glideslope;
pub mod kinematics;
pub mod thrust;
pub mod time_to_go;
pub mod zem;
