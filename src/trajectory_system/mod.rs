pub mod dynamics;
pub mod integrator;
