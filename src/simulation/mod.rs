pub mod config;
pub mod descent;
