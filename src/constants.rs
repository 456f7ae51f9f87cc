// Physical Constants
pub const MARS_GRAVITY: f64 = 3.7114; // m/s²
pub const STANDARD_GRAVITY: f64 = 9.81; // m/s², used for Isp -> mass flow

// Lander Constants
pub const LANDER_WET_MASS: f64 = 2000.0; // kg
pub const LANDER_DRY_MASS: f64 = 1000.0; // kg
pub const LANDER_ISP: f64 = 225.0; // s
pub const MIN_THRUST: f64 = 2000.0; // N
pub const MAX_THRUST: f64 = 15000.0; // N

// Thrust Shaping
pub const THRUST_LIMIT_EPSILON: f64 = 1e-8;

// Glideslope Monitor
pub const GLIDESLOPE_MIN_ALTITUDE: f64 = 0.1; // m
pub const GLIDESLOPE_INACTIVE: f64 = 100.0;

// Relative Kinematics
pub const LOS_RATE_MIN_CLOSING_VELOCITY: f64 = 0.01; // m/s

// Time-to-go / ZEM
pub const ROOT_IMAGINARY_TOLERANCE: f64 = 1e-4;
pub const ZEM_DEFAULT_GRAVITY: f64 = 4.0; // m/s²
pub const ROOT_SOLVER_MAX_ITERATIONS: usize = 500;
pub const ROOT_SOLVER_TOLERANCE: f64 = 1e-14;

// Simulation Parameters
pub const TIME_STEP: f64 = 0.2; // s
pub const MAX_SIMULATION_TIME: f64 = 120.0; // s
pub const TOUCHDOWN_ALTITUDE: f64 = 0.0; // m
pub const MIN_TIME_TO_GO: f64 = 1.0; // s, floor used by the descent law near touchdown
