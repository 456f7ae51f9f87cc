use tracing::{debug, info, warn};

use crate::errors::{GuidanceError, SimulationError};
use crate::guidance::{
    glideslope::glideslope, kinematics::closing_velocity, time_to_go::time_to_go, zem::zem,
};
use crate::simulation::config::DescentConfig;
use crate::telemetry_system::trajectory::{Trajectory, TrajectorySample};
use crate::trajectory_system::{
    dynamics::{LanderDynamics, LanderState},
    integrator::rk4_step,
};
use crate::utils::vector3d::Vector3D;

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum DescentState {
    Descending,
    Landed,
    OnTarget,
    FuelExhausted,
    TimedOut,
}

impl DescentState {
    pub fn is_finished(&self) -> bool {
        !matches!(self, DescentState::Descending)
    }
}

/// Guidance quantities for the current relative state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuidanceSolution {
    pub closing_velocity: f64,
    pub time_to_go: f64,
    pub zem: Vector3D,
    pub glideslope: f64,
    pub thrust: Vector3D,
}

/// Drives one powered-descent episode toward the origin, recording a
/// [`TrajectorySample`] per integration step.
pub struct DescentSimulation {
    pub config: DescentConfig,
    pub dynamics: LanderDynamics,
    pub lander: LanderState,
    pub state: DescentState,
    pub time: f64,
    pub trajectory: Trajectory,
    last_time_to_go: Option<f64>,
}

impl DescentSimulation {
    pub fn new(config: DescentConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        Ok(DescentSimulation {
            dynamics: LanderDynamics::new(config.gravity, config.isp),
            lander: LanderState::new(
                config.initial_position,
                config.initial_velocity,
                config.wet_mass,
            ),
            state: DescentState::Descending,
            time: 0.0,
            trajectory: Trajectory::new(),
            last_time_to_go: None,
            config,
        })
    }

    pub fn fuel_used(&self) -> f64 {
        self.config.wet_mass - self.lander.mass
    }

    /// Time-to-go, holding the previous value when the quartic has no
    /// acceptable root.
    fn time_to_go_or_hold(&self, r: &Vector3D, v: &Vector3D) -> Result<f64, GuidanceError> {
        match time_to_go(r, v, self.config.gravity.magnitude()) {
            Ok(t_go) => Ok(t_go),
            Err(err @ GuidanceError::NoValidTimeToGoRoot { .. }) => {
                let held = self.last_time_to_go.unwrap_or(self.config.min_time_to_go);
                warn!(time = self.time, error = %err, held, "holding previous time-to-go");
                Ok(held)
            }
            Err(err) => Err(err),
        }
    }

    /// Energy-optimal acceleration `-6r/t² - 4v/t - g` converted to a thrust
    /// command and shaped by the thrust limits.
    pub fn guidance(&self) -> Result<GuidanceSolution, GuidanceError> {
        let r = self.lander.position;
        let v = self.lander.velocity;

        let vc = closing_velocity(&r, &v)?;
        let t_go = self.time_to_go_or_hold(&r, &v)?;
        let miss = match zem(&r, &v, self.config.zem_gravity) {
            Ok(miss) => miss,
            Err(GuidanceError::NoValidTimeToGoRoot { .. }) => r - t_go * v,
            Err(err) => return Err(err),
        };

        let t = t_go.max(self.config.min_time_to_go);
        let acceleration = -6.0 * r / t.powi(2) - 4.0 * v / t - self.config.gravity;
        let thrust = self.config.thrust_limits.limit(acceleration * self.lander.mass);

        Ok(GuidanceSolution {
            closing_velocity: vc,
            time_to_go: t_go,
            zem: miss,
            glideslope: glideslope(&r, &v),
            thrust,
        })
    }

    pub fn update(&mut self) -> Result<(), SimulationError> {
        if self.state.is_finished() {
            return Ok(());
        }

        let solution = match self.guidance() {
            Ok(solution) => solution,
            Err(GuidanceError::DivideByZero(_)) => {
                self.state = DescentState::OnTarget;
                info!(time = self.time, "lander is exactly on target");
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };
        self.last_time_to_go = Some(solution.time_to_go);

        let h = self.config.time_step;
        let dynamics = self.dynamics;
        let thrust = solution.thrust;
        let next = rk4_step(
            self.time,
            &self.lander,
            |_t, x| dynamics.derivatives(x, &thrust),
            h,
        );

        let step_fuel = self.lander.mass - next.mass;
        self.trajectory.push(TrajectorySample {
            time: self.time,
            position: self.lander.position,
            velocity: self.lander.velocity,
            thrust,
            fuel: self.fuel_used(),
            zem: solution.zem,
            glideslope: solution.glideslope,
            closing_velocity: solution.closing_velocity,
            time_to_go: solution.time_to_go,
            reward: -step_fuel,
        });

        if !(next.position.magnitude().is_finite()
            && next.velocity.magnitude().is_finite()
            && next.mass.is_finite())
        {
            return Err(SimulationError::PhysicsError(format!(
                "non-finite lander state at t = {:.2}s",
                self.time + h
            )));
        }

        self.lander = next;
        self.time += h;

        debug!(
            time = self.time,
            altitude = self.lander.get_altitude(),
            speed = self.lander.velocity.magnitude(),
            t_go = solution.time_to_go,
            thrust = thrust.magnitude(),
            "descent step"
        );

        if self.lander.mass <= self.config.dry_mass {
            self.state = DescentState::FuelExhausted;
        } else if self.lander.get_altitude() <= self.config.touchdown_altitude {
            self.state = DescentState::Landed;
        } else if self.time >= self.config.max_time {
            self.state = DescentState::TimedOut;
        }

        if self.state.is_finished() {
            info!(
                state = ?self.state,
                time = self.time,
                miss_distance = self.lander.position.magnitude(),
                touchdown_speed = self.lander.velocity.magnitude(),
                fuel_used = self.fuel_used(),
                "descent finished"
            );
        }
        Ok(())
    }

    /// Steps until the episode ends and returns the recorded trajectory.
    pub fn run(&mut self) -> Result<&Trajectory, SimulationError> {
        while !self.state.is_finished() {
            self.update()?;
        }
        Ok(&self.trajectory)
    }
}
