use serde::{Deserialize, Serialize};

use crate::errors::SimulationError;
use crate::utils::vector3d::{format_vector, Vector3D};

/// Guidance and vehicle record for one integration step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySample {
    pub time: f64,
    pub position: Vector3D,
    pub velocity: Vector3D,
    pub thrust: Vector3D,
    /// Propellant consumed since the start of the episode, kg.
    pub fuel: f64,
    pub zem: Vector3D,
    pub glideslope: f64,
    pub closing_velocity: f64,
    pub time_to_go: f64,
    pub reward: f64,
}

impl TrajectorySample {
    pub fn describe(&self) -> String {
        format!(
            "Time: {}\n{}\n{}\n{}\n{}\n\
             Fuel used: {:.2} kg | Glideslope: {:.3} | Vc: {:.2} m/s | t_go: {:.2} s\n",
            Trajectory::format_time(self.time),
            format_vector("Position (m):   ", &self.position, 2),
            format_vector("Velocity (m/s): ", &self.velocity, 2),
            format_vector("Thrust (N):     ", &self.thrust, 1),
            format_vector("ZEM (m):        ", &self.zem, 2),
            self.fuel,
            self.glideslope,
            self.closing_velocity,
            self.time_to_go,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySummary {
    pub duration: f64,
    pub max_speed: f64,
    pub fuel_used: f64,
    pub min_glideslope: f64,
    pub final_miss_distance: f64,
    pub final_speed: f64,
    pub total_reward: f64,
}

/// Per-episode sequence of [`TrajectorySample`]s, in append order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    samples: Vec<TrajectorySample>,
}

impl Trajectory {
    pub fn new() -> Self {
        Trajectory {
            samples: Vec::new(),
        }
    }

    pub fn push(&mut self, sample: TrajectorySample) {
        self.samples.push(sample);
    }

    pub fn samples(&self) -> &[TrajectorySample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn last(&self) -> Option<&TrajectorySample> {
        self.samples.last()
    }

    fn column<T>(&self, f: impl Fn(&TrajectorySample) -> T) -> Vec<T> {
        self.samples.iter().map(f).collect()
    }

    pub fn times(&self) -> Vec<f64> {
        self.column(|s| s.time)
    }

    pub fn positions(&self) -> Vec<Vector3D> {
        self.column(|s| s.position)
    }

    pub fn velocities(&self) -> Vec<Vector3D> {
        self.column(|s| s.velocity)
    }

    pub fn thrusts(&self) -> Vec<Vector3D> {
        self.column(|s| s.thrust)
    }

    pub fn position_norms(&self) -> Vec<f64> {
        self.column(|s| s.position.magnitude())
    }

    pub fn velocity_norms(&self) -> Vec<f64> {
        self.column(|s| s.velocity.magnitude())
    }

    /// Horizontal distance `sqrt(x² + y²)` from the target, for the z-vs-range profile.
    pub fn horizontal_ranges(&self) -> Vec<f64> {
        self.column(|s| s.position.horizontal_magnitude())
    }

    pub fn glideslopes(&self) -> Vec<f64> {
        self.column(|s| s.glideslope)
    }

    pub fn closing_velocities(&self) -> Vec<f64> {
        self.column(|s| s.closing_velocity)
    }

    pub fn times_to_go(&self) -> Vec<f64> {
        self.column(|s| s.time_to_go)
    }

    pub fn fuel(&self) -> Vec<f64> {
        self.column(|s| s.fuel)
    }

    pub fn rewards(&self) -> Vec<f64> {
        self.column(|s| s.reward)
    }

    pub fn cumulative_rewards(&self) -> Vec<f64> {
        self.samples
            .iter()
            .scan(0.0, |total, s| {
                *total += s.reward;
                Some(*total)
            })
            .collect()
    }

    pub fn summary(&self) -> Option<TrajectorySummary> {
        let first = self.samples.first()?;
        let last = self.last()?;
        Some(TrajectorySummary {
            duration: last.time - first.time,
            max_speed: self.velocity_norms().into_iter().fold(0.0, f64::max),
            fuel_used: last.fuel,
            min_glideslope: self.glideslopes().into_iter().fold(f64::INFINITY, f64::min),
            final_miss_distance: last.position.magnitude(),
            final_speed: last.velocity.magnitude(),
            total_reward: self.samples.iter().map(|s| s.reward).sum(),
        })
    }

    pub fn to_json(&self) -> Result<String, SimulationError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SimulationError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }

    pub fn display_data(&self) {
        println!("--- Trajectory Data ---");
        for sample in &self.samples {
            println!("{}", sample.describe());
        }
        println!("--- End of Trajectory ---");

        if let Some(summary) = self.summary() {
            println!("\n--- Episode Summary ---");
            println!("Duration: {}", Self::format_time(summary.duration));
            println!("Max Speed: {:.2} m/s", summary.max_speed);
            println!("Fuel Used: {:.2} kg", summary.fuel_used);
            println!("Min Glideslope: {:.3}", summary.min_glideslope);
            println!("Final Miss Distance: {:.2} m", summary.final_miss_distance);
            println!("Final Speed: {:.2} m/s", summary.final_speed);
            println!("Total Reward: {:.2}", summary.total_reward);
        }
    }
}
