//! Configuration parameters for the TSP heuristics.

use serde::{Deserialize, Serialize};

/// Seed used for simulated annealing when the caller does not pick one.
pub const DEFAULT_SEED: u64 = 12345;

/// Geometric cooling schedule for simulated annealing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnealingSchedule {
    /// Starting temperature (T0)
    pub initial_temperature: f64,
    /// Multiplicative cooling factor applied after every iteration (α)
    pub cooling_rate: f64,
    /// Hard cap on the number of iterations
    pub max_iterations: u64,
    /// The search stops once the temperature falls below this floor
    pub min_temperature: f64,
}

impl Default for AnnealingSchedule {
    fn default() -> Self {
        AnnealingSchedule {
            initial_temperature: 10000.0,
            cooling_rate: 0.995,
            max_iterations: 100_000,
            min_temperature: 1e-8,
        }
    }
}

/// Configuration settings for a solve call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Start node (0-based); ignored by Nearest Neighbor
    pub start_node: usize,
    /// Seed for the simulated annealing random source
    pub seed: u64,
    /// Cooling schedule for simulated annealing
    pub schedule: AnnealingSchedule,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            start_node: 0,
            seed: DEFAULT_SEED,
            schedule: AnnealingSchedule::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Config::default()
    }

    /// Set the start node (0-based).
    pub fn with_start_node(mut self, node: usize) -> Self {
        self.start_node = node;
        self
    }

    /// Set the annealing seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the annealing schedule.
    pub fn with_schedule(mut self, schedule: AnnealingSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Set the maximum number of annealing iterations.
    pub fn with_max_iterations(mut self, iterations: u64) -> Self {
        self.schedule.max_iterations = iterations;
        self
    }
}
