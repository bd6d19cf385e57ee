//! # TSP Heuristics
//!
//! Approximate shortest closed tours over small (at most 25 nodes) complete,
//! symmetric, positively weighted graphs.
//!
//! Three heuristics are available:
//!
//! - **Greedy edge matching**: sort all edges by weight and accept the
//!   cheapest ones that keep every node at degree two and do not close a
//!   cycle early, in the manner of a restricted Kruskal.
//! - **Nearest neighbor**: from a random start, repeatedly move to the closest
//!   unvisited node.
//! - **Simulated annealing**: improve a seeded random tour with swap moves
//!   under the Metropolis criterion and geometric cooling. Fully reproducible
//!   for a fixed seed.
//!
//! Each run reports the tour, a method-specific iteration count, and for the
//! latter two methods a human-readable trace.

pub mod annealing;
pub mod config;
pub mod cycle;
pub mod disjoint_set;
pub mod distance;
pub mod error;
pub mod greedy;
pub mod nearest_neighbor;
pub mod problem;
pub mod solution;
pub mod utils;

use crate::annealing::SimulatedAnnealing;
use crate::config::Config;
use crate::error::{TspError, TspResult};
use crate::greedy::GreedyMatching;
use crate::nearest_neighbor::NearestNeighbor;
use crate::problem::WeightMatrix;
use crate::solution::{Construction, Method, SolveOutcome};

use log::{debug, info};
use std::time::Instant;

/// Entry point that runs one heuristic over a weight matrix.
pub struct TspSolver {
    pub matrix: WeightMatrix,
    pub config: Config,
}

impl TspSolver {
    /// Create a solver for the given matrix and configuration.
    pub fn new(matrix: WeightMatrix, config: Config) -> Self {
        TspSolver { matrix, config }
    }

    /// Run `method` to completion.
    ///
    /// Fails if the graph has fewer than two nodes, or if the configured start
    /// node is out of range for a method that uses it.
    pub fn solve(&self, method: Method) -> TspResult<SolveOutcome> {
        let n = self.matrix.size();
        if n < 2 {
            return Err(TspError::TooFewNodes);
        }

        let start = self.config.start_node;
        if method.uses_start_node() && start >= n {
            return Err(TspError::StartOutOfRange {
                start: start + 1,
                nodes: n,
            });
        }

        info!("Solving {}-node instance with {}", n, method);
        let start_time = Instant::now();

        let Construction {
            tour,
            iterations,
            trace,
        } = match method {
            Method::Greedy => GreedyMatching::build(&self.matrix, start),
            Method::NearestNeighbor => NearestNeighbor::build(&self.matrix),
            Method::SimulatedAnnealing => SimulatedAnnealing::new(self.config.schedule)
                .optimize(&self.matrix, start, self.config.seed),
        };

        let runtime = start_time.elapsed();
        debug_assert!(tour.is_valid(n), "{} produced an invalid tour", method);

        let distance = tour.distance(&self.matrix);
        info!(
            "{} finished: length {:.2}, {} iterations in {:?}",
            method, distance, iterations, runtime
        );
        debug!("tour: {}", tour.display_path());

        Ok(SolveOutcome {
            method,
            tour,
            iterations,
            trace,
            distance,
            runtime,
        })
    }
}
