//! Simulated annealing over random position swaps.
//!
//! The search starts from a shuffled tour anchored at the start node and
//! proposes swaps of two interior positions. Improving moves are always
//! accepted; worsening moves are accepted with probability `exp(-delta / T)`
//! (Metropolis criterion), with `T` cooled geometrically after every
//! iteration. The whole trajectory is driven by one `ChaCha8Rng` seeded from
//! the caller's seed, so a given (matrix, start, seed, schedule) always
//! produces the same tour, iteration count and trace.

use crate::config::AnnealingSchedule;
use crate::distance::total_distance;
use crate::problem::WeightMatrix;
use crate::solution::{Construction, TraceLog, Tour};
use log::debug;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Search state owned by the annealing loop.
#[derive(Debug, Clone)]
pub struct AnnealingState {
    pub current: Vec<usize>,
    pub current_cost: f64,
    pub best: Vec<usize>,
    pub best_cost: f64,
    pub temperature: f64,
    pub iterations: u64,
}

impl AnnealingState {
    fn new(initial: Vec<usize>, cost: f64, temperature: f64) -> Self {
        AnnealingState {
            best: initial.clone(),
            current: initial,
            current_cost: cost,
            best_cost: cost,
            temperature,
            iterations: 0,
        }
    }

    /// Replace the current tour; returns true if it is also a new best.
    fn commit(&mut self, candidate: Vec<usize>, cost: f64) -> bool {
        self.current = candidate;
        self.current_cost = cost;

        if self.current_cost < self.best_cost {
            self.best = self.current.clone();
            self.best_cost = self.current_cost;
            true
        } else {
            false
        }
    }
}

/// Seeded simulated-annealing optimizer.
pub struct SimulatedAnnealing {
    pub schedule: AnnealingSchedule,
}

impl SimulatedAnnealing {
    /// Create an optimizer with the given cooling schedule.
    pub fn new(schedule: AnnealingSchedule) -> Self {
        SimulatedAnnealing { schedule }
    }

    /// Optimize a random tour anchored at `start`, driven by `seed`.
    ///
    /// A two-node graph has a single tour and nothing to swap: it is returned
    /// immediately with zero iterations.
    pub fn optimize(&self, matrix: &WeightMatrix, start: usize, seed: u64) -> Construction {
        let n = matrix.size();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut trace = TraceLog::new();

        if n == 2 {
            let tour = Tour::pair(start);
            let cost = tour.distance(matrix);
            trace.push(format!("Initial distance: {:.2}", cost));
            trace.push(format!("Final best distance: {:.2}", cost));
            return Construction {
                tour,
                iterations: 0,
                trace: Some(trace),
            };
        }

        let initial = Self::initial_tour(n, start, &mut rng);
        let initial_cost = total_distance(&initial, matrix);
        trace.push(format!("Initial distance: {:.2}", initial_cost));

        let mut state =
            AnnealingState::new(initial, initial_cost, self.schedule.initial_temperature);

        while state.iterations < self.schedule.max_iterations {
            state.iterations += 1;

            let mut candidate = state.current.clone();
            let i = rng.gen_range(1..n);
            let j = rng.gen_range(1..n);
            candidate.swap(i, j);

            let candidate_cost = total_distance(&candidate, matrix);
            let delta = candidate_cost - state.current_cost;

            if Self::accept(delta, state.temperature, &mut rng) {
                log::trace!(
                    "annealing: iteration {} accepted swap {}<->{} (delta {:.4})",
                    state.iterations,
                    i,
                    j,
                    delta
                );
                if state.commit(candidate, candidate_cost) {
                    trace.push(format!(
                        "New best at iteration {}: {:.2}",
                        state.iterations, state.best_cost
                    ));
                }
            }

            state.temperature *= self.schedule.cooling_rate;
            if state.temperature < self.schedule.min_temperature {
                debug!(
                    "annealing: temperature floor reached after {} iterations",
                    state.iterations
                );
                break;
            }
        }

        trace.push(format!("Final best distance: {:.2}", state.best_cost));

        Construction {
            tour: Tour::new(state.best),
            iterations: state.iterations,
            trace: Some(trace),
        }
    }

    /// `start` at both ends, the remaining nodes shuffled in between.
    fn initial_tour<R: Rng + ?Sized>(n: usize, start: usize, rng: &mut R) -> Vec<usize> {
        let mut middle: Vec<usize> = (0..n).filter(|&node| node != start).collect();
        middle.shuffle(rng);

        let mut tour = Vec::with_capacity(n + 1);
        tour.push(start);
        tour.extend(middle);
        tour.push(start);
        tour
    }

    /// Metropolis criterion. A uniform draw is only consumed for
    /// non-improving moves.
    fn accept<R: Rng + ?Sized>(delta: f64, temperature: f64, rng: &mut R) -> bool {
        if delta < 0.0 {
            return true;
        }
        (-delta / temperature).exp() > rng.gen::<f64>()
    }
}

impl Default for SimulatedAnnealing {
    fn default() -> Self {
        SimulatedAnnealing::new(AnnealingSchedule::default())
    }
}
