//! Nearest-neighbor tour construction.

use crate::problem::WeightMatrix;
use crate::solution::{Construction, TraceLog, Tour};
use log::debug;
use rand::{thread_rng, Rng};

/// Builds a tour by always moving to the closest unvisited node.
///
/// The start node is drawn at random; the caller cannot choose it.
pub struct NearestNeighbor;

impl NearestNeighbor {
    /// Construct a tour from a start node drawn from the thread-local
    /// generator. Results are not reproducible between calls.
    pub fn build(matrix: &WeightMatrix) -> Construction {
        Self::build_with_rng(matrix, &mut thread_rng())
    }

    /// Construct a tour from a start node drawn from `rng`.
    ///
    /// Every step scans all `n` nodes, so the iteration count is always
    /// `n * (n - 1)`. Ties go to the lowest node index.
    pub fn build_with_rng<R: Rng + ?Sized>(matrix: &WeightMatrix, rng: &mut R) -> Construction {
        let n = matrix.size();
        let start = rng.gen_range(0..n);
        Self::build_from(matrix, start)
    }

    /// Deterministic construction from a known start node.
    pub fn build_from(matrix: &WeightMatrix, start: usize) -> Construction {
        let n = matrix.size();
        let mut trace = TraceLog::with_capacity(n + 1);
        let mut visited = vec![false; n];
        let mut path = Vec::with_capacity(n + 1);
        let mut iterations = 0u64;

        trace.push(format!("Start node: {}", start + 1));
        path.push(start);
        visited[start] = true;
        let mut current = start;

        for step in 1..n {
            let mut nearest = None;
            let mut min_distance = f64::MAX;

            for candidate in 0..n {
                iterations += 1;
                let distance = matrix.get_distance(current, candidate);
                if !visited[candidate] && distance < min_distance {
                    min_distance = distance;
                    nearest = Some(candidate);
                }
            }

            // An unvisited node always remains while step < n
            let next = match nearest {
                Some(next) => next,
                None => unreachable!("no unvisited node left at step {}", step),
            };

            trace.push(format!(
                "Step {}: {} → {} (Distance = {:.2})",
                step,
                current + 1,
                next + 1,
                min_distance
            ));
            debug!("nearest neighbor: step {} moves {} -> {}", step, current + 1, next + 1);

            path.push(next);
            visited[next] = true;
            current = next;
        }

        path.push(start);
        trace.push(format!(
            "Return: {} → {} (Distance = {:.2})",
            current + 1,
            start + 1,
            matrix.get_distance(current, start)
        ));

        Construction {
            tour: Tour::new(path),
            iterations,
            trace: Some(trace),
        }
    }
}
