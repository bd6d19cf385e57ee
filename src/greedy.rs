//! Greedy edge-matching tour construction.

use crate::cycle::{reconstruct_cycle, rotate_cycle};
use crate::disjoint_set::DisjointSetForest;
use crate::problem::WeightMatrix;
use crate::solution::{Construction, Tour};
use itertools::Itertools;
use log::debug;

/// An undirected edge `(u, v)` with `u < v`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub u: usize,
    pub v: usize,
    pub weight: f64,
}

/// Builds a tour by accepting the cheapest edges that keep every node at
/// degree two or less and do not close a cycle before the last edge.
pub struct GreedyMatching;

impl GreedyMatching {
    /// Construct a tour starting at `start`.
    ///
    /// The iteration count is the number of sorted edges examined before the
    /// tour closed.
    pub fn build(matrix: &WeightMatrix, start: usize) -> Construction {
        let n = matrix.size();

        if n == 2 {
            return Construction {
                tour: Tour::pair(start),
                iterations: 1,
                trace: None,
            };
        }

        let edges = Self::sorted_edges(matrix);
        let mut degree = vec![0u8; n];
        let mut forest = DisjointSetForest::new(n);
        let mut accepted: Vec<(usize, usize)> = Vec::with_capacity(n);
        let mut iterations = 0u64;

        for edge in &edges {
            iterations += 1;

            if degree[edge.u] >= 2 || degree[edge.v] >= 2 {
                continue;
            }

            let closes_cycle = forest.connected(edge.u, edge.v);
            if closes_cycle && accepted.len() != n - 1 {
                continue;
            }

            degree[edge.u] += 1;
            degree[edge.v] += 1;
            accepted.push((edge.u, edge.v));

            if !closes_cycle {
                forest.union(edge.u, edge.v);
            }

            debug!(
                "greedy: accepted edge {}-{} (weight {:.2}), {} of {}",
                edge.u + 1,
                edge.v + 1,
                edge.weight,
                accepted.len(),
                n
            );

            if accepted.len() == n {
                break;
            }
        }

        let cycle = reconstruct_cycle(&accepted, n);
        Construction {
            tour: Tour::new(rotate_cycle(&cycle, start)),
            iterations,
            trace: None,
        }
    }

    /// All edges `(i, j)` with `i < j`, stably sorted by weight so that equal
    /// weights keep lexicographic `(i, j)` order.
    pub fn sorted_edges(matrix: &WeightMatrix) -> Vec<Edge> {
        let mut edges: Vec<Edge> = (0..matrix.size())
            .tuple_combinations()
            .map(|(u, v)| Edge {
                u,
                v,
                weight: matrix.get_distance(u, v),
            })
            .collect();

        edges.sort_by(|a, b| a.weight.total_cmp(&b.weight));
        edges
    }
}
