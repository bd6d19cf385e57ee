//! Tour and solve-result representation.

use crate::cycle::rotate_cycle;
use crate::distance::total_distance;
use crate::problem::WeightMatrix;
use clap::ValueEnum;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Ordered, human-readable events recorded while a heuristic runs.
pub type TraceLog = Vec<String>;

/// The heuristic used to build a tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    /// Cheapest-edge matching with degree and cycle constraints
    Greedy,
    /// Repeated nearest unvisited node from a random start
    NearestNeighbor,
    /// Swap-move annealing from a seeded random tour
    SimulatedAnnealing,
}

impl Method {
    /// Display name of the method.
    pub fn label(&self) -> &'static str {
        match self {
            Method::Greedy => "Greedy (Edge-based)",
            Method::NearestNeighbor => "Nearest Neighbor",
            Method::SimulatedAnnealing => "Simulated Annealing",
        }
    }

    /// What the iteration count of this method measures.
    pub fn iteration_meaning(&self) -> &'static str {
        match self {
            Method::Greedy => "count of edges examined",
            Method::NearestNeighbor => "count of distance comparisons",
            Method::SimulatedAnnealing => "SA loop count",
        }
    }

    /// Whether the method honours a caller-supplied start node.
    pub fn uses_start_node(&self) -> bool {
        !matches!(self, Method::NearestNeighbor)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A closed tour: `n + 1` node indices, the first repeated at the end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tour {
    /// Node indices (0-based) in visiting order
    pub nodes: Vec<usize>,
}

impl Tour {
    /// Wrap a closed node sequence.
    pub fn new(nodes: Vec<usize>) -> Self {
        Tour { nodes }
    }

    /// The trivial tour over a two-node graph.
    pub fn pair(start: usize) -> Self {
        let other = 1 - start;
        Tour::new(vec![start, other, start])
    }

    /// First (and last) node of the tour.
    pub fn start(&self) -> usize {
        self.nodes[0]
    }

    /// Number of distinct nodes visited.
    pub fn node_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    /// Whether the tour is a closed permutation of `0..n`.
    pub fn is_valid(&self, n: usize) -> bool {
        if self.nodes.len() != n + 1 || self.nodes[0] != self.nodes[n] {
            return false;
        }

        let mut seen = vec![false; n];
        for &node in &self.nodes[..n] {
            if node >= n || seen[node] {
                return false;
            }
            seen[node] = true;
        }
        true
    }

    /// Total length of the closed tour.
    pub fn distance(&self, matrix: &WeightMatrix) -> f64 {
        total_distance(&self.nodes, matrix)
    }

    /// The same cycle, traversed in the same direction, starting at `start`.
    pub fn rotated_to(&self, start: usize) -> Tour {
        Tour::new(rotate_cycle(&self.nodes, start))
    }

    /// Nodes as 1-based indices joined by arrows, e.g. `1 → 3 → 2 → 1`.
    pub fn display_path(&self) -> String {
        self.nodes.iter().map(|&node| node + 1).join(" → ")
    }
}

/// Raw output of a single heuristic run, before the facade adds distance and
/// timing.
#[derive(Debug, Clone, PartialEq)]
pub struct Construction {
    pub tour: Tour,
    pub iterations: u64,
    pub trace: Option<TraceLog>,
}

/// Everything a solve call reports back to its caller.
#[derive(Clone, Serialize, Deserialize)]
pub struct SolveOutcome {
    /// The heuristic that produced the tour
    pub method: Method,
    /// The resulting closed tour
    pub tour: Tour,
    /// Method-specific count of elementary operations
    pub iterations: u64,
    /// Event log, present for Nearest Neighbor and Simulated Annealing
    pub trace: Option<TraceLog>,
    /// Total length of `tour`
    pub distance: f64,
    /// Wall-clock time spent in the heuristic
    pub runtime: Duration,
}

impl SolveOutcome {
    /// Path on one line, then `Total length: X.XX`.
    pub fn summary(&self) -> String {
        format_result(&self.tour, self.distance)
    }
}

/// Two-line result summary for a tour of the given total length.
pub fn format_result(tour: &Tour, distance: f64) -> String {
    if tour.nodes.is_empty() {
        return String::new();
    }
    format!("{}\nTotal length: {:.2}", tour.display_path(), distance)
}

impl fmt::Debug for SolveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SolveOutcome:")?;
        writeln!(f, "  Method: {}", self.method)?;
        writeln!(f, "  Tour: {:?}", self.tour.nodes)?;
        writeln!(f, "  Distance: {:.2}", self.distance)?;
        writeln!(f, "  Iterations: {}", self.iterations)?;

        if let Some(trace) = &self.trace {
            writeln!(f, "  Trace: {} lines", trace.len())?;
        }

        Ok(())
    }
}
