//! Distance evaluation along node sequences.

use crate::problem::WeightMatrix;

/// Sum of the edge weights between consecutive nodes of `route`.
///
/// A closed tour (first node repeated at the end) yields the full cycle
/// length. Sequences shorter than two nodes have length zero.
pub fn total_distance(route: &[usize], matrix: &WeightMatrix) -> f64 {
    route
        .windows(2)
        .map(|pair| matrix.get_distance(pair[0], pair[1]))
        .sum()
}
