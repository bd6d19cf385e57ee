//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tsp_heuristics::problem::WeightMatrix;

/// Scenario A: two nodes joined by an edge of weight 5.
pub fn create_pair_matrix() -> WeightMatrix {
    WeightMatrix::new(vec![vec![0.0, 5.0], vec![5.0, 0.0]]).unwrap()
}

/// Scenario B: triangle with w(0,1)=1, w(0,2)=2, w(1,2)=3.
pub fn create_triangle_matrix() -> WeightMatrix {
    WeightMatrix::new(vec![
        vec![0.0, 1.0, 2.0],
        vec![1.0, 0.0, 3.0],
        vec![2.0, 3.0, 0.0],
    ])
    .unwrap()
}

/// Four nodes with distinct weights; the optimal tour is 0-1-2-3-0 (length 12).
pub fn create_square_matrix() -> WeightMatrix {
    WeightMatrix::new(vec![
        vec![0.0, 1.0, 4.0, 3.0],
        vec![1.0, 0.0, 2.0, 5.0],
        vec![4.0, 2.0, 0.0, 6.0],
        vec![3.0, 5.0, 6.0, 0.0],
    ])
    .unwrap()
}

/// Symmetric matrix of `n` nodes with integer weights in `1..=100`,
/// generated deterministically from `seed`.
pub fn create_random_matrix(n: usize, seed: u64) -> WeightMatrix {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut weights = vec![vec![0.0; n]; n];

    for i in 0..n {
        for j in i + 1..n {
            let w = rng.gen_range(1..=100) as f64;
            weights[i][j] = w;
            weights[j][i] = w;
        }
    }

    WeightMatrix::new(weights).unwrap()
}

/// Matrix of `n` nodes where every edge has the same weight.
pub fn create_uniform_matrix(n: usize, weight: f64) -> WeightMatrix {
    let weights = (0..n)
        .map(|i| (0..n).map(|j| if i == j { 0.0 } else { weight }).collect())
        .collect();
    WeightMatrix::new(weights).unwrap()
}

/// Length of the shortest tour, by brute force over all orderings with node 0
/// fixed first. Only usable for very small `n`.
pub fn optimal_tour_length(matrix: &WeightMatrix) -> f64 {
    fn permute(
        matrix: &WeightMatrix,
        path: &mut Vec<usize>,
        remaining: &mut Vec<usize>,
        best: &mut f64,
    ) {
        if remaining.is_empty() {
            let mut closed = path.clone();
            closed.push(path[0]);
            let length = tsp_heuristics::distance::total_distance(&closed, matrix);
            if length < *best {
                *best = length;
            }
            return;
        }

        for k in 0..remaining.len() {
            let node = remaining.remove(k);
            path.push(node);
            permute(matrix, path, remaining, best);
            path.pop();
            remaining.insert(k, node);
        }
    }

    let mut best = f64::INFINITY;
    let mut remaining: Vec<usize> = (1..matrix.size()).collect();
    permute(matrix, &mut vec![0], &mut remaining, &mut best);
    best
}

/// Whether two closed tours describe the same cycle in the same direction.
pub fn same_cycle(a: &[usize], b: &[usize]) -> bool {
    if a.len() != b.len() || a.is_empty() {
        return false;
    }
    let core_a = &a[..a.len() - 1];
    let core_b = &b[..b.len() - 1];
    let n = core_a.len();

    (0..n).any(|shift| (0..n).all(|k| core_a[(k + shift) % n] == core_b[k]))
}
