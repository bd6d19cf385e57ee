//! Tests for the simulated-annealing optimizer.

mod common;

use common::*;
use tsp_heuristics::annealing::SimulatedAnnealing;
use tsp_heuristics::config::AnnealingSchedule;

/// Extract the cost from a trace line such as `Initial distance: 12.00`.
fn trailing_cost(line: &str) -> f64 {
    line.rsplit(": ").next().unwrap().parse().unwrap()
}

#[test]
fn test_same_seed_same_run() {
    let matrix = create_random_matrix(20, 42);
    let optimizer = SimulatedAnnealing::default();

    let first = optimizer.optimize(&matrix, 3, 12345);
    let second = optimizer.optimize(&matrix, 3, 12345);

    assert_eq!(first.tour, second.tour);
    assert_eq!(first.iterations, second.iterations);
    assert_eq!(first.trace, second.trace);
}

#[test]
fn test_default_schedule_stops_at_temperature_floor() {
    let matrix = create_random_matrix(10, 1);
    let optimizer = SimulatedAnnealing::default();

    // 10000 * 0.995^k drops below 1e-8 at k = 5513, well before the cap
    for seed in [1, 2, 12345] {
        let result = optimizer.optimize(&matrix, 0, seed);
        assert_eq!(result.iterations, 5513);
    }
}

#[test]
fn test_iteration_cap() {
    let matrix = create_random_matrix(8, 6);
    let schedule = AnnealingSchedule {
        max_iterations: 250,
        ..AnnealingSchedule::default()
    };

    let result = SimulatedAnnealing::new(schedule).optimize(&matrix, 0, 7);

    assert_eq!(result.iterations, 250);
    assert!(result.tour.is_valid(8));
}

#[test]
fn test_tours_are_valid_and_anchored() {
    let optimizer = SimulatedAnnealing::default();

    for n in [3, 4, 7, 16, 25] {
        let matrix = create_random_matrix(n, 30 + n as u64);
        for start in [0, n - 1] {
            let result = optimizer.optimize(&matrix, start, 99);

            assert!(result.tour.is_valid(n), "invalid tour for n = {}", n);
            assert_eq!(result.tour.start(), start);
        }
    }
}

#[test]
fn test_best_never_worse_than_initial() {
    let matrix = create_random_matrix(18, 77);

    for seed in 0..5 {
        let result = SimulatedAnnealing::default().optimize(&matrix, 2, seed);
        let trace = result.trace.unwrap();

        let initial = trailing_cost(&trace[0]);
        let final_best = trailing_cost(trace.last().unwrap());

        assert!(trace[0].starts_with("Initial distance: "));
        assert!(trace.last().unwrap().starts_with("Final best distance: "));
        assert!(final_best <= initial);
        assert!((result.tour.distance(&matrix) - final_best).abs() < 0.005 + 1e-9);
    }
}

#[test]
fn test_new_best_lines_strictly_improve() {
    let matrix = create_random_matrix(12, 8);
    let result = SimulatedAnnealing::default().optimize(&matrix, 0, 2024);
    let trace = result.trace.unwrap();

    let improvements: Vec<(u64, f64)> = trace
        .iter()
        .filter(|line| line.starts_with("New best at iteration "))
        .map(|line| {
            let rest = line.trim_start_matches("New best at iteration ");
            let (iteration, cost) = rest.split_once(": ").unwrap();
            (iteration.parse().unwrap(), cost.parse().unwrap())
        })
        .collect();

    // Integer weights, so every strict improvement shows at two decimals
    let mut previous_iteration = 0;
    let mut previous_cost = trailing_cost(&trace[0]);
    for (iteration, cost) in improvements {
        assert!(iteration > previous_iteration);
        assert!(iteration <= result.iterations);
        assert!(cost < previous_cost);
        previous_iteration = iteration;
        previous_cost = cost;
    }
}

#[test]
fn test_small_instance_reaches_optimum() {
    let matrix = create_random_matrix(5, 11);
    let optimum = optimal_tour_length(&matrix);

    let result = SimulatedAnnealing::default().optimize(&matrix, 0, 12345);

    assert!((result.tour.distance(&matrix) - optimum).abs() < 1e-9);
}

#[test]
fn test_two_nodes_short_circuit() {
    let matrix = create_pair_matrix();

    let result = SimulatedAnnealing::default().optimize(&matrix, 1, 12345);

    assert_eq!(result.tour.nodes, vec![1, 0, 1]);
    assert_eq!(result.iterations, 0);
    assert_eq!(
        result.trace.unwrap(),
        vec!["Initial distance: 10.00", "Final best distance: 10.00"]
    );
}
