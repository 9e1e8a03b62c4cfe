use super::*;
use crate::helpers::models::{create_matrix, create_random_matrix, create_random_real_matrix, relabel_matrix};
use crate::helpers::solver::{assert_valid_tour, brute_force_cost};
use crate::helpers::utils::create_collecting_logger;
use crate::models::tour_cost;

fn layered_solver() -> Solver {
    Solver::new(SolverConfig::default().with_parallelism(Parallelism::Layered { threads: 4 }))
}

#[test]
fn can_solve_single_vertex() {
    let solution = solve_rows(vec![vec![0.]]).unwrap();

    assert_eq!(solution.tour, vec![0, 0]);
    assert_eq!(solution.cost, 0.);
}

#[test]
fn can_solve_two_vertices() {
    let solution = solve_rows(vec![vec![0., 5.], vec![5., 0.]]).unwrap();

    assert_eq!(solution.tour, vec![0, 1, 0]);
    assert_eq!(solution.cost, 10.);
}

#[test]
fn can_solve_with_unused_diagonal() {
    let solution = solve_rows(vec![vec![-1., 3., 4.], vec![3., -1., 5.], vec![4., 5., -1.]]).unwrap();

    assert_eq!(solution.tour, vec![0, 2, 1, 0]);
    assert_eq!(solution.cost, 12.);
}

#[test]
fn can_return_valid_tour_with_recomputed_cost() {
    for (seed, size) in [(1, 3), (2, 4), (3, 6), (4, 9), (5, 11)] {
        let matrix = create_random_matrix(seed, size, 50, seed % 2 == 1);

        let solution = solve(&matrix).unwrap();

        assert_valid_tour(&solution.tour, size);
        assert_eq!(solution.cost, tour_cost(&matrix, &solution.tour));
    }
}

#[test]
fn can_match_brute_force_cost() {
    for size in 2..=8 {
        for seed in 0..3 {
            let matrix = create_random_real_matrix(seed * 100 + size as u64, size);

            let solution = solve(&matrix).unwrap();

            let expected = brute_force_cost(&matrix);
            assert!((solution.cost - expected).abs() < 1E-9, "size {size}, seed {seed}: {} != {expected}", solution.cost);
        }
    }
}

#[test]
fn can_match_brute_force_cost_for_asymmetric_integer_costs() {
    for seed in 10..15 {
        let matrix = create_random_matrix(seed, 7, 20, false);

        assert_eq!(solve(&matrix).unwrap().cost, brute_force_cost(&matrix));
    }
}

#[test]
fn can_keep_cost_when_vertices_are_relabeled() {
    let matrix = create_random_matrix(42, 7, 30, true);
    let solution = solve(&matrix).unwrap();

    for labels in [vec![0, 6, 5, 4, 3, 2, 1], vec![0, 2, 3, 1, 6, 4, 5], vec![0, 1, 2, 3, 5, 4, 6]] {
        let relabeled = relabel_matrix(&matrix, &labels);

        let relabeled_solution = solve(&relabeled).unwrap();

        assert_eq!(relabeled_solution.cost, solution.cost);
        let mapped_tour = solution.tour.iter().map(|&vertex| labels[vertex]).collect::<Vec<_>>();
        assert_eq!(tour_cost(&relabeled, &mapped_tour), relabeled_solution.cost);
    }
}

#[test]
fn can_break_ties_by_smallest_closing_vertex() {
    // every tour of a unit matrix costs the same
    let size = 5;
    let matrix = create_matrix(
        (0..size).map(|from| (0..size).map(|to| if from == to { 0. } else { 1. }).collect()).collect(),
    );

    let solution = solve(&matrix).unwrap();

    assert_eq!(solution.cost, 5.);
    assert_eq!(solution.tour, vec![0, 4, 3, 2, 1, 0]);
    assert_eq!(layered_solver().solve(&matrix).unwrap(), solution);
}

#[test]
fn can_produce_identical_results_on_repeated_calls() {
    let matrix = create_random_matrix(7, 10, 5, true);

    let first = solve(&matrix).unwrap();
    let second = solve(&matrix).unwrap();

    assert_eq!(first.tour, second.tour);
    assert_eq!(first.cost.to_bits(), second.cost.to_bits());
}

#[test]
fn can_produce_same_results_with_layered_fill() {
    for (seed, size) in [(1, 1), (2, 2), (3, 5), (4, 8), (5, 10), (6, 12)] {
        let matrix = create_random_matrix(seed, size, 4, seed % 3 == 0);

        let sequential = solve(&matrix).unwrap();
        let layered = layered_solver().solve(&matrix).unwrap();

        assert_eq!(sequential.tour, layered.tour);
        assert_eq!(sequential.cost.to_bits(), layered.cost.to_bits());
    }
}

#[test]
fn can_reject_invalid_input() {
    let parameters: Vec<Vec<Vec<Float>>> = vec![
        vec![],
        vec![vec![0., 1.], vec![1.]],
        vec![vec![0., -2.], vec![1., 0.]],
        vec![vec![0., Float::NAN], vec![1., 0.]],
    ];

    for rows in parameters {
        let result = solve_rows(rows);

        assert!(matches!(result, Err(SolverError::InvalidInput(_))), "unexpected result: {result:?}");
    }
}

#[test]
fn can_reject_instance_above_capacity() {
    let matrix = create_random_matrix(1, 6, 10, true);
    let solver = Solver::new(SolverConfig::default().with_max_vertices(5));

    let result = solver.solve(&matrix);

    assert_eq!(result, Err(SolverError::CapacityExceeded { vertices: 6, max: 5 }));
}

#[test]
fn can_reject_instance_above_default_capacity() {
    let size = DEFAULT_MAX_VERTICES + 1;
    let matrix = create_matrix(vec![vec![1.; size]; size]);

    let result = solve(&matrix);

    assert_eq!(result, Err(SolverError::CapacityExceeded { vertices: size, max: DEFAULT_MAX_VERTICES }));
}

#[test]
fn can_cap_max_vertices_by_supported_limit() {
    let config = SolverConfig::default().with_max_vertices(64);

    assert_eq!(config.max_vertices(), MAX_SUPPORTED_VERTICES);
}

#[test]
fn can_reject_instance_above_supported_limit_without_allocation() {
    let size = MAX_SUPPORTED_VERTICES + 2;
    let matrix = create_matrix(vec![vec![1.; size]; size]);
    let solver = Solver::new(SolverConfig::default().with_max_vertices(30));

    let result = solver.solve(&matrix);

    assert_eq!(result, Err(SolverError::CapacityExceeded { vertices: size, max: MAX_SUPPORTED_VERTICES }));
}

#[test]
fn can_skip_building_messages_without_logger() {
    let solver = Solver::default();

    solver.log(|| unreachable!("message is built without logger"));
}

#[test]
fn can_report_progress_to_injected_logger() {
    let (logger, messages) = create_collecting_logger();
    let solver = Solver::new(
        SolverConfig::default().with_logger(logger).with_parallelism(Parallelism::Layered { threads: 1 }),
    );

    solver.solve(&create_random_matrix(3, 4, 10, true)).unwrap();

    let messages = messages.lock().unwrap();
    assert_eq!(messages.first().map(String::as_str), Some("solving tour with 4 vertices, 64 states"));
    assert!(messages.iter().any(|msg| msg == "filling layers using 1 threads"));
    assert_eq!(messages.iter().filter(|msg| msg.starts_with("layer with")).count(), 3);
    assert!(messages.iter().any(|msg| msg.starts_with("subset tables filled in")));
    assert!(messages.last().is_some_and(|msg| msg.starts_with("optimal tour cost:")));
}
