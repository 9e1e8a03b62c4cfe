use super::*;

fn assert_invalid_input(result: Result<CostMatrix, SolverError>, expected: &str) {
    match result {
        Err(SolverError::InvalidInput(msg)) => assert!(msg.contains(expected), "unexpected message: '{msg}'"),
        Err(err) => panic!("unexpected error: {err}"),
        Ok(_) => panic!("matrix should be rejected"),
    }
}

#[test]
fn can_create_matrix_from_rows() {
    let matrix = CostMatrix::new(vec![vec![0., 1., 2.], vec![3., 0., 4.], vec![5., 6., 0.]]).unwrap();

    assert_eq!(matrix.size(), 3);
    assert_eq!(matrix.cost(0, 2), 2.);
    assert_eq!(matrix.cost(2, 1), 6.);
    assert_eq!(matrix.cost(1, 0), 3.);
}

#[test]
fn can_create_matrix_from_flat_values() {
    let matrix = CostMatrix::from_flat(vec![0., 7., 7., 0.]).unwrap();

    assert_eq!(matrix.size(), 2);
    assert_eq!(matrix.cost(0, 1), 7.);
    assert_eq!(matrix.cost(1, 0), 7.);
}

#[test]
fn can_ignore_diagonal_values() {
    let matrix = CostMatrix::new(vec![vec![-1., 2.], vec![2., Float::NAN]]);

    assert!(matrix.is_ok());
}

#[test]
fn can_reject_empty_matrix() {
    assert_invalid_input(CostMatrix::new(vec![]), "no vertices");
    assert_invalid_input(CostMatrix::from_flat(vec![]), "no vertices");
}

#[test]
fn can_reject_non_square_matrix() {
    let parameters: Vec<(Vec<Vec<Float>>, &str)> = vec![
        (vec![vec![0., 1.], vec![1., 0., 2.]], "row 1 has 3 items, expected 2"),
        (vec![vec![0., 1., 2.], vec![1., 0., 2.]], "row 0 has 3 items, expected 2"),
        (vec![vec![]], "row 0 has 0 items, expected 1"),
    ];

    for (rows, expected) in parameters {
        assert_invalid_input(CostMatrix::new(rows), expected);
    }

    assert_invalid_input(CostMatrix::from_flat(vec![0., 1., 1.]), "non-square flatten matrix: 3 items");
}

#[test]
fn can_reject_invalid_costs() {
    for value in [-1., Float::NAN, Float::INFINITY, Float::NEG_INFINITY] {
        let rows = vec![vec![0., 1., 1.], vec![1., 0., value], vec![1., 1., 0.]];

        assert_invalid_input(CostMatrix::new(rows), "cost from 1 to 2 must be finite and non-negative");
    }
}

#[test]
fn can_accept_zero_costs() {
    let matrix = CostMatrix::new(vec![vec![0., 0.], vec![0., 0.]]).unwrap();

    assert_eq!(matrix.cost(0, 1), 0.);
}
