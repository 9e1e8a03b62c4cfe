use super::*;
use crate::helpers::models::create_matrix;
use crate::solver::subset_dp::fill_sequential;

#[test]
fn can_reconstruct_single_vertex_tour() {
    let matrix = create_matrix(vec![vec![0.]]);

    let solution = reconstruct_tour(&matrix, &fill_sequential(&matrix).unwrap()).unwrap();

    assert_eq!(solution, Solution { tour: vec![0, 0], cost: 0. });
}

#[test]
fn can_reconstruct_tour_following_backpointers() {
    let matrix = create_matrix(vec![
        vec![0., 1., 10., 4.],
        vec![1., 0., 2., 8.],
        vec![10., 2., 0., 3.],
        vec![4., 8., 3., 0.],
    ]);

    let solution = reconstruct_tour(&matrix, &fill_sequential(&matrix).unwrap()).unwrap();

    // the reversed cycle 0 -> 3 -> 2 -> 1 -> 0 costs the same, closing at 1 comes first
    assert_eq!(solution.tour, vec![0, 3, 2, 1, 0]);
    assert_eq!(solution.cost, 10.);
}

#[test]
fn can_select_cheapest_closing_vertex() {
    // asymmetric: going back to 0 is cheap only from 2
    let matrix = create_matrix(vec![vec![0., 1., 1.], vec![1., 0., 1.], vec![1., 1., 0.]]);
    let asymmetric = create_matrix(vec![vec![0., 1., 1.], vec![9., 0., 1.], vec![1., 1., 0.]]);

    let symmetric_solution = reconstruct_tour(&matrix, &fill_sequential(&matrix).unwrap()).unwrap();
    let asymmetric_solution = reconstruct_tour(&asymmetric, &fill_sequential(&asymmetric).unwrap()).unwrap();

    assert_eq!(symmetric_solution, Solution { tour: vec![0, 2, 1, 0], cost: 3. });
    assert_eq!(asymmetric_solution, Solution { tour: vec![0, 1, 2, 0], cost: 3. });
}
