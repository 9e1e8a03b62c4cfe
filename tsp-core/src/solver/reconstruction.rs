#[cfg(test)]
#[path = "../../tests/unit/solver/reconstruction_test.rs"]
mod reconstruction_test;

use super::subset_dp::SubsetTables;
use crate::models::{CostMatrix, Solution};
use crate::utils::{Float, SolverError};

/// Closes the cycle back to vertex `0` and walks backpointers to recover the visiting order.
pub(crate) fn reconstruct_tour(matrix: &CostMatrix, tables: &SubsetTables) -> Result<Solution, SolverError> {
    let size = tables.size();

    if size == 1 {
        return Ok(Solution { tour: vec![0, 0], cost: 0. });
    }

    let full_mask = tables.full_mask();
    let (end, cost) = select_closing_vertex(matrix, tables, full_mask)
        .ok_or_else(|| SolverError::Unreachable("no path visits all vertices".to_string()))?;

    let mut tour = Vec::with_capacity(size + 1);
    let mut mask = full_mask;
    let mut current = end;

    while mask != 0 {
        tour.push(current);
        let parent = tables.parent(mask, current);
        mask &= !(1 << current);

        match parent {
            Some(parent) => current = parent,
            None if mask == 0 => {}
            None => {
                return Err(SolverError::Unreachable(format!(
                    "no predecessor of vertex {current} for mask {:#b}",
                    mask | (1 << current)
                )));
            }
        }
    }

    tour.reverse();
    tour.push(0);

    Ok(Solution { tour, cost })
}

/// Selects the last visited vertex with the cheapest way back to the start, the smallest one on ties.
fn select_closing_vertex(matrix: &CostMatrix, tables: &SubsetTables, full_mask: usize) -> Option<(usize, Float)> {
    (1..tables.size()).fold(None, |best, last| {
        let Some(path_cost) = tables.cost(full_mask, last) else { return best };
        let total = path_cost + matrix.cost(last, 0);

        match best {
            Some((_, best_total)) if total >= best_total => best,
            _ => Some((last, total)),
        }
    })
}
