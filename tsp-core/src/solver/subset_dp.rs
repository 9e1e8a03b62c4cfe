//! Implements the Held-Karp dynamic program over subsets of visited vertices.
//!
//! A state `(mask, last)` keeps the cheapest cost of a path which starts at vertex `0`, visits exactly the
//! vertices of `mask` and ends at `last`, together with the vertex visited right before `last`.

#[cfg(test)]
#[path = "../../tests/unit/solver/subset_dp_test.rs"]
mod subset_dp_test;

use crate::models::CostMatrix;
use crate::utils::{Float, SolverError, ThreadPool, parallel_collect};

/// Keeps the cost and backpointer tables of all `(mask, last)` states.
///
/// Both tables are flat and addressed by `mask * size + last`. `None` marks a state which was never reached.
pub(crate) struct SubsetTables {
    size: usize,
    costs: Vec<Option<Float>>,
    parents: Vec<Option<u8>>,
}

impl SubsetTables {
    /// Allocates tables for `2^size` masks with the single base state `({0}, 0)` reached at zero cost.
    ///
    /// Returns [`SolverError::CapacityExceeded`] when memory for the tables cannot be reserved.
    fn new(size: usize) -> Result<Self, SolverError> {
        let capacity_exceeded = || SolverError::CapacityExceeded { vertices: size, max: size.saturating_sub(1) };

        let cells = u32::try_from(size)
            .ok()
            .and_then(|shift| 1_usize.checked_shl(shift))
            .and_then(|masks| masks.checked_mul(size))
            .ok_or_else(capacity_exceeded)?;

        let mut costs = Vec::new();
        costs.try_reserve_exact(cells).map_err(|_| capacity_exceeded())?;
        let mut parents = Vec::new();
        parents.try_reserve_exact(cells).map_err(|_| capacity_exceeded())?;

        costs.resize(cells, None);
        parents.resize(cells, None);
        // state ({0}, 0)
        costs[size] = Some(0.);

        Ok(Self { size, costs, parents })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the mask which has every vertex visited.
    pub fn full_mask(&self) -> usize {
        (1 << self.size) - 1
    }

    pub fn cost(&self, mask: usize, last: usize) -> Option<Float> {
        self.costs[self.index(mask, last)]
    }

    pub fn parent(&self, mask: usize, last: usize) -> Option<usize> {
        self.parents[self.index(mask, last)].map(usize::from)
    }

    #[inline]
    fn index(&self, mask: usize, last: usize) -> usize {
        mask * self.size + last
    }

    fn mask_count(&self) -> usize {
        1 << self.size
    }
}

/// Fills the tables visiting masks in increasing numeric order and pushing every reachable state to its
/// supersets with one more vertex.
///
/// A superset is always numerically bigger than its subset, so every state is final before it is used
/// as a source. Only strictly cheaper candidates replace a stored state: among equal-cost paths, the one
/// coming from the smallest `last` stays.
pub(crate) fn fill_sequential(matrix: &CostMatrix) -> Result<SubsetTables, SolverError> {
    let size = matrix.size();
    let mut tables = SubsetTables::new(size)?;

    for mask in 0..tables.mask_count() {
        for last in (0..size).filter(|&last| has_vertex(mask, last)) {
            let Some(current) = tables.cost(mask, last) else { continue };

            for next in (0..size).filter(|&next| !has_vertex(mask, next)) {
                let new_mask = mask | (1 << next);
                let candidate = current + matrix.cost(last, next);
                let idx = tables.index(new_mask, next);

                if tables.costs[idx].is_none_or(|best| candidate < best) {
                    tables.costs[idx] = Some(candidate);
                    tables.parents[idx] = Some(last as u8);
                }
            }
        }
    }

    Ok(tables)
}

/// Fills the tables layer by layer, where a layer holds all masks with the same amount of vertices.
///
/// Each state of the next layer pulls its value from the already final states of the current layer, scanning
/// predecessors in increasing order with strict comparison. This picks exactly the same candidate as the
/// sequential fill, and every state is written by one task only.
pub(crate) fn fill_layered<F>(matrix: &CostMatrix, pool: &ThreadPool, on_layer: F) -> Result<SubsetTables, SolverError>
where
    F: Fn(usize, usize),
{
    let size = matrix.size();
    let mut tables = SubsetTables::new(size)?;

    for (visited, masks) in get_layers(size).into_iter().enumerate().skip(2) {
        let layer_states = pool.execute(|| parallel_collect(&masks, |&mask| pull_states(matrix, &tables, mask)));

        for (mask, states) in masks.iter().zip(layer_states) {
            for (next, state) in states.into_iter().enumerate() {
                if let Some((cost, parent)) = state {
                    let idx = tables.index(*mask, next);
                    tables.costs[idx] = Some(cost);
                    tables.parents[idx] = Some(parent);
                }
            }
        }

        on_layer(visited, masks.len());
    }

    Ok(tables)
}

/// Computes every state `(mask, next)` of the given mask from states of `mask` without `next`.
fn pull_states(matrix: &CostMatrix, tables: &SubsetTables, mask: usize) -> Vec<Option<(Float, u8)>> {
    let size = tables.size();

    (0..size)
        .map(|next| {
            if next == 0 || !has_vertex(mask, next) {
                return None;
            }

            let prev_mask = mask ^ (1 << next);

            (0..size).filter(|&last| has_vertex(prev_mask, last)).fold(None, |best, last| {
                let Some(current) = tables.cost(prev_mask, last) else { return best };
                let candidate = current + matrix.cost(last, next);

                match best {
                    Some((best_cost, _)) if candidate >= best_cost => best,
                    _ => Some((candidate, last as u8)),
                }
            })
        })
        .collect()
}

/// Groups masks which contain the start vertex by amount of visited vertices, masks within a
/// group are kept in increasing order.
fn get_layers(size: usize) -> Vec<Vec<usize>> {
    (1..(1_usize << size)).step_by(2).fold(vec![Vec::new(); size + 1], |mut layers, mask| {
        layers[mask.count_ones() as usize].push(mask);
        layers
    })
}

#[inline]
fn has_vertex(mask: usize, vertex: usize) -> bool {
    mask & (1 << vertex) != 0
}
