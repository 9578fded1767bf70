//! 2-Opt neighborhood: every tour reachable by reversing one segment.

use crate::problem::DistanceMatrix;
use crate::solution::Solution;
use itertools::Itertools;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A neighbor of the current tour and the segment that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    pub start: usize,
    pub end: usize,
    pub solution: Solution,
}

impl Neighbor {
    /// Build the neighbor obtained by reversing `[start, end]` of `permutation`.
    ///
    /// The reversed tour goes through the encoder so the neighbor carries a
    /// decision vector like any other solution.
    pub fn new(
        permutation: &[usize],
        start: usize,
        end: usize,
        distances: &DistanceMatrix,
    ) -> Self {
        let reversed = reverse_segment(permutation, start, end);
        Neighbor {
            start,
            end,
            solution: Solution::from_permutation(&reversed, distances),
        }
    }

    #[cfg(feature = "parallel")]
    fn key(&self) -> (u64, usize, usize) {
        (self.solution.fitness, self.start, self.end)
    }
}

/// Copy of `permutation` with positions `start..=end` reversed.
///
/// Applying the same reversal twice restores the input.
///
/// # Panics
///
/// Panics if `start > end` or `end >= permutation.len()`.
pub fn reverse_segment(permutation: &[usize], start: usize, end: usize) -> Vec<usize> {
    assert!(
        start <= end && end < permutation.len(),
        "segment [{}, {}] is outside a tour of {} nodes",
        start,
        end,
        permutation.len()
    );
    let mut reversed = permutation.to_vec();
    reversed[start..=end].reverse();
    reversed
}

/// Best neighbor over all `0 <= i < j < n`; ties keep the first in `(i, j)` order.
pub fn best_neighbor(permutation: &[usize], distances: &DistanceMatrix) -> Option<Neighbor> {
    let mut best: Option<Neighbor> = None;

    for (i, j) in (0..permutation.len()).tuple_combinations::<(usize, usize)>() {
        let neighbor = Neighbor::new(permutation, i, j, distances);
        let better = best
            .as_ref()
            .map_or(true, |b| neighbor.solution.fitness < b.solution.fitness);
        if better {
            best = Some(neighbor);
        }
    }

    best
}

/// Same result as [`best_neighbor`], with the pairs evaluated on the rayon pool.
#[cfg(feature = "parallel")]
pub fn best_neighbor_parallel(
    permutation: &[usize],
    distances: &DistanceMatrix,
) -> Option<Neighbor> {
    let pairs: Vec<(usize, usize)> = (0..permutation.len()).tuple_combinations().collect();

    pairs
        .into_par_iter()
        .map(|(i, j)| Neighbor::new(permutation, i, j, distances))
        .reduce_with(|a, b| if b.key() < a.key() { b } else { a })
}
