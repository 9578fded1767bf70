//! Random-key encoding between continuous decision vectors and permutations.
//!
//! A decision vector assigns one real value to every node. Ranking the nodes
//! by their values yields the tour. The encoder goes the other way and places
//! node `permutation[k]` in the `k`-th of `n` evenly spaced buckets of
//! `[0, 1)`, so decoding an encoded permutation always gives it back.

use std::cmp::Ordering;

/// Smallest positive `f64`, the value given to the first node of a tour.
pub fn smallest_positive() -> f64 {
    f64::from_bits(1)
}

/// Largest `f64` strictly below one.
pub fn largest_below_one() -> f64 {
    1.0 - f64::EPSILON / 2.0
}

/// Encode a permutation as a decision vector.
///
/// The node at rank `k` receives `ε + k / n`. Values are strictly increasing
/// in rank order, so [`decode`] recovers the permutation exactly.
pub fn encode(permutation: &[usize]) -> Vec<f64> {
    let n = permutation.len();
    let mut decision_vector = vec![0.0; n];
    let share = 1.0 / n as f64;
    let epsilon = smallest_positive();

    for (rank, &node) in permutation.iter().enumerate() {
        decision_vector[node] = epsilon + rank as f64 * share;
    }

    decision_vector
}

/// Decode a decision vector into a permutation.
///
/// Node indices are sorted by `(value, index)`, which keeps the result
/// deterministic when values collide. `-0.0` and `0.0` count as equal.
pub fn decode(decision_vector: &[f64]) -> Vec<usize> {
    let mut permutation: Vec<usize> = (0..decision_vector.len()).collect();
    permutation.sort_by(|&a, &b| compare_keys(decision_vector, a, b));
    permutation
}

fn compare_keys(decision_vector: &[f64], a: usize, b: usize) -> Ordering {
    // Adding 0.0 turns -0.0 into 0.0 before the total order sees it
    (decision_vector[a] + 0.0)
        .total_cmp(&(decision_vector[b] + 0.0))
        .then(a.cmp(&b))
}

/// Check that `candidate` visits every index of `0..candidate.len()` exactly once.
pub fn is_permutation(candidate: &[usize]) -> bool {
    let mut seen = vec![false; candidate.len()];
    for &node in candidate {
        match seen.get_mut(node) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}
