//! Utility functions shared by the demo, tests and benchmarks.

use crate::error::TspError;
use crate::problem::Node;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Reproducible generator when `seed` is given, entropy-seeded otherwise.
pub fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Scatter `count` nodes uniformly over the square `[0, side) x [0, side)`.
///
/// `side` must be positive and finite.
pub fn random_nodes<R: Rng>(
    count: usize,
    side: f64,
    rng: &mut R,
) -> Result<Vec<Node>, TspError> {
    if !(side > 0.0 && side.is_finite()) {
        return Err(TspError::InvalidConfig(format!(
            "side must be positive and finite, got {}",
            side
        )));
    }

    Ok((0..count)
        .map(|_| Node::new(rng.gen_range(0.0..side), rng.gen_range(0.0..side)))
        .collect())
}

/// Nodes laid out row by row on a grid with `spacing` between neighbors.
pub fn grid_nodes(count: usize, spacing: f64) -> Vec<Node> {
    let columns = (count as f64).sqrt().ceil() as usize;
    (0..count)
        .map(|i| {
            let row = i / columns.max(1);
            let col = i % columns.max(1);
            Node::new(col as f64 * spacing, row as f64 * spacing)
        })
        .collect()
}
