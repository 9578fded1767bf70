//! Solution representation for the TSP.

use crate::encoding;
use crate::problem::{DistanceMatrix, Problem};
use crate::Candidate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A candidate tour together with the decision vector it was decoded from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// Random keys, one per node
    pub decision_vector: Vec<f64>,
    /// Visiting order obtained by ranking the keys
    pub permutation: Vec<usize>,
    /// Closed tour length
    pub fitness: u64,
}

impl Solution {
    /// Decode and evaluate a decision vector.
    pub fn from_decision_vector(decision_vector: Vec<f64>, distances: &DistanceMatrix) -> Self {
        let permutation = encoding::decode(&decision_vector);
        let fitness = distances.tour_length(&permutation);

        Solution {
            decision_vector,
            permutation,
            fitness,
        }
    }

    /// Encode a permutation and materialize the resulting solution.
    pub fn from_permutation(permutation: &[usize], distances: &DistanceMatrix) -> Self {
        Self::from_decision_vector(encoding::encode(permutation), distances)
    }

    /// Number of nodes in the tour.
    pub fn len(&self) -> usize {
        self.permutation.len()
    }

    pub fn is_empty(&self) -> bool {
        self.permutation.is_empty()
    }

    /// Print the tour to stdout for debugging.
    pub fn print(&self) {
        println!("{}", self);
    }
}

/// Renders `Path: { 1->2->...->n }` with 1-based node numbers.
impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path: {{ ")?;
        for (i, node) in self.permutation.iter().enumerate() {
            if i > 0 {
                write!(f, "->")?;
            }
            write!(f, "{}", node + 1)?;
        }
        write!(f, " }}")
    }
}

impl Candidate for Solution {
    type Context = Problem;

    fn fitness(&self) -> f64 {
        self.fitness as f64
    }

    fn permutation(&self) -> &[usize] {
        &self.permutation
    }

    fn decision_vector(&self) -> &[f64] {
        &self.decision_vector
    }

    fn local_search(&mut self, problem: &Problem) {
        problem.improve(self);
    }
}
