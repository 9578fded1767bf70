//! Problem definition and data structures for the TSP.

use crate::config::Config;
use crate::encoding;
use crate::error::TspError;
use crate::local_search::LocalSearch;
use crate::solution::Solution;
use crate::utils;
use crate::IndirectProblem;
use log::{info, trace};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};

/// A city of the instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub x: f64,
    pub y: f64,
}

impl Node {
    /// Create a new node.
    pub fn new(x: f64, y: f64) -> Self {
        Node { x, y }
    }

    /// Calculate the Euclidean distance between two nodes.
    pub fn distance(&self, other: &Node) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Whether both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance rounded half away from zero (2.5 becomes 3).
    pub fn rounded_distance(&self, other: &Node) -> u64 {
        self.distance(other).round() as u64
    }
}

/// Symmetric table of integer distances with a zero diagonal.
///
/// Built once per instance and only read afterwards, so a shared reference
/// can be handed to any number of solutions or worker threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    dimension: usize,
    entries: Vec<u64>,
}

impl DistanceMatrix {
    /// Compute the rounded Euclidean distances between all pairs of nodes.
    pub fn from_nodes(nodes: &[Node]) -> Result<Self, TspError> {
        let n = nodes.len();
        if n == 0 {
            return Err(TspError::EmptyInstance);
        }
        if let Some(index) = nodes.iter().position(|node| !node.is_finite()) {
            return Err(TspError::NonFiniteCoordinate { index });
        }

        let mut entries = vec![0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = nodes[i].rounded_distance(&nodes[j]);
                entries[i * n + j] = d;
                entries[j * n + i] = d;
            }
        }

        Ok(DistanceMatrix {
            dimension: n,
            entries,
        })
    }

    /// Take over a precomputed matrix after checking its shape and invariants.
    pub fn from_rows(rows: Vec<Vec<u64>>) -> Result<Self, TspError> {
        let n = rows.len();
        if n == 0 {
            return Err(TspError::EmptyInstance);
        }

        let mut entries = Vec::with_capacity(n * n);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != n {
                return Err(TspError::NotSquare {
                    row,
                    expected: n,
                    got: values.len(),
                });
            }
            entries.extend(values);
        }

        let matrix = DistanceMatrix {
            dimension: n,
            entries,
        };

        for index in 0..n {
            let value = matrix.get(index, index);
            if value != 0 {
                return Err(TspError::NonZeroDiagonal { index, value });
            }
        }
        for i in 0..n {
            for j in (i + 1)..n {
                if matrix.get(i, j) != matrix.get(j, i) {
                    return Err(TspError::Asymmetric { i, j });
                }
            }
        }

        Ok(matrix)
    }

    /// Number of nodes covered by the matrix.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Distance between nodes `from` and `to`.
    pub fn get(&self, from: usize, to: usize) -> u64 {
        self.entries[from * self.dimension + to]
    }

    /// All distances from node `from`.
    pub fn row(&self, from: usize) -> &[u64] {
        let start = from * self.dimension;
        &self.entries[start..start + self.dimension]
    }

    /// Check `D[i][j] == D[j][i]` for every pair.
    pub fn is_symmetric(&self) -> bool {
        (0..self.dimension)
            .all(|i| ((i + 1)..self.dimension).all(|j| self.get(i, j) == self.get(j, i)))
    }

    /// Length of the closed tour described by `permutation`.
    ///
    /// Includes the edge from the last node back to the first.
    pub fn tour_length(&self, permutation: &[usize]) -> u64 {
        let (first, last) = match (permutation.first(), permutation.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => return 0,
        };

        let path: u64 = permutation
            .windows(2)
            .map(|edge| self.get(edge[0], edge[1]))
            .sum();

        path + self.get(last, first)
    }
}

/// A TSP instance exposed to solvers through random-key decision vectors.
#[derive(Debug)]
pub struct Problem {
    name: String,
    nodes: Vec<Node>,
    distances: DistanceMatrix,
    lower_bounds: Vec<f64>,
    upper_bounds: Vec<f64>,
    config: Config,
    constructed: AtomicUsize,
}

impl Problem {
    /// Create a problem from node coordinates with the default configuration.
    pub fn new(name: impl Into<String>, nodes: Vec<Node>) -> Result<Self, TspError> {
        Self::with_config(name, nodes, Config::default())
    }

    /// Create a problem from node coordinates.
    pub fn with_config(
        name: impl Into<String>,
        nodes: Vec<Node>,
        config: Config,
    ) -> Result<Self, TspError> {
        config.validate()?;
        let distances = DistanceMatrix::from_nodes(&nodes)?;
        Ok(Self::assemble(name.into(), nodes, distances, config))
    }

    /// Create a problem from an already validated distance matrix.
    ///
    /// Such a problem carries no coordinates.
    pub fn from_distance_matrix(
        name: impl Into<String>,
        distances: DistanceMatrix,
        config: Config,
    ) -> Result<Self, TspError> {
        config.validate()?;
        Ok(Self::assemble(name.into(), Vec::new(), distances, config))
    }

    fn assemble(
        name: String,
        nodes: Vec<Node>,
        distances: DistanceMatrix,
        config: Config,
    ) -> Self {
        let n = distances.dimension();
        info!("built TSP instance {} with {} nodes", name, n);

        Problem {
            name,
            nodes,
            distances,
            lower_bounds: vec![0.0; n],
            upper_bounds: vec![encoding::largest_below_one(); n],
            config,
            constructed: AtomicUsize::new(0),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Node coordinates; empty when built from a distance matrix.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of solutions materialized through [`IndirectProblem::construct`].
    pub fn solutions_constructed(&self) -> usize {
        self.constructed.load(Ordering::Relaxed)
    }

    /// Random generator seeded from [`Config::seed`], or from entropy without one.
    pub fn rng(&self) -> ChaCha8Rng {
        utils::seeded_rng(self.config.seed)
    }

    /// Sample a decision vector uniformly inside the variable bounds.
    pub fn random_decision_vector<R: Rng>(&self, rng: &mut R) -> Vec<f64> {
        self.lower_bounds
            .iter()
            .zip(&self.upper_bounds)
            .map(|(&lb, &ub)| rng.gen_range(lb..ub))
            .collect()
    }

    /// Build the solution whose decision vector encodes `permutation`.
    pub fn solution_from_permutation(&self, permutation: &[usize]) -> Result<Solution, TspError> {
        let n = self.dimension();
        if permutation.len() != n {
            return Err(TspError::DimensionMismatch {
                expected: n,
                got: permutation.len(),
            });
        }
        if !encoding::is_permutation(permutation) {
            return Err(TspError::NotAPermutation { len: n });
        }
        Ok(Solution::from_permutation(permutation, &self.distances))
    }

    /// Run the configured 2-opt local search on `solution`.
    ///
    /// Returns whether the solution was improved.
    pub fn improve(&self, solution: &mut Solution) -> bool {
        LocalSearch::new(&self.config).run(solution, &self.distances)
    }

    fn validate(&self, decision_vector: &[f64]) -> Result<(), TspError> {
        let n = self.dimension();
        if decision_vector.len() != n {
            return Err(TspError::DimensionMismatch {
                expected: n,
                got: decision_vector.len(),
            });
        }

        for (index, &value) in decision_vector.iter().enumerate() {
            let in_bounds =
                self.lower_bounds[index] <= value && value <= self.upper_bounds[index];
            if !in_bounds {
                return Err(TspError::ValueOutOfBounds { index, value });
            }
        }

        Ok(())
    }
}

impl IndirectProblem for Problem {
    type Solution = Solution;

    fn dimension(&self) -> usize {
        self.distances.dimension()
    }

    fn lower_bounds(&self) -> &[f64] {
        &self.lower_bounds
    }

    fn upper_bounds(&self) -> &[f64] {
        &self.upper_bounds
    }

    fn decode(&self, decision_vector: &[f64]) -> Vec<usize> {
        encoding::decode(decision_vector)
    }

    fn evaluate_fitness(&self, permutation: &[usize]) -> f64 {
        self.distances.tour_length(permutation) as f64
    }

    fn construct(&self, decision_vector: Vec<f64>) -> Result<Solution, TspError> {
        if let Err(err) = self.validate(&decision_vector) {
            trace!("rejected decision vector: {}", err);
            return Err(err);
        }

        let solution = Solution::from_decision_vector(decision_vector, &self.distances);
        self.constructed.fetch_add(1, Ordering::Relaxed);
        Ok(solution)
    }
}
