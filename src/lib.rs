//! # Indirect TSP
//!
//! Random-key representation of the Travelling Salesman Problem for
//! continuous metaheuristics (differential evolution, particle swarms,
//! grey-wolf optimizers and the like).
//!
//! A solver only ever manipulates decision vectors in `[0, 1)^n`. The
//! [`Problem`] decodes them into tours by ranking, evaluates the closed tour
//! length on a precomputed [`DistanceMatrix`], and a best-improvement 2-opt
//! [`LocalSearch`] can polish any [`Solution`] in place.
//!
//! ```
//! use indirect_tsp::{Candidate, IndirectProblem, Node, Problem};
//!
//! let nodes = vec![
//!     Node::new(0.0, 0.0),
//!     Node::new(0.0, 2.0),
//!     Node::new(2.0, 2.0),
//!     Node::new(2.0, 0.0),
//! ];
//! let problem = Problem::new("square", nodes).unwrap();
//!
//! let mut solution = problem.construct(vec![0.1, 0.7, 0.4, 0.9]).unwrap();
//! assert_eq!(solution.permutation(), &[0, 2, 1, 3]);
//! assert_eq!(solution.fitness(), 10.0);
//!
//! solution.local_search(&problem);
//! assert_eq!(solution.fitness(), 8.0);
//! ```

pub mod config;
pub mod encoding;
pub mod error;
pub mod local_search;
pub mod problem;
pub mod solution;
pub mod utils;

pub use crate::config::{Config, Convergence};
pub use crate::error::TspError;
pub use crate::local_search::{LocalSearch, LocalSearchStats};
pub use crate::problem::{DistanceMatrix, Node, Problem};
pub use crate::solution::Solution;

/// What a continuous solver needs from a problem with an indirect encoding.
pub trait IndirectProblem {
    type Solution: Candidate;

    /// Number of decision variables.
    fn dimension(&self) -> usize;

    fn lower_bounds(&self) -> &[f64];

    fn upper_bounds(&self) -> &[f64];

    /// Map a decision vector to the discrete structure it represents.
    fn decode(&self, decision_vector: &[f64]) -> Vec<usize>;

    /// Objective value of a decoded structure. Lower is better.
    fn evaluate_fitness(&self, permutation: &[usize]) -> f64;

    /// Validate, decode and evaluate a decision vector.
    fn construct(&self, decision_vector: Vec<f64>) -> Result<Self::Solution, TspError>;
}

/// What a solver needs from a materialized candidate.
pub trait Candidate {
    /// Read-only problem the local search evaluates against, including its
    /// stopping policy.
    type Context: ?Sized;

    fn fitness(&self) -> f64;

    fn permutation(&self) -> &[usize];

    fn decision_vector(&self) -> &[f64];

    /// Move toward a local optimum, never increasing the fitness.
    fn local_search(&mut self, context: &Self::Context);
}
