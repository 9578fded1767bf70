//! 2-opt local search over random-key encoded tours.

pub mod two_opt;

use crate::config::{Config, Convergence};
use crate::problem::DistanceMatrix;
use crate::solution::Solution;
use log::debug;

pub use self::two_opt::{reverse_segment, Neighbor};

/// Counters collected while the local search runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalSearchStats {
    /// Full neighborhood sweeps performed
    pub sweeps: usize,
    /// Improving moves that replaced the current solution
    pub improvements: usize,
    /// Neighbors built and evaluated
    pub neighbors_evaluated: usize,
}

/// Best-improvement 2-opt hill climber.
#[derive(Debug, Clone, Default)]
pub struct LocalSearch {
    pub convergence: Convergence,
    pub max_sweeps: Option<usize>,
    pub parallel: bool,
    pub stats: LocalSearchStats,
}

impl LocalSearch {
    /// Create a local search from the relevant configuration fields.
    pub fn new(config: &Config) -> Self {
        LocalSearch {
            convergence: config.convergence,
            max_sweeps: config.max_sweeps,
            parallel: config.parallel,
            stats: LocalSearchStats::default(),
        }
    }

    /// Improve `solution` in place. Returns whether its fitness decreased.
    ///
    /// Each sweep scans the whole neighborhood and moves to the best strictly
    /// better neighbor. With [`Convergence::SingleStep`] at most one move is
    /// accepted; with [`Convergence::LocalOptimum`] sweeps repeat until one
    /// finds nothing, or until `max_sweeps` is reached.
    pub fn run(&mut self, solution: &mut Solution, distances: &DistanceMatrix) -> bool {
        self.stats = LocalSearchStats::default();
        let initial_fitness = solution.fitness;

        while self.may_sweep() {
            if !self.search(solution, distances) {
                break;
            }
            if self.convergence == Convergence::SingleStep {
                break;
            }
        }

        debug!(
            "2-opt finished: fitness {} -> {} after {} sweeps ({} moves, {} neighbors)",
            initial_fitness,
            solution.fitness,
            self.stats.sweeps,
            self.stats.improvements,
            self.stats.neighbors_evaluated
        );

        solution.fitness < initial_fitness
    }

    /// Perform one sweep and apply its best move if it improves `solution`.
    pub fn search(&mut self, solution: &mut Solution, distances: &DistanceMatrix) -> bool {
        self.stats.sweeps += 1;
        let n = solution.len();
        self.stats.neighbors_evaluated += n * n.saturating_sub(1) / 2;

        let best = match self.best_neighbor(solution, distances) {
            Some(best) => best,
            None => return false,
        };

        if best.solution.fitness < solution.fitness {
            debug!(
                "sweep {}: reversing [{}, {}] improves {} -> {}",
                self.stats.sweeps, best.start, best.end, solution.fitness, best.solution.fitness
            );
            *solution = best.solution;
            self.stats.improvements += 1;
            true
        } else {
            false
        }
    }

    fn may_sweep(&self) -> bool {
        self.max_sweeps
            .map_or(true, |limit| self.stats.sweeps < limit)
    }

    #[cfg(feature = "parallel")]
    fn best_neighbor(&self, solution: &Solution, distances: &DistanceMatrix) -> Option<Neighbor> {
        if self.parallel {
            two_opt::best_neighbor_parallel(&solution.permutation, distances)
        } else {
            two_opt::best_neighbor(&solution.permutation, distances)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn best_neighbor(&self, solution: &Solution, distances: &DistanceMatrix) -> Option<Neighbor> {
        if self.parallel {
            debug!("parallel sweep requested without the `parallel` feature");
        }
        two_opt::best_neighbor(&solution.permutation, distances)
    }
}
