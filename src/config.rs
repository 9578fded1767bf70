//! Configuration parameters for the 2-opt local search.

use crate::error::TspError;
use serde::{Deserialize, Serialize};

/// When the local search stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Convergence {
    /// Accept at most one improving move, then stop.
    SingleStep,
    /// Sweep until no 2-opt neighbor is strictly better.
    #[default]
    LocalOptimum,
}

/// Configuration settings for the local search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Stopping rule of the local search
    pub convergence: Convergence,
    /// Optional cap on the number of neighborhood sweeps
    pub max_sweeps: Option<usize>,
    /// Evaluate the neighborhood with rayon (needs the `parallel` feature)
    pub parallel: bool,
    /// Seed for random decision vectors
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            convergence: Convergence::LocalOptimum,
            max_sweeps: None,
            parallel: false,
            seed: None,
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Config::default()
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, TspError> {
        let config: Config =
            serde_json::from_str(json).map_err(|e| TspError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the local search cannot run with.
    pub fn validate(&self) -> Result<(), TspError> {
        if self.max_sweeps == Some(0) {
            return Err(TspError::InvalidConfig(
                "max_sweeps must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Set the stopping rule.
    pub fn with_convergence(mut self, convergence: Convergence) -> Self {
        self.convergence = convergence;
        self
    }

    /// Set the maximum number of sweeps.
    pub fn with_max_sweeps(mut self, sweeps: usize) -> Self {
        self.max_sweeps = Some(sweeps);
        self
    }

    /// Enable or disable the parallel neighborhood sweep.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
