//! Core data types for mean-variance simulation.

use serde::{Deserialize, Serialize};

/// A single (expected return, volatility) observation.
///
/// Rows of both the simulated mean-variance distribution and the efficient
/// frontier. For frontier points the `volatility` field holds the
/// optimizer-reported minimum variance for the target return.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeanVariancePoint {
    /// Expected portfolio return under the weights that produced this point.
    pub expected_return: f64,
    /// Portfolio risk measure under the same weights.
    pub volatility: f64,
}

impl MeanVariancePoint {
    /// Create a new point.
    #[inline]
    pub fn new(expected_return: f64, volatility: f64) -> Self {
        Self {
            expected_return,
            volatility,
        }
    }

    /// Check that both coordinates are finite (no NaN, no infinities).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.expected_return.is_finite() && self.volatility.is_finite()
    }
}

/// Configuration for a simulation run.
///
/// The defaults carry the canonical constants: 2000 simulated portfolios
/// and 100 frontier targets. Callers that need different counts construct
/// the config explicitly; there is no runtime knob beyond this struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of randomly weighted portfolios to simulate.
    pub n_samples: usize,
    /// Number of linearly spaced target returns for the frontier sweep.
    pub n_frontier_targets: usize,
    /// RNG seed for weight sampling.
    pub seed: u64,
    /// How many times a zero-sum weight row is re-drawn before failing.
    pub max_resample_attempts: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            n_samples: 2000,
            n_frontier_targets: 100,
            seed: 42,
            max_resample_attempts: 8,
        }
    }
}
