//! Random portfolio-weight sampling.

use rand::prelude::*;
use rand_pcg::Pcg64;

use crate::core::{MeanVarError, Result};

/// Generates batches of random, normalized asset-weight vectors.
///
/// Each row is drawn as integers uniform in [0, 100) and divided by its
/// sum, so every row sums to 1.0. A row whose draws are all zero is
/// re-drawn; after `max_resample_attempts` consecutive zero rows the
/// sampler fails instead of dividing by zero.
#[derive(Debug)]
pub struct WeightSampler {
    rng: Pcg64,
    max_resample_attempts: usize,
}

impl WeightSampler {
    /// Create a sampler with a fixed seed for reproducible runs.
    pub fn new(seed: u64, max_resample_attempts: usize) -> Self {
        Self {
            rng: Pcg64::seed_from_u64(seed),
            max_resample_attempts,
        }
    }

    /// Generate an `n_samples` x `n_assets` matrix of normalized weights.
    pub fn generate(&mut self, n_samples: usize, n_assets: usize) -> Result<Vec<Vec<f64>>> {
        if n_assets == 0 {
            return Err(MeanVarError::invalid_parameter(
                "cannot sample weights for zero assets",
            ));
        }

        let mut matrix = Vec::with_capacity(n_samples);
        for _ in 0..n_samples {
            matrix.push(self.sample_row(n_assets)?);
        }
        Ok(matrix)
    }

    fn sample_row(&mut self, n_assets: usize) -> Result<Vec<f64>> {
        for _ in 0..=self.max_resample_attempts {
            let draws: Vec<u32> = (0..n_assets)
                .map(|_| self.rng.random_range(0..100u32))
                .collect();
            let sum: u32 = draws.iter().sum();
            if sum == 0 {
                continue;
            }
            let norm = 1.0 / sum as f64;
            return Ok(draws.iter().map(|&d| d as f64 * norm).collect());
        }
        Err(MeanVarError::degenerate_weights(self.max_resample_attempts))
    }
}
