//! The `AssetProvider` trait: the data collaborator consumed by the
//! simulation and the optimizer.
//!
//! Reads are pure functions of an explicit weight vector. A provider holds
//! per-asset mean returns and a covariance matrix; it never holds the
//! caller's weights, so repeated evaluations cannot interfere with each
//! other.

use crate::core::{MeanVarError, Result};

/// Supplies asset identifiers, per-asset return statistics, and derived
/// portfolio statistics for a given weight vector.
pub trait AssetProvider {
    /// Ordered asset identifiers. Defines the weight-vector ordering.
    fn ticker_symbols(&self) -> &[String];

    /// Per-asset expected returns, aligned with `ticker_symbols`.
    fn mean_returns(&self) -> &[f64];

    /// Asset covariance matrix, aligned with `ticker_symbols` on both axes.
    fn covariance(&self) -> &[Vec<f64>];

    /// Expected portfolio return for the given weights: `w · μ`.
    ///
    /// Fails with a length mismatch if `weights` does not match the asset
    /// count.
    fn expected_return(&self, weights: &[f64]) -> Result<f64> {
        self.check_weights(weights)?;
        Ok(dot(weights, self.mean_returns()))
    }

    /// Portfolio volatility for the given weights: `sqrt(wᵀ Σ w)`.
    ///
    /// Fails with a length mismatch if `weights` does not match the asset
    /// count.
    fn volatility(&self, weights: &[f64]) -> Result<f64> {
        self.check_weights(weights)?;
        Ok(quadratic_form(weights, self.covariance()).sqrt())
    }

    /// Validate that a weight vector matches the asset count.
    fn check_weights(&self, weights: &[f64]) -> Result<()> {
        let expected = self.ticker_symbols().len();
        if weights.len() != expected {
            return Err(MeanVarError::length_mismatch(expected, weights.len()));
        }
        Ok(())
    }
}

/// Dot product of two equal-length slices.
#[inline]
pub(crate) fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Quadratic form `wᵀ M w` over a dense square matrix.
pub(crate) fn quadratic_form(w: &[f64], matrix: &[Vec<f64>]) -> f64 {
    let mut acc = 0.0;
    for (i, row) in matrix.iter().enumerate() {
        for (j, &m_ij) in row.iter().enumerate() {
            acc += w[i] * m_ij * w[j];
        }
    }
    acc
}
