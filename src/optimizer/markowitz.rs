//! Closed-form Markowitz minimum-variance solver.
//!
//! Solves `minimize wᵀΣw` subject to `μᵀw = target` and `Σᵢwᵢ = 1` through
//! the two-constraint Lagrangian. With `a = 1ᵀΣ⁻¹1`, `b = 1ᵀΣ⁻¹μ` and
//! `c = μᵀΣ⁻¹μ`, the minimum variance at target return r is
//! `(a·r² − 2b·r + c) / (ac − b²)`. Weights may go negative; the solver
//! models an unconstrained-sign (long/short) portfolio.

use crate::assets::AssetProvider;
use crate::core::{MeanVarError, Result};
use crate::optimizer::{Optimizer, OptimizerFactory};

const SINGULARITY_EPS: f64 = 1e-12;

/// Minimum-variance optimizer for a single target expected return.
///
/// One-shot: construct with a target, call [`Optimizer::fit`] once, then
/// read [`Optimizer::optimal_variance`] and [`MarkowitzOptimizer::optimal_weights`].
#[derive(Debug, Clone)]
pub struct MarkowitzOptimizer {
    target_return: f64,
    optimal_variance: Option<f64>,
    optimal_weights: Option<Vec<f64>>,
}

impl MarkowitzOptimizer {
    /// Create a solver for the given target expected return.
    pub fn new(target_return: f64) -> Self {
        Self {
            target_return,
            optimal_variance: None,
            optimal_weights: None,
        }
    }

    /// The target expected return this solver was constructed with.
    #[inline]
    pub fn target_return(&self) -> f64 {
        self.target_return
    }

    /// Weights of the minimum-variance portfolio, if `fit` found one.
    pub fn optimal_weights(&self) -> Option<&[f64]> {
        self.optimal_weights.as_deref()
    }
}

impl Optimizer for MarkowitzOptimizer {
    fn fit(&mut self, provider: &dyn AssetProvider) -> Result<()> {
        let means = provider.mean_returns();
        let cov = provider.covariance();
        let n = provider.ticker_symbols().len();

        if means.len() != n {
            return Err(MeanVarError::length_mismatch(n, means.len()));
        }
        if cov.len() != n || cov.iter().any(|row| row.len() != n) {
            return Err(MeanVarError::invalid_parameter(
                "covariance matrix dimension does not match asset count",
            ));
        }

        self.optimal_variance = None;
        self.optimal_weights = None;

        // Non-positive-definite covariance means the problem has no unique
        // minimum; report infeasibility rather than an error.
        let chol = match cholesky(cov) {
            Some(l) => l,
            None => return Ok(()),
        };

        let ones = vec![1.0; n];
        let sigma_inv_mu = solve_spd(&chol, means);
        let sigma_inv_one = solve_spd(&chol, &ones);

        let a: f64 = sigma_inv_one.iter().sum();
        let b: f64 = sigma_inv_mu.iter().sum();
        let c: f64 = means
            .iter()
            .zip(sigma_inv_mu.iter())
            .map(|(m, x)| m * x)
            .sum();

        let d = a * c - b * b;
        if d.abs() < SINGULARITY_EPS || !d.is_finite() {
            // Degenerate frontier (e.g. all assets share one expected
            // return): no unique solution per target.
            return Ok(());
        }

        let r = self.target_return;
        let lambda = (a * r - b) / d;
        let gamma = (c - b * r) / d;

        let weights: Vec<f64> = sigma_inv_mu
            .iter()
            .zip(sigma_inv_one.iter())
            .map(|(xm, xo)| lambda * xm + gamma * xo)
            .collect();

        let variance = (a * r * r - 2.0 * b * r + c) / d;
        if !variance.is_finite() || variance < 0.0 {
            return Ok(());
        }

        self.optimal_variance = Some(variance);
        self.optimal_weights = Some(weights);
        Ok(())
    }

    fn optimal_variance(&self) -> Option<f64> {
        self.optimal_variance
    }
}

/// Factory for [`MarkowitzOptimizer`] instances.
pub struct MarkowitzFactory;

impl OptimizerFactory for MarkowitzFactory {
    fn construct(&self, target_return: f64) -> Box<dyn Optimizer> {
        Box::new(MarkowitzOptimizer::new(target_return))
    }
}

/// Cholesky decomposition of a symmetric matrix.
/// Returns the lower-triangular L with A = L·Lᵀ, or `None` if the matrix
/// is not positive definite.
fn cholesky(matrix: &[Vec<f64>]) -> Option<Vec<Vec<f64>>> {
    let n = matrix.len();
    let mut l = vec![vec![0.0; n]; n];

    for i in 0..n {
        for j in 0..=i {
            let mut sum = 0.0;
            for k in 0..j {
                sum += l[i][k] * l[j][k];
            }

            if i == j {
                let diag = matrix[i][i] - sum;
                if diag <= SINGULARITY_EPS {
                    return None;
                }
                l[i][j] = diag.sqrt();
            } else {
                l[i][j] = (matrix[i][j] - sum) / l[j][j];
            }
        }
    }

    Some(l)
}

/// Solve `A x = b` given the Cholesky factor L of A: forward-substitute
/// `L z = b`, then back-substitute `Lᵀ x = z`.
fn solve_spd(l: &[Vec<f64>], b: &[f64]) -> Vec<f64> {
    let n = l.len();

    let mut z = vec![0.0; n];
    for i in 0..n {
        let mut sum = b[i];
        for k in 0..i {
            sum -= l[i][k] * z[k];
        }
        z[i] = sum / l[i][i];
    }

    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let mut sum = z[i];
        for k in (i + 1)..n {
            sum -= l[k][i] * x[k];
        }
        x[i] = sum / l[i][i];
    }

    x
}
