//! In-memory asset provider backed by fixed statistics.

use crate::assets::AssetProvider;
use crate::core::{MeanVarError, Result};

/// An `AssetProvider` constructed from precomputed mean returns and a
/// covariance matrix. Useful wherever asset statistics are already known:
/// tests, notebooks, or callers that compute them from their own data
/// pipeline.
#[derive(Debug, Clone)]
pub struct StaticAssets {
    tickers: Vec<String>,
    means: Vec<f64>,
    covariance: Vec<Vec<f64>>,
}

impl StaticAssets {
    /// Create a provider from tickers, per-asset mean returns, and an
    /// N x N covariance matrix.
    ///
    /// Fails if the mean-return count differs from the ticker count, or the
    /// covariance matrix is not square with matching dimension.
    pub fn new(
        tickers: Vec<String>,
        means: Vec<f64>,
        covariance: Vec<Vec<f64>>,
    ) -> Result<Self> {
        let n = tickers.len();
        if n == 0 {
            return Err(MeanVarError::invalid_parameter(
                "at least one asset is required",
            ));
        }
        if means.len() != n {
            return Err(MeanVarError::length_mismatch(n, means.len()));
        }
        if covariance.len() != n {
            return Err(MeanVarError::invalid_parameter(format!(
                "covariance matrix has {} rows for {} assets",
                covariance.len(),
                n
            )));
        }
        for (i, row) in covariance.iter().enumerate() {
            if row.len() != n {
                return Err(MeanVarError::invalid_parameter(format!(
                    "covariance row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    n
                )));
            }
        }

        Ok(Self {
            tickers,
            means,
            covariance,
        })
    }

    /// Number of assets.
    #[inline]
    pub fn len(&self) -> usize {
        self.tickers.len()
    }

    /// Check if the provider holds no assets. Construction rejects the
    /// empty case, so this is always false for a built instance.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tickers.is_empty()
    }
}

impl AssetProvider for StaticAssets {
    fn ticker_symbols(&self) -> &[String] {
        &self.tickers
    }

    fn mean_returns(&self) -> &[f64] {
        &self.means
    }

    fn covariance(&self) -> &[Vec<f64>] {
        &self.covariance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_construction() {
        let assets = StaticAssets::new(
            vec!["A".to_string(), "B".to_string()],
            vec![0.1, 0.2],
            vec![vec![0.04, 0.01], vec![0.01, 0.09]],
        )
        .unwrap();
        assert_eq!(assets.len(), 2);
        let r = assets.expected_return(&[1.0, 0.0]).unwrap();
        assert!((r - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_mismatched_means() {
        let err = StaticAssets::new(
            vec!["A".to_string(), "B".to_string()],
            vec![0.1],
            vec![vec![0.04, 0.0], vec![0.0, 0.09]],
        )
        .unwrap_err();
        assert!(matches!(err, MeanVarError::LengthMismatch { .. }));
    }

    #[test]
    fn test_rejects_non_square_covariance() {
        let err = StaticAssets::new(
            vec!["A".to_string(), "B".to_string()],
            vec![0.1, 0.2],
            vec![vec![0.04, 0.0, 0.0], vec![0.0, 0.09, 0.0]],
        )
        .unwrap_err();
        assert!(matches!(err, MeanVarError::InvalidParameter { .. }));
    }

    #[test]
    fn test_rejects_empty() {
        let err = StaticAssets::new(vec![], vec![], vec![]).unwrap_err();
        assert!(matches!(err, MeanVarError::InvalidParameter { .. }));
    }
}
