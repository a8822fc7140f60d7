//! Mean-variance distribution simulation.

use crate::assets::AssetProvider;
use crate::core::{MeanVariancePoint, Result};

/// Evaluate each weight row against the provider and collect the resulting
/// (expected return, volatility) cloud.
///
/// Rows are evaluated in order and the output preserves that order, so the
/// i-th point corresponds to the i-th weight vector. The weights themselves
/// are random and generally suboptimal; only a fraction of the cloud lies
/// near the efficient frontier.
pub fn simulate_distribution(
    provider: &dyn AssetProvider,
    weight_matrix: &[Vec<f64>],
) -> Result<Vec<MeanVariancePoint>> {
    let mut points = Vec::with_capacity(weight_matrix.len());
    for weights in weight_matrix {
        let expected_return = provider.expected_return(weights)?;
        let volatility = provider.volatility(weights)?;
        points.push(MeanVariancePoint::new(expected_return, volatility));
    }
    Ok(points)
}
