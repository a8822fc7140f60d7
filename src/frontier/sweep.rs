//! Frontier sweep over linearly spaced target returns.

use crate::assets::AssetProvider;
use crate::core::{MeanVarError, MeanVariancePoint, Result};
use crate::optimizer::OptimizerFactory;

/// Trace the efficient frontier across the observed return range.
///
/// Takes the min and max expected return of the simulated distribution,
/// spans them with `n_targets` linearly spaced target returns, and asks a
/// fresh optimizer per target for the minimum achievable variance. Targets
/// the optimizer cannot satisfy are dropped silently, so the output holds
/// at most `n_targets` points, in ascending target-return order, with the
/// `volatility` field carrying the optimizer-reported minimum variance.
///
/// Fails with an empty-distribution error when there are no points to take
/// a return range from.
pub fn sweep_frontier(
    distribution: &[MeanVariancePoint],
    factory: &dyn OptimizerFactory,
    provider: &dyn AssetProvider,
    n_targets: usize,
) -> Result<Vec<MeanVariancePoint>> {
    if distribution.is_empty() {
        return Err(MeanVarError::empty_distribution("frontier sweep"));
    }

    let mut min_return = f64::INFINITY;
    let mut max_return = f64::NEG_INFINITY;
    for point in distribution {
        min_return = min_return.min(point.expected_return);
        max_return = max_return.max(point.expected_return);
    }

    let targets = linspace(min_return, max_return, n_targets);
    let mut frontier = Vec::with_capacity(targets.len());

    for target in targets {
        let mut optimizer = factory.construct(target);
        optimizer.fit(provider)?;
        if let Some(variance) = optimizer.optimal_variance() {
            frontier.push(MeanVariancePoint::new(target, variance));
        }
    }

    Ok(frontier)
}

/// `n` evenly spaced values across `[start, end]` inclusive.
///
/// A single requested value, or equal bounds, yields `start` repeated; the
/// divide-by-(n-1) path is only taken for n >= 2.
pub(crate) fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    if n == 0 {
        return vec![];
    }
    if n == 1 || start == end {
        return vec![start; n];
    }

    let step = (end - start) / (n - 1) as f64;
    let mut values = Vec::with_capacity(n);
    for i in 0..n - 1 {
        values.push(start + step * i as f64);
    }
    // Exact endpoint, immune to step rounding.
    values.push(end);
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::StaticAssets;
    use crate::optimizer::{MarkowitzFactory, Optimizer};

    fn provider() -> StaticAssets {
        StaticAssets::new(
            vec!["A".to_string(), "B".to_string()],
            vec![0.10, 0.20],
            vec![vec![0.04, 0.0], vec![0.0, 0.09]],
        )
        .unwrap()
    }

    fn cloud() -> Vec<MeanVariancePoint> {
        vec![
            MeanVariancePoint::new(0.12, 0.05),
            MeanVariancePoint::new(0.18, 0.08),
            MeanVariancePoint::new(0.15, 0.06),
        ]
    }

    #[test]
    fn test_linspace_endpoints_and_spacing() {
        let values = linspace(0.0, 1.0, 5);
        assert_eq!(values.len(), 5);
        assert!((values[0] - 0.0).abs() < 1e-12);
        assert!((values[4] - 1.0).abs() < 1e-12);
        assert!((values[1] - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_linspace_degenerate_range() {
        let values = linspace(0.15, 0.15, 100);
        assert_eq!(values.len(), 100);
        for &v in &values {
            assert!((v - 0.15).abs() < 1e-12);
        }
    }

    #[test]
    fn test_linspace_single_point() {
        assert_eq!(linspace(0.3, 0.9, 1), vec![0.3]);
        assert!(linspace(0.3, 0.9, 0).is_empty());
    }

    #[test]
    fn test_empty_distribution_fails() {
        let err = sweep_frontier(&[], &MarkowitzFactory, &provider(), 100).unwrap_err();
        assert!(matches!(err, MeanVarError::EmptyDistribution { .. }));
    }

    #[test]
    fn test_frontier_spans_observed_range_ascending() {
        let frontier = sweep_frontier(&cloud(), &MarkowitzFactory, &provider(), 100).unwrap();

        assert!(!frontier.is_empty());
        assert!(frontier.len() <= 100);
        assert!((frontier[0].expected_return - 0.12).abs() < 1e-12);
        assert!((frontier.last().unwrap().expected_return - 0.18).abs() < 1e-12);
        for pair in frontier.windows(2) {
            assert!(pair[0].expected_return <= pair[1].expected_return);
        }
    }

    #[test]
    fn test_infeasible_targets_dropped_silently() {
        struct NeverConverges;
        impl Optimizer for NeverConverges {
            fn fit(&mut self, _provider: &dyn AssetProvider) -> Result<()> {
                Ok(())
            }
            fn optimal_variance(&self) -> Option<f64> {
                None
            }
        }

        let factory = |_target: f64| -> Box<dyn Optimizer> { Box::new(NeverConverges) };
        let frontier = sweep_frontier(&cloud(), &factory, &provider(), 100).unwrap();
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_frontier_variance_below_cloud_at_targets() {
        // The optimizer's variance at any target must not exceed the
        // variance of a random cloud point with the same return.
        let provider = provider();
        let weights = [0.5, 0.5];
        let cloud_point = MeanVariancePoint::new(
            provider.expected_return(&weights).unwrap(),
            provider.volatility(&weights).unwrap().powi(2),
        );
        let frontier =
            sweep_frontier(&[cloud_point, cloud_point], &MarkowitzFactory, &provider, 1).unwrap();

        assert_eq!(frontier.len(), 1);
        assert!(frontier[0].volatility <= cloud_point.volatility + 1e-12);
    }
}
