//! Simulation orchestrator.

use tracing::debug;

use crate::assets::AssetProvider;
use crate::core::{MeanVariancePoint, Result, SimulationConfig};
use crate::frontier::sweep_frontier;
use crate::optimizer::{OptimizerFactory, OptimizerRegistry};
use crate::simulation::distribution::simulate_distribution;
use crate::simulation::weights::WeightSampler;

/// Mean-variance analysis of a portfolio: a Monte Carlo cloud of randomly
/// weighted portfolios plus the efficient frontier traced by an optimizer.
///
/// Both result sets are computed eagerly during construction and are
/// immutable afterwards; the accessors return the stored slices without
/// recomputation.
#[derive(Debug)]
pub struct PortfolioSimulation {
    mean_variance_distribution: Vec<MeanVariancePoint>,
    efficient_frontier: Vec<MeanVariancePoint>,
}

impl PortfolioSimulation {
    /// Run a simulation with the default configuration (2000 samples,
    /// 100 frontier targets).
    pub fn new(provider: &dyn AssetProvider, factory: &dyn OptimizerFactory) -> Result<Self> {
        Self::with_config(provider, factory, SimulationConfig::default())
    }

    /// Run a simulation with an explicit configuration.
    pub fn with_config(
        provider: &dyn AssetProvider,
        factory: &dyn OptimizerFactory,
        config: SimulationConfig,
    ) -> Result<Self> {
        let n_assets = provider.ticker_symbols().len();

        let mut sampler = WeightSampler::new(config.seed, config.max_resample_attempts);
        let weight_matrix = sampler.generate(config.n_samples, n_assets)?;

        let mean_variance_distribution = simulate_distribution(provider, &weight_matrix)?;
        debug!(
            samples = mean_variance_distribution.len(),
            assets = n_assets,
            "simulated mean-variance distribution"
        );

        let efficient_frontier = sweep_frontier(
            &mean_variance_distribution,
            factory,
            provider,
            config.n_frontier_targets,
        )?;
        debug!(
            feasible = efficient_frontier.len(),
            targets = config.n_frontier_targets,
            "swept efficient frontier"
        );

        Ok(Self {
            mean_variance_distribution,
            efficient_frontier,
        })
    }

    /// Run a simulation with the optimizer resolved by name.
    ///
    /// Resolution happens before any sampling, so an unknown name aborts
    /// the whole computation up front.
    pub fn from_registry(
        provider: &dyn AssetProvider,
        registry: &OptimizerRegistry,
        optimizer_name: &str,
    ) -> Result<Self> {
        let factory = registry.resolve(optimizer_name)?;
        Self::new(provider, factory)
    }

    /// The simulated cloud of (expected return, volatility) points, one per
    /// random weight vector, in generation order.
    pub fn mean_variance_distribution(&self) -> &[MeanVariancePoint] {
        &self.mean_variance_distribution
    }

    /// The efficient frontier: one point per feasible target return, in
    /// ascending target order, `volatility` holding the minimum variance.
    pub fn efficient_frontier(&self) -> &[MeanVariancePoint] {
        &self.efficient_frontier
    }
}
