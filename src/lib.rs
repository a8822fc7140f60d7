//! meanvar - Monte Carlo mean-variance simulation and efficient frontier
//! estimation.
//!
//! Given a set of assets with return/volatility characteristics, this crate:
//! - generates a cloud of randomly weighted portfolios to map the feasible
//!   risk/return region, and
//! - traces the efficient frontier by asking an optimizer for the minimum
//!   variance achievable at each of 100 target returns spanning the
//!   observed range.
//!
//! Asset data enters through the [`assets::AssetProvider`] trait; solvers
//! enter through the [`optimizer::OptimizerFactory`] trait or by name via
//! [`optimizer::OptimizerRegistry`]. [`simulation::PortfolioSimulation`]
//! wires both together and computes everything eagerly at construction.

pub mod assets;
pub mod core;
pub mod frontier;
pub mod optimizer;
pub mod simulation;

pub use crate::core::{MeanVarError, MeanVariancePoint, Result, SimulationConfig};
pub use assets::{AssetProvider, StaticAssets};
pub use optimizer::{
    MarkowitzFactory, MarkowitzOptimizer, Optimizer, OptimizerFactory, OptimizerRegistry,
    MARKOWITZ_CLOSED_FORM,
};
pub use frontier::sweep_frontier;
pub use simulation::{simulate_distribution, PortfolioSimulation, WeightSampler};
