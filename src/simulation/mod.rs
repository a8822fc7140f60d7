//! Monte Carlo simulation of randomly weighted portfolios.

pub mod distribution;
pub mod engine;
pub mod weights;

pub use distribution::simulate_distribution;
pub use engine::PortfolioSimulation;
pub use weights::WeightSampler;
