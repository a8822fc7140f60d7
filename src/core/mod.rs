//! Core types and errors for mean-variance simulation.

pub mod error;
pub mod types;

pub use error::{MeanVarError, Result};
pub use types::{MeanVariancePoint, SimulationConfig};
