//! Optimizer capability and registry.
//!
//! The frontier sweep does not know how a minimum-variance problem gets
//! solved; it only needs a fresh [`Optimizer`] per target return. Concrete
//! solvers are supplied through an [`OptimizerFactory`], either directly or
//! looked up by name in an [`OptimizerRegistry`].

pub mod markowitz;

use std::collections::HashMap;

use crate::assets::AssetProvider;
use crate::core::{MeanVarError, Result};

pub use markowitz::{MarkowitzFactory, MarkowitzOptimizer};

/// Name the builtin closed-form Markowitz solver is registered under.
pub const MARKOWITZ_CLOSED_FORM: &str = "markowitz.closed_form";

/// A single-use minimum-variance solver for one target expected return.
pub trait Optimizer {
    /// Solve for the minimum-variance weights achieving the target return.
    ///
    /// Failing to converge is not an error: `fit` returns `Ok(())` and
    /// leaves `optimal_variance` at `None`. An `Err` is reserved for
    /// malformed inputs (e.g. weight/asset dimension mismatches).
    fn fit(&mut self, provider: &dyn AssetProvider) -> Result<()>;

    /// Minimum variance found by `fit`, or `None` when the target was
    /// infeasible or the solver did not converge.
    fn optimal_variance(&self) -> Option<f64>;
}

/// Constructs a fresh optimizer for each target expected return.
pub trait OptimizerFactory {
    /// Build an optimizer parameterized by the target expected return.
    fn construct(&self, target_return: f64) -> Box<dyn Optimizer>;
}

impl std::fmt::Debug for dyn OptimizerFactory + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn OptimizerFactory")
    }
}

impl<F> OptimizerFactory for F
where
    F: Fn(f64) -> Box<dyn Optimizer>,
{
    fn construct(&self, target_return: f64) -> Box<dyn Optimizer> {
        self(target_return)
    }
}

/// Name-to-factory lookup for optimizer implementations.
///
/// Stands in for resolving an optimizer class from a string identifier:
/// callers that configure the optimizer by name go through the registry and
/// get a fail-fast [`MeanVarError::UnknownOptimizer`] when the name is not
/// registered.
#[derive(Default)]
pub struct OptimizerRegistry {
    factories: HashMap<String, Box<dyn OptimizerFactory>>,
}

impl OptimizerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the builtin solvers registered.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(MARKOWITZ_CLOSED_FORM, Box::new(MarkowitzFactory));
        registry
    }

    /// Register a factory under a name, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, factory: Box<dyn OptimizerFactory>) {
        self.factories.insert(name.into(), factory);
    }

    /// Look up a factory by name.
    pub fn resolve(&self, name: &str) -> Result<&dyn OptimizerFactory> {
        self.factories
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| MeanVarError::unknown_optimizer(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysInfeasible;

    impl Optimizer for AlwaysInfeasible {
        fn fit(&mut self, _provider: &dyn AssetProvider) -> Result<()> {
            Ok(())
        }
        fn optimal_variance(&self) -> Option<f64> {
            None
        }
    }

    #[test]
    fn test_builtin_name_resolves() {
        let registry = OptimizerRegistry::with_builtin();
        assert!(registry.resolve(MARKOWITZ_CLOSED_FORM).is_ok());
    }

    #[test]
    fn test_unknown_name_fails() {
        let registry = OptimizerRegistry::with_builtin();
        let err = registry.resolve("nonexistent.module.Class").unwrap_err();
        assert!(matches!(err, MeanVarError::UnknownOptimizer { .. }));
    }

    #[test]
    fn test_closure_factory_registers() {
        let mut registry = OptimizerRegistry::new();
        let factory = |_target: f64| -> Box<dyn Optimizer> { Box::new(AlwaysInfeasible) };
        registry.register("test.infeasible", Box::new(factory));

        let resolved = registry.resolve("test.infeasible").unwrap();
        let optimizer = resolved.construct(0.1);
        assert!(optimizer.optimal_variance().is_none());
    }
}
