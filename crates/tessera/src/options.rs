//! Tolerances, budgets and the checked integration path shared by both facades.

use tessera_adaptive::{Diagnostics, MultiIntegrator, Region, Status};
use tessera_core::{
    Codomain, ConvergencePolicy, IntegralResult, IntegrateError, IntegrateResult,
};

/// Budget used by the checked entry points when none is given.
pub const DEFAULT_MAX_SUBDIVISIONS: usize = 10_000;

/// Options for customizing an integration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntegrationOptions {
    /// Absolute tolerance on the global error estimate.
    pub abserr: f64,
    /// Relative tolerance on the global error estimate.
    pub relerr: f64,
    /// Maximum number of refine steps; `None` refines until converged.
    pub max_subdivisions: Option<usize>,
}

impl Default for IntegrationOptions {
    fn default() -> Self {
        Self {
            abserr: 1e-10,
            relerr: 1e-10,
            max_subdivisions: Some(DEFAULT_MAX_SUBDIVISIONS),
        }
    }
}

impl IntegrationOptions {
    /// Sets the absolute tolerance.
    #[must_use]
    pub fn with_abserr(mut self, abserr: f64) -> Self {
        self.abserr = abserr;
        self
    }

    /// Sets the relative tolerance.
    #[must_use]
    pub fn with_relerr(mut self, relerr: f64) -> Self {
        self.relerr = relerr;
        self
    }

    /// Caps the number of refine steps.
    #[must_use]
    pub fn with_max_subdivisions(mut self, max_subdivisions: usize) -> Self {
        self.max_subdivisions = Some(max_subdivisions);
        self
    }

    /// Removes the budget. Only the unchecked entry points honour this;
    /// the checked ones fall back to [`DEFAULT_MAX_SUBDIVISIONS`].
    #[must_use]
    pub fn uncapped(mut self) -> Self {
        self.max_subdivisions = None;
        self
    }

    /// Checks that the tolerances describe a reachable target.
    ///
    /// A relative-only tolerance is accepted, although it can only be met
    /// by a non-negative scalar estimate.
    ///
    /// # Errors
    ///
    /// Returns [`IntegrateError::InvalidTolerance`] if either tolerance is
    /// negative or NaN, or if both are zero.
    pub fn validate(&self) -> IntegrateResult<()> {
        for (name, tol) in [("abserr", self.abserr), ("relerr", self.relerr)] {
            if tol.is_nan() || tol < 0.0 {
                return Err(IntegrateError::InvalidTolerance(format!(
                    "{name} must be non-negative, got {tol}"
                )));
            }
        }
        if self.abserr == 0.0 && self.relerr == 0.0 {
            return Err(IntegrateError::InvalidTolerance(
                "abserr and relerr are both zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// The outcome of a checked integration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Integration<V> {
    /// Estimated integral.
    pub value: V,
    /// Estimated absolute error.
    pub error: V,
    /// Counters of the run that produced the estimate.
    pub diagnostics: Diagnostics,
}

impl<V: Codomain> Integration<V> {
    /// The estimate as a value/error pair.
    pub fn result(&self) -> IntegralResult<V> {
        IntegralResult::new(self.value, self.error)
    }
}

/// Runs `driver` on already validated limits and turns the outcome into an
/// [`Integration`] or an error.
pub(crate) fn run_checked<R, P, F>(
    driver: &mut MultiIntegrator<R, P>,
    f: &F,
    limits: R::Limits,
    options: &IntegrationOptions,
) -> IntegrateResult<Integration<R::Codomain>>
where
    R: Region,
    P: ConvergencePolicy,
    F: Fn(R::Domain) -> R::Codomain,
{
    options.validate()?;

    let max_subdivisions = options.max_subdivisions.unwrap_or(DEFAULT_MAX_SUBDIVISIONS);
    let (result, status) = driver.integrate_capped(
        f,
        &[limits],
        options.abserr,
        options.relerr,
        max_subdivisions,
    );
    let diagnostics = driver.diagnostics();

    if !result.is_finite() {
        return Err(IntegrateError::NonFiniteResult {
            subdivisions: diagnostics.subdivisions,
        });
    }

    if status == Status::MaxSubdivisions {
        let error = result.error.max_component();
        log::warn!(
            "integration stopped after {max_subdivisions} subdivisions with error estimate {error:e}"
        );
        return Err(IntegrateError::DidNotConverge {
            max_subdivisions,
            error,
        });
    }

    Ok(Integration {
        value: result.value,
        error: result.error,
        diagnostics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = IntegrationOptions::default();
        assert_eq!(options.abserr, 1e-10);
        assert_eq!(options.relerr, 1e-10);
        assert_eq!(options.max_subdivisions, Some(DEFAULT_MAX_SUBDIVISIONS));
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_builder_setters() {
        let options = IntegrationOptions::default()
            .with_abserr(1e-6)
            .with_relerr(0.0)
            .with_max_subdivisions(50);
        assert_eq!(options.abserr, 1e-6);
        assert_eq!(options.relerr, 0.0);
        assert_eq!(options.max_subdivisions, Some(50));

        assert_eq!(options.uncapped().max_subdivisions, None);
    }

    #[test]
    fn test_tolerance_validation() {
        let negative = IntegrationOptions::default().with_abserr(-1.0);
        assert!(matches!(
            negative.validate(),
            Err(IntegrateError::InvalidTolerance(msg)) if msg.contains("abserr")
        ));

        let nan = IntegrationOptions::default().with_relerr(f64::NAN);
        assert!(matches!(
            nan.validate(),
            Err(IntegrateError::InvalidTolerance(msg)) if msg.contains("relerr")
        ));

        let zero = IntegrationOptions::default().with_abserr(0.0).with_relerr(0.0);
        assert!(zero.validate().is_err());

        // one zero tolerance is fine
        let relative_only = IntegrationOptions::default().with_abserr(0.0);
        assert!(relative_only.validate().is_ok());
    }
}
