//! Adaptive quadrature over an interval.

use tessera_adaptive::{Diagnostics, IntervalRegion, MultiIntegrator, Status};
use tessera_core::{
    Codomain, ConvergencePolicy, Individual, IntegralResult, IntegrateResult, Interval,
};
use tessera_rules::GaussKronrod15;

use crate::options::{run_checked, Integration, IntegrationOptions};

type Driver<V, P> = MultiIntegrator<IntervalRegion<GaussKronrod15<V>>, P>;

/// Adaptive Gauss-Kronrod (G7K15) quadrature over an interval.
///
/// `V` is the codomain of the integrand, `f64` or `[f64; N]`. `P` is the
/// convergence policy used for vector codomains.
///
/// # Example
///
/// ```
/// use tessera::{Interval, IntervalIntegrator};
///
/// let mut quad = IntervalIntegrator::<f64>::new();
/// let result = quad.integrate(&|x: f64| x.exp(), Interval::new(0.0, 1.0), 1e-12, 0.0);
/// assert!((result.value - (1.0_f64.exp() - 1.0)).abs() < 1e-12);
/// ```
#[derive(Debug)]
pub struct IntervalIntegrator<V: Codomain = f64, P = Individual> {
    driver: Driver<V, P>,
}

impl<V: Codomain, P: ConvergencePolicy> Default for IntervalIntegrator<V, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Codomain, P: ConvergencePolicy> IntervalIntegrator<V, P> {
    /// Creates an integrator with zeroed counters.
    pub fn new() -> Self {
        Self {
            driver: MultiIntegrator::new(),
        }
    }

    /// Integrates `f` over `limits` until `error <= abserr` or
    /// `error <= value * relerr`.
    ///
    /// Limits are not checked and there is no subdivision budget, so an
    /// unreachable tolerance loops forever. Prefer
    /// [`IntervalIntegrator::integrate_capped`] or
    /// [`IntervalIntegrator::try_integrate`] for untrusted input.
    pub fn integrate<F>(
        &mut self,
        f: &F,
        limits: Interval,
        abserr: f64,
        relerr: f64,
    ) -> IntegralResult<V>
    where
        F: Fn(f64) -> V,
    {
        self.driver.integrate(f, &[limits], abserr, relerr)
    }

    /// Like [`IntervalIntegrator::integrate`], stopping after at most
    /// `max_subdivisions` refine steps.
    pub fn integrate_capped<F>(
        &mut self,
        f: &F,
        limits: Interval,
        abserr: f64,
        relerr: f64,
        max_subdivisions: usize,
    ) -> (IntegralResult<V>, Status)
    where
        F: Fn(f64) -> V,
    {
        self.driver
            .integrate_capped(f, &[limits], abserr, relerr, max_subdivisions)
    }

    /// Integrates with tolerances and budget taken from `options`.
    ///
    /// A `None` budget runs the uncapped loop and always reports
    /// [`Status::Converged`].
    pub fn integrate_with_options<F>(
        &mut self,
        f: &F,
        limits: Interval,
        options: &IntegrationOptions,
    ) -> (IntegralResult<V>, Status)
    where
        F: Fn(f64) -> V,
    {
        match options.max_subdivisions {
            Some(cap) => self.integrate_capped(f, limits, options.abserr, options.relerr, cap),
            None => (
                self.integrate(f, limits, options.abserr, options.relerr),
                Status::Converged,
            ),
        }
    }

    /// Checked integration: validates `limits` and `options`, always runs
    /// with a budget, and reports failure as an error.
    ///
    /// The relative test compares against the signed value, so with
    /// `abserr = 0` a negative integral never converges and ends in
    /// `DidNotConverge`. Give a non-zero `abserr` for integrals that may be
    /// negative.
    ///
    /// # Errors
    ///
    /// - [`IntegrateError::InvalidInterval`] for inverted or non-finite bounds
    /// - [`IntegrateError::InvalidTolerance`] for unusable tolerances
    /// - [`IntegrateError::NonFiniteResult`] if the integrand produced NaN or infinity
    /// - [`IntegrateError::DidNotConverge`] if the budget ran out
    ///
    /// [`IntegrateError::InvalidInterval`]: tessera_core::IntegrateError::InvalidInterval
    /// [`IntegrateError::InvalidTolerance`]: tessera_core::IntegrateError::InvalidTolerance
    /// [`IntegrateError::NonFiniteResult`]: tessera_core::IntegrateError::NonFiniteResult
    /// [`IntegrateError::DidNotConverge`]: tessera_core::IntegrateError::DidNotConverge
    pub fn try_integrate<F>(
        &mut self,
        f: &F,
        limits: Interval,
        options: &IntegrationOptions,
    ) -> IntegrateResult<Integration<V>>
    where
        F: Fn(f64) -> V,
    {
        limits.validate()?;
        run_checked(&mut self.driver, f, limits, options)
    }

    /// Counters of the last run.
    pub fn diagnostics(&self) -> Diagnostics {
        self.driver.diagnostics()
    }

    /// Regions evaluated during the last run.
    pub fn region_evaluations(&self) -> usize {
        self.driver.region_evaluations()
    }

    /// Integrand evaluations during the last run.
    pub fn function_evaluations(&self) -> usize {
        self.driver.function_evaluations()
    }

    /// Refine steps performed during the last run.
    pub fn subdivisions(&self) -> usize {
        self.driver.subdivisions()
    }
}
