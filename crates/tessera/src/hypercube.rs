//! Adaptive cubature over an axis-aligned box.

use tessera_adaptive::{BoxRegion, Diagnostics, MultiIntegrator, Status};
use tessera_core::{
    Codomain, ConvergencePolicy, Hyperbox, Individual, IntegralResult, IntegrateResult,
};
use tessera_rules::GenzMalikD7;

use crate::options::{run_checked, Integration, IntegrationOptions};

type Driver<const N: usize, V, P> = MultiIntegrator<BoxRegion<N, GenzMalikD7<N, V>>, P>;

/// Adaptive Genz-Malik (degree 7 with embedded degree 5) cubature over an
/// `N`-dimensional box.
///
/// Each refine step splits the worst box into its `2^N` orthants, so the
/// cost per step grows quickly with `N`; the rule is meant for `N >= 2`
/// and moderate dimension.
///
/// # Example
///
/// ```
/// use tessera::{Hyperbox, HypercubeIntegrator};
///
/// let mut cub = HypercubeIntegrator::<2>::new();
/// let square = Hyperbox::new([0.0, 0.0], [1.0, 1.0]);
/// let result = cub.integrate(&|p: [f64; 2]| p[0] * p[1], square, 1e-12, 0.0);
/// assert!((result.value - 0.25).abs() < 1e-12);
/// ```
#[derive(Debug)]
pub struct HypercubeIntegrator<const N: usize, V: Codomain = f64, P = Individual> {
    driver: Driver<N, V, P>,
}

impl<const N: usize, V: Codomain, P: ConvergencePolicy> Default for HypercubeIntegrator<N, V, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, V: Codomain, P: ConvergencePolicy> HypercubeIntegrator<N, V, P> {
    /// Creates an integrator with zeroed counters.
    pub fn new() -> Self {
        Self {
            driver: MultiIntegrator::new(),
        }
    }

    /// Integrates `f` over `limits` until the tolerance is met.
    ///
    /// Unchecked and unbounded, like [`crate::IntervalIntegrator::integrate`].
    pub fn integrate<F>(
        &mut self,
        f: &F,
        limits: Hyperbox<N>,
        abserr: f64,
        relerr: f64,
    ) -> IntegralResult<V>
    where
        F: Fn([f64; N]) -> V,
    {
        self.driver.integrate(f, &[limits], abserr, relerr)
    }

    /// Like [`HypercubeIntegrator::integrate`], stopping after at most
    /// `max_subdivisions` refine steps.
    pub fn integrate_capped<F>(
        &mut self,
        f: &F,
        limits: Hyperbox<N>,
        abserr: f64,
        relerr: f64,
        max_subdivisions: usize,
    ) -> (IntegralResult<V>, Status)
    where
        F: Fn([f64; N]) -> V,
    {
        self.driver
            .integrate_capped(f, &[limits], abserr, relerr, max_subdivisions)
    }

    /// Integrates with tolerances and budget taken from `options`.
    pub fn integrate_with_options<F>(
        &mut self,
        f: &F,
        limits: Hyperbox<N>,
        options: &IntegrationOptions,
    ) -> (IntegralResult<V>, Status)
    where
        F: Fn([f64; N]) -> V,
    {
        match options.max_subdivisions {
            Some(cap) => self.integrate_capped(f, limits, options.abserr, options.relerr, cap),
            None => (
                self.integrate(f, limits, options.abserr, options.relerr),
                Status::Converged,
            ),
        }
    }

    /// Checked integration over a box.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBox` naming the first axis with inverted or
    /// non-finite bounds, and otherwise the same errors as
    /// [`crate::IntervalIntegrator::try_integrate`], including the sign
    /// caveat of a relative-only tolerance.
    pub fn try_integrate<F>(
        &mut self,
        f: &F,
        limits: Hyperbox<N>,
        options: &IntegrationOptions,
    ) -> IntegrateResult<Integration<V>>
    where
        F: Fn([f64; N]) -> V,
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
