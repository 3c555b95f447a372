//! The adaptive subdivision driver.
//!
//! Implements globally adaptive integration over a worklist of regions:
//!
//! 1. Evaluate every initial region and sum their estimates
//! 2. While the running total fails the convergence test (and the budget
//!    allows), pop the region with the largest order key, replace it by its
//!    evaluated children and update the total by the difference
//! 3. Recompute the total from scratch over all live regions
//!
//! The incremental update keeps each step cheap; the final resummation
//! discards the rounding error accumulated by many `+=`/`-=` operations.

use std::collections::BinaryHeap;
use std::fmt;
use std::marker::PhantomData;

use num_traits::Zero;
use tessera_core::{ConvergencePolicy, IntegralResult, Individual};

use crate::region::Region;

/// Upper bound on the regions the worklist reserves room for up front.
const MAX_RESERVED_REGIONS: usize = 4096;

/// How a capped integration ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    /// The tolerance was met.
    Converged,
    /// The subdivision budget ran out first.
    MaxSubdivisions,
}

impl Status {
    /// Returns true if the tolerance was met.
    pub fn is_converged(self) -> bool {
        matches!(self, Status::Converged)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Converged => write!(f, "CONVERGED"),
            Status::MaxSubdivisions => write!(f, "MAX_SUBDIVISIONS"),
        }
    }
}

/// Counters describing the most recent integration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Diagnostics {
    /// Regions evaluated: initial regions plus every child produced
    pub region_evaluations: usize,
    /// Integrand evaluations: region evaluations times the rule's node count
    pub function_evaluations: usize,
    /// Refine steps performed
    pub subdivisions: usize,
    /// Regions alive when the run ended
    pub regions: usize,
}

/// Globally adaptive integrator over regions of type `R`.
///
/// `P` decides how vector-valued errors rank regions and when the global
/// estimate has converged; see [`tessera_core::norm`].
///
/// The integrator holds no state between calls except the [`Diagnostics`]
/// of the last run.
#[derive(Debug)]
pub struct MultiIntegrator<R: Region, P = Individual> {
    diagnostics: Diagnostics,
    _marker: PhantomData<(R, P)>,
}

impl<R: Region, P: ConvergencePolicy> Default for MultiIntegrator<R, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Region, P: ConvergencePolicy> MultiIntegrator<R, P> {
    /// Creates an integrator with zeroed counters.
    pub fn new() -> Self {
        Self {
            diagnostics: Diagnostics::default(),
            _marker: PhantomData,
        }
    }

    /// Integrates `f` over the union of `domain` until the tolerance is met.
    ///
    /// Converged means `error <= abserr` or `error <= value * relerr`, as
    /// decided by the policy `P`.
    ///
    /// There is no budget: an integrand the rule cannot resolve, or a
    /// tolerance below what the arithmetic can deliver, makes this loop
    /// forever. Use [`MultiIntegrator::integrate_capped`] unless the problem
    /// is known to be well behaved.
    pub fn integrate<F>(
        &mut self,
        f: &F,
        domain: &[R::Limits],
        abserr: f64,
        relerr: f64,
    ) -> IntegralResult<R::Codomain>
    where
        F: Fn(R::Domain) -> R::Codomain,
    {
        self.run(f, domain, abserr, relerr, None).0
    }

    /// Like [`MultiIntegrator::integrate`], but performs at most
    /// `max_subdivisions` refine steps.
    ///
    /// Returns [`Status::MaxSubdivisions`] if the budget ran out before the
    /// tolerance was met; the estimate is still the best one available.
    pub fn integrate_capped<F>(
        &mut self,
        f: &F,
        domain: &[R::Limits],
        abserr: f64,
        relerr: f64,
        max_subdivisions: usize,
    ) -> (IntegralResult<R::Codomain>, Status)
    where
        F: Fn(R::Domain) -> R::Codomain,
    {
        self.run(f, domain, abserr, relerr, Some(max_subdivisions))
    }

    /// Counters of the last run.
    pub fn diagnostics(&self) -> Diagnostics {
        self.diagnostics
    }

    /// Regions evaluated during the last run.
    pub fn region_evaluations(&self) -> usize {
        self.diagnostics.region_evaluations
    }

    /// Integrand evaluations during the last run.
    pub fn function_evaluations(&self) -> usize {
        self.diagnostics.function_evaluations
    }

    /// Refine steps performed during the last run.
    pub fn subdivisions(&self) -> usize {
        self.diagnostics.subdivisions
    }

    /// Regions alive at the end of the last run.
    pub fn region_count(&self) -> usize {
        self.diagnostics.regions
    }

    fn run<F>(
        &mut self,
        f: &F,
        domain: &[R::Limits],
        abserr: f64,
        relerr: f64,
        max_subdivisions: Option<usize>,
    ) -> (IntegralResult<R::Codomain>, Status)
    where
        F: Fn(R::Domain) -> R::Codomain,
    {
        self.diagnostics = Diagnostics::default();

        // uncapped runs and large boxes grow the heap on demand
        let reserved = max_subdivisions
            .map_or(0, |cap| cap.saturating_mul(R::CHILDREN - 1).min(MAX_RESERVED_REGIONS));
        let mut heap = BinaryHeap::with_capacity(domain.len() + reserved);

        let mut total = self.initialize(f, domain, &mut heap);

        let status = loop {
            if P::has_converged(&total, abserr, relerr) {
                break Status::Converged;
            }
            if max_subdivisions.is_some_and(|cap| self.diagnostics.subdivisions >= cap) {
                break Status::MaxSubdivisions;
            }
            // Only reachable with an empty domain and a NaN tolerance
            if !self.subdivide_top_region(f, &mut heap, &mut total) {
                break Status::Converged;
            }
        };

        // resum to shed the rounding error of the incremental updates
        let total: IntegralResult<R::Codomain> = heap.iter().map(Region::result).sum();

        self.diagnostics.regions = heap.len();
        self.diagnostics.function_evaluations =
            self.diagnostics.region_evaluations * R::points_count();

        log::debug!(
            "adaptive integration finished: status={}, subdivisions={}, regions={}, evaluations={}",
            status,
            self.diagnostics.subdivisions,
            self.diagnostics.regions,
            self.diagnostics.function_evaluations,
        );

        (total, status)
    }

    fn initialize<F>(
        &mut self,
        f: &F,
        domain: &[R::Limits],
        heap: &mut BinaryHeap<R>,
    ) -> IntegralResult<R::Codomain>
    where
        F: Fn(R::Domain) -> R::Codomain,
    {
        let mut total = IntegralResult::zero();
        for &limits in domain {
            let mut region = R::new(limits);
            total += *region.evaluate::<F, P>(f);
            heap.push(region);
        }
        self.diagnostics.region_evaluations += domain.len();
        total
    }

    /// Replaces the worst region by its children. Returns false if the
    /// worklist was empty.
    fn subdivide_top_region<F>(
        &mut self,
        f: &F,
        heap: &mut BinaryHeap<R>,
        total: &mut IntegralResult<R::Codomain>,
    ) -> bool
    where
        F: Fn(R::Domain) -> R::Codomain,
    {
        let Some(top) = heap.pop() else {
            return false;
        };

        log::trace!(
            "subdivision {}: refining region with order key {:e}",
            self.diagnostics.subdivisions + 1,
            top.order_key(),
        );

        let mut children_total = IntegralResult::zero();
        for child in top.subdivide::<F, P>(f) {
            children_total += *child.result();
            heap.push(child);
        }
        *total += children_total - *top.result();

        self.diagnostics.region_evaluations += R::CHILDREN;
        self.diagnostics.subdivisions += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IntervalRegion;
    use tessera_core::Interval;
    use tessera_rules::GaussKronrod15;

    type Quadrature = MultiIntegrator<IntervalRegion<GaussKronrod15>>;

    #[test]
    fn test_status_display() {
        assert_eq!(Status::Converged.to_string(), "CONVERGED");
        assert_eq!(Status::MaxSubdivisions.to_string(), "MAX_SUBDIVISIONS");
        assert!(Status::Converged.is_converged());
        assert!(!Status::MaxSubdivisions.is_converged());
    }

    #[test]
    fn test_smooth_integrand_needs_no_subdivision() {
        let mut integrator = Quadrature::new();
        let result = integrator.integrate(&|x: f64| x * x, &[Interval::new(0.0, 1.0)], 1e-12, 0.0);
        assert!((result.value - 1.0 / 3.0).abs() < 1e-14);
        assert_eq!(integrator.subdivisions(), 0);
        assert_eq!(integrator.region_evaluations(), 1);
        assert_eq!(integrator.function_evaluations(), 15);
        assert_eq!(integrator.region_count(), 1);
    }

    #[test]
    fn test_counters_track_refine_steps() {
        let f = |x: f64| x.sqrt();
        let mut integrator = Quadrature::new();
        let (result, status) =
            integrator.integrate_capped(&f, &[Interval::new(0.0, 1.0)], 1e-10, 0.0, 500);

        assert_eq!(status, Status::Converged);
        assert!((result.value - 2.0 / 3.0).abs() < 1e-10);

        let steps = integrator.subdivisions();
        assert!(steps > 0);
        assert_eq!(integrator.region_evaluations(), 1 + 2 * steps);
        assert_eq!(integrator.function_evaluations(), 15 * (1 + 2 * steps));
        assert_eq!(integrator.region_count(), 1 + steps);
    }

    #[test]
    fn test_counters_reset_between_runs() {
        let mut integrator = Quadrature::new();
        let _ = integrator.integrate_capped(&|x: f64| x.sqrt(), &[Interval::new(0.0, 1.0)], 0.0, 0.0, 7);
        assert_eq!(integrator.subdivisions(), 7);

        let _ = integrator.integrate(&|x: f64| x, &[Interval::new(0.0, 1.0)], 1e-12, 0.0);
        assert_eq!(
            integrator.diagnostics(),
            Diagnostics {
                region_evaluations: 1,
                function_evaluations: 15,
                subdivisions: 0,
                regions: 1,
            }
        );
    }

    #[test]
    fn test_empty_domain() {
        let mut integrator = Quadrature::new();
        let (result, status) = integrator.integrate_capped(&|x: f64| x, &[], 1e-10, 0.0, 10);
        assert_eq!(status, Status::Converged);
        assert_eq!(result, IntegralResult::zero());
        assert_eq!(integrator.region_evaluations(), 0);

        // a NaN tolerance can never be met, but there is nothing to refine
        let result = integrator.integrate(&|x: f64| x, &[], f64::NAN, f64::NAN);
        assert_eq!(result.value, 0.0);
        assert_eq!(integrator.subdivisions(), 0);
    }
}
