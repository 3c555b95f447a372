//! The contract of a fixed-order embedded integration rule.

use crate::codomain::Codomain;
use crate::result::IntegralResult;

/// A stateless embedded rule: one pass over a fixed node set yields both an
/// estimate and an error bound for the integral over a region.
///
/// The node count is a compile-time constant so drivers can report function
/// evaluations without instrumenting the integrand.
pub trait Rule {
    /// Point type the integrand is evaluated at.
    type Domain: Copy;

    /// Region description the rule integrates over.
    type Limits: Copy;

    /// Shape of the integrand's output.
    type Codomain: Codomain;

    /// Number of integrand evaluations per call to [`Rule::integrate`].
    const POINTS: usize;

    /// Number of integrand evaluations per call to [`Rule::integrate`].
    fn points_count() -> usize {
        Self::POINTS
    }

    /// Estimates the integral of `f` over `limits`.
    fn integrate<F>(f: &F, limits: &Self::Limits) -> IntegralResult<Self::Codomain>
    where
        F: Fn(Self::Domain) -> Self::Codomain;
}
