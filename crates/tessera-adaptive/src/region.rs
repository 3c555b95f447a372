//! The capabilities the adaptive driver needs from a sub-domain.

use tessera_core::{Codomain, ConvergencePolicy, IntegralResult};

/// A sub-domain tracked by the adaptive driver, with its cached estimate.
///
/// Regions are ordered by [`Region::order_key`] alone: two regions with the
/// same key compare equal whatever their limits.
///
/// # Lifecycle
///
/// A region is built from limits with [`Region::new`], evaluated once with
/// [`Region::evaluate`], and later either kept until the end of the run or
/// consumed by [`Region::subdivide`], which returns its evaluated children.
pub trait Region: Ord + Sized {
    /// Point type the integrand is evaluated at.
    type Domain: Copy;

    /// Shape of the integrand's output.
    type Codomain: Codomain;

    /// Description of the region's extent.
    type Limits: Copy;

    /// Collection returned by [`Region::subdivide`].
    type Children: IntoIterator<Item = Self>;

    /// Number of children a subdivision produces.
    const CHILDREN: usize;

    /// Creates an unevaluated region over `limits`.
    fn new(limits: Self::Limits) -> Self;

    /// The region's extent.
    fn limits(&self) -> &Self::Limits;

    /// Applies the region's rule to `f`, caching the result and its order key.
    ///
    /// Calling this again overwrites the cache with a fresh evaluation.
    fn evaluate<F, P>(&mut self, f: &F) -> &IntegralResult<Self::Codomain>
    where
        F: Fn(Self::Domain) -> Self::Codomain,
        P: ConvergencePolicy;

    /// Splits the region at its center and evaluates every child.
    ///
    /// The children tile the region exactly. `self` is left untouched.
    fn subdivide<F, P>(&self, f: &F) -> Self::Children
    where
        F: Fn(Self::Domain) -> Self::Codomain,
        P: ConvergencePolicy;

    /// The cached estimate.
    fn result(&self) -> &IntegralResult<Self::Codomain>;

    /// The key ranking this region in the worklist.
    fn order_key(&self) -> f64;

    /// Integrand evaluations performed by one call to [`Region::evaluate`].
    fn points_count() -> usize;
}
