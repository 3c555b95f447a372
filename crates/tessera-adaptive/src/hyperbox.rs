//! Box regions for N-dimensional cubature.

use std::cmp::Ordering;
use std::marker::PhantomData;

use smallvec::SmallVec;
use tessera_core::{ConvergencePolicy, Hyperbox, IntegralResult, Rule};

use crate::region::Region;

/// An axis-aligned box with the estimate of its rule `Q`.
///
/// Subdivision splits every axis at once, producing `2^N` children.
#[derive(Clone, Debug)]
pub struct BoxRegion<const N: usize, Q: Rule> {
    limits: Hyperbox<N>,
    result: IntegralResult<Q::Codomain>,
    order_key: f64,
    _rule: PhantomData<Q>,
}

impl<const N: usize, Q> Region for BoxRegion<N, Q>
where
    Q: Rule<Domain = [f64; N], Limits = Hyperbox<N>>,
{
    type Domain = [f64; N];
    type Codomain = Q::Codomain;
    type Limits = Hyperbox<N>;
    type Children = SmallVec<[Self; 8]>;

    const CHILDREN: usize = 1 << N;

    fn new(limits: Hyperbox<N>) -> Self {
        Self {
            limits,
            result: IntegralResult::default(),
            order_key: 0.0,
            _rule: PhantomData,
        }
    }

    fn limits(&self) -> &Hyperbox<N> {
        &self.limits
    }

    fn evaluate<F, P>(&mut self, f: &F) -> &IntegralResult<Self::Codomain>
    where
        F: Fn(Self::Domain) -> Self::Codomain,
        P: ConvergencePolicy,
    {
        self.result = Q::integrate(f, &self.limits);
        self.order_key = P::order_key(&self.result.error);
        &self.result
    }

    fn subdivide<F, P>(&self, f: &F) -> SmallVec<[Self; 8]>
    where
        F: Fn(Self::Domain) -> Self::Codomain,
        P: ConvergencePolicy,
    {
        self.limits
            .split()
            .into_iter()
            .map(|limits| {
                let mut child = Self::new(limits);
                child.evaluate::<F, P>(f);
                child
            })
            .collect()
    }

    fn result(&self) -> &IntegralResult<Self::Codomain> {
        &self.result
    }

    fn order_key(&self) -> f64 {
        self.order_key
    }

    fn points_count() -> usize {
        Q::POINTS
    }
}

impl<const N: usize, Q: Rule> PartialEq for BoxRegion<N, Q> {
    fn eq(&self, other: &Self) -> bool {
        self.order_key == other.order_key
    }
}

impl<const N: usize, Q: Rule> Eq for BoxRegion<N, Q> {}

impl<const N: usize, Q: Rule> PartialOrd for BoxRegion<N, Q> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const N: usize, Q: Rule> Ord for BoxRegion<N, Q> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.order_key
            .partial_cmp(&other.order_key)
            .unwrap_or(Ordering::Equal)
    }
}
