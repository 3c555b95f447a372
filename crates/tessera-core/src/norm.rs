//! Convergence policies for scalar and vector-valued results.
//!
//! A policy decides two things: how a region's error estimate collapses to
//! the single key that ranks it in the worklist, and when the running global
//! estimate is accurate enough to stop.
//!
//! Scalar codomains always use the plain test
//! `error <= abserr || error <= value * relerr`. For vector codomains:
//!
//! - [`Individual`] demands every component pass on its own
//! - [`Normed`] collapses value and error through a [`Norm`] and tests the norms

use std::marker::PhantomData;

use crate::codomain::Codomain;
use crate::result::IntegralResult;

/// A seminorm on the components of a vector-valued result.
///
/// Implementations should satisfy `norm(0) = 0` and the triangle inequality,
/// otherwise the convergence test built on them means nothing.
pub trait Norm {
    /// Computes the norm of `v`.
    fn norm(v: &[f64]) -> f64;
}

/// The maximum norm `max |v_i|`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MaxNorm;

impl Norm for MaxNorm {
    fn norm(v: &[f64]) -> f64 {
        v.iter().fold(0.0, |acc: f64, x| acc.max(x.abs()))
    }
}

/// The taxicab norm `sum |v_i|`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct L1Norm;

impl Norm for L1Norm {
    fn norm(v: &[f64]) -> f64 {
        v.iter().map(|x| x.abs()).sum()
    }
}

/// The Euclidean norm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct L2Norm;

impl Norm for L2Norm {
    fn norm(v: &[f64]) -> f64 {
        v.iter().map(|x| x * x).sum::<f64>().sqrt()
    }
}

/// Ranks regions and decides convergence of the global estimate.
pub trait ConvergencePolicy {
    /// Order key for a vector-valued error estimate.
    fn vector_order_key(error: &[f64]) -> f64;

    /// Convergence test for a vector-valued estimate.
    fn vector_converged(value: &[f64], error: &[f64], abserr: f64, relerr: f64) -> bool;

    /// The scalar used to rank a region in the worklist.
    fn order_key<V: Codomain>(error: &V) -> f64 {
        if V::SCALAR {
            error.components()[0]
        } else {
            Self::vector_order_key(error.components())
        }
    }

    /// Returns true once `result` satisfies the absolute or relative tolerance.
    fn has_converged<V: Codomain>(result: &IntegralResult<V>, abserr: f64, relerr: f64) -> bool {
        if V::SCALAR {
            let value = result.value.components()[0];
            let error = result.error.components()[0];
            error <= abserr || error <= value * relerr
        } else {
            Self::vector_converged(
                result.value.components(),
                result.error.components(),
                abserr,
                relerr,
            )
        }
    }
}

/// Per-component convergence; regions ranked by their largest error component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Individual;

impl ConvergencePolicy for Individual {
    fn vector_order_key(error: &[f64]) -> f64 {
        error.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    fn vector_converged(value: &[f64], error: &[f64], abserr: f64, relerr: f64) -> bool {
        value
            .iter()
            .zip(error)
            .all(|(val, err)| *err <= abserr || *err <= val.abs() * relerr)
    }
}

/// Convergence of the norm of the result; regions ranked by the norm of their error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Normed<N>(PhantomData<N>);

impl<N: Norm> ConvergencePolicy for Normed<N> {
    fn vector_order_key(error: &[f64]) -> f64 {
        N::norm(error)
    }

    fn vector_converged(value: &[f64], error: &[f64], abserr: f64, relerr: f64) -> bool {
        let norm_val = N::norm(value);
        let norm_err = N::norm(error);
        norm_err <= abserr || norm_err <= norm_val * relerr
    }
}
