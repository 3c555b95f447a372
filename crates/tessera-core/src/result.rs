//! Value/error pairs produced by integration rules.
//!
//! `IntegralResult` is the unit of bookkeeping for the adaptive engine: every
//! region caches one, and the global estimate is their sum. Addition and
//! subtraction are componentwise on both fields, so the running total can be
//! updated incrementally when a region is replaced by its children.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use num_traits::Zero;

use crate::codomain::Codomain;

/// An integral estimate together with its error estimate.
///
/// `value` and `error` always share the same shape. The error is non-negative
/// for anything a rule produces, but subtraction may make it transiently
/// negative while a running sum is being updated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntegralResult<V> {
    /// Estimated value of the integral.
    pub value: V,
    /// Estimated absolute error of `value`.
    pub error: V,
}

impl<V: Codomain> IntegralResult<V> {
    /// Creates a result from a value and an error estimate.
    pub fn new(value: V, error: V) -> Self {
        Self { value, error }
    }

    /// Number of components of the codomain (1 for scalars).
    pub fn ndim(&self) -> usize {
        self.value.ndim()
    }

    /// Multiplies the value by `c` and the error by `|c|`.
    #[must_use]
    pub fn scale(&self, c: f64) -> Self {
        Self {
            value: self.value.scaled(c),
            error: self.error.scaled(c.abs()),
        }
    }

    /// Returns true if every component of value and error is finite.
    pub fn is_finite(&self) -> bool {
        self.value.is_finite() && self.error.is_finite()
    }
}

impl<V: Codomain> Default for IntegralResult<V> {
    fn default() -> Self {
        Self {
            value: V::zero(),
            error: V::zero(),
        }
    }
}

impl<V: Codomain> AddAssign for IntegralResult<V> {
    fn add_assign(&mut self, rhs: Self) {
        self.value = self.value.plus(&rhs.value);
        self.error = self.error.plus(&rhs.error);
    }
}

impl<V: Codomain> SubAssign for IntegralResult<V> {
    fn sub_assign(&mut self, rhs: Self) {
        self.value = self.value.minus(&rhs.value);
        self.error = self.error.minus(&rhs.error);
    }
}

impl<V: Codomain> Add for IntegralResult<V> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<V: Codomain> Sub for IntegralResult<V> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<V: Codomain> Neg for IntegralResult<V> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::default() - self
    }
}

impl<V: Codomain> Zero for IntegralResult<V> {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.value.components().iter().all(|&x| x == 0.0)
            && self.error.components().iter().all(|&x| x == 0.0)
    }
}

impl<V: Codomain> Sum for IntegralResult<V> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, r| acc + r)
    }
}

impl<'a, V: Codomain> Sum<&'a IntegralResult<V>> for IntegralResult<V> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, r| acc + *r)
    }
}
