//! Result shapes an integrand may produce.
//!
//! A codomain is either a single real (`f64`) or a fixed-length array of reals
//! (`[f64; N]`). Arrays do not implement the arithmetic operators, so the
//! componentwise helpers the rules and the driver need are provided here.

use std::fmt::Debug;

/// The codomain of an integrand: a single real or a fixed-size vector of reals.
///
/// # Laws
///
/// - `plus` and `minus` are componentwise and form an abelian group with identity `zero()`
/// - `ndim()` is fixed by the type and shared by every value of that type
pub trait Codomain: Copy + Debug + PartialEq {
    /// True when the codomain is a single real.
    const SCALAR: bool;

    /// Number of components.
    const NDIM: usize;

    /// The additive identity.
    fn zero() -> Self;

    /// Componentwise sum.
    #[must_use]
    fn plus(&self, other: &Self) -> Self;

    /// Componentwise difference.
    #[must_use]
    fn minus(&self, other: &Self) -> Self;

    /// Multiplies every component by `c`.
    #[must_use]
    fn scaled(&self, c: f64) -> Self;

    /// Componentwise absolute value.
    #[must_use]
    fn abs_value(&self) -> Self;

    /// The components in order.
    fn components(&self) -> &[f64];

    /// Number of components of this value.
    fn ndim(&self) -> usize {
        Self::NDIM
    }

    /// Largest component.
    fn max_component(&self) -> f64 {
        self.components()
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Returns true if every component is finite.
    fn is_finite(&self) -> bool {
        self.components().iter().all(|&x| f64::is_finite(x))
    }
}

impl Codomain for f64 {
    const SCALAR: bool = true;
    const NDIM: usize = 1;

    fn zero() -> Self {
        0.0
    }

    fn plus(&self, other: &Self) -> Self {
        self + other
    }

    fn minus(&self, other: &Self) -> Self {
        self - other
    }

    fn scaled(&self, c: f64) -> Self {
        self * c
    }

    fn abs_value(&self) -> Self {
        f64::abs(*self)
    }

    fn components(&self) -> &[f64] {
        std::slice::from_ref(self)
    }

    fn max_component(&self) -> f64 {
        *self
    }
}

impl<const N: usize> Codomain for [f64; N] {
    const SCALAR: bool = false;
    const NDIM: usize = N;

    fn zero() -> Self {
        [0.0; N]
    }

    fn plus(&self, other: &Self) -> Self {
        std::array::from_fn(|i| self[i] + other[i])
    }

    fn minus(&self, other: &Self) -> Self {
        std::array::from_fn(|i| self[i] - other[i])
    }

    fn scaled(&self, c: f64) -> Self {
        self.map(|x| x * c)
    }

    fn abs_value(&self) -> Self {
        self.map(f64::abs)
    }

    fn components(&self) -> &[f64] {
        self.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_shape() {
        assert!(<f64 as Codomain>::SCALAR);
        assert_eq!(2.5_f64.ndim(), 1);
        assert_eq!(2.5_f64.components(), &[2.5]);
        assert_eq!((-3.0_f64).abs_value(), 3.0);
    }

    #[test]
    fn test_array_arithmetic() {
        let a = [1.0, -2.0, 3.0];
        let b = [0.5, 0.5, 0.5];
        assert!(!<[f64; 3] as Codomain>::SCALAR);
        assert_eq!(a.ndim(), 3);
        assert_eq!(a.plus(&b), [1.5, -1.5, 3.5]);
        assert_eq!(a.minus(&b), [0.5, -2.5, 2.5]);
        assert_eq!(a.scaled(2.0), [2.0, -4.0, 6.0]);
        assert_eq!(a.abs_value(), [1.0, 2.0, 3.0]);
        assert_eq!(a.max_component(), 3.0);
    }

    #[test]
    fn test_finiteness() {
        assert!([1.0, 2.0].is_finite());
        assert!(![1.0, f64::NAN].is_finite());
        assert!(!f64::INFINITY.is_finite());
        assert!(Codomain::is_finite(&2.0_f64));
        assert!(!Codomain::is_finite(&f64::NAN));
        assert!(!Codomain::is_finite(&[0.0, 1.0, f64::NEG_INFINITY]));
    }
}
