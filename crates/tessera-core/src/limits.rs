//! Integration domains.
//!
//! - `Interval`: a closed interval `[min, max]` on the real line
//! - `Hyperbox<N>`: an axis-aligned box given by its lower and upper corners
//!
//! Both know how to split themselves into children that tile the parent
//! exactly. Ordering of the bounds is assumed, not enforced; `validate` is
//! available for callers that want it checked.

use smallvec::SmallVec;

use crate::error::{IntegrateError, IntegrateResult};

/// A closed interval `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl Interval {
    /// Creates the interval `[min, max]`.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Length `max - min`.
    #[inline]
    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    /// Midpoint.
    #[inline]
    pub fn center(&self) -> f64 {
        0.5 * (self.max + self.min)
    }

    /// Splits at the midpoint into `[min, mid]` and `[mid, max]`.
    ///
    /// The shared endpoint is the same floating-point value in both halves.
    pub fn bisect(&self) -> [Interval; 2] {
        let mid = self.center();
        [Interval::new(self.min, mid), Interval::new(mid, self.max)]
    }

    /// Checks that both bounds are finite and `min <= max`.
    ///
    /// # Errors
    ///
    /// Returns [`IntegrateError::InvalidInterval`] otherwise.
    pub fn validate(&self) -> IntegrateResult<()> {
        if self.min.is_finite() && self.max.is_finite() && self.min <= self.max {
            Ok(())
        } else {
            Err(IntegrateError::InvalidInterval {
                min: self.min,
                max: self.max,
            })
        }
    }
}

impl From<(f64, f64)> for Interval {
    fn from((min, max): (f64, f64)) -> Self {
        Self::new(min, max)
    }
}

/// An axis-aligned box in `N` dimensions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hyperbox<const N: usize> {
    /// Lower corner, one coordinate per axis.
    pub lower: [f64; N],
    /// Upper corner, one coordinate per axis.
    pub upper: [f64; N],
}

impl<const N: usize> Hyperbox<N> {
    /// Creates the box with corners `lower` and `upper`.
    pub fn new(lower: [f64; N], upper: [f64; N]) -> Self {
        Self { lower, upper }
    }

    /// Number of axes.
    pub const fn ndim(&self) -> usize {
        N
    }

    /// Center point.
    pub fn center(&self) -> [f64; N] {
        std::array::from_fn(|i| 0.5 * (self.upper[i] + self.lower[i]))
    }

    /// Half of the side length along each axis.
    pub fn half_widths(&self) -> [f64; N] {
        std::array::from_fn(|i| 0.5 * (self.upper[i] - self.lower[i]))
    }

    /// Product of the side lengths.
    pub fn volume(&self) -> f64 {
        self.lower
            .iter()
            .zip(&self.upper)
            .map(|(lo, hi)| hi - lo)
            .product()
    }

    /// Splits at the center into the `2^N` orthant boxes.
    ///
    /// Child `k` takes the upper half along axis `i` iff bit `i` of `k` is set.
    /// Neighbouring children share the exact same midpoint coordinates.
    pub fn split(&self) -> SmallVec<[Hyperbox<N>; 8]> {
        let mid = self.center();
        (0..1usize << N)
            .map(|k| {
                let mut child = *self;
                for axis in 0..N {
                    if k & (1 << axis) == 0 {
                        child.upper[axis] = mid[axis];
                    } else {
                        child.lower[axis] = mid[axis];
                    }
                }
                child
            })
            .collect()
    }

    /// Checks that every coordinate is finite and `lower <= upper` on each axis.
    ///
    /// # Errors
    ///
    /// Returns [`IntegrateError::InvalidBox`] naming the first offending axis.
    pub fn validate(&self) -> IntegrateResult<()> {
        for axis in 0..N {
            let (lower, upper) = (self.lower[axis], self.upper[axis]);
            if !(lower.is_finite() && upper.is_finite() && lower <= upper) {
                return Err(IntegrateError::InvalidBox { axis, lower, upper });
            }
        }
        Ok(())
    }
}

impl<const N: usize> From<([f64; N], [f64; N])> for Hyperbox<N> {
    fn from((lower, upper): ([f64; N], [f64; N])) -> Self {
        Self::new(lower, upper)
    }
}
