//! Genz–Malik degree-7 cubature on axis-aligned boxes.
//!
//! The rule evaluates the integrand at five symmetric point families around
//! the box center:
//!
//! - the center
//! - `±λ₂` and `±λ₃` along each axis
//! - `(±λ₄, ±λ₄)` in every pair of axes
//! - `±λ₅` in every coordinate (the `2^N` corners of a scaled box)
//!
//! for `2^N + 2N² + 2N + 1` evaluations in total. The first four families
//! also carry an embedded degree-5 rule; the difference between the two
//! estimates is the error estimate.
//!
//! Reference: A. C. Genz and A. A. Malik, "An adaptive algorithm for numerical
//! integration over an N-dimensional rectangular region", J. Comput. Appl.
//! Math. 6 (1980).

use std::marker::PhantomData;

use tessera_core::{Codomain, Hyperbox, IntegralResult, Rule};

/// λ₂ = √(9/70)
const LAMBDA2: f64 = 0.358_568_582_800_318_1;
/// λ₃ = λ₄ = √(9/10)
const LAMBDA3: f64 = 0.948_683_298_050_513_8;
/// λ₅ = √(9/19)
const LAMBDA5: f64 = 0.688_247_201_611_685_3;

/// Degree-7 and degree-5 weights on the unit-volume box, per point family.
struct Weights {
    degree7: [f64; 5],
    degree5: [f64; 4],
}

impl Weights {
    fn for_dimension(ndim: usize) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let n = ndim as f64;
        let corners = (0..ndim).fold(1.0, |acc, _| acc * 2.0);
        Self {
            degree7: [
                (12824.0 - 9120.0 * n + 400.0 * n * n) / 19683.0,
                980.0 / 6561.0,
                (1820.0 - 400.0 * n) / 19683.0,
                200.0 / 19683.0,
                6859.0 / 19683.0 / corners,
            ],
            degree5: [
                (729.0 - 950.0 * n + 50.0 * n * n) / 729.0,
                245.0 / 486.0,
                (265.0 - 100.0 * n) / 1458.0,
                25.0 / 729.0,
            ],
        }
    }
}

/// The Genz–Malik degree-7 rule in `N` dimensions for integrands with codomain `V`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GenzMalikD7<const N: usize, V = f64>(PhantomData<V>);

impl<const N: usize, V: Codomain> Rule for GenzMalikD7<N, V> {
    type Domain = [f64; N];
    type Limits = Hyperbox<N>;
    type Codomain = V;

    const POINTS: usize = (1 << N) + 2 * N * N + 2 * N + 1;

    fn integrate<F>(f: &F, limits: &Self::Limits) -> IntegralResult<V>
    where
        F: Fn(Self::Domain) -> Self::Codomain,
    {
        let center = limits.center();
        let half = limits.half_widths();
        let volume = limits.volume();

        // Offsets the center by `lambda` half-widths along `axis`
        let shifted = |mut point: [f64; N], axis: usize, lambda: f64| {
            point[axis] += lambda * half[axis];
            point
        };
        let symmetric_pair = |axis: usize, lambda: f64| {
            f(shifted(center, axis, lambda)).plus(&f(shifted(center, axis, -lambda)))
        };

        let sum1 = f(center);

        let mut sum2 = V::zero();
        let mut sum3 = V::zero();
        for axis in 0..N {
            sum2 = sum2.plus(&symmetric_pair(axis, LAMBDA2));
            sum3 = sum3.plus(&symmetric_pair(axis, LAMBDA3));
        }

        let mut sum4 = V::zero();
        for i in 0..N {
            for j in (i + 1)..N {
                for (si, sj) in [(1.0, 1.0), (1.0, -1.0), (-1.0, 1.0), (-1.0, -1.0)] {
                    let p = shifted(shifted(center, i, si * LAMBDA3), j, sj * LAMBDA3);
                    sum4 = sum4.plus(&f(p));
                }
            }
        }

        let mut sum5 = V::zero();
        for corner in 0..1usize << N {
            let p: [f64; N] = std::array::from_fn(|axis| {
                let sign = if corner & (1 << axis) == 0 { -1.0 } else { 1.0 };
                center[axis] + sign * LAMBDA5 * half[axis]
            });
            sum5 = sum5.plus(&f(p));
        }

        let w = Weights::for_dimension(N);
        let sums = [sum1, sum2, sum3, sum4, sum5];

        let degree7 = sums
            .iter()
            .zip(w.degree7)
            .fold(V::zero(), |acc, (s, wi)| acc.plus(&s.scaled(wi)))
            .scaled(volume);
        let degree5 = sums
            .iter()
            .zip(w.degree5)
            .fold(V::zero(), |acc, (s, wi)| acc.plus(&s.scaled(wi)))
            .scaled(volume);

        IntegralResult::new(degree7, degree7.minus(&degree5).abs_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box<const N: usize>() -> Hyperbox<N> {
        Hyperbox::new([-1.0; N], [1.0; N])
    }

    #[test]
    fn test_lambdas() {
        assert!((LAMBDA2 - (9.0_f64 / 70.0).sqrt()).abs() < 1e-15);
        assert!((LAMBDA3 - (9.0_f64 / 10.0).sqrt()).abs() < 1e-15);
        assert!((LAMBDA5 - (9.0_f64 / 19.0).sqrt()).abs() < 1e-15);
    }

    #[test]
    fn test_points_count() {
        assert_eq!(GenzMalikD7::<2>::POINTS, 17);
        assert_eq!(GenzMalikD7::<3>::POINTS, 33);
        assert_eq!(GenzMalikD7::<4>::points_count(), 57);
    }

    #[test]
    fn test_weights_integrate_constants() {
        for ndim in 1..=6 {
            #[allow(clippy::cast_precision_loss)]
            let n = ndim as f64;
            let w = Weights::for_dimension(ndim);
            let corners = (1usize << ndim) as f64;
            let pairs = 2.0 * n * (n - 1.0);
            let s7 = w.degree7[0]
                + 2.0 * n * (w.degree7[1] + w.degree7[2])
                + pairs * w.degree7[3]
                + corners * w.degree7[4];
            let s5 = w.degree5[0] + 2.0 * n * (w.degree5[1] + w.degree5[2]) + pairs * w.degree5[3];
            assert!((s7 - 1.0).abs() < 1e-13, "degree 7, ndim {ndim}");
            assert!((s5 - 1.0).abs() < 1e-13, "degree 5, ndim {ndim}");
        }
    }

    #[test]
    fn test_degree_seven_exactness_2d() {
        // ∫∫ x⁴y² over [-1,1]² = (2/5)(2/3)
        let result = GenzMalikD7::<2>::integrate(&|p: [f64; 2]| p[0].powi(4) * p[1].powi(2), &unit_box());
        assert!((result.value - 4.0 / 15.0).abs() < 1e-14);

        // x⁶ is beyond the embedded rule, so the error estimate is non-zero
        let result = GenzMalikD7::<2>::integrate(&|p: [f64; 2]| p[0].powi(6), &unit_box());
        assert!((result.value - 4.0 / 7.0).abs() < 1e-14);
        assert!(result.error > 1e-6);
    }

    #[test]
    fn test_degree_five_has_no_error() {
        let f = |p: [f64; 3]| 1.0 + p[0] * p[1] + p[0].powi(2) * p[2].powi(2) + p[1].powi(4);
        let result = GenzMalikD7::<3>::integrate(&f, &unit_box());
        // 8 + 0 + 8/9 + 8/5
        let expected = 8.0 + 8.0 / 9.0 + 8.0 / 5.0;
        assert!((result.value - expected).abs() < 1e-13);
        assert!(result.error < 1e-13);
    }

    #[test]
    fn test_shifted_box_volume() {
        let b = Hyperbox::new([1.0, 2.0], [3.0, 5.0]);
        let result = GenzMalikD7::<2>::integrate(&|p: [f64; 2]| p[0] * p[1], &b);
        // (∫₁³ x dx)(∫₂⁵ y dy) = 4 · 10.5
        assert!((result.value - 42.0).abs() < 1e-12);
    }

    #[test]
    fn test_vector_valued() {
        let result = GenzMalikD7::<2, [f64; 2]>::integrate(
            &|p: [f64; 2]| [1.0, p[0] * p[0]],
            &Hyperbox::new([0.0, 0.0], [1.0, 2.0]),
        );
        assert!((result.value[0] - 2.0).abs() < 1e-14);
        assert!((result.value[1] - 2.0 / 3.0).abs() < 1e-14);
    }
}
