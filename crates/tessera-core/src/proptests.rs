//! Property-based tests for the result algebra and domain splitting.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Hyperbox, IntegralResult, Interval};

    fn component() -> impl Strategy<Value = f64> {
        -1.0e3..1.0e3
    }

    fn scalar_result() -> impl Strategy<Value = IntegralResult<f64>> {
        (component(), 0.0..1.0e3).prop_map(|(v, e)| IntegralResult::new(v, e))
    }

    fn vector_result() -> impl Strategy<Value = IntegralResult<[f64; 3]>> {
        (prop::array::uniform3(component()), prop::array::uniform3(0.0..1.0e3))
            .prop_map(|(v, e)| IntegralResult::new(v, e))
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * (1.0 + a.abs().max(b.abs()))
    }

    fn close_vec(a: &IntegralResult<[f64; 3]>, b: &IntegralResult<[f64; 3]>) -> bool {
        (0..3).all(|i| close(a.value[i], b.value[i]) && close(a.error[i], b.error[i]))
    }

    proptest! {
        // Abelian group laws

        #[test]
        fn scalar_add_commutative(a in scalar_result(), b in scalar_result()) {
            prop_assert_eq!(a + b, b + a);
        }

        #[test]
        fn scalar_add_associative(a in scalar_result(), b in scalar_result(), c in scalar_result()) {
            let lhs = (a + b) + c;
            let rhs = a + (b + c);
            prop_assert!(close(lhs.value, rhs.value));
            prop_assert!(close(lhs.error, rhs.error));
        }

        #[test]
        fn scalar_sub_inverse(a in scalar_result(), b in scalar_result()) {
            let r = a + (b - b);
            prop_assert!(close(r.value, a.value));
            prop_assert!(close(r.error, a.error));
        }

        #[test]
        fn vector_add_commutative(a in vector_result(), b in vector_result()) {
            prop_assert_eq!(a + b, b + a);
        }

        #[test]
        fn vector_add_associative(a in vector_result(), b in vector_result(), c in vector_result()) {
            prop_assert!(close_vec(&((a + b) + c), &(a + (b + c))));
        }

        #[test]
        fn vector_sub_inverse(a in vector_result(), b in vector_result()) {
            prop_assert!(close_vec(&(a + (b - b)), &a));
        }

        // Partition exactness

        #[test]
        fn interval_bisect_tiles(lo in -1.0e3..1.0e3f64, len in 0.0..1.0e3f64) {
            let iv = Interval::new(lo, lo + len);
            let [left, right] = iv.bisect();
            prop_assert_eq!(left.min, iv.min);
            prop_assert_eq!(left.max, right.min);
            prop_assert_eq!(right.max, iv.max);
            prop_assert!(close(left.length() + right.length(), iv.length()));
        }

        #[test]
        fn box_split_tiles(
            lower in prop::array::uniform3(-1.0e2..1.0e2f64),
            widths in prop::array::uniform3(0.0..1.0e2f64),
        ) {
            let upper = std::array::from_fn(|i| lower[i] + widths[i]);
            let b = Hyperbox::new(lower, upper);
            let children = b.split();
            prop_assert_eq!(children.len(), 8);

            let volume: f64 = children.iter().map(Hyperbox::volume).sum();
            prop_assert!(close(volume, b.volume()));

            let mid = b.center();
            for child in &children {
                for axis in 0..3 {
                    // each child spans exactly one half along every axis
                    let lower_half = child.lower[axis] == b.lower[axis] && child.upper[axis] == mid[axis];
                    let upper_half = child.lower[axis] == mid[axis] && child.upper[axis] == b.upper[axis];
                    prop_assert!(lower_half || upper_half);
                }
            }
        }
    }
}
