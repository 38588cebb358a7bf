//! Property-based tests for rational arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::rationals::Q;
    use crate::traits::{Field, Ring};

    // Strategy for generating small rationals
    fn small_q() -> impl Strategy<Value = Q> {
        (-100i64..100i64, 1i64..100i64).prop_map(|(n, d)| Q::new(n, d))
    }

    // Strategy for generating non-zero rationals
    fn nonzero_q() -> impl Strategy<Value = Q> {
        small_q().prop_filter("rational must be non-zero", |q| !Ring::is_zero(q))
    }

    proptest! {
        // Field axioms

        #[test]
        fn q_add_commutative(a in small_q(), b in small_q()) {
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn q_add_associative(a in small_q(), b in small_q(), c in small_q()) {
            prop_assert_eq!((a.clone() + b.clone()) + c.clone(), a + (b + c));
        }

        #[test]
        fn q_mul_commutative(a in small_q(), b in small_q()) {
            prop_assert_eq!(a.clone() * b.clone(), b * a);
        }

        #[test]
        fn q_distributive(a in small_q(), b in small_q(), c in small_q()) {
            let left = a.clone() * (b.clone() + c.clone());
            let right = a.clone() * b + a * c;
            prop_assert_eq!(left, right);
        }

        #[test]
        fn q_additive_inverse(a in small_q()) {
            prop_assert!(Ring::is_zero(&(a.clone() + (-a))));
        }

        #[test]
        fn q_multiplicative_inverse(a in nonzero_q()) {
            let inv = Field::inv(&a).unwrap();
            prop_assert!(Ring::is_one(&(a * inv)));
        }

        #[test]
        fn q_recip_involution(a in nonzero_q()) {
            prop_assert_eq!(a.recip().recip(), a);
        }

        // Lowest-terms invariant: denominator is positive and the value
        // round-trips through its numerator/denominator pair
        #[test]
        fn q_lowest_terms(n in -100i64..100i64, d in 1i64..100i64, k in 1i64..10i64) {
            prop_assert_eq!(Q::new(n * k, d * k), Q::new(n, d));
        }
    }
}
