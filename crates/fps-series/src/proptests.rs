//! Property-based tests for series arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::dense::DenseSeries;
    use fps_rings::rationals::Q;
    use fps_rings::traits::Ring;

    // Strategy for generating small rational coefficients; drawing real
    // fractions keeps GCD reduction in play during convolution
    fn small_coeff() -> impl Strategy<Value = Q> {
        (-10i64..10i64, 1i64..10i64).prop_map(|(n, d)| Q::new(n, d))
    }

    // Strategy for generating small series (precision 0-8)
    fn small_series() -> impl Strategy<Value = DenseSeries<Q>> {
        proptest::collection::vec(small_coeff(), 0..=8).prop_map(DenseSeries::new)
    }

    // Strategy for generating series with a non-zero constant term
    fn invertible_series() -> impl Strategy<Value = DenseSeries<Q>> {
        (1i64..10i64, proptest::collection::vec(small_coeff(), 0..=7)).prop_map(
            |(c0, rest)| {
                let mut coeffs = vec![Q::from_integer(c0)];
                coeffs.extend(rest);
                DenseSeries::new(coeffs)
            },
        )
    }

    // Reference convolution, written directly from the definition
    fn naive_mul(a: &DenseSeries<Q>, b: &DenseSeries<Q>) -> DenseSeries<Q> {
        let cn = a.precision().min(b.precision());
        let coeffs = (0..cn)
            .map(|n| {
                (0..=n).fold(<Q as Ring>::zero(), |s, j| s + a.coeff(j) * b.coeff(n - j))
            })
            .collect();
        DenseSeries::new(coeffs)
    }

    proptest! {
        // Truncation law: results carry the shorter operand's precision

        #[test]
        fn truncation_law(a in small_series(), b in small_series()) {
            let cn = a.precision().min(b.precision());
            prop_assert_eq!(a.add(&b).precision(), cn);
            prop_assert_eq!(a.mul(&b).precision(), cn);
        }

        // Ring laws up to truncation

        #[test]
        fn add_commutative(a in small_series(), b in small_series()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn mul_commutative(a in small_series(), b in small_series()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn mul_matches_definition(a in small_series(), b in small_series()) {
            prop_assert_eq!(a.mul(&b), naive_mul(&a, &b));
        }

        #[test]
        fn distributive_at_equal_precision(
            coeffs in proptest::collection::vec((small_coeff(), small_coeff(), small_coeff()), 1..=6)
        ) {
            // Generated at one shared precision so truncation cannot skew
            // the comparison
            let mut ac = Vec::new();
            let mut bc = Vec::new();
            let mut cc = Vec::new();
            for (x, y, z) in coeffs {
                ac.push(x);
                bc.push(y);
                cc.push(z);
            }
            let a = DenseSeries::new(ac);
            let b = DenseSeries::new(bc);
            let c = DenseSeries::new(cc);

            prop_assert_eq!(a.mul(&b.add(&c)), a.mul(&b).add(&a.mul(&c)));
        }

        #[test]
        fn pow_matches_repeated_mul(a in small_series(), n in 0u32..5) {
            let mut expected = DenseSeries::constant(<Q as Ring>::one(), a.precision());
            for _ in 0..n {
                expected = expected.mul(&a);
            }
            prop_assert_eq!(a.pow(n), expected);
        }

        // Inverse law: a * (1/a) = 1 + O(X^n)

        #[test]
        fn inverse_law(a in invertible_series()) {
            let prod = a.mul(&a.inverse().unwrap());
            for k in 0..prod.precision() {
                let expected = if k == 0 { <Q as Ring>::one() } else { <Q as Ring>::zero() };
                prop_assert_eq!(prod.coeff(k), expected);
            }
        }

        #[test]
        fn division_identity(a in small_series(), b in invertible_series()) {
            prop_assert_eq!(a.div(&b).unwrap(), a.mul(&b.inverse().unwrap()));
        }

        #[test]
        fn zero_constant_term_not_invertible(
            rest in proptest::collection::vec(small_coeff(), 0..=6)
        ) {
            let mut coeffs = vec![<Q as Ring>::zero()];
            coeffs.extend(rest);
            prop_assert!(DenseSeries::new(coeffs).inverse().is_err());
        }

        // Sparse/dense equivalence under an explicit cutoff

        #[test]
        fn sparse_dense_equivalence(
            a in small_series(),
            b in small_series(),
            cutoff in 0usize..8
        ) {
            let prec = cutoff.min(a.precision()).min(b.precision());
            let dense = a.mul(&b).truncate(prec);
            let sparse = a.to_sparse().mul_truncated(&b.to_sparse(), prec);

            for e in 0..prec {
                prop_assert_eq!(sparse.coeff(e), dense.coeff(e));
            }
            prop_assert_eq!(sparse.to_dense(prec), dense);
        }

        #[test]
        fn strip_zero_invariant(a in small_series(), b in small_series()) {
            let p = a.to_sparse().mul_truncated(&b.to_sparse(), 8);
            prop_assert!(p.terms().iter().all(|(_, c)| !Ring::is_zero(c)));
        }

        #[test]
        fn sparse_never_stores_zero(a in small_series()) {
            prop_assert!(a.to_sparse().terms().iter().all(|(_, c)| !Ring::is_zero(c)));
        }
    }
}
