//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::polynomial::Polynomial;

    // Strategy for generating small integer coefficients
    fn small_coeff() -> impl Strategy<Value = i64> {
        -100i64..100i64
    }

    // Strategy for generating small polynomials (length 1-6)
    fn small_poly() -> impl Strategy<Value = Polynomial<i64>> {
        proptest::collection::vec(small_coeff(), 1..=6)
            .prop_map(|coeffs| Polynomial::new(coeffs).unwrap())
    }

    proptest! {
        // Length and degree laws

        #[test]
        fn add_degree_is_max_of_operand_degrees(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b).degree(), a.degree().max(b.degree()));
            prop_assert_eq!(a.sub(&b).degree(), a.degree().max(b.degree()));
        }

        #[test]
        fn mul_degree_is_sum_of_operand_degrees(a in small_poly(), b in small_poly()) {
            // No normalization: holds even when a or b is all-zero
            prop_assert_eq!(a.mul(&b).degree(), a.degree() + b.degree());
        }

        #[test]
        fn scalar_paths_preserve_degree(a in small_poly(), s in small_coeff()) {
            prop_assert_eq!(a.add_scalar(&s).degree(), a.degree());
            prop_assert_eq!(a.sub_scalar(&s).degree(), a.degree());
            prop_assert_eq!(a.sub_from_scalar(&s).degree(), a.degree());
            prop_assert_eq!(a.scale(&s).degree(), a.degree());
        }

        // Ring-like axioms (structural equality throughout)

        #[test]
        fn add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
        }

        #[test]
        fn mul_distributes_over_add(a in small_poly(), b in small_poly(), c in small_poly()) {
            // Holds structurally: both sides have length
            // len(a) + max(len(b), len(c)) - 1
            prop_assert_eq!(a.mul(&b.add(&c)), a.mul(&b).add(&a.mul(&c)));
        }

        // Subtraction asymmetry

        #[test]
        fn sub_reverse_is_negation(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(b.sub(&a), a.sub(&b).neg());
        }

        #[test]
        fn sub_self_is_all_zero_with_same_length(a in small_poly()) {
            let diff = a.sub(&a);
            prop_assert!(diff.is_zero());
            prop_assert_eq!(diff.degree(), a.degree());
        }

        #[test]
        fn reflected_scalar_sub_is_negated_scalar_sub(a in small_poly(), s in small_coeff()) {
            prop_assert_eq!(a.sub_from_scalar(&s), a.sub_scalar(&s).neg());
        }

        // Evaluation homomorphisms

        #[test]
        fn eval_respects_add(a in small_poly(), b in small_poly(), x in -10i64..10) {
            prop_assert_eq!(a.add(&b).eval(&x), a.eval(&x) + b.eval(&x));
        }

        #[test]
        fn eval_respects_mul(a in small_poly(), b in small_poly(), x in -10i64..10) {
            prop_assert_eq!(a.mul(&b).eval(&x), a.eval(&x) * b.eval(&x));
        }

        #[test]
        fn eval_respects_scalar_ops(a in small_poly(), s in small_coeff(), x in -10i64..10) {
            prop_assert_eq!(a.add_scalar(&s).eval(&x), a.eval(&x) + s);
            prop_assert_eq!(a.sub_scalar(&s).eval(&x), a.eval(&x) - s);
            prop_assert_eq!(a.sub_from_scalar(&s).eval(&x), s - a.eval(&x));
            prop_assert_eq!(a.scale(&s).eval(&x), a.eval(&x) * s);
        }

        // Construction and rendering

        #[test]
        fn construction_round_trip(a in small_poly()) {
            prop_assert_eq!(Polynomial::new(a.coeffs().to_vec()).unwrap(), a);
        }

        #[test]
        fn display_is_never_empty(a in small_poly()) {
            prop_assert!(!a.to_string().is_empty());
        }

        #[test]
        fn checked_bridge_agrees_with_typed_scalar_ops(a in small_poly(), s in -100i32..100) {
            let typed = i64::from(s);
            prop_assert_eq!(a.checked_add_scalar(s).unwrap(), a.add_scalar(&typed));
            prop_assert_eq!(a.checked_sub_scalar(s).unwrap(), a.sub_scalar(&typed));
            prop_assert_eq!(a.checked_mul_scalar(s).unwrap(), a.scale(&typed));
        }
    }
}
