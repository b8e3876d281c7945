//! Property-based containment tests for ball arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::complex::ComplexBall;
    use crate::poly::BallPoly;
    use crate::real::RealBall;

    const P: usize = 64;

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn small_complex() -> impl Strategy<Value = (i64, i64)> {
        (small_int(), small_int())
    }

    fn small_poly() -> impl Strategy<Value = BallPoly> {
        proptest::collection::vec(-50i64..50i64, 1..=5)
            .prop_map(|c| BallPoly::from_i64s(&c))
    }

    proptest! {
        // Containment: ball operations must enclose the exact result.

        #[test]
        fn real_add_contains(a in small_int(), b in small_int()) {
            let x = RealBall::from_i64(a).add(&RealBall::from_i64(b), P);
            prop_assert!(x.contains_i64(a + b));
        }

        #[test]
        fn real_mul_contains(a in small_int(), b in small_int()) {
            let x = RealBall::from_i64(a).mul(&RealBall::from_i64(b), P);
            prop_assert!(x.contains_i64(a * b));
        }

        #[test]
        fn real_div_inverts(a in small_int(), b in small_int()) {
            prop_assume!(b != 0);
            let q = RealBall::from_i64(a).div(&RealBall::from_i64(b), P);
            prop_assert!(q.mul(&RealBall::from_i64(b), P).contains_i64(a));
        }

        #[test]
        fn real_sqrt_squares_back(a in 0i64..10000) {
            let r = RealBall::from_i64(a).sqrt(P);
            prop_assert!(r.mul(&r, P).contains_i64(a));
        }

        #[test]
        fn complex_mul_contains((ar, ai) in small_complex(),
                                (br, bi) in small_complex()) {
            let a = ComplexBall::from_f64s(ar as f64, ai as f64);
            let b = ComplexBall::from_f64s(br as f64, bi as f64);
            let p = a.mul(&b, P);
            prop_assert!(p.re().contains_i64(ar * br - ai * bi));
            prop_assert!(p.im().contains_i64(ar * bi + ai * br));
        }

        #[test]
        fn complex_div_inverts((ar, ai) in small_complex(),
                               (br, bi) in small_complex()) {
            prop_assume!(br != 0 || bi != 0);
            let a = ComplexBall::from_f64s(ar as f64, ai as f64);
            let b = ComplexBall::from_f64s(br as f64, bi as f64);
            let q = a.div(&b, P);
            prop_assert!(q.mul(&b, P).contains_f64s(ar as f64, ai as f64));
        }

        // Polynomial ring properties, up to enclosure overlap.

        #[test]
        fn poly_mul_commutes(a in small_poly(), b in small_poly()) {
            let ab = a.mul(&b, P);
            let ba = b.mul(&a, P);
            prop_assert_eq!(ab.len(), ba.len());
            for i in 0..ab.len() {
                prop_assert!(ab.coeff(i).overlaps(&ba.coeff(i)));
            }
        }

        #[test]
        fn poly_eval_is_ring_hom(a in small_poly(), b in small_poly(),
                                 z in small_int()) {
            let z = ComplexBall::from_i64(z);
            let lhs = a.mul(&b, P).evaluate(&z, P);
            let rhs = a.evaluate(&z, P).mul(&b.evaluate(&z, P), P);
            prop_assert!(lhs.overlaps(&rhs));
        }

        #[test]
        fn poly_shift_roundtrip(a in small_poly(), s in -20i64..20) {
            let mut p = a.clone();
            let sh = ComplexBall::from_i64(s);
            p.taylor_shift(&sh, P);
            p.taylor_shift(&sh.neg(), P);
            for i in 0..a.len() {
                prop_assert!(p.coeff(i).overlaps(&a.coeff(i)));
            }
        }
    }
}
