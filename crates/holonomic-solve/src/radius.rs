//! Radius of convergence of power-series solutions.
//!
//! Solutions at an ordinary point converge up to the nearest root of
//! the leading coefficient polynomial. That root's distance is bounded
//! by reversing the leading row (dropping roots at the origin, which do
//! not bound convergence from a shifted center), sharpening with Graeffe
//! root squaring, and applying Fujiwara's root bound.

use holonomic_ball::{mag_root_up, ComplexBall, Mag, RealBall};
use holonomic_ode::DiffOp;

/// One Graeffe step in place: the output polynomial (same length) has
/// the squares of the input roots. Exact on exact input.
pub fn graeffe_transform_inplace(c: &mut [ComplexBall], prec: usize) {
    let n = c.len();
    if n <= 1 {
        return;
    }
    let pe: Vec<ComplexBall> = c.iter().step_by(2).cloned().collect();
    let po: Vec<ComplexBall> = c.iter().skip(1).step_by(2).cloned().collect();
    let pe2 = square(&pe, prec);
    let po2 = square(&po, prec);
    let negate = (n - 1) % 2 == 1;
    for (j, out) in c.iter_mut().enumerate() {
        let mut v = pe2.get(j).cloned().unwrap_or_else(ComplexBall::zero);
        if j >= 1 {
            if let Some(o) = po2.get(j - 1) {
                v = v.sub(o, prec);
            }
        }
        *out = if negate { v.neg() } else { v };
    }
}

/// Allocating variant of [`graeffe_transform_inplace`].
#[must_use]
pub fn graeffe_transform(c: &[ComplexBall], prec: usize) -> Vec<ComplexBall> {
    let mut out = c.to_vec();
    graeffe_transform_inplace(&mut out, prec);
    out
}

fn square(c: &[ComplexBall], prec: usize) -> Vec<ComplexBall> {
    if c.is_empty() {
        return Vec::new();
    }
    let mut out = vec![ComplexBall::zero(); 2 * c.len() - 1];
    for (i, a) in c.iter().enumerate() {
        for (j, b) in c.iter().enumerate() {
            out[i + j] = out[i + j].add(&a.mul(b, prec), prec);
        }
    }
    out
}

/// Fujiwara's bound: an upper bound for the modulus of every root of
/// the polynomial with coefficients `c` (low order first). `None` when
/// the leading coefficient cannot be certified nonzero.
#[must_use]
pub fn fujiwara_root_bound(c: &[ComplexBall], prec: usize) -> Option<Mag> {
    let n = c.len().checked_sub(1)?;
    if n == 0 {
        return Some(Mag::ZERO);
    }
    let lead_lo = c[n].abs(prec).lower_mag();
    if lead_lo == Mag::ZERO {
        return None;
    }
    let mut best = Mag::ZERO;
    for i in 1..=n {
        let mut num = c[n - i].abs(prec).upper_mag();
        let mut den = lead_lo.clone();
        if i == n {
            // Doubling only bumps the exponent, so this stays exact.
            den = (den * Mag::from(2)).with_precision(32).value();
        }
        num = num / den;
        let q = mag_root_up(&num, i, prec);
        if q > best {
            best = q;
        }
    }
    Some(best * Mag::from(2))
}

/// A rigorous enclosure of the distance from the origin to the nearest
/// nonzero root of the leading coefficient polynomial of `ode`, using
/// `n` Graeffe iterations. Indeterminate when the leading row has fewer
/// than two possibly-nonzero coefficients (no finite singularity).
#[must_use]
pub fn radius_of_convergence(ode: &DiffOp, n: usize, prec: usize) -> RealBall {
    let m = ode.order();
    let d = ode.degree();
    let mut length = 0;
    for i in (0..=d).rev() {
        if !ode.coeff(m, i).is_zero() {
            length = d + 1 - i;
        }
    }
    if length <= 1 {
        return RealBall::indeterminate();
    }

    let mut p: Vec<ComplexBall> =
        (0..length).map(|i| ode.coeff(m, d - i)).collect();
    for _ in 0..n {
        graeffe_transform_inplace(&mut p, prec);
    }

    let Some(bound) = fujiwara_root_bound(&p, prec) else {
        return RealBall::indeterminate();
    };
    let root = RealBall::from_mag(&bound).root_2exp(n, prec);
    let mut rad = RealBall::one().div(&root, prec);
    if !rad.is_finite() {
        return RealBall::indeterminate();
    }

    // Undoing the root squaring keeps only a convergence-rate bound of
    // the true minimum; widen by (2(len−1))^(2^-n) − 1 to cover it.
    let conv = RealBall::from_i64(2 * (length as i64 - 1))
        .root_2exp(n, prec)
        .sub(&RealBall::one(), prec);
    let err = rad.mul(&conv, prec).upper_mag();
    rad.add_error(&err);
    rad
}

#[cfg(test)]
mod tests {
    use super::*;
    use holonomic_ball::BallPoly;

    const P: usize = 64;

    fn ints(v: &[i64]) -> Vec<ComplexBall> {
        v.iter().map(|&c| ComplexBall::from_i64(c)).collect()
    }

    #[test]
    fn test_graeffe_known_vector() {
        let mut c = ints(&[1, 2, 3, 4, 5]);
        graeffe_transform_inplace(&mut c, P);
        for (got, want) in c.iter().zip([1, 2, 3, 14, 25]) {
            assert!(got.contains_i64(want));
            // Integer input stays exact.
            assert!(got.re().rad_f64() == 0.0);
        }
    }

    #[test]
    fn test_graeffe_variants_agree() {
        let c = ints(&[3, -1, 4, 1, -5, 9]);
        let out = graeffe_transform(&c, P);
        let mut inplace = c;
        graeffe_transform_inplace(&mut inplace, P);
        assert_eq!(out.len(), inplace.len());
        for (a, b) in out.iter().zip(&inplace) {
            assert!(a.overlaps(b));
        }
    }

    #[test]
    fn test_graeffe_squares_roots() {
        // z² − 3z + 2 has roots 1, 2; one step gives roots 1, 4:
        // z² − 5z + 4.
        let mut c = ints(&[2, -3, 1]);
        graeffe_transform_inplace(&mut c, P);
        assert!(c[0].contains_i64(4));
        assert!(c[1].contains_i64(-5));
        assert!(c[2].contains_i64(1));
    }

    #[test]
    fn test_fujiwara_bounds_roots() {
        // Roots 1 and 2: any valid bound is >= 2.
        let b = fujiwara_root_bound(&ints(&[2, -3, 1]), P).unwrap();
        assert!(b >= Mag::from(2));
        assert!(b <= Mag::from(16));
    }

    #[test]
    fn test_fujiwara_rejects_uncertain_leading() {
        let mut c = ints(&[1, 1]);
        c[1] = ComplexBall::zero();
        assert!(fujiwara_root_bound(&c, P).is_none());
    }

    #[test]
    fn test_legendre_radius_encloses_one() {
        // Leading coefficient 1 − z²: singularities at ±1.
        let op = DiffOp::new(vec![
            BallPoly::from_i64s(&[30]),
            BallPoly::from_i64s(&[0, -2]),
            BallPoly::from_i64s(&[1, 0, -1]),
        ])
        .unwrap();
        let rad = radius_of_convergence(&op, 40, P);
        assert!(rad.is_finite());
        assert!(rad.contains_i64(1));
    }

    #[test]
    fn test_polynomial_leading_row_has_no_singularity() {
        // Reduced Bessel: leading row is z alone, only a root at the
        // origin survives reversal.
        let z = BallPoly::monomial(1);
        let op = DiffOp::new(vec![z.clone(), BallPoly::one(), z]).unwrap();
        assert!(!radius_of_convergence(&op, 40, P).is_finite());
    }
}
