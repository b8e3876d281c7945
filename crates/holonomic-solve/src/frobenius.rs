//! The Frobenius method at a regular singular point.
//!
//! The operator is expected in valuation-0 form (as left by multiplying
//! through by a power of z), so f_0 is the indicial polynomial proper.
//! When the indicial root is simple and unoffset the recursion runs
//! directly on values; otherwise whole polynomials in ρ are carried with
//! the division deferred, rescaling by f_0(ρ+ν) whenever that value is
//! certifiably nonzero, and the generator family is re-weighted at every
//! step.

use holonomic_ball::{BallPoly, ComplexBall};
use holonomic_ode::{render_report, DiffOp, OdeError};

use crate::indicial::{indicial_polynomial, indicial_polynomial_evaluate};
use crate::solution::Solution;

/// Direct-evaluation recursion for a simple, unoffset indicial root.
fn solve_frobenius_simple(
    ode: &DiffOp,
    rho: &ComplexBall,
    sol_degree: usize,
    prec: usize,
) -> Result<BallPoly, OdeError> {
    let deg = ode.degree();
    let mut res = BallPoly::one();
    for nu in 1..=sol_degree {
        let mut num = ComplexBall::zero();
        for i in (1..=nu.min(deg)).rev() {
            let f = indicial_polynomial_evaluate(
                ode,
                i as isize,
                rho,
                (nu - i) as isize,
                prec,
            );
            num = num.add(&f.mul(&res.coeff(nu - i), prec), prec);
        }
        if num.is_zero() {
            continue;
        }
        let den =
            indicial_polynomial_evaluate(ode, 0, rho, nu as isize, prec);
        if !den.is_finite() || den.contains_zero() {
            return Err(OdeError::AmbiguousSingularity);
        }
        let g = num.neg().div(&den, prec);
        if !g.is_finite() {
            return Err(OdeError::NonConvergent {
                report: render_report(ode, &res, prec),
            });
        }
        res.set_coeff(nu, g);
    }
    Ok(res)
}

/// Fills the generator series of `sol` with the Frobenius solution
/// family of `ode` at the root `sol.rho()`, up to degree `sol_degree`.
///
/// The recursion terminates early when the entire remaining contribution
/// is exactly zero (a degenerate terminating series).
///
/// # Errors
///
/// In the simple-root path, the same edge cases as the Fuchs recursion:
/// `OdeError::AmbiguousSingularity` for a divisor enclosure containing
/// zero, `OdeError::NonConvergent` for a non-finite coefficient. The
/// logarithmic path never divides by an uncertified value.
pub fn solve_frobenius(
    sol: &mut Solution,
    ode: &DiffOp,
    sol_degree: usize,
    prec: usize,
) -> Result<(), OdeError> {
    if sol.multiplicity() == 1 && sol.alpha() == 0 {
        let rho = sol.rho().clone();
        sol.gens_mut()[0] = solve_frobenius_simple(ode, &rho, sol_degree, prec)?;
        return Ok(());
    }

    for gen in sol.gens_mut() {
        *gen = BallPoly::zero();
    }
    sol.gens_mut()[0] = BallPoly::one();

    let deg = ode.degree();
    if deg == 0 {
        return Ok(());
    }
    let mut g_rho = vec![BallPoly::zero(); deg];
    g_rho[0] = BallPoly::one();

    for nu in 1..=sol_degree {
        // The new coefficient as a polynomial in rho, division deferred.
        let mut g_new = BallPoly::zero();
        let mut i = nu.min(deg);
        let mut ind =
            indicial_polynomial(ode, i as isize, (nu - i) as isize, prec);
        loop {
            let t = ind.mul(&g_rho[i - 1], prec);
            g_new = g_new.sub(&t, prec);
            i -= 1;
            ind = indicial_polynomial(ode, i as isize, (nu - i) as isize, prec);
            if i == 0 {
                break;
            }
        }

        // Rescale to keep the carried polynomials small.
        let scale =
            indicial_polynomial_evaluate(ode, 0, sol.rho(), nu as isize, prec);
        if scale.is_finite() && !scale.contains_zero() {
            ind = ind.scalar_div(&scale, prec);
            g_new = g_new.scalar_div(&scale, prec);
        }

        let mut all_zero = g_new.is_zero();
        for j in (1..deg).rev() {
            g_rho[j] = g_rho[j - 1].mul(&ind, prec);
            all_zero &= g_rho[j].is_zero();
        }
        g_rho[0] = g_new.clone();

        sol.update(&ind, prec);
        sol.extend(nu, &g_new, prec);

        if all_zero {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashu::integer::IBig;

    const P: usize = 64;

    /// z²·y'' + z·y' + z²·y, the valuation-0 Bessel operator with ν = 0.
    fn bessel() -> DiffOp {
        let z = BallPoly::monomial(1);
        let z2 = BallPoly::monomial(2);
        DiffOp::new(vec![z2.clone(), z, z2]).unwrap()
    }

    #[test]
    fn test_square_root_terminates() {
        // 2z·y' − y with rho = 1/2: the series is exactly 1.
        let op = DiffOp::new(vec![
            BallPoly::from_i64s(&[-1]),
            BallPoly::from_i64s(&[0, 2]),
        ])
        .unwrap();
        let rho = ComplexBall::one().div_i64(2, P);
        let mut sol = Solution::new(rho, 1, 0);
        solve_frobenius(&mut sol, &op, 8, P).unwrap();
        assert!(sol.gen(0).coeff(0).contains_i64(1));
        for k in 1..=8 {
            assert!(sol.gen(0).coeff(k).is_zero());
        }
    }

    #[test]
    fn test_exponential_at_zero_root() {
        // z·y' − z·y in valuation-0 form, rho = 0: plain exp series.
        let z = BallPoly::monomial(1);
        let op = DiffOp::new(vec![z.scale(&ComplexBall::from_i64(-1), P), z])
            .unwrap();
        let mut sol = Solution::new(ComplexBall::zero(), 1, 0);
        solve_frobenius(&mut sol, &op, 10, P).unwrap();
        let mut fac = IBig::ONE;
        for k in 1..=10u32 {
            fac *= IBig::from(k);
            assert!(sol
                .gen(0)
                .coeff(k as usize)
                .mul_ibig(&fac, P)
                .contains_i64(1));
        }
        assert!(op.solves(sol.gen(0), 10, P));
    }

    #[test]
    fn test_bessel_double_root_primary_series() {
        // rho = 0 is a double root of the Bessel indicial polynomial;
        // the first generator is the J₀ series.
        let op = bessel();
        let mut sol = Solution::new(ComplexBall::zero(), 2, 0);
        solve_frobenius(&mut sol, &op, 8, P).unwrap();
        assert!(sol.gen(0).coeff(0).contains_i64(1));
        assert!(sol.gen(0).coeff(2).mul_i64(4, P).contains_i64(-1));
        assert!(sol.gen(0).coeff(4).mul_i64(64, P).contains_i64(1));
        assert!(sol.gen(0).coeff(6).mul_i64(2304, P).contains_i64(-1));
        for k in [1, 3, 5, 7] {
            assert!(sol.gen(0).coeff(k).contains_i64(0));
        }
        // The logarithmic partner carries data beyond a pure rescale of
        // the primary series.
        assert!(!sol.gen(1).is_zero());
    }

    #[test]
    fn test_simple_root_with_integer_gap_is_ambiguous() {
        // z²·y'' − z·y' + z has indicial roots 0 and 2; pushing the
        // recursion from rho = 0 divides by f_0(2) = 0 at nu = 2.
        let op = DiffOp::new(vec![
            BallPoly::monomial(1),
            BallPoly::from_i64s(&[0, -1]),
            BallPoly::from_i64s(&[0, 0, 1]),
        ])
        .unwrap();
        let mut sol = Solution::new(ComplexBall::zero(), 1, 0);
        assert!(matches!(
            solve_frobenius(&mut sol, &op, 6, P),
            Err(OdeError::AmbiguousSingularity)
        ));
    }
}
