//! The power-series recursion at an ordinary (or more generally
//! Fuchsian, negative-valuation) expansion point.
//!
//! With v the valuation of the operator, killing the coefficient of
//! z^(b+v) in L·Σ aₖzᵏ yields
//!
//!   a_b = −(Σ_{b'} f_{(b+v)−b'}(b') · a_{b'}) / f_v(b),
//!
//! the sum running over the b' < b that can reach column b+v of the
//! coefficient table. The first −v coefficients of the series are the
//! initial conditions supplied by the caller.

use holonomic_ball::{BallPoly, ComplexBall};
use holonomic_ode::{render_report, DiffOp, OdeError};

use crate::indicial::indicial_polynomial_evaluate;

/// Fills `series` with the power-series solution coefficients up to
/// index `count` inclusive; the first −valuation coefficients of
/// `series` are taken as initial conditions (missing ones are zero).
///
/// An exactly-zero accumulated contribution yields an exactly-zero
/// coefficient without dividing, so degenerate terminating series stay
/// exact.
///
/// # Errors
///
/// - `OdeError::AmbiguousSingularity` when the valuation is nonnegative
///   (no coefficient is free) or a divisor enclosure contains zero.
/// - `OdeError::NonConvergent` when a coefficient becomes non-finite;
///   the error carries the diagnostic report of the operator and the
///   partial series.
pub fn solve_fuchs(
    series: &mut BallPoly,
    ode: &DiffOp,
    count: usize,
    prec: usize,
) -> Result<(), OdeError> {
    let v = ode.valuation();
    if v >= 0 {
        return Err(OdeError::AmbiguousSingularity);
    }
    series.truncate(count + 1);
    let deg = ode.degree() as isize;
    let start = v.unsigned_abs();
    for b in start..=count {
        let exp = b as isize + v;
        let b_min = (exp - deg).clamp(0, b as isize) as usize;
        let mut num = ComplexBall::zero();
        for bp in b_min..b {
            let f = indicial_polynomial_evaluate(
                ode,
                exp - bp as isize,
                &ComplexBall::from_i64(bp as i64),
                0,
                prec,
            );
            num = num.add(&f.mul(&series.coeff(bp), prec), prec);
        }
        if num.is_zero() {
            series.set_coeff(b, ComplexBall::zero());
            continue;
        }
        let den = indicial_polynomial_evaluate(
            ode,
            v,
            &ComplexBall::from_i64(b as i64),
            0,
            prec,
        );
        if !den.is_finite() || den.contains_zero() {
            return Err(OdeError::AmbiguousSingularity);
        }
        let a_b = num.neg().div(&den, prec);
        if !a_b.is_finite() {
            return Err(OdeError::NonConvergent {
                report: render_report(ode, series, prec),
            });
        }
        series.set_coeff(b, a_b);
    }
    Ok(())
}
