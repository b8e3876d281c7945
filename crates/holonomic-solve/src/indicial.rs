//! Indicial polynomials of a differential operator.
//!
//! For an operator L = Σ_λ Σ_j A[λ][j]·zʲ·d^λ/dz^λ acting on zᵖ, the
//! coefficient of z^(ρ+ν) in L·zᵖ is
//!
//!   f_ν(ρ) = Σ_λ A[λ][λ+ν] · ρ·(ρ−1)···(ρ−λ+1),
//!
//! the ν-th indicial polynomial. The recursions of both solvers are
//! plain linear combinations of these quantities, so they come in two
//! forms: built as a polynomial in ρ (for the logarithmic Frobenius
//! case, where whole ρ-polynomials are carried), and evaluated directly
//! at a point. ν is signed; out-of-table coefficient lookups are zero,
//! which keeps the two forms equal on reduced operators with negative
//! valuation.

use holonomic_ball::{BallPoly, ComplexBall};
use holonomic_ode::DiffOp;

/// Builds f_ν(ρ + shift) as a polynomial in ρ.
#[must_use]
pub fn indicial_polynomial(
    ode: &DiffOp,
    nu: isize,
    shift: isize,
    prec: usize,
) -> BallPoly {
    if nu > ode.degree() as isize {
        return BallPoly::zero();
    }
    let top = (ode.degree() as isize - nu).clamp(0, ode.order() as isize);
    let mut result = BallPoly::zero();
    for lambda in (0..=top).rev() {
        let factor = BallPoly::from_coeffs(vec![
            ComplexBall::from_i64((shift - lambda) as i64),
            ComplexBall::one(),
        ]);
        result = result.mul(&factor, prec);
        let c0 = result
            .coeff(0)
            .add(&ode.coeff_or_zero(lambda as usize, lambda + nu), prec);
        result.set_coeff(0, c0);
    }
    result
}

/// Evaluates f_ν(ρ + shift) directly at a point.
#[must_use]
pub fn indicial_polynomial_evaluate(
    ode: &DiffOp,
    nu: isize,
    rho: &ComplexBall,
    shift: isize,
    prec: usize,
) -> ComplexBall {
    if nu > ode.degree() as isize {
        return ComplexBall::zero();
    }
    let top = (ode.degree() as isize - nu).clamp(0, ode.order() as isize);
    let mut out = ComplexBall::zero();
    for lambda in (0..=top).rev() {
        let t = rho.add(&ComplexBall::from_i64((shift - lambda) as i64), prec);
        out = out
            .mul(&t, prec)
            .add(&ode.coeff_or_zero(lambda as usize, lambda + nu), prec);
    }
    out
}
