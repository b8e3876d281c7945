//! Analytic continuation along piecewise-linear paths.
//!
//! Each segment recenters a private copy of the operator at the segment
//! start, resolves the power series there, and Taylor-shifts it by the
//! segment displacement; after the last segment the series is centered
//! at the final path point. The number of carried coefficients comes
//! from [`truncation_order`].

use holonomic_ball::{BallPoly, ComplexBall, RealBall};
use holonomic_ode::{DiffOp, OdeError};
use holonomic_solve::{solve_fuchs, SolveConfig};

/// The number of series terms needed for a truncation error around
/// 2^-bits when stepping a distance `eta` inside a disc of convergence
/// radius `alpha`. Falls back to `guard·bits` when either enclosure is
/// indeterminate; returns 0 when `eta < alpha` cannot be certified (the
/// caller treats 0 as failure).
#[must_use]
pub fn truncation_order(
    eta: &RealBall,
    alpha: &RealBall,
    bits: usize,
    guard: usize,
) -> usize {
    if !eta.is_finite() || !alpha.is_finite() {
        return guard * bits;
    }
    if !eta.lt(alpha) {
        return 0;
    }
    // The geometric tail ratio eta/r for r halfway between eta and
    // alpha; only the quotient matters, not r itself.
    let e = eta.to_f64();
    let a = alpha.to_f64();
    let r = e / ((e + a) / 2.0);
    if !(r > 0.0 && r < 1.0) {
        return guard * bits;
    }
    let n = ((1.0 - r).ln() - bits as f64 * std::f64::consts::LN_2) / r.ln();
    if !n.is_finite() || n <= 0.0 {
        return guard * bits;
    }
    n.ceil() as usize
}

/// Continues `series` along `path`, carrying `count + 1` coefficients.
/// The caller's operator is never mutated; each segment works on a
/// shifted private copy.
///
/// # Errors
///
/// `OdeError::AmbiguousSingularity` when some path point cannot be
/// certified ordinary (the leading coefficient's value there has an
/// enclosure containing zero), plus everything [`solve_fuchs`] raises.
pub fn analytic_continuation(
    series: &mut BallPoly,
    ode: &DiffOp,
    path: &[ComplexBall],
    count: usize,
    prec: usize,
) -> Result<(), OdeError> {
    for w in path.windows(2) {
        let mut local = ode.clone();
        local.shift(&w[0], prec);
        if local.poly(local.order()).coeff(0).contains_zero() {
            return Err(OdeError::AmbiguousSingularity);
        }
        solve_fuchs(series, &local, count, prec)?;
        let a = w[1].sub(&w[0], prec);
        series.taylor_shift(&a, prec);
    }
    Ok(())
}

/// Re-runs [`analytic_continuation`] with doubled working precision
/// until the coefficients read off at the endpoint (the first `order`
/// of them) certify `target_bits` bits of relative accuracy.
///
/// # Errors
///
/// `OdeError::PrecisionExhausted` when `cfg.max_bits` is reached before
/// the target accuracy, plus everything the continuation itself raises
/// at the final precision.
pub fn analytic_continuation_adaptive(
    init: &BallPoly,
    ode: &DiffOp,
    path: &[ComplexBall],
    count: usize,
    target_bits: usize,
    cfg: &SolveConfig,
) -> Result<BallPoly, OdeError> {
    let order = ode.order();
    let mut prec = (cfg.guard_factor * target_bits).min(cfg.max_bits);
    loop {
        let mut series = init.clone();
        match analytic_continuation(&mut series, ode, path, count, prec) {
            Ok(()) => {
                let acc = (0..order)
                    .map(|j| series.coeff(j).accuracy_bits())
                    .fold(f64::INFINITY, f64::min);
                if acc >= target_bits as f64 {
                    return Ok(series);
                }
            }
            // Wider enclosures can fail containment checks that a
            // higher precision resolves; retry those too.
            Err(
                OdeError::AmbiguousSingularity
                | OdeError::NonConvergent { .. },
            ) => {}
            Err(e) => return Err(e),
        }
        if prec >= cfg.max_bits {
            return Err(OdeError::PrecisionExhausted {
                max_bits: cfg.max_bits,
            });
        }
        prec = (prec * 2).min(cfg.max_bits);
    }
}
