//! Monodromy matrices around the origin.

use holonomic_ball::{BallPoly, RealBall};
use holonomic_ode::{DiffOp, OdeError};
use holonomic_solve::{radius_of_convergence, SolveConfig};

use crate::continuation::{analytic_continuation, truncation_order};
use crate::matrix::BallMatrix;
use crate::path::circle_path;

/// Continues the monomial basis z^0..z^(order−1) once counterclockwise
/// around the origin and collects the low-order endpoint coefficients
/// into the monodromy matrix.
///
/// The loop radius is the convergence-radius estimate divided by the
/// guard factor (1 when no finite singularity bounds it), collapsed to
/// its midpoint; only the continuation itself needs to be rigorous, not
/// the choice of loop.
///
/// # Errors
///
/// `OdeError::AmbiguousSingularity` when the radius estimate's enclosure
/// contains zero or the loop is too coarse for a certified truncation
/// order, `OdeError::NonConvergent` when the certified truncation order
/// exceeds the configured term cap, plus everything
/// [`analytic_continuation`] raises.
pub fn find_monodromy_matrix(
    ode: &DiffOp,
    prec: usize,
    cfg: &SolveConfig,
) -> Result<BallMatrix, OdeError> {
    let mut rad = radius_of_convergence(ode, cfg.graeffe_iters, prec);
    if !rad.is_finite() {
        rad = RealBall::one();
    } else {
        if rad.contains_zero() {
            return Err(OdeError::AmbiguousSingularity);
        }
        rad = rad.div_i64(cfg.guard_factor as i64, prec);
    }
    let rad = rad.mid_ball();

    let path = circle_path(&rad, cfg.path_steps, prec);
    let eta = path[0].sub(&path[1], prec).abs(prec);
    let count = truncation_order(&eta, &rad, prec, cfg.guard_factor);
    if count == 0 {
        return Err(OdeError::AmbiguousSingularity);
    }
    if count > cfg.max_terms {
        return Err(OdeError::NonConvergent {
            report: format!(
                "certified truncation order {count} exceeds the term cap {}",
                cfg.max_terms
            ),
        });
    }

    let order = ode.order();
    let mut mat = BallMatrix::zeros(order);
    for i in 0..order {
        let mut series = BallPoly::monomial(i);
        analytic_continuation(&mut series, ode, &path, count, prec)?;
        for j in 0..order {
            mat.set(i, j, series.coeff(j));
        }
    }
    Ok(mat.transpose())
}

#[cfg(test)]
mod tests {
    use super::*;
    use holonomic_ball::{pow2, ComplexBall, RealBall};

    const P: usize = 128;

    fn near(n: i64) -> ComplexBall {
        let mut r = RealBall::from_i64(n);
        r.add_error(&pow2(-16));
        ComplexBall::from_real(r)
    }

    #[test]
    fn test_square_root_monodromy_is_minus_one() {
        // 2z·y' − y annihilates √z; one loop flips its sign.
        let op = DiffOp::new(vec![
            BallPoly::from_i64s(&[-1]),
            BallPoly::from_i64s(&[0, 2]),
        ])
        .unwrap();
        let mono = find_monodromy_matrix(&op, P, &SolveConfig::default()).unwrap();
        assert_eq!(mono.dim(), 1);
        assert!(mono.is_finite());
        assert!(mono.get(0, 0).overlaps(&near(-1)));
    }

    #[test]
    fn test_single_valued_solution_monodromy_is_one() {
        // z·y' − y annihilates z itself: trivial monodromy.
        let op = DiffOp::new(vec![
            BallPoly::from_i64s(&[-1]),
            BallPoly::monomial(1),
        ])
        .unwrap();
        let mono = find_monodromy_matrix(&op, P, &SolveConfig::default()).unwrap();
        assert_eq!(mono.dim(), 1);
        assert!(mono.get(0, 0).overlaps(&near(1)));
    }

    #[test]
    fn test_term_cap_overflow_is_an_error() {
        // y'' + y needs dozens of terms per segment at 128 bits; a tiny
        // cap must surface as a failure, never a shortened series.
        let op = DiffOp::new(vec![
            BallPoly::one(),
            BallPoly::zero(),
            BallPoly::one(),
        ])
        .unwrap();
        let cfg = SolveConfig {
            max_terms: 4,
            ..SolveConfig::default()
        };
        assert!(matches!(
            find_monodromy_matrix(&op, P, &cfg),
            Err(OdeError::NonConvergent { .. })
        ));
    }

    #[test]
    fn test_ordinary_operator_monodromy_is_identity() {
        // y'' + y is entire; continuation around any loop is trivial.
        let op = DiffOp::new(vec![
            BallPoly::one(),
            BallPoly::zero(),
            BallPoly::one(),
        ])
        .unwrap();
        let mono = find_monodromy_matrix(&op, P, &SolveConfig::default()).unwrap();
        assert_eq!(mono.dim(), 2);
        assert!(mono.get(0, 0).overlaps(&near(1)));
        assert!(mono.get(1, 1).overlaps(&near(1)));
        assert!(mono.get(0, 1).overlaps(&near(0)));
        assert!(mono.get(1, 0).overlaps(&near(0)));
    }
}
