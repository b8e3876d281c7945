//! Diagnostic report rendering.
//!
//! Failures of the series solvers carry a human-readable dump of the
//! operator and of whatever part of the series had been computed when the
//! failure occurred. The renderer is pure; nothing is written anywhere.

use std::fmt::Write;

use holonomic_ball::BallPoly;

use crate::operator::DiffOp;

/// How many trailing series coefficients the report shows.
const TAIL: usize = 5;

/// Renders the operator table and the tail of a partial series into a
/// diagnostic string.
#[must_use]
pub fn render_report(ode: &DiffOp, series: &BallPoly, prec: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "operator: order {}, degree {}, valuation {}, {} bits",
        ode.order(),
        ode.degree(),
        ode.valuation(),
        prec
    );
    for i in 0..=ode.order() {
        let p = ode.poly(i);
        let _ = write!(out, "  p_{i}(z) =");
        if p.is_zero() {
            let _ = writeln!(out, " 0");
            continue;
        }
        for j in 0..p.len() {
            let c = p.coeff(j);
            if !c.is_zero() {
                let _ = write!(out, " [{c}]*z^{j}");
            }
        }
        let _ = writeln!(out);
    }
    if series.is_zero() {
        let _ = writeln!(out, "series: empty");
        return out;
    }
    let n = series.len();
    let _ = writeln!(out, "series: {n} coefficients, tail:");
    for j in n.saturating_sub(TAIL)..n {
        let c = series.coeff(j);
        let _ = writeln!(
            out,
            "  a_{j} = {c} ({:.1} accurate bits)",
            c.accuracy_bits()
        );
    }
    out
}
