//! Linear differential operators with polynomial coefficients.
//!
//! An operator L = Σᵢ pᵢ(z)·dⁱ/dzⁱ is stored as one [`BallPoly`] per
//! derivative order. All structural queries are phrased over the
//! "possibly nonzero" span of each row: a coefficient counts as zero only
//! when its enclosure is exactly the point zero, since anything wider
//! cannot be discarded rigorously.

use holonomic_ball::{BallPoly, ComplexBall};

use crate::error::OdeError;

/// A linear differential operator Σᵢ pᵢ(z)·dⁱ/dzⁱ of order ≥ 1.
#[derive(Clone, Debug, PartialEq)]
pub struct DiffOp {
    /// Row i holds pᵢ; the last row is possibly nonzero for operators
    /// built through [`DiffOp::new`].
    polys: Vec<BallPoly>,
}

impl DiffOp {
    /// Builds an operator from coefficient polynomials, low derivative
    /// order first. Trailing identically-zero polynomials are dropped;
    /// the inferred order must be at least 1.
    ///
    /// # Errors
    ///
    /// `OdeError::InvalidOperator` when no polynomial of derivative order
    /// ≥ 1 is possibly nonzero.
    pub fn new(mut polys: Vec<BallPoly>) -> Result<Self, OdeError> {
        while polys.last().is_some_and(BallPoly::is_zero) {
            polys.pop();
        }
        if polys.len() < 2 {
            return Err(OdeError::InvalidOperator);
        }
        Ok(Self { polys })
    }

    /// A zero coefficient table of the given shape, to be filled in with
    /// [`DiffOp::set_coeff`].
    #[must_use]
    pub fn blank(order: usize) -> Self {
        assert!(order >= 1, "operator order must be positive");
        Self {
            polys: vec![BallPoly::zero(); order + 1],
        }
    }

    /// The order of the operator (highest stored derivative).
    #[must_use]
    pub fn order(&self) -> usize {
        self.polys.len() - 1
    }

    /// The degree of the operator: the largest possibly-nonzero power of
    /// z across all coefficient polynomials.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.polys.iter().map(BallPoly::degree).max().unwrap_or(0)
    }

    /// The coefficient polynomial of dⁱ/dzⁱ.
    #[must_use]
    pub fn poly(&self, i: usize) -> &BallPoly {
        &self.polys[i]
    }

    /// The coefficient of zʲ·dⁱ/dzⁱ; zero beyond the stored span.
    #[must_use]
    pub fn coeff(&self, i: usize, j: usize) -> ComplexBall {
        self.polys.get(i).map_or_else(ComplexBall::zero, |p| p.coeff(j))
    }

    /// The coefficient of zʲ·dⁱ/dzⁱ with a signed power; zero anywhere
    /// outside the table.
    #[must_use]
    pub fn coeff_or_zero(&self, i: usize, j: isize) -> ComplexBall {
        if j < 0 {
            return ComplexBall::zero();
        }
        self.coeff(i, j as usize)
    }

    /// Overwrites the coefficient of zʲ·dⁱ/dzⁱ.
    ///
    /// # Panics
    ///
    /// Panics when `i` exceeds the order of the operator.
    pub fn set_coeff(&mut self, i: usize, j: usize, c: ComplexBall) {
        assert!(i < self.polys.len(), "derivative order out of range");
        self.polys[i].set_coeff(j, c);
    }

    /// Taylor-shifts every coefficient polynomial in place, recentering
    /// the operator at `a`: pᵢ(z) becomes pᵢ(z + a).
    pub fn shift(&mut self, a: &ComplexBall, prec: usize) {
        if a.is_zero() {
            return;
        }
        for p in &mut self.polys {
            p.taylor_shift(a, prec);
        }
    }

    /// Divides every coefficient polynomial by the largest common power
    /// of z (interval-exact zero tests only) and returns that power.
    pub fn reduce(&mut self) -> usize {
        let mut k = usize::MAX;
        for p in &self.polys {
            if p.is_zero() {
                continue;
            }
            let lead = (0..p.len()).take_while(|&j| p.coeff(j).is_zero()).count();
            k = k.min(lead);
        }
        if k == usize::MAX || k == 0 {
            return 0;
        }
        for p in &mut self.polys {
            p.shift_right(k);
        }
        k
    }

    /// The valuation of the operator: minᵢ (first possibly-nonzero column
    /// of row i) − i, skipping identically-zero rows.
    ///
    /// An ordinary expansion point is characterized by valuation −order.
    #[must_use]
    pub fn valuation(&self) -> isize {
        let mut v = isize::MAX;
        for (i, p) in self.polys.iter().enumerate() {
            if p.is_zero() {
                continue;
            }
            let col = (0..p.len())
                .find(|&j| !p.coeff(j).is_zero())
                .unwrap_or(p.len());
            v = v.min(col as isize - i as isize);
        }
        if v == isize::MAX {
            0
        } else {
            v
        }
    }

    /// Applies the operator to a truncated power series: Σᵢ pᵢ·s⁽ⁱ⁾.
    #[must_use]
    pub fn apply(&self, series: &BallPoly, prec: usize) -> BallPoly {
        let mut acc = self.polys[0].mul(series, prec);
        let mut der = series.clone();
        for p in self.polys.iter().skip(1) {
            der = der.derivative(prec);
            acc = acc.add(&p.mul(&der, prec), prec);
        }
        acc
    }

    /// True when applying the operator to `series` yields finite
    /// enclosures of zero in every coefficient below `deg`.
    #[must_use]
    pub fn solves(&self, series: &BallPoly, deg: usize, prec: usize) -> bool {
        let r = self.apply(series, prec);
        (0..deg).all(|j| {
            let c = r.coeff(j);
            c.is_finite() && c.contains_zero()
        })
    }
}
