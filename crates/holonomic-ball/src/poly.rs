//! Dense polynomials over complex balls.
//!
//! Coefficients are stored low-order first. A coefficient is "possibly
//! nonzero" unless its enclosure is exactly the point zero; length-based
//! queries are phrased in those terms, since a ball that merely contains
//! zero cannot be discarded rigorously.

use crate::complex::ComplexBall;

/// A dense polynomial with [`ComplexBall`] coefficients.
#[derive(Clone, Debug, PartialEq)]
pub struct BallPoly {
    coeffs: Vec<ComplexBall>,
}

impl BallPoly {
    /// The zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// The constant polynomial one.
    #[must_use]
    pub fn one() -> Self {
        Self {
            coeffs: vec![ComplexBall::one()],
        }
    }

    /// The monomial z^k.
    #[must_use]
    pub fn monomial(k: usize) -> Self {
        let mut coeffs = vec![ComplexBall::zero(); k + 1];
        coeffs[k] = ComplexBall::one();
        Self { coeffs }
    }

    /// Builds a polynomial from low-order-first coefficients.
    #[must_use]
    pub fn from_coeffs(coeffs: Vec<ComplexBall>) -> Self {
        let mut p = Self { coeffs };
        p.normalize();
        p
    }

    /// Builds a polynomial from low-order-first integer coefficients.
    #[must_use]
    pub fn from_i64s(coeffs: &[i64]) -> Self {
        Self::from_coeffs(coeffs.iter().map(|&c| ComplexBall::from_i64(c)).collect())
    }

    fn normalize(&mut self) {
        while self.coeffs.last().is_some_and(ComplexBall::is_zero) {
            self.coeffs.pop();
        }
    }

    /// Number of stored coefficients (possibly-nonzero span).
    #[must_use]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// True when no coefficient is possibly nonzero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Degree of the possibly-nonzero span; zero for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// The coefficient of z^i, zero beyond the stored span.
    #[must_use]
    pub fn coeff(&self, i: usize) -> ComplexBall {
        self.coeffs.get(i).cloned().unwrap_or_else(ComplexBall::zero)
    }

    /// Overwrites the coefficient of z^i, growing the span as needed.
    pub fn set_coeff(&mut self, i: usize, c: ComplexBall) {
        if i >= self.coeffs.len() {
            if c.is_zero() {
                return;
            }
            self.coeffs.resize(i + 1, ComplexBall::zero());
        }
        self.coeffs[i] = c;
        self.normalize();
    }

    /// The stored coefficients, low-order first.
    #[must_use]
    pub fn coeffs(&self) -> &[ComplexBall] {
        &self.coeffs
    }

    /// Sum of two polynomials.
    #[must_use]
    pub fn add(&self, rhs: &Self, prec: usize) -> Self {
        let n = self.len().max(rhs.len());
        let mut coeffs = Vec::with_capacity(n);
        for i in 0..n {
            coeffs.push(self.coeff(i).add(&rhs.coeff(i), prec));
        }
        Self::from_coeffs(coeffs)
    }

    /// Difference of two polynomials.
    #[must_use]
    pub fn sub(&self, rhs: &Self, prec: usize) -> Self {
        let n = self.len().max(rhs.len());
        let mut coeffs = Vec::with_capacity(n);
        for i in 0..n {
            coeffs.push(self.coeff(i).sub(&rhs.coeff(i), prec));
        }
        Self::from_coeffs(coeffs)
    }

    /// Schoolbook product of two polynomials.
    #[must_use]
    pub fn mul(&self, rhs: &Self, prec: usize) -> Self {
        if self.is_zero() || rhs.is_zero() {
            return Self::zero();
        }
        let mut coeffs = vec![ComplexBall::zero(); self.len() + rhs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] = coeffs[i + j].add(&a.mul(b, prec), prec);
            }
        }
        Self::from_coeffs(coeffs)
    }

    /// Product with a scalar.
    #[must_use]
    pub fn scale(&self, c: &ComplexBall, prec: usize) -> Self {
        Self::from_coeffs(self.coeffs.iter().map(|a| a.mul(c, prec)).collect())
    }

    /// Quotient by a scalar; coefficients go indeterminate when the
    /// scalar's enclosure contains zero.
    #[must_use]
    pub fn scalar_div(&self, c: &ComplexBall, prec: usize) -> Self {
        Self::from_coeffs(self.coeffs.iter().map(|a| a.div(c, prec)).collect())
    }

    /// Formal derivative.
    #[must_use]
    pub fn derivative(&self, prec: usize) -> Self {
        if self.len() < 2 {
            return Self::zero();
        }
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, c)| c.mul_i64(i as i64, prec))
            .collect();
        Self::from_coeffs(coeffs)
    }

    /// Horner evaluation at a point.
    #[must_use]
    pub fn evaluate(&self, z: &ComplexBall, prec: usize) -> ComplexBall {
        let mut acc = ComplexBall::zero();
        for c in self.coeffs.iter().rev() {
            acc = acc.mul(z, prec).add(c, prec);
        }
        acc
    }

    /// Divides by z^k; the k low-order coefficients are dropped.
    pub fn shift_right(&mut self, k: usize) {
        if k >= self.coeffs.len() {
            self.coeffs.clear();
        } else {
            self.coeffs.drain(0..k);
        }
        self.normalize();
    }

    /// Truncates to the first `n` coefficients.
    pub fn truncate(&mut self, n: usize) {
        self.coeffs.truncate(n);
        self.normalize();
    }

    /// In-place Taylor shift: replaces p(z) with p(z + a).
    pub fn taylor_shift(&mut self, a: &ComplexBall, prec: usize) {
        if a.is_zero() || self.len() < 2 {
            return;
        }
        let n = self.coeffs.len();
        for i in 0..n - 1 {
            for j in (i..n - 1).rev() {
                let t = a.mul(&self.coeffs[j + 1], prec);
                self.coeffs[j] = self.coeffs[j].add(&t, prec);
            }
        }
        self.normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P: usize = 64;

    #[test]
    fn test_coeff_out_of_span_is_zero() {
        let p = BallPoly::from_i64s(&[1, 2]);
        assert!(p.coeff(5).is_zero());
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn test_normalization_drops_exact_zeros() {
        let mut p = BallPoly::from_i64s(&[1, 0, 3]);
        assert_eq!(p.len(), 3);
        p.set_coeff(2, ComplexBall::zero());
        assert_eq!(p.len(), 1);
    }

    #[test]
    fn test_mul() {
        // (1 + z)(1 - z) = 1 - z^2
        let a = BallPoly::from_i64s(&[1, 1]);
        let b = BallPoly::from_i64s(&[1, -1]);
        let p = a.mul(&b, P);
        assert!(p.coeff(0).contains_i64(1));
        assert!(p.coeff(1).contains_i64(0));
        assert!(p.coeff(2).contains_i64(-1));
        assert_eq!(p.len(), 3);
    }

    #[test]
    fn test_derivative() {
        // d/dz (1 + 2z + 3z^2) = 2 + 6z
        let p = BallPoly::from_i64s(&[1, 2, 3]).derivative(P);
        assert!(p.coeff(0).contains_i64(2));
        assert!(p.coeff(1).contains_i64(6));
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn test_evaluate_horner() {
        // p(z) = 2 - z + z^3 at z = 3 is 26
        let p = BallPoly::from_i64s(&[2, -1, 0, 1]);
        assert!(p.evaluate(&ComplexBall::from_i64(3), P).contains_i64(26));
    }

    #[test]
    fn test_taylor_shift() {
        // p(z) = z^2, shift by 1: (z + 1)^2 = 1 + 2z + z^2
        let mut p = BallPoly::monomial(2);
        p.taylor_shift(&ComplexBall::one(), P);
        assert!(p.coeff(0).contains_i64(1));
        assert!(p.coeff(1).contains_i64(2));
        assert!(p.coeff(2).contains_i64(1));
    }

    #[test]
    fn test_taylor_shift_composes() {
        let orig = BallPoly::from_i64s(&[3, -1, 4, 1, -5]);
        let mut p = orig.clone();
        let a = ComplexBall::from_f64s(0.5, -0.25);
        p.taylor_shift(&a, P);
        p.taylor_shift(&a.neg(), P);
        for i in 0..orig.len() {
            assert!(p.coeff(i).overlaps(&orig.coeff(i)));
        }
    }

    #[test]
    fn test_shift_right() {
        let mut p = BallPoly::from_i64s(&[7, 8, 9]);
        p.shift_right(1);
        assert!(p.coeff(0).contains_i64(8));
        assert!(p.coeff(1).contains_i64(9));
        assert_eq!(p.len(), 2);
    }
}
