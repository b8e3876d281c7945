//! Complex balls: rectangular enclosures built from two [`RealBall`]s.

use dashu::integer::IBig;

use crate::real::RealBall;

/// A complex number enclosure, one real ball per component.
#[derive(Clone, Debug, PartialEq)]
pub struct ComplexBall {
    re: RealBall,
    im: RealBall,
}

impl ComplexBall {
    /// The exact zero ball.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            re: RealBall::zero(),
            im: RealBall::zero(),
        }
    }

    /// The exact one ball.
    #[must_use]
    pub fn one() -> Self {
        Self {
            re: RealBall::one(),
            im: RealBall::zero(),
        }
    }

    /// The imaginary unit.
    #[must_use]
    pub fn i() -> Self {
        Self {
            re: RealBall::zero(),
            im: RealBall::one(),
        }
    }

    /// An exact real integer ball.
    #[must_use]
    pub fn from_i64(n: i64) -> Self {
        Self {
            re: RealBall::from_i64(n),
            im: RealBall::zero(),
        }
    }

    /// An exact real big-integer ball.
    #[must_use]
    pub fn from_ibig(n: &IBig) -> Self {
        Self {
            re: RealBall::from_ibig(n),
            im: RealBall::zero(),
        }
    }

    /// An exact ball from finite `f64` components.
    #[must_use]
    pub fn from_f64s(re: f64, im: f64) -> Self {
        Self {
            re: RealBall::from_f64(re),
            im: RealBall::from_f64(im),
        }
    }

    /// A complex ball from two real enclosures.
    #[must_use]
    pub fn from_parts(re: RealBall, im: RealBall) -> Self {
        Self { re, im }
    }

    /// A purely real ball.
    #[must_use]
    pub fn from_real(re: RealBall) -> Self {
        Self {
            re,
            im: RealBall::zero(),
        }
    }

    /// The enclosure of the whole plane (NaN stand-in).
    #[must_use]
    pub fn indeterminate() -> Self {
        Self {
            re: RealBall::indeterminate(),
            im: RealBall::indeterminate(),
        }
    }

    /// The real component.
    #[must_use]
    pub fn re(&self) -> &RealBall {
        &self.re
    }

    /// The imaginary component.
    #[must_use]
    pub fn im(&self) -> &RealBall {
        &self.im
    }

    /// True when both components are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// True when the ball is exactly the point zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }

    /// True when zero cannot be excluded from the enclosure.
    #[must_use]
    pub fn contains_zero(&self) -> bool {
        self.re.contains_zero() && self.im.contains_zero()
    }

    /// True when `n` lies inside the enclosure (on the real axis).
    #[must_use]
    pub fn contains_i64(&self, n: i64) -> bool {
        self.re.contains_i64(n) && self.im.contains_i64(0)
    }

    /// True when the finite point `re + im*i` lies inside the enclosure.
    #[must_use]
    pub fn contains_f64s(&self, re: f64, im: f64) -> bool {
        self.re.contains_f64(re) && self.im.contains_f64(im)
    }

    /// True when the two enclosures share at least one point.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.re.overlaps(&other.re) && self.im.overlaps(&other.im)
    }

    /// The ball collapsed to its midpoint.
    #[must_use]
    pub fn mid_ball(&self) -> Self {
        Self {
            re: self.re.mid_ball(),
            im: self.im.mid_ball(),
        }
    }

    /// How many bits of relative accuracy the enclosure certifies, taken
    /// as the worse of the two components.
    #[must_use]
    pub fn accuracy_bits(&self) -> f64 {
        self.re.accuracy_bits().min(self.im.accuracy_bits())
    }

    /// Sum of two enclosures.
    #[must_use]
    pub fn add(&self, rhs: &Self, prec: usize) -> Self {
        Self {
            re: self.re.add(&rhs.re, prec),
            im: self.im.add(&rhs.im, prec),
        }
    }

    /// Difference of two enclosures.
    #[must_use]
    pub fn sub(&self, rhs: &Self, prec: usize) -> Self {
        Self {
            re: self.re.sub(&rhs.re, prec),
            im: self.im.sub(&rhs.im, prec),
        }
    }

    /// Negation (exact).
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            re: self.re.neg(),
            im: self.im.neg(),
        }
    }

    /// Product of two enclosures.
    #[must_use]
    pub fn mul(&self, rhs: &Self, prec: usize) -> Self {
        let ac = self.re.mul(&rhs.re, prec);
        let bd = self.im.mul(&rhs.im, prec);
        let ad = self.re.mul(&rhs.im, prec);
        let bc = self.im.mul(&rhs.re, prec);
        Self {
            re: ac.sub(&bd, prec),
            im: ad.add(&bc, prec),
        }
    }

    /// Product with an exact integer.
    #[must_use]
    pub fn mul_i64(&self, n: i64, prec: usize) -> Self {
        Self {
            re: self.re.mul_i64(n, prec),
            im: self.im.mul_i64(n, prec),
        }
    }

    /// Product with an exact big integer.
    #[must_use]
    pub fn mul_ibig(&self, n: &IBig, prec: usize) -> Self {
        let n = RealBall::from_ibig(n);
        Self {
            re: self.re.mul(&n, prec),
            im: self.im.mul(&n, prec),
        }
    }

    /// Product with a real enclosure.
    #[must_use]
    pub fn mul_real(&self, x: &RealBall, prec: usize) -> Self {
        Self {
            re: self.re.mul(x, prec),
            im: self.im.mul(x, prec),
        }
    }

    /// Product with the imaginary unit (exact rotation).
    #[must_use]
    pub fn mul_i(&self) -> Self {
        Self {
            re: self.im.neg(),
            im: self.re.clone(),
        }
    }

    /// Quotient of two enclosures; indeterminate when the divisor cannot
    /// be certified nonzero.
    #[must_use]
    pub fn div(&self, rhs: &Self, prec: usize) -> Self {
        let den = rhs
            .re
            .mul(&rhs.re, prec)
            .add(&rhs.im.mul(&rhs.im, prec), prec);
        if !den.is_finite() || den.contains_zero() {
            return Self::indeterminate();
        }
        let re = self
            .re
            .mul(&rhs.re, prec)
            .add(&self.im.mul(&rhs.im, prec), prec);
        let im = self
            .im
            .mul(&rhs.re, prec)
            .sub(&self.re.mul(&rhs.im, prec), prec);
        Self {
            re: re.div(&den, prec),
            im: im.div(&den, prec),
        }
    }

    /// Quotient by an exact nonzero integer.
    #[must_use]
    pub fn div_i64(&self, n: i64, prec: usize) -> Self {
        Self {
            re: self.re.div_i64(n, prec),
            im: self.im.div_i64(n, prec),
        }
    }

    /// Quotient by an exact nonzero big integer.
    #[must_use]
    pub fn div_ibig(&self, n: &IBig, prec: usize) -> Self {
        let n = RealBall::from_ibig(n);
        Self {
            re: self.re.div(&n, prec),
            im: self.im.div(&n, prec),
        }
    }

    /// Enclosure of the modulus.
    #[must_use]
    pub fn abs(&self, prec: usize) -> RealBall {
        self.re
            .mul(&self.re, prec)
            .add(&self.im.mul(&self.im, prec), prec)
            .sqrt(prec)
    }

    /// Enclosure of the principal square root.
    ///
    /// On the branch cut (negative real axis) the root with nonnegative
    /// imaginary part is taken. When the sign of the imaginary component
    /// cannot be certified near the cut the result is indeterminate.
    #[must_use]
    pub fn sqrt(&self, prec: usize) -> Self {
        if !self.is_finite() {
            return Self::indeterminate();
        }
        if self.is_zero() {
            return Self::zero();
        }
        let r = self.abs(prec);
        let t = r.add(&self.re, prec).div_i64(2, prec).sqrt(prec);
        let u = r.sub(&self.re, prec).div_i64(2, prec).sqrt(prec);
        if self.im.is_positive() {
            return Self { re: t, im: u };
        }
        if self.im.neg().is_positive() {
            return Self {
                re: t,
                im: u.neg(),
            };
        }
        // Imaginary part straddles or sits on the real axis.
        if self.im.is_zero() && !self.re.contains_zero() {
            return if self.re.is_positive() {
                Self {
                    re: t,
                    im: RealBall::zero(),
                }
            } else {
                Self {
                    re: RealBall::zero(),
                    im: u,
                }
            };
        }
        if t.contains_zero() {
            return Self::indeterminate();
        }
        let im = self.im.div(&t.mul_i64(2, prec), prec);
        Self { re: t, im }
    }
}

impl std::fmt::Display for ComplexBall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}) + ({})*I", self.re, self.im)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P: usize = 64;

    #[test]
    fn test_mul_i_squares_to_minus_one() {
        let i = ComplexBall::i();
        assert!(i.mul(&i, P).contains_i64(-1));
        assert_eq!(i.mul_i().mul_i(), ComplexBall::from_i64(-1));
    }

    #[test]
    fn test_division_roundtrip() {
        let a = ComplexBall::from_f64s(3.0, -2.0);
        let b = ComplexBall::from_f64s(1.0, 5.0);
        let q = a.div(&b, P);
        assert!(q.mul(&b, P).contains_f64s(3.0, -2.0));
    }

    #[test]
    fn test_division_by_zero_is_indeterminate() {
        let a = ComplexBall::one();
        assert!(!a.div(&ComplexBall::zero(), P).is_finite());
    }

    #[test]
    fn test_abs_of_three_four() {
        let z = ComplexBall::from_f64s(3.0, 4.0);
        assert!(z.abs(P).contains_i64(5));
    }

    #[test]
    fn test_sqrt_of_minus_one_is_i() {
        let z = ComplexBall::from_i64(-1).sqrt(P);
        assert!(z.contains_f64s(0.0, 1.0));
        // Principal branch: nonnegative imaginary part on the cut.
        assert!(!z.im().neg().is_positive());
    }

    #[test]
    fn test_sqrt_squares_back() {
        for &(re, im) in &[(2.0, 0.0), (0.0, 1.0), (-3.0, 4.0), (1.5, -2.5)] {
            let z = ComplexBall::from_f64s(re, im);
            let r = z.sqrt(P);
            assert!(r.mul(&r, P).contains_f64s(re, im));
        }
    }

    #[test]
    fn test_indeterminate_propagates() {
        let nan = ComplexBall::indeterminate();
        assert!(!nan.add(&ComplexBall::one(), P).is_finite());
        assert!(!nan.mul(&ComplexBall::one(), P).is_finite());
    }
}
