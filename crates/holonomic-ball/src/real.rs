//! Real balls: arbitrary-precision midpoint-radius interval arithmetic.
//!
//! A [`RealBall`] is a rigorous enclosure of a real number: an
//! arbitrary-precision binary midpoint together with an upward-rounded
//! radius. Every inexact operation takes the working precision in bits as
//! an explicit parameter and returns an enclosure of the true image of the
//! input enclosures; midpoint rounding errors are absorbed into the radius.

use dashu::base::{BitTest, SquareRoot};
use dashu::float::round::{mode, Round};
use dashu::float::FBig;
use dashu::integer::{IBig, UBig};

/// Midpoint type: a binary float truncated toward zero when rounded.
pub type Float = FBig<mode::Zero, 2>;

/// Radius type: a binary float that only ever rounds toward +infinity.
pub type Mag = FBig<mode::Up, 2>;

/// Precision (bits) at which radii are maintained.
const RAD_PREC: usize = 32;

/// Strips the precision limit so later arithmetic on the value is exact.
fn unbounded(x: Float) -> Float {
    x.with_precision(0).value()
}

/// Truncates the significand of `x` to at most `prec` bits, toward zero,
/// reporting whether digits were discarded. Works on the significand
/// directly: dashu's `with_precision` leaves unlimited-precision values
/// untouched.
fn trunc_sig<R: Round>(x: FBig<R, 2>, prec: usize) -> (FBig<R, 2>, bool) {
    if prec == 0 || x.digits() <= prec {
        return (x.with_precision(0).value(), false);
    }
    let (sig, exp) = x.into_repr().into_parts();
    let (sign, mag) = sig.into_parts();
    let shift = mag.bit_len() - prec;
    let kept = &mag >> shift;
    let inexact = &kept << shift != mag;
    let out: FBig<R, 2> =
        FBig::from_parts(IBig::from_parts(sign, kept), exp + shift as isize);
    (out.with_precision(0).value(), inexact)
}

/// Rounds the significand of `x` to at most `prec` bits away from zero.
fn round_sig_away<R: Round>(x: FBig<R, 2>, prec: usize) -> FBig<R, 2> {
    let (out, inexact) = trunc_sig(x, prec);
    if !inexact {
        return out;
    }
    let (sig, exp) = out.into_repr().into_parts();
    let (sign, mag) = sig.into_parts();
    let out: FBig<R, 2> =
        FBig::from_parts(IBig::from_parts(sign, mag + UBig::ONE), exp);
    out.with_precision(0).value()
}

/// Rounds `x` to at most `prec` bits toward negative infinity.
fn round_down(x: Float, prec: usize) -> Float {
    if x >= Float::ZERO {
        trunc_sig(x, prec).0
    } else {
        round_sig_away(x, prec)
    }
}

/// Rounds `x` to at most `prec` bits toward positive infinity.
fn round_up(x: Float, prec: usize) -> Float {
    if x >= Float::ZERO {
        round_sig_away(x, prec)
    } else {
        trunc_sig(x, prec).0
    }
}

/// Attaches a `prec`-bit precision limit to an already-rounded value, so
/// dashu's division and elementary functions see a bounded context.
fn limit<R: Round>(x: FBig<R, 2>, prec: usize) -> FBig<R, 2> {
    x.with_precision(prec).value()
}

/// Rounds a midpoint to `prec` bits, reporting whether rounding occurred.
fn round_mid(x: Float, prec: usize) -> (Float, bool) {
    trunc_sig(x, prec)
}

/// Rounds a radius up to the maintained radius precision.
fn cap(r: Mag) -> Mag {
    limit(round_sig_away(r, RAD_PREC), RAD_PREC)
}

/// 2^k as a magnitude, exactly.
#[must_use]
pub fn pow2(k: isize) -> Mag {
    Mag::from_parts(IBig::ONE, k).with_precision(0).value()
}

/// Absolute value of a midpoint as an (exact) upward-rounding magnitude.
pub(crate) fn abs_up(x: &Float) -> Mag {
    let a = if *x < Float::ZERO { -x.clone() } else { x.clone() };
    a.with_rounding::<mode::Up>()
}

/// An upper bound for the rounding error of a midpoint held at `prec` bits.
fn ulp_bound(mid: &Float, prec: usize) -> Mag {
    abs_up(mid) * pow2(1 - prec as isize)
}

/// A real number enclosure: midpoint, radius, and an indeterminate flag
/// standing in for NaN/infinite enclosures.
#[derive(Clone, Debug, PartialEq)]
pub struct RealBall {
    mid: Float,
    rad: Mag,
    indet: bool,
}

impl RealBall {
    /// The exact zero ball.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            mid: Float::ZERO,
            rad: Mag::ZERO,
            indet: false,
        }
    }

    /// The exact one ball.
    #[must_use]
    pub fn one() -> Self {
        Self::from_i64(1)
    }

    /// An exact integer ball.
    #[must_use]
    pub fn from_i64(n: i64) -> Self {
        Self {
            mid: unbounded(Float::from(n)),
            rad: Mag::ZERO,
            indet: false,
        }
    }

    /// An exact big-integer ball.
    #[must_use]
    pub fn from_ibig(n: &IBig) -> Self {
        Self {
            mid: unbounded(Float::from(n.clone())),
            rad: Mag::ZERO,
            indet: false,
        }
    }

    /// An exact ball from a finite `f64`.
    ///
    /// # Panics
    ///
    /// Panics if `x` is NaN or infinite.
    #[must_use]
    pub fn from_f64(x: f64) -> Self {
        let mid = Float::try_from(x).expect("finite f64");
        Self {
            mid: unbounded(mid),
            rad: Mag::ZERO,
            indet: false,
        }
    }

    /// An exact ball from a magnitude value.
    #[must_use]
    pub fn from_mag(m: &Mag) -> Self {
        Self {
            mid: unbounded(m.clone().with_rounding::<mode::Zero>()),
            rad: Mag::ZERO,
            indet: false,
        }
    }

    /// The enclosure of every real number (NaN/infinity stand-in).
    #[must_use]
    pub fn indeterminate() -> Self {
        Self {
            mid: Float::ZERO,
            rad: Mag::ZERO,
            indet: true,
        }
    }

    /// True when the enclosure is finite (not indeterminate).
    #[must_use]
    pub fn is_finite(&self) -> bool {
        !self.indet
    }

    /// True when the ball is exactly the point zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        !self.indet && self.mid == Float::ZERO && self.rad == Mag::ZERO
    }

    /// True when zero cannot be excluded from the enclosure.
    #[must_use]
    pub fn contains_zero(&self) -> bool {
        self.indet || abs_up(&self.mid) <= self.rad
    }

    /// True when the whole enclosure is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        !self.indet && self.lower() > Float::ZERO
    }

    /// The midpoint.
    #[must_use]
    pub fn mid(&self) -> &Float {
        &self.mid
    }

    /// The radius.
    #[must_use]
    pub fn rad(&self) -> &Mag {
        &self.rad
    }

    /// The ball collapsed to its midpoint (radius dropped).
    #[must_use]
    pub fn mid_ball(&self) -> Self {
        if self.indet {
            return Self::indeterminate();
        }
        Self {
            mid: self.mid.clone(),
            rad: Mag::ZERO,
            indet: false,
        }
    }

    /// Exact lower endpoint of the enclosure.
    #[must_use]
    pub fn lower(&self) -> Float {
        &self.mid - &unbounded(self.rad.clone().with_rounding::<mode::Zero>())
    }

    /// Exact upper endpoint of the enclosure.
    #[must_use]
    pub fn upper(&self) -> Float {
        &self.mid + &unbounded(self.rad.clone().with_rounding::<mode::Zero>())
    }

    /// An upper bound for the magnitude of the enclosure.
    #[must_use]
    pub fn upper_mag(&self) -> Mag {
        cap(abs_up(&self.mid) + &self.rad)
    }

    /// Inflates the radius by `err`.
    pub fn add_error(&mut self, err: &Mag) {
        if !self.indet {
            self.rad = cap(&self.rad + err);
        }
    }

    /// Builds a ball from exact endpoints `lo <= hi`.
    #[must_use]
    pub fn from_endpoints(lo: Float, hi: Float) -> Self {
        let half = unbounded(Float::from_parts(IBig::ONE, -1));
        let mid = (&lo + &hi) * &half;
        let width = (hi - lo).with_rounding::<mode::Up>();
        Self {
            mid: unbounded(mid),
            rad: cap(width * pow2(-1)),
            indet: false,
        }
    }

    /// True when `n` lies inside the enclosure.
    #[must_use]
    pub fn contains_i64(&self, n: i64) -> bool {
        self.indet
            || abs_up(&(&self.mid - &unbounded(Float::from(n)))) <= self.rad
    }

    /// True when the finite `x` lies inside the enclosure.
    #[must_use]
    pub fn contains_f64(&self, x: f64) -> bool {
        if self.indet {
            return true;
        }
        let x = unbounded(Float::try_from(x).expect("finite f64"));
        abs_up(&(&self.mid - &x)) <= self.rad
    }

    /// True when the two enclosures share at least one point.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        if self.indet || other.indet {
            return true;
        }
        abs_up(&(&self.mid - &other.mid)) <= cap(&self.rad + &other.rad)
    }

    /// True when every point of `self` is strictly below every point of
    /// `other`.
    #[must_use]
    pub fn lt(&self, other: &Self) -> bool {
        !self.indet && !other.indet && self.upper() < other.lower()
    }

    /// Sum of two enclosures.
    #[must_use]
    pub fn add(&self, rhs: &Self, prec: usize) -> Self {
        if self.indet || rhs.indet {
            return Self::indeterminate();
        }
        let (mid, inexact) = round_mid(&self.mid + &rhs.mid, prec);
        let mut rad = &self.rad + &rhs.rad;
        if inexact {
            rad = rad + ulp_bound(&mid, prec);
        }
        Self {
            mid,
            rad: cap(rad),
            indet: false,
        }
    }

    /// Difference of two enclosures.
    #[must_use]
    pub fn sub(&self, rhs: &Self, prec: usize) -> Self {
        self.add(&rhs.neg(), prec)
    }

    /// Negation (exact).
    #[must_use]
    pub fn neg(&self) -> Self {
        if self.indet {
            return Self::indeterminate();
        }
        Self {
            mid: -self.mid.clone(),
            rad: self.rad.clone(),
            indet: false,
        }
    }

    /// Product of two enclosures.
    #[must_use]
    pub fn mul(&self, rhs: &Self, prec: usize) -> Self {
        if self.indet || rhs.indet {
            return Self::indeterminate();
        }
        let (mid, inexact) = round_mid(&self.mid * &rhs.mid, prec);
        let mut rad = abs_up(&self.mid) * &rhs.rad
            + abs_up(&rhs.mid) * &self.rad
            + &self.rad * &rhs.rad;
        if inexact {
            rad = rad + ulp_bound(&mid, prec);
        }
        Self {
            mid,
            rad: cap(rad),
            indet: false,
        }
    }

    /// Product with an exact integer.
    #[must_use]
    pub fn mul_i64(&self, n: i64, prec: usize) -> Self {
        self.mul(&Self::from_i64(n), prec)
    }

    /// The ball re-centered on a midpoint of at most `prec` bits, the
    /// discarded digits absorbed into the radius.
    #[must_use]
    pub fn round(&self, prec: usize) -> Self {
        if self.indet {
            return Self::indeterminate();
        }
        let (mid, inexact) = round_mid(self.mid.clone(), prec);
        let mut rad = self.rad.clone();
        if inexact {
            rad = cap(rad + ulp_bound(&mid, prec));
        }
        Self {
            mid,
            rad,
            indet: false,
        }
    }

    /// A lower bound for the distance from zero to the enclosure; zero
    /// when the enclosure contains zero.
    #[must_use]
    pub fn lower_mag(&self) -> Mag {
        if self.contains_zero() {
            return Mag::ZERO;
        }
        let lo = abs_up(&self.mid).with_rounding::<mode::Zero>()
            - unbounded(self.rad.clone().with_rounding::<mode::Zero>());
        limit(trunc_sig(lo, RAD_PREC).0, RAD_PREC).with_rounding::<mode::Up>()
    }

    /// Quotient of two enclosures; indeterminate when the divisor's
    /// enclosure contains zero.
    #[must_use]
    pub fn div(&self, rhs: &Self, prec: usize) -> Self {
        if self.indet || rhs.indet || rhs.contains_zero() {
            return Self::indeterminate();
        }
        let a = self.round(prec);
        let b = rhs.round(prec);
        if b.contains_zero() {
            return Self::indeterminate();
        }
        let num = limit(a.mid.clone(), prec);
        let den = limit(b.mid.clone(), prec);
        let mid = unbounded(num / den);

        // |a/b - a.mid/b.mid| <= (|a.mid| b.rad + |b.mid| a.rad)
        //                        / (|b.mid| (|b.mid| - b.rad))
        let bm = abs_up(&b.mid);
        let den_lo = {
            let lo = abs_up(&b.mid).with_rounding::<mode::Zero>()
                - unbounded(b.rad.clone().with_rounding::<mode::Zero>());
            let lo = lo * unbounded(bm.clone().with_rounding::<mode::Zero>());
            limit(trunc_sig(lo, RAD_PREC).0, RAD_PREC)
                .with_rounding::<mode::Up>()
        };
        let num_up = cap(abs_up(&a.mid) * &b.rad + &bm * &a.rad);
        let rad = num_up / den_lo + ulp_bound(&mid, prec);
        Self {
            mid,
            rad: cap(rad),
            indet: false,
        }
    }

    /// Quotient by an exact nonzero integer.
    #[must_use]
    pub fn div_i64(&self, n: i64, prec: usize) -> Self {
        self.div(&Self::from_i64(n), prec)
    }

    /// Enclosure of the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        if self.indet {
            return Self::indeterminate();
        }
        if self.contains_zero() {
            let hi = self.upper_mag();
            return Self::from_endpoints(
                Float::ZERO,
                unbounded(hi.with_rounding::<mode::Zero>()),
            );
        }
        Self {
            mid: if self.mid < Float::ZERO {
                -self.mid.clone()
            } else {
                self.mid.clone()
            },
            rad: self.rad.clone(),
            indet: false,
        }
    }

    /// Enclosure of the square root; indeterminate when the input admits
    /// no nonnegative point.
    #[must_use]
    pub fn sqrt(&self, prec: usize) -> Self {
        if self.indet {
            return Self::indeterminate();
        }
        if self.upper() < Float::ZERO {
            return Self::indeterminate();
        }
        let mut lo = self.lower();
        if lo < Float::ZERO {
            lo = Float::ZERO;
        }
        let hi = self.upper();
        Self::from_endpoints(sqrt_down(lo, prec), sqrt_up(hi, prec))
    }

    /// Enclosure of x^(2^-n) via n iterated square roots (x >= 0).
    #[must_use]
    pub fn root_2exp(&self, n: usize, prec: usize) -> Self {
        let mut out = self.clone();
        for _ in 0..n {
            out = out.sqrt(prec);
            if out.indet {
                break;
            }
        }
        out
    }

    /// Enclosure of the natural logarithm; indeterminate unless the whole
    /// enclosure is strictly positive.
    #[must_use]
    pub fn ln(&self, prec: usize) -> Self {
        if self.indet || !self.is_positive() {
            return Self::indeterminate();
        }
        let lo = {
            let x = limit(
                round_down(self.lower(), prec).with_rounding::<mode::Down>(),
                prec,
            );
            x.ln().with_rounding::<mode::Zero>()
        };
        let hi = {
            let x = limit(
                round_up(self.upper(), prec).with_rounding::<mode::Up>(),
                prec,
            );
            x.ln().with_rounding::<mode::Zero>()
        };
        Self::from_endpoints(unbounded(lo), unbounded(hi))
    }

    /// Enclosure of the exponential function.
    #[must_use]
    pub fn exp(&self, prec: usize) -> Self {
        if self.indet {
            return Self::indeterminate();
        }
        let lo = {
            let x = limit(
                round_down(self.lower(), prec).with_rounding::<mode::Down>(),
                prec,
            );
            x.exp().with_rounding::<mode::Zero>()
        };
        let hi = {
            let x = limit(
                round_up(self.upper(), prec).with_rounding::<mode::Up>(),
                prec,
            );
            x.exp().with_rounding::<mode::Zero>()
        };
        Self::from_endpoints(unbounded(lo), unbounded(hi))
    }

    /// How many bits of relative accuracy the enclosure certifies.
    ///
    /// `f64::INFINITY` for exact balls; roughly log2(|x|/rad) otherwise.
    #[must_use]
    pub fn accuracy_bits(&self) -> f64 {
        if self.indet {
            return f64::NEG_INFINITY;
        }
        if self.rad == Mag::ZERO {
            return f64::INFINITY;
        }
        let num = limit(self.upper_mag(), RAD_PREC);
        if num == Mag::ZERO {
            return 0.0;
        }
        let ratio = num / limit(self.rad.clone(), RAD_PREC);
        ratio.ln().to_f64().value() / std::f64::consts::LN_2
    }

    /// Midpoint as an `f64` (diagnostics only).
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        if self.indet {
            return f64::NAN;
        }
        self.mid.to_f64().value()
    }

    /// Radius as an `f64` (diagnostics only).
    #[must_use]
    pub fn rad_f64(&self) -> f64 {
        if self.indet {
            return f64::INFINITY;
        }
        self.rad.to_f64().value()
    }
}

fn sqrt_down(x: Float, prec: usize) -> Float {
    if x <= Float::ZERO {
        return Float::ZERO;
    }
    let x = limit(trunc_sig(x, prec).0, prec);
    unbounded(x.sqrt())
}

fn sqrt_up(x: Float, prec: usize) -> Float {
    if x <= Float::ZERO {
        return Float::ZERO;
    }
    let x = limit(
        round_sig_away(x.with_rounding::<mode::Up>(), prec),
        prec,
    );
    unbounded(x.sqrt().with_rounding::<mode::Zero>())
}

/// Upper bound for q^(1/k) over nonnegative magnitudes.
#[must_use]
pub fn mag_root_up(q: &Mag, k: usize, prec: usize) -> Mag {
    assert!(k > 0, "root order must be positive");
    if *q == Mag::ZERO {
        return Mag::ZERO;
    }
    if k == 1 {
        return q.clone();
    }
    let x = limit(round_sig_away(q.clone(), prec), prec);
    let k = limit(Mag::from(k as i64), prec);
    let r = x.ln() / k;
    // One extra ulp of slack over the correctly rounded exp/ln chain.
    cap(r.exp() * (Mag::ONE + pow2(4 - prec as isize)))
}

impl std::fmt::Display for RealBall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.indet {
            return write!(f, "nan");
        }
        write!(f, "{:e} +/- {:e}", self.to_f64(), self.rad_f64())
    }
}
