//! Logarithmic solution structure for the Frobenius method.
//!
//! At a regular singular point, an indicial root ρ of multiplicity m
//! (offset by `alpha` from an earlier root of the same class) carries
//! M = m + alpha generator series g_0..g_{M−1} describing the solution
//! family z^ρ · Σ_k log(z)^k · g_k(z) / k!. The generators are mutated
//! by the solver through two internal operations: `update` re-weights
//! the family by the indicial value f(ρ+ν) and its ρ-derivatives
//! (a Leibniz rule in disguise), and `extend` reads the successive
//! ρ-derivatives of the newest coefficient into the generators.

use dashu::integer::IBig;
use holonomic_ball::{BallPoly, ComplexBall};

/// One Frobenius solution family attached to an indicial root.
#[derive(Clone, Debug)]
pub struct Solution {
    rho: ComplexBall,
    multiplicity: usize,
    alpha: usize,
    gens: Vec<BallPoly>,
}

impl Solution {
    /// A fresh solution at the indicial root `rho` with the given root
    /// multiplicity and offset; all generators start at zero.
    ///
    /// # Panics
    ///
    /// Panics when the multiplicity is zero.
    #[must_use]
    pub fn new(rho: ComplexBall, multiplicity: usize, alpha: usize) -> Self {
        assert!(multiplicity >= 1, "indicial root multiplicity must be positive");
        Self {
            rho,
            multiplicity,
            alpha,
            gens: vec![BallPoly::zero(); multiplicity + alpha],
        }
    }

    /// The indicial root.
    #[must_use]
    pub fn rho(&self) -> &ComplexBall {
        &self.rho
    }

    /// Multiplicity of the indicial root.
    #[must_use]
    pub fn multiplicity(&self) -> usize {
        self.multiplicity
    }

    /// Offset from the earlier root of the same class.
    #[must_use]
    pub fn alpha(&self) -> usize {
        self.alpha
    }

    /// Number of generator series (multiplicity + alpha).
    #[must_use]
    pub fn num_gens(&self) -> usize {
        self.gens.len()
    }

    /// The i-th generator series.
    #[must_use]
    pub fn gen(&self, i: usize) -> &BallPoly {
        &self.gens[i]
    }

    pub(crate) fn gens_mut(&mut self) -> &mut [BallPoly] {
        &mut self.gens
    }

    /// Re-weights the generator family by f(ρ+ν) and its first M−1
    /// ρ-derivatives, where `f` is the (rescaled) indicial polynomial of
    /// the current step as a polynomial in ρ.
    pub(crate) fn update(&mut self, f: &BallPoly, prec: usize) {
        let m = self.gens.len();
        let mut fk = f.clone();
        let mut binom = IBig::ONE;
        let mut weights = Vec::with_capacity(m);
        for k in 0..m {
            let w = fk.evaluate(&self.rho, prec);
            weights.push(w.mul_ibig(&binom, prec));
            fk = fk.derivative(prec);
            binom = binom * IBig::from((m - 1 - k) as i64) / IBig::from((k + 1) as i64);
        }
        for n in (0..m).rev() {
            let mut acc = self.gens[n].scale(&weights[0], prec);
            for k in 1..=n {
                acc = acc.add(&self.gens[n - k].scale(&weights[k], prec), prec);
                weights[k] = weights[k]
                    .mul_i64((n - k) as i64, prec)
                    .div_i64(n as i64, prec);
            }
            self.gens[n] = acc;
        }
    }

    /// Stores the ρ-derivatives of the newest coefficient (a polynomial
    /// in ρ) as the ν-th coefficient of each generator.
    pub(crate) fn extend(&mut self, nu: usize, g_new: &BallPoly, prec: usize) {
        let mut g = g_new.clone();
        for gen in &mut self.gens {
            gen.set_coeff(nu, g.evaluate(&self.rho, prec));
            g = g.derivative(prec);
        }
    }

    /// Rescales every generator so the constant coefficient of the
    /// generator at index `alpha` becomes one. Coefficients go
    /// indeterminate when that pivot's enclosure contains zero.
    pub fn normalize(&mut self, prec: usize) {
        let t = self.gens[self.alpha].coeff(0);
        for gen in &mut self.gens {
            *gen = gen.scalar_div(&t, prec);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P: usize = 64;

    #[test]
    fn test_extend_reads_rho_derivatives() {
        // g(rho) = rho² at rho = 3: value 9, derivative 6.
        let mut sol = Solution::new(ComplexBall::from_i64(3), 2, 0);
        sol.gens_mut()[0] = BallPoly::one();
        sol.extend(1, &BallPoly::from_i64s(&[0, 0, 1]), P);
        assert!(sol.gen(0).coeff(1).contains_i64(9));
        assert!(sol.gen(1).coeff(1).contains_i64(6));
    }

    #[test]
    fn test_update_single_generator_is_a_rescale() {
        let mut sol = Solution::new(ComplexBall::from_i64(2), 1, 0);
        sol.gens_mut()[0] = BallPoly::from_i64s(&[5, 7]);
        // f(rho) = rho + 1, so f(2) = 3.
        sol.update(&BallPoly::from_i64s(&[1, 1]), P);
        assert!(sol.gen(0).coeff(0).contains_i64(15));
        assert!(sol.gen(0).coeff(1).contains_i64(21));
    }

    #[test]
    fn test_update_couples_generator_pair() {
        // M = 2, rho = 3, f(rho) = rho + 1: weights f(3) = 4, f'(3) = 1.
        let mut sol = Solution::new(ComplexBall::from_i64(3), 2, 0);
        sol.gens_mut()[0] = BallPoly::from_i64s(&[1]);
        sol.gens_mut()[1] = BallPoly::from_i64s(&[2]);
        sol.update(&BallPoly::from_i64s(&[1, 1]), P);
        // gens[1] <- gens[1]·4 + gens[0]·1, gens[0] <- gens[0]·4.
        assert!(sol.gen(1).coeff(0).contains_i64(9));
        assert!(sol.gen(0).coeff(0).contains_i64(4));
    }

    #[test]
    fn test_normalize_pivots_on_alpha_generator() {
        let mut sol = Solution::new(ComplexBall::zero(), 1, 1);
        sol.gens_mut()[0] = BallPoly::from_i64s(&[6]);
        sol.gens_mut()[1] = BallPoly::from_i64s(&[2, 4]);
        sol.normalize(P);
        assert!(sol.gen(1).coeff(0).contains_i64(1));
        assert!(sol.gen(1).coeff(1).contains_i64(2));
        assert!(sol.gen(0).coeff(0).contains_i64(3));
    }
}
