//! Square complex-ball matrices.
//!
//! Just enough linear algebra to hold a monodromy matrix; anything
//! heavier belongs to a dedicated crate.

use holonomic_ball::ComplexBall;

/// A square row-major matrix of [`ComplexBall`] entries.
#[derive(Clone, Debug, PartialEq)]
pub struct BallMatrix {
    dim: usize,
    entries: Vec<ComplexBall>,
}

impl BallMatrix {
    /// The dim×dim zero matrix.
    #[must_use]
    pub fn zeros(dim: usize) -> Self {
        Self {
            dim,
            entries: vec![ComplexBall::zero(); dim * dim],
        }
    }

    /// The dim×dim identity matrix.
    #[must_use]
    pub fn identity(dim: usize) -> Self {
        let mut out = Self::zeros(dim);
        for i in 0..dim {
            out.set(i, i, ComplexBall::one());
        }
        out
    }

    /// Side length.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The entry at row `i`, column `j`.
    ///
    /// # Panics
    ///
    /// Panics when an index is out of range.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> &ComplexBall {
        assert!(i < self.dim && j < self.dim, "matrix index out of range");
        &self.entries[i * self.dim + j]
    }

    /// Overwrites the entry at row `i`, column `j`.
    ///
    /// # Panics
    ///
    /// Panics when an index is out of range.
    pub fn set(&mut self, i: usize, j: usize, c: ComplexBall) {
        assert!(i < self.dim && j < self.dim, "matrix index out of range");
        self.entries[i * self.dim + j] = c;
    }

    /// The transposed matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut out = Self::zeros(self.dim);
        for i in 0..self.dim {
            for j in 0..self.dim {
                out.set(j, i, self.get(i, j).clone());
            }
        }
        out
    }

    /// True when every entry is a finite enclosure.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.entries.iter().all(ComplexBall::is_finite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_and_transpose() {
        let id = BallMatrix::identity(3);
        assert_eq!(id, id.transpose());
        assert!(id.get(1, 1).contains_i64(1));
        assert!(id.get(0, 1).is_zero());

        let mut m = BallMatrix::zeros(2);
        m.set(0, 1, ComplexBall::from_i64(7));
        let t = m.transpose();
        assert!(t.get(1, 0).contains_i64(7));
        assert!(t.get(0, 1).is_zero());
    }
}
