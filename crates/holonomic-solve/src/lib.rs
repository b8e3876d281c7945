//! # holonomic-solve
//!
//! Rigorous power-series solvers for linear ODEs with polynomial
//! coefficients: the indicial-polynomial machinery shared by every
//! recursion, the Fuchs solver at ordinary points, the Frobenius solver
//! at regular singular points (with its logarithmic solution
//! structure), and the Graeffe/Fujiwara radius-of-convergence estimate.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod frobenius;
pub mod fuchs;
pub mod indicial;
pub mod radius;
pub mod solution;

pub use config::SolveConfig;
pub use frobenius::solve_frobenius;
pub use fuchs::solve_fuchs;
pub use indicial::{indicial_polynomial, indicial_polynomial_evaluate};
pub use radius::{
    fujiwara_root_bound, graeffe_transform, graeffe_transform_inplace,
    radius_of_convergence,
};
pub use solution::Solution;
