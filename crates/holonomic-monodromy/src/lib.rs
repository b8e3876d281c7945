//! # holonomic-monodromy
//!
//! Analytic continuation of rigorous power-series solutions along
//! piecewise-linear paths, and monodromy matrices around the origin:
//! closed circular contours from power-of-two roots of unity,
//! truncation-order estimation, fixed-precision and adaptive
//! continuation drivers, and a small complex-ball matrix type.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod continuation;
pub mod matrix;
pub mod monodromy;
pub mod path;

pub use continuation::{
    analytic_continuation, analytic_continuation_adaptive, truncation_order,
};
pub use matrix::BallMatrix;
pub use monodromy::find_monodromy_matrix;
pub use path::circle_path;
