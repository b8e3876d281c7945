//! # Holonomic
//!
//! Rigorous arbitrary-precision solving of linear ODEs with polynomial
//! coefficients: power-series solutions at ordinary and regular
//! singular points, analytic continuation along paths, and monodromy
//! matrices, with every numeric result a midpoint-radius enclosure.
//!
//! ## Features
//!
//! - **Ball Arithmetic**: real/complex midpoint-radius enclosures over
//!   binary big floats, with explicit working precision everywhere
//! - **Series Solvers**: the Fuchs recursion at ordinary points and the
//!   Frobenius method (with logarithmic solutions) at regular singular
//!   points
//! - **Convergence Radii**: Graeffe root squaring plus Fujiwara's bound
//! - **Monodromy**: analytic continuation around closed loops, with an
//!   adaptive precision-doubling driver
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use holonomic::prelude::*;
//!
//! // y' = y around the unit circle: trivial monodromy.
//! let op = DiffOp::new(vec![BallPoly::from_i64s(&[-1]), BallPoly::one()])?;
//! let mono = find_monodromy_matrix(&op, 128, &SolveConfig::default())?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use holonomic_ball as ball;
pub use holonomic_monodromy as monodromy;
pub use holonomic_ode as ode;
pub use holonomic_solve as solve;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use holonomic_ball::{BallPoly, ComplexBall, RealBall};
    pub use holonomic_monodromy::{
        analytic_continuation, analytic_continuation_adaptive, circle_path,
        find_monodromy_matrix, truncation_order, BallMatrix,
    };
    pub use holonomic_ode::{DiffOp, OdeError};
    pub use holonomic_solve::{
        indicial_polynomial, indicial_polynomial_evaluate,
        radius_of_convergence, solve_frobenius, solve_fuchs, SolveConfig,
        Solution,
    };
}
