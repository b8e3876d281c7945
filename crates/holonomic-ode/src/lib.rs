//! # holonomic-ode
//!
//! Linear differential operators L = Σᵢ pᵢ(z)·dⁱ/dzⁱ with complex-ball
//! polynomial coefficients, their structural transformations (Taylor
//! shift, reduction by powers of z, valuation), the differential action
//! on truncated power series, the shared error taxonomy and the
//! diagnostic report renderer.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod operator;
pub mod report;

pub use error::OdeError;
pub use operator::DiffOp;
pub use report::render_report;
