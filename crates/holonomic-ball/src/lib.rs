//! # holonomic-ball
//!
//! Arbitrary-precision ball arithmetic for the holonomic workspace.
//!
//! This crate provides:
//! - Real midpoint-radius enclosures over binary big floats
//! - Complex balls built from rectangular real enclosures
//! - Dense polynomials with complex-ball coefficients
//!
//! ## Precision Model
//!
//! There is no global precision state. Every inexact operation takes the
//! working precision in bits as an explicit parameter; midpoint rounding
//! errors are folded into the radius, so results are always rigorous
//! enclosures of the true image. Non-finite results are modeled by an
//! indeterminate flag that absorbs every subsequent operation.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod complex;
pub mod poly;
pub mod real;

#[cfg(test)]
mod proptests;

pub use complex::ComplexBall;
pub use poly::BallPoly;
pub use real::{mag_root_up, pow2, Float, Mag, RealBall};
