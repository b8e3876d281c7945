//! Error taxonomy for the solver stack.

use thiserror::Error;

/// Everything that can go wrong while solving or continuing a linear ODE.
#[derive(Debug, Error)]
pub enum OdeError {
    /// The coefficient table has no nonzero leading polynomial, so it does
    /// not define an operator of positive order.
    #[error("operator has no nonzero leading coefficient polynomial")]
    InvalidOperator,

    /// The series computation cannot reach the requested accuracy, either
    /// because a coefficient became non-finite or because the required
    /// number of terms exceeds the configured cap. Carries a diagnostic
    /// report, typically the rendered dump of the operator and the
    /// partial series.
    #[error("power series failed to converge\n{report}")]
    NonConvergent {
        /// Diagnostic dump produced by [`crate::report::render_report`].
        report: String,
    },

    /// The expansion point cannot be certified ordinary: a divisor (or the
    /// singularity-distance estimate) has an enclosure containing zero.
    #[error("cannot certify the expansion point as ordinary")]
    AmbiguousSingularity,

    /// Adaptive precision doubling hit its configured cap before the
    /// requested accuracy was reached.
    #[error("working precision cap of {max_bits} bits exhausted")]
    PrecisionExhausted {
        /// The cap that was hit.
        max_bits: usize,
    },
}
