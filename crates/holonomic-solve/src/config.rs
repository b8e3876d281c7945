//! Solver configuration.

/// Tunable knobs for the solver and monodromy pipeline, passed
/// explicitly instead of living in global state.
#[derive(Clone, Debug)]
pub struct SolveConfig {
    /// Multiplier applied to the requested bits when a truncation order
    /// cannot be derived (indeterminate inputs), and divisor applied to
    /// the estimated radius when choosing a loop.
    pub guard_factor: usize,
    /// Hard cap on the number of series terms per expansion.
    pub max_terms: usize,
    /// Graeffe iterations used by the radius-of-convergence estimate.
    pub graeffe_iters: usize,
    /// Number of path segments for a closed loop; must be a power of
    /// two, at least 4.
    pub path_steps: usize,
    /// Cap on the working precision for adaptive re-runs.
    pub max_bits: usize,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            guard_factor: 2,
            max_terms: 4096,
            graeffe_iters: 40,
            path_steps: 32,
            max_bits: 16384,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let cfg = SolveConfig::default();
        assert_eq!(cfg.guard_factor, 2);
        assert_eq!(cfg.graeffe_iters, 40);
        assert!(cfg.path_steps.is_power_of_two());
    }
}
