//! # Solver configuration
//!
//! All settings have defaults; use the `with_` methods to change them.

/// Number of pivots after which the solver gives up by default.
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Settings of a single solve.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Options {
    /// Whether all values of the original variables are verified to be nonnegative after solving.
    pub enforce_non_negative: bool,
    /// Whether Bland's rule is used to select the entering column, instead of the column with the
    /// most favorable reduced cost.
    ///
    /// Bland's rule guarantees termination, but may need more pivots.
    pub avoid_cycling: bool,
    /// Maximum number of pivots over both phases together.
    pub max_iterations: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            enforce_non_negative: true,
            avoid_cycling: false,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl Options {
    /// Set whether a negative variable value in the final solution is reported as infeasibility.
    #[must_use]
    pub fn with_enforce_non_negative(mut self, enforce_non_negative: bool) -> Self {
        self.enforce_non_negative = enforce_non_negative;
        self
    }

    /// Set whether Bland's anti-cycling rule is used.
    #[must_use]
    pub fn with_avoid_cycling(mut self, avoid_cycling: bool) -> Self {
        self.avoid_cycling = avoid_cycling;
        self
    }

    /// Set the maximum number of pivots.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}
