#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Indicates how a solver terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    /// Converged according to the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    ///
    /// The reported `x` is a best-effort estimate that was not checked
    /// against the tolerance.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a successful solve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Estimate of the root (or fixed point).
    pub x: f64,

    /// Iteration count when the solver finished.
    pub iters: usize,
}

impl Solution {
    pub(crate) fn new(x: f64, status: Status, iters: usize) -> Self {
        Self { status, x, iters }
    }

    /// Returns true if the solver met its tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
