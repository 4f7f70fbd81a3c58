use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration shared by all solvers.
///
/// Passed explicitly to every call. Solvers validate it before the first
/// evaluation, so an invalid config fails fast instead of looping.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Config {
    /// Maximum number of iterations.
    pub max_iters: usize,

    /// Convergence tolerance on the step size (or bracket half-width).
    pub tolerance: f64,
}

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_iters must be positive")]
    MaxIters,

    #[error("tolerance must be finite and positive")]
    Tolerance,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            tolerance: 1e-5,
        }
    }
}

impl Config {
    /// Creates a config from an iteration budget and tolerance.
    ///
    /// The config is not validated until it is handed to a solver, or until
    /// [`Config::validate`] is called.
    #[must_use]
    pub const fn new(max_iters: usize, tolerance: f64) -> Self {
        Self {
            max_iters,
            tolerance,
        }
    }

    /// Returns a copy with a different iteration budget.
    #[must_use]
    pub const fn with_max_iters(self, max_iters: usize) -> Self {
        Self { max_iters, ..self }
    }

    /// Returns a copy with a different tolerance.
    #[must_use]
    pub const fn with_tolerance(self, tolerance: f64) -> Self {
        Self { tolerance, ..self }
    }

    /// Validates the iteration budget and tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_iters` is zero or `tolerance` is not a finite
    /// positive number.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }
        Ok(())
    }
}
