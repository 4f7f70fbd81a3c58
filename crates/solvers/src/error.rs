use std::error::Error as StdError;

use thiserror::Error;

use crate::{bisection::BracketError, config::ConfigError, evaluate::Callable, method::MethodError};

/// Broad classification of solver failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The bisection endpoints do not bracket a sign change.
    NoSignChange,

    /// Newton's method reached a point with a zero derivative.
    ZeroDerivative,

    /// A supplied callable failed or produced a non-finite value.
    Evaluation,

    /// The solver was misconfigured before any iteration could run.
    Configuration,
}

/// Errors that can occur while solving.
///
/// Reaching the iteration limit is not an error; see
/// [`Status::MaxIters`](crate::Status::MaxIters).
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("invalid method: {0}")]
    InvalidMethod(#[from] MethodError),

    #[error("starting point is not finite: {x0}")]
    NonFiniteStart { x0: f64 },

    #[error("no sign change in bracket: f({a})={fa}, f({b})={fb}")]
    NoSignChange { a: f64, b: f64, fa: f64, fb: f64 },

    #[error("derivative is zero at x = {x} (iteration {iter})")]
    ZeroDerivative { x: f64, iter: usize },

    #[error("{callable} evaluation failed at x = {x}")]
    Evaluation {
        callable: Callable,
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("{callable} returned non-finite value {value} at x = {x}")]
    NonFinite { callable: Callable, x: f64, value: f64 },

    #[error("newton step from x = {x} is not finite: f(x)={fx}, f'(x)={dfx}")]
    NonFiniteStep { x: f64, fx: f64, dfx: f64 },
}

impl Error {
    pub(crate) fn evaluation<E>(callable: Callable, x: f64, err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Evaluation {
            callable,
            x,
            source: Box::new(err),
        }
    }

    /// Returns the failure category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidConfig(_)
            | Self::InvalidBracket(_)
            | Self::InvalidMethod(_)
            | Self::NonFiniteStart { .. } => ErrorKind::Configuration,
            Self::NoSignChange { .. } => ErrorKind::NoSignChange,
            Self::ZeroDerivative { .. } => ErrorKind::ZeroDerivative,
            Self::Evaluation { .. } | Self::NonFinite { .. } | Self::NonFiniteStep { .. } => {
                ErrorKind::Evaluation
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_are_configuration_kind() {
        let err = Error::from(ConfigError::Tolerance);
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(
            err.to_string(),
            "invalid config: tolerance must be finite and positive"
        );
    }

    #[test]
    fn messages_carry_values() {
        let err = Error::NoSignChange {
            a: 3.0,
            b: 5.0,
            fa: 7.0,
            fb: 23.0,
        };
        assert_eq!(err.kind(), ErrorKind::NoSignChange);
        assert_eq!(
            err.to_string(),
            "no sign change in bracket: f(3)=7, f(5)=23"
        );

        let err = Error::ZeroDerivative { x: 0.0, iter: 1 };
        assert_eq!(err.kind(), ErrorKind::ZeroDerivative);
        assert_eq!(err.to_string(), "derivative is zero at x = 0 (iteration 1)");
    }
}
