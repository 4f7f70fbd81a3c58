use std::fmt;

use rootfind_core::RealFunction;

use crate::Error;

/// Identifies which supplied callable an evaluation used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Callable {
    /// The function whose root (or fixed point) is sought.
    Function,

    /// The derivative supplied to Newton's method.
    Derivative,
}

impl fmt::Display for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Function => f.write_str("function"),
            Self::Derivative => f.write_str("derivative"),
        }
    }
}

/// Evaluates `function` at `x`, requiring a finite result.
///
/// # Errors
///
/// Returns [`Error::Evaluation`] if the callable fails and
/// [`Error::NonFinite`] if it returns `NaN` or an infinity.
pub(crate) fn evaluate<F>(function: &F, callable: Callable, x: f64) -> Result<f64, Error>
where
    F: RealFunction,
{
    let value = function
        .call(x)
        .map_err(|err| Error::evaluation(callable, x, err))?;

    if !value.is_finite() {
        return Err(Error::NonFinite { callable, x, value });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rootfind_core::{from_fn, try_from_fn};

    use crate::ErrorKind;

    #[derive(Debug, thiserror::Error)]
    #[error("outside the domain")]
    struct Domain;

    #[test]
    fn returns_finite_values() {
        let f = from_fn(|x: f64| 2.0 * x);
        let value = evaluate(&f, Callable::Function, 1.5).expect("finite");
        assert_relative_eq!(value, 3.0);
    }

    #[test]
    fn rejects_non_finite_values() {
        let reciprocal = from_fn(|x: f64| 1.0 / x);
        let err = evaluate(&reciprocal, Callable::Derivative, 0.0).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Evaluation);
        assert!(matches!(
            err,
            Error::NonFinite {
                callable: Callable::Derivative,
                ..
            }
        ));
    }

    #[test]
    fn wraps_callable_errors() {
        let sqrt = try_from_fn(|x: f64| if x < 0.0 { Err(Domain) } else { Ok(x.sqrt()) });
        let err = evaluate(&sqrt, Callable::Function, -4.0).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Evaluation);
        assert_eq!(err.to_string(), "function evaluation failed at x = -4");
        let source = std::error::Error::source(&err).expect("source error");
        assert_eq!(source.to_string(), "outside the domain");
    }
}
