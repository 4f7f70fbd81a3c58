use std::{convert::Infallible, error::Error as StdError, marker::PhantomData};

/// A real-valued function of one real variable.
///
/// This is the capability solvers consume: evaluate at `x`, or fail.
/// Implementations must be deterministic, always producing the same result
/// for a given `x`. Domain problems (division by zero, logarithm of a
/// negative number, ...) should be reported through [`Self::Error`] rather
/// than by returning a silently wrong value.
///
/// Solvers additionally treat non-finite return values as failures, so an
/// implementation that returns `NaN` for an invalid domain is still safe.
pub trait RealFunction {
    type Error: StdError + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Each function defines its own `Error` type to represent domain failures.
    fn call(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<T: RealFunction + ?Sized> RealFunction for &T {
    type Error = T::Error;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        (**self).call(x)
    }
}

/// A [`RealFunction`] backed by an infallible closure.
///
/// Created with [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F> {
    function: F,
}

/// Wraps an infallible closure as a [`RealFunction`].
///
/// # Example
///
/// ```rust
/// use rootfind_core::{RealFunction, from_fn};
///
/// let f = from_fn(|x: f64| x * x - 2.0);
/// assert_eq!(f.call(2.0), Ok(2.0));
/// ```
pub const fn from_fn<F>(function: F) -> FromFn<F>
where
    F: Fn(f64) -> f64,
{
    FromFn { function }
}

impl<F> RealFunction for FromFn<F>
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        Ok((self.function)(x))
    }
}

/// A [`RealFunction`] backed by a fallible closure.
///
/// Created with [`try_from_fn`].
pub struct TryFromFn<F, E> {
    function: F,
    _marker: PhantomData<fn() -> E>,
}

/// Wraps a fallible closure as a [`RealFunction`].
///
/// # Example
///
/// ```rust
/// use rootfind_core::{RealFunction, try_from_fn};
///
/// #[derive(Debug)]
/// struct Domain;
///
/// impl std::fmt::Display for Domain {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         f.write_str("log of a non-positive number")
///     }
/// }
///
/// impl std::error::Error for Domain {}
///
/// let ln = try_from_fn(|x: f64| if x > 0.0 { Ok(x.ln()) } else { Err(Domain) });
/// assert!(ln.call(1.0).is_ok());
/// assert!(ln.call(-1.0).is_err());
/// ```
pub const fn try_from_fn<F, E>(function: F) -> TryFromFn<F, E>
where
    F: Fn(f64) -> Result<f64, E>,
    E: StdError + Send + Sync + 'static,
{
    TryFromFn {
        function,
        _marker: PhantomData,
    }
}

impl<F, E> RealFunction for TryFromFn<F, E>
where
    F: Fn(f64) -> Result<f64, E>,
    E: StdError + Send + Sync + 'static,
{
    type Error = E;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        (self.function)(x)
    }
}

impl<F: Clone, E> Clone for TryFromFn<F, E> {
    fn clone(&self) -> Self {
        Self {
            function: self.function.clone(),
            _marker: PhantomData,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fmt;

    use approx::assert_relative_eq;

    #[derive(Debug, PartialEq)]
    struct DivideByZero;

    impl fmt::Display for DivideByZero {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("division by zero")
        }
    }

    impl StdError for DivideByZero {}

    /// Cubic implemented directly on a struct.
    struct Cubic;

    impl RealFunction for Cubic {
        type Error = Infallible;

        fn call(&self, x: f64) -> Result<f64, Self::Error> {
            Ok(x.powi(3))
        }
    }

    fn eval_twice<F: RealFunction>(f: F, x: f64) -> Result<(f64, f64), F::Error> {
        Ok((f.call(x)?, f.call(x)?))
    }

    #[test]
    fn from_fn_evaluates_closure() {
        let f = from_fn(|x: f64| x.cos());
        assert_relative_eq!(f.call(0.0).expect("infallible"), 1.0);
    }

    #[test]
    fn try_from_fn_propagates_errors() {
        let reciprocal = try_from_fn(|x: f64| {
            if x == 0.0 {
                Err(DivideByZero)
            } else {
                Ok(1.0 / x)
            }
        });

        assert_relative_eq!(reciprocal.call(4.0).expect("nonzero"), 0.25);
        assert_eq!(reciprocal.call(0.0), Err(DivideByZero));
    }

    #[test]
    fn references_are_functions() {
        let cubic = Cubic;
        let (first, second) = eval_twice(&cubic, 2.0).expect("infallible");
        assert_relative_eq!(first, 8.0);
        assert_eq!(first.to_bits(), second.to_bits());
    }
}
