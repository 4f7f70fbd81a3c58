//! Newton's method for scalar root finding.
//!
//! # Algorithm
//!
//! Starting from `x0`, each iteration evaluates `f(x)` and `f'(x)` and steps
//! to `x - f(x) / f'(x)`. The solver stops when a step is shorter than the
//! tolerance, returning the new iterate. Near a simple root the error roughly
//! squares with each step.
//!
//! # Limitations
//!
//! - A zero derivative at any iterate is a hard failure
//!   ([`Error::ZeroDerivative`]); no fallback step is attempted.
//! - Convergence depends on the starting guess. A divergent sequence runs
//!   until the iteration budget is spent and the last iterate is returned with
//!   [`Status::MaxIters`].

mod event;

pub use event::Event;

use log::{debug, trace};
use rootfind_core::{Observer, RealFunction};

use crate::{
    Config, Error, Solution, Status,
    evaluate::{Callable, evaluate},
};

/// Control actions supported by the Newton solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the next iterate.
    StopEarly,
}

/// Finds a root of `function` using Newton's method from `x0`.
///
/// The observer receives an [`Event`] once each step has been computed.
///
/// # Errors
///
/// Returns an error if the config is invalid, `x0` is not finite, the
/// derivative is exactly zero at an iterate, the step is not finite, or either
/// callable fails to produce a finite value.
pub fn solve<F, D, Obs>(
    function: &F,
    derivative: &D,
    x0: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: RealFunction,
    D: RealFunction,
    Obs: Observer<Event, Action>,
{
    config.validate()?;
    if !x0.is_finite() {
        return Err(Error::NonFiniteStart { x0 });
    }

    let mut x = x0;

    for iter in 1..=config.max_iters {
        let fx = evaluate(function, Callable::Function, x)?;
        let dfx = evaluate(derivative, Callable::Derivative, x)?;

        #[allow(clippy::float_cmp)]
        if dfx == 0.0 {
            debug!("newton stopped: zero derivative at x = {x} (iteration {iter})");
            return Err(Error::ZeroDerivative { x, iter });
        }

        let x_next = x - fx / dfx;
        if !x_next.is_finite() {
            return Err(Error::NonFiniteStep { x, fx, dfx });
        }
        trace!("newton iter {iter}: x = {x}, f = {fx}, f' = {dfx}, next = {x_next}");

        let event = Event {
            iter,
            x,
            fx,
            dfx,
            x_next,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(finish(x_next, Status::StoppedByObserver, iter));
        }

        if (x_next - x).abs() < config.tolerance {
            return Ok(finish(x_next, Status::Converged, iter));
        }

        x = x_next;
    }

    Ok(finish(x, Status::MaxIters, config.max_iters))
}

/// Runs Newton's method without observation.
///
/// # Errors
///
/// Returns an error if the config is invalid, `x0` is not finite, the
/// derivative is exactly zero at an iterate, the step is not finite, or either
/// callable fails to produce a finite value.
pub fn solve_unobserved<F, D>(
    function: &F,
    derivative: &D,
    x0: f64,
    config: &Config,
) -> Result<Solution, Error>
where
    F: RealFunction,
    D: RealFunction,
{
    solve(function, derivative, x0, config, ())
}

fn finish(x: f64, status: Status, iters: usize) -> Solution {
    debug!("newton finished ({status:?}) at x = {x} after {iters} iterations");
    Solution::new(x, status, iters)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{cell::Cell, f64::consts::SQRT_2};

    use approx::assert_relative_eq;
    use rootfind_core::{from_fn, try_from_fn};

    use crate::ErrorKind;

    #[derive(Debug, thiserror::Error)]
    #[error("derivative unavailable")]
    struct Unavailable;

    #[test]
    fn finds_square_root_of_two() {
        let f = from_fn(|x: f64| x * x - 2.0);
        let df = from_fn(|x: f64| 2.0 * x);

        let solution = solve_unobserved(&f, &df, 1.0, &Config::default()).expect("should converge");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, SQRT_2, epsilon = 1e-10);
        // 1 -> 1.5 -> 1.41667 -> 1.414216 -> 1.41421356
        assert_eq!(solution.iters, 4);
    }

    #[test]
    fn zero_derivative_fails_on_first_iteration() {
        let f = from_fn(|x: f64| x.powi(3));
        let derivative_calls = Cell::new(0usize);
        let df = from_fn(|x: f64| {
            derivative_calls.set(derivative_calls.get() + 1);
            3.0 * x * x
        });

        let mut events = 0usize;
        let observer = |_: &Event| {
            events += 1;
            None::<Action>
        };
        let err = solve(&f, &df, 0.0, &Config::default(), observer).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ZeroDerivative);
        assert!(matches!(err, Error::ZeroDerivative { x, iter: 1 } if x == 0.0));
        assert_eq!(derivative_calls.get(), 1);
        assert_eq!(events, 0);
    }

    #[test]
    fn divergent_iteration_stops_at_max_iters() {
        // Newton on cbrt(x) maps x to -2x.
        let f = from_fn(f64::cbrt);
        let df = from_fn(|x: f64| 1.0 / (3.0 * x.cbrt().powi(2)));
        let config = Config::default().with_max_iters(5);

        let solution = solve_unobserved(&f, &df, 1.0, &config).expect("best effort");

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 5);
        assert_relative_eq!(solution.x, -32.0, max_relative = 1e-9);
    }

    #[test]
    fn propagates_derivative_errors() {
        let f = from_fn(|x: f64| x * x - 2.0);
        let df = try_from_fn(|_: f64| Err::<f64, _>(Unavailable));

        let err = solve_unobserved(&f, &df, 1.0, &Config::default()).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Evaluation);
        assert!(matches!(
            err,
            Error::Evaluation {
                callable: Callable::Derivative,
                ..
            }
        ));
    }

    #[test]
    fn overflowing_step_is_an_evaluation_error() {
        let f = from_fn(|_: f64| 1e300);
        let df = from_fn(|_: f64| 1e-10);

        let err = solve_unobserved(&f, &df, 0.0, &Config::default()).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Evaluation);
        assert!(matches!(err, Error::NonFiniteStep { .. }));
    }

    #[test]
    fn rejects_non_finite_start() {
        let f = from_fn(|x: f64| x * x - 2.0);
        let df = from_fn(|x: f64| 2.0 * x);

        let err = solve_unobserved(&f, &df, f64::INFINITY, &Config::default()).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn observer_sees_steps_and_can_stop() {
        let f = from_fn(|x: f64| x * x - 2.0);
        let df = from_fn(|x: f64| 2.0 * x);

        let mut steps = Vec::new();
        let observer = |event: &Event| {
            steps.push(event.step());
            (event.iter == 2).then_some(Action::StopEarly)
        };

        let solution = solve(&f, &df, 1.0, &Config::default(), observer).expect("should stop");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 2);
        assert_relative_eq!(solution.x, 17.0 / 12.0);
        assert_eq!(steps.len(), 2);
        assert_relative_eq!(steps[0], 0.5);
    }

    #[test]
    fn repeated_solves_are_bit_identical() {
        let f = from_fn(|x: f64| x.cos() - x);
        let df = from_fn(|x: f64| -x.sin() - 1.0);

        let first = solve_unobserved(&f, &df, 1.0, &Config::default()).expect("should converge");
        let second = solve_unobserved(&f, &df, 1.0, &Config::default()).expect("should converge");

        assert_eq!(first.x.to_bits(), second.x.to_bits());
        assert_eq!(first, second);
    }
}
