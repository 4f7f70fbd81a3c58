//! Bisection method for bracketed scalar root finding.
//!
//! # Algorithm
//!
//! Given endpoints `a < b` with `f(a) * f(b) < 0`, the solver repeatedly
//! evaluates the midpoint `c` and keeps the half whose endpoints still
//! straddle a sign change. It stops when the bracket half-width drops to the
//! configured tolerance, when `f(c)` is exactly zero, or when the iteration
//! budget runs out. The reported estimate is the midpoint of the final
//! bracket (or the exact root `c`).
//!
//! # When to Use
//!
//! Bisection is appropriate when:
//! - A bracket with a sign change is known
//! - The function is continuous on the bracket
//! - Robustness matters more than speed (convergence is linear)
//!
//! # Edge Cases
//!
//! Both sign tests use the literal product of function values. A product that
//! underflows to zero is treated as "no sign change", and a zero value at the
//! left endpoint moves the left bound rather than reporting that endpoint.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per midpoint evaluation. Observers can
//! return [`Action::StopEarly`] to halt and receive that midpoint with
//! [`Status::StoppedByObserver`].

mod action;
mod bracket;
mod event;


pub use action::Action;
pub use bracket::BracketError;
pub use event::Event;

use log::{debug, trace};
use rootfind_core::{Observer, RealFunction};

use crate::{
    Config, Error, Solution, Status,
    evaluate::{Callable, evaluate},
};

use bracket::{Bracket, check_finite};

/// Finds a root of `function` in `[a, b]` using the bisection method.
///
/// The observer receives an [`Event`] after each midpoint evaluation.
/// See the [module docs](self) for details.
///
/// # Errors
///
/// Returns an error if the config or bracket is invalid, if `f(a) * f(b)` is
/// not negative, or if the function fails to produce a finite value.
pub fn solve<F, Obs>(
    function: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: RealFunction,
    Obs: Observer<Event, Action>,
{
    config.validate()?;
    check_finite(bracket)?;

    let [a, b] = bracket;
    let fa = evaluate(function, Callable::Function, a)?;
    let fb = evaluate(function, Callable::Function, b)?;

    if fa * fb >= 0.0 {
        return Err(Error::NoSignChange { a, b, fa, fb });
    }

    let mut bracket = Bracket::new(a, b, fa)?;
    let mut iters = 0;

    while bracket.half_width() > config.tolerance {
        if iters == config.max_iters {
            return Ok(finish(bracket.midpoint(), Status::MaxIters, iters));
        }
        iters += 1;

        let mid = bracket.midpoint();
        let f_mid = evaluate(function, Callable::Function, mid)?;

        let [left, right] = bracket.as_array();
        trace!("bisection iter {iters}: [{left}, {right}], f({mid}) = {f_mid}");

        let event = Event {
            iter: iters,
            bracket: bracket.as_array(),
            x: mid,
            fx: f_mid,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(finish(mid, Status::StoppedByObserver, iters));
        }

        #[allow(clippy::float_cmp)]
        if f_mid == 0.0 {
            return Ok(finish(mid, Status::Converged, iters));
        }

        bracket.shrink(mid, f_mid);
    }

    Ok(finish(bracket.midpoint(), Status::Converged, iters))
}

/// Runs bisection without observation.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the config or bracket is invalid, if `f(a) * f(b)` is
/// not negative, or if the function fails to produce a finite value.
pub fn solve_unobserved<F>(
    function: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    F: RealFunction,
{
    solve(function, bracket, config, ())
}

fn finish(x: f64, status: Status, iters: usize) -> Solution {
    debug!("bisection finished ({status:?}) at x = {x} after {iters} iterations");
    Solution::new(x, status, iters)
}
