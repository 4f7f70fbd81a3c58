//! Fixed-point iteration.
//!
//! Repeatedly applies an iteration function `g`, `x_{n+1} = g(x_n)`, until two
//! successive iterates differ by less than the tolerance. A root of the
//! original equation must correspond to a fixed point `x = g(x)`; choosing
//! such a `g` is the caller's job. The solver does not check that `g` is a
//! contraction, so a poor choice may diverge until the iteration budget runs
//! out, in which case the last iterate is returned with [`Status::MaxIters`].

use log::{debug, trace};
use rootfind_core::{Observer, RealFunction};

use crate::{
    Config, Error, Solution, Status,
    evaluate::{Callable, evaluate},
};

/// Control actions supported by the fixed-point solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the latest iterate.
    StopEarly,
}

/// Event emitted by the fixed-point solver after each application of `g`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The iterate `g` was applied to.
    pub x: f64,

    /// The new iterate `g(x)`.
    pub gx: f64,
}

/// Finds a fixed point of `g` starting from `x0`.
///
/// # Errors
///
/// Returns an error if the config is invalid, `x0` is not finite, or `g`
/// fails to produce a finite value.
pub fn solve<G, Obs>(g: &G, x0: f64, config: &Config, mut observer: Obs) -> Result<Solution, Error>
where
    G: RealFunction,
    Obs: Observer<Event, Action>,
{
    config.validate()?;
    if !x0.is_finite() {
        return Err(Error::NonFiniteStart { x0 });
    }

    let mut x = x0;

    for iter in 1..=config.max_iters {
        let gx = evaluate(g, Callable::Function, x)?;
        trace!("fixed-point iter {iter}: g({x}) = {gx}");

        if let Some(Action::StopEarly) = observer.observe(&Event { iter, x, gx }) {
            return Ok(finish(gx, Status::StoppedByObserver, iter));
        }

        if (gx - x).abs() < config.tolerance {
            return Ok(finish(gx, Status::Converged, iter));
        }

        x = gx;
    }

    Ok(finish(x, Status::MaxIters, config.max_iters))
}

/// Runs fixed-point iteration without observation.
///
/// # Errors
///
/// Returns an error if the config is invalid, `x0` is not finite, or `g`
/// fails to produce a finite value.
pub fn solve_unobserved<G>(g: &G, x0: f64, config: &Config) -> Result<Solution, Error>
where
    G: RealFunction,
{
    solve(g, x0, config, ())
}

fn finish(x: f64, status: Status, iters: usize) -> Solution {
    debug!("fixed-point finished ({status:?}) at x = {x} after {iters} iterations");
    Solution::new(x, status, iters)
}
