//! Method selection for callers that choose a solver at runtime.
//!
//! A [`Method`] names one of the three solvers and a [`Start`] carries the
//! starting data it needs: a bracket for bisection, an initial guess for
//! fixed-point iteration and Newton's method. [`solve`] dispatches to the
//! selected solver without doing any numeric work of its own.

use std::{fmt, str::FromStr};

use log::debug;
use rootfind_core::RealFunction;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Config, Error, SolverResult, bisection, fixed_point, newton};

/// A root-finding method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Method {
    Bisection,
    FixedPoint,
    Newton,
}

impl Method {
    /// All methods, in selector order.
    pub const ALL: [Method; 3] = [Method::Bisection, Method::FixedPoint, Method::Newton];

    /// Returns the canonical name of the method.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Method::Bisection => "bisection",
            Method::FixedPoint => "fixed-point",
            Method::Newton => "newton",
        }
    }

    fn expects(self) -> &'static str {
        match self {
            Method::Bisection => "a bracket",
            Method::FixedPoint | Method::Newton => "an initial guess",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = MethodError;

    /// Parses a method name or numeric selector.
    ///
    /// Names are case-insensitive and may use `-` or `_`. The selectors
    /// `"0"`, `"1"` and `"2"` map to bisection, fixed-point and Newton.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let selector = s.trim();
        match selector.to_ascii_lowercase().replace('_', "-").as_str() {
            "0" | "bisection" => Ok(Method::Bisection),
            "1" | "fixed-point" => Ok(Method::FixedPoint),
            "2" | "newton" => Ok(Method::Newton),
            _ => Err(MethodError::Unknown(selector.to_owned())),
        }
    }
}

/// Starting data for a solve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Start {
    /// Bracket `[a, b]` for bisection.
    Bracket([f64; 2]),

    /// Initial guess for fixed-point iteration and Newton's method.
    Guess(f64),
}

impl Start {
    fn describe(&self) -> &'static str {
        match self {
            Start::Bracket(_) => "a bracket",
            Start::Guess(_) => "an initial guess",
        }
    }
}

/// Errors that can occur when selecting a method.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MethodError {
    #[error("unknown method selector {0:?}")]
    Unknown(String),

    #[error("{method} expects {expected}, got {got}")]
    StartMismatch {
        method: Method,
        expected: &'static str,
        got: &'static str,
    },
}

/// Solves with the selected method.
///
/// For [`Method::FixedPoint`] the `function` is the iteration function `g`.
/// The `derivative` is only evaluated by [`Method::Newton`].
///
/// # Errors
///
/// Returns [`MethodError::StartMismatch`] (wrapped in [`Error`]) if `start`
/// does not match the method, otherwise any error of the selected solver.
pub fn solve<F, D>(
    method: Method,
    function: &F,
    derivative: &D,
    start: Start,
    config: &Config,
) -> SolverResult
where
    F: RealFunction,
    D: RealFunction,
{
    debug!("solving with {method} from {start:?}");

    match (method, start) {
        (Method::Bisection, Start::Bracket(bracket)) => {
            bisection::solve_unobserved(function, bracket, config)
        }
        (Method::FixedPoint, Start::Guess(x0)) => fixed_point::solve_unobserved(function, x0, config),
        (Method::Newton, Start::Guess(x0)) => {
            newton::solve_unobserved(function, derivative, x0, config)
        }
        (method, start) => Err(MethodError::StartMismatch {
            method,
            expected: method.expects(),
            got: start.describe(),
        }
        .into()),
    }
}

/// Parses `selector` as a [`Method`] and solves with it.
///
/// # Errors
///
/// Returns [`MethodError::Unknown`] (wrapped in [`Error`]) for an unrecognized
/// selector, otherwise any error of [`solve`].
pub fn solve_named<F, D>(
    selector: &str,
    function: &F,
    derivative: &D,
    start: Start,
    config: &Config,
) -> SolverResult
where
    F: RealFunction,
    D: RealFunction,
{
    let method = selector.parse::<Method>()?;
    solve(method, function, derivative, start, config)
}
