//! Scalar root-finding solvers.
//!
//! Each solver drives a [`RealFunction`] toward a root (or, for fixed-point
//! iteration, a fixed point) and reports either a [`Solution`] or an
//! [`Error`].
//!
//! # Solvers
//!
//! - [`bisection`]: guaranteed progress on a bracket with a sign change
//! - [`fixed_point`]: repeated application of an iteration function
//! - [`newton`]: derivative-based search from an initial guess
//! - [`method`]: runtime selection between the three
//!
//! # Termination
//!
//! All solvers share a [`Config`] with an iteration budget and a tolerance.
//! Spending the budget is not an error: the best available estimate is
//! returned with [`Status::MaxIters`], so callers that need a verified root
//! should check [`Solution::is_converged`].
//!
//! # Example
//!
//! ```rust
//! use rootfind_core::from_fn;
//! use rootfind_solvers::{Config, Status, newton};
//!
//! let f = from_fn(|x: f64| x * x - 2.0);
//! let df = from_fn(|x: f64| 2.0 * x);
//!
//! let solution = newton::solve_unobserved(&f, &df, 1.0, &Config::default())?;
//! assert_eq!(solution.status, Status::Converged);
//! assert!((solution.x - 2f64.sqrt()).abs() < 1e-10);
//! # Ok::<(), rootfind_solvers::Error>(())
//! ```
//!
//! [`RealFunction`]: rootfind_core::RealFunction

mod config;
mod error;
mod evaluate;
mod solution;

pub mod bisection;
pub mod fixed_point;
pub mod method;
pub mod newton;

pub use config::{Config, ConfigError};
pub use error::{Error, ErrorKind};
pub use evaluate::Callable;
pub use method::{Method, MethodError, Start};
pub use solution::{Solution, Status};

/// The outcome of a solve: a [`Solution`] or a classified [`Error`].
pub type SolverResult = Result<Solution, Error>;
