//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across the bisection, fixed-point and Newton
//! solvers.
//!
//! # Event traits
//!
//! - [`HasIterate`]: events that carry an iteration counter and evaluated point
//! - [`HasResidual`]: events that carry a residual value
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use rootfind_core::Observer;
//! use rootfind_observers::traits::{CanStopEarly, HasIterate, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//!     min_iters: usize,
//! }
//!
//! impl<E: HasIterate + HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         if event.iter() >= self.min_iters && event.residual().abs() < self.tolerance {
//!             return Some(A::stop_early());
//!         }
//!         None
//!     }
//! }
//! ```

use rootfind_solvers::{bisection, fixed_point, newton};

/// An event emitted once per solver iteration.
pub trait HasIterate {
    /// Returns the 1-based iteration counter.
    fn iter(&self) -> usize;

    /// Returns the point evaluated during this iteration.
    fn x(&self) -> f64;
}

/// An event that carries a residual value.
///
/// For root-finding solvers this is the function value at [`HasIterate::x`].
/// For fixed-point iteration it is `g(x) - x`.
pub trait HasResidual {
    /// Returns the residual for this event.
    fn residual(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- bisection ---

impl HasIterate for bisection::Event {
    fn iter(&self) -> usize {
        self.iter
    }

    fn x(&self) -> f64 {
        self.x
    }
}

impl HasResidual for bisection::Event {
    fn residual(&self) -> f64 {
        self.fx
    }
}

impl CanStopEarly for bisection::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

// --- fixed point ---

impl HasIterate for fixed_point::Event {
    fn iter(&self) -> usize {
        self.iter
    }

    fn x(&self) -> f64 {
        self.x
    }
}

impl HasResidual for fixed_point::Event {
    fn residual(&self) -> f64 {
        self.gx - self.x
    }
}

impl CanStopEarly for fixed_point::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

// --- newton ---

impl HasIterate for newton::Event {
    fn iter(&self) -> usize {
        self.iter
    }

    fn x(&self) -> f64 {
        self.x
    }
}

impl HasResidual for newton::Event {
    fn residual(&self) -> f64 {
        self.fx
    }
}

impl CanStopEarly for newton::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
