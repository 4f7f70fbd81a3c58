//! Reusable observers for the rootfind solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the bisection, fixed-point and Newton solvers.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-solver observers
//!   ([`HasIterate`], [`HasResidual`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`LogObserver`] writes one record per iteration through the `log` facade.
//! - [`History`] records every iteration and can stop the solver once the
//!   residual is small enough.
//!
//! [`Observer`]: rootfind_core::Observer
//! [`HasIterate`]: traits::HasIterate
//! [`HasResidual`]: traits::HasResidual
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod history;
mod logging;

pub use history::{History, Record};
pub use logging::{LogObserver, TARGET};
