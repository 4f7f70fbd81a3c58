//! Core traits for the rootfind framework.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`RealFunction`]: a callable mapping a real `x` to a real value, or an
//!   evaluation error
//! - [`from_fn`] and [`try_from_fn`]: adapters that turn closures into
//!   [`RealFunction`]s
//! - [`Observer`]: receives solver events and optionally returns control actions

mod function;
mod observer;

pub use function::{FromFn, RealFunction, TryFromFn, from_fn, try_from_fn};
pub use observer::Observer;
