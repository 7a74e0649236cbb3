//! Core traits and types for machine epsilon searches.
//!
//! This crate defines the shared abstractions that the searches and observers
//! build on:
//!
//! - [`Probe`] — the capability set a numeric type needs to be bisected
//!   (zero, one, addition, halving, and a scalar offset for reporting)
//! - [`Observer`] — receives search events and optionally returns control actions
//! - [`vector`] — small 2-D and 3-D vector types and the `nalgebra` adapters
//!
//! [`Probe`] is implemented for `f32`, `f64`, [`half::f16`],
//! [`rust_decimal::Decimal`], `nalgebra` `f32` vectors, and the vectors in
//! [`vector`].

mod observer;
mod probe;

pub mod vector;

pub use observer::Observer;
pub use probe::Probe;
