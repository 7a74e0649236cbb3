//! Reusable observers for machine epsilon searches.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the searches in `macheps-search`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-search observers
//!   ([`HasIteration`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`Trace`] — writes one line per iteration to any [`std::io::Write`]
//! - [`StopAfter`] — stops any search after a fixed number of iterations
//!
//! [`Observer`]: macheps_core::Observer
//! [`HasIteration`]: traits::HasIteration
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod stop_after;
mod trace;

pub use stop_after::StopAfter;
pub use trace::Trace;
