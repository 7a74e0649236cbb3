//! Bisection searches for the machine epsilon of a numeric type.
//!
//! # Searches
//!
//! - [`multiplicative`] — the smallest `x > 1` distinguishable from `1`,
//!   reported as `eps = x - 1`
//! - [`additive`] — the smallest `eps` for which `1 + eps` is distinguishable
//!   from `1`
//!
//! Both bisect until the midpoint collides with one of the interval bounds,
//! which happens once the type can no longer represent anything between them.
//! Every search is capped by [`Config::max_iters`] and fails with
//! [`Error::ConvergenceTimeout`] rather than looping forever.
//!
//! # Observer Events
//!
//! Each iteration emits one [`Event`] carrying the iteration number, the
//! current [`Interval`], and the midpoint about to be tested. Observers can
//! return [`Action::StopEarly`] to end the search with the value found so far.

mod action;
mod config;
mod error;
mod event;
mod interval;
mod solution;

pub mod additive;
pub mod multiplicative;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use interval::Interval;
pub use solution::{Solution, Status};
