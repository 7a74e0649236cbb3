//! Capability traits for cross-search observers.
//!
//! These traits abstract over search-specific event and action types, so an
//! observer can be written once and used with any search.
//!
//! # Example
//!
//! ```rust
//! use macheps_core::Observer;
//! use macheps_observers::traits::{CanStopEarly, HasIteration};
//!
//! struct EveryOther;
//!
//! impl<E: HasIteration, A: CanStopEarly> Observer<E, A> for EveryOther {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.iter() % 2 == 0).then(A::stop_early)
//!     }
//! }
//! ```

use macheps_search::{Action, Event};

/// An event that carries a 1-based iteration number.
pub trait HasIteration {
    /// Returns the iteration that produced this event.
    fn iter(&self) -> usize;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the search early.
    fn stop_early() -> Self;
}

impl<T> HasIteration for Event<'_, T> {
    fn iter(&self) -> usize {
        self.iter
    }
}

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
