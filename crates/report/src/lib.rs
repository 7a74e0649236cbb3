//! Machine epsilon report for a fixed list of numeric and vector types.
//!
//! - [`catalog`] — the types under test, in report order, and the searches
//!   run on each
//! - [`report`] — rows and tables that render the results as plain text
//!
//! The `macheps` binary prints [`catalog::multiplicative`] followed by
//! [`catalog::additive`].

pub mod catalog;
pub mod report;
