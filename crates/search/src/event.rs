use super::Interval;

/// Event emitted by a search once per iteration, before the midpoint is
/// classified.
#[derive(Debug)]
pub struct Event<'a, T> {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Current search interval.
    pub interval: &'a Interval<T>,
    /// Midpoint about to be tested.
    pub middle: &'a T,
}
