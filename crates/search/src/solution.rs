use num_traits::ToPrimitive;

/// Indicates how a search finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The midpoint collided with a bound.
    Converged,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of an epsilon search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution<S> {
    /// Final search status.
    pub status: Status,
    /// The epsilon found, in the searched type's scalar.
    pub epsilon: S,
    /// Iteration count when the search finished.
    pub iters: usize,
}

impl<S: ToPrimitive> Solution<S> {
    /// Returns the epsilon widened to `f64`, or NaN if it cannot be represented.
    #[must_use]
    pub fn epsilon_f64(&self) -> f64 {
        self.epsilon.to_f64().unwrap_or(f64::NAN)
    }

    /// Returns `-log2(epsilon)`, the number of fractional bits the epsilon
    /// implies.
    #[must_use]
    pub fn bits(&self) -> f64 {
        -self.epsilon_f64().log2()
    }
}
