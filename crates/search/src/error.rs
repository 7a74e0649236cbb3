use thiserror::Error;

/// Errors that can occur during an epsilon search.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The midpoint never collided with a bound within the iteration cap.
    #[error("did not converge within {max_iters} iterations")]
    ConvergenceTimeout { max_iters: usize },
}
