use macheps_core::Observer;

use crate::traits::{CanStopEarly, HasIteration};

/// Stops a search once it reaches a given iteration.
///
/// Unlike the iteration cap in the search config, which turns a long search
/// into an error, this keeps the partial result and reports it as stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopAfter {
    iters: usize,
}

impl StopAfter {
    /// Creates an observer that stops at iteration `iters`.
    #[must_use]
    pub fn new(iters: usize) -> Self {
        Self { iters }
    }
}

impl<E: HasIteration, A: CanStopEarly> Observer<E, A> for StopAfter {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.iter() >= self.iters).then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use macheps_search::{Config, Status, additive, multiplicative};

    #[test]
    fn stops_multiplicative_search() {
        let solution = multiplicative::search::<f64, _, _>(
            &Config::default(),
            f64::eq,
            StopAfter::new(2),
        )
        .expect("should stop");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 2);
        assert_relative_eq!(solution.epsilon, 0.25);
    }

    #[test]
    fn stops_additive_search() {
        let solution = additive::search::<f32, _>(&Config::default(), StopAfter::new(5))
            .expect("should stop");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 5);
        assert_relative_eq!(solution.epsilon, 0.03125);
    }

    #[test]
    fn converges_before_a_late_stop() {
        let solution =
            multiplicative::search_halving::<f32, _>(&Config::default(), StopAfter::new(1000))
                .expect("should converge");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.epsilon, f32::EPSILON);
    }
}
