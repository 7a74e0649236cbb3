//! Additive formulation: the smallest `eps` for which `1 + eps` differs from `1`.
//!
//! # Algorithm
//!
//! [`search`] bisects `[0, 1]` on the candidate epsilon itself. A midpoint too
//! small to perturb `1` becomes the new lower bound, otherwise it becomes the
//! new upper bound. The midpoint left when the interval collapses is reported.
//!
//! For IEEE binary types the result is half the multiplicative epsilon: the
//! sum `1 + eps` rounds up to the next representable value as soon as `eps`
//! passes the halfway point, so the boundary sits at half an ulp of `1`.

use macheps_core::{Observer, Probe};

use super::{Action, Config, Error, Event, Interval, Solution, Status};

/// Finds the additive epsilon.
///
/// The observer receives an [`Event`] for every midpoint before it is
/// classified.
///
/// # Errors
///
/// Returns [`Error::ConvergenceTimeout`] if the interval has not collapsed
/// after [`Config::max_iters`] iterations.
pub fn search<T, Obs>(config: &Config, mut observer: Obs) -> Result<Solution<T::Scalar>, Error>
where
    T: Probe,
    Obs: for<'a> Observer<Event<'a, T>, Action>,
{
    let zero = T::zero();
    let one = T::one();
    let mut interval = Interval::new(zero, one);
    let mut middle = interval.midpoint();
    let mut iters = 0;

    while !interval.is_bound(&middle) {
        if iters == config.max_iters() {
            return Err(Error::ConvergenceTimeout {
                max_iters: config.max_iters(),
            });
        }
        iters += 1;

        let event = Event {
            iter: iters,
            interval: &interval,
            middle: &middle,
        };
        if let Some(action) = observer.observe(&event) {
            match action {
                Action::StopEarly => {
                    return Ok(Solution {
                        status: Status::StoppedByObserver,
                        epsilon: middle.offset_from(zero),
                        iters,
                    });
                }
            }
        }

        if one == one.sum(middle) {
            interval.raise_lower(middle);
        } else {
            interval.drop_upper(middle);
        }
        middle = interval.midpoint();
    }

    Ok(Solution {
        status: Status::Converged,
        epsilon: middle.offset_from(zero),
        iters,
    })
}

/// Runs [`search`] without observation.
///
/// # Errors
///
/// Returns [`Error::ConvergenceTimeout`] if the interval has not collapsed
/// after [`Config::max_iters`] iterations.
pub fn search_unobserved<T: Probe>(config: &Config) -> Result<Solution<T::Scalar>, Error> {
    search::<T, _>(config, ())
}
