//! Multiplicative formulation: the smallest `x > 1` that differs from `1`.
//!
//! # Algorithm
//!
//! [`search`] bisects `[1, 2]`. A midpoint that still differs from `1` becomes
//! the new upper bound; one that the type considers equal to `1` becomes the
//! new lower bound. The last midpoint tested before the interval collapses is
//! the smallest distinguishable `x`, and the reported epsilon is `x - 1`.
//!
//! [`search_halving`] is the direct variant: it keeps replacing `x` with the
//! average of `1` and `x` until that average is `1`, and reports the last `x`
//! that was not.
//!
//! # Sameness
//!
//! By default a midpoint is "the same as" `1` under the type's native
//! equality. [`search_by`] accepts another predicate, such as an approximate
//! comparison, which only steers the bounds; the search still ends when the
//! midpoint is exactly equal to a bound.

use macheps_core::{Observer, Probe};

use super::{Action, Config, Error, Event, Interval, Solution, Status};

/// Finds the multiplicative epsilon, deciding sameness with `same`.
///
/// The observer receives an [`Event`] for every midpoint before it is
/// classified.
///
/// # Errors
///
/// Returns [`Error::ConvergenceTimeout`] if the interval has not collapsed
/// after [`Config::max_iters`] iterations.
pub fn search<T, F, Obs>(
    config: &Config,
    mut same: F,
    mut observer: Obs,
) -> Result<Solution<T::Scalar>, Error>
where
    T: Probe,
    F: FnMut(&T, &T) -> bool,
    Obs: for<'a> Observer<Event<'a, T>, Action>,
{
    let one = T::one();
    let mut interval = Interval::new(one, one.double());
    let mut middle = interval.midpoint();
    let mut x = middle;
    let mut iters = 0;

    while !interval.is_bound(&middle) {
        if iters == config.max_iters() {
            return Err(Error::ConvergenceTimeout {
                max_iters: config.max_iters(),
            });
        }
        iters += 1;
        x = middle;

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
                        epsilon: x.offset_from(one),
                        iters,
                    });
                }
            }
        }

        if same(&one, &middle) {
            interval.raise_lower(middle);
        } else {
            interval.drop_upper(middle);
        }
        middle = interval.midpoint();
    }

    Ok(Solution {
        status: Status::Converged,
        epsilon: x.offset_from(one),
        iters,
    })
}

/// Finds the multiplicative epsilon using native equality, without observation.
///
/// # Errors
///
/// Returns [`Error::ConvergenceTimeout`] if the interval has not collapsed
/// after [`Config::max_iters`] iterations.
pub fn search_unobserved<T: Probe>(config: &Config) -> Result<Solution<T::Scalar>, Error> {
    search::<T, _, _>(config, <T as PartialEq>::eq, ())
}

/// Finds the multiplicative epsilon with a custom sameness predicate.
///
/// # Errors
///
/// Returns [`Error::ConvergenceTimeout`] if the interval has not collapsed
/// after [`Config::max_iters`] iterations.
pub fn search_by<T, F>(config: &Config, same: F) -> Result<Solution<T::Scalar>, Error>
where
    T: Probe,
    F: FnMut(&T, &T) -> bool,
{
    search::<T, _, _>(config, same, ())
}

/// Finds the multiplicative epsilon by repeatedly averaging `x` with `1`.
///
/// Each event's interval is `[1, x]` and its midpoint is the next `x`.
///
/// # Errors
///
/// Returns [`Error::ConvergenceTimeout`] if the average has not reached `1`
/// after [`Config::max_iters`] iterations.
pub fn search_halving<T, Obs>(
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<T::Scalar>, Error>
where
    T: Probe,
    Obs: for<'a> Observer<Event<'a, T>, Action>,
{
    let one = T::one();
    let mut x = one.double();
    let mut last = x;
    let mut iters = 0;

    while x != one {
        if iters == config.max_iters() {
            return Err(Error::ConvergenceTimeout {
                max_iters: config.max_iters(),
            });
        }
        iters += 1;
        last = x;

        let interval = Interval::new(one, x);
        let next = interval.midpoint();
        let event = Event {
            iter: iters,
            interval: &interval,
            middle: &next,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                epsilon: last.offset_from(one),
                iters,
            });
        }

        x = next;
    }

    Ok(Solution {
        status: Status::Converged,
        epsilon: last.offset_from(one),
        iters,
    })
}

/// Runs [`search_halving`] without observation.
///
/// # Errors
///
/// Returns [`Error::ConvergenceTimeout`] if the average has not reached `1`
/// after [`Config::max_iters`] iterations.
pub fn search_halving_unobserved<T: Probe>(
    config: &Config,
) -> Result<Solution<T::Scalar>, Error> {
    search_halving::<T, _>(config, ())
}
