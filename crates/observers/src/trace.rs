use std::io::{self, Write};

use macheps_core::{Observer, Probe};
use macheps_search::{Action, Event};

/// Writes one line per search iteration.
///
/// Each line holds the iteration number, the interval bounds, and the midpoint
/// under test, formatted with [`Debug`](std::fmt::Debug). The observer never
/// stops a search; the first write error is kept and returned by
/// [`Trace::finish`], and later events are skipped.
///
/// Searches take their observer by value, so borrow the trace through a
/// closure to read it afterwards:
///
/// ```rust
/// use macheps_core::Observer;
/// use macheps_observers::Trace;
/// use macheps_search::{Config, Event, additive};
///
/// let mut trace = Trace::new(Vec::new());
/// let solution = additive::search::<f32, _>(&Config::default(), |event: &Event<'_, f32>| {
///     trace.observe(event)
/// })
/// .unwrap();
///
/// let lines = String::from_utf8(trace.finish().unwrap()).unwrap();
/// assert_eq!(lines.lines().count(), solution.iters);
/// ```
#[derive(Debug)]
pub struct Trace<W> {
    writer: W,
    error: Option<io::Error>,
}

impl<W: Write> Trace<W> {
    /// Creates a trace that writes to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    /// Flushes the writer and returns it.
    ///
    /// # Errors
    ///
    /// Returns the first error hit while writing, or the flush error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<T: Probe, W: Write> Observer<Event<'_, T>, Action> for Trace<W> {
    fn observe(&mut self, event: &Event<'_, T>) -> Option<Action> {
        if self.error.is_some() {
            return None;
        }

        let [lower, upper] = event.interval.as_array();
        if let Err(error) = writeln!(
            self.writer,
            "{:>4}  lower={lower:?}  upper={upper:?}  middle={:?}",
            event.iter, event.middle,
        ) {
            self.error = Some(error);
        }

        None
    }
}
