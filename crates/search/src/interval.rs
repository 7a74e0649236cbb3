use macheps_core::Probe;

/// The `[lower, upper]` bounds a search bisects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<T> {
    lower: T,
    upper: T,
}

impl<T: Probe> Interval<T> {
    pub(crate) fn new(lower: T, upper: T) -> Self {
        Self { lower, upper }
    }

    /// Returns the lower bound.
    #[must_use]
    pub fn lower(&self) -> T {
        self.lower
    }

    /// Returns the upper bound.
    #[must_use]
    pub fn upper(&self) -> T {
        self.upper
    }

    /// Returns the bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [T; 2] {
        [self.lower, self.upper]
    }

    /// Returns the midpoint of the interval, rounded by the probed type.
    #[must_use]
    pub fn midpoint(&self) -> T {
        self.lower.midpoint(self.upper)
    }

    /// Returns true if `x` equals either bound.
    ///
    /// Once the midpoint is a bound, the type has nothing left to represent
    /// between them and the search is done.
    #[must_use]
    pub fn is_bound(&self, x: &T) -> bool {
        *x == self.lower || *x == self.upper
    }

    /// Moves the lower bound up to `x`.
    pub(crate) fn raise_lower(&mut self, x: T) {
        self.lower = x;
    }

    /// Moves the upper bound down to `x`.
    pub(crate) fn drop_upper(&mut self, x: T) {
        self.upper = x;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shrinks_from_both_ends() {
        let mut interval = Interval::new(0.0_f64, 1.0);
        assert_eq!(interval.midpoint(), 0.5);

        interval.drop_upper(0.5);
        interval.raise_lower(0.25);
        assert_eq!(interval.as_array(), [0.25, 0.5]);
        assert_eq!(interval.midpoint(), 0.375);
    }

    #[test]
    fn collapsed_midpoint_is_a_bound() {
        let next = 1.0 + f32::EPSILON;
        let interval = Interval::new(1.0_f32, next);

        assert!(interval.is_bound(&interval.midpoint()));
        assert!(!Interval::new(1.0_f32, 2.0).is_bound(&1.5));
    }
}
