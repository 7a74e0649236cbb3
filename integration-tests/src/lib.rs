//! Probe types used only by the integration tests.

pub mod fixed {
    use macheps_core::Probe;

    /// A signed fixed-point number with `FRAC` fractional bits.
    ///
    /// Halving truncates toward negative infinity, so unlike the IEEE types
    /// nothing ever rounds up.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Fixed<const FRAC: u32> {
        raw: i64,
    }

    impl<const FRAC: u32> Fixed<FRAC> {
        /// Creates a value from its raw representation.
        #[must_use]
        pub const fn from_raw(raw: i64) -> Self {
            Self { raw }
        }

        /// Returns the smallest positive value, `2^-FRAC`.
        #[must_use]
        pub fn resolution() -> f64 {
            (-f64::from(FRAC)).exp2()
        }
    }

    impl<const FRAC: u32> Probe for Fixed<FRAC> {
        type Scalar = f64;

        fn zero() -> Self {
            Self::from_raw(0)
        }

        fn one() -> Self {
            Self::from_raw(1 << FRAC)
        }

        fn sum(self, rhs: Self) -> Self {
            Self::from_raw(self.raw.saturating_add(rhs.raw))
        }

        fn halve(self) -> Self {
            Self::from_raw(self.raw >> 1)
        }

        #[allow(clippy::cast_precision_loss)]
        fn offset_from(self, origin: Self) -> f64 {
            (self.raw - origin.raw) as f64 * Self::resolution()
        }
    }
}
