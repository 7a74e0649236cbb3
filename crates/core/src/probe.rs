use std::fmt::Debug;

use half::f16;
use num_traits::{One, ToPrimitive, Zero};
use rust_decimal::Decimal;

/// The capability set a type needs to be bisected toward its epsilon.
///
/// Searches only ever add, halve, and compare values, so any type that can do
/// those three things can be probed. Equality is the type's native
/// [`PartialEq`], which is the granularity the searches are trying to expose.
///
/// For vector types, `one` is the unit vector along the first axis and
/// [`Probe::offset_from`] reports the first component of the difference.
pub trait Probe: Copy + PartialEq + Debug {
    /// Scalar used to report an offset between two probe values.
    type Scalar: Copy + PartialEq + Debug + ToPrimitive;

    /// Returns the additive identity.
    fn zero() -> Self;

    /// Returns the unit value the search measures against.
    fn one() -> Self;

    /// Adds two values.
    #[must_use]
    fn sum(self, rhs: Self) -> Self;

    /// Divides a value by two.
    #[must_use]
    fn halve(self) -> Self;

    /// Returns the scalar distance `self - origin`.
    fn offset_from(self, origin: Self) -> Self::Scalar;

    /// Returns the average of two values, rounded the way the type rounds.
    #[must_use]
    fn midpoint(self, other: Self) -> Self {
        self.sum(other).halve()
    }

    /// Returns `self + self`.
    #[must_use]
    fn double(self) -> Self {
        self.sum(self)
    }
}

macro_rules! impl_scalar_probe {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Probe for $ty {
                type Scalar = $ty;

                fn zero() -> Self {
                    <$ty as Zero>::zero()
                }

                fn one() -> Self {
                    <$ty as One>::one()
                }

                fn sum(self, rhs: Self) -> Self {
                    self + rhs
                }

                fn halve(self) -> Self {
                    self / (<$ty as One>::one() + <$ty as One>::one())
                }

                fn offset_from(self, origin: Self) -> Self::Scalar {
                    self - origin
                }
            }
        )+
    };
}

impl_scalar_probe!(f32, f64, f16, Decimal);

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn binary_floats_bisect_exactly() {
        assert_relative_eq!(Probe::midpoint(<f32 as Probe>::one(), 2.0), 1.5);
        assert_relative_eq!(Probe::midpoint(<f64 as Probe>::one(), 2.0), 1.5);
        assert_relative_eq!(<f64 as Probe>::one().double(), 2.0);
        assert_relative_eq!(1.25_f64.offset_from(1.0), 0.25);
    }

    #[test]
    fn half_precision_rounds_to_even() {
        let one = <f16 as Probe>::one();
        let ulp = f16::EPSILON;

        // Halfway between 1 and the next f16 falls back onto 1.
        assert_eq!(Probe::midpoint(one, one + ulp), one);
        assert_eq!(one.double(), f16::from_f32(2.0));
        assert_eq!((one + ulp).offset_from(one), ulp);
    }

    #[test]
    fn decimal_keeps_exact_digits() {
        let one = <Decimal as Probe>::one();
        let upper = Decimal::new(2, 0);

        assert_eq!(Probe::midpoint(one, upper), Decimal::new(15, 1));
        assert_eq!(Probe::midpoint(Decimal::ZERO, one), Decimal::new(5, 1));
        assert_eq!(Decimal::new(101, 2).offset_from(one), Decimal::new(1, 2));
    }

    #[test]
    fn scalars_convert_for_reporting() {
        assert_eq!(ToPrimitive::to_f64(&f16::EPSILON), Some(2.0_f64.powi(-10)));
        assert_eq!(ToPrimitive::to_f64(&Decimal::new(5, 1)), Some(0.5));
    }
}
