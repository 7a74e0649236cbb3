//! Vector types used as search subjects.
//!
//! Two families are probed: the `f32` column vectors from `nalgebra`, and the
//! plain `#[repr(C)]` [`Vec2`] and [`Vec3`] defined here. Both use exact
//! component-wise equality through [`PartialEq`]; [`ulps_same`] offers the
//! approximate comparison that `nalgebra` vectors provide through `approx`.

use std::ops::{Add, Div, Sub};

use approx::{AbsDiffEq, UlpsEq};
use nalgebra::{Vector2, Vector3};

use crate::Probe;

/// A two-component `f32` vector.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

/// A three-component `f32` vector.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const UNIT_X: Self = Self::new(1.0, 0.0);

    /// Creates a vector from its components.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Creates a vector from its components.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

macro_rules! componentwise_ops {
    ($ty:ident { $($field:ident),+ }) => {
        impl Add for $ty {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl Sub for $ty {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl Div<f32> for $ty {
            type Output = Self;

            fn div(self, rhs: f32) -> Self {
                Self { $($field: self.$field / rhs),+ }
            }
        }

        impl Probe for $ty {
            type Scalar = f32;

            fn zero() -> Self {
                Self::ZERO
            }

            fn one() -> Self {
                Self::UNIT_X
            }

            fn sum(self, rhs: Self) -> Self {
                self + rhs
            }

            fn halve(self) -> Self {
                self / 2.0
            }

            fn offset_from(self, origin: Self) -> f32 {
                (self - origin).x
            }
        }
    };
}

componentwise_ops!(Vec2 { x, y });
componentwise_ops!(Vec3 { x, y, z });

macro_rules! nalgebra_probe {
    ($($ty:ident),+) => {
        $(
            impl Probe for $ty<f32> {
                type Scalar = f32;

                fn zero() -> Self {
                    $ty::zeros()
                }

                fn one() -> Self {
                    $ty::x()
                }

                fn sum(self, rhs: Self) -> Self {
                    self + rhs
                }

                fn halve(self) -> Self {
                    self / 2.0
                }

                fn offset_from(self, origin: Self) -> f32 {
                    (self - origin).x
                }
            }
        )+
    };
}

nalgebra_probe!(Vector2, Vector3);

/// Compares two values with the default tolerances of their [`UlpsEq`] impl.
///
/// The tolerances belong to the compared type, not to this crate. For
/// `nalgebra` `f32` vectors that is an absolute `f32::EPSILON` followed by a
/// per-component distance of a few units in the last place.
#[must_use]
pub fn ulps_same<V: UlpsEq>(a: &V, b: &V) -> bool {
    a.ulps_eq(b, <V as AbsDiffEq>::default_epsilon(), V::default_max_ulps())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn componentwise_arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(0.5, 0.5, 0.5);

        assert_eq!(a + b, Vec3::new(1.5, 2.5, 3.5));
        assert_eq!(a - b, Vec3::new(0.5, 1.5, 2.5));
        assert_eq!(a / 2.0, Vec3::new(0.5, 1.0, 1.5));
        assert_eq!(a.halve(), a / 2.0);
        assert_eq!(a.double(), a + a);
    }

    #[test]
    fn hand_rolled_probe_walks_the_x_axis() {
        let one = Vec2::one();
        assert_eq!(one, Vec2::UNIT_X);
        assert_eq!(one.double(), Vec2::new(2.0, 0.0));
        assert_eq!(one.midpoint(one.double()), Vec2::new(1.5, 0.0));
        assert_relative_eq!(Vec2::new(1.25, 7.0).offset_from(one), 0.25);
        assert_eq!(Vec3::zero(), Vec3::default());
    }

    #[test]
    fn nalgebra_probe_walks_the_x_axis() {
        let one = Vector3::<f32>::one();
        assert_eq!(one, Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(one.midpoint(one.double()), Vector3::new(1.5, 0.0, 0.0));
        assert_relative_eq!(Vector2::new(1.5_f32, 0.0).offset_from(Vector2::one()), 0.5);
    }

    #[test]
    fn ulps_same_tolerates_a_few_ulps() {
        let one = Vector2::<f32>::x();
        let ulp = f32::EPSILON;

        assert!(ulps_same(&one, &Vector2::new(1.0 + 4.0 * ulp, 0.0)));
        assert!(!ulps_same(&one, &Vector2::new(1.0 + 5.0 * ulp, 0.0)));
        assert!(one != Vector2::new(1.0 + ulp, 0.0));
    }
}
