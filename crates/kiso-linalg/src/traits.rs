//! Numeric traits the vector, matrix and quaternion types are generic over.

use std::ops;

use crate::approx::ApproxEq;

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// Types that support the trigonometric functions.
pub trait Trig {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan2(self, other: Self) -> Self;
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// A trait for numeric types that support basic arithmetic operations.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Floating-point element types.
///
/// Normalization, inversion, rotations and everything else that needs square roots, trigonometry
/// or a comparison threshold is only available for vectors, matrices and quaternions whose
/// elements implement this trait.
pub trait Float: Number + Sqrt + Trig + PartialOrd + ApproxEq<Tolerance = Self> {
    /// Absolute per-component threshold used by the `equals` methods.
    const DEFAULT_THRESHOLD: Self;
    const HALF: Self;
    const TWO: Self;
    const PI: Self;

    /// Converts an `f64` constant to this type, rounding if necessary.
    fn from_f64(value: f64) -> Self;

    fn abs(self) -> Self;
    fn is_finite(self) -> bool;
}

macro_rules! int_impls {
    ($($ty:ty),+) => {
        $(
            impl Zero for $ty {
                const ZERO: Self = 0;
            }

            impl One for $ty {
                const ONE: Self = 1;
            }
        )+
    };
}
int_impls!(u8, u16, u32, u64, i8, i16, i32, i64);

macro_rules! float_impls {
    ($($ty:ident),+) => {
        $(
            impl Zero for $ty {
                const ZERO: Self = 0.0;
            }

            impl One for $ty {
                const ONE: Self = 1.0;
            }

            impl Sqrt for $ty {
                fn sqrt(self) -> Self {
                    $ty::sqrt(self)
                }
            }

            impl Trig for $ty {
                fn sin(self) -> Self {
                    $ty::sin(self)
                }

                fn cos(self) -> Self {
                    $ty::cos(self)
                }

                fn tan(self) -> Self {
                    $ty::tan(self)
                }

                fn asin(self) -> Self {
                    $ty::asin(self)
                }

                fn acos(self) -> Self {
                    $ty::acos(self)
                }

                fn atan2(self, other: Self) -> Self {
                    $ty::atan2(self, other)
                }
            }

            impl Float for $ty {
                const DEFAULT_THRESHOLD: Self = 0.000_001;
                const HALF: Self = 0.5;
                const TWO: Self = 2.0;
                const PI: Self = std::$ty::consts::PI;

                fn from_f64(value: f64) -> Self {
                    value as $ty
                }

                fn abs(self) -> Self {
                    $ty::abs(self)
                }

                fn is_finite(self) -> bool {
                    $ty::is_finite(self)
                }
            }
        )+
    };
}
float_impls!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_constants() {
        assert_eq!(<f32 as Float>::HALF * <f32 as Float>::TWO, 1.0);
        assert!(<f32 as Float>::DEFAULT_THRESHOLD < 0.00001);
        assert!(!Float::is_finite(f32::INFINITY));
        assert_eq!(Float::abs(-2.5f64), 2.5);
        assert_eq!(<f32 as Float>::from_f64(0.1), 0.1f32);
    }
}
