//! Approximate equality.
//!
//! [`ApproxEq`] is implemented for floats, arrays, and every vector, matrix and quaternion type in
//! this crate, and backs the [`assert_approx_eq!`][crate::assert_approx_eq] and
//! [`assert_approx_ne!`][crate::assert_approx_ne] macros. Unlike the `equals` methods on those
//! types, [`ApproxEq::abs_diff_eq`] treats identical infinities as equal.

mod impls;

use std::{fmt, panic::Location};

/// Types that can be compared for *approximate equality*.
///
/// Compound types are approximately equal if every one of their components is.
///
/// Background on the pitfalls of comparing floating-point numbers:
/// <https://randomascii.wordpress.com/2012/02/25/comparing-floating-point-numbers-2012-edition/>
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// The scalar type tolerances are expressed in (the underlying float type).
    type Tolerance: DefaultTolerances + Copy;

    /// Returns whether the absolute difference between `self` and `other` is at most
    /// `abs_tolerance`.
    ///
    /// Infinities only compare equal to infinities of the same sign, and `NaN` never compares
    /// equal to anything.
    fn abs_diff_eq(&self, other: &Rhs, abs_tolerance: Self::Tolerance) -> bool;

    /// Returns whether the absolute difference between `self` and `other` is at most
    /// `rel_tolerance` times the larger of their magnitudes.
    fn rel_diff_eq(&self, other: &Rhs, rel_tolerance: Self::Tolerance) -> bool;

    /// Returns whether at most `ulps_tolerance` representable values lie between `self` and
    /// `other` ([*units in the last place*]).
    ///
    /// `-0.0` and `+0.0` are equal; any other pair of values with differing signs is not.
    ///
    /// [*units in the last place*]: https://en.wikipedia.org/wiki/Unit_in_the_last_place
    fn ulps_diff_eq(&self, other: &Rhs, ulps_tolerance: u32) -> bool;
}

/// Default tolerances used by the assertion macros when no comparison is configured.
pub trait DefaultTolerances {
    const DEFAULT_ABS_TOLERANCE: Self;
    const DEFAULT_REL_TOLERANCE: Self;
    const DEFAULT_ULPS_TOLERANCE: u32;
}

impl DefaultTolerances for f32 {
    const DEFAULT_ABS_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_REL_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_ULPS_TOLERANCE: u32 = 4;
}

impl DefaultTolerances for f64 {
    const DEFAULT_ABS_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_REL_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_ULPS_TOLERANCE: u32 = 4;
}

/// Guard returned by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// The assertion is checked when the guard is dropped. Before that, [`Asserter::abs`],
/// [`Asserter::rel`] and [`Asserter::ulps`] select the comparisons to run; the values are
/// considered equal if *any* selected comparison says so.
///
/// Without any configuration, an absolute comparison with
/// [`DEFAULT_ABS_TOLERANCE`][DefaultTolerances::DEFAULT_ABS_TOLERANCE] and a relative one with
/// [`DEFAULT_REL_TOLERANCE`][DefaultTolerances::DEFAULT_REL_TOLERANCE] are performed.
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    left: &'a T,
    right: &'a T,
    kind: AssertionKind,
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
    abs: Option<T::Tolerance>,
    rel: Option<T::Tolerance>,
    ulps: Option<u32>,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        kind: AssertionKind,
        msg: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            kind,
            location: Location::caller(),
            msg,
            abs: None,
            rel: None,
            ulps: None,
        }
    }

    /// Compares the values by their absolute difference.
    ///
    /// Good for values close to zero.
    pub fn abs(&mut self, abs: T::Tolerance) -> &mut Self {
        self.abs = Some(abs);
        self
    }

    /// Compares the values by their difference relative to the larger magnitude.
    ///
    /// Any non-zero number needs a relative tolerance of at least 1.0 to compare equal to 0.0.
    pub fn rel(&mut self, rel: T::Tolerance) -> &mut Self {
        self.rel = Some(rel);
        self
    }

    /// Compares the values by counting the floats that fit between them.
    pub fn ulps(&mut self, ulps: u32) -> &mut Self {
        self.ulps = Some(ulps);
        self
    }

    fn equal(&self) -> bool {
        let abs = self
            .abs
            .map_or(false, |abs| T::abs_diff_eq(self.left, self.right, abs));
        let rel = self
            .rel
            .map_or(false, |rel| T::rel_diff_eq(self.left, self.right, rel));
        let ulps = self
            .ulps
            .map_or(false, |ulps| T::ulps_diff_eq(self.left, self.right, ulps));
        abs || rel || ulps
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    // `#[track_caller]` has no effect on `drop`, which is why the location is captured in `new`.
    fn drop(&mut self) {
        if self.abs.is_none() && self.rel.is_none() && self.ulps.is_none() {
            self.abs = Some(T::Tolerance::DEFAULT_ABS_TOLERANCE);
            self.rel = Some(T::Tolerance::DEFAULT_REL_TOLERANCE);
        }

        let failed = match self.kind {
            AssertionKind::Eq => !self.equal(),
            AssertionKind::Ne => self.equal(),
        };
        if failed {
            assert_failed(self.left, self.right, self.kind, self.location, self.msg);
        }
    }
}

#[cold]
fn assert_failed(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    kind: AssertionKind,
    location: &Location<'_>,
    msg: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = match kind {
        AssertionKind::Eq => "==",
        AssertionKind::Ne => "!=",
    };
    // The panic location reported by the runtime points into `drop`, so the caller's location is
    // part of the message.
    match msg {
        Some(msg) => panic!(
            "assertion `left {op} right` failed at {location}: {msg}\n  left: {left:?}\n right: {right:?}"
        ),
        None => panic!(
            "assertion `left {op} right` failed at {location}\n  left: {left:?}\n right: {right:?}"
        ),
    }
}

#[doc(hidden)]
#[derive(Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssertionKind {
    Eq,
    Ne,
}

/// Asserts that two expressions are approximately equal (using [`ApproxEq`]).
///
/// Returns an [`Asserter`] that can be used to pick the comparison and tolerance.
///
/// # Examples
///
/// ```
/// # use kiso_linalg::*;
/// let one = (0..10).fold(0.0, |acc, _| acc + 0.1);
/// assert_approx_eq!(one, 1.0);
///
/// assert_approx_eq!(vec2(1.0, 2.0), vec2(1.001, 1.999)).abs(0.01);
/// assert_approx_eq!(100.0, 99.0).rel(0.01);
/// assert_approx_eq!(1.0, 1.0 + f64::EPSILON).ulps(1);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Eq,
            ::core::option::Option::None,
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Eq,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

/// Asserts that two expressions are *not* approximately equal (using [`ApproxEq`]).
///
/// # Examples
///
/// ```
/// # use kiso_linalg::*;
/// assert_approx_ne!(100.0, 99.0).abs(0.5);
/// assert_approx_ne!(vec3(0.0, 0.0, 1.0), Vec3f::ZERO).abs(0.5);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::None,
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

#[cfg(test)]
mod tests {
    #[test]
    #[should_panic(expected = "assertion `left != right` failed")]
    fn fail_ne() {
        assert_approx_ne!(1.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "assertion `left == right` failed")]
    fn fail_eq() {
        assert_approx_eq!(1.0, 2.0);
    }

    #[test]
    #[should_panic(expected = "inverse drifted")]
    fn custom_message() {
        assert_approx_eq!(1.0, 2.0, "inverse drifted");
    }

    #[test]
    fn abs() {
        assert_approx_eq!(1.0, 1.0000005).abs(0.000001);
        assert_approx_ne!(1.0, 1.00001).abs(0.000001);
        assert_approx_eq!(-1.0, 1.0).abs(2.0);
    }

    #[test]
    fn rel() {
        assert_approx_eq!(1.0, 1.001).rel(0.01);
        assert_approx_eq!(1.0, -1.0).rel(2.0);
        assert_approx_eq!(0.0, 0.00001).rel(1.0);
    }

    #[test]
    fn ulps() {
        assert_approx_eq!(1.0, 1.0 + f32::EPSILON).ulps(1);
        assert_approx_ne!(1.0, 1.0 + f32::EPSILON).ulps(0);
        assert_approx_eq!(-0.0, 0.0).ulps(0);
    }

    #[test]
    fn non_finite() {
        assert_approx_ne!(f32::NAN, f32::NAN).abs(1.0);
        assert_approx_ne!(f32::NAN, 0.0).rel(1.0);
        assert_approx_ne!(f32::NAN, f32::NAN).ulps(100);

        assert_approx_eq!(f32::INFINITY, f32::INFINITY).abs(0.0);
        assert_approx_ne!(f32::INFINITY, f32::NEG_INFINITY).abs(f32::MAX);
        assert_approx_ne!(f32::INFINITY, f32::MAX).rel(10000.0);
        assert_approx_eq!(f32::MAX, f32::INFINITY).ulps(1);
    }
}
