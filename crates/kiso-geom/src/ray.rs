use std::fmt;

use kiso_linalg::{approx::ApproxEq, Float, Vec2f};

/// A 2D ray starting at `origin` and extending along `direction`.
///
/// The direction does not have to be normalized.
#[derive(Clone, Copy, PartialEq)]
pub struct Ray2 {
    pub origin: Vec2f,
    pub direction: Vec2f,
}

impl Ray2 {
    #[inline]
    pub fn new(origin: impl Into<Vec2f>, direction: impl Into<Vec2f>) -> Self {
        Self {
            origin: origin.into(),
            direction: direction.into(),
        }
    }

    /// Returns whether `self` and `other` point along the same line.
    ///
    /// The directions are divided component-wise, and the rays are parallel if both quotients
    /// agree within [`Float::DEFAULT_THRESHOLD`]. A zero X component in `other`'s direction makes
    /// the X quotient non-finite, in which case this returns `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiso_geom::Ray2;
    /// let a = Ray2::new([1.0, 0.0], [1.0, 3.0]);
    /// let b = Ray2::new([0.0, 5.0], [-2.0, -6.0]);
    /// assert!(a.is_parallel(&b));
    /// ```
    pub fn is_parallel(&self, other: &Ray2) -> bool {
        let factors = self.direction / other.direction;
        if !factors.x.is_finite() {
            log::trace!("direction quotient {} is not finite", factors);
            return false;
        }
        (factors.x - factors.y).abs() <= f32::DEFAULT_THRESHOLD
    }

    /// Returns the angle between the directions of `self` and `other`, in radians.
    ///
    /// The result is in the range `[0, π]`.
    pub fn angle_to(&self, other: &Ray2) -> f32 {
        let d1 = self.direction.normalize();
        let d2 = other.direction.normalize();
        d1.dot(d2).acos()
    }
}

impl fmt::Debug for Ray2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ray2 {} -> {}", self.origin, self.direction)
    }
}

impl ApproxEq for Ray2 {
    type Tolerance = f32;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.origin.abs_diff_eq(&other.origin, abs_tolerance)
            && self.direction.abs_diff_eq(&other.direction, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.origin.rel_diff_eq(&other.origin, rel_tolerance)
            && self.direction.rel_diff_eq(&other.direction, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.origin.ulps_diff_eq(&other.origin, ulps_tolerance)
            && self.direction.ulps_diff_eq(&other.direction, ulps_tolerance)
    }
}
