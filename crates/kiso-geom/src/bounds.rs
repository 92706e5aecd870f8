use std::{fmt, mem};

use kiso_linalg::{approx::ApproxEq, Vec2f};

use crate::Ray2;

/// An axis-aligned 2D box spanning from `min` to `max`.
///
/// [`Bounds2::new`] takes the corners as given, so `min` is not guaranteed to be smaller than
/// `max` on every axis. Such inverted bounds have a negative [`Bounds2::area`] and behave like
/// empty boxes in the containment and overlap tests. Use [`Bounds2::new_ordered`] to normalize
/// the corners.
#[derive(Clone, Copy, PartialEq)]
pub struct Bounds2 {
    pub min: Vec2f,
    pub max: Vec2f,
}

impl Bounds2 {
    /// Creates bounds from two corners, exactly as given.
    #[inline]
    pub fn new(min: impl Into<Vec2f>, max: impl Into<Vec2f>) -> Self {
        Self {
            min: min.into(),
            max: max.into(),
        }
    }

    /// Creates bounds from two corners, swapping their coordinates on every axis where `min` is
    /// larger than `max`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiso_geom::Bounds2;
    /// let bounds = Bounds2::new_ordered([-5.0, 1.0], [5.0, -2.0]);
    /// assert_eq!(bounds.min, [-5.0, -2.0]);
    /// assert_eq!(bounds.max, [5.0, 1.0]);
    /// ```
    pub fn new_ordered(min: impl Into<Vec2f>, max: impl Into<Vec2f>) -> Self {
        let mut bounds = Self::new(min, max);
        for axis in 0..2 {
            if bounds.min[axis] > bounds.max[axis] {
                log::trace!("swapping inverted bounds on axis {axis}");
                mem::swap(&mut bounds.min[axis], &mut bounds.max[axis]);
            }
        }
        bounds
    }

    /// Returns the extent of the bounds along each axis (`max - min`).
    #[inline]
    pub fn dimensions(&self) -> Vec2f {
        self.max - self.min
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Returns the area covered by the bounds.
    ///
    /// This is negative if exactly one axis is inverted.
    #[inline]
    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// Returns whether `self` and `other` overlap.
    ///
    /// Bounds that only touch along an edge or at a corner do not overlap.
    pub fn intersects_bounds(&self, other: &Bounds2) -> bool {
        self.max.x > other.min.x
            && self.min.x < other.max.x
            && self.max.y > other.min.y
            && self.min.y < other.max.y
    }

    /// Returns whether the line through `ray` crosses the bounds.
    ///
    /// This uses the slab method: the ray's parameter interval inside the X slab and inside the Y
    /// slab must overlap. Zero direction components produce infinite parameters, which makes rays
    /// parallel to an axis work without special-casing them.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiso_geom::{Bounds2, Ray2};
    /// let bounds = Bounds2::new([-5.0, -4.0], [5.0, 3.0]);
    /// assert!(bounds.intersects_ray(&Ray2::new([10.0, 10.0], [1.0, 1.0])));
    /// assert!(!bounds.intersects_ray(&Ray2::new([10.0, 10.0], [1.0, -1.0])));
    /// ```
    pub fn intersects_ray(&self, ray: &Ray2) -> bool {
        let (tx_min, tx_max) = self.slab(ray, 0);
        let (ty_min, ty_max) = self.slab(ray, 1);
        !(tx_min > ty_max || ty_min > tx_max)
    }

    fn slab(&self, ray: &Ray2, axis: usize) -> (f32, f32) {
        let t_min = (self.min[axis] - ray.origin[axis]) / ray.direction[axis];
        let t_max = (self.max[axis] - ray.origin[axis]) / ray.direction[axis];
        if t_min > t_max {
            (t_max, t_min)
        } else {
            (t_min, t_max)
        }
    }

    /// Returns whether `point` lies inside the bounds or on their boundary.
    pub fn contains_point(&self, point: impl Into<Vec2f>) -> bool {
        let point = point.into();
        self.min.x <= point.x
            && point.x <= self.max.x
            && self.min.y <= point.y
            && point.y <= self.max.y
    }
}

impl fmt::Debug for Bounds2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bounds2 {} - {}", self.min, self.max)
    }
}

impl ApproxEq for Bounds2 {
    type Tolerance = f32;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.min.abs_diff_eq(&other.min, abs_tolerance)
            && self.max.abs_diff_eq(&other.max, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.min.rel_diff_eq(&other.min, rel_tolerance)
            && self.max.rel_diff_eq(&other.max, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.min.ulps_diff_eq(&other.min, ulps_tolerance)
            && self.max.ulps_diff_eq(&other.max, ulps_tolerance)
    }
}

#[cfg(test)]
mod tests {
    use kiso_linalg::vec2;

    use super::*;

    #[test]
    fn ordering() {
        crate::init_logger();

        let bounds = Bounds2::new([5.0, 1.0], [-5.0, -2.0]);
        assert_eq!(bounds.min, [5.0, 1.0]);
        assert_eq!(bounds.max, [-5.0, -2.0]);

        let bounds = Bounds2::new_ordered([5.0, 1.0], [-5.0, -2.0]);
        assert_eq!(bounds.min, [-5.0, -2.0]);
        assert_eq!(bounds.max, [5.0, 1.0]);

        let ordered = Bounds2::new([-1.0, -1.0], [1.0, 1.0]);
        assert_eq!(Bounds2::new_ordered(ordered.min, ordered.max), ordered);
    }

    #[test]
    fn dimensions_and_area() {
        let bounds = Bounds2::new([-5.0, -4.0], [5.0, 3.0]);
        assert_eq!(bounds.dimensions(), vec2(10.0, 7.0));
        assert_eq!(bounds.width(), 10.0);
        assert_eq!(bounds.height(), 7.0);
        assert_eq!(bounds.area(), 70.0);

        let inverted = Bounds2::new([5.0, 0.0], [0.0, 2.0]);
        assert_eq!(inverted.dimensions(), vec2(-5.0, 2.0));
        assert_eq!(inverted.area(), -10.0);
        assert_eq!(Bounds2::new([1.0, 1.0], [1.0, 3.0]).area(), 0.0);
    }

    #[test]
    fn intersects_bounds() {
        let a = Bounds2::new([0.0, 0.0], [2.0, 2.0]);
        assert!(a.intersects_bounds(&a));
        assert!(a.intersects_bounds(&Bounds2::new([1.0, 1.0], [3.0, 3.0])));
        assert!(a.intersects_bounds(&Bounds2::new([0.5, 0.5], [1.5, 1.5])));
        assert!(Bounds2::new([0.5, 0.5], [1.5, 1.5]).intersects_bounds(&a));
        assert!(a.intersects_bounds(&Bounds2::new([-1.0, 1.0], [3.0, 1.5])));

        // Touching edges and corners.
        assert!(!a.intersects_bounds(&Bounds2::new([2.0, 0.0], [3.0, 2.0])));
        assert!(!a.intersects_bounds(&Bounds2::new([2.0, 2.0], [3.0, 3.0])));
        assert!(!a.intersects_bounds(&Bounds2::new([0.0, -1.0], [2.0, 0.0])));

        assert!(!a.intersects_bounds(&Bounds2::new([3.0, 3.0], [4.0, 4.0])));
    }

    #[test]
    fn intersects_ray() {
        let bounds = Bounds2::new([-5.0, -4.0], [5.0, 3.0]);
        assert!(bounds.intersects_ray(&Ray2::new([0.0, 0.0], [1.0, 0.5])));
        assert!(bounds.intersects_ray(&Ray2::new([-10.0, 0.0], [1.0, 0.0])));
        assert!(!bounds.intersects_ray(&Ray2::new([-10.0, 10.0], [1.0, 0.0])));

        // Axis-parallel rays divide by zero on the other axis.
        assert!(bounds.intersects_ray(&Ray2::new([0.0, 10.0], [0.0, -1.0])));
        assert!(!bounds.intersects_ray(&Ray2::new([10.0, 10.0], [0.0, -1.0])));
        assert!(!bounds.intersects_ray(&Ray2::new([-6.0, 10.0], [0.0, 1.0])));
    }

    #[test]
    fn contains_point() {
        let bounds = Bounds2::new([-5.0, -4.0], [5.0, 3.0]);
        assert!(bounds.contains_point([0.0, 0.0]));
        assert!(bounds.contains_point([-5.0, -4.0]));
        assert!(bounds.contains_point([5.0, 3.0]));
        assert!(bounds.contains_point([5.0, -4.0]));
        assert!(bounds.contains_point(vec2(-5.0, 0.0)));
        assert!(!bounds.contains_point([5.001, 0.0]));
        assert!(!bounds.contains_point([0.0, -4.001]));

        let inverted = Bounds2::new([5.0, 3.0], [-5.0, -4.0]);
        assert!(!inverted.contains_point([0.0, 0.0]));
    }

    #[test]
    fn fmt() {
        let bounds = Bounds2::new([-1.5, 0.0], [2.0, 4.0]);
        assert_eq!(format!("{bounds:?}"), "Bounds2 (-1.5, 0) - (2, 4)");
    }
}
