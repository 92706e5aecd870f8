use std::{
    fmt,
    ops::{Add, Index, IndexMut, Mul, Neg, Sub},
};

use crate::{approx::ApproxEq, traits::Number, vec4, Quat, Vec3};

impl<T, U> PartialEq<Quat<U>> for Quat<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Quat<U>) -> bool {
        self.vec == other.vec
    }
}

impl<T: Eq> Eq for Quat<T> {}

impl<T: ApproxEq> ApproxEq for Quat<T> {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.vec.abs_diff_eq(&other.vec, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.vec.rel_diff_eq(&other.vec, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.vec.ulps_diff_eq(&other.vec, ulps_tolerance)
    }
}

impl<T> Index<usize> for Quat<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.vec[index]
    }
}

impl<T> IndexMut<usize> for Quat<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.vec[index]
    }
}

/// Hamilton product.
impl<T: Number> Mul for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let [ax, ay, az, aw] = self.vec.into_array();
        let [bx, by, bz, bw] = rhs.vec.into_array();
        Self::from_vec(vec4(
            ax * bw + aw * bx + ay * bz - az * by,
            ay * bw + aw * by + az * bx - ax * bz,
            az * bw + aw * bz + ax * by - ay * bx,
            aw * bw - ax * bx - ay * by - az * bz,
        ))
    }
}

impl<T: Number> Mul<T> for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::from_vec(self.vec * rhs)
    }
}

/// Rotates a vector.
impl<T: Number> Mul<Vec3<T>> for Quat<T> {
    type Output = Vec3<T>;

    fn mul(self, rhs: Vec3<T>) -> Vec3<T> {
        self.rotate_vec3(rhs)
    }
}

impl<T: Number> Add for Quat<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_vec(self.vec + rhs.vec)
    }
}

impl<T: Number> Sub for Quat<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_vec(self.vec - rhs.vec)
    }
}

impl<T: Number> Neg for Quat<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_vec(-self.vec)
    }
}

impl<T: fmt::Debug> fmt::Debug for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quat")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .field("w", &self.w)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}i + {}j + {}k + {}", self.x, self.y, self.z, self.w)
    }
}
