mod ops;
mod view;

use crate::{
    traits::{Float, Number},
    vec3, vec4, Mat3, Mat4, Matrix, One, Vec3, Vector, Zero,
};

/// A quaternion with [`f32`] components.
pub type Quatf = Quat<f32>;

/// A quaternion consisting of 3 imaginary numbers and a real number.
///
/// Unit-length quaternions ("*versors*") are commonly used to represent rotations in 3D space.
///
/// Quaternions are represented similar to a 4-dimensional vector, with an `x`, `y`, `z` and `w`
/// component. `x`, `y` and `z` are the imaginary parts, `w` is the real part.
///
/// `a * b` is the Hamilton product, which applies the rotation `b` first, then `a`.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Quat<T> {
    vec: Vector<T, 4>,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Quat<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Quat<T> {}

impl<T: Zero + One> Quat<T> {
    /// The multiplicative identity.
    ///
    /// This is a unit quaternion that will not change a vector it is multiplied with.
    pub const IDENTITY: Self = Self {
        vec: vec4(T::ZERO, T::ZERO, T::ZERO, T::ONE),
    };
}

impl<T> Quat<T> {
    /// Creates a quaternion from its components.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self {
            vec: vec4(x, y, z, w),
        }
    }

    /// Creates a quaternion from a 4-dimensional [`Vector`].
    ///
    /// The `x`, `y`, and `z` coordinates correspond to the imaginary parts, while the `w` component
    /// corresponds to the real part of the quaternion.
    #[inline]
    pub const fn from_vec(vec: Vector<T, 4>) -> Self {
        Self { vec }
    }

    /// Returns the components of this quaternion as a vector.
    #[inline]
    pub const fn as_vec(&self) -> &Vector<T, 4> {
        &self.vec
    }

    /// Converts this quaternion into a vector of its components.
    #[inline]
    pub fn into_vec(self) -> Vector<T, 4> {
        self.vec
    }

    /// Returns the component at `index` (`x`, `y`, `z`, `w` in that order).
    ///
    /// # Panics
    ///
    /// Panics if `index` is greater than 3.
    #[inline]
    pub fn at(&self, index: usize) -> T
    where
        T: Copy,
    {
        self.vec.at(index)
    }

    /// Replaces the component at `index` with `value`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is greater than 3.
    pub fn set(&mut self, index: usize, value: T) -> &mut Self {
        self.vec.set(index, value);
        self
    }

    /// Sets every component to zero.
    pub fn reset(&mut self) -> &mut Self
    where
        T: Zero,
    {
        self.vec.reset();
        self
    }
}

impl<T: Number> Quat<T> {
    /// Computes the dot product of `self` and `other`, treated as 4-dimensional vectors.
    pub fn dot(self, other: Self) -> T {
        self.vec.dot(other.vec)
    }

    /// Returns the squared length of this quaternion.
    pub fn length2(&self) -> T {
        self.vec.length2()
    }

    /// Returns the conjugate of this quaternion, `(-x, -y, -z, w)`.
    ///
    /// For unit quaternions, this is the inverse rotation.
    #[must_use]
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Replaces `self` with its conjugate.
    pub fn conjugate_mut(&mut self) -> &mut Self {
        *self = self.conjugate();
        self
    }

    /// Returns the component-wise sum of `a` and `b`.
    pub fn sum(a: Self, b: Self) -> Self {
        a + b
    }

    /// Returns the component-wise difference of `a` and `b`.
    pub fn difference(a: Self, b: Self) -> Self {
        a - b
    }

    /// Returns the Hamilton product `a * b`.
    pub fn product(a: Self, b: Self) -> Self {
        a * b
    }

    /// Replaces `self` with the Hamilton product `self * other`.
    pub fn multiply(&mut self, other: &Self) -> &mut Self {
        *self = *self * *other;
        self
    }

    /// Rotates `v` by this quaternion (computes `q v q*`).
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiso_linalg::*;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// let q = Quat::from_axis_angle(Vec3f::Z, FRAC_PI_2);
    /// assert_approx_eq!(q.rotate_vec3(Vec3f::X), Vec3f::Y).abs(1e-6);
    /// ```
    pub fn rotate_vec3(&self, v: Vec3<T>) -> Vec3<T> {
        let [qx, qy, qz, qw] = self.vec.into_array();
        let [x, y, z] = v.into_array();

        let ix = qw * x + qy * z - qz * y;
        let iy = qw * y + qz * x - qx * z;
        let iz = qw * z + qx * y - qy * x;
        let iw = -qx * x - qy * y - qz * z;

        vec3(
            ix * qw + iw * -qx + iy * -qz - iz * -qy,
            iy * qw + iw * -qy + iz * -qx - ix * -qz,
            iz * qw + iw * -qz + ix * -qy - iy * -qx,
        )
    }

    /// Converts this quaternion to a 3x3 rotation matrix.
    ///
    /// The resulting matrix rotates *row* vectors: `q.to_mat3().transpose().multiply_vec3(v)`
    /// equals `q.rotate_vec3(v)`. [`Matrix::to_quat`] is the inverse operation.
    pub fn to_mat3(&self) -> Mat3<T> {
        let [x, y, z, w] = self.vec.into_array();
        let (x2, y2, z2) = (x + x, y + y, z + z);

        let (xx, xy, xz) = (x * x2, x * y2, x * z2);
        let (yy, yz, zz) = (y * y2, y * z2, z * z2);
        let (wx, wy, wz) = (w * x2, w * y2, w * z2);
        let l = T::ONE;

        #[rustfmt::skip]
        let mat = Matrix::from_rows([
            [l - (yy + zz), xy + wz,       xz - wy      ],
            [xy - wz,       l - (xx + zz), yz + wx      ],
            [xz + wy,       yz - wx,       l - (xx + yy)],
        ]);
        mat
    }

    /// Converts this quaternion to a 4x4 rotation matrix (see [`Quat::to_mat3`]).
    pub fn to_mat4(&self) -> Mat4<T> {
        self.to_mat3().to_mat4()
    }
}

impl<T: Float> Quat<T> {
    /// Creates a quaternion rotating by `angle` radians around `axis`.
    ///
    /// `axis` is expected to be normalized.
    pub fn from_axis_angle(axis: Vec3<T>, angle: T) -> Self {
        let half = angle * T::HALF;
        let sin = half.sin();
        Self::new(axis.x * sin, axis.y * sin, axis.z * sin, half.cos())
    }

    /// Creates a quaternion from Euler angles in radians (see [`Vector::to_quat`]).
    pub fn from_euler(angles: Vec3<T>) -> Self {
        angles.to_quat()
    }

    /// Returns the length of this quaternion.
    ///
    /// If the length is not equal to one, multiplying a vector with this quaternion will scale the
    /// vector in addition to rotating it.
    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(&self) -> T {
        self.vec.length()
    }

    /// Returns a normalized copy of this quaternion (whose length equals one).
    ///
    /// The zero quaternion normalizes to itself.
    #[must_use]
    pub fn normalize(self) -> Self {
        Self {
            vec: self.vec.normalize(),
        }
    }

    /// Normalizes `self` in place.
    pub fn normalize_mut(&mut self) -> &mut Self {
        *self = self.normalize();
        self
    }

    /// Returns the multiplicative inverse of this quaternion, or [`None`] if it is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiso_linalg::*;
    /// let q = Quatf::new(1.0, 2.0, 3.0, 4.0);
    /// assert_approx_eq!(q * q.inverse().unwrap(), Quat::IDENTITY).abs(1e-6);
    /// assert_eq!(Quatf::new(0.0, 0.0, 0.0, 0.0).inverse(), None);
    /// ```
    pub fn inverse(&self) -> Option<Self> {
        let dot = self.dot(*self);
        if dot == T::ZERO {
            log::trace!("zero quaternion has no inverse");
            return None;
        }

        let inv_dot = T::ONE / dot;
        Some(Self::new(
            self.x * -inv_dot,
            self.y * -inv_dot,
            self.z * -inv_dot,
            self.w * inv_dot,
        ))
    }

    /// Inverts `self` in place.
    ///
    /// Returns [`None`] and leaves `self` untouched if it is the zero quaternion.
    pub fn inverse_mut(&mut self) -> Option<&mut Self> {
        *self = self.inverse()?;
        Some(self)
    }

    /// Returns `self` with `w` recomputed from `x`, `y` and `z`, assuming unit length.
    ///
    /// The result always has a non-positive `w`.
    #[must_use]
    pub fn calculate_w(self) -> Self {
        let [x, y, z, _] = self.vec.into_array();
        let w = -(T::ONE - x * x - y * y - z * z).abs().sqrt();
        Self::new(x, y, z, w)
    }

    /// Recomputes `w` from `x`, `y` and `z` in place (see [`Quat::calculate_w`]).
    pub fn calculate_w_mut(&mut self) -> &mut Self {
        *self = self.calculate_w();
        self
    }

    /// Returns the rotation angle around the Z axis, in radians.
    pub fn roll(&self) -> T {
        let [x, y, z, w] = self.vec.into_array();
        (T::TWO * (x * y + w * z)).atan2(w * w + x * x - y * y - z * z)
    }

    /// Returns the rotation angle around the X axis, in radians.
    pub fn pitch(&self) -> T {
        let [x, y, z, w] = self.vec.into_array();
        (T::TWO * (y * z + w * x)).atan2(w * w - x * x - y * y + z * z)
    }

    /// Returns the rotation angle around the Y axis, in radians.
    ///
    /// Rotations by a positive angle around +Y yield a negative yaw.
    pub fn yaw(&self) -> T {
        let [x, y, z, w] = self.vec.into_array();
        (T::TWO * (x * z - w * y)).asin()
    }

    /// Spherically interpolates between `a` (at `t = 0`) and `b` (at `t = 1`).
    ///
    /// Unlike [`Quat::slerp`], this does not take the shortest path. If `a` and `b` are equal (or
    /// exactly opposite) `a` is returned, and if they are close enough that the interpolation
    /// becomes numerically unstable, they are blended half-and-half instead.
    pub fn mix(a: Self, b: Self, t: T) -> Self {
        let cos_half_theta = a.dot(b);
        if cos_half_theta.abs() >= T::ONE {
            return a;
        }

        let half_theta = cos_half_theta.acos();
        let sin_half_theta = (T::ONE - cos_half_theta * cos_half_theta).sqrt();
        if sin_half_theta.abs() < T::from_f64(0.001) {
            return a * T::HALF + b * T::HALF;
        }

        let ratio_a = ((T::ONE - t) * half_theta).sin() / sin_half_theta;
        let ratio_b = (t * half_theta).sin() / sin_half_theta;
        a * ratio_a + b * ratio_b
    }

    /// Spherically interpolates between `a` (at `t = 0`) and `b` (at `t = 1`) along the shortest
    /// path.
    ///
    /// `t` is clamped to the `[0, 1]` range. Nearly parallel quaternions are interpolated linearly.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiso_linalg::*;
    /// let a = Quat::from_axis_angle(Vec3f::Y, 0.0);
    /// let b = Quat::from_axis_angle(Vec3f::Y, 1.0);
    /// assert_approx_eq!(Quat::slerp(a, b, 0.25), Quat::from_axis_angle(Vec3f::Y, 0.25)).abs(1e-6);
    /// ```
    pub fn slerp(a: Self, b: Self, t: T) -> Self {
        if t <= T::ZERO {
            return a;
        }
        if t >= T::ONE {
            return b;
        }

        let mut cos = a.dot(b);
        let mut b = b;
        if cos < T::ZERO {
            b = -b;
            cos = -cos;
        }

        let (k0, k1) = if cos > T::from_f64(0.9999) {
            (T::ONE - t, t)
        } else {
            let sin = (T::ONE - cos * cos).sqrt();
            let angle = sin.atan2(cos);
            let one_over_sin = T::ONE / sin;
            (
                ((T::ONE - t) * angle).sin() * one_over_sin,
                (t * angle).sin() * one_over_sin,
            )
        };

        a * k0 + b * k1
    }

    /// Returns whether every component of `self` is within [`Float::DEFAULT_THRESHOLD`] of the
    /// corresponding component of `other`.
    pub fn equals(&self, other: &Self) -> bool {
        self.equals_within(other, T::DEFAULT_THRESHOLD)
    }

    /// Returns whether every component of `self` differs from the corresponding component of
    /// `other` by at most `threshold`.
    pub fn equals_within(&self, other: &Self, threshold: T) -> bool {
        self.vec.equals_within(&other.vec, threshold)
    }
}

impl<T> From<Vector<T, 4>> for Quat<T> {
    #[inline]
    fn from(vec: Vector<T, 4>) -> Self {
        Self { vec }
    }
}
