use std::{array, fmt};

use crate::{
    traits::{Float, Number},
    Mat2, Mat3, Mat4, One, Quat, Zero,
};

mod ops;
pub(crate) mod view;

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;

/// An `N`-element vector storing elements of type `T`.
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions create vectors from their
///   elements.
/// - [`Vector::splat`] copies a value into each element, [`Vector::from_fn`] invokes a closure
///   with each element index.
/// - Arrays convert into vectors via [`From`].
/// - [`Vector::ZERO`] and [`Vector::ONE`] are all-zeroes and all-ones. `Vector::X`, `Vector::Y`,
///   `Vector::Z` and `Vector::W` are the unit vectors along each axis, and 3-dimensional vectors
///   additionally have [`Vec3::UP`], [`Vec3::RIGHT`] and [`Vec3::FORWARD`].
///
/// # Element Access
///
/// - Fields `x`, `y`, `z`, and `w`, depending on the dimension.
/// - [`Vector::at`] and [`Vector::set`], or the [`Index`] and [`IndexMut`] impls.
/// - [`Vector::into_array`].
///
/// # Arithmetic
///
/// Every operation comes in a form that leaves its operands untouched and returns a new vector,
/// and a form that mutates the receiver in place:
///
/// | operation | new value | in place |
/// |---|---|---|
/// | addition | `a + b`, [`Vector::sum`] | `a += b` |
/// | subtraction | `a - b`, [`Vector::difference`] | `a -= b` |
/// | element-wise multiplication | `a * b`, [`Vector::product`] | `a *= b` |
/// | element-wise division | `a / b`, [`Vector::quotient`] | `a /= b` |
/// | scaling | `a * s`, [`Vector::scale`] | `a *= s`, [`Vector::scale_mut`] |
/// | negation | `-a`, [`Vector::negate`] | [`Vector::negate_mut`] |
/// | normalization | [`Vector::normalize`] | [`Vector::normalize_mut`] |
///
/// The `*_mut` methods return `&mut Self`, so calls can be chained.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element set to 0.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: One, const N: usize> Vector<T, N> {
    /// A vector with each element set to 1.
    pub const ONE: Self = Self([T::ONE; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);

    /// The canonical "up" direction, `(0, 1, 0)`.
    ///
    /// This is the default up vector of [`Matrix::look_at_up`][crate::Matrix::look_at_up].
    pub const UP: Self = Self::Y;
    /// The canonical "right" direction, `(1, 0, 0)`.
    pub const RIGHT: Self = Self::X;
    /// The canonical "forward" direction, `(0, 0, 1)`.
    pub const FORWARD: Self = Self::Z;
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiso_linalg::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiso_linalg::*;
    /// let v = Vector::from_fn(|i| i as f32 * 0.5);
    /// assert_eq!(v, vec3(0.0, 0.5, 1.0));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two vectors into one that contains tuples of the original elements.
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut iter = self.0.into_iter().zip(other.0);
        Vector::from_fn(|_| iter.next().unwrap())
    }

    /// Converts this vector into an `N`-element array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than `N`.
    #[inline]
    pub fn at(&self, index: usize) -> T
    where
        T: Copy,
    {
        self.0[index]
    }

    /// Replaces the element at `index` with `value`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than `N`.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> &mut Self {
        self.0[index] = value;
        self
    }

    /// Sets every element to zero.
    pub fn reset(&mut self) -> &mut Self
    where
        T: Zero,
    {
        self.0.iter_mut().for_each(|elem| *elem = T::ZERO);
        self
    }
}

impl<T: Number, const N: usize> Vector<T, N> {
    /// Computes the dot product between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiso_linalg::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// ```
    pub fn dot(self, other: Self) -> T {
        self.0
            .into_iter()
            .zip(other.0)
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Returns the squared length of this vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiso_linalg::*;
    /// assert_eq!(vec2(4, 3).length2(), 25);
    /// ```
    pub fn length2(&self) -> T {
        self.dot(*self)
    }

    /// Returns the squared distance between `self` and `other`.
    pub fn distance2(self, other: Self) -> T {
        (other - self).length2()
    }

    /// Returns `a + b`.
    pub fn sum(a: Self, b: Self) -> Self {
        a + b
    }

    /// Returns `a - b`.
    pub fn difference(a: Self, b: Self) -> Self {
        a - b
    }

    /// Returns the element-wise product of `a` and `b`.
    pub fn product(a: Self, b: Self) -> Self {
        a * b
    }

    /// Returns the element-wise quotient of `a` and `b`.
    pub fn quotient(a: Self, b: Self) -> Self {
        a / b
    }

    /// Returns `self` with every element multiplied by `factor`.
    #[must_use]
    pub fn scale(self, factor: T) -> Self {
        self * factor
    }

    /// Multiplies every element of `self` by `factor`.
    pub fn scale_mut(&mut self, factor: T) -> &mut Self {
        *self = self.scale(factor);
        self
    }

    /// Returns `self` with every element negated.
    #[must_use]
    pub fn negate(self) -> Self {
        -self
    }

    /// Negates every element of `self`.
    pub fn negate_mut(&mut self) -> &mut Self {
        *self = -*self;
        self
    }

    /// Linearly interpolates between `a` (at `t = 0`) and `b` (at `t = 1`).
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiso_linalg::*;
    /// let v = Vector::mix(vec2(0.0, 10.0), vec2(4.0, 20.0), 0.25);
    /// assert_eq!(v, vec2(1.0, 12.5));
    /// ```
    pub fn mix(a: Self, b: Self, t: T) -> Self {
        a + (b - a) * t
    }
}

impl<T: Float, const N: usize> Vector<T, N> {
    /// Returns the length of this vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiso_linalg::*;
    /// assert_eq!(vec2(3.0, 4.0).length(), 5.0);
    /// ```
    pub fn length(&self) -> T {
        self.length2().sqrt()
    }

    /// Returns the distance between `self` and `other`.
    pub fn distance(self, other: Self) -> T {
        self.distance2(other).sqrt()
    }

    /// Returns a unit vector pointing in the same direction as `self`.
    ///
    /// A vector whose length is exactly 1 is returned unchanged, and a zero-length vector
    /// normalizes to [`Vector::ZERO`] instead of a vector of NaNs.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiso_linalg::*;
    /// assert_eq!(vec3(0.0, 0.0, 4.0).normalize(), vec3(0.0, 0.0, 1.0));
    /// assert_eq!(Vec3f::ZERO.normalize(), Vec3f::ZERO);
    /// ```
    #[must_use]
    pub fn normalize(self) -> Self {
        let length = self.length();
        if length == T::ONE {
            return self;
        }
        if length == T::ZERO {
            return Self::ZERO;
        }

        self * (T::ONE / length)
    }

    /// Normalizes `self` in place (see [`Vector::normalize`]).
    pub fn normalize_mut(&mut self) -> &mut Self {
        *self = self.normalize();
        self
    }

    /// Returns the unit vector pointing from `to` towards `from`.
    ///
    /// Returns [`Vector::ZERO`] if both points coincide.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiso_linalg::*;
    /// let dir = Vector::direction(vec2(5.0, 1.0), vec2(1.0, 1.0));
    /// assert_eq!(dir, Vec2f::X);
    /// ```
    pub fn direction(from: Self, to: Self) -> Self {
        (from - to).normalize()
    }

    /// Returns whether every element of `self` is within
    /// [`Float::DEFAULT_THRESHOLD`] of the corresponding element of `other`.
    pub fn equals(&self, other: &Self) -> bool {
        self.equals_within(other, T::DEFAULT_THRESHOLD)
    }

    /// Returns whether every element of `self` differs from the corresponding element of `other`
    /// by at most `threshold`.
    ///
    /// Non-finite elements never compare equal.
    pub fn equals_within(&self, other: &Self, threshold: T) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(&a, &b)| (a - b).abs() <= threshold)
    }
}

impl<T> Vector<T, 2> {
    /// Computes the cross product of `self` and `other`, interpreted as 3D vectors with a Z
    /// coordinate of 0.
    ///
    /// Only the Z coordinate of the result can be non-zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiso_linalg::*;
    /// assert_eq!(Vec2f::X.cross(Vec2f::Y), Vec3f::Z);
    /// ```
    pub fn cross(self, other: Self) -> Vector<T, 3>
    where
        T: Number,
    {
        let [x1, y1] = self.0;
        let [x2, y2] = other.0;
        vec3(T::ZERO, T::ZERO, x1 * y2 - y1 * x2)
    }

    /// Transforms `self` by `matrix` (see [`Matrix::multiply_vec2`][crate::Matrix::multiply_vec2]).
    pub fn transform_mat2(self, matrix: &Mat2<T>) -> Self
    where
        T: Number,
    {
        matrix.multiply_vec2(self)
    }

    /// Transforms `self` by the affine `matrix`, treating its last column as a translation.
    pub fn transform_mat3(self, matrix: &Mat3<T>) -> Self
    where
        T: Number,
    {
        matrix.multiply_vec2(self)
    }
}

impl<T> Vector<T, 3> {
    /// Computes the cross product of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiso_linalg::*;
    /// assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec3f::Z);
    /// assert_eq!(Vec3f::Y.cross(Vec3f::X), -Vec3f::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.0;
        let [b1, b2, b3] = other.0;

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }

    /// Transforms `self` by `matrix` (see [`Matrix::multiply_vec3`][crate::Matrix::multiply_vec3]).
    pub fn transform_mat3(self, matrix: &Mat3<T>) -> Self
    where
        T: Number,
    {
        matrix.multiply_vec3(self)
    }

    /// Rotates `self` by the quaternion `rotation`.
    pub fn rotate_by(self, rotation: &Quat<T>) -> Self
    where
        T: Number,
    {
        rotation.rotate_vec3(self)
    }

    /// Converts Euler angles (in radians) stored in `self` into a quaternion.
    ///
    /// The X, Y and Z elements are the rotation angles around the respective axes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiso_linalg::*;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// let q = vec3(0.0, 0.0, FRAC_PI_2).to_quat();
    /// assert_approx_eq!(q, Quat::from_axis_angle(Vec3f::Z, FRAC_PI_2)).abs(1e-6);
    /// ```
    pub fn to_quat(self) -> Quat<T>
    where
        T: Float,
    {
        let [x, y, z] = self.0;
        let (sx, cx) = ((x * T::HALF).sin(), (x * T::HALF).cos());
        let (sy, cy) = ((y * T::HALF).sin(), (y * T::HALF).cos());
        let (sz, cz) = ((z * T::HALF).sin(), (z * T::HALF).cos());

        Quat::new(
            sx * cy * cz - cx * sy * sz,
            cx * sy * cz + sx * cy * sz,
            cx * cy * sz - sx * sy * cz,
            cx * cy * cz + sx * sy * sz,
        )
    }
}

impl<T> Vector<T, 4> {
    /// Transforms `self` by `matrix` (see [`Matrix::multiply_vec4`][crate::Matrix::multiply_vec4]).
    pub fn transform_mat4(self, matrix: &Mat4<T>) -> Self
    where
        T: Number,
    {
        matrix.multiply_vec4(self)
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(elem, f)?;
        }
        f.write_str(")")
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}
