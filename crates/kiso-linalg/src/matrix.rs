use std::{array, fmt};

use crate::{
    traits::{Float, Number},
    One, Vec3, Vector, Zero,
};

mod mat2;
mod mat3;
mod mat4;
mod ops;

/// A 2x2 matrix.
///
/// Composition follows the same rule as the larger sizes:
/// [`Matrix::product(a, b)`][Matrix::product] is *b·a*, not *a·b*. Use `a * b` for the latter.
pub type Mat2<T> = Matrix<T, 2>;
/// A 2x2 matrix with [`f32`] elements.
pub type Mat2f = Mat2<f32>;
/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;

/// A row-major square matrix with `N` rows and `N` columns, and element type `T`.
///
/// # Construction
///
/// - [`Matrix::from_rows`] fills a matrix with raw elements, given as an array of rows.
/// - [`Matrix::from_slice`] reads a flat, row-major list of elements (missing elements are 0).
/// - [`Matrix::from_fn`] creates each element by invoking a closure with its row and column.
/// - [`Matrix::ZERO`] is a matrix with every element set to 0, `Matrix::IDENTITY` has 1 on its
///   diagonal and 0 everywhere else.
/// - 4x4 matrices can also be created as projection or view matrices ([`Matrix::frustum`],
///   [`Matrix::perspective`], [`Matrix::orthographic`], [`Matrix::look_at`]).
///
/// # Element Access
///
/// [`Matrix`] implements the [`Index`] and [`IndexMut`] traits for tuples of `(usize, usize)`. The
/// first element of the tuple is the *row*, the second is the *column*. Indices are 0-based.
///
/// The flat index `i` used by [`Matrix::at`] and [`Matrix::set`] addresses the element at row
/// `i / N`, column `i % N`.
///
/// ```
/// # use kiso_linalg::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1],
///     [2, 3],
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat.at(1), 1);
/// assert_eq!(mat.at(2), 2);
/// ```
///
/// # Composition
///
/// `a * b` is the ordinary matrix product *a·b*. [`Matrix::multiply`] and [`Matrix::product`]
/// instead compose with the operand on the *left*: `a.multiply(&b)` replaces `a` with *b·a*, which
/// is also what [`Matrix::product(a, b)`][Matrix::product] returns.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const N: usize>([[T; N]; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Matrix<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Matrix<T, N> {}

impl<T: Zero + Copy, const N: usize> Matrix<T, N> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([[T::ZERO; N]; N]);
}

impl<T, const N: usize> Matrix<T, N> {
    /// Creates a [`Matrix`] from an array of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiso_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// assert_eq!(mat.row(1), [2, 3]);
    /// assert_eq!(mat.col(1), [1, 3]);
    /// ```
    #[inline]
    pub const fn from_rows(rows: [[T; N]; N]) -> Self {
        Self(rows)
    }

    /// Creates a [`Matrix`] from a flat, row-major list of elements.
    ///
    /// Elements missing from `values` are initialized with [`T::ZERO`][Zero::ZERO], surplus
    /// elements are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiso_linalg::*;
    /// let mat = Mat2::from_slice(&[1, 2, 3]);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 0],
    /// ]));
    /// ```
    pub fn from_slice(values: &[T]) -> Self
    where
        T: Zero + Copy,
    {
        Self::from_fn(|row, col| values.get(row * N + col).copied().unwrap_or(T::ZERO))
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiso_linalg::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1],
    ///     [10, 11],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|row| array::from_fn(|col| cb(row, col))))
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, N>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|row| row.map(|v| f(v))))
    }

    /// Returns the element at the flat row-major `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than `N * N`.
    #[inline]
    pub fn at(&self, index: usize) -> T
    where
        T: Copy,
    {
        self.0[index / N][index % N]
    }

    /// Replaces the element at the flat row-major `index` with `value`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than `N * N`.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> &mut Self {
        self.0[index / N][index % N] = value;
        self
    }

    /// Replaces every element with the row-major `values`.
    ///
    /// # Panics
    ///
    /// Panics if `values` does not contain exactly `N * N` elements.
    pub fn set_all(&mut self, values: &[T]) -> &mut Self
    where
        T: Copy,
    {
        assert_eq!(
            values.len(),
            N * N,
            "{0}x{0} matrix needs {1} elements",
            N,
            N * N
        );
        for (i, value) in values.iter().enumerate() {
            self.0[i / N][i % N] = *value;
        }
        self
    }

    /// Returns a copy of every element, in row-major order.
    pub fn all(&self) -> Vec<T>
    where
        T: Copy,
    {
        self.0.iter().flatten().copied().collect()
    }

    /// Returns the row at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than `N`.
    pub fn row(&self, index: usize) -> Vector<T, N>
    where
        T: Copy,
    {
        self.0[index].into()
    }

    /// Returns the column at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not less than `N`.
    pub fn col(&self, index: usize) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|row| self.0[row][index])
    }

    /// Sets every element to zero.
    pub fn reset(&mut self) -> &mut Self
    where
        T: Zero + Copy,
    {
        *self = Self::ZERO;
        self
    }

    /// Overwrites `self` with the identity matrix.
    pub fn set_identity(&mut self) -> &mut Self
    where
        T: Zero + One,
    {
        *self = Self::from_fn(|row, col| if row == col { T::ONE } else { T::ZERO });
        self
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiso_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    ///     [6, 7, 8],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 3, 6],
    ///     [1, 4, 7],
    ///     [2, 5, 8],
    /// ]));
    /// ```
    #[must_use]
    pub fn transpose(mut self) -> Self
    where
        T: Copy,
    {
        self.transpose_mut();
        self
    }

    /// Transposes `self` in place.
    pub fn transpose_mut(&mut self) -> &mut Self
    where
        T: Copy,
    {
        for row in 0..N {
            for col in row + 1..N {
                let tmp = self.0[row][col];
                self.0[row][col] = self.0[col][row];
                self.0[col][row] = tmp;
            }
        }
        self
    }
}

impl<T: Number, const N: usize> Matrix<T, N> {
    /// Composes `other` onto `self` from the left, replacing `self` with `other * self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiso_linalg::*;
    /// let translate = Mat3::from_rows([
    ///     [1, 0, 5],
    ///     [0, 1, 0],
    ///     [0, 0, 1],
    /// ]);
    /// let mut m = Mat3::IDENTITY;
    /// m.multiply(&translate).multiply(&translate);
    /// assert_eq!(m.multiply_vec2(vec2(0, 0)), [10, 0]);
    /// ```
    pub fn multiply(&mut self, other: &Self) -> &mut Self {
        *self = *other * *self;
        self
    }

    /// Returns `b * a`, the composition of `a` followed by `b`.
    ///
    /// This matches [`Matrix::multiply`]: `Matrix::product(a, b)` equals `a` after
    /// `a.multiply(&b)`.
    pub fn product(a: Self, b: Self) -> Self {
        b * a
    }
}

impl<T: Float, const N: usize> Matrix<T, N> {
    /// Returns whether every element of `self` is within [`Float::DEFAULT_THRESHOLD`] of the
    /// corresponding element of `other`.
    pub fn equals(&self, other: &Self) -> bool {
        self.equals_within(other, T::DEFAULT_THRESHOLD)
    }

    /// Returns whether every element of `self` differs from the corresponding element of `other`
    /// by at most `threshold`.
    pub fn equals_within(&self, other: &Self, threshold: T) -> bool {
        self.0
            .iter()
            .flatten()
            .zip(other.0.iter().flatten())
            .all(|(&a, &b)| (a - b).abs() <= threshold)
    }
}

/// Rows of the matrix rotating by `angle` radians around `axis`.
///
/// The axis is normalized unless its length is exactly 1. Returns [`None`] for a zero-length axis.
fn axis_rotation<T: Float>(angle: T, axis: Vec3<T>) -> Option<[[T; 3]; 3]> {
    let length = axis.length();
    if length == T::ZERO {
        log::trace!("cannot rotate around a zero-length axis");
        return None;
    }

    let axis = if length == T::ONE {
        axis
    } else {
        axis * (T::ONE / length)
    };
    let [x, y, z] = axis.into_array();
    let (s, c) = (angle.sin(), angle.cos());
    let t = T::ONE - c;

    #[rustfmt::skip]
    let rows = [
        [x * x * t + c,     y * x * t + z * s, z * x * t - y * s],
        [x * y * t - z * s, y * y * t + c,     z * y * t + x * s],
        [x * z * t + y * s, y * z * t - x * s, z * z * t + c    ],
    ];
    Some(rows)
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Matrix<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Rows always go on a single line, even with `{:#?}`.
        struct FormatRow<'a, T: fmt::Debug, const N: usize>(&'a [T; N]);
        impl<'a, T: fmt::Debug, const N: usize> fmt::Debug for FormatRow<'a, T, N> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (col, elem) in self.0.iter().enumerate() {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", elem)?;
                }
                write!(f, "]")
            }
        }

        let mut list = f.debug_list();
        for row in &self.0 {
            list.entry(&FormatRow(row));
        }
        list.finish()
    }
}

impl<T, const N: usize> Default for Matrix<T, N>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T, const N: usize> From<[[T; N]; N]> for Matrix<T, N> {
    #[inline]
    fn from(rows: [[T; N]; N]) -> Self {
        Self(rows)
    }
}
