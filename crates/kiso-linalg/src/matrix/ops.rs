use std::ops::{Index, IndexMut, Mul};

use crate::{approx::ApproxEq, traits::Number, Matrix, Vector};

impl<T, const N: usize> Index<(usize, usize)> for Matrix<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[row][col]
    }
}

impl<T, const N: usize> IndexMut<(usize, usize)> for Matrix<T, N> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[row][col]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U, const N: usize> PartialEq<Matrix<U, N>> for Matrix<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, N>) -> bool {
        self.0.eq(&other.0)
    }
}

impl<T, const N: usize> Eq for Matrix<T, N> where T: Eq {}

impl<T, const N: usize> ApproxEq for Matrix<T, N>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        for (a, b) in self.0.iter().zip(&other.0) {
            if !a.abs_diff_eq(b, abs_tolerance) {
                return false;
            }
        }
        true
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        for (a, b) in self.0.iter().zip(&other.0) {
            if !a.rel_diff_eq(b, rel_tolerance) {
                return false;
            }
        }
        true
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        for (a, b) in self.0.iter().zip(&other.0) {
            if !a.ulps_diff_eq(b, ulps_tolerance) {
                return false;
            }
        }
        true
    }
}

/// Matrix * Column Vector.
///
/// Each output element is a row of the matrix dotted with the vector.
impl<T, const N: usize> Mul<Vector<T, N>> for Matrix<T, N>
where
    T: Number,
{
    type Output = Vector<T, N>;

    fn mul(self, rhs: Vector<T, N>) -> Self::Output {
        Vector::from_fn(|row| (0..N).fold(T::ZERO, |acc, col| acc + self[(row, col)] * rhs[col]))
    }
}

/// Matrix * Matrix.
impl<T, const N: usize> Mul<Matrix<T, N>> for Matrix<T, N>
where
    T: Number,
{
    type Output = Matrix<T, N>;

    fn mul(self, rhs: Matrix<T, N>) -> Self::Output {
        Matrix::from_fn(|i, j| (0..N).fold(T::ZERO, |acc, k| acc + self[(i, k)] * rhs[(k, j)]))
    }
}

/// Matrix * Scalar.
impl<T, const N: usize> Mul<T> for Matrix<T, N>
where
    T: Number,
{
    type Output = Matrix<T, N>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}
