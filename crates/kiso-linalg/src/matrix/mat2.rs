use crate::{traits::Number, vec2, Matrix, One, Trig, Vec2, Zero};

impl<T: Zero + One> Matrix<T, 2> {
    /// The identity matrix.
    pub const IDENTITY: Self = Self([[T::ONE, T::ZERO], [T::ZERO, T::ONE]]);
}

impl<T: Number> Matrix<T, 2> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    #[inline]
    pub fn determinant(&self) -> T {
        let [[a, b], [c, d]] = self.0;
        a * d - b * c
    }

    /// Returns the inverse of this matrix, or [`None`] if its determinant is exactly zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiso_linalg::*;
    /// let m = Mat2f::from_slice(&[1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m.inverse().unwrap().all(), [-2.0, 1.0, 1.5, -0.5]);
    /// assert_eq!(Mat2f::ZERO.inverse(), None);
    /// ```
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == T::ZERO {
            log::trace!("2x2 matrix is singular, cannot invert");
            return None;
        }

        let [[a, b], [c, d]] = self.0;
        Some(Self([[d / det, -b / det], [-c / det, a / det]]))
    }

    /// Inverts `self` in place.
    ///
    /// Returns [`None`] and leaves `self` untouched if the matrix is singular.
    pub fn inverse_mut(&mut self) -> Option<&mut Self> {
        *self = self.inverse()?;
        Some(self)
    }

    /// Transforms `v` by this matrix.
    pub fn multiply_vec2(&self, v: Vec2<T>) -> Vec2<T> {
        let [[a, b], [c, d]] = self.0;
        vec2(v.x * a + v.y * b, v.x * c + v.y * d)
    }

    /// Returns `self` composed with a rotation by `angle` radians.
    #[must_use]
    pub fn rotate(mut self, angle: T) -> Self
    where
        T: Trig,
    {
        self.rotate_mut(angle);
        self
    }

    /// Composes a rotation by `angle` radians onto `self`.
    pub fn rotate_mut(&mut self, angle: T) -> &mut Self
    where
        T: Trig,
    {
        let [[a11, a12], [a21, a22]] = self.0;
        let (sin, cos) = (angle.sin(), angle.cos());

        self.0 = [
            [a11 * cos + a12 * sin, a11 * -sin + a12 * cos],
            [a21 * cos + a22 * sin, a21 * -sin + a22 * cos],
        ];
        self
    }

    /// Returns `self` with column 0 scaled by `factors.x` and column 1 by `factors.y`.
    #[must_use]
    pub fn scale(mut self, factors: Vec2<T>) -> Self {
        self.scale_mut(factors);
        self
    }

    /// Scales column 0 of `self` by `factors.x` and column 1 by `factors.y`.
    pub fn scale_mut(&mut self, factors: Vec2<T>) -> &mut Self {
        for row in &mut self.0 {
            row[0] = row[0] * factors.x;
            row[1] = row[1] * factors.y;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use crate::{assert_approx_eq, Mat2, Mat2f};

    use super::*;

    fn fixture() -> Mat2f {
        Mat2f::from_slice(&[1.0, 2.0, 3.0, 4.0])
    }

    #[test]
    fn transpose() {
        assert_eq!(fixture().transpose().all(), [1.0, 3.0, 2.0, 4.0]);
    }

    #[test]
    fn determinant() {
        assert_eq!(fixture().determinant(), -2.0);
        assert_eq!(Mat2f::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat2::<i32>::ZERO.determinant(), 0);
    }

    #[test]
    fn inverse() {
        let inv = fixture().inverse().unwrap();
        assert_eq!(inv.all(), [-2.0, 1.0, 1.5, -0.5]);
        assert_eq!(inv.inverse().unwrap(), fixture());
    }

    #[test]
    fn singular_inverse_leaves_receiver() {
        crate::init_logger();

        let mut m = Mat2f::from_slice(&[1.0, 2.0, 2.0, 4.0]);
        assert!(m.inverse_mut().is_none());
        assert_eq!(m.all(), [1.0, 2.0, 2.0, 4.0]);

        let mut m = fixture();
        m.inverse_mut().unwrap().transpose_mut();
        assert_eq!(m.all(), [-2.0, 1.5, 1.0, -0.5]);
    }

    #[test]
    fn multiply_vec2() {
        assert_eq!(fixture().multiply_vec2(vec2(1.0, 1.0)), [3.0, 7.0]);
        assert_eq!(vec2(1.0, 1.0).transform_mat2(&fixture()), [3.0, 7.0]);
    }

    #[test]
    fn rotate() {
        let m = Mat2f::IDENTITY.rotate(FRAC_PI_2);
        assert_approx_eq!(m, Mat2f::from_slice(&[0.0, -1.0, 1.0, 0.0])).abs(1e-6);

        let mut m = Mat2f::IDENTITY;
        m.rotate_mut(PI).rotate_mut(PI);
        assert_approx_eq!(m, Mat2f::IDENTITY).abs(1e-6);
    }

    #[test]
    fn scale() {
        let m = fixture().scale(vec2(2.0, 10.0));
        assert_eq!(m.all(), [2.0, 20.0, 6.0, 40.0]);
    }
}
