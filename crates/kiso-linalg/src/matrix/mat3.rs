use crate::{
    traits::{Float, Number},
    vec2, vec3, Mat4, Matrix, One, Quat, Vec2, Vec3, Zero,
};

use super::axis_rotation;

impl<T: Zero + One> Matrix<T, 3> {
    /// The identity matrix.
    #[rustfmt::skip]
    pub const IDENTITY: Self = Self([
        [T::ONE,  T::ZERO, T::ZERO],
        [T::ZERO, T::ONE,  T::ZERO],
        [T::ZERO, T::ZERO, T::ONE ],
    ]);
}

impl<T: Number> Matrix<T, 3> {
    /// The cofactors of the first row, which the determinant and the inverse share.
    fn first_row_cofactors(&self) -> [T; 3] {
        let [[_, _, _], [a10, a11, a12], [a20, a21, a22]] = self.0;
        [
            a22 * a11 - a12 * a21,
            -a22 * a10 + a12 * a20,
            a21 * a10 - a11 * a20,
        ]
    }

    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        let [a00, a01, a02] = self.0[0];
        let [det01, det11, det21] = self.first_row_cofactors();
        a00 * det01 + a01 * det11 + a02 * det21
    }

    /// Returns the inverse of this matrix, or [`None`] if its determinant is exactly zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiso_linalg::*;
    /// let m = Mat3f::from_slice(&[2.0, 0.0, 0.0, 0.0, 4.0, 0.0, 0.0, 0.0, 0.5]);
    /// assert_eq!(m.inverse().unwrap().all(), [0.5, 0.0, 0.0, 0.0, 0.25, 0.0, 0.0, 0.0, 2.0]);
    ///
    /// let singular = Mat3f::from_slice(&[1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 0.0, 0.0, 1.0]);
    /// assert_eq!(singular.inverse(), None);
    /// ```
    pub fn inverse(&self) -> Option<Self> {
        let [[a00, a01, a02], [a10, a11, a12], [a20, a21, a22]] = self.0;
        let [det01, det11, det21] = self.first_row_cofactors();

        let det = a00 * det01 + a01 * det11 + a02 * det21;
        if det == T::ZERO {
            log::trace!("3x3 matrix is singular, cannot invert");
            return None;
        }
        let inv_det = T::ONE / det;

        Some(Self([
            [
                det01 * inv_det,
                (-a22 * a01 + a02 * a21) * inv_det,
                (a12 * a01 - a02 * a11) * inv_det,
            ],
            [
                det11 * inv_det,
                (a22 * a00 - a02 * a20) * inv_det,
                (-a12 * a00 + a02 * a10) * inv_det,
            ],
            [
                det21 * inv_det,
                (-a21 * a00 + a01 * a20) * inv_det,
                (a11 * a00 - a01 * a10) * inv_det,
            ],
        ]))
    }

    /// Inverts `self` in place.
    ///
    /// Returns [`None`] and leaves `self` untouched if the matrix is singular.
    pub fn inverse_mut(&mut self) -> Option<&mut Self> {
        *self = self.inverse()?;
        Some(self)
    }

    /// Transforms the point `v` by this affine matrix.
    ///
    /// The last column of the first two rows is added as a translation.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiso_linalg::*;
    /// let m = Mat3::from_slice(&[1, 2, 3, 4, 5, 6, 7, 8, 9]);
    /// assert_eq!(m.multiply_vec2(vec2(1, 2)), [8, 20]);
    /// ```
    pub fn multiply_vec2(&self, v: Vec2<T>) -> Vec2<T> {
        let [[m0, m1, m2], [m3, m4, m5], _] = self.0;
        vec2(v.x * m0 + v.y * m1 + m2, v.x * m3 + v.y * m4 + m5)
    }

    /// Transforms `v` by this matrix.
    pub fn multiply_vec3(&self, v: Vec3<T>) -> Vec3<T> {
        let [r0, r1, r2] = self.0;
        vec3(
            v.x * r0[0] + v.y * r0[1] + v.z * r0[2],
            v.x * r1[0] + v.y * r1[1] + v.z * r1[2],
            v.x * r2[0] + v.y * r2[1] + v.z * r2[2],
        )
    }

    /// Embeds this matrix into the upper-left corner of a 4x4 identity matrix.
    pub fn to_mat4(&self) -> Mat4<T> {
        let [[m0, m1, m2], [m3, m4, m5], [m6, m7, m8]] = self.0;
        let (o, l) = (T::ZERO, T::ONE);

        #[rustfmt::skip]
        let mat = Matrix::from_rows([
            [m0, m1, m2, o],
            [m3, m4, m5, o],
            [m6, m7, m8, o],
            [o,  o,  o,  l],
        ]);
        mat
    }
}

impl<T: Float> Matrix<T, 3> {
    /// Converts this rotation matrix to a quaternion.
    ///
    /// Extracts the quaternion component with the largest magnitude first and derives the others
    /// from it, which avoids dividing by values close to zero.
    ///
    /// The matrix is expected to be in the layout [`Quat::to_mat3`] produces.
    pub fn to_quat(&self) -> Quat<T> {
        let [[m00, m01, m02], [m10, m11, m12], [m20, m21, m22]] = self.0;

        let candidates = [
            m00 + m11 + m22,
            m00 - m11 - m22,
            m11 - m00 - m22,
            m22 - m00 - m11,
        ];
        let mut biggest_index = 0;
        for (i, &candidate) in candidates.iter().enumerate().skip(1) {
            if candidate > candidates[biggest_index] {
                biggest_index = i;
            }
        }

        let biggest = (candidates[biggest_index] + T::ONE).sqrt() * T::HALF;
        let mult = T::HALF * T::HALF / biggest;

        match biggest_index {
            0 => Quat::new(
                (m12 - m21) * mult,
                (m20 - m02) * mult,
                (m01 - m10) * mult,
                biggest,
            ),
            1 => Quat::new(
                biggest,
                (m01 + m10) * mult,
                (m20 + m02) * mult,
                (m12 - m21) * mult,
            ),
            2 => Quat::new(
                (m01 + m10) * mult,
                biggest,
                (m12 + m21) * mult,
                (m20 - m02) * mult,
            ),
            _ => Quat::new(
                (m20 + m02) * mult,
                (m12 + m21) * mult,
                biggest,
                (m01 - m10) * mult,
            ),
        }
    }

    /// Returns `self` composed with a rotation by `angle` radians around `axis`.
    ///
    /// Returns [`None`] if `axis` has zero length.
    #[must_use]
    pub fn rotate(mut self, angle: T, axis: Vec3<T>) -> Option<Self> {
        self.rotate_mut(angle, axis)?;
        Some(self)
    }

    /// Composes a rotation by `angle` radians around `axis` onto `self`.
    ///
    /// `axis` is normalized unless its length is exactly 1. Returns [`None`] and leaves `self`
    /// untouched if `axis` has zero length.
    pub fn rotate_mut(&mut self, angle: T, axis: Vec3<T>) -> Option<&mut Self> {
        let b = axis_rotation(angle, axis)?;
        let a = self.0;
        for (row, b_row) in self.0.iter_mut().zip(b) {
            for (col, elem) in row.iter_mut().enumerate() {
                *elem = a[0][col] * b_row[0] + a[1][col] * b_row[1] + a[2][col] * b_row[2];
            }
        }
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_3};

    use crate::{assert_approx_eq, Mat3, Mat3f, Vec3f};

    use super::*;

    #[test]
    fn multiply_vec2_is_affine() {
        let m = Mat3f::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(m.multiply_vec2(vec2(1.0, 2.0)), [8.0, 20.0]);
        assert_eq!(vec2(1.0, 2.0).transform_mat3(&m), [8.0, 20.0]);
    }

    #[test]
    fn multiply_vec3() {
        let m = Mat3f::from_slice(&[-1.0, 2.0, -3.0, 4.0, -5.0, 6.0, 7.0, -8.0, 9.0]);
        assert_eq!(m.multiply_vec3(vec3(5.0, -7.0, 6.0)), [-37.0, 91.0, 145.0]);
        assert_eq!(m * vec3(5.0, -7.0, 6.0), [-37.0, 91.0, 145.0]);
        assert_eq!(vec3(5.0, -7.0, 6.0).transform_mat3(&m), [-37.0, 91.0, 145.0]);
    }

    #[test]
    fn determinant() {
        #[rustfmt::skip]
        let m = Mat3::from_rows([
            [-2, -1,  2],
            [ 2,  1,  4],
            [-3,  3, -1],
        ]);
        assert_eq!(m.determinant(), 54);
        assert_eq!(m.transpose().determinant(), 54);
        assert_eq!(Mat3f::IDENTITY.determinant(), 1.0);
    }

    #[test]
    fn inverse() {
        #[rustfmt::skip]
        let m = Mat3f::from_rows([
            [-2.0, -1.0,  2.0],
            [ 2.0,  1.0,  4.0],
            [-3.0,  3.0, -1.0],
        ]);
        let inv = m.inverse().unwrap();
        assert_approx_eq!(inv * m, Mat3f::IDENTITY).abs(1e-6);
        assert_approx_eq!(m * inv, Mat3f::IDENTITY).abs(1e-6);

        let mut n = m;
        n.inverse_mut().unwrap();
        assert_eq!(n, inv);
    }

    #[test]
    fn singular() {
        crate::init_logger();

        let mut m = Mat3f::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(m.determinant(), 0.0);
        assert!(m.inverse_mut().is_none());
        assert_eq!(m.all(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    }

    #[test]
    fn to_mat4() {
        let m = Mat3::from_slice(&[1, 2, 3, 4, 5, 6, 7, 8, 9]).to_mat4();
        assert_eq!(
            m.all(),
            [1, 2, 3, 0, 4, 5, 6, 0, 7, 8, 9, 0, 0, 0, 0, 1]
        );
        assert_eq!(m.to_mat3(), Mat3::from_slice(&[1, 2, 3, 4, 5, 6, 7, 8, 9]));
    }

    #[test]
    fn rotate() {
        // Rows of the rotation matrix are composed from the left, which rotates row vectors.
        let m = Mat3f::IDENTITY.rotate(FRAC_PI_2, Vec3f::Z).unwrap();
        assert_approx_eq!(m.multiply_vec3(Vec3f::X), -Vec3f::Y).abs(1e-6);
        assert_approx_eq!(m.transpose().multiply_vec3(Vec3f::X), Vec3f::Y).abs(1e-6);

        // Non-unit axes are normalized.
        let n = Mat3f::IDENTITY.rotate(FRAC_PI_2, vec3(0.0, 0.0, 3.0)).unwrap();
        assert_approx_eq!(m, n).abs(1e-6);

        // Composing two rotations around the same axis adds their angles.
        let mut twice = Mat3f::IDENTITY;
        twice
            .rotate_mut(FRAC_PI_3, Vec3f::X)
            .unwrap()
            .rotate_mut(FRAC_PI_3, Vec3f::X)
            .unwrap();
        let once = Mat3f::IDENTITY.rotate(2.0 * FRAC_PI_3, Vec3f::X).unwrap();
        assert_approx_eq!(twice, once).abs(1e-6);
    }

    #[test]
    fn rotate_zero_axis() {
        crate::init_logger();

        let mut m = Mat3f::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert!(m.rotate_mut(1.0, Vec3f::ZERO).is_none());
        assert_eq!(m.all(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    }

    #[test]
    fn to_quat_matches_axis_angle() {
        let axes = [
            Vec3f::X,
            Vec3f::Y,
            Vec3f::Z,
            vec3(1.0, 2.0, 3.0).normalize(),
            vec3(-4.0, 0.5, 1.0).normalize(),
        ];
        // Angles chosen so that each of the four extraction branches is exercised.
        for axis in axes {
            for angle in [0.0, 0.5, 2.0, 3.0, -2.5] {
                let q = Mat3f::IDENTITY.rotate(angle, axis).unwrap().to_quat();
                let expected = Quat::from_axis_angle(axis, angle);
                let expected = if expected.w < 0.0 { -expected } else { expected };
                let q = if q.w < 0.0 { -q } else { q };
                assert_approx_eq!(q, expected, "axis={axis:?}, angle={angle}").abs(1e-5);
            }
        }
    }

    #[test]
    fn to_quat_identity() {
        assert_eq!(Mat3f::IDENTITY.to_quat(), Quat::IDENTITY);
    }
}
