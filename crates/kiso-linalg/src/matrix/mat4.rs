use crate::{
    traits::{Float, Number},
    vec3, vec4, Mat3, Matrix, One, Vec3, Vec4, Zero,
};

use super::axis_rotation;

impl<T: Zero + One> Matrix<T, 4> {
    /// The identity matrix.
    #[rustfmt::skip]
    pub const IDENTITY: Self = Self([
        [T::ONE,  T::ZERO, T::ZERO, T::ZERO],
        [T::ZERO, T::ONE,  T::ZERO, T::ZERO],
        [T::ZERO, T::ZERO, T::ONE,  T::ZERO],
        [T::ZERO, T::ZERO, T::ZERO, T::ONE ],
    ]);
}

impl<T: Number> Matrix<T, 4> {
    /// The 2x2 determinants of the top two and the bottom two rows, shared by the determinant and
    /// the inverse.
    fn subdeterminants(&self) -> [T; 12] {
        let [[a00, a01, a02, a03], [a10, a11, a12, a13], [a20, a21, a22, a23], [a30, a31, a32, a33]] =
            self.0;
        [
            a00 * a11 - a01 * a10,
            a00 * a12 - a02 * a10,
            a00 * a13 - a03 * a10,
            a01 * a12 - a02 * a11,
            a01 * a13 - a03 * a11,
            a02 * a13 - a03 * a12,
            a20 * a31 - a21 * a30,
            a20 * a32 - a22 * a30,
            a20 * a33 - a23 * a30,
            a21 * a32 - a22 * a31,
            a21 * a33 - a23 * a31,
            a22 * a33 - a23 * a32,
        ]
    }

    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    pub fn determinant(&self) -> T {
        let [det00, det01, det02, det03, det04, det05, det06, det07, det08, det09, det10, det11] =
            self.subdeterminants();
        det00 * det11 - det01 * det10 + det02 * det09 + det03 * det08 - det04 * det07
            + det05 * det06
    }

    /// Returns the inverse of this matrix, or [`None`] if its determinant is exactly zero.
    pub fn inverse(&self) -> Option<Self> {
        let [[a00, a01, a02, a03], [a10, a11, a12, a13], [a20, a21, a22, a23], [a30, a31, a32, a33]] =
            self.0;
        let [det00, det01, det02, det03, det04, det05, det06, det07, det08, det09, det10, det11] =
            self.subdeterminants();

        let det = det00 * det11 - det01 * det10 + det02 * det09 + det03 * det08 - det04 * det07
            + det05 * det06;
        if det == T::ZERO {
            log::trace!("4x4 matrix is singular, cannot invert");
            return None;
        }
        let inv_det = T::ONE / det;

        let rows = [
            [
                a11 * det11 - a12 * det10 + a13 * det09,
                -a01 * det11 + a02 * det10 - a03 * det09,
                a31 * det05 - a32 * det04 + a33 * det03,
                -a21 * det05 + a22 * det04 - a23 * det03,
            ],
            [
                -a10 * det11 + a12 * det08 - a13 * det07,
                a00 * det11 - a02 * det08 + a03 * det07,
                -a30 * det05 + a32 * det02 - a33 * det01,
                a20 * det05 - a22 * det02 + a23 * det01,
            ],
            [
                a10 * det10 - a11 * det08 + a13 * det06,
                -a00 * det10 + a01 * det08 - a03 * det06,
                a30 * det04 - a31 * det02 + a33 * det00,
                -a20 * det04 + a21 * det02 - a23 * det00,
            ],
            [
                -a10 * det09 + a11 * det07 - a12 * det06,
                a00 * det09 - a01 * det07 + a02 * det06,
                -a30 * det03 + a31 * det01 - a32 * det00,
                a20 * det03 - a21 * det01 + a22 * det00,
            ],
        ];
        Some(Self(rows.map(|row| row.map(|elem| elem * inv_det))))
    }

    /// Inverts `self` in place.
    ///
    /// Returns [`None`] and leaves `self` untouched if the matrix is singular.
    pub fn inverse_mut(&mut self) -> Option<&mut Self> {
        *self = self.inverse()?;
        Some(self)
    }

    /// Transforms the point `v` by this matrix.
    ///
    /// `v` is treated as having a W coordinate of 1, so the last column of the first three rows is
    /// added as a translation.
    pub fn multiply_vec3(&self, v: Vec3<T>) -> Vec3<T> {
        let [r0, r1, r2, _] = self.0;
        vec3(
            r0[0] * v.x + r0[1] * v.y + r0[2] * v.z + r0[3],
            r1[0] * v.x + r1[1] * v.y + r1[2] * v.z + r1[3],
            r2[0] * v.x + r2[1] * v.y + r2[2] * v.z + r2[3],
        )
    }

    /// Transforms `v` by this matrix.
    pub fn multiply_vec4(&self, v: Vec4<T>) -> Vec4<T> {
        let [r0, r1, r2, r3] = self.0;
        let [x, y, z, w] = v.into_array();
        vec4(
            r0[0] * x + r0[1] * y + r0[2] * z + r0[3] * w,
            r1[0] * x + r1[1] * y + r1[2] * z + r1[3] * w,
            r2[0] * x + r2[1] * y + r2[2] * z + r2[3] * w,
            r3[0] * x + r3[1] * y + r3[2] * z + r3[3] * w,
        )
    }

    /// Returns the upper-left 3x3 block of this matrix.
    pub fn to_mat3(&self) -> Mat3<T> {
        Matrix::from_fn(|row, col| self.0[row][col])
    }

    /// Returns the inverse of the upper-left 3x3 block, or [`None`] if that block is singular.
    pub fn to_inverse_mat3(&self) -> Option<Mat3<T>> {
        self.to_mat3().inverse()
    }

    /// Returns `self` with a translation by `offset` applied.
    #[must_use]
    pub fn translate(mut self, offset: Vec3<T>) -> Self {
        self.translate_mut(offset);
        self
    }

    /// Applies a translation by `offset` to `self`.
    ///
    /// The first three rows, weighted by the components of `offset`, are added to the last row.
    pub fn translate_mut(&mut self, offset: Vec3<T>) -> &mut Self {
        let [r0, r1, r2, _] = self.0;
        for (col, elem) in self.0[3].iter_mut().enumerate() {
            *elem = *elem + r0[col] * offset.x + r1[col] * offset.y + r2[col] * offset.z;
        }
        self
    }

    /// Returns `self` with row 0 scaled by `factors.x`, row 1 by `factors.y` and row 2 by
    /// `factors.z`.
    #[must_use]
    pub fn scale(mut self, factors: Vec3<T>) -> Self {
        self.scale_mut(factors);
        self
    }

    /// Scales row 0 of `self` by `factors.x`, row 1 by `factors.y` and row 2 by `factors.z`.
    pub fn scale_mut(&mut self, factors: Vec3<T>) -> &mut Self {
        for (row, factor) in self.0.iter_mut().zip(factors.into_array()) {
            for elem in row {
                *elem = *elem * factor;
            }
        }
        self
    }
}

impl<T: Float> Matrix<T, 4> {
    /// Returns `self` composed with a rotation by `angle` radians around `axis`.
    ///
    /// Returns [`None`] if `axis` has zero length.
    #[must_use]
    pub fn rotate(mut self, angle: T, axis: Vec3<T>) -> Option<Self> {
        self.rotate_mut(angle, axis)?;
        Some(self)
    }

    /// Composes a rotation by `angle` radians around `axis` onto the first three rows of `self`.
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

    /// Creates a perspective projection matrix from the planes of a view frustum.
    pub fn frustum(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        let rl = right - left;
        let tb = top - bottom;
        let fne = far - near;
        let o = T::ZERO;

        #[rustfmt::skip]
        let mat = Self([
            [near * T::TWO / rl,   o,                    o,                        o     ],
            [o,                    near * T::TWO / tb,   o,                        o     ],
            [(right + left) / rl,  (top + bottom) / tb,  -(far + near) / fne,     -T::ONE],
            [o,                    o,                    -(far * near * T::TWO) / fne, o ],
        ]);
        mat
    }

    /// Creates a perspective projection matrix.
    ///
    /// `fov` is the vertical field of view in *degrees*, `aspect` the ratio of width to height.
    ///
    /// # Examples
    ///
    /// ```
    /// # use kiso_linalg::*;
    /// let p = Mat4f::perspective(90.0, 2.0, 1.0, 100.0);
    /// assert_approx_eq!(p, Mat4f::frustum(-2.0, 2.0, -1.0, 1.0, 1.0, 100.0)).abs(1e-6);
    /// ```
    pub fn perspective(fov: T, aspect: T, near: T, far: T) -> Self {
        let top = near * (fov * T::PI / T::from_f64(360.0)).tan();
        let right = top * aspect;
        Self::frustum(-right, right, -top, top, near, far)
    }

    /// Creates an orthographic projection matrix.
    pub fn orthographic(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        let rl = right - left;
        let tb = top - bottom;
        let fne = far - near;
        let o = T::ZERO;

        #[rustfmt::skip]
        let mat = Self([
            [T::TWO / rl,          o,                    o,                    o     ],
            [o,                    T::TWO / tb,          o,                    o     ],
            [o,                    o,                    -T::TWO / fne,        o     ],
            [-(left + right) / rl, -(top + bottom) / tb, -(far + near) / fne,  T::ONE],
        ]);
        mat
    }

    /// Creates a view matrix for a camera at `position` looking at `target`.
    ///
    /// Returns the identity matrix if `position` and `target` are equal (see [`Vector::equals`]).
    ///
    /// [`Vector::equals`]: crate::Vector::equals
    pub fn look_at(position: Vec3<T>, target: Vec3<T>, up: Vec3<T>) -> Self {
        if position.equals(&target) {
            log::trace!("look_at position and target coincide, using identity view");
            return Self::IDENTITY;
        }

        let z = (position - target).normalize();
        let x = up.cross(z).normalize();
        let y = z.cross(x).normalize();
        let o = T::ZERO;

        #[rustfmt::skip]
        let mat = Self([
            [x.x, y.x, z.x, o],
            [x.y, y.y, z.y, o],
            [x.z, y.z, z.z, o],
            [-x.dot(position), -y.dot(position), -z.dot(position), T::ONE],
        ]);
        mat
    }

    /// Creates a view matrix for a camera at `position` looking at `target`, with
    /// [`Vec3::UP`] as the up direction.
    pub fn look_at_up(position: Vec3<T>, target: Vec3<T>) -> Self {
        Self::look_at(position, target, Vec3::UP)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use crate::{assert_approx_eq, Mat3f, Mat4, Mat4f, Vec3f};

    use super::*;

    #[rustfmt::skip]
    fn fixture() -> Mat4f {
        Mat4f::from_rows([
            [ 2.0, -1.0,  0.0,  3.0],
            [ 1.0,  4.0, -2.0,  0.5],
            [ 0.0,  1.0,  5.0, -1.0],
            [-3.0,  0.0,  2.0,  1.0],
        ])
    }

    #[test]
    fn determinant() {
        assert_eq!(Mat4f::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat4f::ZERO.determinant(), 0.0);

        #[rustfmt::skip]
        let upper = Mat4::from_rows([
            [2, 7, 1, 8],
            [0, 3, 5, 2],
            [0, 0, 4, 9],
            [0, 0, 0, 5],
        ]);
        assert_eq!(upper.determinant(), 2 * 3 * 4 * 5);
        assert_eq!(upper.transpose().determinant(), 120);
    }

    #[test]
    fn inverse() {
        let m = fixture();
        let inv = m.inverse().unwrap();
        assert_approx_eq!(inv * m, Mat4f::IDENTITY).abs(1e-5);
        assert_approx_eq!(m * inv, Mat4f::IDENTITY).abs(1e-5);
        assert_eq!(Mat4f::IDENTITY.inverse(), Some(Mat4f::IDENTITY));
    }

    #[test]
    fn singular() {
        let mut m = fixture();
        m.set(4, 4.0).set(5, -2.0).set(6, 0.0).set(7, 6.0);
        assert_eq!(m.determinant(), 0.0);
        let before = m;
        assert!(m.inverse_mut().is_none());
        assert_eq!(m, before);
    }

    #[test]
    fn multiply_vec() {
        #[rustfmt::skip]
        let m = Mat4f::from_rows([
            [1.0, 0.0, 0.0, 10.0],
            [0.0, 2.0, 0.0, 20.0],
            [0.0, 0.0, 3.0, 30.0],
            [0.0, 0.0, 0.0,  1.0],
        ]);
        assert_eq!(m.multiply_vec3(vec3(1.0, 1.0, 1.0)), [11.0, 22.0, 33.0]);
        assert_eq!(m.multiply_vec4(vec4(1.0, 1.0, 1.0, 0.0)), [1.0, 2.0, 3.0, 0.0]);
        assert_eq!(vec4(1.0, 1.0, 1.0, 1.0).transform_mat4(&m), [11.0, 22.0, 33.0, 1.0]);
        assert_eq!(m * vec4(1.0, 1.0, 1.0, 1.0), [11.0, 22.0, 33.0, 1.0]);
    }

    #[test]
    fn to_mat3() {
        let m = fixture();
        assert_eq!(
            m.to_mat3(),
            Mat3f::from_slice(&[2.0, -1.0, 0.0, 1.0, 4.0, -2.0, 0.0, 1.0, 5.0])
        );
        assert_eq!(m.to_inverse_mat3(), m.to_mat3().inverse());
        assert!(m.to_inverse_mat3().is_some());
        assert_eq!(Mat4f::ZERO.to_inverse_mat3(), None);
    }

    #[test]
    fn translate() {
        let m = Mat4f::IDENTITY.translate(vec3(1.0, 2.0, 3.0));
        assert_eq!(m.row(3), [1.0, 2.0, 3.0, 1.0]);

        let mut m = Mat4f::IDENTITY;
        m.scale_mut(vec3(2.0, 2.0, 2.0))
            .translate_mut(vec3(1.0, 0.0, -1.0));
        assert_eq!(m.row(3), [2.0, 0.0, -2.0, 1.0]);
    }

    #[test]
    fn scale() {
        let m = fixture().scale(vec3(2.0, 0.0, -1.0));
        assert_eq!(m.row(0), [4.0, -2.0, 0.0, 6.0]);
        assert_eq!(m.row(1), [0.0, 0.0, -0.0, 0.0]);
        assert_eq!(m.row(2), [-0.0, -1.0, -5.0, 1.0]);
        assert_eq!(m.row(3), fixture().row(3));
    }

    #[test]
    fn rotate_matches_mat3() {
        let axis = vec3(1.0, -2.0, 0.5);
        let m4 = fixture().rotate(1.2, axis).unwrap();
        let m3 = fixture().to_mat3().rotate(1.2, axis).unwrap();
        assert_approx_eq!(m4.to_mat3(), m3).abs(1e-6);
        assert_eq!(m4.row(3), fixture().row(3));

        let mut m = fixture();
        assert!(m.rotate_mut(FRAC_PI_2, Vec3f::ZERO).is_none());
        assert_eq!(m, fixture());
    }

    #[test]
    fn orthographic() {
        let m = Mat4f::orthographic(-2.0, 2.0, -1.0, 1.0, 0.0, 10.0);
        assert_eq!(m.row(0), [0.5, 0.0, 0.0, 0.0]);
        assert_eq!(m.row(1), [0.0, 1.0, 0.0, 0.0]);
        assert_eq!(m.row(2), [0.0, 0.0, -0.2, 0.0]);
        assert_eq!(m.row(3), [0.0, 0.0, -1.0, 1.0]);
    }

    #[test]
    fn frustum() {
        let m = Mat4f::frustum(-1.0, 1.0, -1.0, 1.0, 1.0, 3.0);
        assert_eq!(m.row(0), [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(m.row(1), [0.0, 1.0, 0.0, 0.0]);
        assert_eq!(m.row(2), [0.0, 0.0, -2.0, -1.0]);
        assert_eq!(m.row(3), [0.0, 0.0, -3.0, 0.0]);
    }

    #[test]
    fn perspective() {
        let p = Mat4f::perspective(90.0, 1.0, 1.0, 3.0);
        assert_approx_eq!(p, Mat4f::frustum(-1.0, 1.0, -1.0, 1.0, 1.0, 3.0)).abs(1e-6);
    }

    #[test]
    fn look_at() {
        crate::init_logger();

        let position = vec3(0.0, 0.0, 5.0);
        let view = Mat4f::look_at_up(position, Vec3f::ZERO);
        assert_eq!(view, Mat4f::look_at(position, Vec3f::ZERO, Vec3f::UP));

        // Looking down the negative Z axis from (0, 0, 5) only translates.
        assert_approx_eq!(view.to_mat3(), Mat3f::IDENTITY).abs(1e-6);
        assert_eq!(view.row(3), [-0.0, -0.0, -5.0, 1.0]);

        assert_eq!(Mat4f::look_at_up(position, position), Mat4f::IDENTITY);

        // Infinite points never coincide, so the basis degenerates to NaN.
        let far = vec3(f32::INFINITY, 0.0, 0.0);
        let view = Mat4f::look_at_up(far, far);
        assert_ne!(view, Mat4f::IDENTITY);
        assert!(view.all().iter().any(|v| v.is_nan()));
        let nearly = position + vec3(0.0, 0.0, 1e-7);
        assert_eq!(Mat4f::look_at_up(position, nearly), Mat4f::IDENTITY);
    }
}
