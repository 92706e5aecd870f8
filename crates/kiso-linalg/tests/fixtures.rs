use std::f32::consts::FRAC_PI_2;

use kiso_linalg::*;

fn random_matrix<const N: usize>(rng: &mut fastrand::Rng) -> Matrix<f64, N> {
    Matrix::from_fn(|_, _| rng.f64() * 20.0 - 10.0)
}

#[test]
fn mat2() {
    let m = Mat2f::from_slice(&[1.0, 2.0, 3.0, 4.0]);
    assert_eq!(m.transpose().all(), [1.0, 3.0, 2.0, 4.0]);
    assert_eq!(m.inverse().unwrap().all(), [-2.0, 1.0, 1.5, -0.5]);
}

#[test]
fn mat3_vector_transforms() {
    let m = Mat3f::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    assert_eq!(m.multiply_vec2(vec2(1.0, 2.0)), vec2(8.0, 20.0));

    let m = Mat3f::from_slice(&[-1.0, 2.0, -3.0, 4.0, -5.0, 6.0, 7.0, -8.0, 9.0]);
    assert_eq!(m.multiply_vec3(vec3(5.0, -7.0, 6.0)), vec3(-37.0, 91.0, 145.0));
    assert_eq!(m * vec3(5.0, -7.0, 6.0), vec3(-37.0, 91.0, 145.0));
}

#[test]
fn normalize_lengths() {
    let mut rng = fastrand::Rng::with_seed(0x1b87_3593);
    for _ in 0..500 {
        let v = vec3(rng.f32(), rng.f32(), rng.f32()) * 8.0 - Vec3f::splat(4.0);
        assert_approx_eq!(v.normalize().length(), 1.0).abs(1e-5);
    }
    assert_eq!(Vec3f::ZERO.normalize(), Vec3f::ZERO);
}

#[test]
fn inverse_round_trip_mat2() {
    let mut rng = fastrand::Rng::with_seed(0xcc9e_2d51);
    for _ in 0..200 {
        let m = random_matrix::<2>(&mut rng);
        if m.determinant().abs() < 1.0 {
            continue;
        }
        let inv = m.inverse().unwrap();
        assert_approx_eq!(m * inv, Mat2::IDENTITY, "m={m:?}").abs(1e-8);
        assert_approx_eq!(inv.inverse().unwrap(), m, "m={m:?}").abs(1e-6);
    }
}

#[test]
fn inverse_round_trip_mat3() {
    let mut rng = fastrand::Rng::with_seed(0x1b87_3593);
    for _ in 0..200 {
        let m = random_matrix::<3>(&mut rng);
        if m.determinant().abs() < 1.0 {
            continue;
        }
        let inv = m.inverse().unwrap();
        assert_approx_eq!(m * inv, Mat3::IDENTITY, "m={m:?}").abs(1e-8);
        assert_approx_eq!(inv.inverse().unwrap(), m, "m={m:?}").abs(1e-6);
    }
}

#[test]
fn inverse_round_trip_mat4() {
    let mut rng = fastrand::Rng::with_seed(0xe654_6b64);
    for _ in 0..200 {
        let m = random_matrix::<4>(&mut rng);
        if m.determinant().abs() < 1.0 {
            continue;
        }
        let inv = m.inverse().unwrap();
        assert_approx_eq!(m * inv, Mat4::IDENTITY, "m={m:?}").abs(1e-8);
        assert_approx_eq!(inv.inverse().unwrap(), m, "m={m:?}").abs(1e-6);

        // Both inversion paths of the upper-left block agree.
        assert_eq!(m.to_inverse_mat3(), m.to_mat3().inverse());
    }
}

#[test]
fn singular_matrices_are_left_alone() {
    let mut m = Mat4f::from_slice(&[
        1.0, 2.0, 3.0, 4.0, //
        2.0, 4.0, 6.0, 8.0, //
        0.0, 1.0, 0.0, 1.0, //
        5.0, 0.0, 5.0, 0.0,
    ]);
    let before = m;
    assert_eq!(m.determinant(), 0.0);
    assert!(m.inverse_mut().is_none());
    assert_eq!(m, before);
    assert_eq!(m.to_inverse_mat3(), m.to_mat3().inverse());
}

#[test]
fn quaternion_round_trip() {
    let mut rng = fastrand::Rng::with_seed(0xe654_6b64);
    for _ in 0..200 {
        let axis = (vec3(rng.f32(), rng.f32(), rng.f32()) - Vec3f::splat(0.5)).normalize();
        let angle = rng.f32() * 6.0 - 3.0;
        let q = Quat::from_axis_angle(axis, angle);

        let back = q.to_mat3().to_quat();
        let back = if back.w * q.w < 0.0 { -back } else { back };
        assert_approx_eq!(back, q, "axis={axis:?}, angle={angle}").abs(1e-5);

        let m = Mat3f::IDENTITY.rotate(angle, axis).unwrap();
        let v = vec3(1.0, 2.0, 3.0);
        assert_approx_eq!(m.transpose() * v, q.rotate_vec3(v)).abs(1e-4);
    }

    let q = Quat::from_axis_angle(Vec3f::Z, FRAC_PI_2);
    assert_approx_eq!(q.rotate_vec3(Vec3f::X), Vec3f::Y).abs(1e-6);
}
