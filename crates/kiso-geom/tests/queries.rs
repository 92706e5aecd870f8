use kiso_geom::{Bounds2, Ray2};
use kiso_linalg::{assert_approx_eq, vec2};

#[test]
fn ordered_construction() {
    let bounds = Bounds2::new_ordered(vec2(-5.0, 1.0), vec2(5.0, -2.0));
    assert_eq!(bounds.min, vec2(-5.0, -2.0));
    assert_eq!(bounds.max, vec2(5.0, 1.0));
    assert_eq!(bounds.area(), 30.0);
}

#[test]
fn ray_against_bounds() {
    let bounds = Bounds2::new(vec2(-5.0, -4.0), vec2(5.0, 3.0));
    assert!(bounds.intersects_ray(&Ray2::new(vec2(10.0, 10.0), vec2(1.0, 1.0))));
    assert!(!bounds.intersects_ray(&Ray2::new(vec2(10.0, 10.0), vec2(1.0, -1.0))));
}

#[test]
fn parallel_rays() {
    let a = Ray2::new(vec2(1.0, 0.0), vec2(1.0, 3.0));
    let b = Ray2::new(vec2(0.0, 5.0), vec2(-2.0, -6.0));
    assert!(a.is_parallel(&b));
    assert!(b.is_parallel(&a));
    assert!(!a.is_parallel(&Ray2::new(vec2(1.0, 0.0), vec2(3.0, 1.0))));
}

#[test]
fn angle_between_rays() {
    let a = Ray2::new(vec2(1.0, 0.0), vec2(1.0, 2.0));
    let b = Ray2::new(vec2(3.0, -5.0), vec2(-6.0, -6.0));
    assert_approx_eq!(a.angle_to(&b), 2.8198420).abs(1e-5);
    assert_approx_eq!(b.angle_to(&a), a.angle_to(&b));
}

#[test]
fn overlapping_bounds_contain_shared_points() {
    let a = Bounds2::new_ordered(vec2(4.0, 4.0), vec2(-1.0, -1.0));
    let b = Bounds2::new(vec2(2.0, -3.0), vec2(6.0, 0.5));
    assert!(a.intersects_bounds(&b));
    assert!(b.intersects_bounds(&a));

    let shared = vec2(3.0, 0.0);
    assert!(a.contains_point(shared));
    assert!(b.contains_point(shared));
}

#[test]
fn approximate_comparison() {
    let a = Bounds2::new(vec2(0.0, 0.0), vec2(1.0, 1.0));
    let b = Bounds2::new(vec2(0.0, 1e-7), vec2(1.0, 1.0));
    assert_ne!(a, b);
    assert_approx_eq!(a, b).abs(1e-6);

    let ray = Ray2::new(vec2(0.0, 0.0), vec2(1.0, 1.0));
    let nudged = Ray2::new(vec2(0.0, 0.0), vec2(1.0, 1.0 + 1e-6));
    assert_ne!(ray, nudged);
    assert_approx_eq!(ray, nudged).ulps(16);
}
