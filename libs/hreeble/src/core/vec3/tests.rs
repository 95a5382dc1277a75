//! Tests for the Vec3 helpers.

use super::*;
use approx::assert_relative_eq;

#[test]
fn newell_follows_winding() {
    let ccw = [Vec3::ZERO, Vec3::X, Vec3::new(1.0, 1.0, 0.0), Vec3::Y];
    let cw: Vec<Vec3> = ccw.iter().rev().copied().collect();
    assert_relative_eq!(newell(&ccw).normalize().z, 1.0);
    assert_relative_eq!(newell(&cw).normalize().z, -1.0);
}

#[test]
fn area_of_unit_square() {
    let square = [
        Vec3::ZERO,
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
    ];
    assert_relative_eq!(polygon_area(&square), 1.0);
}


#[test]
fn area_of_collinear_points_is_zero() {
    let line = [Vec3::ZERO, Vec3::X, Vec3::new(2.0, 0.0, 0.0)];
    assert_eq!(polygon_area(&line), 0.0);
}
