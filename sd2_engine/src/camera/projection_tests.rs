use glam::{Mat4, Vec3};
use super::*;

const EPSILON: f32 = 1e-5;

#[test]
fn test_default_is_identity_at_unit_aspect() {
    let projection = Projection::default();
    assert!(projection.matrix(1.0).abs_diff_eq(Mat4::IDENTITY, EPSILON));
    assert!(!projection.is_perspective());
}

#[test]
fn test_orthographic_size_is_vertical_extent() {
    let projection = Projection::Orthographic { size: 10.0, near_z: 0.0, far_z: 100.0 };
    let m = projection.matrix(2.0);

    // Top edge at +5, right edge at +10
    assert!(m.project_point3(Vec3::new(0.0, 5.0, 0.0)).abs_diff_eq(Vec3::new(0.0, 1.0, 0.0), EPSILON));
    assert!(m.project_point3(Vec3::new(10.0, 0.0, 0.0)).abs_diff_eq(Vec3::new(1.0, 0.0, 0.0), EPSILON));
}

#[test]
fn test_orthographic_depth_range() {
    let projection = Projection::Orthographic { size: 2.0, near_z: 1.0, far_z: 11.0 };
    let m = projection.matrix(1.0);
    assert!((m.project_point3(Vec3::new(0.0, 0.0, 1.0)).z - 0.0).abs() < EPSILON);
    assert!((m.project_point3(Vec3::new(0.0, 0.0, 11.0)).z - 1.0).abs() < EPSILON);
}

#[test]
fn test_perspective_matches_glam() {
    let projection = Projection::Perspective { fov_degrees: 60.0, near_z: 0.1, far_z: 100.0 };
    let expected = Mat4::perspective_lh(60.0_f32.to_radians(), 16.0 / 9.0, 0.1, 100.0);
    assert_eq!(projection.matrix(16.0 / 9.0), expected);
    assert!(projection.is_perspective());
}

#[test]
fn test_perspective_depth_range() {
    let projection = Projection::Perspective { fov_degrees: 90.0, near_z: 0.5, far_z: 50.0 };
    let m = projection.matrix(1.0);
    assert!(m.project_point3(Vec3::new(0.0, 0.0, 0.5)).z.abs() < EPSILON);
    assert!((m.project_point3(Vec3::new(0.0, 0.0, 50.0)).z - 1.0).abs() < 1e-4);
}

#[test]
fn test_near_far_accessors() {
    let ortho = Projection::Orthographic { size: 4.0, near_z: -1.0, far_z: 1.0 };
    assert_eq!(ortho.near_z(), -1.0);
    assert_eq!(ortho.far_z(), 1.0);

    let persp = Projection::Perspective { fov_degrees: 45.0, near_z: 0.1, far_z: 10.0 };
    assert_eq!(persp.near_z(), 0.1);
    assert_eq!(persp.far_z(), 10.0);
}

#[test]
fn test_degenerate_parameters() {
    assert!(Projection::Orthographic { size: 0.0, near_z: 0.0, far_z: 1.0 }.is_degenerate());
    assert!(Projection::Orthographic { size: 1.0, near_z: 2.0, far_z: 2.0 }.is_degenerate());
    assert!(Projection::Perspective { fov_degrees: 180.0, near_z: 0.1, far_z: 1.0 }.is_degenerate());
    assert!(Projection::Perspective { fov_degrees: 60.0, near_z: 0.0, far_z: 1.0 }.is_degenerate());
    assert!(Projection::Perspective { fov_degrees: f32::NAN, near_z: 0.1, far_z: 1.0 }.is_degenerate());

    assert!(!Projection::default().is_degenerate());
    assert!(!Projection::Perspective { fov_degrees: 60.0, near_z: 0.1, far_z: 100.0 }.is_degenerate());
}
