use glam::{Mat4, Quat, Vec3};
use super::*;

const EPSILON: f32 = 1e-5;

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_default_is_identity() {
    let t = Transform::default();
    assert_eq!(t.position, Vec3::ZERO);
    assert_eq!(t.rotation, Quat::IDENTITY);
    assert_eq!(t.scale, Vec3::ONE);
    assert_eq!(t.world_matrix(), Mat4::IDENTITY);
}

#[test]
fn test_from_position() {
    let t = Transform::from_position(Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(t.world_matrix().w_axis.truncate(), Vec3::new(1.0, 2.0, 3.0));
}

// ============================================================================
// Translation
// ============================================================================

#[test]
fn test_translate_is_additive() {
    let mut t = Transform::from_position(Vec3::new(1.0, 1.0, 1.0));
    t.translate(Vec3::new(2.0, 0.0, -1.0));
    t.translate(Vec3::new(0.5, 3.0, 0.0));
    assert_eq!(t.position, Vec3::new(3.5, 4.0, 0.0));
}

// ============================================================================
// Rotation
// ============================================================================

#[test]
fn test_yaw_turns_forward_towards_right() {
    let mut t = Transform::default();
    t.set_pitch_roll_yaw(0.0, 0.0, 90.0);
    assert!(t.forward().abs_diff_eq(Vec3::X, EPSILON));
    assert!(t.up().abs_diff_eq(Vec3::Y, EPSILON));
}

#[test]
fn test_pitch_tilts_forward_down() {
    let mut t = Transform::default();
    t.set_pitch_roll_yaw(90.0, 0.0, 0.0);
    assert!(t.forward().abs_diff_eq(-Vec3::Y, EPSILON));
}

#[test]
fn test_roll_keeps_forward() {
    let mut t = Transform::default();
    t.set_pitch_roll_yaw(0.0, 45.0, 0.0);
    assert!(t.forward().abs_diff_eq(Vec3::Z, EPSILON));
    assert!(!t.up().abs_diff_eq(Vec3::Y, EPSILON));
}

#[test]
fn test_roll_applied_before_yaw() {
    let mut t = Transform::default();
    t.set_pitch_roll_yaw(0.0, 90.0, 90.0);
    // Roll maps +X onto +Y, yaw then leaves +Y alone.
    assert!(t.right().abs_diff_eq(Vec3::Y, EPSILON));
}

#[test]
fn test_set_rotation_replaces_previous() {
    let mut t = Transform::default();
    t.set_pitch_roll_yaw(30.0, 10.0, 45.0);
    t.set_pitch_roll_yaw(0.0, 0.0, 0.0);
    assert!(t.rotation.abs_diff_eq(Quat::IDENTITY, EPSILON));
}

#[test]
fn test_pitch_roll_yaw_read_back() {
    let mut t = Transform::default();
    t.set_pitch_roll_yaw(20.0, -15.0, 70.0);
    let (pitch, roll, yaw) = t.pitch_roll_yaw();
    assert!((pitch - 20.0).abs() < 1e-3);
    assert!((roll + 15.0).abs() < 1e-3);
    assert!((yaw - 70.0).abs() < 1e-3);
}
