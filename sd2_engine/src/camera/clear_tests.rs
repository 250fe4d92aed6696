use crate::math::Rgba;
use super::*;

#[test]
fn test_flag_bits() {
    assert_eq!(CameraClearFlags::COLOR.bits(), 1);
    assert_eq!(CameraClearFlags::DEPTH.bits(), 2);
    assert_eq!(CameraClearFlags::STENCIL.bits(), 4);
}

#[test]
fn test_flags_combine_with_or() {
    let flags = CameraClearFlags::COLOR | CameraClearFlags::DEPTH;
    assert!(flags.contains(CameraClearFlags::COLOR));
    assert!(flags.contains(CameraClearFlags::DEPTH));
    assert!(!flags.contains(CameraClearFlags::STENCIL));

    // Order of combination does not matter
    assert_eq!(flags, CameraClearFlags::DEPTH | CameraClearFlags::COLOR);
    assert_eq!(CameraClearFlags::ALL, CameraClearFlags::COLOR | CameraClearFlags::DEPTH_STENCIL);
}

#[test]
fn test_default_clear_state() {
    let clear = ClearState::default();
    assert!(clear.flags.is_empty());
    assert_eq!(clear.color, Rgba::WHITE);
    assert_eq!(clear.depth, 1.0);
    assert_eq!(clear.stencil, 0);
    assert!(!clear.clears_color());
}

#[test]
fn test_clear_state_queries() {
    let clear = ClearState {
        flags: CameraClearFlags::COLOR | CameraClearFlags::STENCIL,
        ..ClearState::default()
    };
    assert!(clear.clears_color());
    assert!(!clear.clears_depth());
    assert!(clear.clears_stencil());
}
