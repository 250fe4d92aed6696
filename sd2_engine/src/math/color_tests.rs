use glam::Vec4;
use super::*;

#[test]
fn test_default_is_white() {
    assert_eq!(Rgba::default(), Rgba::WHITE);
}

#[test]
fn test_to_vec4_normalizes() {
    assert_eq!(Rgba::WHITE.to_vec4(), Vec4::ONE);
    assert_eq!(Rgba::TRANSPARENT.to_vec4(), Vec4::ZERO);
    assert_eq!(Rgba::RED.to_vec4(), Vec4::new(1.0, 0.0, 0.0, 1.0));
}

#[test]
fn test_from_vec4_clamps() {
    let c = Rgba::from_vec4(Vec4::new(2.0, -1.0, 0.5, 1.0));
    assert_eq!(c, Rgba::new(255, 0, 128, 255));
}

#[test]
fn test_to_u32_packing() {
    assert_eq!(Rgba::new(0x11, 0x22, 0x33, 0x44).to_u32(), 0x1122_3344);
}

#[test]
fn test_pod_layout() {
    let c = Rgba::rgb(1, 2, 3);
    let bytes: &[u8] = bytemuck::bytes_of(&c);
    assert_eq!(bytes, &[1, 2, 3, 255]);
}
