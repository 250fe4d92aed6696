/// Rgba: 8-bit per channel color, as used for clear colors.

use bytemuck::{Pod, Zeroable};
use glam::Vec4;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    pub const RED: Self = Self::new(255, 0, 0, 255);
    pub const GREEN: Self = Self::new(0, 255, 0, 255);
    pub const BLUE: Self = Self::new(0, 0, 255, 255);
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Channels normalized to 0..1, the form clear commands take
    pub fn to_vec4(self) -> Vec4 {
        Vec4::new(self.r as f32, self.g as f32, self.b as f32, self.a as f32) / 255.0
    }

    /// Build from normalized channels, clamping to 0..1
    pub fn from_vec4(v: Vec4) -> Self {
        let c = (v.clamp(Vec4::ZERO, Vec4::ONE) * 255.0).round();
        Self::new(c.x as u8, c.y as u8, c.z as u8, c.w as u8)
    }

    /// Packed as 0xRRGGBBAA
    pub fn to_u32(self) -> u32 {
        u32::from_be_bytes([self.r, self.g, self.b, self.a])
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
