/// Clear configuration: which planes a camera resets before drawing.

use bitflags::bitflags;
use crate::math::Rgba;

bitflags! {
    /// Frame-buffer planes to clear. Bits are independent and combine with `|`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CameraClearFlags: u32 {
        const COLOR = 1 << 0;
        const DEPTH = 1 << 1;
        const STENCIL = 1 << 2;

        const DEPTH_STENCIL = Self::DEPTH.bits() | Self::STENCIL.bits();
        const ALL = Self::COLOR.bits() | Self::DEPTH.bits() | Self::STENCIL.bits();
    }
}

/// Clear values stored on a camera. Nothing here performs a clear.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClearState {
    pub flags: CameraClearFlags,
    pub color: Rgba,
    pub depth: f32,
    pub stencil: u8,
}

impl Default for ClearState {
    fn default() -> Self {
        Self {
            flags: CameraClearFlags::empty(),
            color: Rgba::WHITE,
            depth: 1.0,
            stencil: 0,
        }
    }
}

impl ClearState {
    pub fn clears_color(&self) -> bool {
        self.flags.contains(CameraClearFlags::COLOR)
    }

    pub fn clears_depth(&self) -> bool {
        self.flags.contains(CameraClearFlags::DEPTH)
    }

    pub fn clears_stencil(&self) -> bool {
        self.flags.contains(CameraClearFlags::STENCIL)
    }
}

#[cfg(test)]
#[path = "clear_tests.rs"]
mod tests;
