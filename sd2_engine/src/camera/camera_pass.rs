/// CameraPass — everything a renderer needs to draw one camera.
///
/// Produced by `Camera::pass_description()` after the camera's target keys
/// were validated against the texture table. Ephemeral: lives for one frame.

use glam::{Mat4, UVec2, Vec4};
use crate::texture::TextureKey;
use super::clear::CameraClearFlags;

/// Where color output goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetBinding {
    /// Default presentable surface
    Backbuffer,
    /// Texture from the texture table
    Texture(TextureKey),
}

#[derive(Debug, Clone)]
pub struct CameraPass {
    pub color: TargetBinding,
    pub depth_stencil: Option<TextureKey>,
    /// Dimensions shared by every bound target
    pub size: UVec2,
    /// Effective clears. Depth/stencil bits are dropped when no
    /// depth-stencil target is bound.
    pub clear_flags: CameraClearFlags,
    pub clear_color: Vec4,
    pub clear_depth: f32,
    pub clear_stencil: u8,
    pub view: Mat4,
    pub projection: Mat4,
}

impl CameraPass {
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }

    pub fn renders_to_backbuffer(&self) -> bool {
        self.color == TargetBinding::Backbuffer
    }
}
