/// A render destination owned by the `TextureManager`.

use glam::UVec2;
use slotmap::new_key_type;

new_key_type! {
    /// Stable, non-owning handle to a texture in a `TextureManager`.
    ///
    /// A key stays valid until its own texture is destroyed. Using it
    /// afterwards is reported as `Error::InvalidResource`, never UB.
    pub struct TextureKey;
}

/// What a texture can be bound as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureUsage {
    /// Color attachment (RGBA8)
    ColorTarget,
    /// Combined depth (24 bit) + stencil (8 bit) attachment
    DepthStencil,
}

/// Render-target texture description.
///
/// Textures can only be created via `TextureManager`.
#[derive(Debug, Clone)]
pub struct Texture {
    name: String,
    size: UVec2,
    usage: TextureUsage,
}

impl Texture {
    pub(crate) fn new(name: String, size: UVec2, usage: TextureUsage) -> Self {
        Self { name, size, usage }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Dimensions in pixels
    pub fn size(&self) -> UVec2 {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.size.x
    }

    pub fn height(&self) -> u32 {
        self.size.y
    }

    pub fn usage(&self) -> TextureUsage {
        self.usage
    }

    pub fn is_depth_stencil(&self) -> bool {
        self.usage == TextureUsage::DepthStencil
    }
}
