/// Central render-target texture table.
///
/// Owns every texture a camera may point at, plus the dimensions of the
/// default backbuffer used when a camera has no explicit color target.

use glam::UVec2;
use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use crate::error::Result;
use crate::{engine_bail, engine_debug};
use super::texture::{Texture, TextureKey, TextureUsage};

/// Texture table (optionally managed by `Engine`)
///
/// Names are unique; keys remain valid until their texture is destroyed.
pub struct TextureManager {
    textures: SlotMap<TextureKey, Texture>,
    names: FxHashMap<String, TextureKey>,
    backbuffer_size: UVec2,
}

impl TextureManager {
    /// Create an empty table for a backbuffer of the given size
    pub fn new(backbuffer_size: UVec2) -> Self {
        Self {
            textures: SlotMap::with_key(),
            names: FxHashMap::default(),
            backbuffer_size,
        }
    }

    /// Dimensions of the default backbuffer
    pub fn backbuffer_size(&self) -> UVec2 {
        self.backbuffer_size
    }

    /// Update the backbuffer dimensions (window resize)
    pub fn set_backbuffer_size(&mut self, size: UVec2) {
        self.backbuffer_size = size;
    }

    /// Create a color render target
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` if either dimension is zero
    /// - `InvalidResource` if a texture with the same name already exists
    pub fn create_color_target(&mut self, name: &str, size: UVec2) -> Result<TextureKey> {
        self.create_texture(name, size, TextureUsage::ColorTarget)
    }

    /// Create a depth-stencil target
    ///
    /// The caller decides when to destroy it; cameras pointing at it only
    /// hold its key.
    ///
    /// # Errors
    ///
    /// Same as `create_color_target`.
    pub fn create_depth_stencil(&mut self, name: &str, size: UVec2) -> Result<TextureKey> {
        self.create_texture(name, size, TextureUsage::DepthStencil)
    }

    fn create_texture(&mut self, name: &str, size: UVec2, usage: TextureUsage) -> Result<TextureKey> {
        if size.x == 0 || size.y == 0 {
            engine_bail!("sd2::TextureManager", InvalidParameter,
                "Texture '{}' has zero size {}x{}", name, size.x, size.y);
        }
        if self.names.contains_key(name) {
            engine_bail!("sd2::TextureManager", InvalidResource,
                "Texture '{}' already exists", name);
        }

        let key = self.textures.insert(Texture::new(name.to_string(), size, usage));
        self.names.insert(name.to_string(), key);

        engine_debug!("sd2::TextureManager", "Created {:?} texture '{}' ({}x{})",
            usage, name, size.x, size.y);

        Ok(key)
    }

    /// Get a texture by key (`None` if destroyed)
    pub fn texture(&self, key: TextureKey) -> Option<&Texture> {
        self.textures.get(key)
    }

    /// Get a texture by name
    pub fn texture_by_name(&self, name: &str) -> Option<&Texture> {
        self.names.get(name).and_then(|&key| self.textures.get(key))
    }

    /// Look up the key of a named texture
    pub fn key_by_name(&self, name: &str) -> Option<TextureKey> {
        self.names.get(name).copied()
    }

    /// Whether the key still refers to a live texture
    pub fn contains(&self, key: TextureKey) -> bool {
        self.textures.contains_key(key)
    }

    /// Destroy a texture, returning it. Keys held elsewhere become stale.
    pub fn destroy_texture(&mut self, key: TextureKey) -> Option<Texture> {
        let texture = self.textures.remove(key)?;
        self.names.remove(texture.name());
        engine_debug!("sd2::TextureManager", "Destroyed texture '{}'", texture.name());
        Some(texture)
    }

    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    /// All texture names (unordered)
    pub fn texture_names(&self) -> Vec<&str> {
        self.names.keys().map(|k| k.as_str()).collect()
    }

    /// Destroy all textures
    pub fn clear(&mut self) {
        self.textures.clear();
        self.names.clear();
    }
}

#[cfg(test)]
#[path = "texture_manager_tests.rs"]
mod tests;
