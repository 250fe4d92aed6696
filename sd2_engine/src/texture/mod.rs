//! Texture module
//!
//! Render-target textures live in a `TextureManager` table and are referred
//! to by `TextureKey`. Cameras hold keys, never the textures themselves.

mod texture;
mod texture_manager;

pub use texture::{Texture, TextureKey, TextureUsage};
pub use texture_manager::TextureManager;
