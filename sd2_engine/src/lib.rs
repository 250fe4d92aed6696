/*!
# SD2 Engine

Camera and render-target bookkeeping for a small teaching renderer.

## Architecture

- **Camera**: transform, projection, clear state and target bindings;
  derives view/projection matrices and converts between client and world space
- **Projection**: orthographic or perspective, one active at a time
- **TextureManager**: table owning render-target textures, addressed by `TextureKey`
- **Engine**: global logger and optional shared `TextureManager`

Drawing, clearing and GPU binding belong to the renderer that consumes a
`CameraPass`; none of that lives here.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod camera;
pub mod math;
pub mod texture;

// Main sd2 namespace module
pub mod sd2 {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton
    pub use crate::engine::Engine;

    // Logging sub-module (types only, macros live at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Camera sub-module
    pub mod camera {
        pub use crate::camera::*;
    }

    // Math sub-module
    pub mod math {
        pub use crate::math::*;
    }

    // Texture sub-module
    pub mod texture {
        pub use crate::texture::*;
    }
}

// Re-export math library at crate root
pub use glam;
