//! Math module: value types the camera is built on.
//!
//! Linear algebra itself comes from `glam`; this module only adds the
//! spatial `Transform` and the 8-bit `Rgba` color.

mod color;
mod transform;

pub use color::Rgba;
pub use transform::Transform;
