//! Camera module — camera, projection, clear state and pass description.
//!
//! The engine does NOT store or manage cameras. They are owned and driven
//! by the game layer, which sets them up during frame setup and hands
//! their `CameraPass` to whatever renderer it uses.

mod camera;
mod camera_pass;
mod clear;
mod projection;

pub use camera::Camera;
pub use camera_pass::{CameraPass, TargetBinding};
pub use clear::{CameraClearFlags, ClearState};
pub use projection::Projection;
