/// Camera — view/projection configuration plus render-target bindings.
///
/// Targets are referenced by `TextureKey` into an external `TextureManager`.
/// The camera never frees them; a key that outlives its texture is reported
/// as `Error::InvalidResource` the next time it is resolved.

use glam::{Mat4, UVec2, Vec2, Vec3};
use crate::error::Result;
use crate::math::{Rgba, Transform};
use crate::texture::{Texture, TextureKey, TextureManager, TextureUsage};
use crate::{engine_debug, engine_err, engine_warn};
use super::camera_pass::{CameraPass, TargetBinding};
use super::clear::{CameraClearFlags, ClearState};
use super::projection::Projection;

#[derive(Debug, Clone)]
pub struct Camera {
    transform: Transform,
    projection: Projection,
    color_target: Option<TextureKey>,
    depth_stencil_target: Option<TextureKey>,
    clear: ClearState,
    output_size: UVec2,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// Camera at the origin looking down +Z, default orthographic
    /// projection, rendering to the backbuffer with no clears.
    pub fn new() -> Self {
        Self {
            transform: Transform::IDENTITY,
            projection: Projection::default(),
            color_target: None,
            depth_stencil_target: None,
            clear: ClearState::default(),
            output_size: UVec2::ONE,
        }
    }

    // ===== TARGETS =====

    /// Render color output into `target`. `None` means the default backbuffer.
    ///
    /// Only stores the key. Call `resolve_output_size` afterwards (or use
    /// `bind_color_target`) so the camera's matrices and client space follow
    /// the new target; `pass_description` rejects a camera that was not.
    pub fn set_color_target(&mut self, target: Option<TextureKey>) {
        self.color_target = target;
    }

    /// `set_color_target` followed by `resolve_output_size`
    pub fn bind_color_target(
        &mut self,
        target: Option<TextureKey>,
        textures: &TextureManager,
    ) -> Result<UVec2> {
        self.color_target = target;
        self.resolve_output_size(textures)
    }

    /// Use `target` as depth-stencil buffer. `None` means no depth-stencil.
    pub fn set_depth_stencil_target(&mut self, target: Option<TextureKey>) {
        self.depth_stencil_target = target;
    }

    pub fn color_target(&self) -> Option<TextureKey> {
        self.color_target
    }

    pub fn depth_stencil_target(&self) -> Option<TextureKey> {
        self.depth_stencil_target
    }

    /// Create a depth-stencil texture matching the current color target
    /// (or the backbuffer) and bind it.
    ///
    /// The texture belongs to `textures`; destroy it there when done.
    ///
    /// # Errors
    ///
    /// - `InvalidResource` if the color target key is stale or not a color target
    /// - `InvalidResource` if a depth-stencil target that still exists is
    ///   already bound (unbind or destroy it first)
    /// - whatever `TextureManager::create_depth_stencil` reports for `name`
    pub fn create_matching_depth_stencil_target(
        &mut self,
        textures: &mut TextureManager,
        name: &str,
    ) -> Result<TextureKey> {
        if let Some(bound) = self.depth_stencil_target.and_then(|key| textures.texture(key)) {
            return Err(engine_err!("sd2::Camera", InvalidResource,
                "Depth-stencil '{}' is already bound", bound.name()));
        }

        let size = self.resolve_output_size(textures)?;
        let key = textures.create_depth_stencil(name, size)?;
        self.depth_stencil_target = Some(key);

        engine_debug!("sd2::Camera", "Bound matching depth-stencil '{}' ({}x{})",
            name, size.x, size.y);

        Ok(key)
    }

    // ===== CLEAR =====

    /// Store what to clear before drawing. Does not clear anything itself.
    pub fn set_clear_mode(&mut self, flags: CameraClearFlags, color: Rgba, depth: f32, stencil: u8) {
        self.clear = ClearState { flags, color, depth, stencil };
    }

    pub fn clear_state(&self) -> &ClearState {
        &self.clear
    }

    pub fn clear_flags(&self) -> CameraClearFlags {
        self.clear.flags
    }

    pub fn clear_color(&self) -> Rgba {
        self.clear.color
    }

    pub fn clear_depth(&self) -> f32 {
        self.clear.depth
    }

    pub fn clear_stencil(&self) -> u8 {
        self.clear.stencil
    }

    // ===== TRANSFORM =====

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    pub fn position(&self) -> Vec3 {
        self.transform.position
    }

    /// Absolute position in world space
    pub fn set_position(&mut self, position: Vec3) {
        self.transform.position = position;
    }

    /// Relative move in world space
    pub fn translate(&mut self, offset: Vec3) {
        self.transform.translate(offset);
    }

    /// Orientation from Euler angles in degrees, see `Transform::set_pitch_roll_yaw`
    pub fn set_pitch_roll_yaw_rotation(&mut self, pitch: f32, roll: f32, yaw: f32) {
        self.transform.set_pitch_roll_yaw(pitch, roll, yaw);
    }

    pub fn forward(&self) -> Vec3 {
        self.transform.forward()
    }

    pub fn right(&self) -> Vec3 {
        self.transform.right()
    }

    pub fn up(&self) -> Vec3 {
        self.transform.up()
    }

    // ===== PROJECTION =====

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Replace the active projection
    pub fn set_projection(&mut self, projection: Projection) {
        if projection.is_degenerate() {
            engine_warn!("sd2::Camera", "Degenerate projection {:?}", projection);
        }
        self.projection = projection;
    }

    /// `size` is the vertical extent of the view volume in world units
    pub fn set_projection_orthographic(&mut self, size: f32, near_z: f32, far_z: f32) {
        self.set_projection(Projection::Orthographic { size, near_z, far_z });
    }

    /// `fov` is the vertical field of view in degrees
    pub fn set_projection_perspective(&mut self, fov: f32, near_z: f32, far_z: f32) {
        self.set_projection(Projection::Perspective { fov_degrees: fov, near_z, far_z });
    }

    // ===== OUTPUT =====

    /// Client area in pixels. Components are clamped to at least 1.
    pub fn set_output_size(&mut self, size: UVec2) {
        self.output_size = size.max(UVec2::ONE);
    }

    pub fn output_size(&self) -> UVec2 {
        self.output_size
    }

    /// Width / height of the output
    pub fn aspect_ratio(&self) -> f32 {
        let size = self.output_size.as_vec2();
        size.x / size.y
    }

    /// Take the output size from the bound color target (or the backbuffer).
    pub fn resolve_output_size(&mut self, textures: &TextureManager) -> Result<UVec2> {
        let size = self.color_size(textures)?;
        self.set_output_size(size);
        Ok(self.output_size)
    }

    // ===== DERIVED MATRICES =====

    /// World space -> camera space (inverse of the camera's world matrix)
    pub fn view_matrix(&self) -> Mat4 {
        self.transform.world_matrix().inverse()
    }

    /// Camera space -> NDC for the current output aspect ratio
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection.matrix(self.aspect_ratio())
    }

    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    // ===== COORDINATE CONVERSION =====

    /// Client pixel (origin top-left, +Y down) at NDC depth `ndc_z` -> world space
    pub fn client_to_world(&self, client: Vec2, ndc_z: f32) -> Vec3 {
        let size = self.output_size.as_vec2();
        let ndc = Vec3::new(
            client.x / size.x * 2.0 - 1.0,
            1.0 - client.y / size.y * 2.0,
            ndc_z,
        );
        self.view_projection_matrix().inverse().project_point3(ndc)
    }

    /// World space -> client pixel; `z` of the result is the NDC depth
    pub fn world_to_client(&self, world: Vec3) -> Vec3 {
        let size = self.output_size.as_vec2();
        let ndc = self.view_projection_matrix().project_point3(world);
        Vec3::new(
            (ndc.x + 1.0) * 0.5 * size.x,
            (1.0 - ndc.y) * 0.5 * size.y,
            ndc.z,
        )
    }

    // ===== RENDERER HAND-OFF =====

    /// Validate the bound targets and snapshot the state a renderer needs.
    ///
    /// # Errors
    ///
    /// - `InvalidResource` if a target key is stale or bound in the wrong slot
    /// - `InvalidParameter` if depth-stencil and color sizes differ
    /// - `InvalidParameter` if the output size no longer matches the color
    ///   output (target changed or backbuffer resized without `resolve_output_size`)
    pub fn pass_description(&self, textures: &TextureManager) -> Result<CameraPass> {
        let size = self.color_size(textures)?;

        if let Some(key) = self.depth_stencil_target {
            let depth = lookup(textures, key, TextureUsage::DepthStencil)?;
            if depth.size() != size {
                return Err(engine_err!("sd2::Camera", InvalidParameter,
                    "Depth-stencil '{}' is {}x{} but color output is {}x{}",
                    depth.name(), depth.width(), depth.height(), size.x, size.y));
            }
        }

        if self.output_size != size {
            return Err(engine_err!("sd2::Camera", InvalidParameter,
                "Output size {}x{} does not match color output {}x{}; call resolve_output_size",
                self.output_size.x, self.output_size.y, size.x, size.y));
        }

        let mut clear_flags = self.clear.flags;
        if self.depth_stencil_target.is_none() && clear_flags.intersects(CameraClearFlags::DEPTH_STENCIL) {
            engine_warn!("sd2::Camera", "Depth/stencil clear requested without a depth-stencil target");
            clear_flags.remove(CameraClearFlags::DEPTH_STENCIL);
        }

        Ok(CameraPass {
            color: match self.color_target {
                Some(key) => TargetBinding::Texture(key),
                None => TargetBinding::Backbuffer,
            },
            depth_stencil: self.depth_stencil_target,
            size,
            clear_flags,
            clear_color: self.clear.color.to_vec4(),
            clear_depth: self.clear.depth,
            clear_stencil: self.clear.stencil,
            view: self.view_matrix(),
            projection: self.projection_matrix(),
        })
    }

    fn color_size(&self, textures: &TextureManager) -> Result<UVec2> {
        match self.color_target {
            None => Ok(textures.backbuffer_size().max(UVec2::ONE)),
            Some(key) => Ok(lookup(textures, key, TextureUsage::ColorTarget)?.size()),
        }
    }
}

fn lookup(textures: &TextureManager, key: TextureKey, usage: TextureUsage) -> Result<&Texture> {
    let texture = textures.texture(key)
        .ok_or_else(|| engine_err!("sd2::Camera", InvalidResource,
            "{:?} target {:?} no longer exists", usage, key))?;

    if texture.usage() != usage {
        return Err(engine_err!("sd2::Camera", InvalidResource,
            "Texture '{}' is a {:?} texture, bound as {:?}", texture.name(), texture.usage(), usage));
    }

    Ok(texture)
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
