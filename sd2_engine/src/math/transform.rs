/// Transform: position, orientation and scale of an object in world space.

use glam::{EulerRot, Mat4, Quat, Vec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Identity transform placed at `position`
    pub fn from_position(position: Vec3) -> Self {
        Self { position, ..Self::IDENTITY }
    }

    /// Move by `offset` in world space
    pub fn translate(&mut self, offset: Vec3) {
        self.position += offset;
    }

    /// Replace the rotation from Euler angles in degrees.
    ///
    /// Composition is `Ry(yaw) * Rx(pitch) * Rz(roll)`: roll is applied
    /// first, then pitch, then yaw. With +Z forward this gives the usual
    /// "yaw turns around up, pitch tilts the nose, roll banks" behaviour.
    pub fn set_pitch_roll_yaw(&mut self, pitch: f32, roll: f32, yaw: f32) {
        self.rotation = Quat::from_euler(
            EulerRot::YXZ,
            yaw.to_radians(),
            pitch.to_radians(),
            roll.to_radians(),
        );
    }

    /// Current rotation as `(pitch, roll, yaw)` in degrees
    pub fn pitch_roll_yaw(&self) -> (f32, f32, f32) {
        let (yaw, pitch, roll) = self.rotation.to_euler(EulerRot::YXZ);
        (pitch.to_degrees(), roll.to_degrees(), yaw.to_degrees())
    }

    /// Local-to-world matrix (T * R * S)
    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Local +X axis in world space
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Local +Y axis in world space
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Local +Z axis in world space
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
