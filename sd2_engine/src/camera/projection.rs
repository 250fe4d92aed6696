/// Projection — the two mutually exclusive ways a camera maps camera space to NDC.
///
/// Left-handed, +Z forward, depth range [0, 1].

use glam::Mat4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Parallel projection. `size` is the vertical extent in world units;
    /// the horizontal extent is `size * aspect`.
    Orthographic { size: f32, near_z: f32, far_z: f32 },
    /// Perspective projection with a vertical field of view in degrees.
    Perspective { fov_degrees: f32, near_z: f32, far_z: f32 },
}

impl Default for Projection {
    /// A 2x2 orthographic volume over depth 0..1 (identity at aspect 1)
    fn default() -> Self {
        Projection::Orthographic { size: 2.0, near_z: 0.0, far_z: 1.0 }
    }
}

impl Projection {
    /// Projection matrix for a target with the given width / height ratio
    pub fn matrix(&self, aspect: f32) -> Mat4 {
        match *self {
            Projection::Orthographic { size, near_z, far_z } => {
                let half_height = size * 0.5;
                let half_width = half_height * aspect;
                Mat4::orthographic_lh(-half_width, half_width, -half_height, half_height, near_z, far_z)
            }
            Projection::Perspective { fov_degrees, near_z, far_z } => {
                Mat4::perspective_lh(fov_degrees.to_radians(), aspect, near_z, far_z)
            }
        }
    }

    pub fn near_z(&self) -> f32 {
        match *self {
            Projection::Orthographic { near_z, .. } | Projection::Perspective { near_z, .. } => near_z,
        }
    }

    pub fn far_z(&self) -> f32 {
        match *self {
            Projection::Orthographic { far_z, .. } | Projection::Perspective { far_z, .. } => far_z,
        }
    }

    pub fn is_perspective(&self) -> bool {
        matches!(self, Projection::Perspective { .. })
    }

    /// Parameters that produce a non-invertible or inside-out matrix
    pub fn is_degenerate(&self) -> bool {
        match *self {
            Projection::Orthographic { size, near_z, far_z } => {
                !(size > 0.0) || near_z == far_z
            }
            Projection::Perspective { fov_degrees, near_z, far_z } => {
                !(fov_degrees > 0.0 && fov_degrees < 180.0) || !(near_z > 0.0) || near_z == far_z
            }
        }
    }
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
