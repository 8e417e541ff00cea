//! Perspective camera for the journey. Only `position.z` animates - the
//! transition tweens it between scene depths.

use glam::{Mat4, Vec3};

/// Camera rest distance in front of a scene's depth position.
pub const REST_OFFSET: f32 = 10.0;

#[derive(Clone, Debug)]
pub struct Camera {
    pub position: Vec3,
    /// Vertical field of view, radians.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Camera {
    /// Camera parked in front of `depth` (scene 0 at boot).
    pub fn at_depth(depth: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, depth + REST_OFFSET),
            fov_y: 75f32.to_radians(),
            near: 0.1,
            far: 200.0,
        }
    }

    /// The z coordinate the camera rests at for a scene depth.
    pub fn rest_z(depth: f32) -> f32 {
        depth + REST_OFFSET
    }

    /// View matrix: looking down -Z, Y up.
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position - Vec3::Z, Vec3::Y)
    }

    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, aspect.max(1e-3), self.near, self.far)
    }

    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.projection(aspect) * self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_position_tracks_depth() {
        let cam = Camera::at_depth(-50.0);
        assert_eq!(cam.position.z, -40.0);
        assert_eq!(Camera::rest_z(-50.0), -40.0);
    }
}
