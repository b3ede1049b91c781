//! Position and look orientation for placed objects
//!
//! Orientation is two angles rather than a quaternion: yaw around the world
//! vertical and pitch above or below the horizon. Roll does not exist.

use crate::foundation::math::{constants, utils, Mat4, Mat4Ext, Vec3, WORLD_UP};

/// Orthonormal look frame derived from yaw and pitch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    /// Look direction
    pub forward: Vec3,
    /// Strafe direction, horizontal
    pub right: Vec3,
    /// Camera up, perpendicular to both
    pub up: Vec3,
}

impl Basis {
    /// Compute the look frame for `pitch` and `yaw`
    ///
    /// `right` is derived from `forward` before `up` is derived from both;
    /// reversing that order flips the strafe direction.
    pub fn from_angles(pitch: f64, yaw: f64) -> Self {
        let forward = Vec3::new(
            pitch.cos() * yaw.cos(),
            pitch.sin(),
            pitch.cos() * yaw.sin(),
        );
        let right = forward.cross(&WORLD_UP);
        // Looking straight up or down leaves no horizontal component to cross
        // with; fall back to the heading the yaw alone gives.
        let right = match right.try_normalize(1e-12) {
            Some(right) => right,
            None => Vec3::new(-yaw.sin(), 0.0, yaw.cos()),
        };
        let up = right.cross(&forward).normalize();
        Self { forward, right, up }
    }
}

/// Position plus yaw/pitch orientation
///
/// Yaw is kept in `[0, 2π)` and pitch in `[-π/2, π/2]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// World position
    pub position: Vec3,
    yaw: f64,
    pitch: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::from_position(Vec3::zeros())
    }
}

impl Transform {
    /// Transform at `position` facing +X
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    /// Horizontal look angle, radians in `[0, 2π)`
    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    /// Vertical look angle, radians in `[-π/2, π/2]`
    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Turn by the given angles
    ///
    /// Yaw wraps around one revolution; pitch saturates at straight up and
    /// straight down so the view never flips over.
    pub fn add_look_input(&mut self, delta_yaw: f64, delta_pitch: f64) {
        self.yaw = utils::wrap_angle(self.yaw + delta_yaw);
        let pitch = self.pitch + delta_pitch;
        self.pitch = pitch.clamp(-constants::HALF_PI, constants::HALF_PI);
    }

    /// Current look frame
    pub fn basis(&self) -> Basis {
        Basis::from_angles(self.pitch, self.yaw)
    }

    /// Move `speed * delta_time` units along `axis`
    ///
    /// Calls are additive; two keys held together simply sum their moves.
    pub fn translate(&mut self, axis: &Vec3, delta_time: f64, speed: f64) {
        self.position += axis * (delta_time * speed);
    }

    /// Placement matrix: translation · rotationX(pitch) · rotationY(yaw)
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::translation(&self.position)
            * Mat4::rotation_x(self.pitch)
            * Mat4::rotation_y(self.yaw)
    }
}
