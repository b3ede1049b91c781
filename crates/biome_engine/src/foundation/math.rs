//! Math utilities and types
//!
//! All game-logic math (positions, transforms, view and projection) is done in
//! double precision. The [`gpu`] submodule is the only place values are
//! narrowed to the single precision the graphics interface expects.

pub use nalgebra::{Matrix4, Point3, Vector3};

/// 3D vector type used by game logic
pub type Vec3 = Vector3<f64>;

/// 4x4 matrix type used by game logic
pub type Mat4 = Matrix4<f64>;

/// World-space up axis
pub const WORLD_UP: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f64 = std::f64::consts::PI;

    /// 2 * Pi, one full revolution
    pub const TAU: f64 = std::f64::consts::TAU;

    /// Pi / 2, the vertical look limit
    pub const HALF_PI: f64 = std::f64::consts::FRAC_PI_2;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f64 = PI / 180.0;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f64) -> f64 {
        degrees * constants::DEG_TO_RAD
    }

    /// Wrap an angle into a single revolution `[0, 2π)`
    ///
    /// Uses the Euclidean remainder so negative angles wrap upwards instead of
    /// staying negative.
    pub fn wrap_angle(radians: f64) -> f64 {
        let wrapped = radians.rem_euclid(constants::TAU);
        // rem_euclid can round up to exactly TAU for tiny negative inputs
        if wrapped >= constants::TAU {
            0.0
        } else {
            wrapped
        }
    }
}

/// Extension trait for Mat4 with additional convenience methods
pub trait Mat4Ext {
    /// Create a rotation matrix around the X axis
    fn rotation_x(angle: f64) -> Mat4;

    /// Create a rotation matrix around the Y axis
    fn rotation_y(angle: f64) -> Mat4;

    /// Create a translation matrix
    fn translation(offset: &Vec3) -> Mat4;

    /// Create an OpenGL perspective projection matrix (clip depth -1..1)
    fn perspective(fov_y: f64, aspect: f64, near: f64, far: f64) -> Mat4;

    /// Create a right-handed look-at view matrix
    fn look_at(eye: &Vec3, target: &Vec3, up: &Vec3) -> Mat4;
}

impl Mat4Ext for Mat4 {
    fn rotation_x(angle: f64) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::x_axis(), angle)
    }

    fn rotation_y(angle: f64) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::y_axis(), angle)
    }

    fn translation(offset: &Vec3) -> Mat4 {
        Mat4::new_translation(offset)
    }

    fn perspective(fov_y: f64, aspect: f64, near: f64, far: f64) -> Mat4 {
        // nalgebra follows the gluPerspective convention, which is what the
        // OpenGL clip space expects
        Mat4::new_perspective(aspect, fov_y, near, far)
    }

    fn look_at(eye: &Vec3, target: &Vec3, up: &Vec3) -> Mat4 {
        Mat4::look_at_rh(&Point3::from(*eye), &Point3::from(*target), up)
    }
}

/// Single-precision values at the graphics boundary
///
/// Every conversion here is a component-wise `as` cast. Nothing is
/// re-derived in f32.
pub mod gpu {
    use super::{Mat4, Vec3};

    /// Narrow a vector for upload
    pub fn vec3(value: &Vec3) -> [f32; 3] {
        [value.x as f32, value.y as f32, value.z as f32]
    }

    /// Narrow a matrix for upload, column-major as OpenGL expects
    pub fn mat4(value: &Mat4) -> [f32; 16] {
        let mut out = [0.0f32; 16];
        for (dst, src) in out.iter_mut().zip(value.as_slice()) {
            *dst = *src as f32;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_wrap_angle_stays_in_one_revolution() {
        let above = utils::wrap_angle(constants::TAU + 0.5);
        assert_relative_eq!(above, 0.5, epsilon = 1e-12);
        let below = utils::wrap_angle(-0.5);
        assert_relative_eq!(below, constants::TAU - 0.5, epsilon = 1e-12);
        assert_eq!(utils::wrap_angle(constants::TAU), 0.0);
        let tiny = utils::wrap_angle(-1e-18);
        assert!((0.0..constants::TAU).contains(&tiny));
    }

    #[test]
    fn test_gpu_mat4_is_componentwise_cast() {
        let mut m = Mat4::identity();
        m[(0, 3)] = 1.000_000_000_1;
        m[(2, 1)] = -3.25;
        let out = gpu::mat4(&m);
        for (narrow, wide) in out.iter().zip(m.as_slice()) {
            assert_eq!(*narrow, *wide as f32);
        }
        // column-major: translation x lives at index 12
        assert_eq!(out[12], 1.0);
        assert_eq!(out[6], -3.25);
    }

    #[test]
    fn test_gpu_vec3_is_componentwise_cast() {
        let v = Vec3::new(0.1, -2.5, 1e10);
        assert_eq!(gpu::vec3(&v), [0.1f64 as f32, -2.5, 1e10f64 as f32]);
    }

    #[test]
    fn test_look_at_maps_eye_to_origin() {
        let eye = Vec3::new(1.0, 2.0, 3.0);
        let view = Mat4::look_at(&eye, &(eye + Vec3::x()), &WORLD_UP);
        let p = view.transform_point(&Point3::from(eye));
        assert_relative_eq!(p.coords, Vec3::zeros(), epsilon = 1e-12);

        // looking down +X puts a point ahead of the eye on the -Z view axis
        let ahead = view.transform_point(&Point3::from(eye + Vec3::x() * 2.0));
        assert_relative_eq!(ahead.coords, Vec3::new(0.0, 0.0, -2.0), epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_helpers() {
        let ry = Mat4::rotation_y(constants::HALF_PI);
        let v = ry.transform_vector(&Vec3::x());
        assert_relative_eq!(v, Vec3::new(0.0, 0.0, -1.0), epsilon = 1e-12);

        let rx = Mat4::rotation_x(constants::HALF_PI);
        let v = rx.transform_vector(&Vec3::y());
        assert_relative_eq!(v, Vec3::new(0.0, 0.0, 1.0), epsilon = 1e-12);
    }
}
