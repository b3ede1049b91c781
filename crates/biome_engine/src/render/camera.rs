//! # Perspective camera
//!
//! Holds the projection parameters for the session. The projection matrix is
//! computed once at construction; the window is fixed size and there is no
//! zoom, so it never changes afterwards.
//!
//! The view matrix is not owned here. It follows the player and is rebuilt
//! every frame from the player's position and look basis through
//! [`Camera::view_matrix`].

use crate::error::{SetupError, SetupResult};
use crate::foundation::math::{utils, Mat4, Mat4Ext, Vec3};

/// Distance to the near clipping plane
pub const NEAR_PLANE: f64 = 0.1;

/// Distance to the far clipping plane
pub const FAR_PLANE: f64 = 100.0;

/// Fixed perspective camera
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    fov: f64,
    aspect: f64,
    near: f64,
    far: f64,
    projection: Mat4,
}

impl Camera {
    /// Create a perspective camera for a `width` x `height` viewport
    ///
    /// # Arguments
    /// * `fov_degrees` - Vertical field of view in degrees
    /// * `width` - Viewport width in pixels
    /// * `height` - Viewport height in pixels
    ///
    /// Fails when the viewport has no area, since the aspect ratio would not
    /// be finite.
    pub fn new(fov_degrees: f64, width: f64, height: f64) -> SetupResult<Self> {
        if !(width > 0.0 && height > 0.0) {
            return Err(SetupError::InvalidViewport { width, height });
        }
        let aspect = width / height;
        let fov_radians = utils::deg_to_rad(fov_degrees);
        let projection = Mat4::perspective(fov_radians, aspect, NEAR_PLANE, FAR_PLANE);
        log::debug!("Camera: fov {fov_degrees} deg, aspect {aspect:.3}");
        Ok(Self {
            fov: fov_degrees,
            aspect,
            near: NEAR_PLANE,
            far: FAR_PLANE,
            projection,
        })
    }

    /// Field of view in degrees
    pub fn fov(&self) -> f64 {
        self.fov
    }

    /// Viewport aspect ratio (width / height)
    pub fn aspect(&self) -> f64 {
        self.aspect
    }

    /// Near and far clipping distances
    pub fn clip_planes(&self) -> (f64, f64) {
        (self.near, self.far)
    }

    /// Projection matrix, fixed for the session
    pub fn projection_matrix(&self) -> &Mat4 {
        &self.projection
    }

    /// Look-at view matrix for an eye looking along `forward`
    pub fn view_matrix(eye: &Vec3, forward: &Vec3, up: &Vec3) -> Mat4 {
        Mat4::look_at(eye, &(eye + forward), up)
    }
}
