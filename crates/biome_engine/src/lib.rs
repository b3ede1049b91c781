//! # Biome Engine
//!
//! A small first-person renderer: a lit cube field seen through a free-look
//! camera, drawn with OpenGL 4.1 core.
//!
//! ## Features
//!
//! - **Free look**: mouse yaw/pitch with clamped pitch and wrapped yaw
//! - **Fly movement**: WASD along the look frame, Shift/Ctrl along world up
//! - **Shared meshes**: one GPU upload drawn by many entities
//! - **Scoped GPU resources**: every buffer, vertex array and program is
//!   released by `Drop`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::rc::Rc;
//! use biome_engine::prelude::*;
//!
//! fn main() -> Result<(), EngineError> {
//!     let config = EngineConfig::embedded().map_err(SetupError::from)?;
//!     let mut window = GlfwWindow::new(config.window_width, config.window_height, &config.title)?;
//!     let device = Rc::new(window.create_device());
//!     let program = ShaderProgram::from_resources(device.clone(), &config.shader_name)?;
//!     let scene = Scene::cube_grid(device.clone(), &config)?;
//!     let start = window.time();
//!     let mut frame_loop = FrameLoop::new(device, config, program, scene, start)?;
//!     frame_loop.run(&mut window)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod config;
pub mod error;
pub mod foundation;
pub mod frame_loop;
pub mod input;
pub mod platform;
pub mod render;
pub mod scene;

#[cfg(test)]
mod testing;

pub use config::EngineConfig;
pub use error::{EngineError, RuntimeError, SetupError};
pub use frame_loop::{FrameLoop, LoopState};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::EngineConfig,
        error::{EngineError, RuntimeError, SetupError, SetupResult},
        foundation::math::{Mat4, Vec3},
        frame_loop::{FrameLoop, LoopState},
        input::KeyCode,
        platform::{GlfwWindow, WindowBackend},
        render::{Camera, GlowDevice, GraphicsDevice, Model, ShaderProgram},
        scene::{Entity, Scene, Transform},
    };
}
