//! # Rendering
//!
//! Thin layer over an OpenGL 4.1 core context.
//!
//! ## Architecture
//!
//! ```text
//! Camera ──┐
//!          ├─> ShaderProgram (uniforms) ─> Model (vertex array + draw)
//! Scene ───┘                 │
//!                            v
//!                     GraphicsDevice (glow)
//! ```
//!
//! Every GPU object is owned by a Rust value and released in its `Drop`. The
//! device handle is shared through `Rc`, which also keeps it on the thread
//! that owns the context.

pub mod backend;
pub mod camera;
pub mod gl;
pub mod model;
pub mod shader;

pub use backend::{ClearMask, GraphicsDevice, ShaderStage};
pub use camera::Camera;
pub use gl::GlowDevice;
pub use model::Model;
pub use shader::{Shader, ShaderProgram, UniformValue};
