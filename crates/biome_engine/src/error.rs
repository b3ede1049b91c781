//! Engine error types
//!
//! Every failure is fatal. Setup errors abort before the first frame, and
//! runtime errors end the frame loop; there is no retry or degraded mode.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;
use crate::render::backend::ShaderStage;

/// Failures while bringing up the window, device, shaders or scene
#[derive(Error, Debug)]
pub enum SetupError {
    /// GLFW could not be initialised
    #[error("Window system initialization failed: {0}")]
    WindowInit(String),

    /// The window or its OpenGL context could not be created
    #[error("Window creation failed ({width}x{height})")]
    WindowCreation {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },

    /// The embedded configuration is unusable
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Projection parameters that cannot produce a finite matrix
    #[error("Invalid viewport {width}x{height}")]
    InvalidViewport {
        /// Viewport width
        width: f64,
        /// Viewport height
        height: f64,
    },

    /// A shader source file could not be read
    #[error("Failed to read shader source {}: {source}", path.display())]
    ShaderSource {
        /// File that was requested
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// A shader stage failed to compile
    #[error("Failed to compile {stage} shader:\n{source_text}\n{log}")]
    ShaderCompile {
        /// Stage that failed
        stage: ShaderStage,
        /// Compiler diagnostic log
        log: String,
        /// Offending source text
        source_text: String,
    },

    /// The program failed to link
    #[error("Failed to link program:\n{log}")]
    ProgramLink {
        /// Linker diagnostic log
        log: String,
    },

    /// A uniform the frame loop needs is not in the linked program
    #[error("Could not find location for uniform: {name}")]
    UniformNotFound {
        /// Uniform name
        name: String,
    },

    /// The device refused to create a GPU object
    #[error("Failed to create {resource}: {reason}")]
    ResourceCreation {
        /// Kind of object (buffer, vertex array, shader, program)
        resource: &'static str,
        /// Driver message
        reason: String,
    },

    /// A model was given no vertices
    #[error("Model has no vertices")]
    EmptyGeometry,

    /// Normals are not index-parallel to vertices
    #[error("Model has {vertices} vertices but {normals} normals")]
    MismatchedGeometry {
        /// Vertex count
        vertices: usize,
        /// Normal count
        normals: usize,
    },

    /// More vertices than a single draw call can address
    #[error("Model has {vertices} vertices, more than a single draw can address")]
    GeometryTooLarge {
        /// Vertex count
        vertices: usize,
    },
}

/// Failures inside the frame loop
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// The frame could not be presented
    #[error("Presentation failed: {0}")]
    Presentation(String),

    /// The graphics device reported an error code after a frame
    #[error("Graphics device error 0x{0:04X}")]
    Device(u32),
}

/// Top-level engine error
#[derive(Error, Debug)]
pub enum EngineError {
    /// Startup failure
    #[error("Setup error: {0}")]
    Setup(#[from] SetupError),

    /// Frame loop failure
    #[error("Runtime error: {0}")]
    Runtime(#[from] RuntimeError),
}

/// Result alias for setup operations
pub type SetupResult<T> = Result<T, SetupError>;
