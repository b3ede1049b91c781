//! Backend-agnostic graphics device trait
//!
//! The renderer never talks to OpenGL directly. Everything it needs from the
//! GPU goes through [`GraphicsDevice`], which keeps model, shader and frame
//! loop logic testable without a context. The production implementation is
//! [`crate::render::gl::GlowDevice`].

use std::fmt;

use bitflags::bitflags;

/// Shader pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    /// Vertex shader
    Vertex,
    /// Fragment shader
    Fragment,
}

impl ShaderStage {
    /// File extension used under `resources/shaders/`
    pub fn extension(self) -> &'static str {
        match self {
            Self::Vertex => "vert",
            Self::Fragment => "frag",
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex => write!(f, "vertex"),
            Self::Fragment => write!(f, "fragment"),
        }
    }
}

bitflags! {
    /// Framebuffer planes to clear
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ClearMask: u32 {
        /// Color attachment
        const COLOR = 1 << 0;
        /// Depth attachment
        const DEPTH = 1 << 1;
    }
}

/// Synchronous graphics device
///
/// Mirrors the small slice of the OpenGL API the renderer uses. All calls
/// are immediate; fallible creation calls return the driver message and the
/// caller decides how fatal it is. Handles are plain copyable values and carry
/// no ownership; the types that create them ([`crate::render::Model`],
/// [`crate::render::ShaderProgram`]) are responsible for deleting them.
pub trait GraphicsDevice {
    /// GPU buffer handle
    type Buffer: Copy + fmt::Debug;
    /// Vertex array (attribute layout) handle
    type VertexArray: Copy + fmt::Debug;
    /// Single shader stage handle
    type Shader: Copy + fmt::Debug;
    /// Linked program handle
    type Program: Copy + fmt::Debug;
    /// Uniform location within a linked program
    type UniformLocation: Clone + fmt::Debug;

    /// Create a static array buffer holding `data`
    fn create_buffer(&self, data: &[u8]) -> Result<Self::Buffer, String>;

    /// Delete a buffer
    fn delete_buffer(&self, buffer: Self::Buffer);

    /// Create an empty vertex array
    fn create_vertex_array(&self) -> Result<Self::VertexArray, String>;

    /// Delete a vertex array
    fn delete_vertex_array(&self, vertex_array: Self::VertexArray);

    /// Make a vertex array current, or unbind with `None`
    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>);

    /// Record `buffer` as a tightly packed `vec3<f32>` stream at attribute
    /// `slot` of the currently bound vertex array
    fn bind_vec3_attribute(&self, slot: u32, buffer: Self::Buffer);

    /// Create an uncompiled shader object
    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String>;

    /// Upload source and compile; returns the compile status
    fn compile_shader(&self, shader: Self::Shader, source: &str) -> bool;

    /// Compiler diagnostic log
    fn shader_info_log(&self, shader: Self::Shader) -> String;

    /// Delete a shader object
    fn delete_shader(&self, shader: Self::Shader);

    /// Create an empty program object
    fn create_program(&self) -> Result<Self::Program, String>;

    /// Attach a compiled stage
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);

    /// Detach a stage
    fn detach_shader(&self, program: Self::Program, shader: Self::Shader);

    /// Link; returns the link status
    fn link_program(&self, program: Self::Program) -> bool;

    /// Linker diagnostic log
    fn program_info_log(&self, program: Self::Program) -> String;

    /// Delete a program object
    fn delete_program(&self, program: Self::Program);

    /// Make a program current, or unbind with `None`
    fn use_program(&self, program: Option<Self::Program>);

    /// Look up a uniform in a linked program
    fn uniform_location(&self, program: Self::Program, name: &str) -> Option<Self::UniformLocation>;

    /// Upload a `vec3` uniform on the current program
    fn uniform_vec3(&self, location: &Self::UniformLocation, value: [f32; 3]);

    /// Upload a column-major `mat4` uniform on the current program
    fn uniform_mat4(&self, location: &Self::UniformLocation, value: &[f32; 16]);

    /// Set the color used by [`GraphicsDevice::clear`]
    fn set_clear_color(&self, rgba: [f32; 4]);

    /// Enable depth testing with a less-than comparison
    fn enable_depth_test(&self);

    /// Clear framebuffer planes
    fn clear(&self, mask: ClearMask);

    /// Draw `count` vertices of the bound vertex array as a triangle list
    fn draw_triangles(&self, first: i32, count: i32);

    /// Pop the oldest pending device error, if any
    fn take_error(&self) -> Option<u32>;
}
