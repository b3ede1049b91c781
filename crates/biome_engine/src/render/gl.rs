//! OpenGL implementation of [`GraphicsDevice`] on top of `glow`
//!
//! The context must be current on the calling thread for the whole lifetime
//! of the device. [`crate::platform::GlfwWindow`] makes it current before the
//! function pointers are loaded and never releases it.

use glow::HasContext;

use crate::render::backend::{ClearMask, GraphicsDevice, ShaderStage};

/// Components per position/normal attribute
const VEC3_COMPONENTS: i32 = 3;

/// OpenGL device backed by a loaded `glow` context
pub struct GlowDevice {
    gl: glow::Context,
}

impl GlowDevice {
    /// Wrap an already loaded context
    pub fn new(gl: glow::Context) -> Self {
        Self { gl }
    }

    /// Load OpenGL function pointers through `loader`
    ///
    /// # Safety
    /// `loader` must return valid function pointers for the context that is
    /// current on this thread, and that context must stay current for as long
    /// as the device is used.
    pub unsafe fn from_loader<F>(loader: F) -> Self
    where
        F: FnMut(&str) -> *const std::os::raw::c_void,
    {
        Self::new(glow::Context::from_loader_function(loader))
    }

    /// Driver version string, for startup logging
    pub fn version_string(&self) -> String {
        // SAFETY: the context is current (type invariant)
        unsafe { self.gl.get_parameter_string(glow::VERSION) }
    }
}

// SAFETY (all methods): every call goes to the context that was current when
// the device was created, which stays current on this thread. Handles passed
// in were created by this same context.
impl GraphicsDevice for GlowDevice {
    type Buffer = glow::NativeBuffer;
    type VertexArray = glow::NativeVertexArray;
    type Shader = glow::NativeShader;
    type Program = glow::NativeProgram;
    type UniformLocation = glow::NativeUniformLocation;

    fn create_buffer(&self, data: &[u8]) -> Result<Self::Buffer, String> {
        unsafe {
            let buffer = self.gl.create_buffer()?;
            self.gl.bind_buffer(glow::ARRAY_BUFFER, Some(buffer));
            self.gl.buffer_data_u8_slice(glow::ARRAY_BUFFER, data, glow::STATIC_DRAW);
            self.gl.bind_buffer(glow::ARRAY_BUFFER, None);
            Ok(buffer)
        }
    }

    fn delete_buffer(&self, buffer: Self::Buffer) {
        unsafe { self.gl.delete_buffer(buffer) }
    }

    fn create_vertex_array(&self) -> Result<Self::VertexArray, String> {
        unsafe { self.gl.create_vertex_array() }
    }

    fn delete_vertex_array(&self, vertex_array: Self::VertexArray) {
        unsafe { self.gl.delete_vertex_array(vertex_array) }
    }

    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>) {
        unsafe { self.gl.bind_vertex_array(vertex_array) }
    }

    fn bind_vec3_attribute(&self, slot: u32, buffer: Self::Buffer) {
        unsafe {
            self.gl.enable_vertex_attrib_array(slot);
            self.gl.bind_buffer(glow::ARRAY_BUFFER, Some(buffer));
            // stride 0: tightly packed, one attribute per buffer
            self.gl.vertex_attrib_pointer_f32(slot, VEC3_COMPONENTS, glow::FLOAT, false, 0, 0);
            self.gl.bind_buffer(glow::ARRAY_BUFFER, None);
        }
    }

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String> {
        let kind = match stage {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        };
        unsafe { self.gl.create_shader(kind) }
    }

    fn compile_shader(&self, shader: Self::Shader, source: &str) -> bool {
        unsafe {
            self.gl.shader_source(shader, source);
            self.gl.compile_shader(shader);
            self.gl.get_shader_compile_status(shader)
        }
    }

    fn shader_info_log(&self, shader: Self::Shader) -> String {
        unsafe { self.gl.get_shader_info_log(shader) }
    }

    fn delete_shader(&self, shader: Self::Shader) {
        unsafe { self.gl.delete_shader(shader) }
    }

    fn create_program(&self) -> Result<Self::Program, String> {
        unsafe { self.gl.create_program() }
    }

    fn attach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { self.gl.attach_shader(program, shader) }
    }

    fn detach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { self.gl.detach_shader(program, shader) }
    }

    fn link_program(&self, program: Self::Program) -> bool {
        unsafe {
            self.gl.link_program(program);
            self.gl.get_program_link_status(program)
        }
    }

    fn program_info_log(&self, program: Self::Program) -> String {
        unsafe { self.gl.get_program_info_log(program) }
    }

    fn delete_program(&self, program: Self::Program) {
        unsafe { self.gl.delete_program(program) }
    }

    fn use_program(&self, program: Option<Self::Program>) {
        unsafe { self.gl.use_program(program) }
    }

    fn uniform_location(
        &self,
        program: Self::Program,
        name: &str,
    ) -> Option<Self::UniformLocation> {
        unsafe { self.gl.get_uniform_location(program, name) }
    }

    fn uniform_vec3(&self, location: &Self::UniformLocation, value: [f32; 3]) {
        unsafe { self.gl.uniform_3_f32_slice(Some(location), &value) }
    }

    fn uniform_mat4(&self, location: &Self::UniformLocation, value: &[f32; 16]) {
        unsafe {
            self.gl.uniform_matrix_4_f32_slice(Some(location), false, value);
        }
    }

    fn set_clear_color(&self, rgba: [f32; 4]) {
        unsafe { self.gl.clear_color(rgba[0], rgba[1], rgba[2], rgba[3]) }
    }

    fn enable_depth_test(&self) {
        unsafe {
            self.gl.enable(glow::DEPTH_TEST);
            self.gl.depth_func(glow::LESS);
        }
    }

    fn clear(&self, mask: ClearMask) {
        let mut bits = 0;
        if mask.contains(ClearMask::COLOR) {
            bits |= glow::COLOR_BUFFER_BIT;
        }
        if mask.contains(ClearMask::DEPTH) {
            bits |= glow::DEPTH_BUFFER_BIT;
        }
        unsafe { self.gl.clear(bits) }
    }

    fn draw_triangles(&self, first: i32, count: i32) {
        unsafe { self.gl.draw_arrays(glow::TRIANGLES, first, count) }
    }

    fn take_error(&self) -> Option<u32> {
        let code = unsafe { self.gl.get_error() };
        (code != glow::NO_ERROR).then_some(code)
    }
}
