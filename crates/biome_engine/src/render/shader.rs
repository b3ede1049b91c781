//! Shader compilation, program linking and uniform upload
//!
//! Sources are plain GLSL loaded from `resources/shaders/<name>.vert` and
//! `resources/shaders/<name>.frag`. Compile and link failures carry the
//! driver's diagnostic log; both are fatal at startup.
//!
//! [`ShaderProgram::set_uniform`] is where double-precision game values are
//! narrowed to single precision, through [`crate::foundation::math::gpu`].

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use crate::error::{SetupError, SetupResult};
use crate::foundation::math::{gpu, Mat4, Vec3};
use crate::render::backend::{GraphicsDevice, ShaderStage};

/// Directory shader sources are loaded from, relative to the working directory
pub const SHADER_DIR: &str = "resources/shaders";

/// A compiled shader stage
///
/// Only lives until it is linked into a [`ShaderProgram`]; dropping it
/// deletes the stage object.
pub struct Shader<D: GraphicsDevice> {
    device: Rc<D>,
    handle: D::Shader,
}

impl<D: GraphicsDevice> Shader<D> {
    /// Compile one stage from source
    ///
    /// On failure the shader object is deleted and the error carries both
    /// the compiler log and the source that was rejected.
    pub fn compile(device: Rc<D>, stage: ShaderStage, source: &str) -> SetupResult<Self> {
        let handle = device
            .create_shader(stage)
            .map_err(|reason| SetupError::ResourceCreation {
                resource: "shader",
                reason,
            })?;

        if !device.compile_shader(handle, source) {
            let log = device.shader_info_log(handle);
            device.delete_shader(handle);
            return Err(SetupError::ShaderCompile {
                stage,
                log,
                source_text: source.to_string(),
            });
        }

        log::debug!("Compiled {stage} shader {handle:?}");
        Ok(Self { device, handle })
    }

    /// Load `<dir>/<name>.<vert|frag>` and compile it
    pub fn from_file(
        device: Rc<D>,
        dir: &Path,
        name: &str,
        stage: ShaderStage,
    ) -> SetupResult<Self> {
        let path = dir.join(format!("{name}.{}", stage.extension()));
        let source = match fs::read_to_string(&path) {
            Ok(source) => source,
            Err(source) => return Err(SetupError::ShaderSource { path, source }),
        };
        log::info!("Loaded {stage} shader source {}", path.display());
        Self::compile(device, stage, &source)
    }
}

impl<D: GraphicsDevice> Drop for Shader<D> {
    fn drop(&mut self) {
        self.device.delete_shader(self.handle);
    }
}

/// Values that can be uploaded as uniforms
pub trait UniformValue {
    /// Narrow to single precision and upload to `location` on the bound program
    fn upload<D: GraphicsDevice>(&self, device: &D, location: &D::UniformLocation);
}

impl UniformValue for Vec3 {
    fn upload<D: GraphicsDevice>(&self, device: &D, location: &D::UniformLocation) {
        device.uniform_vec3(location, gpu::vec3(self));
    }
}

impl UniformValue for Mat4 {
    fn upload<D: GraphicsDevice>(&self, device: &D, location: &D::UniformLocation) {
        device.uniform_mat4(location, &gpu::mat4(self));
    }
}

/// Linked GPU program with a uniform location cache
///
/// Dropping the program deletes it.
pub struct ShaderProgram<D: GraphicsDevice> {
    device: Rc<D>,
    handle: D::Program,
    uniform_cache: HashMap<String, D::UniformLocation>,
}

impl<D: GraphicsDevice> ShaderProgram<D> {
    /// Link compiled stages into a program
    ///
    /// The stages are detached after linking and released when this returns,
    /// whether or not linking succeeded. A failed program is deleted before
    /// the error is returned.
    pub fn link(device: Rc<D>, shaders: Vec<Shader<D>>) -> SetupResult<Self> {
        let handle = device
            .create_program()
            .map_err(|reason| SetupError::ResourceCreation {
                resource: "program",
                reason,
            })?;

        for shader in &shaders {
            device.attach_shader(handle, shader.handle);
        }

        let linked = device.link_program(handle);

        for shader in &shaders {
            device.detach_shader(handle, shader.handle);
        }
        drop(shaders);

        if !linked {
            let log = device.program_info_log(handle);
            device.delete_program(handle);
            return Err(SetupError::ProgramLink { log });
        }

        log::info!("Linked shader program {handle:?}");
        Ok(Self {
            device,
            handle,
            uniform_cache: HashMap::new(),
        })
    }

    /// Compile `<dir>/<name>.vert` and `<dir>/<name>.frag`, then link them
    pub fn from_files(device: Rc<D>, dir: &Path, name: &str) -> SetupResult<Self> {
        let vertex = Shader::from_file(device.clone(), dir, name, ShaderStage::Vertex)?;
        let fragment = Shader::from_file(device.clone(), dir, name, ShaderStage::Fragment)?;
        Self::link(device, vec![vertex, fragment])
    }

    /// Compile and link the named shader pair from [`SHADER_DIR`]
    pub fn from_resources(device: Rc<D>, name: &str) -> SetupResult<Self> {
        Self::from_files(device, Path::new(SHADER_DIR), name)
    }

    /// Make this program current
    pub fn bind(&self) {
        self.device.use_program(Some(self.handle));
    }

    /// Location of a named uniform
    ///
    /// The first lookup of each name asks the device; later lookups come from
    /// the cache. A name the linked program does not use is an error.
    pub fn uniform_location(&mut self, name: &str) -> SetupResult<D::UniformLocation> {
        if let Some(location) = self.uniform_cache.get(name) {
            return Ok(location.clone());
        }

        let location = self
            .device
            .uniform_location(self.handle, name)
            .ok_or_else(|| SetupError::UniformNotFound {
                name: name.to_string(),
            })?;
        log::debug!("Uniform '{name}' at {location:?}");
        self.uniform_cache.insert(name.to_string(), location.clone());
        Ok(location)
    }

    /// Upload a uniform on this program; the program must be bound
    pub fn set_uniform<V: UniformValue>(&self, location: &D::UniformLocation, value: &V) {
        value.upload(self.device.as_ref(), location);
    }
}

impl<D: GraphicsDevice> Drop for ShaderProgram<D> {
    fn drop(&mut self) {
        log::debug!("Releasing shader program {:?}", self.handle);
        self.device.delete_program(self.handle);
    }
}
