//! GPU-resident meshes
//!
//! A [`Model`] owns one non-indexed triangle list and the GPU objects that
//! hold it: a position buffer, a normal buffer and a vertex array recording
//! both attribute streams. Geometry is uploaded exactly once; every entity
//! that shows the mesh draws from the same handles.
//!
//! Attribute layout:
//!
//! | slot | stream   | format      | stride |
//! |------|----------|-------------|--------|
//! | 0    | position | 3 × f32     | packed |
//! | 1    | normal   | 3 × f32     | packed |

use std::rc::Rc;

use crate::error::{SetupError, SetupResult};
use crate::render::backend::GraphicsDevice;

/// Vertex attribute slot for positions
pub const POSITION_SLOT: u32 = 0;

/// Vertex attribute slot for normals
pub const NORMAL_SLOT: u32 = 1;

/// Mesh uploaded to the GPU
///
/// Dropping the model deletes its vertex array and both buffers.
pub struct Model<D: GraphicsDevice> {
    device: Rc<D>,
    vertices: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    vertex_buffer: D::Buffer,
    normal_buffer: D::Buffer,
    vertex_array: D::VertexArray,
    draw_count: i32,
}

/// Vertex count as the signed count a draw call takes
fn draw_count(vertices: usize) -> SetupResult<i32> {
    i32::try_from(vertices).map_err(|_| SetupError::GeometryTooLarge { vertices })
}

impl<D: GraphicsDevice> Model<D> {
    /// Upload a triangle list
    ///
    /// # Arguments
    /// * `device` - Device the buffers are created on
    /// * `vertices` - Positions, three per triangle
    /// * `normals` - One normal per position, index-parallel to `vertices`
    ///
    /// Empty, mismatched or oversized geometry is rejected before anything
    /// is created. If a later GPU object fails to create, the ones already
    /// created are deleted before the error is returned.
    pub fn new(
        device: Rc<D>,
        vertices: Vec<[f32; 3]>,
        normals: Vec<[f32; 3]>,
    ) -> SetupResult<Self> {
        if vertices.is_empty() {
            return Err(SetupError::EmptyGeometry);
        }
        if vertices.len() != normals.len() {
            return Err(SetupError::MismatchedGeometry {
                vertices: vertices.len(),
                normals: normals.len(),
            });
        }
        let draw_count = draw_count(vertices.len())?;

        let vertex_buffer = device
            .create_buffer(bytemuck::cast_slice(&vertices))
            .map_err(|reason| SetupError::ResourceCreation {
                resource: "vertex buffer",
                reason,
            })?;

        let normal_buffer = match device.create_buffer(bytemuck::cast_slice(&normals)) {
            Ok(buffer) => buffer,
            Err(reason) => {
                device.delete_buffer(vertex_buffer);
                return Err(SetupError::ResourceCreation {
                    resource: "normal buffer",
                    reason,
                });
            }
        };

        let vertex_array = match device.create_vertex_array() {
            Ok(vertex_array) => vertex_array,
            Err(reason) => {
                device.delete_buffer(normal_buffer);
                device.delete_buffer(vertex_buffer);
                return Err(SetupError::ResourceCreation {
                    resource: "vertex array",
                    reason,
                });
            }
        };

        device.bind_vertex_array(Some(vertex_array));
        device.bind_vec3_attribute(POSITION_SLOT, vertex_buffer);
        device.bind_vec3_attribute(NORMAL_SLOT, normal_buffer);
        device.bind_vertex_array(None);

        log::debug!(
            "Uploaded model: {} vertices, vertex array {:?}",
            vertices.len(),
            vertex_array
        );

        Ok(Self {
            device,
            vertices,
            normals,
            vertex_buffer,
            normal_buffer,
            vertex_array,
            draw_count,
        })
    }

    /// Number of vertices drawn per instance
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Positions as uploaded
    pub fn vertices(&self) -> &[[f32; 3]] {
        &self.vertices
    }

    /// Normals as uploaded
    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    /// Activate this model's attribute layout
    ///
    /// Layout state is global to the context, so this must run right before
    /// every draw of the model.
    pub fn bind_for_draw(&self) {
        self.device.bind_vertex_array(Some(self.vertex_array));
    }

    /// Draw the whole triangle list with the currently bound layout
    pub fn draw(&self) {
        self.device.draw_triangles(0, self.draw_count);
    }
}

impl<D: GraphicsDevice> Drop for Model<D> {
    fn drop(&mut self) {
        log::debug!("Releasing model vertex array {:?}", self.vertex_array);
        self.device.delete_vertex_array(self.vertex_array);
        self.device.delete_buffer(self.normal_buffer);
        self.device.delete_buffer(self.vertex_buffer);
    }
}
