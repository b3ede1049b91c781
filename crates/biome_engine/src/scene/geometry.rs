//! Built-in meshes

/// Vertices in the unit cube mesh
pub const CUBE_VERTEX_COUNT: usize = 36;

/// Unit cube centred on the origin, two triangles per face
///
/// Faces in order: -Z, +Z, -X, +X, -Y, +Y.
pub const CUBE_VERTICES: [[f32; 3]; CUBE_VERTEX_COUNT] = [
    [-0.5, -0.5, -0.5],
    [0.5, -0.5, -0.5],
    [0.5, 0.5, -0.5],
    [0.5, 0.5, -0.5],
    [-0.5, 0.5, -0.5],
    [-0.5, -0.5, -0.5],
    //
    [-0.5, -0.5, 0.5],
    [0.5, -0.5, 0.5],
    [0.5, 0.5, 0.5],
    [0.5, 0.5, 0.5],
    [-0.5, 0.5, 0.5],
    [-0.5, -0.5, 0.5],
    //
    [-0.5, 0.5, 0.5],
    [-0.5, 0.5, -0.5],
    [-0.5, -0.5, -0.5],
    [-0.5, -0.5, -0.5],
    [-0.5, -0.5, 0.5],
    [-0.5, 0.5, 0.5],
    //
    [0.5, 0.5, 0.5],
    [0.5, 0.5, -0.5],
    [0.5, -0.5, -0.5],
    [0.5, -0.5, -0.5],
    [0.5, -0.5, 0.5],
    [0.5, 0.5, 0.5],
    //
    [-0.5, -0.5, -0.5],
    [0.5, -0.5, -0.5],
    [0.5, -0.5, 0.5],
    [0.5, -0.5, 0.5],
    [-0.5, -0.5, 0.5],
    [-0.5, -0.5, -0.5],
    //
    [-0.5, 0.5, -0.5],
    [0.5, 0.5, -0.5],
    [0.5, 0.5, 0.5],
    [0.5, 0.5, 0.5],
    [-0.5, 0.5, 0.5],
    [-0.5, 0.5, -0.5],
];

const FACE_NORMALS: [[f32; 3]; 6] = [
    [0.0, 0.0, -1.0],
    [0.0, 0.0, 1.0],
    [-1.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [0.0, -1.0, 0.0],
    [0.0, 1.0, 0.0],
];

/// Per-vertex normals for [`CUBE_VERTICES`], flat per face
pub fn cube_normals() -> Vec<[f32; 3]> {
    FACE_NORMALS
        .iter()
        .flat_map(|normal| std::iter::repeat(*normal).take(6))
        .collect()
}

/// Cube positions and normals ready for [`crate::render::Model::new`]
pub fn cube() -> (Vec<[f32; 3]>, Vec<[f32; 3]>) {
    (CUBE_VERTICES.to_vec(), cube_normals())
}
