//! Face mesh construction for cube-sphere planets: grid tessellation, shape
//! displacement, derived normals, and GPU-ready buffers.

pub mod error;
pub mod face_mesh;
pub mod mesh_data;
pub mod normals;
pub mod shape;
pub mod vertex_format;

pub use error::MeshError;
pub use face_mesh::{FaceMeshBuilder, grid_index, index_count, validate_resolution, vertex_count};
pub use mesh_data::{MeshData, PlanetVertex};
pub use normals::compute_vertex_normals;
pub use shape::{ShapeGenerator, UnitSphere};
pub use vertex_format::{PLANET_VERTEX_ATTRIBUTES, PLANET_VERTEX_LAYOUT, planet_vertex_buffer_layout};
